//! Absolute and percentage change against a baseline

/// Change of `current` relative to `baseline`
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Change {
  pub absolute: f64,
  pub percent: f64,
}

impl Change {
  /// `percent` is 0 when the baseline is 0
  pub fn between(current: f64, baseline: f64) -> Self {
    let absolute = current - baseline;
    let percent = if baseline != 0.0 { absolute / baseline * 100.0 } else { 0.0 };
    Self { absolute, percent }
  }

  /// Change when a baseline may be missing; no baseline means no change
  pub fn against(current: f64, baseline: Option<f64>) -> Self {
    baseline.map(|b| Self::between(current, b)).unwrap_or_default()
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use cw_core::test_utils::{assert_approx_zero, assert_percentage_eq};

  #[test]
  fn test_change_positive() {
    let c = Change::between(100.0, 90.0);
    assert_percentage_eq(c.absolute, 10.0);
    assert_percentage_eq(c.percent, 11.11);
  }

  #[test]
  fn test_change_negative() {
    let c = Change::between(80.0, 100.0);
    assert_percentage_eq(c.absolute, -20.0);
    assert_percentage_eq(c.percent, -20.0);
  }

  #[test]
  fn test_zero_baseline_gives_zero_percent() {
    let c = Change::between(42.0, 0.0);
    assert_percentage_eq(c.absolute, 42.0);
    assert_approx_zero(c.percent);
  }

  #[test]
  fn test_missing_baseline() {
    let c = Change::against(42.0, None);
    assert_eq!(c, Change::default());
  }
}
