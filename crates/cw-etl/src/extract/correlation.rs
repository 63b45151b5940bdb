use cw_database::models::MacroAverages;
use cw_database::StagingStore;
use tracing::info;

use crate::{CycleContext, EtlResult};

/// Most recent macro rows returned per cycle
pub const CORRELATION_ROW_LIMIT: i64 = 10;

/// Daily gold, interest-rate and stock mid prices over the correlation window
pub fn extract_correlations(
  store: &mut dyn StagingStore,
  ctx: &CycleContext,
) -> EtlResult<Vec<MacroAverages>> {
  let (from, to) = ctx.correlation_range()?;
  let rows = store.macro_averages(from, to, CORRELATION_ROW_LIMIT)?;
  if rows.is_empty() {
    info!("No macro data between {} and {}", from, to);
  }
  Ok(rows)
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::test_support::{context, MockStaging};
  use chrono::NaiveDate;

  #[test]
  fn test_window_and_limit_are_passed_through() {
    let ctx = context();
    let ts = ctx.now;
    let mut store = MockStaging::new();
    store.expect_macro_averages().times(1).returning(move |from, to, limit| {
      assert_eq!(from, NaiveDate::from_ymd_opt(2024, 11, 16).unwrap());
      assert_eq!(to, NaiveDate::from_ymd_opt(2024, 11, 20).unwrap());
      assert_eq!(limit, 10);
      Ok(vec![MacroAverages {
        ts,
        gold_price: Some(2650.5),
        interest_rate: None,
        stocks_price: Some(5900.0),
      }])
    });

    let rows = extract_correlations(&mut store, &ctx).unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].interest_rate, None);
  }
}
