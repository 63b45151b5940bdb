//! Per-cycle clock and window arithmetic

use chrono::{NaiveDate, NaiveDateTime, TimeDelta, Utc};
use cw_core::EtlSettings;

use crate::{EtlError, EtlResult};

/// Everything an extractor needs to scope its reads for one cycle
#[derive(Debug, Clone)]
pub struct CycleContext {
  /// Reference instant for every window in the cycle (UTC)
  pub now: NaiveDateTime,
  pub settings: EtlSettings,
}

impl CycleContext {
  pub fn new(now: NaiveDateTime, settings: EtlSettings) -> Self {
    Self { now, settings }
  }

  /// Context anchored at the current UTC time
  pub fn starting_now(settings: EtlSettings) -> Self {
    Self::new(Utc::now().naive_utc(), settings)
  }

  /// Lower bound of the trailing extraction window
  pub fn window_start(&self) -> EtlResult<NaiveDateTime> {
    let span = TimeDelta::try_minutes(self.settings.window_minutes)
      .ok_or_else(|| out_of_range("window_minutes", self.settings.window_minutes))?;
    self
      .now
      .checked_sub_signed(span)
      .ok_or_else(|| out_of_range("window_minutes", self.settings.window_minutes))
  }

  /// Inclusive calendar-day range for the macro correlation extract
  pub fn correlation_range(&self) -> EtlResult<(NaiveDate, NaiveDate)> {
    let today = self.now.date();
    let from = TimeDelta::try_days(self.settings.correlation_days)
      .and_then(|span| today.checked_sub_signed(span))
      .ok_or_else(|| out_of_range("correlation_days", self.settings.correlation_days))?;
    Ok((from, today))
  }

  /// Lower bound of the close history used for indicators
  pub fn indicator_start(&self) -> EtlResult<NaiveDateTime> {
    TimeDelta::try_days(self.settings.indicator_days)
      .and_then(|span| self.now.checked_sub_signed(span))
      .ok_or_else(|| out_of_range("indicator_days", self.settings.indicator_days))
  }
}

fn out_of_range(setting: &str, value: i64) -> EtlError {
  EtlError::ConfigurationError(format!("{} = {} is out of range", setting, value))
}
