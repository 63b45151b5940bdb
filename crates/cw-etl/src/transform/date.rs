//! Calendar decomposition for `date_dim`

use chrono::{Datelike, NaiveDateTime, Timelike};
use cw_core::CANONICAL_TIMESTAMP_FORMAT;
use cw_database::models::NewDateDim;

use crate::{EtlError, EtlResult};

/// A timestamp as it may arrive from the staging store
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TimestampInput {
  /// Text in the canonical `%Y-%m-%d %H:%M:%S` layout
  Text(String),
  Structured(NaiveDateTime),
}

impl From<NaiveDateTime> for TimestampInput {
  fn from(ts: NaiveDateTime) -> Self {
    TimestampInput::Structured(ts)
  }
}

impl From<&str> for TimestampInput {
  fn from(text: &str) -> Self {
    TimestampInput::Text(text.to_string())
  }
}

impl TimestampInput {
  pub fn resolve(&self) -> EtlResult<NaiveDateTime> {
    match self {
      TimestampInput::Structured(ts) => Ok(*ts),
      TimestampInput::Text(text) => {
        NaiveDateTime::parse_from_str(text.trim(), CANONICAL_TIMESTAMP_FORMAT)
          .map_err(|e| EtlError::InvalidTimestamp(format!("{text:?}: {e}")))
      }
    }
  }
}

/// Split a timestamp into the `date_dim` attributes. `week` is the ISO-8601
/// week number and `day_of_week` the full English weekday name.
pub fn decompose(input: &TimestampInput) -> EtlResult<NewDateDim> {
  let ts = input.resolve()?;
  Ok(NewDateDim {
    ts: ts.format(CANONICAL_TIMESTAMP_FORMAT).to_string(),
    day: ts.day() as i32,
    month: ts.month() as i32,
    year: ts.year(),
    hour: ts.hour() as i32,
    day_of_week: ts.format("%A").to_string(),
    week: ts.iso_week().week() as i32,
  })
}
