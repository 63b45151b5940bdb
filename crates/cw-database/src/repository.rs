/*
 *
 *
 *
 *
 * MIT License
 * Copyright (c) 2025. Dwight J. Browne
 * dwight[-at-]dwightjbrowne[-dot-]com
 *
 *
 * Permission is hereby granted, free of charge, to any person obtaining a copy
 * of this software and associated documentation files (the "Software"), to deal
 * in the Software without restriction, including without limitation the rights
 * to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
 * copies of the Software, and to permit persons to whom the Software is
 * furnished to do so, subject to the following conditions:
 *
 * The above copyright notice and this permission notice shall be included in all
 * copies or substantial portions of the Software.
 *
 * THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
 * IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
 * FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
 * AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
 * LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
 * OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
 * SOFTWARE.
 */

//! Database repository abstraction layer
//!
//! The ETL stages talk to both stores through the two traits defined here, so
//! extract/transform/load logic never depends on a concrete connection type.
//! `StagingStore` covers every read the extractors issue against the
//! operational store; `Warehouse` covers every single-row insert the loaders
//! issue against the dimensional store.

use chrono::{NaiveDate, NaiveDateTime};
use cw_core::WarehouseBackend;
use diesel::result::Error as DieselError;
use thiserror::Error;

use crate::models::{
  BlockchainStatistic, CryptoQuote, DominanceSnapshot, ExchangeRateQuote, MacroAverages,
  NewBlockchainInfo, NewCorrelation, NewCryptoDim, NewCryptoInfo, NewDateDim, NewFactRow,
  NewSentimentDim, NewTechnicalIndicator, SentimentText,
};

/// Database repository errors
#[derive(Error, Debug)]
pub enum StoreError {
  #[error("Connection error: {0}")]
  ConnectionError(String),

  #[error("Database query error: {0}")]
  QueryError(String),

  #[error("Insert error: {0}")]
  InsertError(String),

  #[error("Not found: {0}")]
  NotFound(String),

  #[error("Configuration error: {0}")]
  ConfigurationError(String),
}

impl From<DieselError> for StoreError {
  fn from(err: DieselError) -> Self {
    match err {
      DieselError::NotFound => StoreError::NotFound("Record not found".to_string()),
      DieselError::DatabaseError(_, info) => StoreError::QueryError(info.message().to_string()),
      _ => StoreError::QueryError(err.to_string()),
    }
  }
}

impl From<diesel::ConnectionError> for StoreError {
  fn from(err: diesel::ConnectionError) -> Self {
    StoreError::ConnectionError(err.to_string())
  }
}

impl From<cw_core::Error> for StoreError {
  fn from(err: cw_core::Error) -> Self {
    StoreError::ConfigurationError(err.to_string())
  }
}

pub type StoreResult<T> = Result<T, StoreError>;

/// Read access to the operational store.
///
/// Every method is scoped by time; an empty vector (or `None`) is a normal
/// answer, not an error.
pub trait StagingStore {
  /// Sentiment texts inserted at or after `since`
  fn sentiment_since(&mut self, since: NaiveDateTime) -> StoreResult<Vec<SentimentText>>;

  /// OHLCV rows inserted at or after `since`, oldest first
  fn crypto_quotes_since(&mut self, since: NaiveDateTime) -> StoreResult<Vec<CryptoQuote>>;

  /// One coin's rows with `from <= created_at <= to`, oldest first
  fn crypto_history(
    &mut self,
    coin: &str,
    from: NaiveDateTime,
    to: NaiveDateTime,
  ) -> StoreResult<Vec<CryptoQuote>>;

  /// Most recent `crypto_data.created_at`
  fn latest_crypto_timestamp(&mut self) -> StoreResult<Option<NaiveDateTime>>;

  /// Gold/interest/stock mid prices joined by calendar day, newest first
  fn macro_averages(
    &mut self,
    from: NaiveDate,
    to: NaiveDate,
    limit: i64,
  ) -> StoreResult<Vec<MacroAverages>>;

  /// First dominance snapshot inserted at or after `since`
  fn first_dominance_since(
    &mut self,
    since: NaiveDateTime,
  ) -> StoreResult<Option<DominanceSnapshot>>;

  /// Exchange rates stamped at or after `since`
  fn exchange_rates_since(&mut self, since: NaiveDateTime) -> StoreResult<Vec<ExchangeRateQuote>>;

  /// Blockchain statistics inserted at or after `since`
  fn blockchain_statistics_since(
    &mut self,
    since: NaiveDateTime,
  ) -> StoreResult<Vec<BlockchainStatistic>>;
}

/// Write access to the dimensional warehouse, one row per call.
pub trait Warehouse {
  fn backend(&self) -> WarehouseBackend;

  fn insert_sentiment(&mut self, row: &NewSentimentDim) -> StoreResult<()>;

  fn insert_correlation(&mut self, row: &NewCorrelation) -> StoreResult<()>;

  fn insert_crypto_dim(&mut self, row: &NewCryptoDim) -> StoreResult<()>;

  fn insert_indicator(&mut self, row: &NewTechnicalIndicator) -> StoreResult<()>;

  fn insert_date(&mut self, row: &NewDateDim) -> StoreResult<()>;

  fn insert_blockchain_info(&mut self, row: &NewBlockchainInfo) -> StoreResult<()>;

  fn insert_fact(&mut self, row: &NewFactRow) -> StoreResult<()>;

  fn insert_crypto_info(&mut self, row: &NewCryptoInfo) -> StoreResult<()>;
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_not_found_maps() {
    let err = StoreError::from(DieselError::NotFound);
    assert!(matches!(err, StoreError::NotFound(_)));
  }

  #[test]
  fn test_config_error_maps() {
    let err = StoreError::from(cw_core::Error::MissingSetting("WAREHOUSE_DATABASE_URL".into()));
    assert!(matches!(err, StoreError::ConfigurationError(_)));
    assert!(err.to_string().contains("WAREHOUSE_DATABASE_URL"));
  }
}
