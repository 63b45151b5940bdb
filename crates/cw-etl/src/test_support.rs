//! Shared fixtures for unit tests

use std::collections::HashMap;

use chrono::{NaiveDate, NaiveDateTime};
use cw_core::{EtlSettings, WarehouseBackend};
use cw_database::models::{
  BlockchainStatistic, CryptoQuote, DominanceSnapshot, ExchangeRateQuote, MacroAverages,
  NewBlockchainInfo, NewCorrelation, NewCryptoDim, NewCryptoInfo, NewDateDim, NewFactRow,
  NewSentimentDim, NewTechnicalIndicator, SentimentText,
};
use cw_database::{StagingStore, StoreError, StoreResult, Warehouse};
use mockall::mock;

use crate::CycleContext;

mock! {
  pub Staging {}

  impl StagingStore for Staging {
    fn sentiment_since(&mut self, since: NaiveDateTime) -> StoreResult<Vec<SentimentText>>;
    fn crypto_quotes_since(&mut self, since: NaiveDateTime) -> StoreResult<Vec<CryptoQuote>>;
    fn crypto_history(
      &mut self,
      coin: &str,
      from: NaiveDateTime,
      to: NaiveDateTime,
    ) -> StoreResult<Vec<CryptoQuote>>;
    fn latest_crypto_timestamp(&mut self) -> StoreResult<Option<NaiveDateTime>>;
    fn macro_averages(
      &mut self,
      from: NaiveDate,
      to: NaiveDate,
      limit: i64,
    ) -> StoreResult<Vec<MacroAverages>>;
    fn first_dominance_since(
      &mut self,
      since: NaiveDateTime,
    ) -> StoreResult<Option<DominanceSnapshot>>;
    fn exchange_rates_since(&mut self, since: NaiveDateTime) -> StoreResult<Vec<ExchangeRateQuote>>;
    fn blockchain_statistics_since(
      &mut self,
      since: NaiveDateTime,
    ) -> StoreResult<Vec<BlockchainStatistic>>;
  }
}

/// Context anchored at 2024-11-20 10:00:00 with default settings
pub fn context() -> CycleContext {
  let now = NaiveDate::from_ymd_opt(2024, 11, 20).unwrap().and_hms_opt(10, 0, 0).unwrap();
  CycleContext::new(now, EtlSettings::default())
}

pub fn quote(coin: &str, at: NaiveDateTime, close: f64, market_cap: f64) -> CryptoQuote {
  CryptoQuote {
    coin: coin.to_string(),
    open: close,
    high: close,
    low: close,
    close,
    volume: 10.0,
    market_cap,
    created_at: at,
  }
}

/// Staging store with nothing in it
pub struct EmptyStaging;

impl StagingStore for EmptyStaging {
  fn sentiment_since(&mut self, _: NaiveDateTime) -> StoreResult<Vec<SentimentText>> {
    Ok(Vec::new())
  }

  fn crypto_quotes_since(&mut self, _: NaiveDateTime) -> StoreResult<Vec<CryptoQuote>> {
    Ok(Vec::new())
  }

  fn crypto_history(
    &mut self,
    _: &str,
    _: NaiveDateTime,
    _: NaiveDateTime,
  ) -> StoreResult<Vec<CryptoQuote>> {
    Ok(Vec::new())
  }

  fn latest_crypto_timestamp(&mut self) -> StoreResult<Option<NaiveDateTime>> {
    Ok(None)
  }

  fn macro_averages(&mut self, _: NaiveDate, _: NaiveDate, _: i64) -> StoreResult<Vec<MacroAverages>> {
    Ok(Vec::new())
  }

  fn first_dominance_since(&mut self, _: NaiveDateTime) -> StoreResult<Option<DominanceSnapshot>> {
    Ok(None)
  }

  fn exchange_rates_since(&mut self, _: NaiveDateTime) -> StoreResult<Vec<ExchangeRateQuote>> {
    Ok(Vec::new())
  }

  fn blockchain_statistics_since(&mut self, _: NaiveDateTime) -> StoreResult<Vec<BlockchainStatistic>> {
    Ok(Vec::new())
  }
}

/// Warehouse that counts rows per table and can be told to reject one table.
/// `crypto_dim` rows are kept for value checks.
#[derive(Default)]
pub struct MemoryWarehouse {
  pub rows: HashMap<&'static str, usize>,
  pub reject: Option<&'static str>,
  pub crypto_dims: Vec<NewCryptoDim>,
}

impl MemoryWarehouse {
  pub fn count(&self, table: &str) -> usize {
    self.rows.get(table).copied().unwrap_or(0)
  }

  fn accept(&mut self, table: &'static str) -> StoreResult<()> {
    if self.reject == Some(table) {
      return Err(StoreError::InsertError(format!("insert into {table} rejected")));
    }
    *self.rows.entry(table).or_default() += 1;
    Ok(())
  }
}

impl Warehouse for MemoryWarehouse {
  fn backend(&self) -> WarehouseBackend {
    WarehouseBackend::Sqlite
  }

  fn insert_sentiment(&mut self, _: &NewSentimentDim) -> StoreResult<()> {
    self.accept("sentiment_dim")
  }

  fn insert_correlation(&mut self, _: &NewCorrelation) -> StoreResult<()> {
    self.accept("correlations_dim")
  }

  fn insert_crypto_dim(&mut self, row: &NewCryptoDim) -> StoreResult<()> {
    self.accept("crypto_dim")?;
    self.crypto_dims.push(row.clone());
    Ok(())
  }

  fn insert_indicator(&mut self, _: &NewTechnicalIndicator) -> StoreResult<()> {
    self.accept("technical_indicators")
  }

  fn insert_date(&mut self, _: &NewDateDim) -> StoreResult<()> {
    self.accept("date_dim")
  }

  fn insert_blockchain_info(&mut self, _: &NewBlockchainInfo) -> StoreResult<()> {
    self.accept("blockchain_info")
  }

  fn insert_fact(&mut self, _: &NewFactRow) -> StoreResult<()> {
    self.accept("fact_table")
  }

  fn insert_crypto_info(&mut self, _: &NewCryptoInfo) -> StoreResult<()> {
    self.accept("crypto_info")
  }
}
