//! Full cycles against a sqlite warehouse file

use chrono::{NaiveDate, NaiveDateTime, TimeDelta};
use cw_core::{EtlSettings, WarehouseBackend, WarehouseConfig};
use cw_database::ddl::apply_warehouse_ddl;
use cw_database::models::{
  BlockchainStatistic, CryptoQuote, DominanceSnapshot, ExchangeRateQuote, MacroAverages,
  SentimentText,
};
use cw_database::{open_warehouse, StagingStore, StoreResult, WarehouseConnection};
use cw_etl::{run_cycle, CycleContext, Domain, ProcessState, ProcessTracker};
use pretty_assertions::assert_eq;
use tempfile::TempDir;

fn cycle_time() -> NaiveDateTime {
  NaiveDate::from_ymd_opt(2024, 11, 20).unwrap().and_hms_opt(10, 0, 0).unwrap()
}

fn btc(at: NaiveDateTime, close: f64) -> CryptoQuote {
  CryptoQuote {
    coin: "BTC".into(),
    open: close,
    high: close,
    low: close,
    close,
    volume: 5.0,
    market_cap: close * 19_000_000.0,
    created_at: at,
  }
}

/// In-memory staging store that honours the time bounds of each read
struct FixtureStaging {
  quotes: Vec<CryptoQuote>,
  texts: Vec<SentimentText>,
}

impl FixtureStaging {
  fn new(now: NaiveDateTime) -> Self {
    // 09:35 .. 09:55 every four minutes, then one quote at 09:58
    let mut quotes: Vec<CryptoQuote> = (0..6)
      .map(|i| btc(now - TimeDelta::minutes(25 - 4 * i), 90_000.0 + 100.0 * i as f64))
      .collect();
    quotes.push(btc(now - TimeDelta::minutes(2), 91_000.0));

    let texts = vec![
      SentimentText {
        created_at: now - TimeDelta::minutes(1),
        content: Some("Bitcoin breaks out, an amazing rally!".into()),
      },
      SentimentText { created_at: now - TimeDelta::minutes(1), content: None },
    ];

    Self { quotes, texts }
  }
}

impl StagingStore for FixtureStaging {
  fn sentiment_since(&mut self, since: NaiveDateTime) -> StoreResult<Vec<SentimentText>> {
    Ok(self.texts.iter().filter(|t| t.created_at >= since).cloned().collect())
  }

  fn crypto_quotes_since(&mut self, since: NaiveDateTime) -> StoreResult<Vec<CryptoQuote>> {
    Ok(self.quotes.iter().filter(|q| q.created_at >= since).cloned().collect())
  }

  fn crypto_history(
    &mut self,
    coin: &str,
    from: NaiveDateTime,
    to: NaiveDateTime,
  ) -> StoreResult<Vec<CryptoQuote>> {
    Ok(
      self
        .quotes
        .iter()
        .filter(|q| q.coin == coin && q.created_at >= from && q.created_at <= to)
        .cloned()
        .collect(),
    )
  }

  fn latest_crypto_timestamp(&mut self) -> StoreResult<Option<NaiveDateTime>> {
    Ok(self.quotes.iter().map(|q| q.created_at).max())
  }

  fn macro_averages(
    &mut self,
    from: NaiveDate,
    _to: NaiveDate,
    _limit: i64,
  ) -> StoreResult<Vec<MacroAverages>> {
    Ok(vec![MacroAverages {
      ts: from.and_hms_opt(0, 0, 0).unwrap(),
      gold_price: Some(2_650.0),
      interest_rate: Some(4.5),
      stocks_price: None,
    }])
  }

  fn first_dominance_since(&mut self, since: NaiveDateTime) -> StoreResult<Option<DominanceSnapshot>> {
    Ok(Some(DominanceSnapshot {
      btc_dominance: 58.2,
      eth_dominance: 12.4,
      altcoin_dominance: 29.4,
      created_at: since,
    }))
  }

  fn exchange_rates_since(&mut self, since: NaiveDateTime) -> StoreResult<Vec<ExchangeRateQuote>> {
    Ok(vec![ExchangeRateQuote { ts: since, name: "Bitcoin".into(), unit: "btc".into(), value: 1.0 }])
  }

  fn blockchain_statistics_since(&mut self, _: NaiveDateTime) -> StoreResult<Vec<BlockchainStatistic>> {
    Ok(Vec::new())
  }
}

fn sqlite_warehouse(dir: &TempDir) -> WarehouseConnection {
  let config = WarehouseConfig {
    backend: Some(WarehouseBackend::Sqlite),
    postgres_url: None,
    schema: None,
    sqlite_path: dir.path().join("warehouse.db").to_string_lossy().into_owned(),
  };
  let mut conn = open_warehouse(WarehouseBackend::Sqlite, &config).unwrap();
  apply_warehouse_ddl(&mut conn).unwrap();
  conn
}

fn count(counts: &[(&'static str, i64)], table: &str) -> i64 {
  counts.iter().find(|(t, _)| *t == table).map(|(_, c)| *c).unwrap()
}

#[test]
fn test_cycle_populates_sqlite_warehouse() {
  let dir = TempDir::new().unwrap();
  let mut warehouse = sqlite_warehouse(&dir);
  let ctx = CycleContext::new(cycle_time(), EtlSettings::default());
  let mut staging = FixtureStaging::new(ctx.now);
  let tracker = ProcessTracker::new();

  let report = run_cycle(&mut staging, Some(&mut warehouse), &ctx, &tracker);

  assert_eq!(report.failed().count(), 0);
  assert_eq!(tracker.count(ProcessState::Success), Domain::ALL.len());

  let counts = warehouse.row_counts().unwrap();
  assert_eq!(count(&counts, "sentiment_dim"), 1);
  assert_eq!(count(&counts, "correlations_dim"), 1);
  assert_eq!(count(&counts, "crypto_dim"), 1);
  // buckets 09:32..09:52 only warm up the averages; 09:56 is in the window
  assert_eq!(count(&counts, "technical_indicators"), 1);
  assert_eq!(count(&counts, "date_dim"), 1);
  assert_eq!(count(&counts, "blockchain_info"), 6);
  assert_eq!(count(&counts, "fact_table"), 1);
  assert_eq!(count(&counts, "crypto_info"), 6);
  assert_eq!(report.rows_loaded(), 18);
}

#[test]
fn test_rows_survive_reopen_and_accumulate() {
  let dir = TempDir::new().unwrap();
  let ctx = CycleContext::new(cycle_time(), EtlSettings::default());

  for _ in 0..2 {
    let mut warehouse = sqlite_warehouse(&dir);
    let mut staging = FixtureStaging::new(ctx.now);
    let report = run_cycle(&mut staging, Some(&mut warehouse), &ctx, &ProcessTracker::new());
    assert_eq!(report.failed().count(), 0);
  }

  let mut warehouse = sqlite_warehouse(&dir);
  let counts = warehouse.row_counts().unwrap();
  assert_eq!(count(&counts, "crypto_info"), 12);
  assert_eq!(count(&counts, "fact_table"), 2);
  assert_eq!(count(&counts, "date_dim"), 2);
  assert_eq!(count(&counts, "technical_indicators"), 2);
}

#[test]
fn test_quiet_staging_adds_no_window_rows() {
  let dir = TempDir::new().unwrap();
  let mut warehouse = sqlite_warehouse(&dir);
  // ten minutes after the last quote, nothing falls inside the 4 minute window
  let ctx = CycleContext::new(cycle_time() + TimeDelta::minutes(10), EtlSettings::default());
  let mut staging = FixtureStaging::new(cycle_time());

  let report = run_cycle(&mut staging, Some(&mut warehouse), &ctx, &ProcessTracker::new());
  assert_eq!(report.failed().count(), 0);

  let counts = warehouse.row_counts().unwrap();
  assert_eq!(count(&counts, "technical_indicators"), 0);
  assert_eq!(count(&counts, "date_dim"), 0);
  assert_eq!(count(&counts, "crypto_dim"), 0);
  assert_eq!(count(&counts, "fact_table"), 0);
}

/// Needs a reachable postgres staging database in `CW_TEST_STAGING_URL`
#[test]
#[ignore]
fn test_cycle_against_postgres_staging() {
  let url = std::env::var("CW_TEST_STAGING_URL").expect("CW_TEST_STAGING_URL not set");
  let mut staging = cw_database::establish_staging(&url).unwrap();
  cw_database::ddl::apply_staging_ddl(&mut staging).unwrap();

  let dir = TempDir::new().unwrap();
  let mut warehouse = sqlite_warehouse(&dir);
  let ctx = CycleContext::starting_now(EtlSettings::default());
  let report = run_cycle(&mut staging, Some(&mut warehouse), &ctx, &ProcessTracker::new());

  let failed: Vec<Domain> = report.failed().map(|o| o.domain).collect();
  assert_eq!(failed, Vec::<Domain>::new());
}
