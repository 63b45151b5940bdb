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

//! Diesel implementation of the warehouse writes, shared by both backends

use cw_core::WarehouseBackend;
use diesel::insert_into;
use diesel::prelude::*;

use crate::connection::WarehouseConnection;
use crate::models::{
  NewBlockchainInfo, NewCorrelation, NewCryptoDim, NewCryptoInfo, NewDateDim, NewFactRow,
  NewSentimentDim, NewTechnicalIndicator,
};
use crate::repository::{StoreError, StoreResult, Warehouse};
use crate::schema::{
  blockchain_info, correlations_dim, crypto_dim, crypto_info, date_dim, fact_table,
  sentiment_dim, technical_indicators,
};

/// Warehouse tables in reporting order
pub const WAREHOUSE_TABLES: [&str; 8] = [
  "date_dim",
  "crypto_info",
  "blockchain_info",
  "technical_indicators",
  "correlations_dim",
  "sentiment_dim",
  "crypto_dim",
  "fact_table",
];

fn insert_failed(err: diesel::result::Error) -> StoreError {
  StoreError::InsertError(err.to_string())
}

impl Warehouse for WarehouseConnection {
  fn backend(&self) -> WarehouseBackend {
    match self {
      WarehouseConnection::Postgres(_) => WarehouseBackend::Postgres,
      WarehouseConnection::Sqlite(_) => WarehouseBackend::Sqlite,
    }
  }

  fn insert_sentiment(&mut self, row: &NewSentimentDim) -> StoreResult<()> {
    insert_into(sentiment_dim::table).values(row).execute(self).map_err(insert_failed)?;
    Ok(())
  }

  fn insert_correlation(&mut self, row: &NewCorrelation) -> StoreResult<()> {
    insert_into(correlations_dim::table).values(row).execute(self).map_err(insert_failed)?;
    Ok(())
  }

  fn insert_crypto_dim(&mut self, row: &NewCryptoDim) -> StoreResult<()> {
    insert_into(crypto_dim::table).values(row).execute(self).map_err(insert_failed)?;
    Ok(())
  }

  fn insert_indicator(&mut self, row: &NewTechnicalIndicator) -> StoreResult<()> {
    insert_into(technical_indicators::table).values(row).execute(self).map_err(insert_failed)?;
    Ok(())
  }

  fn insert_date(&mut self, row: &NewDateDim) -> StoreResult<()> {
    insert_into(date_dim::table).values(row).execute(self).map_err(insert_failed)?;
    Ok(())
  }

  fn insert_blockchain_info(&mut self, row: &NewBlockchainInfo) -> StoreResult<()> {
    insert_into(blockchain_info::table).values(row).execute(self).map_err(insert_failed)?;
    Ok(())
  }

  fn insert_fact(&mut self, row: &NewFactRow) -> StoreResult<()> {
    insert_into(fact_table::table).values(row).execute(self).map_err(insert_failed)?;
    Ok(())
  }

  fn insert_crypto_info(&mut self, row: &NewCryptoInfo) -> StoreResult<()> {
    insert_into(crypto_info::table).values(row).execute(self).map_err(insert_failed)?;
    Ok(())
  }
}

impl WarehouseConnection {
  /// Row count of every warehouse table, in `WAREHOUSE_TABLES` order
  pub fn row_counts(&mut self) -> StoreResult<Vec<(&'static str, i64)>> {
    let counts = [
      date_dim::table.count().get_result::<i64>(self)?,
      crypto_info::table.count().get_result::<i64>(self)?,
      blockchain_info::table.count().get_result::<i64>(self)?,
      technical_indicators::table.count().get_result::<i64>(self)?,
      correlations_dim::table.count().get_result::<i64>(self)?,
      sentiment_dim::table.count().get_result::<i64>(self)?,
      crypto_dim::table.count().get_result::<i64>(self)?,
      fact_table::table.count().get_result::<i64>(self)?,
    ];

    Ok(WAREHOUSE_TABLES.into_iter().zip(counts).collect())
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::ddl::apply_warehouse_ddl;
  use chrono::NaiveDate;
  use diesel::sqlite::SqliteConnection;
  use pretty_assertions::assert_eq;

  fn sqlite_warehouse() -> WarehouseConnection {
    let conn = SqliteConnection::establish(":memory:").expect("in-memory sqlite");
    let mut wh = WarehouseConnection::Sqlite(conn);
    apply_warehouse_ddl(&mut wh).expect("ddl");
    wh
  }

  #[test]
  fn test_backend_reported() {
    let wh = sqlite_warehouse();
    assert_eq!(wh.backend(), WarehouseBackend::Sqlite);
  }

  #[test]
  fn test_insert_and_count() {
    let mut wh = sqlite_warehouse();
    let ts = NaiveDate::from_ymd_opt(2024, 11, 20).unwrap().and_hms_opt(10, 4, 0).unwrap();

    wh.insert_sentiment(&NewSentimentDim { ts, score: 0.62, sentiment: "positive".into() })
      .unwrap();
    wh.insert_fact(&NewFactRow {
      ts,
      coin: "BTC".into(),
      price: 91_000.0,
      dominance: None,
      exchange_rate: Some(1.0),
      price_change_perc: 2.5,
    })
    .unwrap();
    wh.insert_fact(&NewFactRow {
      ts,
      coin: "ETH".into(),
      price: 3_100.0,
      dominance: Some(17.0),
      exchange_rate: None,
      price_change_perc: 0.0,
    })
    .unwrap();

    let counts = wh.row_counts().unwrap();
    assert_eq!(counts.len(), WAREHOUSE_TABLES.len());
    assert_eq!(counts.iter().find(|(t, _)| *t == "sentiment_dim").unwrap().1, 1);
    assert_eq!(counts.iter().find(|(t, _)| *t == "fact_table").unwrap().1, 2);
    assert_eq!(counts.iter().find(|(t, _)| *t == "date_dim").unwrap().1, 0);
  }

  #[test]
  fn test_insert_without_tables_is_insert_error() {
    let conn = SqliteConnection::establish(":memory:").expect("in-memory sqlite");
    let mut wh = WarehouseConnection::Sqlite(conn);
    let ts = NaiveDate::from_ymd_opt(2024, 11, 20).unwrap().and_hms_opt(10, 4, 0).unwrap();

    let err = wh
      .insert_sentiment(&NewSentimentDim { ts, score: 0.1, sentiment: "neutral".into() })
      .unwrap_err();
    assert!(matches!(err, StoreError::InsertError(_)));
  }
}
