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

//! Loaders: one parameterised insert per row.
//!
//! Every loader takes an optional warehouse handle. Without one it logs a
//! warning and reports zero rows. The first failing insert stops the batch;
//! rows already written stay written.

use cw_database::models::{
  NewBlockchainInfo, NewCorrelation, NewCryptoDim, NewCryptoInfo, NewDateDim, NewFactRow,
  NewSentimentDim, NewTechnicalIndicator,
};
use cw_database::{StoreResult, Warehouse};
use tracing::{debug, warn};

use crate::error::warehouse_err;
use crate::EtlResult;

fn load_rows<T>(
  warehouse: Option<&mut dyn Warehouse>,
  table: &'static str,
  rows: &[T],
  insert: impl Fn(&mut dyn Warehouse, &T) -> StoreResult<()>,
) -> EtlResult<usize> {
  let Some(wh) = warehouse else {
    warn!(table, "No warehouse connection; skipping {} rows", rows.len());
    return Ok(0);
  };

  for row in rows {
    insert(&mut *wh, row).map_err(warehouse_err)?;
  }

  debug!(table, rows = rows.len(), backend = %wh.backend(), "Rows inserted");
  Ok(rows.len())
}

pub fn load_sentiment(
  warehouse: Option<&mut dyn Warehouse>,
  rows: &[NewSentimentDim],
) -> EtlResult<usize> {
  load_rows(warehouse, "sentiment_dim", rows, |wh, row| wh.insert_sentiment(row))
}

pub fn load_correlations(
  warehouse: Option<&mut dyn Warehouse>,
  rows: &[NewCorrelation],
) -> EtlResult<usize> {
  load_rows(warehouse, "correlations_dim", rows, |wh, row| wh.insert_correlation(row))
}

pub fn load_crypto_dims(
  warehouse: Option<&mut dyn Warehouse>,
  rows: &[NewCryptoDim],
) -> EtlResult<usize> {
  load_rows(warehouse, "crypto_dim", rows, |wh, row| wh.insert_crypto_dim(row))
}

pub fn load_indicators(
  warehouse: Option<&mut dyn Warehouse>,
  rows: &[NewTechnicalIndicator],
) -> EtlResult<usize> {
  load_rows(warehouse, "technical_indicators", rows, |wh, row| wh.insert_indicator(row))
}

pub fn load_dates(warehouse: Option<&mut dyn Warehouse>, rows: &[NewDateDim]) -> EtlResult<usize> {
  load_rows(warehouse, "date_dim", rows, |wh, row| wh.insert_date(row))
}

pub fn load_blockchain_info(
  warehouse: Option<&mut dyn Warehouse>,
  rows: &[NewBlockchainInfo],
) -> EtlResult<usize> {
  load_rows(warehouse, "blockchain_info", rows, |wh, row| wh.insert_blockchain_info(row))
}

pub fn load_facts(warehouse: Option<&mut dyn Warehouse>, rows: &[NewFactRow]) -> EtlResult<usize> {
  load_rows(warehouse, "fact_table", rows, |wh, row| wh.insert_fact(row))
}

/// Appends the rows as given; repeated calls produce duplicate rows
pub fn load_crypto_info(
  warehouse: Option<&mut dyn Warehouse>,
  rows: &[NewCryptoInfo],
) -> EtlResult<usize> {
  load_rows(warehouse, "crypto_info", rows, |wh, row| wh.insert_crypto_info(row))
}
