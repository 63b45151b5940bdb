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

//! Read models for the operational store the collectors populate

use chrono::NaiveDateTime;
use diesel::prelude::*;
use serde::{Deserialize, Serialize};

use crate::schema::{blockchain_statistics, crypto_data, dominance, exchange_rate, sentiment};

// ===== Sentiment text =====
#[derive(Queryable, Selectable, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[diesel(table_name = sentiment)]
pub struct SentimentText {
  pub created_at: NaiveDateTime,
  pub content: Option<String>,
}

// ===== Crypto OHLCV =====
#[derive(Queryable, Selectable, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[diesel(table_name = crypto_data)]
pub struct CryptoQuote {
  pub coin: String,
  pub open: f64,
  pub high: f64,
  pub low: f64,
  pub close: f64,
  pub volume: f64,
  pub market_cap: f64,
  pub created_at: NaiveDateTime,
}

// ===== Dominance =====
#[derive(Queryable, Selectable, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[diesel(table_name = dominance)]
pub struct DominanceSnapshot {
  pub btc_dominance: f64,
  pub eth_dominance: f64,
  pub altcoin_dominance: f64,
  pub created_at: NaiveDateTime,
}

impl DominanceSnapshot {
  /// Dominance share that applies to `coin`: BTC and ETH have their own
  /// column, everything else shares the altcoin figure.
  pub fn for_coin(&self, coin: &str) -> f64 {
    if coin.eq_ignore_ascii_case("btc") {
      self.btc_dominance
    } else if coin.eq_ignore_ascii_case("eth") {
      self.eth_dominance
    } else {
      self.altcoin_dominance
    }
  }
}

// ===== Exchange rates =====
#[derive(Queryable, Selectable, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[diesel(table_name = exchange_rate)]
pub struct ExchangeRateQuote {
  pub ts: NaiveDateTime,
  pub name: String,
  pub unit: String,
  pub value: f64,
}

// ===== Blockchain statistics =====
#[derive(Queryable, Selectable, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[diesel(table_name = blockchain_statistics)]
pub struct BlockchainStatistic {
  pub ts: NaiveDateTime,
  pub coin: String,
  pub hashrate_24h: Option<String>,
  pub total_transactions: Option<String>,
  pub tps_24h: Option<f64>,
  pub created_at: NaiveDateTime,
}

// ===== Macro averages (gold / rates / stocks joined by day) =====
#[derive(QueryableByName, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MacroAverages {
  #[diesel(sql_type = diesel::sql_types::Timestamp)]
  pub ts: NaiveDateTime,
  #[diesel(sql_type = diesel::sql_types::Nullable<diesel::sql_types::Float8>)]
  pub gold_price: Option<f64>,
  #[diesel(sql_type = diesel::sql_types::Nullable<diesel::sql_types::Float8>)]
  pub interest_rate: Option<f64>,
  #[diesel(sql_type = diesel::sql_types::Nullable<diesel::sql_types::Float8>)]
  pub stocks_price: Option<f64>,
}
