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

//! Insert models for the dimensional warehouse

use chrono::{NaiveDate, NaiveDateTime};
use diesel::prelude::*;
use serde::{Deserialize, Serialize};

use crate::schema::{
  blockchain_info, correlations_dim, crypto_dim, crypto_info, date_dim, fact_table,
  sentiment_dim, technical_indicators,
};

// ===== date_dim =====
#[derive(Insertable, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[diesel(table_name = date_dim)]
pub struct NewDateDim {
  /// Canonical `%Y-%m-%d %H:%M:%S` rendering of the source timestamp
  pub ts: String,
  pub day: i32,
  pub month: i32,
  pub year: i32,
  pub hour: i32,
  pub day_of_week: String,
  pub week: i32,
}

// ===== crypto_info =====
#[derive(Insertable, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[diesel(table_name = crypto_info)]
pub struct NewCryptoInfo {
  pub symbol: String,
  pub launch_date: NaiveDate,
  pub ath_price: f64,
  pub ath_date: NaiveDate,
  pub total_supply: i64,
}

// ===== blockchain_info =====
#[derive(Insertable, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[diesel(table_name = blockchain_info)]
pub struct NewBlockchainInfo {
  pub ts: NaiveDateTime,
  pub symbol: String,
  pub hashrate: f64,
  pub tps: f64,
  pub total_trans: i64,
}

// ===== technical_indicators =====
#[derive(Insertable, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[diesel(table_name = technical_indicators)]
pub struct NewTechnicalIndicator {
  pub ts: NaiveDateTime,
  pub coin: String,
  pub rsi: f64,
  pub sma: f64,
  pub ema: f64,
}

// ===== correlations_dim =====
#[derive(Insertable, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[diesel(table_name = correlations_dim)]
pub struct NewCorrelation {
  pub ts: NaiveDateTime,
  pub gold_price: Option<f64>,
  pub interest_rate: Option<f64>,
  pub stocks_price: Option<f64>,
}

// ===== sentiment_dim =====
#[derive(Insertable, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[diesel(table_name = sentiment_dim)]
pub struct NewSentimentDim {
  pub ts: NaiveDateTime,
  pub score: f64,
  pub sentiment: String,
}

// ===== crypto_dim =====
#[derive(Insertable, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[diesel(table_name = crypto_dim)]
pub struct NewCryptoDim {
  pub ts: NaiveDateTime,
  pub coin: String,
  pub open: f64,
  pub high: f64,
  pub low: f64,
  pub close: f64,
  pub volume: f64,
  pub market_cap: f64,
  pub price_change: f64,
  pub price_change_perc: f64,
  pub market_cap_change: f64,
  pub market_cap_change_perc: f64,
}

// ===== fact_table =====
#[derive(Insertable, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[diesel(table_name = fact_table)]
pub struct NewFactRow {
  pub ts: NaiveDateTime,
  pub coin: String,
  pub price: f64,
  pub dominance: Option<f64>,
  pub exchange_rate: Option<f64>,
  pub price_change_perc: f64,
}
