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

//! Extractors: time-scoped reads from the staging store.
//!
//! An empty result is a normal outcome and is logged, never raised. Store
//! failures propagate so the cycle can attribute them to a domain.

pub mod blockchain;
pub mod coins;
pub mod correlation;
pub mod date;
pub mod fact;
pub mod indicators;
pub mod metadata;
pub mod sentiment;

use chrono::NaiveDateTime;
use cw_database::models::CryptoQuote;

pub use blockchain::extract_blockchain;
pub use coins::extract_coins;
pub use correlation::extract_correlations;
pub use date::extract_latest_timestamp;
pub use fact::extract_facts;
pub use indicators::extract_close_series;
pub use metadata::crypto_metadata;
pub use sentiment::extract_sentiment;

/// One sentiment text with the time it was collected
#[derive(Debug, Clone, PartialEq)]
pub struct SentimentRecord {
  pub ts: NaiveDateTime,
  pub content: String,
}

/// A quote together with the oldest quote of the same coin in the preceding 24 hours
#[derive(Debug, Clone, PartialEq)]
pub struct CoinSnapshot {
  pub quote: CryptoQuote,
  pub baseline: Option<CryptoQuote>,
}

/// Inputs of one `fact_table` row before the change is computed
#[derive(Debug, Clone, PartialEq)]
pub struct FactInput {
  pub ts: NaiveDateTime,
  pub coin: String,
  pub price: f64,
  pub dominance: Option<f64>,
  pub exchange_rate: Option<f64>,
  pub baseline_price: Option<f64>,
}
