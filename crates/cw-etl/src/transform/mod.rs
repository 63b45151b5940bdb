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

//! Pure transformations between extracted rows and warehouse rows

pub mod change;
pub mod date;
pub mod indicators;
pub mod sentiment;

use cw_database::models::{
  CryptoQuote, MacroAverages, NewCorrelation, NewCryptoDim, NewFactRow, NewSentimentDim,
};

use crate::extract::{CoinSnapshot, FactInput, SentimentRecord};

pub use change::Change;
pub use date::{decompose, TimestampInput};
pub use indicators::{compute_indicators, CloseSeries};
pub use sentiment::{SentimentAnalyzer, SentimentLabel};

/// Score every record independently
pub fn score_sentiment(analyzer: &SentimentAnalyzer, records: &[SentimentRecord]) -> Vec<NewSentimentDim> {
  records.iter().map(|r| analyzer.score(r.ts, &r.content)).collect()
}

pub fn to_correlations(rows: &[MacroAverages]) -> Vec<NewCorrelation> {
  rows
    .iter()
    .map(|r| NewCorrelation {
      ts: r.ts,
      gold_price: r.gold_price,
      interest_rate: r.interest_rate,
      stocks_price: r.stocks_price,
    })
    .collect()
}

/// Attach 24h price and market-cap changes to each quote
pub fn to_crypto_dims(snapshots: &[CoinSnapshot]) -> Vec<NewCryptoDim> {
  snapshots
    .iter()
    .map(|s| {
      let q: &CryptoQuote = &s.quote;
      let price = Change::against(q.close, s.baseline.as_ref().map(|b| b.close));
      let cap = Change::against(q.market_cap, s.baseline.as_ref().map(|b| b.market_cap));
      NewCryptoDim {
        ts: q.created_at,
        coin: q.coin.clone(),
        open: q.open,
        high: q.high,
        low: q.low,
        close: q.close,
        volume: q.volume,
        market_cap: q.market_cap,
        price_change: price.absolute,
        price_change_perc: price.percent,
        market_cap_change: cap.absolute,
        market_cap_change_perc: cap.percent,
      }
    })
    .collect()
}

pub fn to_facts(inputs: &[FactInput]) -> Vec<NewFactRow> {
  inputs
    .iter()
    .map(|f| NewFactRow {
      ts: f.ts,
      coin: f.coin.clone(),
      price: f.price,
      dominance: f.dominance,
      exchange_rate: f.exchange_rate,
      price_change_perc: Change::against(f.price, f.baseline_price).percent,
    })
    .collect()
}
