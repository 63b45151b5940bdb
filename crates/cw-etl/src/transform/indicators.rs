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

//! Technical indicators over a resampled close series.
//!
//! Closes are bucketed onto a fixed grid aligned to midnight, gaps are filled,
//! and RSI, EMA and SMA are computed with the same period. Values that are not
//! yet defined (the warm-up prefix) are NaN and their rows are dropped.

use std::collections::BTreeMap;

use chrono::{NaiveDateTime, TimeDelta, Timelike};
use cw_database::models::NewTechnicalIndicator;

/// Look-back period shared by RSI, EMA and SMA
pub const INDICATOR_PERIOD: usize = 4;
/// Width of one resampling bucket in minutes
pub const BUCKET_MINUTES: i64 = 4;

/// Ordered closes of one coin
#[derive(Debug, Clone, PartialEq)]
pub struct CloseSeries {
  pub coin: String,
  pub points: Vec<(NaiveDateTime, f64)>,
}

/// Start of the bucket containing `ts`
fn bucket_start(ts: NaiveDateTime) -> NaiveDateTime {
  let minute_of_day = i64::from(ts.hour()) * 60 + i64::from(ts.minute());
  let offset = minute_of_day - minute_of_day % BUCKET_MINUTES;
  ts.date().and_time(chrono::NaiveTime::MIN) + TimeDelta::minutes(offset)
}

/// Resample to one close per bucket from the first to the last populated
/// bucket. A bucket takes the last close that falls into it; empty buckets
/// are forward filled, then backward filled.
pub fn resample(points: &[(NaiveDateTime, f64)]) -> Vec<(NaiveDateTime, f64)> {
  let mut sorted: Vec<(NaiveDateTime, f64)> = points.to_vec();
  sorted.sort_by_key(|(ts, _)| *ts);
  sorted.dedup_by_key(|(ts, _)| *ts);

  let mut buckets: BTreeMap<NaiveDateTime, f64> = BTreeMap::new();
  for (ts, close) in sorted {
    buckets.insert(bucket_start(ts), close);
  }

  let (Some((&first, _)), Some((&last, _))) = (buckets.first_key_value(), buckets.last_key_value())
  else {
    return Vec::new();
  };

  let step = TimeDelta::minutes(BUCKET_MINUTES);
  let mut grid: Vec<(NaiveDateTime, Option<f64>)> = Vec::new();
  let mut cursor = first;
  while cursor <= last {
    grid.push((cursor, buckets.get(&cursor).copied()));
    cursor += step;
  }

  let mut carry = None;
  for (_, value) in grid.iter_mut() {
    if let Some(v) = *value {
      carry = Some(v);
    } else {
      *value = carry;
    }
  }
  let mut carry = None;
  for (_, value) in grid.iter_mut().rev() {
    if let Some(v) = *value {
      carry = Some(v);
    } else {
      *value = carry;
    }
  }

  grid.into_iter().filter_map(|(ts, v)| v.map(|close| (ts, close))).collect()
}

/// Rolling mean; the first `period - 1` values are NaN
pub fn sma(values: &[f64], period: usize) -> Vec<f64> {
  let n = values.len();
  let mut result = vec![f64::NAN; n];
  if period == 0 || n < period {
    return result;
  }

  let mut sum: f64 = values.iter().take(period).sum();
  result[period - 1] = sum / period as f64;
  for i in period..n {
    sum = sum - values[i - period] + values[i];
    result[i] = sum / period as f64;
  }
  result
}

/// EMA seeded with the SMA of the first `period` values
pub fn ema(values: &[f64], period: usize) -> Vec<f64> {
  let n = values.len();
  let mut result = vec![f64::NAN; n];
  if period == 0 || n < period {
    return result;
  }

  let alpha = 2.0 / (period as f64 + 1.0);
  let seed = values.iter().take(period).sum::<f64>() / period as f64;
  result[period - 1] = seed;

  let mut prev = seed;
  for i in period..n {
    let next = alpha * values[i] + (1.0 - alpha) * prev;
    result[i] = next;
    prev = next;
  }
  result
}

/// RSI with Wilder smoothing; the first `period` values are NaN
pub fn rsi(values: &[f64], period: usize) -> Vec<f64> {
  let n = values.len();
  let mut result = vec![f64::NAN; n];
  if period == 0 || n < period + 1 {
    return result;
  }

  let mut avg_gain = 0.0;
  let mut avg_loss = 0.0;
  for i in 1..=period {
    let change = values[i] - values[i - 1];
    if change > 0.0 {
      avg_gain += change;
    } else {
      avg_loss -= change;
    }
  }
  avg_gain /= period as f64;
  avg_loss /= period as f64;
  result[period] = rsi_value(avg_gain, avg_loss);

  let alpha = 1.0 / period as f64;
  for i in (period + 1)..n {
    let change = values[i] - values[i - 1];
    let gain = change.max(0.0);
    let loss = (-change).max(0.0);
    avg_gain = alpha * gain + (1.0 - alpha) * avg_gain;
    avg_loss = alpha * loss + (1.0 - alpha) * avg_loss;
    result[i] = rsi_value(avg_gain, avg_loss);
  }
  result
}

fn rsi_value(avg_gain: f64, avg_loss: f64) -> f64 {
  if avg_loss == 0.0 && avg_gain == 0.0 {
    50.0
  } else if avg_loss == 0.0 {
    100.0
  } else {
    100.0 - 100.0 / (1.0 + avg_gain / avg_loss)
  }
}

/// Indicator rows for one coin; empty when fewer than `INDICATOR_PERIOD`
/// buckets survive resampling
pub fn indicators_for(series: &CloseSeries) -> Vec<NewTechnicalIndicator> {
  let grid = resample(&series.points);
  if grid.len() < INDICATOR_PERIOD {
    return Vec::new();
  }

  let closes: Vec<f64> = grid.iter().map(|(_, c)| *c).collect();
  let rsi = rsi(&closes, INDICATOR_PERIOD);
  let ema = ema(&closes, INDICATOR_PERIOD);
  let sma = sma(&closes, INDICATOR_PERIOD);

  grid
    .iter()
    .enumerate()
    .filter(|(i, _)| rsi[*i].is_finite() && ema[*i].is_finite() && sma[*i].is_finite())
    .map(|(i, (ts, _))| NewTechnicalIndicator {
      ts: *ts,
      coin: series.coin.clone(),
      rsi: rsi[i],
      sma: sma[i],
      ema: ema[i],
    })
    .collect()
}

/// Indicator rows for every coin, in input order, stamped at or after `since`.
/// Older buckets only warm up the averages.
pub fn compute_indicators(series: &[CloseSeries], since: NaiveDateTime) -> Vec<NewTechnicalIndicator> {
  series.iter().flat_map(indicators_for).filter(|row| row.ts >= since).collect()
}

#[cfg(test)]
mod tests {
  use super::*;
  use chrono::NaiveDate;
  use cw_core::test_utils::assert_approx_eq;

  fn at(h: u32, m: u32, s: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 11, 20).unwrap().and_hms_opt(h, m, s).unwrap()
  }

  fn series(points: &[(NaiveDateTime, f64)]) -> CloseSeries {
    CloseSeries { coin: "BTC".into(), points: points.to_vec() }
  }

  #[test]
  fn test_bucket_alignment() {
    assert_eq!(bucket_start(at(10, 3, 59)), at(10, 0, 0));
    assert_eq!(bucket_start(at(10, 4, 0)), at(10, 4, 0));
    assert_eq!(bucket_start(at(0, 1, 0)), at(0, 0, 0));
    assert_eq!(bucket_start(at(23, 59, 0)), at(23, 56, 0));
  }

  #[test]
  fn test_resample_last_close_and_forward_fill() {
    let grid = resample(&[(at(10, 9, 0), 3.0), (at(10, 1, 0), 1.0), (at(10, 3, 0), 2.0)]);
    assert_eq!(grid, vec![(at(10, 0, 0), 2.0), (at(10, 4, 0), 2.0), (at(10, 8, 0), 3.0)]);
  }

  #[test]
  fn test_resample_drops_duplicate_timestamps() {
    let grid = resample(&[(at(10, 1, 0), 1.0), (at(10, 1, 0), 9.0)]);
    assert_eq!(grid.len(), 1);
    assert_eq!(grid[0].1, 1.0);
  }

  #[test]
  fn test_resample_empty() {
    assert!(resample(&[]).is_empty());
  }

  #[test]
  fn test_fewer_than_four_points_is_empty() {
    let s = series(&[(at(10, 0, 0), 1.0), (at(10, 4, 0), 2.0), (at(10, 8, 0), 3.0)]);
    assert!(indicators_for(&s).is_empty());
  }

  #[test]
  fn test_exactly_four_points_has_no_complete_row() {
    let s = series(&[
      (at(10, 0, 0), 1.0),
      (at(10, 4, 0), 2.0),
      (at(10, 8, 0), 3.0),
      (at(10, 12, 0), 4.0),
    ]);
    assert!(indicators_for(&s).is_empty());
  }

  #[test]
  fn test_rising_series() {
    let s = series(&[
      (at(10, 0, 0), 1.0),
      (at(10, 4, 0), 2.0),
      (at(10, 8, 0), 3.0),
      (at(10, 12, 0), 4.0),
      (at(10, 16, 0), 5.0),
    ]);
    let rows = indicators_for(&s);
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].ts, at(10, 16, 0));
    assert_eq!(rows[0].coin, "BTC");
    assert_approx_eq(rows[0].rsi, 100.0, 1e-9);
    assert_approx_eq(rows[0].sma, 3.5, 1e-9);
    assert_approx_eq(rows[0].ema, 3.5, 1e-9);
  }

  #[test]
  fn test_sma_and_ema_warmup() {
    let values = [2.0, 4.0, 6.0, 8.0, 10.0];
    let s = sma(&values, 4);
    assert!(s[2].is_nan());
    assert_approx_eq(s[3], 5.0, 1e-12);
    assert_approx_eq(s[4], 7.0, 1e-12);

    let e = ema(&values, 4);
    assert!(e[2].is_nan());
    assert_approx_eq(e[3], 5.0, 1e-12);
    assert_approx_eq(e[4], 0.4 * 10.0 + 0.6 * 5.0, 1e-12);
  }

  #[test]
  fn test_rsi_mixed_moves() {
    let values = [10.0, 11.0, 10.0, 11.0, 10.0, 12.0];
    let r = rsi(&values, 4);
    assert!(r[3].is_nan());
    // first window: gains 2, losses 2
    assert_approx_eq(r[4], 50.0, 1e-9);
    // gain 2: avg_gain 0.5*0.75+0.5 = 0.875, avg_loss 0.375
    assert_approx_eq(r[5], 100.0 - 100.0 / (1.0 + 0.875 / 0.375), 1e-9);
    assert!(r.iter().skip(4).all(|v| (0.0..=100.0).contains(v)));
  }

  #[test]
  fn test_flat_series_rsi_is_fifty() {
    let r = rsi(&[5.0; 6], 4);
    assert_approx_eq(r[5], 50.0, 1e-12);
  }

  #[test]
  fn test_compute_indicators_per_coin() {
    let mut eth = series(&[]);
    eth.coin = "ETH".into();
    let btc = series(&[
      (at(10, 0, 0), 1.0),
      (at(10, 4, 0), 2.0),
      (at(10, 8, 0), 3.0),
      (at(10, 12, 0), 4.0),
      (at(10, 16, 0), 5.0),
      (at(10, 20, 0), 6.0),
    ]);
    let rows = compute_indicators(&[eth, btc], at(10, 0, 0));
    assert_eq!(rows.len(), 2);
    assert!(rows.iter().all(|r| r.coin == "BTC"));
  }

  #[test]
  fn test_history_before_window_only_warms_up() {
    // 60 closes four minutes apart, ending at 09:56
    let now = at(10, 0, 0);
    let points: Vec<(NaiveDateTime, f64)> =
      (0..60).map(|i| (now - TimeDelta::minutes(4 * (60 - i)), 100.0 + (i % 7) as f64)).collect();
    let s = series(&points);
    let since = now - TimeDelta::minutes(4);

    assert_eq!(indicators_for(&s).len(), 56);
    let rows = compute_indicators(&[s.clone()], since);
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].ts, at(9, 56, 0));
    assert_eq!(rows[0], *indicators_for(&s).last().unwrap());
  }
}
