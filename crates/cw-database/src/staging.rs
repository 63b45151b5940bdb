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

//! Postgres implementation of the staging reads

use chrono::{NaiveDate, NaiveDateTime};
use diesel::dsl::max;
use diesel::pg::PgConnection;
use diesel::prelude::*;
use diesel::sql_query;
use diesel::sql_types::{BigInt, Date};
use log::debug;

use crate::models::{
  BlockchainStatistic, CryptoQuote, DominanceSnapshot, ExchangeRateQuote, MacroAverages,
  SentimentText,
};
use crate::repository::{StagingStore, StoreResult};
use crate::schema::{blockchain_statistics, crypto_data, dominance, exchange_rate, sentiment};

impl StagingStore for PgConnection {
  fn sentiment_since(&mut self, since: NaiveDateTime) -> StoreResult<Vec<SentimentText>> {
    let rows = sentiment::table
      .filter(sentiment::created_at.ge(since))
      .order(sentiment::created_at.asc())
      .select(SentimentText::as_select())
      .load(self)?;
    debug!("sentiment_since({}) -> {} rows", since, rows.len());
    Ok(rows)
  }

  fn crypto_quotes_since(&mut self, since: NaiveDateTime) -> StoreResult<Vec<CryptoQuote>> {
    let rows = crypto_data::table
      .filter(crypto_data::created_at.ge(since))
      .order(crypto_data::created_at.asc())
      .select(CryptoQuote::as_select())
      .load(self)?;
    debug!("crypto_quotes_since({}) -> {} rows", since, rows.len());
    Ok(rows)
  }

  fn crypto_history(
    &mut self,
    coin: &str,
    from: NaiveDateTime,
    to: NaiveDateTime,
  ) -> StoreResult<Vec<CryptoQuote>> {
    Ok(
      crypto_data::table
        .filter(crypto_data::coin.eq(coin))
        .filter(crypto_data::created_at.ge(from))
        .filter(crypto_data::created_at.le(to))
        .order(crypto_data::created_at.asc())
        .select(CryptoQuote::as_select())
        .load(self)?,
    )
  }

  fn latest_crypto_timestamp(&mut self) -> StoreResult<Option<NaiveDateTime>> {
    Ok(crypto_data::table.select(max(crypto_data::created_at)).first(self)?)
  }

  fn macro_averages(
    &mut self,
    from: NaiveDate,
    to: NaiveDate,
    limit: i64,
  ) -> StoreResult<Vec<MacroAverages>> {
    // DATE() joins are written raw; every value is still bound.
    Ok(
      sql_query(
        r#"
        SELECT
            g."timestamp" AS ts,
            (g.close + g.open) / 2 AS gold_price,
            (i.close + i.open) / 2 AS interest_rate,
            (s.close + s.open) / 2 AS stocks_price
        FROM "GoldPrice" g
        LEFT JOIN "InterestRate" i ON DATE(g."timestamp") = DATE(i."timestamp")
        LEFT JOIN "stocksPrices" s ON DATE(g."timestamp") = DATE(s."timestamp")
        WHERE DATE(g."timestamp") BETWEEN $1 AND $2
        ORDER BY g."timestamp" DESC
        LIMIT $3
        "#,
      )
      .bind::<Date, _>(from)
      .bind::<Date, _>(to)
      .bind::<BigInt, _>(limit)
      .load::<MacroAverages>(self)?,
    )
  }

  fn first_dominance_since(
    &mut self,
    since: NaiveDateTime,
  ) -> StoreResult<Option<DominanceSnapshot>> {
    Ok(
      dominance::table
        .filter(dominance::created_at.ge(since))
        .order(dominance::created_at.asc())
        .select(DominanceSnapshot::as_select())
        .first(self)
        .optional()?,
    )
  }

  fn exchange_rates_since(&mut self, since: NaiveDateTime) -> StoreResult<Vec<ExchangeRateQuote>> {
    Ok(
      exchange_rate::table
        .filter(exchange_rate::ts.ge(since))
        .order(exchange_rate::ts.asc())
        .select(ExchangeRateQuote::as_select())
        .load(self)?,
    )
  }

  fn blockchain_statistics_since(
    &mut self,
    since: NaiveDateTime,
  ) -> StoreResult<Vec<BlockchainStatistic>> {
    Ok(
      blockchain_statistics::table
        .filter(blockchain_statistics::created_at.ge(since))
        .order(blockchain_statistics::created_at.asc())
        .select(BlockchainStatistic::as_select())
        .load(self)?,
    )
  }
}
