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

//! One ETL cycle: every domain in order, each inside its own failure boundary

use std::fmt;

use chrono::NaiveDateTime;
use cw_database::{StagingStore, Warehouse};
use tracing::{error, info, warn};

use crate::extract;
use crate::load;
use crate::transform::{self, SentimentAnalyzer};
use crate::{CycleContext, EtlResult, ProcessTracker};

/// Warehouse domains, in execution order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Domain {
  Sentiment,
  Correlation,
  Coins,
  Indicators,
  Date,
  Blockchain,
  Fact,
  Metadata,
}

impl Domain {
  pub const ALL: [Domain; 8] = [
    Domain::Sentiment,
    Domain::Correlation,
    Domain::Coins,
    Domain::Indicators,
    Domain::Date,
    Domain::Blockchain,
    Domain::Fact,
    Domain::Metadata,
  ];

  pub fn as_str(&self) -> &'static str {
    match self {
      Domain::Sentiment => "sentiment",
      Domain::Correlation => "correlation",
      Domain::Coins => "coins",
      Domain::Indicators => "indicators",
      Domain::Date => "date",
      Domain::Blockchain => "blockchain",
      Domain::Fact => "fact",
      Domain::Metadata => "metadata",
    }
  }
}

impl fmt::Display for Domain {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.as_str())
  }
}

#[derive(Debug, Clone)]
pub struct DomainOutcome {
  pub domain: Domain,
  /// Rows loaded, or why the domain gave up
  pub result: EtlResult<usize>,
}

#[derive(Debug, Clone)]
pub struct CycleReport {
  pub started_at: NaiveDateTime,
  pub outcomes: Vec<DomainOutcome>,
}

impl CycleReport {
  pub fn rows_loaded(&self) -> usize {
    self.outcomes.iter().filter_map(|o| o.result.as_ref().ok()).sum()
  }

  pub fn failed(&self) -> impl Iterator<Item = &DomainOutcome> {
    self.outcomes.iter().filter(|o| o.result.is_err())
  }

  pub fn succeeded(&self) -> impl Iterator<Item = &DomainOutcome> {
    self.outcomes.iter().filter(|o| o.result.is_ok())
  }

  pub fn outcome(&self, domain: Domain) -> Option<&DomainOutcome> {
    self.outcomes.iter().find(|o| o.domain == domain)
  }
}

fn reborrow<'a>(warehouse: &'a mut Option<&mut dyn Warehouse>) -> Option<&'a mut dyn Warehouse> {
  match warehouse {
    Some(wh) => Some(&mut **wh),
    None => None,
  }
}

/// Run every domain once. A failing domain is logged and recorded; the
/// remaining domains still run.
pub fn run_cycle(
  staging: &mut dyn StagingStore,
  mut warehouse: Option<&mut dyn Warehouse>,
  ctx: &CycleContext,
  tracker: &ProcessTracker,
) -> CycleReport {
  if warehouse.is_none() {
    warn!("No warehouse connection for this cycle; loaders will skip");
  }

  let analyzer = SentimentAnalyzer::new();
  let mut outcomes = Vec::with_capacity(Domain::ALL.len());

  for domain in Domain::ALL {
    if let Err(e) = tracker.start(domain.as_str()) {
      warn!(domain = %domain, "Process tracking unavailable: {}", e);
    }

    let result = run_domain(domain, staging, reborrow(&mut warehouse), ctx, &analyzer);

    let tracked = match &result {
      Ok(rows) => {
        info!(domain = %domain, rows = *rows, "Domain loaded");
        tracker.succeed(*rows)
      }
      Err(e) => {
        error!(domain = %domain, "Domain failed: {}", e);
        tracker.fail(e)
      }
    };
    if let Err(e) = tracked {
      warn!(domain = %domain, "Process tracking unavailable: {}", e);
    }

    outcomes.push(DomainOutcome { domain, result });
  }

  CycleReport { started_at: ctx.now, outcomes }
}

fn run_domain(
  domain: Domain,
  staging: &mut dyn StagingStore,
  warehouse: Option<&mut dyn Warehouse>,
  ctx: &CycleContext,
  analyzer: &SentimentAnalyzer,
) -> EtlResult<usize> {
  match domain {
    Domain::Sentiment => {
      let records = extract::extract_sentiment(staging, ctx)?;
      let rows = transform::score_sentiment(analyzer, &records);
      load::load_sentiment(warehouse, &rows)
    }
    Domain::Correlation => {
      let averages = extract::extract_correlations(staging, ctx)?;
      load::load_correlations(warehouse, &transform::to_correlations(&averages))
    }
    Domain::Coins => {
      let snapshots = extract::extract_coins(staging, ctx)?;
      load::load_crypto_dims(warehouse, &transform::to_crypto_dims(&snapshots))
    }
    Domain::Indicators => {
      let series = extract::extract_close_series(staging, ctx)?;
      let rows = transform::compute_indicators(&series, ctx.window_start()?);
      load::load_indicators(warehouse, &rows)
    }
    Domain::Date => {
      let Some(latest) = extract::extract_latest_timestamp(staging, ctx)? else {
        return Ok(0);
      };
      let row = transform::decompose(&latest)?;
      load::load_dates(warehouse, &[row])
    }
    Domain::Blockchain => {
      let rows = extract::extract_blockchain(staging, ctx)?;
      load::load_blockchain_info(warehouse, &rows)
    }
    Domain::Fact => {
      let inputs = extract::extract_facts(staging, ctx)?;
      load::load_facts(warehouse, &transform::to_facts(&inputs))
    }
    Domain::Metadata => {
      let rows = extract::crypto_metadata()?;
      load::load_crypto_info(warehouse, &rows)
    }
  }
}
