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

//! # cw-etl
//!
//! Extract, transform and load stages for the crypto warehouse.
//!
//! One cycle walks eight domains in a fixed order:
//! - Sentiment scores of collected texts
//! - Macro correlation averages
//! - Coin prices with their 24h change
//! - Technical indicators (SMA, EMA, RSI) on 4-minute buckets
//! - Calendar decomposition of the latest observation
//! - Network statistics per symbol
//! - Fact rows joining price, dominance and exchange rate
//! - Static coin metadata
//!
//! Each domain fails on its own; the runner repeats cycles on a fixed interval.

pub mod context;
pub mod cycle;
pub mod error;
pub mod extract;
pub mod load;
pub mod process_tracker;
pub mod runner;
pub mod transform;

#[cfg(test)]
mod test_support;

pub use context::CycleContext;
pub use cycle::{run_cycle, CycleReport, Domain, DomainOutcome};
pub use error::{EtlError, EtlResult};
pub use process_tracker::{ProcessInfo, ProcessState, ProcessTracker};
pub use runner::{execute_cycle, CycleResources, EtlRunner, RunSummary, RunnerOptions, StopReason};

pub mod prelude {
  pub use crate::{
    run_cycle, CycleContext, CycleResources, EtlError, EtlResult, EtlRunner, ProcessTracker,
    RunnerOptions,
  };
}
