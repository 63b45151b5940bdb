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

//! Long-running loop: one cycle, a fixed sleep, repeat until told to stop

use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use cw_core::EtlSettings;
use cw_database::{StagingStore, Warehouse};
use tokio::time::{sleep, Instant};
use tracing::{error, info, warn};

use crate::cycle::{run_cycle, CycleReport};
use crate::{CycleContext, EtlResult, ProcessTracker};

/// Opens the per-cycle connections. Both are dropped when the cycle ends.
pub trait CycleResources: Send + Sync + 'static {
  fn open_staging(&self) -> EtlResult<Box<dyn StagingStore + Send>>;

  fn open_warehouse(&self) -> EtlResult<Box<dyn Warehouse + Send>>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopReason {
  MaxRuntime,
  CycleLimit,
  Interrupted,
}

#[derive(Debug, Clone)]
pub struct RunnerOptions {
  pub interval: Duration,
  pub max_runtime: Duration,
  /// Stop after this many cycles; `None` runs until the runtime budget is spent
  pub cycle_limit: Option<u64>,
}

impl RunnerOptions {
  pub fn from_settings(settings: &EtlSettings, cycle_limit: Option<u64>) -> Self {
    Self {
      interval: Duration::from_secs(settings.interval_secs),
      max_runtime: Duration::from_secs(settings.max_runtime_hours.saturating_mul(3600)),
      cycle_limit,
    }
  }
}

#[derive(Debug, Clone)]
pub struct RunSummary {
  pub cycles: u64,
  /// Cycles abandoned because the staging store could not be opened
  pub skipped_cycles: u64,
  pub rows_loaded: usize,
  pub failed_domains: usize,
  pub stop_reason: StopReason,
}

/// Run one cycle with freshly opened connections. Returns `None` when the
/// staging store is unreachable; a missing warehouse only makes the loaders skip.
pub fn execute_cycle<R: CycleResources + ?Sized>(
  resources: &R,
  settings: &EtlSettings,
  tracker: &ProcessTracker,
) -> Option<CycleReport> {
  let ctx = CycleContext::starting_now(settings.clone());

  let mut staging = match resources.open_staging() {
    Ok(s) => s,
    Err(e) => {
      error!("Cannot open staging store, skipping cycle: {}", e);
      return None;
    }
  };

  let mut warehouse = match resources.open_warehouse() {
    Ok(w) => Some(w),
    Err(e) => {
      warn!("Cannot open warehouse: {}", e);
      None
    }
  };

  let report = run_cycle(
    staging.as_mut(),
    warehouse.as_deref_mut().map(|w| w as &mut dyn Warehouse),
    &ctx,
    tracker,
  );
  Some(report)
}

pub struct EtlRunner<R> {
  resources: Arc<R>,
  settings: EtlSettings,
  options: RunnerOptions,
  tracker: ProcessTracker,
}

impl<R: CycleResources> EtlRunner<R> {
  pub fn new(resources: R, settings: EtlSettings, options: RunnerOptions) -> Self {
    Self { resources: Arc::new(resources), settings, options, tracker: ProcessTracker::new() }
  }

  pub fn tracker(&self) -> &ProcessTracker {
    &self.tracker
  }

  /// Run until the runtime budget, the cycle limit, or Ctrl-C
  pub async fn run(&self) -> EtlResult<RunSummary> {
    self.run_until(ctrl_c()).await
  }

  /// Run until the runtime budget, the cycle limit, or `shutdown` resolves.
  /// `shutdown` is only observed between cycles.
  pub async fn run_until<F>(&self, shutdown: F) -> EtlResult<RunSummary>
  where
    F: Future<Output = ()>,
  {
    tokio::pin!(shutdown);
    let started = Instant::now();
    let mut summary = RunSummary {
      cycles: 0,
      skipped_cycles: 0,
      rows_loaded: 0,
      failed_domains: 0,
      stop_reason: StopReason::MaxRuntime,
    };

    info!(
      interval_secs = self.options.interval.as_secs(),
      max_runtime_secs = self.options.max_runtime.as_secs(),
      "Starting ETL loop"
    );

    loop {
      if started.elapsed() >= self.options.max_runtime {
        info!("Maximum runtime reached");
        summary.stop_reason = StopReason::MaxRuntime;
        break;
      }

      summary.cycles += 1;
      let cycle = summary.cycles;
      info!(cycle, "Starting ETL cycle");

      let resources = Arc::clone(&self.resources);
      let settings = self.settings.clone();
      let tracker = self.tracker.clone();
      let report =
        tokio::task::spawn_blocking(move || execute_cycle(resources.as_ref(), &settings, &tracker))
          .await?;

      match report {
        Some(report) => {
          let failed = report.failed().count();
          summary.rows_loaded += report.rows_loaded();
          summary.failed_domains += failed;
          info!(cycle, rows = report.rows_loaded(), failed, "ETL cycle finished");
        }
        None => summary.skipped_cycles += 1,
      }

      if self.options.cycle_limit.is_some_and(|limit| cycle >= limit) {
        info!(cycle, "Cycle limit reached");
        summary.stop_reason = StopReason::CycleLimit;
        break;
      }

      info!("Sleeping {}s before the next cycle", self.options.interval.as_secs());
      tokio::select! {
        _ = sleep(self.options.interval) => {}
        _ = &mut shutdown => {
          info!("Shutdown requested");
          summary.stop_reason = StopReason::Interrupted;
          break;
        }
      }
    }

    Ok(summary)
  }
}

async fn ctrl_c() {
  if let Err(e) = tokio::signal::ctrl_c().await {
    error!("Cannot listen for Ctrl-C: {}", e);
    std::future::pending::<()>().await;
  }
}
