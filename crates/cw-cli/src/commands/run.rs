//! `cw run`: the long-running ETL loop

use anyhow::{Context, Result};
use clap::Args;
use cw_core::{Config, EtlSettings, WarehouseBackend, WarehouseConfig};
use cw_database::{establish_staging, open_warehouse, StagingStore, Warehouse};
use cw_etl::{CycleResources, EtlResult, EtlRunner, RunnerOptions, StopReason};
use tracing::{info, warn};

use super::init::init_warehouse;
use super::select_backend;

#[derive(Args, Debug)]
pub struct RunCommand {
  /// Warehouse backend (postgres or sqlite)
  #[arg(short, long, env = "WAREHOUSE_BACKEND")]
  pub warehouse: Option<WarehouseBackend>,

  /// Seconds to sleep between cycles
  #[arg(long)]
  pub interval: Option<u64>,

  /// Stop after this many hours
  #[arg(long)]
  pub max_runtime_hours: Option<u64>,

  /// Trailing extraction window in minutes
  #[arg(long)]
  pub window_minutes: Option<i64>,

  /// Run a single cycle and exit
  #[arg(long, conflicts_with = "cycles")]
  pub once: bool,

  /// Stop after this many cycles
  #[arg(long)]
  pub cycles: Option<u64>,

  /// Create missing warehouse tables before the first cycle
  #[arg(long)]
  pub init: bool,
}

impl RunCommand {
  pub fn cycle_limit(&self) -> Option<u64> {
    if self.once {
      Some(1)
    } else {
      self.cycles
    }
  }

  /// Settings from the environment with command-line overrides applied
  pub fn settings(&self, base: &EtlSettings) -> Result<EtlSettings> {
    let mut settings = base.clone();
    if let Some(interval) = self.interval {
      settings.interval_secs = interval;
    }
    if let Some(hours) = self.max_runtime_hours {
      settings.max_runtime_hours = hours;
    }
    if let Some(minutes) = self.window_minutes {
      settings.window_minutes = minutes;
    }
    settings.validate().context("Invalid ETL settings")?;
    Ok(settings)
  }
}

/// Opens a fresh staging connection and warehouse connection for every cycle
struct DatabaseResources {
  staging_url: String,
  backend: WarehouseBackend,
  warehouse: WarehouseConfig,
}

impl CycleResources for DatabaseResources {
  fn open_staging(&self) -> EtlResult<Box<dyn StagingStore + Send>> {
    let conn = establish_staging(&self.staging_url)?;
    Ok(Box::new(conn))
  }

  fn open_warehouse(&self) -> EtlResult<Box<dyn Warehouse + Send>> {
    let conn = open_warehouse(self.backend, &self.warehouse)?;
    Ok(Box::new(conn))
  }
}

pub async fn execute(cmd: RunCommand, config: Config) -> Result<()> {
  let settings = cmd.settings(&config.etl)?;
  let staging_url = config.staging.require_url()?.to_string();
  let backend = select_backend(cmd.warehouse, &config.warehouse)?;

  if cmd.init {
    init_warehouse(backend, &config.warehouse)?;
  }

  info!(
    backend = %backend,
    interval_secs = settings.interval_secs,
    window_minutes = settings.window_minutes,
    blockchain_source = %settings.blockchain_source,
    "Starting crypto warehouse ETL"
  );

  let options = RunnerOptions::from_settings(&settings, cmd.cycle_limit());
  let resources = DatabaseResources { staging_url, backend, warehouse: config.warehouse };
  let runner = EtlRunner::new(resources, settings, options);

  let summary = runner.run().await.context("ETL loop aborted")?;

  let reason = match summary.stop_reason {
    StopReason::MaxRuntime => "maximum runtime reached",
    StopReason::CycleLimit => "cycle limit reached",
    StopReason::Interrupted => "interrupted",
  };
  info!(
    cycles = summary.cycles,
    rows = summary.rows_loaded,
    failed_domains = summary.failed_domains,
    "ETL stopped: {}",
    reason
  );
  if summary.skipped_cycles > 0 {
    warn!("{} cycles skipped because staging was unreachable", summary.skipped_cycles);
  }

  Ok(())
}
