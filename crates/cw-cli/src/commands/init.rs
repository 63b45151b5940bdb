//! `cw init`: create missing tables on the staging store and the warehouse

use anyhow::{Context, Result};
use clap::Args;
use cw_core::{Config, WarehouseBackend, WarehouseConfig};
use cw_database::ddl::{apply_staging_ddl, apply_warehouse_ddl};
use cw_database::{establish_staging, open_warehouse};
use tracing::info;

use super::select_backend;

#[derive(Args, Debug)]
pub struct InitCommand {
  /// Warehouse backend (postgres or sqlite)
  #[arg(short, long, env = "WAREHOUSE_BACKEND")]
  pub warehouse: Option<WarehouseBackend>,

  /// Only create the staging tables
  #[arg(long, conflicts_with = "warehouse_only")]
  pub staging_only: bool,

  /// Only create the warehouse tables
  #[arg(long)]
  pub warehouse_only: bool,
}

pub fn execute(cmd: InitCommand, config: &Config) -> Result<()> {
  if !cmd.warehouse_only {
    init_staging(config.staging.require_url()?)?;
  }

  if !cmd.staging_only {
    let backend = select_backend(cmd.warehouse, &config.warehouse)?;
    init_warehouse(backend, &config.warehouse)?;
  }

  Ok(())
}

pub fn init_staging(url: &str) -> Result<()> {
  let mut conn = establish_staging(url).context("Failed to connect to staging database")?;
  apply_staging_ddl(&mut conn).context("Failed to create staging tables")?;
  info!("Staging tables ready");
  Ok(())
}

pub fn init_warehouse(backend: WarehouseBackend, config: &WarehouseConfig) -> Result<()> {
  let mut conn = open_warehouse(backend, config)
    .with_context(|| format!("Failed to open {} warehouse", backend))?;
  apply_warehouse_ddl(&mut conn).context("Failed to create warehouse tables")?;
  info!(backend = %backend, "Warehouse tables ready");
  Ok(())
}
