pub mod init;
pub mod run;
pub mod stats;

use anyhow::Result;
use cw_core::{WarehouseBackend, WarehouseConfig};
use dialoguer::{theme::ColorfulTheme, Select};

/// Backend from the command line, else from the environment, else asked for
pub fn select_backend(
  flag: Option<WarehouseBackend>,
  config: &WarehouseConfig,
) -> Result<WarehouseBackend> {
  if let Some(backend) = flag.or(config.backend) {
    return Ok(backend);
  }

  let choice = Select::with_theme(&ColorfulTheme::default())
    .with_prompt("Select warehouse backend")
    .items(&WarehouseBackend::ALL)
    .default(0)
    .interact()?;

  Ok(WarehouseBackend::ALL[choice])
}
