use anyhow::{Context, Result};
use clap::Args;
use cw_core::{Config, WarehouseBackend};
use cw_database::open_warehouse;
use tracing::info;

use super::select_backend;

#[derive(Args, Debug)]
pub struct StatsCommand {
  /// Warehouse backend (postgres or sqlite)
  #[arg(short, long, env = "WAREHOUSE_BACKEND")]
  pub warehouse: Option<WarehouseBackend>,
}

pub fn execute(cmd: StatsCommand, config: &Config) -> Result<()> {
  let backend = select_backend(cmd.warehouse, &config.warehouse)?;
  let mut conn = open_warehouse(backend, &config.warehouse)
    .with_context(|| format!("Failed to open {} warehouse", backend))?;

  info!("Counting warehouse rows...");
  let counts = conn.row_counts().context("Failed to count warehouse rows")?;
  print!("{}", render(backend, &counts));
  Ok(())
}

fn render(backend: WarehouseBackend, counts: &[(&str, i64)]) -> String {
  let mut out = format!("📊 Warehouse Statistics ({})\n", backend);
  out.push_str("================================\n");
  for (table, rows) in counts {
    out.push_str(&format!("  {:<22}{:>10}\n", table, rows));
  }
  let total: i64 = counts.iter().map(|(_, n)| n).sum();
  out.push_str(&format!("  {:<22}{:>10}\n", "total", total));
  out
}

#[cfg(test)]
mod tests {
  use super::*;
  use pretty_assertions::assert_eq;

  #[test]
  fn test_render_counts() {
    let out = render(WarehouseBackend::Sqlite, &[("date_dim", 3), ("fact_table", 12)]);
    let lines: Vec<&str> = out.lines().collect();
    assert_eq!(lines[0], "📊 Warehouse Statistics (sqlite)");
    assert_eq!(lines.len(), 5);
    assert!(lines[2].starts_with("  date_dim"));
    assert!(lines[2].ends_with("3"));
    assert!(lines[4].ends_with("15"));
  }
}
