//! Configuration management for the ETL process

use crate::error::{Error, Result};
use crate::types::{BlockchainSourceKind, WarehouseBackend};
use dotenvy::dotenv;
use serde::{Deserialize, Serialize};
use std::env;
use std::str::FromStr;

/// Main configuration struct, assembled from the environment
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
  pub staging: StagingConfig,
  pub warehouse: WarehouseConfig,
  pub etl: EtlSettings,
}

/// Operational store the collectors write into
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct StagingConfig {
  /// Full connection URL, either given directly or assembled from parts
  pub database_url: Option<String>,
}

/// Analytical store the loaders write into
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct WarehouseConfig {
  /// Backend chosen through the environment; `None` means ask at startup
  pub backend: Option<WarehouseBackend>,

  /// Connection URL for the postgres backend
  pub postgres_url: Option<String>,

  /// Schema placed on the postgres `search_path`
  pub schema: Option<String>,

  /// Database file for the sqlite backend
  pub sqlite_path: String,
}

/// Cycle timing and extraction windows
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct EtlSettings {
  /// Sleep between cycles in seconds
  pub interval_secs: u64,

  /// Wall-clock budget for the whole run
  pub max_runtime_hours: u64,

  /// Trailing extraction window in minutes
  pub window_minutes: i64,

  /// Day window for the macro correlation extract
  pub correlation_days: i64,

  /// Day window of closes used for indicators
  pub indicator_days: i64,

  pub blockchain_source: BlockchainSourceKind,
}

impl Default for EtlSettings {
  fn default() -> Self {
    Self {
      interval_secs: crate::DEFAULT_CYCLE_INTERVAL_SECS,
      max_runtime_hours: crate::DEFAULT_MAX_RUNTIME_HOURS,
      window_minutes: crate::DEFAULT_WINDOW_MINUTES,
      correlation_days: crate::DEFAULT_CORRELATION_DAYS,
      indicator_days: crate::DEFAULT_INDICATOR_DAYS,
      blockchain_source: BlockchainSourceKind::default(),
    }
  }
}

impl Config {
  /// Load configuration from environment variables
  pub fn from_env() -> Result<Self> {
    dotenv().ok();

    let staging = StagingConfig { database_url: staging_url_from_env() };

    let backend = match non_empty_var("WAREHOUSE_BACKEND") {
      Some(value) => Some(value.parse::<WarehouseBackend>()?),
      None => None,
    };

    let warehouse = WarehouseConfig {
      backend,
      postgres_url: non_empty_var("WAREHOUSE_DATABASE_URL"),
      schema: non_empty_var("WAREHOUSE_SCHEMA"),
      sqlite_path: non_empty_var("WAREHOUSE_SQLITE_PATH")
        .unwrap_or_else(|| crate::DEFAULT_SQLITE_PATH.to_string()),
    };

    let defaults = EtlSettings::default();
    let etl = EtlSettings {
      interval_secs: parse_var("ETL_INTERVAL_SECS", defaults.interval_secs)?,
      max_runtime_hours: parse_var("ETL_MAX_RUNTIME_HOURS", defaults.max_runtime_hours)?,
      window_minutes: parse_var("ETL_WINDOW_MINUTES", defaults.window_minutes)?,
      correlation_days: parse_var("ETL_CORRELATION_DAYS", defaults.correlation_days)?,
      indicator_days: parse_var("ETL_INDICATOR_DAYS", defaults.indicator_days)?,
      blockchain_source: match non_empty_var("ETL_BLOCKCHAIN_SOURCE") {
        Some(value) => value.parse()?,
        None => defaults.blockchain_source,
      },
    };

    etl.validate()?;

    Ok(Config { staging, warehouse, etl })
  }
}

impl EtlSettings {
  /// Reject windows that are non-positive or too large to subtract from a timestamp
  pub fn validate(&self) -> Result<()> {
    check_range("ETL_WINDOW_MINUTES", self.window_minutes, crate::MAX_WINDOW_MINUTES)?;
    check_range("ETL_CORRELATION_DAYS", self.correlation_days, crate::MAX_LOOKBACK_DAYS)?;
    check_range("ETL_INDICATOR_DAYS", self.indicator_days, crate::MAX_LOOKBACK_DAYS)?;
    Ok(())
  }
}

fn check_range(name: &str, value: i64, max: i64) -> Result<()> {
  if value <= 0 || value > max {
    return Err(Error::Config(format!("{} must be between 1 and {}, got {}", name, max, value)));
  }
  Ok(())
}

impl StagingConfig {
  /// The staging URL, or an error naming the variables to set
  pub fn require_url(&self) -> Result<&str> {
    self.database_url.as_deref().ok_or_else(|| {
      Error::MissingSetting(
        "STAGING_DATABASE_URL (or STAGING_HOST/STAGING_USER/STAGING_PASSWORD/STAGING_DATABASE)"
          .to_string(),
      )
    })
  }
}

impl WarehouseConfig {
  /// The postgres warehouse URL, or an error when it is not configured
  pub fn require_postgres_url(&self) -> Result<&str> {
    self
      .postgres_url
      .as_deref()
      .ok_or_else(|| Error::MissingSetting("WAREHOUSE_DATABASE_URL".to_string()))
  }
}

fn non_empty_var(name: &str) -> Option<String> {
  env::var(name).ok().map(|v| v.trim().to_string()).filter(|v| !v.is_empty())
}

fn parse_var<T: FromStr>(name: &str, default: T) -> Result<T> {
  match non_empty_var(name) {
    Some(raw) => raw.parse().map_err(|_| Error::Config(format!("Invalid {}", name))),
    None => Ok(default),
  }
}

fn staging_url_from_env() -> Option<String> {
  if let Some(url) = non_empty_var("STAGING_DATABASE_URL") {
    return Some(url);
  }

  let host = non_empty_var("STAGING_HOST")?;
  let user = non_empty_var("STAGING_USER")?;
  let database = non_empty_var("STAGING_DATABASE")?;
  let credentials = match non_empty_var("STAGING_PASSWORD") {
    Some(password) => format!("{}:{}", user, password),
    None => user,
  };

  Some(format!("postgres://{}@{}/{}", credentials, host, database))
}
