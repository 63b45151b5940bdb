//! Enumerated settings shared by the ETL crates

use crate::error::Error;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Analytical backend the loaders write into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WarehouseBackend {
  Postgres,
  Sqlite,
}

impl WarehouseBackend {
  pub const ALL: [WarehouseBackend; 2] = [WarehouseBackend::Postgres, WarehouseBackend::Sqlite];

  pub fn as_str(&self) -> &'static str {
    match self {
      WarehouseBackend::Postgres => "postgres",
      WarehouseBackend::Sqlite => "sqlite",
    }
  }
}

impl fmt::Display for WarehouseBackend {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}", self.as_str())
  }
}

impl FromStr for WarehouseBackend {
  type Err = Error;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    match s.trim().to_ascii_lowercase().as_str() {
      "postgres" | "postgresql" | "pg" => Ok(WarehouseBackend::Postgres),
      "sqlite" | "sqlite3" => Ok(WarehouseBackend::Sqlite),
      other => {
        Err(Error::UnknownVariant { kind: "warehouse backend", value: other.to_string() })
      }
    }
  }
}

/// Where blockchain snapshots come from.
///
/// `Simulated` draws values from fixed per-symbol ranges and never touches the
/// staging store; `Live` reads the rows collectors wrote to
/// `blockchain_statistics`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BlockchainSourceKind {
  #[default]
  Simulated,
  Live,
}

impl fmt::Display for BlockchainSourceKind {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      BlockchainSourceKind::Simulated => write!(f, "simulated"),
      BlockchainSourceKind::Live => write!(f, "live"),
    }
  }
}

impl FromStr for BlockchainSourceKind {
  type Err = Error;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    match s.trim().to_ascii_lowercase().as_str() {
      "simulated" | "synthetic" => Ok(BlockchainSourceKind::Simulated),
      "live" | "api" => Ok(BlockchainSourceKind::Live),
      other => {
        Err(Error::UnknownVariant { kind: "blockchain source", value: other.to_string() })
      }
    }
  }
}
