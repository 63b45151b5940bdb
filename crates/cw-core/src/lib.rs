pub mod config;
pub mod error;
pub mod types;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use config::{Config, EtlSettings, StagingConfig, WarehouseConfig};
pub use error::{Error, Result};
pub use types::{BlockchainSourceKind, WarehouseBackend};

/// Symbols the warehouse tracks for static metadata and blockchain snapshots.
pub const TRACKED_SYMBOLS: [&str; 6] = ["BTC", "ETH", "BNB", "ADA", "SOL", "XRP"];

/// Canonical timestamp layout used for every textual timestamp in the warehouse.
pub const CANONICAL_TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Defaults for the ETL cycle
pub const DEFAULT_CYCLE_INTERVAL_SECS: u64 = 4 * 60;
pub const DEFAULT_MAX_RUNTIME_HOURS: u64 = 24;
pub const DEFAULT_WINDOW_MINUTES: i64 = 4;
pub const DEFAULT_CORRELATION_DAYS: i64 = 4;
pub const DEFAULT_INDICATOR_DAYS: i64 = 30;
pub const DEFAULT_SQLITE_PATH: &str = "./warehouse.db";

/// Upper bounds for the extraction windows
pub const MAX_WINDOW_MINUTES: i64 = 7 * 24 * 60;
pub const MAX_LOOKBACK_DAYS: i64 = 3650;
