use thiserror::Error;

/// The main error type for cw-* crates
#[derive(Error, Debug)]
pub enum Error {
  /// Configuration error
  #[error("Configuration error: {0}")]
  Config(String),

  /// Missing required setting
  #[error("Missing required setting: {0}")]
  MissingSetting(String),

  /// Unknown value for an enumerated setting
  #[error("Unknown {kind}: {value}")]
  UnknownVariant { kind: &'static str, value: String },
}

/// Result type alias for cw-* crates
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_unknown_variant_display() {
    let err = Error::UnknownVariant { kind: "warehouse backend", value: "hive".to_string() };
    assert_eq!(err.to_string(), "Unknown warehouse backend: hive");
  }

  #[test]
  fn test_missing_setting_display() {
    let err = Error::MissingSetting("STAGING_DATABASE_URL".to_string());
    assert!(err.to_string().contains("STAGING_DATABASE_URL"));
  }
}
