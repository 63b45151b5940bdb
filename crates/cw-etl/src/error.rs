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

use cw_database::StoreError;
use thiserror::Error;

#[derive(Error, Debug, Clone)]
pub enum EtlError {
  #[error("Staging store error: {0}")]
  StagingError(String),

  #[error("Warehouse error: {0}")]
  WarehouseError(String),

  #[error("Invalid timestamp: {0}")]
  InvalidTimestamp(String),

  #[error("Process tracking error: {0}")]
  ProcessTrackingError(String),

  #[error("Configuration error: {0}")]
  ConfigurationError(String),

  #[error("Task error: {0}")]
  TaskError(String),
}

// Implement conversions manually
impl From<StoreError> for EtlError {
  fn from(err: StoreError) -> Self {
    match err {
      StoreError::ConfigurationError(msg) => EtlError::ConfigurationError(msg),
      StoreError::InsertError(msg) => EtlError::WarehouseError(msg),
      other => EtlError::StagingError(other.to_string()),
    }
  }
}

impl From<chrono::ParseError> for EtlError {
  fn from(err: chrono::ParseError) -> Self {
    EtlError::InvalidTimestamp(err.to_string())
  }
}

impl From<diesel::ConnectionError> for EtlError {
  fn from(err: diesel::ConnectionError) -> Self {
    EtlError::StagingError(err.to_string())
  }
}

impl From<tokio::task::JoinError> for EtlError {
  fn from(err: tokio::task::JoinError) -> Self {
    EtlError::TaskError(err.to_string())
  }
}

pub type EtlResult<T> = Result<T, EtlError>;

/// Tag a store failure raised while writing, so reports can tell the two stores apart
pub(crate) fn warehouse_err(err: StoreError) -> EtlError {
  EtlError::WarehouseError(err.to_string())
}
