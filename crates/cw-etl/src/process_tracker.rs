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

//! Process tracking for monitoring ETL domains
//! In-memory only; one entry per domain run

use crate::{EtlError, EtlResult};
use chrono::{DateTime, Utc};
use std::sync::{Arc, Mutex, MutexGuard};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProcessState {
  Running,
  Success,
  Failed,
}

#[derive(Debug, Clone)]
pub struct ProcessInfo {
  pub process_name: String,
  pub start_time: DateTime<Utc>,
  pub end_time: Option<DateTime<Utc>>,
  pub state: ProcessState,
  pub error_message: Option<String>,
  pub records_processed: Option<usize>,
}

/// In-memory process tracker; clones share the same log
#[derive(Clone, Default)]
pub struct ProcessTracker {
  processes: Arc<Mutex<Vec<ProcessInfo>>>,
}

impl ProcessTracker {
  pub fn new() -> Self {
    Self::default()
  }

  fn lock(&self) -> EtlResult<MutexGuard<'_, Vec<ProcessInfo>>> {
    self.processes.lock().map_err(|e| EtlError::ProcessTrackingError(e.to_string()))
  }

  pub fn start(&self, process_name: &str) -> EtlResult<()> {
    let mut processes = self.lock()?;
    processes.push(ProcessInfo {
      process_name: process_name.to_string(),
      start_time: Utc::now(),
      end_time: None,
      state: ProcessState::Running,
      error_message: None,
      records_processed: None,
    });
    Ok(())
  }

  pub fn succeed(&self, records: usize) -> EtlResult<()> {
    self.finish(ProcessState::Success, Some(records), None)
  }

  pub fn fail(&self, error: &EtlError) -> EtlResult<()> {
    self.finish(ProcessState::Failed, None, Some(error.to_string()))
  }

  fn finish(
    &self,
    state: ProcessState,
    records: Option<usize>,
    error_message: Option<String>,
  ) -> EtlResult<()> {
    let mut processes = self.lock()?;
    if let Some(last) = processes.last_mut() {
      last.state = state;
      last.end_time = Some(Utc::now());
      last.records_processed = records;
      last.error_message = error_message;
    }
    Ok(())
  }

  pub fn get_all(&self) -> Vec<ProcessInfo> {
    self.lock().map(|p| p.clone()).unwrap_or_default()
  }

  /// Number of tracked runs that ended in `state`
  pub fn count(&self, state: ProcessState) -> usize {
    self.lock().map(|p| p.iter().filter(|info| info.state == state).count()).unwrap_or(0)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_start_and_succeed() {
    let tracker = ProcessTracker::new();
    tracker.start("sentiment").unwrap();
    tracker.succeed(12).unwrap();

    let all = tracker.get_all();
    assert_eq!(all.len(), 1);
    assert_eq!(all[0].process_name, "sentiment");
    assert_eq!(all[0].state, ProcessState::Success);
    assert_eq!(all[0].records_processed, Some(12));
    assert!(all[0].end_time.is_some());
  }

  #[test]
  fn test_failure_records_message() {
    let tracker = ProcessTracker::new();
    tracker.start("fact").unwrap();
    tracker.fail(&EtlError::StagingError("timeout".into())).unwrap();

    let all = tracker.get_all();
    assert_eq!(all[0].state, ProcessState::Failed);
    assert_eq!(all[0].error_message.as_deref(), Some("Staging store error: timeout"));
    assert_eq!(tracker.count(ProcessState::Failed), 1);
    assert_eq!(tracker.count(ProcessState::Success), 0);
  }

  #[test]
  fn test_clones_share_state() {
    let tracker = ProcessTracker::new();
    let other = tracker.clone();
    other.start("date").unwrap();
    assert_eq!(tracker.get_all().len(), 1);
    assert_eq!(tracker.count(ProcessState::Running), 1);
  }

  #[test]
  fn test_finish_without_start_is_noop() {
    let tracker = ProcessTracker::new();
    tracker.succeed(3).unwrap();
    assert!(tracker.get_all().is_empty());
  }
}
