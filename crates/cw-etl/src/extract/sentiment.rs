use cw_database::StagingStore;
use tracing::{debug, info};

use super::SentimentRecord;
use crate::{CycleContext, EtlResult};

/// Texts collected inside the window. Rows with no content carry nothing to
/// score and are skipped.
pub fn extract_sentiment(
  store: &mut dyn StagingStore,
  ctx: &CycleContext,
) -> EtlResult<Vec<SentimentRecord>> {
  let rows = store.sentiment_since(ctx.window_start()?)?;
  let total = rows.len();

  let records: Vec<SentimentRecord> = rows
    .into_iter()
    .filter_map(|row| {
      row
        .content
        .filter(|c| !c.trim().is_empty())
        .map(|content| SentimentRecord { ts: row.created_at, content })
    })
    .collect();

  if total > records.len() {
    debug!("Skipped {} sentiment rows without content", total - records.len());
  }
  if records.is_empty() {
    info!("No sentiment data in the last {} minutes", ctx.settings.window_minutes);
  }
  Ok(records)
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::test_support::{context, MockStaging};
  use cw_database::models::SentimentText;
  use cw_database::StoreError;

  #[test]
  fn test_extract_skips_empty_content() {
    let ctx = context();
    let now = ctx.now;
    let mut store = MockStaging::new();
    store.expect_sentiment_since().times(1).returning(move |since| {
      assert_eq!(since, now - chrono::TimeDelta::minutes(4));
      Ok(vec![
        SentimentText { created_at: now, content: Some("bullish".into()) },
        SentimentText { created_at: now, content: None },
        SentimentText { created_at: now, content: Some("   ".into()) },
      ])
    });

    let records = extract_sentiment(&mut store, &ctx).unwrap();
    assert_eq!(records, vec![SentimentRecord { ts: now, content: "bullish".into() }]);
  }

  #[test]
  fn test_store_failure_propagates() {
    let ctx = context();
    let mut store = MockStaging::new();
    store
      .expect_sentiment_since()
      .returning(|_| Err(StoreError::QueryError("relation \"sentiment\" does not exist".into())));

    assert!(extract_sentiment(&mut store, &ctx).is_err());
  }
}
