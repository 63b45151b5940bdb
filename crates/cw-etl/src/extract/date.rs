use cw_database::StagingStore;
use tracing::info;

use crate::transform::TimestampInput;
use crate::{CycleContext, EtlResult};

/// Timestamp of the most recent crypto quote, when it falls inside the window
pub fn extract_latest_timestamp(
  store: &mut dyn StagingStore,
  ctx: &CycleContext,
) -> EtlResult<Option<TimestampInput>> {
  let since = ctx.window_start()?;
  match store.latest_crypto_timestamp()? {
    None => {
      info!("No crypto quotes yet; nothing to add to the date dimension");
      Ok(None)
    }
    Some(latest) if latest < since => {
      info!("Latest crypto quote at {} predates the window; no new date row", latest);
      Ok(None)
    }
    Some(latest) => Ok(Some(TimestampInput::Structured(latest))),
  }
}
