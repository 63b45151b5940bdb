use std::collections::BTreeMap;

use cw_database::StagingStore;
use tracing::info;

use crate::transform::CloseSeries;
use crate::{CycleContext, EtlResult};

/// Closes over the indicator look-back, one series per coin
pub fn extract_close_series(
  store: &mut dyn StagingStore,
  ctx: &CycleContext,
) -> EtlResult<Vec<CloseSeries>> {
  let quotes = store.crypto_quotes_since(ctx.indicator_start()?)?;
  if quotes.is_empty() {
    info!("No closes in the last {} days", ctx.settings.indicator_days);
    return Ok(Vec::new());
  }

  let mut by_coin: BTreeMap<String, Vec<_>> = BTreeMap::new();
  for q in quotes {
    by_coin.entry(q.coin).or_default().push((q.created_at, q.close));
  }

  Ok(by_coin.into_iter().map(|(coin, points)| CloseSeries { coin, points }).collect())
}
