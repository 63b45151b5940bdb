use chrono::{NaiveDateTime, TimeDelta};
use cw_database::models::CryptoQuote;
use cw_database::StagingStore;
use tracing::info;

use super::CoinSnapshot;
use crate::{CycleContext, EtlResult};

/// How far back the change baseline is looked up
pub const CHANGE_LOOKBACK_HOURS: i64 = 24;

/// Oldest quote of `coin` in `[ts - 24h, ts]`
pub fn baseline_for(
  store: &mut dyn StagingStore,
  coin: &str,
  ts: NaiveDateTime,
) -> EtlResult<Option<CryptoQuote>> {
  let history = store.crypto_history(coin, ts - TimeDelta::hours(CHANGE_LOOKBACK_HOURS), ts)?;
  Ok(history.into_iter().next())
}

/// Quotes inside the window, each paired with its 24h baseline
pub fn extract_coins(
  store: &mut dyn StagingStore,
  ctx: &CycleContext,
) -> EtlResult<Vec<CoinSnapshot>> {
  let quotes = store.crypto_quotes_since(ctx.window_start()?)?;
  if quotes.is_empty() {
    info!("No crypto quotes in the last {} minutes", ctx.settings.window_minutes);
    return Ok(Vec::new());
  }

  let mut snapshots = Vec::with_capacity(quotes.len());
  for quote in quotes {
    let baseline = baseline_for(store, &quote.coin, quote.created_at)?;
    snapshots.push(CoinSnapshot { quote, baseline });
  }
  Ok(snapshots)
}
