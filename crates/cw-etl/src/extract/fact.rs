use cw_database::StagingStore;
use tracing::{debug, info};

use super::coins::baseline_for;
use super::FactInput;
use crate::{CycleContext, EtlResult};

/// Closes in the window joined with the first dominance snapshot and the
/// matching exchange rate of the same window
pub fn extract_facts(store: &mut dyn StagingStore, ctx: &CycleContext) -> EtlResult<Vec<FactInput>> {
  let since = ctx.window_start()?;
  let quotes = store.crypto_quotes_since(since)?;
  if quotes.is_empty() {
    info!("No crypto quotes for the fact table in the last {} minutes", ctx.settings.window_minutes);
    return Ok(Vec::new());
  }

  let dominance = store.first_dominance_since(since)?;
  if dominance.is_none() {
    debug!("No dominance snapshot since {}", since);
  }
  let rates = store.exchange_rates_since(since)?;

  let mut facts = Vec::with_capacity(quotes.len());
  for quote in quotes {
    let exchange_rate =
      rates.iter().find(|r| r.unit.eq_ignore_ascii_case(&quote.coin)).map(|r| r.value);
    let baseline_price = baseline_for(store, &quote.coin, quote.created_at)?.map(|b| b.close);

    facts.push(FactInput {
      ts: quote.created_at,
      dominance: dominance.as_ref().map(|d| d.for_coin(&quote.coin)),
      exchange_rate,
      baseline_price,
      price: quote.close,
      coin: quote.coin,
    });
  }
  Ok(facts)
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::test_support::{context, quote, MockStaging};
  use cw_database::models::{DominanceSnapshot, ExchangeRateQuote};
  use pretty_assertions::assert_eq;

  #[test]
  fn test_fact_join() {
    let ctx = context();
    let now = ctx.now;
    let mut store = MockStaging::new();
    store.expect_crypto_quotes_since().returning(move |_| {
      Ok(vec![quote("BTC", now, 100.0, 1.0), quote("SOL", now, 240.0, 1.0)])
    });
    store.expect_first_dominance_since().returning(move |_| {
      Ok(Some(DominanceSnapshot {
        btc_dominance: 55.0,
        eth_dominance: 17.0,
        altcoin_dominance: 28.0,
        created_at: now,
      }))
    });
    store.expect_exchange_rates_since().returning(move |_| {
      Ok(vec![ExchangeRateQuote { ts: now, name: "Bitcoin".into(), unit: "btc".into(), value: 1.0 }])
    });
    store.expect_crypto_history().returning(move |coin, _, _| {
      if coin == "BTC" {
        Ok(vec![quote("BTC", now, 80.0, 1.0)])
      } else {
        Ok(Vec::new())
      }
    });

    let facts = extract_facts(&mut store, &ctx).unwrap();
    assert_eq!(
      facts,
      vec![
        FactInput {
          ts: now,
          coin: "BTC".into(),
          price: 100.0,
          dominance: Some(55.0),
          exchange_rate: Some(1.0),
          baseline_price: Some(80.0),
        },
        FactInput {
          ts: now,
          coin: "SOL".into(),
          price: 240.0,
          dominance: Some(28.0),
          exchange_rate: None,
          baseline_price: None,
        },
      ]
    );
  }

  #[test]
  fn test_missing_dominance_is_null() {
    let ctx = context();
    let now = ctx.now;
    let mut store = MockStaging::new();
    store.expect_crypto_quotes_since().returning(move |_| Ok(vec![quote("ETH", now, 3000.0, 1.0)]));
    store.expect_first_dominance_since().returning(|_| Ok(None));
    store.expect_exchange_rates_since().returning(|_| Ok(Vec::new()));
    store.expect_crypto_history().returning(|_, _, _| Ok(Vec::new()));

    let facts = extract_facts(&mut store, &ctx).unwrap();
    assert_eq!(facts[0].dominance, None);
    assert_eq!(facts[0].exchange_rate, None);
  }
}
