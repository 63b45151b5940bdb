use chrono::NaiveDate;
use cw_database::models::NewCryptoInfo;

use crate::EtlResult;

/// symbol, launch date, all-time-high price, all-time-high date, total supply
const CRYPTO_METADATA: [(&str, &str, f64, &str, i64); 6] = [
  ("BTC", "2009-01-03", 69000.0, "2021-11-10", 21_000_000),
  ("ETH", "2015-07-30", 4878.0, "2021-11-10", 12_044_000_000),
  ("BNB", "2017-07-25", 690.0, "2021-05-10", 200_000_000),
  ("ADA", "2017-09-29", 3.10, "2021-09-02", 45_000_000_000),
  ("SOL", "2020-03-24", 260.0, "2021-11-06", 539_312_705),
  ("XRP", "2012-06-02", 3.84, "2018-01-04", 100_000_000_000),
];

/// Static reference data for the tracked symbols.
///
/// The same six rows are produced every cycle; nothing here or in the loader
/// checks whether they are already in the warehouse.
pub fn crypto_metadata() -> EtlResult<Vec<NewCryptoInfo>> {
  CRYPTO_METADATA
    .iter()
    .map(|&(symbol, launch, ath_price, ath_date, total_supply)| -> EtlResult<NewCryptoInfo> {
      Ok(NewCryptoInfo {
        symbol: symbol.to_string(),
        launch_date: NaiveDate::parse_from_str(launch, "%Y-%m-%d")?,
        ath_price,
        ath_date: NaiveDate::parse_from_str(ath_date, "%Y-%m-%d")?,
        total_supply,
      })
    })
    .collect()
}
