//! Static table definitions.
//!
//! Every statement is `CREATE TABLE IF NOT EXISTS`; running them twice is a
//! no-op and there is no version tracking.

use diesel::connection::SimpleConnection;
use diesel::pg::PgConnection;

use crate::connection::WarehouseConnection;
use crate::repository::StoreResult;

pub const STAGING_POSTGRES: &str = r#"
CREATE TABLE IF NOT EXISTS sentiment (
    id SERIAL PRIMARY KEY,
    source TEXT,
    content TEXT,
    created_at TIMESTAMP NOT NULL DEFAULT CURRENT_TIMESTAMP
);
CREATE TABLE IF NOT EXISTS crypto_data (
    id SERIAL PRIMARY KEY,
    coin VARCHAR(50) NOT NULL,
    open DOUBLE PRECISION NOT NULL,
    high DOUBLE PRECISION NOT NULL,
    low DOUBLE PRECISION NOT NULL,
    close DOUBLE PRECISION NOT NULL,
    volume DOUBLE PRECISION NOT NULL,
    market_cap DOUBLE PRECISION NOT NULL,
    created_at TIMESTAMP NOT NULL DEFAULT CURRENT_TIMESTAMP
);
CREATE INDEX IF NOT EXISTS crypto_data_coin_created_idx ON crypto_data (coin, created_at);
CREATE TABLE IF NOT EXISTS dominance (
    id SERIAL PRIMARY KEY,
    btc_dominance DOUBLE PRECISION NOT NULL,
    eth_dominance DOUBLE PRECISION NOT NULL,
    altcoin_dominance DOUBLE PRECISION NOT NULL,
    created_at TIMESTAMP NOT NULL DEFAULT CURRENT_TIMESTAMP
);
CREATE TABLE IF NOT EXISTS "GoldPrice" (
    id SERIAL PRIMARY KEY,
    "timestamp" TIMESTAMP NOT NULL,
    open DOUBLE PRECISION NOT NULL,
    high DOUBLE PRECISION NOT NULL,
    low DOUBLE PRECISION NOT NULL,
    close DOUBLE PRECISION NOT NULL,
    created_at TIMESTAMP NOT NULL DEFAULT CURRENT_TIMESTAMP
);
CREATE TABLE IF NOT EXISTS "InterestRate" (
    id SERIAL PRIMARY KEY,
    "timestamp" TIMESTAMP NOT NULL,
    open DOUBLE PRECISION NOT NULL,
    high DOUBLE PRECISION NOT NULL,
    low DOUBLE PRECISION NOT NULL,
    close DOUBLE PRECISION NOT NULL,
    created_at TIMESTAMP NOT NULL DEFAULT CURRENT_TIMESTAMP
);
CREATE TABLE IF NOT EXISTS "stocksPrices" (
    id SERIAL PRIMARY KEY,
    "timestamp" TIMESTAMP NOT NULL,
    open DOUBLE PRECISION NOT NULL,
    high DOUBLE PRECISION NOT NULL,
    low DOUBLE PRECISION NOT NULL,
    close DOUBLE PRECISION NOT NULL,
    volume DOUBLE PRECISION NOT NULL,
    created_at TIMESTAMP NOT NULL DEFAULT CURRENT_TIMESTAMP
);
CREATE TABLE IF NOT EXISTS blockchain_statistics (
    id SERIAL PRIMARY KEY,
    "timestamp" TIMESTAMP NOT NULL,
    coin VARCHAR(50) NOT NULL,
    block_reward_static DOUBLE PRECISION,
    consensus_mechanism VARCHAR(50),
    difficulty VARCHAR(50),
    hashrate_24h VARCHAR(50),
    pending_transactions INT,
    reduction_rate VARCHAR(50),
    total_blocks INT,
    total_transactions VARCHAR(50),
    tps_24h DOUBLE PRECISION,
    first_block_timestamp TIMESTAMP,
    created_at TIMESTAMP NOT NULL DEFAULT CURRENT_TIMESTAMP
);
CREATE TABLE IF NOT EXISTS "ExchangeRate" (
    id SERIAL PRIMARY KEY,
    "timestamp" TIMESTAMP NOT NULL,
    name VARCHAR(50) NOT NULL,
    unit VARCHAR(10) NOT NULL,
    value DOUBLE PRECISION NOT NULL,
    type VARCHAR(50),
    created_at TIMESTAMP NOT NULL DEFAULT CURRENT_TIMESTAMP
);
"#;

pub const WAREHOUSE_POSTGRES: &str = r#"
CREATE TABLE IF NOT EXISTS date_dim (
    id SERIAL PRIMARY KEY,
    ts TEXT NOT NULL,
    day INT NOT NULL,
    month INT NOT NULL,
    year INT NOT NULL,
    hour INT NOT NULL,
    day_of_week TEXT NOT NULL,
    week INT NOT NULL
);
CREATE TABLE IF NOT EXISTS crypto_info (
    id SERIAL PRIMARY KEY,
    symbol TEXT NOT NULL,
    launch_date DATE NOT NULL,
    ath_price DOUBLE PRECISION NOT NULL,
    ath_date DATE NOT NULL,
    total_supply BIGINT NOT NULL
);
CREATE TABLE IF NOT EXISTS blockchain_info (
    id SERIAL PRIMARY KEY,
    ts TIMESTAMP NOT NULL,
    symbol TEXT NOT NULL,
    hashrate DOUBLE PRECISION NOT NULL,
    tps DOUBLE PRECISION NOT NULL,
    total_trans BIGINT NOT NULL
);
CREATE TABLE IF NOT EXISTS technical_indicators (
    id SERIAL PRIMARY KEY,
    ts TIMESTAMP NOT NULL,
    coin TEXT NOT NULL,
    rsi DOUBLE PRECISION NOT NULL,
    sma DOUBLE PRECISION NOT NULL,
    ema DOUBLE PRECISION NOT NULL
);
CREATE TABLE IF NOT EXISTS correlations_dim (
    id SERIAL PRIMARY KEY,
    ts TIMESTAMP NOT NULL,
    gold_price DOUBLE PRECISION,
    interest_rate DOUBLE PRECISION,
    stocks_price DOUBLE PRECISION
);
CREATE TABLE IF NOT EXISTS sentiment_dim (
    id SERIAL PRIMARY KEY,
    ts TIMESTAMP NOT NULL,
    score DOUBLE PRECISION NOT NULL,
    sentiment TEXT NOT NULL
);
CREATE TABLE IF NOT EXISTS crypto_dim (
    id SERIAL PRIMARY KEY,
    ts TIMESTAMP NOT NULL,
    coin TEXT NOT NULL,
    open DOUBLE PRECISION NOT NULL,
    high DOUBLE PRECISION NOT NULL,
    low DOUBLE PRECISION NOT NULL,
    close DOUBLE PRECISION NOT NULL,
    volume DOUBLE PRECISION NOT NULL,
    market_cap DOUBLE PRECISION NOT NULL,
    price_change DOUBLE PRECISION NOT NULL,
    price_change_perc DOUBLE PRECISION NOT NULL,
    market_cap_change DOUBLE PRECISION NOT NULL,
    market_cap_change_perc DOUBLE PRECISION NOT NULL
);
CREATE TABLE IF NOT EXISTS fact_table (
    id SERIAL PRIMARY KEY,
    ts TIMESTAMP NOT NULL,
    coin TEXT NOT NULL,
    price DOUBLE PRECISION NOT NULL,
    dominance DOUBLE PRECISION,
    exchange_rate DOUBLE PRECISION,
    price_change_perc DOUBLE PRECISION NOT NULL
);
"#;

pub const WAREHOUSE_SQLITE: &str = r#"
CREATE TABLE IF NOT EXISTS date_dim (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    ts TEXT NOT NULL,
    day INTEGER NOT NULL,
    month INTEGER NOT NULL,
    year INTEGER NOT NULL,
    hour INTEGER NOT NULL,
    day_of_week TEXT NOT NULL,
    week INTEGER NOT NULL
);
CREATE TABLE IF NOT EXISTS crypto_info (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    symbol TEXT NOT NULL,
    launch_date DATE NOT NULL,
    ath_price DOUBLE NOT NULL,
    ath_date DATE NOT NULL,
    total_supply BIGINT NOT NULL
);
CREATE TABLE IF NOT EXISTS blockchain_info (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    ts TIMESTAMP NOT NULL,
    symbol TEXT NOT NULL,
    hashrate DOUBLE NOT NULL,
    tps DOUBLE NOT NULL,
    total_trans BIGINT NOT NULL
);
CREATE TABLE IF NOT EXISTS technical_indicators (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    ts TIMESTAMP NOT NULL,
    coin TEXT NOT NULL,
    rsi DOUBLE NOT NULL,
    sma DOUBLE NOT NULL,
    ema DOUBLE NOT NULL
);
CREATE TABLE IF NOT EXISTS correlations_dim (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    ts TIMESTAMP NOT NULL,
    gold_price DOUBLE,
    interest_rate DOUBLE,
    stocks_price DOUBLE
);
CREATE TABLE IF NOT EXISTS sentiment_dim (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    ts TIMESTAMP NOT NULL,
    score DOUBLE NOT NULL,
    sentiment TEXT NOT NULL
);
CREATE TABLE IF NOT EXISTS crypto_dim (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    ts TIMESTAMP NOT NULL,
    coin TEXT NOT NULL,
    open DOUBLE NOT NULL,
    high DOUBLE NOT NULL,
    low DOUBLE NOT NULL,
    close DOUBLE NOT NULL,
    volume DOUBLE NOT NULL,
    market_cap DOUBLE NOT NULL,
    price_change DOUBLE NOT NULL,
    price_change_perc DOUBLE NOT NULL,
    market_cap_change DOUBLE NOT NULL,
    market_cap_change_perc DOUBLE NOT NULL
);
CREATE TABLE IF NOT EXISTS fact_table (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    ts TIMESTAMP NOT NULL,
    coin TEXT NOT NULL,
    price DOUBLE NOT NULL,
    dominance DOUBLE,
    exchange_rate DOUBLE,
    price_change_perc DOUBLE NOT NULL
);
"#;

/// Create the operational tables on a postgres staging database
pub fn apply_staging_ddl(conn: &mut PgConnection) -> StoreResult<()> {
  conn.batch_execute(STAGING_POSTGRES)?;
  Ok(())
}

/// Create the dimensional tables for whichever backend `conn` points at
pub fn apply_warehouse_ddl(conn: &mut WarehouseConnection) -> StoreResult<()> {
  match conn {
    WarehouseConnection::Postgres(pg) => pg.batch_execute(WAREHOUSE_POSTGRES)?,
    WarehouseConnection::Sqlite(lite) => lite.batch_execute(WAREHOUSE_SQLITE)?,
  }
  Ok(())
}
