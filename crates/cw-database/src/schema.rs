// Hand-maintained to match the statements in `ddl.rs`.

// ===== Staging (operational) store =====

diesel::table! {
    use diesel::sql_types::*;

    sentiment (id) {
        id -> Int4,
        source -> Nullable<Text>,
        content -> Nullable<Text>,
        created_at -> Timestamp,
    }
}

diesel::table! {
    use diesel::sql_types::*;

    crypto_data (id) {
        id -> Int4,
        #[max_length = 50]
        coin -> Varchar,
        open -> Float8,
        high -> Float8,
        low -> Float8,
        close -> Float8,
        volume -> Float8,
        market_cap -> Float8,
        created_at -> Timestamp,
    }
}

diesel::table! {
    use diesel::sql_types::*;

    dominance (id) {
        id -> Int4,
        btc_dominance -> Float8,
        eth_dominance -> Float8,
        altcoin_dominance -> Float8,
        created_at -> Timestamp,
    }
}

diesel::table! {
    use diesel::sql_types::*;

    #[sql_name = "GoldPrice"]
    gold_price (id) {
        id -> Int4,
        #[sql_name = "timestamp"]
        ts -> Timestamp,
        open -> Float8,
        high -> Float8,
        low -> Float8,
        close -> Float8,
        created_at -> Timestamp,
    }
}

diesel::table! {
    use diesel::sql_types::*;

    #[sql_name = "InterestRate"]
    interest_rate (id) {
        id -> Int4,
        #[sql_name = "timestamp"]
        ts -> Timestamp,
        open -> Float8,
        high -> Float8,
        low -> Float8,
        close -> Float8,
        created_at -> Timestamp,
    }
}

diesel::table! {
    use diesel::sql_types::*;

    #[sql_name = "stocksPrices"]
    stocks_prices (id) {
        id -> Int4,
        #[sql_name = "timestamp"]
        ts -> Timestamp,
        open -> Float8,
        high -> Float8,
        low -> Float8,
        close -> Float8,
        volume -> Float8,
        created_at -> Timestamp,
    }
}

diesel::table! {
    use diesel::sql_types::*;

    blockchain_statistics (id) {
        id -> Int4,
        #[sql_name = "timestamp"]
        ts -> Timestamp,
        #[max_length = 50]
        coin -> Varchar,
        block_reward_static -> Nullable<Float8>,
        #[max_length = 50]
        consensus_mechanism -> Nullable<Varchar>,
        #[max_length = 50]
        difficulty -> Nullable<Varchar>,
        #[max_length = 50]
        hashrate_24h -> Nullable<Varchar>,
        pending_transactions -> Nullable<Int4>,
        #[max_length = 50]
        reduction_rate -> Nullable<Varchar>,
        total_blocks -> Nullable<Int4>,
        #[max_length = 50]
        total_transactions -> Nullable<Varchar>,
        tps_24h -> Nullable<Float8>,
        first_block_timestamp -> Nullable<Timestamp>,
        created_at -> Timestamp,
    }
}

diesel::table! {
    use diesel::sql_types::*;

    #[sql_name = "ExchangeRate"]
    exchange_rate (id) {
        id -> Int4,
        #[sql_name = "timestamp"]
        ts -> Timestamp,
        #[max_length = 50]
        name -> Varchar,
        #[max_length = 10]
        unit -> Varchar,
        value -> Float8,
        #[sql_name = "type"]
        rate_type -> Nullable<Varchar>,
        created_at -> Timestamp,
    }
}

diesel::allow_tables_to_appear_in_same_query!(
    sentiment,
    crypto_data,
    dominance,
    gold_price,
    interest_rate,
    stocks_prices,
    blockchain_statistics,
    exchange_rate,
);

// ===== Warehouse (dimensional) store =====

diesel::table! {
    use diesel::sql_types::*;

    date_dim (id) {
        id -> Integer,
        ts -> Text,
        day -> Integer,
        month -> Integer,
        year -> Integer,
        hour -> Integer,
        day_of_week -> Text,
        week -> Integer,
    }
}

diesel::table! {
    use diesel::sql_types::*;

    crypto_info (id) {
        id -> Integer,
        symbol -> Text,
        launch_date -> Date,
        ath_price -> Double,
        ath_date -> Date,
        total_supply -> BigInt,
    }
}

diesel::table! {
    use diesel::sql_types::*;

    blockchain_info (id) {
        id -> Integer,
        ts -> Timestamp,
        symbol -> Text,
        hashrate -> Double,
        tps -> Double,
        total_trans -> BigInt,
    }
}

diesel::table! {
    use diesel::sql_types::*;

    technical_indicators (id) {
        id -> Integer,
        ts -> Timestamp,
        coin -> Text,
        rsi -> Double,
        sma -> Double,
        ema -> Double,
    }
}

diesel::table! {
    use diesel::sql_types::*;

    correlations_dim (id) {
        id -> Integer,
        ts -> Timestamp,
        gold_price -> Nullable<Double>,
        interest_rate -> Nullable<Double>,
        stocks_price -> Nullable<Double>,
    }
}

diesel::table! {
    use diesel::sql_types::*;

    sentiment_dim (id) {
        id -> Integer,
        ts -> Timestamp,
        score -> Double,
        sentiment -> Text,
    }
}

diesel::table! {
    use diesel::sql_types::*;

    crypto_dim (id) {
        id -> Integer,
        ts -> Timestamp,
        coin -> Text,
        open -> Double,
        high -> Double,
        low -> Double,
        close -> Double,
        volume -> Double,
        market_cap -> Double,
        price_change -> Double,
        price_change_perc -> Double,
        market_cap_change -> Double,
        market_cap_change_perc -> Double,
    }
}

diesel::table! {
    use diesel::sql_types::*;

    fact_table (id) {
        id -> Integer,
        ts -> Timestamp,
        coin -> Text,
        price -> Double,
        dominance -> Nullable<Double>,
        exchange_rate -> Nullable<Double>,
        price_change_perc -> Double,
    }
}
