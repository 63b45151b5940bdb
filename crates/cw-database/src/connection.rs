use cw_core::{WarehouseBackend, WarehouseConfig};
use diesel::pg::PgConnection;
use diesel::prelude::*;
use diesel::sql_types::Text;
use diesel::sqlite::SqliteConnection;
use log::info;

use crate::repository::StoreResult;

/// Connection to whichever warehouse backend was selected at startup
#[derive(diesel::MultiConnection)]
pub enum WarehouseConnection {
  Postgres(PgConnection),
  Sqlite(SqliteConnection),
}

/// Establish a connection to the operational store
pub fn establish_staging(database_url: &str) -> Result<PgConnection, diesel::ConnectionError> {
  PgConnection::establish(database_url)
}

/// Open the warehouse for `backend` using the configured location
pub fn open_warehouse(
  backend: WarehouseBackend,
  config: &WarehouseConfig,
) -> StoreResult<WarehouseConnection> {
  match backend {
    WarehouseBackend::Postgres => {
      let url = config.require_postgres_url()?;
      let mut conn = PgConnection::establish(url)?;

      if let Some(schema) = config.schema.as_deref() {
        diesel::sql_query("SELECT set_config('search_path', $1, false)")
          .bind::<Text, _>(schema)
          .execute(&mut conn)?;
        info!("Warehouse search_path set to {}", schema);
      }

      Ok(WarehouseConnection::Postgres(conn))
    }
    WarehouseBackend::Sqlite => {
      let conn = SqliteConnection::establish(&config.sqlite_path)?;
      Ok(WarehouseConnection::Sqlite(conn))
    }
  }
}
