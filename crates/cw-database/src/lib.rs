pub mod connection;
pub mod ddl;
pub mod models;
pub mod repository;
pub mod schema;
pub mod staging;
pub mod warehouse;

// Re-export commonly used items
pub use connection::{establish_staging, open_warehouse, WarehouseConnection};
pub use repository::{StagingStore, StoreError, StoreResult, Warehouse};
