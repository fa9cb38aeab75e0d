//! SQLite storage layer.
//!
//! The listing service and provider repository backed by SQLite with WAL
//! mode and split read/write connection pools.

pub mod pool;
pub mod provider;
pub mod query;
