//! Infrastructure layer for Hireboard.
//!
//! Contains implementations of the ports defined in `hireboard-core`:
//! the SQLite-backed listing service and provider repository, plus the
//! config loader, data-directory resolution and JSON import.

pub mod config;
pub mod filesystem;
pub mod import;
pub mod sqlite;
