//! Shared domain types for Hireboard.
//!
//! This crate contains the domain types used across the directory:
//! ServiceProvider, FilterSpec and its predicate tree, FetchState, and the
//! associated error and configuration types.
//!
//! Zero infrastructure dependencies -- only serde, uuid, thiserror.

pub mod config;
pub mod error;
pub mod fetch;
pub mod filter;
pub mod provider;
