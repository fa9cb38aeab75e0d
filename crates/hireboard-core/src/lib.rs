//! Business logic and repository trait definitions for Hireboard.
//!
//! This crate holds the directory-browsing core -- the filter builder and
//! the fetch orchestrator -- plus the "ports" (listing, repository and
//! notification traits) that the infrastructure and presentation layers
//! implement. It depends only on `hireboard-types`, never on
//! `hireboard-infra` or any database/IO crate.

pub mod fetch;
pub mod filter;
pub mod notify;
pub mod repository;
pub mod service;
