//! HTTP request handlers for the REST API.

pub mod providers;
pub mod stats;
