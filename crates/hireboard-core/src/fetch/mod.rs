//! Asynchronous fetch-state orchestration.
//!
//! - `state`: pure reducer over `FetchState` with token ordering
//! - `guard`: in-flight guard that always settles its query
//! - `orchestrator`: the controller that owns the session inputs, issues
//!   queries and publishes state

pub mod guard;
pub mod orchestrator;
pub mod state;

pub use orchestrator::{FetchOrchestrator, QueryOutcome, SearchInputs};
pub use state::{FetchEvent, FetchStateExt, Transition};
