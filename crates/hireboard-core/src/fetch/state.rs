//! FetchState transition logic.
//!
//! The `FetchState` struct lives in `hireboard-types`; this module provides
//! the events that drive it and an extension trait (`FetchStateExt`) with the
//! reducer. Every event carries the token of the query it belongs to, and
//! only the latest issued token may change the state.

use hireboard_types::fetch::{FetchState, FetchStatus};
use hireboard_types::provider::ServiceProvider;

/// Message stored when an in-flight query is dropped without an outcome.
pub const CANCELLED_MESSAGE: &str = "query cancelled";

/// Input events for the fetch lifecycle.
#[derive(Debug, Clone, PartialEq)]
pub enum FetchEvent {
    /// A query with this token was issued.
    Started { token: u64 },
    Succeeded {
        token: u64,
        results: Vec<ServiceProvider>,
    },
    Failed { token: u64, message: String },
    /// The query's in-flight guard was released.
    Settled { token: u64 },
}

impl FetchEvent {
    pub fn token(&self) -> u64 {
        match self {
            FetchEvent::Started { token }
            | FetchEvent::Succeeded { token, .. }
            | FetchEvent::Failed { token, .. }
            | FetchEvent::Settled { token } => *token,
        }
    }
}

/// What applying an event did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// State changed.
    Applied,
    /// Event belongs to a superseded query and was discarded.
    Stale,
    /// Event was current but had nothing left to do.
    Unchanged,
}

/// Extension trait for `FetchState` lifecycle transitions.
pub trait FetchStateExt {
    fn apply(&mut self, event: FetchEvent) -> Transition;
}

impl FetchStateExt for FetchState {
    fn apply(&mut self, event: FetchEvent) -> Transition {
        let token = event.token();

        if let FetchEvent::Started { .. } = event {
            if token <= self.latest_token {
                return Transition::Stale;
            }
            self.latest_token = token;
            self.status = FetchStatus::Loading;
            self.error_message = None;
            return Transition::Applied;
        }

        if token != self.latest_token {
            return Transition::Stale;
        }
        if self.status != FetchStatus::Loading {
            return Transition::Unchanged;
        }

        match event {
            FetchEvent::Succeeded { results, .. } => {
                self.status = FetchStatus::Success;
                self.results = results;
            }
            FetchEvent::Failed { message, .. } => {
                // Previous results are kept but hidden behind the error.
                self.status = FetchStatus::Error;
                self.error_message = Some(message);
            }
            FetchEvent::Settled { .. } => {
                self.status = FetchStatus::Error;
                self.error_message = Some(CANCELLED_MESSAGE.to_string());
            }
            FetchEvent::Started { .. } => unreachable!("handled above"),
        }

        Transition::Applied
    }
}
