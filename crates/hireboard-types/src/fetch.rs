//! Fetch lifecycle state shared between the orchestrator and the UI.
//!
//! `FetchState` is a plain snapshot; the transition logic lives in
//! `hireboard-core::fetch::state`.

use serde::Serialize;

use std::fmt;

use crate::provider::ServiceProvider;

/// Lifecycle of the directory listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FetchStatus {
    /// Not yet activated.
    Idle,
    Loading,
    Success,
    Error,
}

impl fmt::Display for FetchStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FetchStatus::Idle => write!(f, "idle"),
            FetchStatus::Loading => write!(f, "loading"),
            FetchStatus::Success => write!(f, "success"),
            FetchStatus::Error => write!(f, "error"),
        }
    }
}

/// Current snapshot of the listing lifecycle.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FetchState {
    pub status: FetchStatus,
    /// Providers from the last successful query. Only shown while
    /// `status` is `Success`; kept across a later failure.
    pub results: Vec<ServiceProvider>,
    /// Failure description, set while `status` is `Error`.
    pub error_message: Option<String>,
    /// Token of the most recently issued query (0 before the first one).
    pub latest_token: u64,
}

impl FetchState {
    pub fn new() -> Self {
        Self {
            status: FetchStatus::Idle,
            results: Vec::new(),
            error_message: None,
            latest_token: 0,
        }
    }

    pub fn is_loading(&self) -> bool {
        self.status == FetchStatus::Loading
    }

    /// What the presentation layer should render right now.
    pub fn view(&self) -> FetchView<'_> {
        match self.status {
            FetchStatus::Idle => FetchView::Idle,
            FetchStatus::Loading => FetchView::Loading,
            FetchStatus::Success if self.results.is_empty() => FetchView::Empty,
            FetchStatus::Success => FetchView::Results(&self.results),
            FetchStatus::Error => {
                FetchView::Error(self.error_message.as_deref().unwrap_or("unknown error"))
            }
        }
    }
}

impl Default for FetchState {
    fn default() -> Self {
        Self::new()
    }
}

/// Render-ready projection of a `FetchState`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FetchView<'a> {
    Idle,
    Loading,
    /// Query succeeded with no matches.
    Empty,
    Results(&'a [ServiceProvider]),
    Error(&'a str),
}

impl FetchView<'_> {
    /// Fixed message for the non-result views.
    pub fn message(&self) -> Option<&'static str> {
        match self {
            FetchView::Loading => Some("Loading developers..."),
            FetchView::Empty => Some("No developers found matching your criteria."),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::provider::{AvailabilityStatus, ProviderId};

    #[test]
    fn test_new_state_is_idle() {
        let state = FetchState::new();
        assert_eq!(state.status, FetchStatus::Idle);
        assert_eq!(state.latest_token, 0);
        assert_eq!(state.view(), FetchView::Idle);
    }

    #[test]
    fn test_empty_success_renders_empty_not_loading() {
        let state = FetchState {
            status: FetchStatus::Success,
            ..FetchState::new()
        };
        let view = state.view();
        assert_eq!(view, FetchView::Empty);
        assert_eq!(
            view.message(),
            Some("No developers found matching your criteria.")
        );
    }

    #[test]
    fn test_error_view_hides_retained_results() {
        let state = FetchState {
            status: FetchStatus::Error,
            results: vec![ServiceProvider {
                id: ProviderId::from("a"),
                name: "Ada".to_string(),
                hourly_rate: 0.2,
                skills: vec![],
                availability: AvailabilityStatus::Available,
                image_url: String::new(),
            }],
            error_message: Some("timeout".to_string()),
            latest_token: 3,
        };
        assert_eq!(state.view(), FetchView::Error("timeout"));
    }
}
