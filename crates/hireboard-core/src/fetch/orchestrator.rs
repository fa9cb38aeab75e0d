//! Fetch orchestrator: owns the browse session and its fetch lifecycle.
//!
//! Triggers:
//! - `activate()` on first display
//! - `search()` for the explicit search action (button or Enter)
//! - `select_price_bucket()` which stores the bucket and fires immediately
//!
//! Editing the text query through `set_text_query()` never fires a query.
//!
//! Each query gets a token from a monotonically increasing counter. Only the
//! outcome of the latest issued token reaches the published `FetchState`;
//! older responses that arrive late are discarded.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use tokio::sync::watch;

use hireboard_types::error::ListingError;
use hireboard_types::fetch::{FetchState, FetchStatus};
use hireboard_types::filter::{FilterSpec, PriceBucket};
use hireboard_types::provider::ServiceProvider;

use super::guard::InFlightGuard;
use super::state::{FetchEvent, FetchStateExt, Transition};
use crate::filter::FilterBuilder;
use crate::notify::NotificationSink;
use crate::repository::listing::ListingService;

/// Prefix of every failure notification shown to the user.
pub const ERROR_NOTIFICATION_PREFIX: &str = "Error fetching developers";

/// The raw user inputs of a browse session.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchInputs {
    pub text_query: String,
    pub price_bucket: Option<PriceBucket>,
}

impl SearchInputs {
    pub fn to_filter(&self) -> FilterSpec {
        FilterBuilder::build(&self.text_query, self.price_bucket)
    }
}

/// How a finished query affected the published state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueryOutcome {
    /// The query was the latest one; state moved to this status.
    Applied(FetchStatus),
    /// A newer query was issued meanwhile; the response was discarded.
    Stale,
}

/// Stateful controller for one directory-browsing session.
///
/// Generic over the listing and notification ports so the core never
/// depends on a concrete backend or UI. Methods take `&self`, so several
/// queries may be in flight at once (wrap in an `Arc` to drive them from
/// spawned tasks).
pub struct FetchOrchestrator<L: ListingService, N: NotificationSink> {
    listing: L,
    notifier: N,
    state: watch::Sender<FetchState>,
    last_token: AtomicU64,
    inputs: Mutex<SearchInputs>,
    query_timeout: Option<Duration>,
}

impl<L: ListingService, N: NotificationSink> FetchOrchestrator<L, N> {
    /// Create an orchestrator in the `Idle` state with empty inputs and no
    /// query timeout.
    pub fn new(listing: L, notifier: N) -> Self {
        let (state, _) = watch::channel(FetchState::new());
        Self {
            listing,
            notifier,
            state,
            last_token: AtomicU64::new(0),
            inputs: Mutex::new(SearchInputs::default()),
            query_timeout: None,
        }
    }

    /// Fail queries that take longer than `timeout` with `ListingError::Timeout`.
    pub fn with_query_timeout(mut self, timeout: Duration) -> Self {
        self.query_timeout = Some(timeout);
        self
    }

    /// Receiver that observes every published state change.
    pub fn subscribe(&self) -> watch::Receiver<FetchState> {
        self.state.subscribe()
    }

    /// Copy of the current state.
    pub fn snapshot(&self) -> FetchState {
        self.state.borrow().clone()
    }

    pub fn inputs(&self) -> SearchInputs {
        self.lock_inputs().clone()
    }

    /// Filter for the current inputs.
    pub fn current_filter(&self) -> FilterSpec {
        self.lock_inputs().to_filter()
    }

    /// Initial query when the directory is first shown.
    pub async fn activate(&self) -> QueryOutcome {
        tracing::debug!("directory session activated");
        self.run_query(self.current_filter()).await
    }

    /// Update the text query. Does not fire a query.
    pub fn set_text_query(&self, text: impl Into<String>) {
        self.lock_inputs().text_query = text.into();
    }

    /// Explicit search trigger using the current inputs.
    pub async fn search(&self) -> QueryOutcome {
        self.run_query(self.current_filter()).await
    }

    /// Store a new price bucket (or clear it) and query with it right away.
    pub async fn select_price_bucket(&self, bucket: Option<PriceBucket>) -> QueryOutcome {
        let filter = {
            let mut inputs = self.lock_inputs();
            inputs.price_bucket = bucket;
            inputs.to_filter()
        };
        self.run_query(filter).await
    }

    /// Issue one listing query and fold its outcome into the state.
    ///
    /// Enters `Loading`, awaits the listing service (bounded by the query
    /// timeout when set), then moves to `Success` or `Error` unless a newer
    /// query was issued meanwhile. Failures of the latest query are sent to
    /// the notification sink.
    pub async fn run_query(&self, filter: FilterSpec) -> QueryOutcome {
        let token = self.last_token.fetch_add(1, Ordering::SeqCst) + 1;
        self.dispatch(FetchEvent::Started { token });
        let _in_flight = InFlightGuard::new(token, &self.state);

        tracing::debug!(token, filter = %filter, "listing query started");

        let result = match self.query_timeout {
            Some(limit) => tokio::time::timeout(limit, self.listing.query_listings(&filter))
                .await
                .unwrap_or(Err(ListingError::Timeout)),
            None => self.listing.query_listings(&filter).await,
        };

        match result {
            Ok(providers) => {
                let results = admit_listable(token, providers);
                let count = results.len();
                match self.dispatch(FetchEvent::Succeeded { token, results }) {
                    Transition::Applied => {
                        tracing::debug!(token, count, "listing query succeeded");
                        QueryOutcome::Applied(FetchStatus::Success)
                    }
                    _ => self.discard(token),
                }
            }
            Err(err) => {
                let message = err.to_string();
                match self.dispatch(FetchEvent::Failed {
                    token,
                    message: message.clone(),
                }) {
                    Transition::Applied => {
                        tracing::error!(token, error = %err, "error fetching developers");
                        self.notifier
                            .notify_error(&format!("{ERROR_NOTIFICATION_PREFIX}: {message}"));
                        QueryOutcome::Applied(FetchStatus::Error)
                    }
                    _ => self.discard(token),
                }
            }
        }
    }

    fn dispatch(&self, event: FetchEvent) -> Transition {
        let mut transition = Transition::Unchanged;
        self.state.send_if_modified(|state| {
            transition = state.apply(event);
            transition == Transition::Applied
        });
        transition
    }

    fn discard(&self, token: u64) -> QueryOutcome {
        tracing::debug!(
            token,
            latest = self.last_token.load(Ordering::SeqCst),
            "discarding superseded listing response"
        );
        QueryOutcome::Stale
    }

    fn lock_inputs(&self) -> MutexGuard<'_, SearchInputs> {
        self.inputs.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

/// Drop busy/offline providers a listing service returned anyway.
fn admit_listable(token: u64, mut providers: Vec<ServiceProvider>) -> Vec<ServiceProvider> {
    let before = providers.len();
    providers.retain(|p| p.availability.is_listable());
    let dropped = before - providers.len();
    if dropped > 0 {
        tracing::warn!(token, dropped, "listing service returned unlisted providers");
    }
    providers
}
