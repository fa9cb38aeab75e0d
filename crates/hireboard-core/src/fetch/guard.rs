//! Scoped in-flight marker for a single query.

use tokio::sync::watch;

use hireboard_types::fetch::FetchState;

use super::state::{FetchEvent, FetchStateExt, Transition};

/// Held for the lifetime of one query. Dropping it settles the query's
/// token, whether the query completed, failed, timed out or was itself
/// dropped mid-await.
pub struct InFlightGuard<'a> {
    token: u64,
    state: &'a watch::Sender<FetchState>,
}

impl<'a> InFlightGuard<'a> {
    pub fn new(token: u64, state: &'a watch::Sender<FetchState>) -> Self {
        Self { token, state }
    }

    pub fn token(&self) -> u64 {
        self.token
    }
}

impl Drop for InFlightGuard<'_> {
    fn drop(&mut self) {
        let token = self.token;
        let settled_open_query = self.state.send_if_modified(|state| {
            state.apply(FetchEvent::Settled { token }) == Transition::Applied
        });
        if settled_open_query {
            tracing::warn!(token, "listing query dropped before completing");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hireboard_types::fetch::FetchStatus;

    #[test]
    fn test_drop_clears_loading_for_latest_token() {
        let (tx, rx) = watch::channel(FetchState::new());
        tx.send_modify(|s| {
            s.apply(FetchEvent::Started { token: 1 });
        });

        {
            let guard = InFlightGuard::new(1, &tx);
            assert_eq!(guard.token(), 1);
            assert!(rx.borrow().is_loading());
        }

        assert_eq!(rx.borrow().status, FetchStatus::Error);
    }

    #[test]
    fn test_drop_leaves_newer_query_loading() {
        let (tx, rx) = watch::channel(FetchState::new());
        tx.send_modify(|s| {
            s.apply(FetchEvent::Started { token: 1 });
            s.apply(FetchEvent::Started { token: 2 });
        });

        drop(InFlightGuard::new(1, &tx));

        assert!(rx.borrow().is_loading());
        assert_eq!(rx.borrow().latest_token, 2);
    }
}
