//! One-shot search command.

use anyhow::Result;
use serde::Serialize;

use hireboard_core::filter::FilterBuilder;
use hireboard_types::fetch::{FetchState, FetchStatus, FetchView};
use hireboard_types::filter::PriceBucket;

use crate::cli::render::{print_fetch_state, with_spinner};
use crate::notify::ConsoleNotifier;
use crate::state::AppState;

/// JSON shape of `hire search --json`.
#[derive(Debug, Serialize)]
struct SearchOutput<'a> {
    filter: String,
    #[serde(flatten)]
    state: &'a FetchState,
}

/// Run one query and print the outcome.
///
/// Returns `false` when the query failed; the failure itself has already
/// been reported through the console notifier.
pub async fn search(
    state: &AppState,
    query: &str,
    price: Option<PriceBucket>,
    json: bool,
) -> Result<bool> {
    let session = state.orchestrator(ConsoleNotifier);
    let filter = FilterBuilder::build(query, price);
    let filter_text = filter.to_string();

    if json {
        session.run_query(filter).await;
    } else {
        let loading = FetchView::Loading.message().unwrap_or_default();
        with_spinner(loading, session.run_query(filter)).await;
    }

    let snapshot = session.snapshot();
    if json {
        let output = SearchOutput {
            filter: filter_text,
            state: &snapshot,
        };
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        print_fetch_state(&snapshot);
    }

    Ok(snapshot.status == FetchStatus::Success)
}
