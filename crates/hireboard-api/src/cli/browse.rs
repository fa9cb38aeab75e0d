//! Interactive browse session.
//!
//! The session owns a `FetchOrchestrator`: the first listing loads on
//! start, editing the search text waits for an explicit search, and picking
//! a price bucket reloads immediately.

use anyhow::Result;
use console::style;
use dialoguer::{Input, Select};

use hireboard_core::fetch::QueryOutcome;
use hireboard_core::notify::NotificationSink;
use hireboard_types::fetch::FetchView;
use hireboard_types::filter::PriceBucket;

use crate::cli::render::{bucket_label, print_fetch_state, with_spinner};
use crate::notify::ConsoleNotifier;
use crate::state::{AppState, ConcreteOrchestrator};

/// Run the interactive browse loop until the user quits.
pub async fn browse(state: &AppState) -> Result<()> {
    let session = state.orchestrator(ConsoleNotifier);

    println!();
    println!(
        "  {} Browse developers {}",
        style("⚡").bold(),
        style("(busy and offline developers are hidden)").dim()
    );

    run(&session, Trigger::Activate).await;

    loop {
        let inputs = session.inputs();
        let search_label = if inputs.text_query.is_empty() {
            "Search by name or skill".to_string()
        } else {
            format!("Search by name or skill (current: \"{}\")", inputs.text_query)
        };
        let items = [
            search_label,
            format!("Price: {}", bucket_label(inputs.price_bucket)),
            "Quit".to_string(),
        ];

        let choice = Select::new()
            .with_prompt("What next?")
            .items(&items)
            .default(0)
            .interact_opt()?;

        match choice {
            Some(0) => {
                let text: String = Input::new()
                    .with_prompt("Search")
                    .with_initial_text(inputs.text_query)
                    .allow_empty(true)
                    .interact_text()?;
                session.set_text_query(text);
                run(&session, Trigger::Search).await;
            }
            Some(1) => {
                let Some(bucket) = prompt_price_bucket(inputs.price_bucket)? else {
                    continue;
                };
                run(&session, Trigger::Price(bucket)).await;
            }
            _ => break,
        }
    }

    Ok(())
}

enum Trigger {
    Activate,
    Search,
    Price(Option<PriceBucket>),
}

async fn run<N: NotificationSink>(session: &ConcreteOrchestrator<N>, trigger: Trigger) {
    let loading = FetchView::Loading.message().unwrap_or_default();
    let outcome = with_spinner(loading, async {
        match trigger {
            Trigger::Activate => session.activate().await,
            Trigger::Search => session.search().await,
            Trigger::Price(bucket) => session.select_price_bucket(bucket).await,
        }
    })
    .await;

    tracing::debug!(?outcome, "browse query finished");
    if outcome != QueryOutcome::Stale {
        print_fetch_state(&session.snapshot());
    }
}

/// Ask for a bucket. Returns `None` when the prompt is dismissed.
fn prompt_price_bucket(current: Option<PriceBucket>) -> Result<Option<Option<PriceBucket>>> {
    let options: Vec<Option<PriceBucket>> = std::iter::once(None)
        .chain(PriceBucket::variants().iter().copied().map(Some))
        .collect();
    let labels: Vec<&str> = options.iter().map(|b| bucket_label(*b)).collect();
    let default = options.iter().position(|b| *b == current).unwrap_or(0);

    let picked = Select::new()
        .with_prompt("Hourly rate")
        .items(&labels)
        .default(default)
        .interact_opt()?;

    Ok(picked.map(|i| options[i]))
}
