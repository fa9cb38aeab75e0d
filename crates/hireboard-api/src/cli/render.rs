//! Shared terminal rendering for provider listings and fetch state.

use std::future::Future;

use comfy_table::{presets, Cell, Color, ContentArrangement, Table};
use console::style;
use indicatif::{ProgressBar, ProgressStyle};

use hireboard_types::fetch::{FetchState, FetchView};
use hireboard_types::filter::PriceBucket;
use hireboard_types::provider::{AvailabilityStatus, ServiceProvider};

/// Await `fut` behind a spinner showing `message`.
pub async fn with_spinner<F: Future>(message: &str, fut: F) -> F::Output {
    let spinner = ProgressBar::new_spinner();
    if let Ok(spinner_style) = ProgressStyle::default_spinner().template("{spinner:.cyan} {msg}") {
        spinner.set_style(spinner_style);
    }
    spinner.set_message(message.to_string());
    spinner.enable_steady_tick(std::time::Duration::from_millis(80));

    let output = fut.await;

    spinner.finish_and_clear();
    output
}

/// Print the current fetch state. Failures are already surfaced by the
/// notification sink, so the error view only prints a hint.
pub fn print_fetch_state(state: &FetchState) {
    let view = state.view();
    match view {
        FetchView::Idle => {}
        FetchView::Loading | FetchView::Empty => {
            println!();
            println!(
                "  {} {}",
                style("i").blue().bold(),
                view.message().unwrap_or_default()
            );
            println!();
        }
        FetchView::Results(providers) => print_provider_table(providers),
        FetchView::Error(_) => {
            println!();
            println!(
                "  {}",
                style("Adjust your search and try again.").dim()
            );
            println!();
        }
    }
}

/// Print providers in a rich colored table followed by a count line.
pub fn print_provider_table(providers: &[ServiceProvider]) {
    let mut table = Table::new();
    table.load_preset(presets::UTF8_FULL_CONDENSED);
    table.set_content_arrangement(ContentArrangement::Dynamic);

    table.set_header(vec![
        Cell::new("Name").fg(Color::White),
        Cell::new("Rate").fg(Color::White),
        Cell::new("Skills").fg(Color::White),
        Cell::new("Status").fg(Color::White),
        Cell::new("ID").fg(Color::White),
    ]);

    for provider in providers {
        table.add_row(vec![
            Cell::new(&provider.name).fg(Color::Cyan),
            rate_cell(provider.hourly_rate),
            Cell::new(truncate(&provider.skills.join(", "), 40)),
            status_cell(provider.availability),
            Cell::new(provider.id.as_str()).fg(Color::DarkGrey),
        ]);
    }

    println!();
    println!("{table}");
    println!();
    println!(
        "  {} developer{}",
        style(providers.len()).bold(),
        if providers.len() == 1 { "" } else { "s" }
    );
    println!();
}

fn rate_cell(rate: f64) -> Cell {
    let color = match PriceBucket::classify(rate) {
        PriceBucket::Low => Color::Green,
        PriceBucket::Medium => Color::Yellow,
        PriceBucket::High => Color::Magenta,
    };
    Cell::new(format_rate(rate)).fg(color)
}

fn status_cell(status: AvailabilityStatus) -> Cell {
    match status {
        AvailabilityStatus::Available => Cell::new("● available").fg(Color::Green),
        AvailabilityStatus::Busy => Cell::new("○ busy").fg(Color::Yellow),
        AvailabilityStatus::Offline => Cell::new("◌ offline").fg(Color::DarkGrey),
    }
}

pub fn format_status(status: AvailabilityStatus) -> String {
    match status {
        AvailabilityStatus::Available => format!("{}", style("available").green()),
        AvailabilityStatus::Busy => format!("{}", style("busy").yellow()),
        AvailabilityStatus::Offline => format!("{}", style("offline").dim()),
    }
}

pub fn format_rate(rate: f64) -> String {
    format!("{rate} ETH/hour")
}

/// Label for an optional bucket, as shown in the price selector.
pub fn bucket_label(bucket: Option<PriceBucket>) -> &'static str {
    bucket.map(|b| b.label()).unwrap_or("Any price")
}

fn truncate(s: &str, max_chars: usize) -> String {
    if s.chars().count() > max_chars {
        let head: String = s.chars().take(max_chars.saturating_sub(3)).collect();
        format!("{head}...")
    } else {
        s.to_string()
    }
}
