//! Bulk import of provider listings.

use std::path::Path;

use anyhow::Result;
use console::style;

use hireboard_infra::import::load_import_file;

use crate::cli::render::with_spinner;
use crate::state::AppState;

/// Import every provider in a JSON array file.
///
/// Invalid entries are reported and skipped; the rest are stored.
pub async fn import(state: &AppState, file: &Path, json: bool) -> Result<()> {
    let requests = load_import_file(file).await?;
    let total = requests.len();

    let report = with_spinner(
        &format!("Importing {total} providers..."),
        state.provider_service.import_providers(requests),
    )
    .await;

    if json {
        let rejected: Vec<serde_json::Value> = report
            .rejected
            .iter()
            .map(|(name, reason)| serde_json::json!({ "name": name, "reason": reason }))
            .collect();
        let output = serde_json::json!({
            "imported": report.imported.len(),
            "rejected": rejected,
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    println!();
    println!(
        "  {} Imported {} of {} providers from {}",
        style("✓").green().bold(),
        style(report.imported.len()).bold(),
        total,
        style(file.display()).dim()
    );
    for (name, reason) in &report.rejected {
        println!(
            "    {} {}: {}",
            style("✗").red(),
            style(name).yellow(),
            reason
        );
    }
    println!();

    Ok(())
}
