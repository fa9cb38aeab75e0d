//! Directory status dashboard command.

use anyhow::Result;
use console::style;

use crate::state::AppState;

/// Display availability counts, configuration and storage info.
pub async fn status(state: &AppState, json: bool) -> Result<()> {
    let summary = state.provider_service.summary().await?;
    let timeout_secs = state.config.query_timeout().as_secs();

    if json {
        let status = serde_json::json!({
            "version": env!("CARGO_PKG_VERSION"),
            "data_dir": state.data_dir.display().to_string(),
            "providers": {
                "total": summary.total(),
                "available": summary.available,
                "busy": summary.busy,
                "offline": summary.offline,
            },
            "query_timeout_secs": timeout_secs,
        });
        println!("{}", serde_json::to_string_pretty(&status)?);
        return Ok(());
    }

    println!();
    println!(
        "  {} Hireboard v{}",
        style("⚡").bold(),
        env!("CARGO_PKG_VERSION")
    );
    println!();

    println!("  {}", style("── Providers ──").dim());
    println!("  Total:     {}", style(summary.total()).bold());
    println!("  Available: {}", style(summary.available).green());
    if summary.busy > 0 {
        println!("  Busy:      {}", style(summary.busy).yellow());
    }
    if summary.offline > 0 {
        println!("  Offline:   {}", style(summary.offline).dim());
    }
    println!();

    println!("  {}", style("── System ──").dim());
    println!("  Data dir:      {}", style(state.data_dir.display()).dim());
    println!("  Database:      {}", style("SQLite (WAL mode)").dim());
    println!("  Query timeout: {}", style(format!("{timeout_secs}s")).dim());
    println!();

    Ok(())
}
