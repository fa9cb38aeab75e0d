//! Hireboard CLI and REST API entry point.
//!
//! Binary name: `hire`
//!
//! Parses CLI arguments, initializes database and services, then dispatches
//! to the appropriate command handler or starts the REST API server.

mod cli;
mod http;
mod notify;
mod state;

use std::process::ExitCode;

use clap::Parser;
use clap_complete::generate;

use hireboard_observe::TracingOptions;

use cli::{Cli, Commands};
use state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    // Set up tracing based on verbosity
    let mut tracing_options = TracingOptions::for_verbosity(cli.verbose).with_otel_from_env();
    if cli.quiet && cli.verbose == 0 {
        tracing_options.default_directive = "error".to_string();
    }
    if let Err(e) = hireboard_observe::init_tracing(&tracing_options) {
        eprintln!("Warning: failed to initialize tracing: {e}");
    }

    let result = run(cli).await;
    hireboard_observe::shutdown_tracing();
    result
}

async fn run(cli: Cli) -> anyhow::Result<ExitCode> {
    // Shell completions don't need app state
    if let Commands::Completions { shell } = &cli.command {
        let mut cmd = <Cli as clap::CommandFactory>::command();
        generate(*shell, &mut cmd, "hire", &mut std::io::stdout());
        return Ok(ExitCode::SUCCESS);
    }

    // Initialize application state (DB, services)
    let state = AppState::init().await?;

    match cli.command {
        Commands::Browse => {
            cli::browse::browse(&state).await?;
        }

        Commands::Search { query, price } => {
            if !cli::search::search(&state, &query, price, cli.json).await? {
                return Ok(ExitCode::FAILURE);
            }
        }

        Commands::Provider { action } => {
            cli::provider::handle_provider_command(action, &state, cli.json).await?;
        }

        Commands::Import { file } => {
            cli::import::import(&state, &file, cli.json).await?;
        }

        Commands::Status => {
            cli::status::status(&state, cli.json).await?;
        }

        Commands::Serve { port, host } => {
            let addr = format!("{host}:{port}");
            let listener = tokio::net::TcpListener::bind(&addr).await?;

            println!(
                "  {} Hireboard API listening on {}",
                console::style("⚡").bold(),
                console::style(format!("http://{addr}/api/v1")).cyan()
            );
            println!("  {}", console::style("Press Ctrl+C to stop").dim());

            let router = http::router::build_router(state);

            axum::serve(listener, router)
                .with_graceful_shutdown(shutdown_signal())
                .await?;

            println!("\n  Server stopped.");
        }

        Commands::Completions { .. } => unreachable!("handled above"),
    }

    Ok(ExitCode::SUCCESS)
}

/// Wait for Ctrl+C or SIGTERM for graceful shutdown.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "failed to listen for Ctrl+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
