//! Provider listing CLI commands: add, list, show, remove.

use anyhow::Result;
use clap::Subcommand;
use console::style;
use dialoguer::{Confirm, Input};

use hireboard_core::repository::provider::ProviderRepository;
use hireboard_types::provider::{AvailabilityStatus, CreateProviderRequest, ProviderId};

use crate::cli::render::{format_rate, format_status, print_provider_table};
use crate::state::AppState;

#[derive(Subcommand)]
pub enum ProviderCommand {
    /// List a new provider (prompts for missing fields).
    Add {
        /// Display name.
        #[arg(long)]
        name: Option<String>,

        /// Hourly rate in ETH.
        #[arg(long)]
        rate: Option<f64>,

        /// Comma-separated skills.
        #[arg(long, value_delimiter = ',')]
        skills: Vec<String>,

        /// available, busy or offline.
        #[arg(long, default_value = "available")]
        status: AvailabilityStatus,

        /// Avatar URL.
        #[arg(long)]
        image_url: Option<String>,

        /// Keep an existing id (updates the provider if it exists).
        #[arg(long)]
        id: Option<String>,
    },

    /// List every stored provider, including busy and offline ones.
    #[command(alias = "ls")]
    List,

    /// Show one provider.
    Show {
        /// Provider id.
        id: String,
    },

    /// Remove a provider from the directory.
    #[command(alias = "rm")]
    Remove {
        /// Provider id.
        id: String,

        /// Skip the confirmation prompt.
        #[arg(long)]
        force: bool,
    },
}

pub async fn handle_provider_command(
    action: ProviderCommand,
    state: &AppState,
    json: bool,
) -> Result<()> {
    match action {
        ProviderCommand::Add {
            name,
            rate,
            skills,
            status,
            image_url,
            id,
        } => {
            let request = CreateProviderRequest {
                id,
                name: match name {
                    Some(n) => n,
                    None => Input::<String>::new()
                        .with_prompt("Provider name")
                        .interact_text()?,
                },
                hourly_rate: match rate {
                    Some(r) => r,
                    None => Input::<f64>::new()
                        .with_prompt("Hourly rate (ETH)")
                        .interact_text()?,
                },
                skills,
                availability: Some(status),
                image_url,
            };
            add_provider(state, request, json).await
        }
        ProviderCommand::List => list_providers(state, json).await,
        ProviderCommand::Show { id } => show_provider(state, &id, json).await,
        ProviderCommand::Remove { id, force } => remove_provider(state, &id, force, json).await,
    }
}

async fn add_provider(state: &AppState, request: CreateProviderRequest, json: bool) -> Result<()> {
    let provider = state.provider_service.add_provider(request).await?;

    if json {
        println!("{}", serde_json::to_string_pretty(&provider)?);
        return Ok(());
    }

    println!();
    println!("  {} Provider listed!", style("✓").green().bold());
    println!();
    println!("  {}    {}", style("Name:").bold(), style(&provider.name).cyan());
    println!("  {}    {}", style("Rate:").bold(), format_rate(provider.hourly_rate));
    println!("  {}  {}", style("Status:").bold(), format_status(provider.availability));
    println!("  {}      {}", style("ID:").bold(), style(&provider.id).dim());
    println!();

    Ok(())
}

async fn list_providers(state: &AppState, json: bool) -> Result<()> {
    let providers = state.listings.list_all().await?;

    if json {
        println!("{}", serde_json::to_string_pretty(&providers)?);
        return Ok(());
    }

    if providers.is_empty() {
        println!();
        println!(
            "  {} No providers yet. Add one with: {}",
            style("i").blue().bold(),
            style("hire provider add").yellow()
        );
        println!();
        return Ok(());
    }

    print_provider_table(&providers);
    Ok(())
}

async fn show_provider(state: &AppState, id: &str, json: bool) -> Result<()> {
    let provider = state
        .provider_service
        .get_provider(&ProviderId::from(id))
        .await?;

    if json {
        println!("{}", serde_json::to_string_pretty(&provider)?);
        return Ok(());
    }

    println!();
    println!("  {}", style(&provider.name).cyan().bold());
    println!();
    println!("  {}   {}", style("Rate:").bold(), format_rate(provider.hourly_rate));
    println!("  {} {}", style("Status:").bold(), format_status(provider.availability));
    if !provider.skills.is_empty() {
        println!("  {} {}", style("Skills:").bold(), provider.skills.join(", "));
    }
    if !provider.image_url.is_empty() {
        println!("  {}  {}", style("Image:").bold(), style(&provider.image_url).dim());
    }
    println!("  {}     {}", style("ID:").bold(), style(&provider.id).dim());
    println!();

    Ok(())
}

async fn remove_provider(state: &AppState, id: &str, force: bool, json: bool) -> Result<()> {
    let id = ProviderId::from(id);
    let provider = state.provider_service.get_provider(&id).await?;

    if !force && !json {
        let confirmed = Confirm::new()
            .with_prompt(format!("Remove '{}' from the directory?", provider.name))
            .default(false)
            .interact()?;
        if !confirmed {
            println!("  Cancelled.");
            return Ok(());
        }
    }

    state.provider_service.remove_provider(&id).await?;

    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&serde_json::json!({ "removed": id }))?
        );
    } else {
        println!(
            "  {} Removed {}",
            style("✓").green().bold(),
            style(&provider.name).cyan()
        );
    }

    Ok(())
}
