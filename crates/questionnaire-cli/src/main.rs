//! Questionnaire CLI - manage questionnaires over the HTTP API

mod api;
mod config;

use anyhow::{bail, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;

use api::{QuestionnaireClient, QuestionnaireRequest, QuestionnaireResponse};
use config::{Config, BASE_URL_ENV};

#[derive(Parser)]
#[command(name = "questionnaire")]
#[command(about = "Questionnaire CLI - manage questionnaires", long_about = None)]
#[command(version)]
struct Cli {
    /// API base URL (overrides QUESTIONNAIRE_API_URL and the config file)
    #[arg(long, global = true)]
    url: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List all questionnaires
    List,

    /// Show a questionnaire
    Get {
        /// Questionnaire ID
        id: String,
    },

    /// Create a questionnaire
    Create {
        /// Title (required)
        #[arg(short, long)]
        title: String,
        /// ID (generated by the server if omitted)
        #[arg(long)]
        id: Option<String>,
        /// Description
        #[arg(short, long)]
        description: Option<String>,
    },

    /// Update title and/or description (omitted fields keep their value)
    Update {
        /// Questionnaire ID
        id: String,
        #[arg(short, long)]
        title: Option<String>,
        #[arg(short, long)]
        description: Option<String>,
        /// Remove the stored description
        #[arg(long, conflicts_with = "description")]
        clear_description: bool,
    },

    /// Delete a questionnaire
    Delete {
        /// Questionnaire ID
        id: String,
    },

    /// Check that the API is reachable
    Health,

    /// Persist the API base URL
    SetUrl {
        url: String,
    },

    /// Show current configuration
    Config,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    let config = Config::load()?;
    let base_url = config.resolve_base_url(cli.url.as_deref(), std::env::var(BASE_URL_ENV).ok());
    let client = QuestionnaireClient::new(&base_url);

    match cli.command {
        Commands::List => cmd_list(&client).await,
        Commands::Get { id } => {
            let q = client.get(&id).await?;
            print_questionnaire(&q);
            Ok(())
        }
        Commands::Create {
            title,
            id,
            description,
        } => cmd_create(&client, id, title, description).await,
        Commands::Update {
            id,
            title,
            description,
            clear_description,
        } => cmd_update(&client, &id, title, description, clear_description).await,
        Commands::Delete { id } => {
            client.delete(&id).await?;
            println!("{} Questionnaire '{}' deleted", "✓".green(), id);
            Ok(())
        }
        Commands::Health => cmd_health(&client, &base_url).await,
        Commands::SetUrl { url } => cmd_set_url(config, url),
        Commands::Config => cmd_config(&config, &base_url),
    }
}

// ============================================
// Command Implementations
// ============================================

async fn cmd_list(client: &QuestionnaireClient) -> Result<()> {
    let questionnaires = client.list().await?;

    if questionnaires.is_empty() {
        println!("No questionnaires found.");
        return Ok(());
    }

    println!("{}", "Questionnaires:".bold());
    for q in questionnaires {
        println!(
            "  {} {} {}",
            q.id.cyan(),
            q.title,
            q.description.as_deref().unwrap_or("").dimmed()
        );
    }

    Ok(())
}

async fn cmd_create(
    client: &QuestionnaireClient,
    id: Option<String>,
    title: String,
    description: Option<String>,
) -> Result<()> {
    if title.is_empty() {
        bail!("Title must not be empty");
    }

    let created = client
        .create(&QuestionnaireRequest {
            id,
            title,
            description,
        })
        .await?;

    println!("{} Questionnaire created", "✓".green());
    print_questionnaire(&created);
    Ok(())
}

async fn cmd_update(
    client: &QuestionnaireClient,
    id: &str,
    title: Option<String>,
    description: Option<String>,
    clear_description: bool,
) -> Result<()> {
    if title.is_none() && description.is_none() && !clear_description {
        bail!("Nothing to update: pass --title, --description or --clear-description");
    }

    let current = client.get(id).await?;
    let request = merge_update(current, title, description, clear_description);
    let updated = client.update(id, &request).await?;

    println!("{} Questionnaire updated", "✓".green());
    print_questionnaire(&updated);
    Ok(())
}

/// PUT replaces both fields, so omitted ones are filled from the current record.
fn merge_update(
    current: QuestionnaireResponse,
    title: Option<String>,
    description: Option<String>,
    clear_description: bool,
) -> QuestionnaireRequest {
    let description = if clear_description {
        None
    } else {
        description.or(current.description)
    };

    QuestionnaireRequest {
        id: None,
        title: title.unwrap_or(current.title),
        description,
    }
}

async fn cmd_health(client: &QuestionnaireClient, base_url: &str) -> Result<()> {
    print!("Checking {}... ", base_url);

    match client.health().await {
        Ok(true) => {
            println!("{}", "OK".green());
            Ok(())
        }
        _ => {
            println!("{}", "Failed".red());
            bail!("Could not reach the Questionnaire API at {}", base_url);
        }
    }
}

fn cmd_set_url(mut config: Config, url: String) -> Result<()> {
    config.base_url = url.trim_end_matches('/').to_string();
    config.save()?;

    println!(
        "{} Base URL saved to {:?}",
        "✓".green(),
        Config::config_path()?
    );
    Ok(())
}

fn cmd_config(config: &Config, effective_url: &str) -> Result<()> {
    println!("{}", "Configuration:".bold());
    println!("  Config file: {:?}", Config::config_path()?);
    println!("  Base URL (file): {}", config.base_url);
    println!("  Base URL (effective): {}", effective_url.cyan());
    Ok(())
}

fn print_questionnaire(q: &QuestionnaireResponse) {
    println!("  {}: {}", "id".dimmed(), q.id.cyan());
    println!("  {}: {}", "title".dimmed(), q.title);
    println!(
        "  {}: {}",
        "description".dimmed(),
        q.description.as_deref().unwrap_or("-")
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    fn current() -> QuestionnaireResponse {
        QuestionnaireResponse {
            id: "1".to_string(),
            title: "Title1".to_string(),
            description: Some("Description1".to_string()),
        }
    }

    #[test]
    fn test_merge_keeps_omitted_fields() {
        let request = merge_update(current(), Some("Title2".to_string()), None, false);
        assert_eq!(request.title, "Title2");
        assert_eq!(request.description.as_deref(), Some("Description1"));
    }

    #[test]
    fn test_merge_clears_description() {
        let request = merge_update(current(), None, None, true);
        assert_eq!(request.title, "Title1");
        assert_eq!(request.description, None);
        assert_eq!(request.id, None);
    }

    #[test]
    fn test_clear_conflicts_with_description() {
        let parsed = Cli::try_parse_from([
            "questionnaire",
            "update",
            "1",
            "--description",
            "x",
            "--clear-description",
        ]);
        assert!(parsed.is_err());
    }
}
