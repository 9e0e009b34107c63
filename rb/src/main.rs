//! RecipeBox - recipe discovery, meal planning and grocery lists
//!
//! CLI entry point: one-shot lookups and the interactive session.

use std::fs;
use std::path::PathBuf;
use std::sync::Arc;

use clap::{CommandFactory, FromArgMatches};
use colored::Colorize;
use eyre::{Context, Result};
use serde::Serialize;
use tracing::{debug, info, warn};

use recipebox::cli::{Cli, Command, OutputFormat, generate_after_help};
use recipebox::config::Config;
use recipebox::provider::{RecipeProvider, RecipeQuery, create_provider};
use recipebox::repl::{self, render};
use recipebox::views::{CookMode, FetchOutcome, InputField, RecipeDetailView, validate_query};

fn setup_logging(cli_log_level: Option<&str>, config_log_level: Option<&str>) -> Result<()> {
    // Note: Can't log params here since logging isn't initialized yet
    let log_dir = dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("recipebox")
        .join("logs");

    fs::create_dir_all(&log_dir).context("Failed to create log directory")?;

    // Determine log level with priority: CLI --log-level > config file > default (INFO)
    let level = match cli_log_level.or(config_log_level) {
        Some(s) => match s.to_uppercase().as_str() {
            "TRACE" => tracing::Level::TRACE,
            "DEBUG" => tracing::Level::DEBUG,
            "INFO" => tracing::Level::INFO,
            "WARN" | "WARNING" => tracing::Level::WARN,
            "ERROR" => tracing::Level::ERROR,
            _ => {
                eprintln!("Warning: Unknown log-level '{}', defaulting to INFO", s);
                tracing::Level::INFO
            }
        },
        None => tracing::Level::INFO,
    };

    let log_file = fs::File::create(log_dir.join("recipebox.log")).context("Failed to create log file")?;

    tracing_subscriber::fmt()
        .with_writer(log_file)
        .with_ansi(false)
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into()))
        .init();

    info!("Logging initialized (level: {:?})", level);
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    // Build command with dynamic after_help that shows API key status
    let cmd = Cli::command().after_help(generate_after_help());
    let cli = Cli::from_arg_matches(&cmd.get_matches())?;

    // Load log level from config file early (before full config load)
    let config_log_level = Config::load_log_level(cli.config.as_ref());

    setup_logging(cli.log_level.as_deref(), config_log_level.as_deref()).context("Failed to setup logging")?;

    let config = Config::load(cli.config.as_ref()).context("Failed to load configuration")?;
    info!(provider = %config.provider.provider, "RecipeBox loaded config");

    debug!(command = ?cli.command, "main: dispatching command");
    match cli.command {
        Some(Command::Trending { number, format }) => {
            let count = number.unwrap_or(config.display.trending_count);
            let provider = provider(&config)?;
            let outcome = FetchOutcome::from_result(provider.trending(count).await);
            print_list(outcome, format, render::recipe_list)
        }
        Some(Command::Search { query, number, format }) => {
            let query = validate_query(&query, InputField::SearchTerm)?;
            let query = RecipeQuery::keyword(query).with_number(number.unwrap_or(config.display.results_count));
            let provider = provider(&config)?;
            let outcome = FetchOutcome::from_result(provider.search_recipes(&query).await);
            print_list(outcome, format, render::recipe_list)
        }
        Some(Command::Ingredients {
            list,
            diet,
            cuisine,
            number,
            format,
        }) => {
            let list = validate_query(&list, InputField::Ingredients)?;
            let query = RecipeQuery::ingredients(list)
                .with_diet(diet)
                .with_cuisine(cuisine)
                .with_number(number.unwrap_or(config.display.results_count));
            let provider = provider(&config)?;
            let outcome = FetchOutcome::from_result(provider.search_recipes(&query).await);
            print_list(outcome, format, render::recipe_list)
        }
        Some(Command::Products { query, number, format }) => {
            let query = validate_query(&query, InputField::ProductName)?;
            let number = number.unwrap_or(config.display.results_count);
            let provider = provider(&config)?;
            let outcome = FetchOutcome::from_result(provider.search_products(&query, number).await);
            print_list(outcome, format, render::product_list)
        }
        Some(Command::Recipe { id, format }) => cmd_recipe(&config, id, format).await,
        Some(Command::Cook { id, format }) => cmd_cook(&config, id, format).await,
        Some(Command::Repl) | None => {
            debug!("main: launching interactive session");
            repl::run_interactive(&config).await
        }
    }
}

fn provider(config: &Config) -> Result<Arc<dyn RecipeProvider>> {
    config.validate()?;
    create_provider(&config.provider).map_err(|e| eyre::eyre!("Failed to create recipe provider: {}", e))
}

/// Print a list outcome; failures print as "no results"
fn print_list<T: Serialize>(outcome: FetchOutcome<T>, format: OutputFormat, text: fn(&[T]) -> String) -> Result<()> {
    if let Some(message) = outcome.status_message() {
        eprintln!("{}", message.yellow());
    }
    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(outcome.items())?),
        OutputFormat::Text => print!("{}", text(outcome.items())),
    }
    Ok(())
}

async fn cmd_recipe(config: &Config, id: u64, format: OutputFormat) -> Result<()> {
    debug!(id, %format, "cmd_recipe: called");
    let provider = provider(config)?;
    match provider.recipe_details(id).await {
        Ok(recipe) => match format {
            OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&recipe)?),
            OutputFormat::Text => print!("{}", render::recipe_detail(&RecipeDetailView::new(recipe))),
        },
        Err(e) => {
            warn!(id, error = %e, "cmd_recipe: fetch failed");
            eprintln!("{}", format!("Could not load recipe {}. Please try again.", id).yellow());
        }
    }
    Ok(())
}

/// Print every cooking step in order
async fn cmd_cook(config: &Config, id: u64, format: OutputFormat) -> Result<()> {
    debug!(id, %format, "cmd_cook: called");
    let provider = provider(config)?;
    let recipe = match provider.recipe_details(id).await {
        Ok(recipe) => recipe,
        Err(e) => {
            warn!(id, error = %e, "cmd_cook: fetch failed");
            eprintln!("{}", format!("Could not load recipe {}. Please try again.", id).yellow());
            return Ok(());
        }
    };

    if format == OutputFormat::Json {
        println!("{}", serde_json::to_string_pretty(recipe.steps())?);
        return Ok(());
    }

    let mut cook = CookMode::new(&recipe);
    println!("{} {}", "Cooking".bright_cyan(), cook.title().bold());
    loop {
        print!("{}", render::cook_step(&cook));
        if !cook.next() {
            break;
        }
    }
    Ok(())
}
