//! CLI command definitions and subcommands

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing::debug;

/// RecipeBox - recipe discovery, meal planning and grocery lists
#[derive(Parser)]
#[command(
    name = "rbx",
    about = "Find recipes, plan the week, build a grocery list",
    version = env!("CARGO_PKG_VERSION"),
)]
pub struct Cli {
    /// Path to config file
    #[arg(short, long, global = true, help = "Path to config file")]
    pub config: Option<PathBuf>,

    /// Log level (TRACE, DEBUG, INFO, WARN, ERROR)
    #[arg(
        short = 'l',
        long = "log-level",
        global = true,
        help = "Log level (TRACE, DEBUG, INFO, WARN, ERROR)"
    )]
    pub log_level: Option<String>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// CLI subcommands
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Show random trending recipes
    Trending {
        /// Number of recipes
        #[arg(short, long)]
        number: Option<u32>,

        /// Output format
        #[arg(short, long, default_value = "text")]
        format: OutputFormat,
    },

    /// Search recipes by keyword
    Search {
        /// Search term
        query: String,

        /// Number of results
        #[arg(short, long)]
        number: Option<u32>,

        /// Output format
        #[arg(short, long, default_value = "text")]
        format: OutputFormat,
    },

    /// Find recipes using ingredients on hand
    Ingredients {
        /// Comma-separated ingredient list
        list: String,

        /// Diet filter (e.g. vegetarian, vegan, ketogenic)
        #[arg(long)]
        diet: Option<String>,

        /// Cuisine filter (e.g. italian, mexican)
        #[arg(long)]
        cuisine: Option<String>,

        /// Number of results
        #[arg(short, long)]
        number: Option<u32>,

        /// Output format
        #[arg(short, long, default_value = "text")]
        format: OutputFormat,
    },

    /// Search packaged food products
    Products {
        /// Product name
        query: String,

        /// Number of results
        #[arg(short, long)]
        number: Option<u32>,

        /// Output format
        #[arg(short, long, default_value = "text")]
        format: OutputFormat,
    },

    /// Show recipe detail
    Recipe {
        /// Recipe ID
        id: u64,

        /// Output format
        #[arg(short, long, default_value = "text")]
        format: OutputFormat,
    },

    /// Print a recipe's cooking steps
    Cook {
        /// Recipe ID
        id: u64,

        /// Output format
        #[arg(short, long, default_value = "text")]
        format: OutputFormat,
    },

    /// Start the interactive session (default)
    Repl,
}

/// Get the log file path
pub fn get_log_path() -> PathBuf {
    debug!("get_log_path: called");
    let path = dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("recipebox")
        .join("logs")
        .join("recipebox.log");
    debug!(?path, "get_log_path: returning path");
    path
}

/// Generate the after_help text with API key status and log location
pub fn generate_after_help() -> String {
    debug!("generate_after_help: called");
    let key_env = crate::config::ProviderConfig::default().api_key_env;
    let key_set = std::env::var(&key_env).is_ok();

    let mut help = String::new();
    help.push_str("Provider:\n");
    let icon = if key_set { "\u{2705}" } else { "\u{274C}" };
    let status = if key_set { "set" } else { "not set" };
    help.push_str(&format!("  {} {:<22} {}\n", icon, key_env, status));

    help.push('\n');
    help.push_str(&format!("Logs are written to: {}\n", get_log_path().display()));
    help
}

/// Output format for one-shot commands
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        debug!(%s, "OutputFormat::from_str: called");
        match s.to_lowercase().as_str() {
            "text" | "plain" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            _ => {
                debug!(%s, "OutputFormat::from_str: unknown format");
                Err(format!("Unknown format: {}. Use: text or json", s))
            }
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Text => write!(f, "text"),
            Self::Json => write!(f, "json"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parse_no_command() {
        let cli = Cli::parse_from(["rbx"]);
        assert!(cli.command.is_none());
    }

    #[test]
    fn test_cli_parse_search() {
        let cli = Cli::parse_from(["rbx", "search", "pasta", "-n", "5"]);
        if let Some(Command::Search { query, number, format }) = cli.command {
            assert_eq!(query, "pasta");
            assert_eq!(number, Some(5));
            assert_eq!(format, OutputFormat::Text);
        } else {
            panic!("Expected Search command");
        }
    }

    #[test]
    fn test_cli_parse_ingredients_with_filters() {
        let cli = Cli::parse_from([
            "rbx",
            "ingredients",
            "chicken, rice",
            "--diet",
            "gluten free",
            "--cuisine",
            "thai",
            "--format",
            "json",
        ]);
        if let Some(Command::Ingredients {
            list,
            diet,
            cuisine,
            number,
            format,
        }) = cli.command
        {
            assert_eq!(list, "chicken, rice");
            assert_eq!(diet.as_deref(), Some("gluten free"));
            assert_eq!(cuisine.as_deref(), Some("thai"));
            assert!(number.is_none());
            assert_eq!(format, OutputFormat::Json);
        } else {
            panic!("Expected Ingredients command");
        }
    }

    #[test]
    fn test_cli_parse_recipe_id() {
        let cli = Cli::parse_from(["rbx", "recipe", "716429"]);
        assert!(matches!(cli.command, Some(Command::Recipe { id: 716429, .. })));
        assert!(Cli::try_parse_from(["rbx", "recipe", "soup"]).is_err());
    }

    #[test]
    fn test_cli_parse_repl() {
        let cli = Cli::parse_from(["rbx", "repl"]);
        assert!(matches!(cli.command, Some(Command::Repl)));
    }

    #[test]
    fn test_output_format_from_str() {
        assert!(matches!("text".parse::<OutputFormat>(), Ok(OutputFormat::Text)));
        assert!(matches!("JSON".parse::<OutputFormat>(), Ok(OutputFormat::Json)));
        assert!("table".parse::<OutputFormat>().is_err());
        assert_eq!(OutputFormat::Json.to_string(), "json");
    }

    #[test]
    fn test_cli_with_config() {
        let cli = Cli::parse_from(["rbx", "-c", "/path/to/config.yml", "trending"]);
        assert_eq!(cli.config, Some(PathBuf::from("/path/to/config.yml")));
    }

    #[test]
    fn test_log_path_under_recipebox() {
        assert!(get_log_path().ends_with("recipebox/logs/recipebox.log"));
    }
}
