//! Interactive REPL for RecipeBox
//!
//! Slash commands over one session's planner and grocery list. Nothing is
//! persisted; quitting drops the session state.

mod command;
pub mod render;
mod session;

pub use command::{CommandError, ReplCommand, parse_command};
pub use session::{ReplSession, SlashResult};

use eyre::Result;

use crate::config::Config;
use crate::provider::create_provider;
use crate::state::StateManager;

/// Run the interactive REPL
///
/// This is the main entry point for `rbx repl` and for `rbx` with no
/// subcommand.
pub async fn run_interactive(config: &Config) -> Result<()> {
    // Validate API key early
    config.validate()?;

    let provider =
        create_provider(&config.provider).map_err(|e| eyre::eyre!("Failed to create recipe provider: {}", e))?;

    let state = StateManager::spawn();
    let mut session = ReplSession::new(provider, state, config.display.clone());
    session.run().await
}
