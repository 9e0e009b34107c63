//! REPL session management

use std::future::Future;
use std::sync::Arc;

use colored::Colorize;
use eyre::Result;
use futures::future::join_all;
use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;
use tokio::sync::{broadcast, oneshot};
use tracing::{debug, info, warn};

use super::command::{ReplCommand, parse_command};
use super::render;
use crate::config::DisplayConfig;
use crate::domain::{Day, MealSlot, RecipeSummary};
use crate::provider::{ProviderError, RecipeProvider, RecipeQuery};
use crate::state::{StateEvent, StateManager};
use crate::views::{ALL_DONE, CookMode, FetchOutcome, RecipeDetailView, ViewTracker};

/// Interactive REPL session
pub struct ReplSession {
    provider: Arc<dyn RecipeProvider>,
    state: StateManager,
    events: broadcast::Receiver<StateEvent>,
    views: ViewTracker,
    display: DisplayConfig,
    /// Recipes from the most recent list view
    last_results: Vec<RecipeSummary>,
    /// Recipe currently open in the detail view
    current: Option<RecipeDetailView>,
    cook: Option<CookMode>,
}

impl ReplSession {
    /// Create a new REPL session over its own state
    pub fn new(provider: Arc<dyn RecipeProvider>, state: StateManager, display: DisplayConfig) -> Self {
        let events = state.subscribe_events();
        Self {
            provider,
            state,
            events,
            views: ViewTracker::new(),
            display,
            last_results: Vec::new(),
            current: None,
            cook: None,
        }
    }

    /// Run the REPL main loop
    pub async fn run(&mut self) -> Result<()> {
        self.print_welcome().await;

        let mut rl = DefaultEditor::new().map_err(|e| eyre::eyre!("Failed to initialize readline: {}", e))?;

        loop {
            let prompt = if self.cook.is_some() {
                format!("{} ", "cook>".bright_yellow())
            } else {
                format!("{} ", ">".bright_green())
            };

            match rl.readline(&prompt) {
                Ok(line) => {
                    let input = line.trim();
                    if input.is_empty() {
                        continue;
                    }
                    let _ = rl.add_history_entry(input);

                    if self.cook.is_some() && !input.starts_with('/') {
                        self.handle_cook_input(input);
                        continue;
                    }

                    let parsed = if input.starts_with('/') {
                        parse_command(input)
                    } else {
                        parse_command(&format!("/search {}", input))
                    };

                    match parsed {
                        Ok(cmd) => {
                            if self.execute(cmd).await? == SlashResult::Quit {
                                break;
                            }
                        }
                        Err(e) => println!("{} {}", "?".yellow(), e),
                    }
                    self.print_events();
                }
                Err(ReadlineError::Interrupted) => {
                    println!("^C");
                    continue;
                }
                Err(ReadlineError::Eof) => {
                    println!();
                    break;
                }
                Err(err) => {
                    return Err(eyre::eyre!("Readline error: {}", err));
                }
            }
        }

        self.state.shutdown().await?;
        println!("Goodbye!");
        Ok(())
    }

    async fn print_welcome(&mut self) {
        println!();
        println!("{}", "RecipeBox".bright_cyan().bold());
        println!("Type {} for help, {} to quit", "/help".yellow(), "/quit".yellow());
        println!();

        let provider = Arc::clone(&self.provider);
        let count = self.display.home_count;
        if let Some(outcome) = self.fetch_list(async move { provider.trending(count).await }).await {
            println!("{}", "Trending now".bright_cyan());
            self.show_recipes(outcome);
        }
    }

    /// Run one parsed command
    pub async fn execute(&mut self, cmd: ReplCommand) -> Result<SlashResult> {
        debug!(?cmd, "execute: called");
        match cmd {
            ReplCommand::Help => self.print_help(),
            ReplCommand::Quit => return Ok(SlashResult::Quit),
            ReplCommand::Trending => {
                let provider = Arc::clone(&self.provider);
                let count = self.display.trending_count;
                if let Some(outcome) = self.fetch_list(async move { provider.trending(count).await }).await {
                    self.show_recipes(outcome);
                }
            }
            ReplCommand::Search(query) => {
                let query = RecipeQuery::keyword(query).with_number(self.display.results_count);
                self.search(query).await;
            }
            ReplCommand::Ingredients { list, diet, cuisine } => {
                let query = RecipeQuery::ingredients(list)
                    .with_diet(diet)
                    .with_cuisine(cuisine)
                    .with_number(self.display.results_count);
                self.search(query).await;
            }
            ReplCommand::Products(query) => {
                let provider = Arc::clone(&self.provider);
                let number = self.display.results_count;
                let fetch = async move { provider.search_products(&query, number).await };
                if let Some(outcome) = self.fetch_list(fetch).await {
                    match outcome.status_message() {
                        Some(message) => println!("{}", message.yellow()),
                        None => print!("{}", render::product_list(outcome.items())),
                    }
                }
            }
            ReplCommand::Recipe(id) => {
                if self.open_recipe(id).await
                    && let Some(view) = &self.current
                {
                    print!("{}", render::recipe_detail(view));
                }
            }
            ReplCommand::Cook(id) => self.start_cooking(id).await,
            ReplCommand::Plan { day, slot, id } => self.plan(day, slot, id).await?,
            ReplCommand::Unplan { day, slot } => {
                self.state.unassign(day, slot).await?;
                println!("Cleared {} {}.", day, slot);
            }
            ReplCommand::Planner => {
                let grid = self.state.planner_snapshot().await?;
                print!("{}", render::planner(&grid));
            }
            ReplCommand::Grocery => {
                let groups = self.state.grocery_by_aisle().await?;
                print!("{}", render::grocery(&groups));
            }
            ReplCommand::GroceryAdd(ids) => self.add_to_grocery(ids).await?,
            ReplCommand::Check { id, name } => {
                if self.state.toggle_grocery_item(id, &name).await? {
                    println!("Toggled {}.", name);
                } else {
                    println!("{}", format!("No grocery item matches {} {}.", id, name).dimmed());
                }
            }
            ReplCommand::GroceryClear => {
                self.state.clear_grocery().await?;
                println!("Grocery list cleared.");
            }
            ReplCommand::GroceryFromPlan => {
                let planned = self.state.planned_recipes().await?;
                println!(
                    "{}",
                    "Generating a grocery list from the planner is not available yet.".yellow()
                );
                if !planned.is_empty() {
                    let ids: Vec<String> = planned.iter().map(|r| r.id.to_string()).collect();
                    println!("Add planned recipes one by one with /grocery-add {}", ids.join(" "));
                }
            }
        }
        Ok(SlashResult::Continue)
    }

    /// Spawn a fetch for a new view and wait for it, unless the user cancels
    ///
    /// A cancelled view is torn down; if its fetch completes later, the
    /// token drops the result instead of delivering it.
    async fn guarded<T, F>(&self, fetch: F) -> Option<Result<T, ProviderError>>
    where
        T: Send + 'static,
        F: Future<Output = Result<T, ProviderError>> + Send + 'static,
    {
        let token = self.views.enter();
        let (tx, rx) = oneshot::channel();

        tokio::spawn(async move {
            let result = fetch.await;
            token.apply(result, |r| {
                let _ = tx.send(r);
            });
        });

        tokio::select! {
            received = rx => received.ok(),
            _ = tokio::signal::ctrl_c() => {
                self.views.leave();
                println!("{}", "Cancelled.".dimmed());
                None
            }
        }
    }

    async fn fetch_list<T, F>(&self, fetch: F) -> Option<FetchOutcome<T>>
    where
        T: Send + 'static,
        F: Future<Output = Result<Vec<T>, ProviderError>> + Send + 'static,
    {
        self.guarded(fetch).await.map(FetchOutcome::from_result)
    }

    async fn search(&mut self, query: RecipeQuery) {
        let provider = Arc::clone(&self.provider);
        if let Some(outcome) = self.fetch_list(async move { provider.search_recipes(&query).await }).await {
            self.show_recipes(outcome);
        }
    }

    fn show_recipes(&mut self, outcome: FetchOutcome<RecipeSummary>) {
        if let Some(message) = outcome.status_message() {
            println!("{}", message.yellow());
            return;
        }
        self.last_results = outcome.into_items();
        print!("{}", render::recipe_list(&self.last_results));
        println!("{}", "Open one with /recipe <id>".dimmed());
    }

    /// Load a recipe into the detail view; false when it could not be loaded
    async fn open_recipe(&mut self, id: u64) -> bool {
        if self.current.as_ref().is_some_and(|v| v.summary().id == id) {
            return true;
        }

        let provider = Arc::clone(&self.provider);
        match self.guarded(async move { provider.recipe_details(id).await }).await {
            Some(Ok(recipe)) => {
                info!(id, title = %recipe.info.title, "open_recipe: loaded");
                self.current = Some(RecipeDetailView::new(recipe));
                true
            }
            Some(Err(e)) => {
                warn!(id, error = %e, "open_recipe: fetch failed");
                println!("{}", format!("Could not load recipe {}. Please try again.", id).yellow());
                false
            }
            None => false,
        }
    }

    async fn start_cooking(&mut self, id: u64) {
        if !self.open_recipe(id).await {
            return;
        }
        let Some(view) = &self.current else {
            return;
        };
        let cook = CookMode::new(view.recipe());
        println!("{} {}", "Cooking".bright_cyan(), cook.title().bold());
        print!("{}", render::cook_step(&cook));
        if cook.is_empty() {
            return;
        }
        println!("{}", "n = next, p = previous, q = stop cooking".dimmed());
        self.cook = Some(cook);
    }

    fn handle_cook_input(&mut self, input: &str) {
        let Some(cook) = self.cook.as_mut() else {
            return;
        };
        match input {
            "n" | "next" => {
                if cook.next() {
                    print!("{}", render::cook_step(cook));
                } else {
                    println!("{}", ALL_DONE.bright_green());
                    self.cook = None;
                }
            }
            "p" | "prev" => {
                cook.prev();
                print!("{}", render::cook_step(cook));
            }
            "q" | "quit" | "done" => {
                self.cook = None;
                println!("{}", "Stopped cooking.".dimmed());
            }
            _ => println!("{}", "n = next, p = previous, q = stop cooking".dimmed()),
        }
    }

    /// Find a recipe among what the user is looking at
    fn resolve_recipe(&self, id: Option<u64>) -> Option<RecipeSummary> {
        let current = self.current.as_ref().map(|v| v.summary());
        match id {
            None => current.cloned(),
            Some(id) => self
                .last_results
                .iter()
                .chain(current)
                .find(|r| r.id == id)
                .cloned(),
        }
    }

    async fn plan(&mut self, day: Day, slot: MealSlot, id: Option<u64>) -> Result<()> {
        let Some(recipe) = self.resolve_recipe(id) else {
            let hint = match id {
                Some(id) => format!("Recipe {} is not in the last results. Search or open it first.", id),
                None => "Open a recipe first or give a recipe id from the last results.".to_string(),
            };
            println!("{}", hint.yellow());
            return Ok(());
        };
        let title = recipe.title.clone();
        self.state.assign(recipe, day, slot).await?;
        println!("Planned {} for {} {}.", title.bold(), day, slot);
        Ok(())
    }

    async fn add_to_grocery(&mut self, ids: Vec<u64>) -> Result<()> {
        if ids.is_empty() {
            match &self.current {
                Some(view) => {
                    let added = view.add_to_grocery(&self.state).await?;
                    println!("Added {} new item(s) from {}.", added, view.summary().title);
                }
                None => println!("{}", "Open a recipe first or pass recipe ids.".yellow()),
            }
            return Ok(());
        }

        let provider = Arc::clone(&self.provider);
        let request_ids = ids.clone();
        let fetch = async move {
            let fetches = request_ids.iter().map(|id| provider.recipe_details(*id));
            Ok::<_, ProviderError>(join_all(fetches).await)
        };
        let Some(Ok(results)) = self.guarded(fetch).await else {
            return Ok(());
        };

        for (id, result) in ids.into_iter().zip(results) {
            match result {
                Ok(recipe) => {
                    let view = RecipeDetailView::new(recipe);
                    let added = view.add_to_grocery(&self.state).await?;
                    println!("Added {} new item(s) from {}.", added, view.summary().title);
                }
                Err(e) => {
                    warn!(id, error = %e, "add_to_grocery: fetch failed");
                    println!("{}", format!("Could not load recipe {}. Please try again.", id).yellow());
                }
            }
        }
        Ok(())
    }

    /// Report state changes since the last command
    fn print_events(&mut self) {
        for notice in self.drain_events() {
            println!("{}", notice.dimmed());
        }
    }

    /// Consume every buffered event, skipping past any the receiver lagged on
    fn drain_events(&mut self) -> Vec<String> {
        let mut notices = Vec::new();
        loop {
            match self.events.try_recv() {
                Ok(event) => {
                    debug!(?event, "drain_events: state changed");
                    if let StateEvent::GroceryChanged { len } = event {
                        notices.push(format!("Grocery list: {} item(s)", len));
                    }
                }
                Err(broadcast::error::TryRecvError::Lagged(skipped)) => {
                    debug!(skipped, "drain_events: receiver lagged");
                    continue;
                }
                Err(_) => break,
            }
        }
        notices
    }

    fn print_help(&self) {
        println!();
        println!("{}", "Discover:".bright_cyan());
        println!("  {:32} Random trending recipes", "/trending".yellow());
        println!("  {:32} Search recipes (or just type)", "/search <term>".yellow());
        println!(
            "  {:32} Recipes from what you have",
            "/ingredients <a, b> [--diet d] [--cuisine c]".yellow()
        );
        println!("  {:32} Search packaged products", "/products <name>".yellow());
        println!("  {:32} Open a recipe", "/recipe <id>".yellow());
        println!("  {:32} Step-by-step cooking", "/cook <id>".yellow());
        println!();
        println!("{}", "Plan:".bright_cyan());
        println!("  {:32} Put a recipe on the planner", "/plan <day|today> <slot> [id]".yellow());
        println!("  {:32} Clear a planner cell", "/unplan <day> <slot>".yellow());
        println!("  {:32} Show the week", "/planner".yellow());
        println!();
        println!("{}", "Shop:".bright_cyan());
        println!("  {:32} Show the grocery list by aisle", "/grocery".yellow());
        println!("  {:32} Add recipe ingredients", "/grocery-add [id...]".yellow());
        println!("  {:32} Check or uncheck an item", "/check <id> <name>".yellow());
        println!("  {:32} Empty the grocery list", "/grocery-clear".yellow());
        println!("  {:32} Build the list from the planner", "/grocery-from-plan".yellow());
        println!();
        println!("  {:32} Show this help", "/help".yellow());
        println!("  {:32} Exit", "/quit".yellow());
        println!();
    }
}

/// Result of handling a slash command
#[derive(Debug, PartialEq, Eq)]
pub enum SlashResult {
    Continue,
    Quit,
}
