//! Consuming components
//!
//! The pieces that sit between the provider, the state container and the
//! presentation surface: input validation, fetch outcome handling,
//! stale-result guards, recipe detail actions and the cook-mode stepper.

mod cook;
mod detail;
mod guard;
mod input;
mod outcome;

pub use cook::{ALL_DONE, CookMode};
pub use detail::{RecipeDetailView, html_to_text};
pub use guard::{ViewToken, ViewTracker};
pub use input::{InputError, InputField, validate_query};
pub use outcome::FetchOutcome;
