//! Shared application state with actor pattern
//!
//! `AppState` owns the planner and grocery stores. `StateManager` is the
//! handle presentation code holds: it owns an `AppState` inside a task and
//! applies commands one at a time, in arrival order.

mod container;
mod manager;
mod messages;

pub use container::AppState;
pub use manager::{StateEvent, StateManager};
pub use messages::{StateCommand, StateError, StateResponse};
