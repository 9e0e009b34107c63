//! Weekly meal planner
//!
//! A (day, meal slot) grid of recipe references. Assigning overwrites,
//! unassigning a missing cell is a no-op.

mod store;

pub use store::{DayPlan, PlannerGrid, PlannerStore};
