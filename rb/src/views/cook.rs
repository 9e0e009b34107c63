//! Step-by-step cooking mode

use crate::domain::{InstructionStep, Recipe};

/// Shown in place of a step when the recipe has no analyzed instructions
pub const ALL_DONE: &str = "All done!";

/// Stepper over the primary instruction set of a recipe
#[derive(Debug, Clone)]
pub struct CookMode {
    title: String,
    steps: Vec<InstructionStep>,
    current: usize,
}

impl CookMode {
    pub fn new(recipe: &Recipe) -> Self {
        Self {
            title: recipe.info.title.clone(),
            steps: recipe.steps().to_vec(),
            current: 0,
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn current(&self) -> Option<&InstructionStep> {
        self.steps.get(self.current)
    }

    /// Text of the current step, or the completion message
    pub fn current_text(&self) -> &str {
        self.current().map(|s| s.step.as_str()).unwrap_or(ALL_DONE)
    }

    /// Advance one step; stays on the last step
    pub fn next(&mut self) -> bool {
        if self.current + 1 < self.steps.len() {
            self.current += 1;
            true
        } else {
            false
        }
    }

    /// Go back one step; stays on the first step
    pub fn prev(&mut self) -> bool {
        if self.current > 0 {
            self.current -= 1;
            true
        } else {
            false
        }
    }

    /// (1-based current step, total steps); (0, 0) without steps
    pub fn position(&self) -> (usize, usize) {
        if self.steps.is_empty() {
            (0, 0)
        } else {
            (self.current + 1, self.steps.len())
        }
    }

    pub fn progress_percent(&self) -> f64 {
        match self.position() {
            (_, 0) => 0.0,
            (cur, total) => cur as f64 / total as f64 * 100.0,
        }
    }

    pub fn is_first(&self) -> bool {
        self.current == 0
    }

    pub fn is_last(&self) -> bool {
        self.current + 1 >= self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }
}
