//! Stale-result guards for in-flight fetches
//!
//! Each view entered gets a generation number. A fetch captures the token
//! for the view that issued it; when the result arrives, it is applied only
//! if that view is still the current one.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use tracing::debug;

/// Tracks which view is currently on screen
#[derive(Debug, Clone, Default)]
pub struct ViewTracker {
    generation: Arc<AtomicU64>,
}

impl ViewTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new view, invalidating every earlier token
    pub fn enter(&self) -> ViewToken {
        let id = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        debug!(generation = id, "enter: new view");
        ViewToken {
            generation: Arc::clone(&self.generation),
            id,
        }
    }

    /// Tear the current view down without starting another
    pub fn leave(&self) {
        let id = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        debug!(generation = id, "leave: view torn down");
    }
}

/// Handle held by a fetch on behalf of the view that issued it
#[derive(Debug, Clone)]
pub struct ViewToken {
    generation: Arc<AtomicU64>,
    id: u64,
}

impl ViewToken {
    pub fn is_current(&self) -> bool {
        self.generation.load(Ordering::SeqCst) == self.id
    }

    /// Run `f` on `value` if the view is still current, otherwise drop it
    pub fn apply<T, R>(&self, value: T, f: impl FnOnce(T) -> R) -> Option<R> {
        if self.is_current() {
            Some(f(value))
        } else {
            debug!(token = self.id, "apply: discarding result for abandoned view");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::RecipeSummary;
    use crate::provider::client::mock::MockProvider;
    use crate::provider::{RecipeProvider, RecipeQuery};
    use std::time::Duration;

    #[test]
    fn test_enter_invalidates_previous_token() {
        let tracker = ViewTracker::new();
        let first = tracker.enter();
        assert!(first.is_current());

        let second = tracker.enter();
        assert!(!first.is_current());
        assert!(second.is_current());
    }

    #[test]
    fn test_leave_invalidates_current_token() {
        let tracker = ViewTracker::new();
        let token = tracker.enter();
        tracker.leave();
        assert!(!token.is_current());
        assert_eq!(token.apply(5, |v| v * 2), None);
    }

    #[test]
    fn test_apply_runs_for_current_view() {
        let tracker = ViewTracker::new();
        let token = tracker.enter();
        assert_eq!(token.apply(5, |v| v * 2), Some(10));
    }

    #[tokio::test]
    async fn test_result_arriving_after_navigation_is_discarded() {
        let provider = Arc::new(
            MockProvider::new()
                .with_recipes(vec![RecipeSummary::new(1, "Soup")])
                .with_delay(Duration::from_millis(50)),
        );
        let tracker = ViewTracker::new();
        let token = tracker.enter();

        let fetch = {
            let provider = Arc::clone(&provider);
            tokio::spawn(async move { provider.search_recipes(&RecipeQuery::keyword("soup")).await })
        };

        // User navigates away before the response lands
        tracker.enter();

        let result = fetch.await.unwrap().unwrap();
        let mut shown: Vec<RecipeSummary> = Vec::new();
        let applied = token.apply(result, |recipes| shown = recipes);

        assert!(applied.is_none());
        assert!(shown.is_empty());
        assert_eq!(provider.call_count(), 1);
    }
}
