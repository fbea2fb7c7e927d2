// session/src/scope.rs
//
// Teardown guard for view-bound fetches. A fetch carries a `ScopeToken`
// and its result is discarded once the owning `ViewScope` has been
// retired, so late responses never write into a torn-down view.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use tracing::debug;

/// Owns the lifetime of one mounted view. Dropping the scope retires it.
#[derive(Debug)]
pub struct ViewScope {
    alive: Arc<AtomicBool>,
}

impl Default for ViewScope {
    fn default() -> Self {
        Self::new()
    }
}

impl ViewScope {
    pub fn new() -> Self {
        ViewScope {
            alive: Arc::new(AtomicBool::new(true)),
        }
    }

    /// A token to hand to an in-flight fetch.
    pub fn token(&self) -> ScopeToken {
        ScopeToken {
            alive: Arc::clone(&self.alive),
        }
    }

    /// Marks the view as gone; outstanding tokens stop delivering.
    pub fn retire(&self) {
        self.alive.store(false, Ordering::SeqCst);
    }
}

impl Drop for ViewScope {
    fn drop(&mut self) {
        self.retire();
    }
}

#[derive(Debug, Clone)]
pub struct ScopeToken {
    alive: Arc<AtomicBool>,
}

impl ScopeToken {
    pub fn is_live(&self) -> bool {
        self.alive.load(Ordering::SeqCst)
    }

    /// Passes `value` through while the scope is live; otherwise drops it.
    pub fn deliver<T>(&self, value: T) -> Option<T> {
        if self.is_live() {
            Some(value)
        } else {
            debug!("discarding result for retired view scope");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::ViewScope;

    #[test]
    fn should_deliver_while_scope_is_live() {
        let scope = ViewScope::new();
        let token = scope.token();
        assert_eq!(token.deliver(42), Some(42));
    }

    #[test]
    fn should_discard_after_retire() {
        let scope = ViewScope::new();
        let token = scope.token();
        scope.retire();
        assert_eq!(token.deliver(42), None);
    }

    #[test]
    fn should_discard_after_scope_drop() {
        let token = {
            let scope = ViewScope::new();
            scope.token()
        };
        assert!(!token.is_live());
    }
}
