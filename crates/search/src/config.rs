//! Search configuration.

use std::time::Duration;

/// Idle time before a typed query is applied, in milliseconds
pub const DEFAULT_DEBOUNCE_MS: u64 = 300;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchConfig {
    /// How long the query must stay unchanged before filtering runs
    pub debounce: Duration,
}

impl SearchConfig {
    pub fn new() -> Self {
        Self {
            debounce: Duration::from_millis(DEFAULT_DEBOUNCE_MS),
        }
    }

    /// Configure the debounce interval (default: 300ms)
    pub fn with_debounce(mut self, debounce: Duration) -> Self {
        self.debounce = debounce;
        self
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self::new()
    }
}
