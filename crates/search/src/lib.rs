//! Debounced, case-insensitive search over in-memory records.
//!
//! This crate provides:
//! - `Searchable` trait describing which text fields a record exposes
//! - `QueryFilter` for the substring match itself
//! - `Debouncer`, a cancellable timer that delivers only settled input
//! - `UserSearch`, the user directory search that ties them together
//!
//! ## Example Usage
//! ```ignore
//! use search::{SearchConfig, UserSearch};
//!
//! let mut search = UserSearch::from_repository(&repo, &SearchConfig::default(), navigator)?;
//! search.set_query("eng");
//! let results = search.next_evaluation().await;
//! ```

pub mod config;
pub mod debounce;
pub mod error;
pub mod query_filter;
pub mod traits;
pub mod user_search;

// Re-export main types
pub use config::{DEFAULT_DEBOUNCE_MS, SearchConfig};
pub use debounce::{DebouncedReceiver, Debouncer};
pub use error::{Result, SearchError};
pub use query_filter::{QueryFilter, filter_candidates, fold_case};
pub use traits::Searchable;
pub use user_search::UserSearch;
