//! Error types for the search crate.

use profile_core::StoreError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SearchError {
    /// Debouncing needs a tokio runtime to schedule its timer on
    #[error("No tokio runtime available for the debounce timer: {0}")]
    NoRuntime(#[from] tokio::runtime::TryCurrentError),

    /// Loading the candidate collection failed
    #[error("Failed to load search candidates: {0}")]
    Store(#[from] StoreError),

    /// A user was selected that is not among the displayed results
    #[error("User {id} is not in the current results")]
    NotInResults { id: String },
}

pub type Result<T> = std::result::Result<T, SearchError>;
