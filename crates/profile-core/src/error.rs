//! Error types for the profile-core crate.
//!
//! Everything that can go wrong while loading seed data or talking to a
//! repository ends up here. Capacity rejections in the editors are not
//! faults and live in their own crates.

use thiserror::Error;

/// Errors raised by repositories and the seed loader.
#[derive(Error, Debug)]
pub enum StoreError {
    /// A page was opened without the identifier it needs
    #[error("{entity} ID is required")]
    MissingId { entity: &'static str },

    /// No user with this id in the repository
    ///
    /// The message is shown to the user as-is, so the id is kept out of it.
    #[error("User not found")]
    UserNotFound { id: String },

    /// No recommendation with this id in the repository
    #[error("Recommendation not found")]
    RecommendationNotFound { id: String },

    /// Seed file could not be found
    #[error("Failed to open file: {path}")]
    FileNotFound { path: String },

    /// I/O error occurred while reading a seed file
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// Seed file was not valid JSON for the expected shape
    #[error("Parse error in {file}: {source}")]
    ParseError {
        file: String,
        #[source]
        source: serde_json::Error,
    },

    /// A field had a value outside its domain
    #[error("Invalid value for {field}: {value}")]
    InvalidValue { field: String, value: String },

    /// Referenced entity doesn't exist (e.g., recommendation for an unknown user)
    #[error("Missing reference: {entity} with id {id}")]
    MissingReference { entity: String, id: String },

    /// Two records share the same id
    #[error("Duplicate {entity} id: {id}")]
    DuplicateId { entity: String, id: String },

    /// A user holds the same skill twice
    #[error("User {user_id} lists the {category} skill {name} more than once")]
    DuplicateSkill {
        user_id: String,
        name: String,
        category: String,
    },

    /// Another thread panicked while holding the repository lock
    #[error("Repository lock poisoned")]
    LockPoisoned,
}

/// Convenience type alias for Results in this crate
pub type Result<T> = std::result::Result<T, StoreError>;
