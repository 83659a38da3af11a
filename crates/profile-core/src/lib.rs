//! # Profile Core Crate
//!
//! Domain types and data access shared by the search, editor and page
//! crates.
//!
//! ## Main Components
//!
//! - **types**: Users, skills, availability, recommendations
//! - **repository**: `ProfileRepository` trait and `InMemoryRepository`
//! - **loader**: Seed the in-memory repository from JSON files
//! - **collaborators**: `Navigator` and `Notifier` seams
//! - **error**: Error types for loading and lookups
//!
//! ## Example Usage
//!
//! ```ignore
//! use profile_core::{InMemoryRepository, ProfileRepository};
//! use std::path::Path;
//!
//! let repo = InMemoryRepository::load_from_dir(Path::new("data/seed"))?;
//! let user = repo.get_user("u-ada")?;
//! println!("{} has {} skills", user.name, user.skills.len());
//! ```

pub mod collaborators;
pub mod error;
pub mod loader;
pub mod repository;
pub mod types;

pub use collaborators::{
    Navigator, Notice, NoticeLevel, Notifier, RecordingNavigator, RecordingNotifier, Route,
    TracingNotifier,
};
pub use error::{Result, StoreError};
pub use repository::{InMemoryRepository, ProfileRepository};
pub use types::{
    // Type aliases
    RecommendationId,
    Timestamp,
    UserId,
    // Core types
    Author,
    Availability,
    Document,
    PortfolioItem,
    Recommendation,
    Skill,
    UserProfile,
    // Enums
    AvailabilityStatus,
    RecommendationStatus,
    SkillCategory,
    WorkStyle,
};
