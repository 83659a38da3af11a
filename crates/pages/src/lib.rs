//! Page-level coordination for the profile application.
//!
//! This crate wires the repository, the editors and the user-facing
//! collaborators together into the pages a user actually visits.

pub mod edit_form;
pub mod profile_page;
pub mod recommendation_page;
pub mod state;

pub use edit_form::ProfileEditForm;
pub use profile_page::{ProfilePage, ProfileView};
pub use recommendation_page::{RecommendationPage, RecommendationView, initials};
pub use state::{PageError, PageState};
