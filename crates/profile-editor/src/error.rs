//! Error types for the profile-editor crate.

use profile_core::SkillCategory;
use thiserror::Error;

/// Rejections from the skill editor.
///
/// These are policy outcomes rather than faults: the caller shows the
/// message as a warning and the held skills stay as they were.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SkillsError {
    #[error("You can only add up to {max} {category} skills")]
    CategoryFull { category: SkillCategory, max: usize },
}

pub type Result<T> = std::result::Result<T, SkillsError>;
