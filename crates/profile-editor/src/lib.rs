//! Bounded selection editors for the profile edit form.
//!
//! This crate provides:
//! - `SkillSet` / `SkillsSection`: skills unique by (name, category), capped
//!   per category, with a searchable soft-skill vocabulary
//! - `PositionList`: an ordered, capped list of positions of interest
//! - `AvailabilitySection`: the job-search switch, status, work styles and
//!   positions
//! - `ProfileUpdate` / `FormOwner` / `ProfileDraft`: how edits reach the
//!   form that owns the profile
//!
//! Both capped collections behave the same way: below the cap they accept
//! additions, at the cap additions are refused (skills warn, positions hide
//! the input), and removals always work.

pub mod availability;
pub mod config;
pub mod error;
pub mod positions;
pub mod skills;
pub mod update;

pub use availability::AvailabilitySection;
pub use config::{EditorConfig, MAX_HARD_SKILLS, MAX_POSITIONS, MAX_SOFT_SKILLS, SkillLimits};
pub use error::{Result, SkillsError};
pub use positions::PositionList;
pub use skills::{SOFT_SKILLS, SkillSet, SkillsSection, SoftSkillOption, Toggled};
pub use update::{AvailabilityPatch, FormOwner, ProfileChanges, ProfileDraft, ProfileUpdate};
