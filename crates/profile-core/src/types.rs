//! Core domain types for profiles and recommendations.
//!
//! The serialized form uses the camelCase field names of the seed files
//! (`currentCompany`, `isAvailable`, `positionsInterestedIn`, ...), so the
//! same JSON can be loaded, edited and dumped back without a mapping layer.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::StoreError;

// =============================================================================
// Type Aliases
// =============================================================================

/// Unique identifier for a user (opaque string, e.g. "u-ada")
pub type UserId = String;

/// Unique identifier for a recommendation
pub type RecommendationId = String;

/// Unix timestamp in seconds
pub type Timestamp = i64;

// =============================================================================
// Skills
// =============================================================================

/// The two partitions a skill can belong to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SkillCategory {
    Soft,
    Hard,
}

impl SkillCategory {
    pub const ALL: [SkillCategory; 2] = [SkillCategory::Soft, SkillCategory::Hard];

    pub fn as_str(&self) -> &'static str {
        match self {
            SkillCategory::Soft => "soft",
            SkillCategory::Hard => "hard",
        }
    }

    /// Capitalized form used in headings ("Add Soft Skill")
    pub fn label(&self) -> &'static str {
        match self {
            SkillCategory::Soft => "Soft",
            SkillCategory::Hard => "Hard",
        }
    }
}

impl fmt::Display for SkillCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SkillCategory {
    type Err = StoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "soft" => Ok(SkillCategory::Soft),
            "hard" => Ok(SkillCategory::Hard),
            _ => Err(StoreError::InvalidValue {
                field: "skill type".to_string(),
                value: s.to_string(),
            }),
        }
    }
}

/// A named skill tagged with its category.
///
/// Two skills are the same skill only if both name and category match, so
/// "Leadership" may be held once as soft and once as hard.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Skill {
    pub name: String,
    #[serde(rename = "type")]
    pub category: SkillCategory,
}

impl Skill {
    pub fn new(name: impl Into<String>, category: SkillCategory) -> Self {
        Self {
            name: name.into(),
            category,
        }
    }

    pub fn soft(name: impl Into<String>) -> Self {
        Self::new(name, SkillCategory::Soft)
    }

    pub fn hard(name: impl Into<String>) -> Self {
        Self::new(name, SkillCategory::Hard)
    }

    /// Exact (name, category) identity check
    pub fn is(&self, name: &str, category: SkillCategory) -> bool {
        self.category == category && self.name == name
    }
}

// =============================================================================
// Availability
// =============================================================================

/// Job-search status shown when a user is looking for work.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AvailabilityStatus {
    ActivelyLooking,
    #[default]
    Open,
    CasuallyLooking,
}

impl AvailabilityStatus {
    pub const ALL: [AvailabilityStatus; 3] = [
        AvailabilityStatus::ActivelyLooking,
        AvailabilityStatus::Open,
        AvailabilityStatus::CasuallyLooking,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            AvailabilityStatus::ActivelyLooking => "actively-looking",
            AvailabilityStatus::Open => "open",
            AvailabilityStatus::CasuallyLooking => "casually-looking",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            AvailabilityStatus::ActivelyLooking => "Actively Looking",
            AvailabilityStatus::Open => "Open to Opportunities",
            AvailabilityStatus::CasuallyLooking => "Casually Looking",
        }
    }
}

impl FromStr for AvailabilityStatus {
    type Err = StoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        AvailabilityStatus::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| StoreError::InvalidValue {
                field: "status".to_string(),
                value: s.to_string(),
            })
    }
}

/// Preferred way of working.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum WorkStyle {
    Remote,
    Hybrid,
    InPerson,
}

impl WorkStyle {
    pub const ALL: [WorkStyle; 3] = [WorkStyle::Remote, WorkStyle::Hybrid, WorkStyle::InPerson];

    pub fn as_str(&self) -> &'static str {
        match self {
            WorkStyle::Remote => "remote",
            WorkStyle::Hybrid => "hybrid",
            WorkStyle::InPerson => "inPerson",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            WorkStyle::Remote => "Remote",
            WorkStyle::Hybrid => "Hybrid",
            WorkStyle::InPerson => "In Person",
        }
    }
}

impl FromStr for WorkStyle {
    type Err = StoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        WorkStyle::ALL
            .into_iter()
            .find(|style| style.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| StoreError::InvalidValue {
                field: "work style".to_string(),
                value: s.to_string(),
            })
    }
}

/// Everything a user publishes about their job search.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Availability {
    #[serde(default)]
    pub status: AvailabilityStatus,
    #[serde(default)]
    pub is_available: bool,
    #[serde(default)]
    pub positions_interested_in: Vec<String>,
    #[serde(default)]
    pub work_styles: Vec<WorkStyle>,
}

// =============================================================================
// Users
// =============================================================================

/// A user profile, which is also the record the user search runs over.
///
/// Only `id` and `name` are mandatory; every other descriptive field may be
/// absent and is then skipped by search and display alike.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub id: UserId,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current_company: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub linkedin: Option<String>,
    #[serde(default)]
    pub skills: Vec<Skill>,
    #[serde(default)]
    pub availability: Availability,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<Timestamp>,
}

impl UserProfile {
    pub fn new(id: impl Into<UserId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            title: None,
            current_company: None,
            location: None,
            avatar: None,
            linkedin: None,
            skills: Vec::new(),
            availability: Availability::default(),
            updated_at: None,
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_company(mut self, company: impl Into<String>) -> Self {
        self.current_company = Some(company.into());
        self
    }

    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }

    pub fn with_skills(mut self, skills: Vec<Skill>) -> Self {
        self.skills = skills;
        self
    }

    /// Number of held skills in one category
    pub fn skill_count(&self, category: SkillCategory) -> usize {
        self.skills.iter().filter(|s| s.category == category).count()
    }
}

// =============================================================================
// Recommendations
// =============================================================================

/// Moderation state of a recommendation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecommendationStatus {
    Pending,
    Approved,
}

/// Who wrote a recommendation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Author {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub linkedin: Option<String>,
}

/// A supporting document attached to a recommendation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    pub name: String,
    pub url: String,
}

/// A portfolio link attached to a recommendation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PortfolioItem {
    /// Free-form kind, e.g. "GitHub" or "Case study"
    #[serde(rename = "type")]
    pub kind: String,
    pub name: String,
    pub url: String,
}

/// An endorsement written by one person for a user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recommendation {
    pub id: RecommendationId,
    pub recipient_id: UserId,
    pub author: Author,
    pub relationship: String,
    pub company: String,
    pub duration: String,
    /// Star rating from 1 to 5
    pub rating: u8,
    pub endorsement: String,
    #[serde(default)]
    pub skills: Vec<Skill>,
    #[serde(default)]
    pub documents: Vec<Document>,
    #[serde(default)]
    pub portfolio_items: Vec<PortfolioItem>,
    pub status: RecommendationStatus,
}
