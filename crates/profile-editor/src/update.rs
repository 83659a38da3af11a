//! Typed profile updates and the draft that receives them.
//!
//! Sections never write to the profile directly. Each successful edit is
//! described as a [`ProfileUpdate`] and handed to a [`FormOwner`], which is
//! the only place the draft changes.

use profile_core::{Availability, AvailabilityStatus, Skill, UserProfile, WorkStyle};
use serde::{Deserialize, Serialize};

/// Partial change to a user's availability. `None` fields are untouched.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AvailabilityPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<AvailabilityStatus>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_available: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub positions_interested_in: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub work_styles: Option<Vec<WorkStyle>>,
}

impl AvailabilityPatch {
    pub fn is_empty(&self) -> bool {
        self.status.is_none()
            && self.is_available.is_none()
            && self.positions_interested_in.is_none()
            && self.work_styles.is_none()
    }

    /// Merge this patch over `availability`.
    pub fn apply_to(&self, availability: &mut Availability) {
        if let Some(status) = self.status {
            availability.status = status;
        }
        if let Some(is_available) = self.is_available {
            availability.is_available = is_available;
        }
        if let Some(positions) = &self.positions_interested_in {
            availability.positions_interested_in = positions.clone();
        }
        if let Some(styles) = &self.work_styles {
            availability.work_styles = styles.clone();
        }
    }
}

/// One edit reported by a form section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum ProfileUpdate {
    Availability { patch: AvailabilityPatch },
    Skills { value: Vec<Skill> },
}

/// Receives every update a section produces.
pub trait FormOwner {
    fn on_change(&mut self, update: ProfileUpdate);
}

/// The fields of a profile the edit form can change.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileChanges {
    pub skills: Vec<Skill>,
    pub availability: Availability,
}

impl ProfileChanges {
    pub fn apply_to(&self, user: &mut UserProfile) {
        user.skills = self.skills.clone();
        user.availability = self.availability.clone();
    }
}

/// Working copy of a profile while it is being edited.
#[derive(Debug, Clone)]
pub struct ProfileDraft {
    original: UserProfile,
    draft: UserProfile,
    updates: usize,
}

impl ProfileDraft {
    pub fn new(user: UserProfile) -> Self {
        Self {
            draft: user.clone(),
            original: user,
            updates: 0,
        }
    }

    pub fn user(&self) -> &UserProfile {
        &self.draft
    }

    /// Number of updates applied so far
    pub fn update_count(&self) -> usize {
        self.updates
    }

    /// True if the draft differs from the profile it started from
    pub fn is_dirty(&self) -> bool {
        self.draft != self.original
    }

    pub fn changes(&self) -> ProfileChanges {
        ProfileChanges {
            skills: self.draft.skills.clone(),
            availability: self.draft.availability.clone(),
        }
    }
}

impl FormOwner for ProfileDraft {
    /// Apply `update` to the draft. An empty patch is not counted.
    fn on_change(&mut self, update: ProfileUpdate) {
        match update {
            ProfileUpdate::Availability { patch } if patch.is_empty() => return,
            ProfileUpdate::Availability { patch } => patch.apply_to(&mut self.draft.availability),
            ProfileUpdate::Skills { value } => self.draft.skills = value,
        }
        self.updates += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_patch_only_touches_set_fields() {
        let mut availability = Availability {
            status: AvailabilityStatus::Open,
            is_available: true,
            positions_interested_in: vec!["Engineer".to_string()],
            work_styles: vec![WorkStyle::Remote],
        };
        let patch = AvailabilityPatch {
            status: Some(AvailabilityStatus::ActivelyLooking),
            ..Default::default()
        };
        patch.apply_to(&mut availability);

        assert_eq!(availability.status, AvailabilityStatus::ActivelyLooking);
        assert!(availability.is_available);
        assert_eq!(availability.positions_interested_in, vec!["Engineer"]);
        assert_eq!(availability.work_styles, vec![WorkStyle::Remote]);
    }

    #[test]
    fn test_update_is_tagged_by_kind() {
        let update = ProfileUpdate::Skills {
            value: vec![Skill::soft("Teamwork")],
        };
        let json = serde_json::to_value(&update).unwrap();
        assert_eq!(json["kind"], "skills");
        assert_eq!(json["value"][0]["name"], "Teamwork");

        let update = ProfileUpdate::Availability {
            patch: AvailabilityPatch {
                is_available: Some(true),
                ..Default::default()
            },
        };
        let json = serde_json::to_value(&update).unwrap();
        assert_eq!(json["kind"], "availability");
        assert_eq!(json["patch"]["isAvailable"], true);
        assert!(json["patch"].get("status").is_none());
    }

    #[test]
    fn test_draft_tracks_dirty_state() {
        let mut draft = ProfileDraft::new(UserProfile::new("u1", "Ada"));
        assert!(!draft.is_dirty());

        draft.on_change(ProfileUpdate::Skills {
            value: vec![Skill::hard("Rust")],
        });
        assert!(draft.is_dirty());
        assert_eq!(draft.update_count(), 1);
        assert_eq!(draft.changes().skills, vec![Skill::hard("Rust")]);

        draft.on_change(ProfileUpdate::Skills { value: vec![] });
        assert!(!draft.is_dirty());
    }

    #[test]
    fn test_empty_patch_is_not_counted() {
        let mut draft = ProfileDraft::new(UserProfile::new("u1", "Ada"));
        let patch = AvailabilityPatch::default();
        assert!(patch.is_empty());

        draft.on_change(ProfileUpdate::Availability { patch });
        assert_eq!(draft.update_count(), 0);
        assert!(!draft.is_dirty());
    }

    #[test]
    fn test_changes_apply_to_profile() {
        let mut user = UserProfile::new("u1", "Ada");
        let changes = ProfileChanges {
            skills: vec![Skill::soft("Empathy")],
            availability: Availability {
                is_available: true,
                ..Default::default()
            },
        };
        changes.apply_to(&mut user);
        assert_eq!(user.skills, vec![Skill::soft("Empathy")]);
        assert!(user.availability.is_available);
    }
}
