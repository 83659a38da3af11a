//! Skill selection with per-category caps.
//!
//! ## Algorithm (toggle)
//! 1. If (name, category) is held, remove it
//! 2. Otherwise, if the category already holds its cap, reject
//! 3. Otherwise, append it
//!
//! Insertion order is the display order. Soft skills are picked from a
//! fixed vocabulary; hard skills are free text.

use profile_core::{Notifier, Skill, SkillCategory};
use search::QueryFilter;
use tracing::debug;

use crate::config::SkillLimits;
use crate::error::{Result, SkillsError};
use crate::update::ProfileUpdate;

/// Vocabulary offered when adding a soft skill
pub const SOFT_SKILLS: [&str; 20] = [
    "Communication",
    "Teamwork",
    "Adaptability",
    "Problem-solving",
    "Time management",
    "Leadership",
    "Creativity",
    "Work ethic",
    "Attention to detail",
    "Conflict resolution",
    "Emotional intelligence",
    "Decision-making",
    "Interpersonal skills",
    "Flexibility",
    "Critical thinking",
    "Collaboration",
    "Self-motivation",
    "Empathy",
    "Patience",
    "Listening skills",
];

/// Result of a successful toggle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Toggled {
    Added,
    Removed,
}

/// Held skills, unique by (name, category), capped per category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkillSet {
    skills: Vec<Skill>,
    limits: SkillLimits,
}

impl SkillSet {
    pub fn new(limits: SkillLimits) -> Self {
        Self {
            skills: Vec::new(),
            limits,
        }
    }

    /// Wrap skills loaded from a profile.
    ///
    /// A count over the cap is kept as it is; a repeated (name, category)
    /// keeps only its first occurrence.
    pub fn from_skills(skills: Vec<Skill>, limits: SkillLimits) -> Self {
        let mut unique: Vec<Skill> = Vec::with_capacity(skills.len());
        for skill in skills {
            if !unique.iter().any(|s| s.is(&skill.name, skill.category)) {
                unique.push(skill);
            }
        }
        Self {
            skills: unique,
            limits,
        }
    }

    pub fn skills(&self) -> &[Skill] {
        &self.skills
    }

    pub fn into_vec(self) -> Vec<Skill> {
        self.skills
    }

    pub fn limits(&self) -> SkillLimits {
        self.limits
    }

    pub fn count(&self, category: SkillCategory) -> usize {
        self.skills.iter().filter(|s| s.category == category).count()
    }

    pub fn contains(&self, name: &str, category: SkillCategory) -> bool {
        self.skills.iter().any(|s| s.is(name, category))
    }

    pub fn is_full(&self, category: SkillCategory) -> bool {
        self.count(category) >= self.limits.for_category(category)
    }

    /// "held/cap" for the add buttons, e.g. "1/3"
    pub fn capacity_label(&self, category: SkillCategory) -> String {
        format!("{}/{}", self.count(category), self.limits.for_category(category))
    }

    pub fn toggle(&mut self, name: &str, category: SkillCategory) -> Result<Toggled> {
        if self.contains(name, category) {
            self.skills.retain(|s| !s.is(name, category));
            return Ok(Toggled::Removed);
        }

        if self.is_full(category) {
            return Err(SkillsError::CategoryFull {
                category,
                max: self.limits.for_category(category),
            });
        }

        self.skills.push(Skill::new(name, category));
        Ok(Toggled::Added)
    }
}

/// One row of the soft-skill picker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SoftSkillOption {
    pub name: &'static str,
    /// Drives the checkmark; derived from the held set
    pub selected: bool,
}

/// The skills part of the profile edit form.
///
/// Holds the working skill set plus the add-dialog state. Every successful
/// change is returned as a [`ProfileUpdate::Skills`] carrying the full list.
#[derive(Debug, Clone)]
pub struct SkillsSection {
    set: SkillSet,
    dialog: Option<SkillCategory>,
    search_term: String,
    new_hard_skill: String,
}

impl SkillsSection {
    pub fn new(skills: Vec<Skill>, limits: SkillLimits) -> Self {
        Self {
            set: SkillSet::from_skills(skills, limits),
            dialog: None,
            search_term: String::new(),
            new_hard_skill: String::new(),
        }
    }

    pub fn set(&self) -> &SkillSet {
        &self.set
    }

    /// Which add dialog is open, if any
    pub fn dialog(&self) -> Option<SkillCategory> {
        self.dialog
    }

    pub fn open_dialog(&mut self, category: SkillCategory) {
        self.dialog = Some(category);
    }

    pub fn close_dialog(&mut self) {
        self.dialog = None;
    }

    pub fn set_search_term(&mut self, term: impl Into<String>) {
        self.search_term = term.into();
    }

    pub fn set_new_hard_skill(&mut self, text: impl Into<String>) {
        self.new_hard_skill = text.into();
    }

    pub fn new_hard_skill(&self) -> &str {
        &self.new_hard_skill
    }

    /// Soft skills matching the current search term, in vocabulary order.
    pub fn soft_skill_options(&self) -> Vec<SoftSkillOption> {
        let filter = QueryFilter::new(&self.search_term);
        filter
            .apply(&SOFT_SKILLS)
            .into_iter()
            .map(|&name| SoftSkillOption {
                name,
                selected: self.set.contains(name, SkillCategory::Soft),
            })
            .collect()
    }

    /// Toggle a skill; a rejection is reported through `notifier`.
    pub fn toggle(
        &mut self,
        name: &str,
        category: SkillCategory,
        notifier: &dyn Notifier,
    ) -> Option<ProfileUpdate> {
        match self.set.toggle(name, category) {
            Ok(outcome) => {
                debug!(skill = name, %category, ?outcome, "skill toggled");
                Some(ProfileUpdate::Skills {
                    value: self.set.skills().to_vec(),
                })
            }
            Err(err) => {
                notifier.warning(&err.to_string());
                None
            }
        }
    }

    /// Submit the hard-skill input.
    ///
    /// Whitespace-only input is ignored and leaves the dialog open. Anything
    /// else goes through [`toggle`](Self::toggle), then the input is cleared
    /// and the dialog closed.
    pub fn submit_hard_skill(&mut self, notifier: &dyn Notifier) -> Option<ProfileUpdate> {
        let name = self.new_hard_skill.trim().to_string();
        if name.is_empty() {
            return None;
        }
        let update = self.toggle(&name, SkillCategory::Hard, notifier);
        self.new_hard_skill.clear();
        self.dialog = None;
        update
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use profile_core::{NoticeLevel, RecordingNotifier};

    fn empty_set() -> SkillSet {
        SkillSet::new(SkillLimits::default())
    }

    #[test]
    fn test_toggle_teamwork_twice() {
        let mut set = empty_set();

        assert_eq!(set.toggle("Teamwork", SkillCategory::Soft), Ok(Toggled::Added));
        assert_eq!(set.skills(), &[Skill::soft("Teamwork")]);

        assert_eq!(set.toggle("Teamwork", SkillCategory::Soft), Ok(Toggled::Removed));
        assert!(set.skills().is_empty());
    }

    #[test]
    fn test_toggle_is_self_inverse_for_absent_skill() {
        let mut set = SkillSet::from_skills(
            vec![Skill::soft("Empathy"), Skill::hard("Rust")],
            SkillLimits::default(),
        );
        let before = set.clone();

        set.toggle("SQL", SkillCategory::Hard).unwrap();
        set.toggle("SQL", SkillCategory::Hard).unwrap();
        assert_eq!(set, before);
    }

    #[test]
    fn test_toggle_twice_on_held_skill_keeps_membership() {
        let mut set = SkillSet::from_skills(
            vec![Skill::soft("Empathy"), Skill::hard("Rust"), Skill::soft("Patience")],
            SkillLimits::default(),
        );

        set.toggle("Empathy", SkillCategory::Soft).unwrap();
        set.toggle("Empathy", SkillCategory::Soft).unwrap();

        // Re-added skills go to the end
        assert_eq!(
            set.skills(),
            &[Skill::hard("Rust"), Skill::soft("Patience"), Skill::soft("Empathy")]
        );
    }

    #[test]
    fn test_from_skills_drops_repeats() {
        let mut set = SkillSet::from_skills(
            vec![
                Skill::hard("Rust"),
                Skill::soft("Rust"),
                Skill::hard("Rust"),
            ],
            SkillLimits::default(),
        );
        assert_eq!(set.skills(), &[Skill::hard("Rust"), Skill::soft("Rust")]);

        // A single toggle removes the skill entirely
        set.toggle("Rust", SkillCategory::Hard).unwrap();
        assert!(!set.contains("Rust", SkillCategory::Hard));
    }

    #[test]
    fn test_same_name_in_both_categories() {
        let mut set = empty_set();
        set.toggle("Leadership", SkillCategory::Soft).unwrap();
        set.toggle("Leadership", SkillCategory::Hard).unwrap();
        assert_eq!(set.skills().len(), 2);

        set.toggle("Leadership", SkillCategory::Hard).unwrap();
        assert_eq!(set.skills(), &[Skill::soft("Leadership")]);
    }

    #[test]
    fn test_fourth_soft_skill_rejected() {
        let mut set = empty_set();
        for name in ["Teamwork", "Empathy", "Patience"] {
            set.toggle(name, SkillCategory::Soft).unwrap();
        }
        let before = set.clone();

        let err = set.toggle("Creativity", SkillCategory::Soft).unwrap_err();
        assert_eq!(
            err,
            SkillsError::CategoryFull {
                category: SkillCategory::Soft,
                max: 3
            }
        );
        assert_eq!(err.to_string(), "You can only add up to 3 soft skills");
        assert_eq!(set, before);
    }

    #[test]
    fn test_sixth_hard_skill_rejected_but_soft_still_allowed() {
        let mut set = empty_set();
        for name in ["Rust", "Go", "SQL", "Kafka", "Linux"] {
            set.toggle(name, SkillCategory::Hard).unwrap();
        }
        assert!(set.is_full(SkillCategory::Hard));

        let err = set.toggle("Python", SkillCategory::Hard).unwrap_err();
        assert_eq!(err.to_string(), "You can only add up to 5 hard skills");
        assert_eq!(set.count(SkillCategory::Hard), 5);

        assert_eq!(set.toggle("Empathy", SkillCategory::Soft), Ok(Toggled::Added));
    }

    #[test]
    fn test_removal_allowed_at_cap() {
        let mut set = empty_set();
        for name in ["Teamwork", "Empathy", "Patience"] {
            set.toggle(name, SkillCategory::Soft).unwrap();
        }
        assert_eq!(set.toggle("Empathy", SkillCategory::Soft), Ok(Toggled::Removed));
        assert_eq!(set.capacity_label(SkillCategory::Soft), "2/3");
    }

    #[test]
    fn test_section_warns_on_cap() {
        let notifier = RecordingNotifier::new();
        let mut section = SkillsSection::new(
            vec![Skill::soft("Teamwork"), Skill::soft("Empathy"), Skill::soft("Patience")],
            SkillLimits::default(),
        );

        assert!(section.toggle("Creativity", SkillCategory::Soft, &notifier).is_none());
        let notice = notifier.last().unwrap();
        assert_eq!(notice.level, NoticeLevel::Warning);
        assert_eq!(notice.message, "You can only add up to 3 soft skills");
        assert_eq!(section.set().count(SkillCategory::Soft), 3);
    }

    #[test]
    fn test_section_reports_full_list() {
        let notifier = RecordingNotifier::new();
        let mut section = SkillsSection::new(vec![Skill::hard("Rust")], SkillLimits::default());

        let update = section.toggle("Teamwork", SkillCategory::Soft, &notifier);
        assert_eq!(
            update,
            Some(ProfileUpdate::Skills {
                value: vec![Skill::hard("Rust"), Skill::soft("Teamwork")]
            })
        );
        assert!(notifier.notices().is_empty());
    }

    #[test]
    fn test_soft_skill_search_and_checkmarks() {
        let mut section =
            SkillsSection::new(vec![Skill::soft("Patience")], SkillLimits::default());
        assert_eq!(section.soft_skill_options().len(), SOFT_SKILLS.len());

        section.set_search_term("PAT");
        let options = section.soft_skill_options();
        assert_eq!(
            options,
            vec![
                SoftSkillOption {
                    name: "Empathy",
                    selected: false,
                },
                SoftSkillOption {
                    name: "Patience",
                    selected: true,
                },
            ]
        );
    }

    #[test]
    fn test_hard_skill_input_is_trimmed() {
        let notifier = RecordingNotifier::new();
        let mut section = SkillsSection::new(vec![], SkillLimits::default());
        section.open_dialog(SkillCategory::Hard);

        section.set_new_hard_skill("   ");
        assert!(section.submit_hard_skill(&notifier).is_none());
        assert_eq!(section.dialog(), Some(SkillCategory::Hard));

        section.set_new_hard_skill("  Kubernetes ");
        let update = section.submit_hard_skill(&notifier);
        assert_eq!(
            update,
            Some(ProfileUpdate::Skills {
                value: vec![Skill::hard("Kubernetes")]
            })
        );
        assert_eq!(section.new_hard_skill(), "");
        assert_eq!(section.dialog(), None);
    }
}
