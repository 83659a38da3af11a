//! The profile edit form.
//!
//! Owns the draft and the two editable sections. Every section edit is
//! forwarded to the draft through `FormOwner::on_change`, so the draft is
//! always what a save would write.

use std::sync::Arc;

use profile_core::{AvailabilityStatus, Notifier, SkillCategory, UserProfile, WorkStyle};
use profile_editor::{
    AvailabilitySection, EditorConfig, FormOwner, ProfileChanges, ProfileDraft, ProfileUpdate,
    SkillsSection, SoftSkillOption,
};

pub struct ProfileEditForm {
    draft: ProfileDraft,
    skills: SkillsSection,
    availability: AvailabilitySection,
    notifier: Arc<dyn Notifier>,
}

impl ProfileEditForm {
    pub fn new(user: UserProfile, config: &EditorConfig, notifier: Arc<dyn Notifier>) -> Self {
        Self {
            skills: SkillsSection::new(user.skills.clone(), config.skill_limits),
            availability: AvailabilitySection::new(
                user.availability.clone(),
                config.position_limit,
            ),
            draft: ProfileDraft::new(user),
            notifier,
        }
    }

    pub fn draft(&self) -> &ProfileDraft {
        &self.draft
    }

    pub fn skills(&self) -> &SkillsSection {
        &self.skills
    }

    pub fn availability(&self) -> &AvailabilitySection {
        &self.availability
    }

    pub fn changes(&self) -> ProfileChanges {
        self.draft.changes()
    }

    // Skills

    pub fn open_skill_dialog(&mut self, category: SkillCategory) {
        self.skills.open_dialog(category);
    }

    pub fn close_skill_dialog(&mut self) {
        self.skills.close_dialog();
    }

    pub fn set_skill_search(&mut self, term: impl Into<String>) {
        self.skills.set_search_term(term);
    }

    pub fn soft_skill_options(&self) -> Vec<SoftSkillOption> {
        self.skills.soft_skill_options()
    }

    pub fn set_new_hard_skill(&mut self, text: impl Into<String>) {
        self.skills.set_new_hard_skill(text);
    }

    /// Returns whether the draft changed.
    pub fn toggle_skill(&mut self, name: &str, category: SkillCategory) -> bool {
        let update = self.skills.toggle(name, category, self.notifier.as_ref());
        self.forward(update)
    }

    pub fn submit_hard_skill(&mut self) -> bool {
        let update = self.skills.submit_hard_skill(self.notifier.as_ref());
        self.forward(update)
    }

    // Availability

    pub fn set_available(&mut self, is_available: bool) {
        let update = self.availability.set_available(is_available);
        self.forward(Some(update));
    }

    pub fn set_status(&mut self, status: AvailabilityStatus) {
        let update = self.availability.set_status(status);
        self.forward(Some(update));
    }

    pub fn toggle_work_style(&mut self, style: WorkStyle) {
        let update = self.availability.toggle_work_style(style);
        self.forward(Some(update));
    }

    pub fn set_new_position(&mut self, text: impl Into<String>) {
        self.availability.set_new_position(text);
    }

    pub fn add_position(&mut self) -> bool {
        let update = self.availability.add_position();
        self.forward(update)
    }

    pub fn remove_position(&mut self, position: &str) -> bool {
        let update = self.availability.remove_position(position);
        self.forward(update)
    }

    fn forward(&mut self, update: Option<ProfileUpdate>) -> bool {
        match update {
            Some(update) => {
                self.draft.on_change(update);
                true
            }
            None => false,
        }
    }
}
