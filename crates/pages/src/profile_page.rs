//! # Profile Page
//!
//! Coordinates everything shown on a user's profile:
//! 1. Load the user from the repository
//! 2. Decide ownership against the signed-in user
//! 3. Collect approved (and, for the owner, pending) recommendations
//! 4. Switch into the edit form and back, saving or discarding changes

use std::sync::Arc;
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::{Context, Result};
use tracing::{error, info, instrument};

use profile_core::{
    Notifier, ProfileRepository, Recommendation, RecommendationStatus, StoreError, Timestamp,
    UserId, UserProfile,
};
use profile_editor::{EditorConfig, ProfileChanges};

use crate::edit_form::ProfileEditForm;
use crate::state::{PageError, PageState};

/// Everything the read-only profile view needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileView {
    pub user: UserProfile,
    pub is_owner: bool,
    /// Approved recommendations, visible to everyone
    pub references: Vec<Recommendation>,
    /// Pending recommendations, only filled for the owner
    pub pending_references: Vec<Recommendation>,
}

pub struct ProfilePage {
    repository: Arc<dyn ProfileRepository>,
    notifier: Arc<dyn Notifier>,
    current_user: Option<UserId>,
    config: EditorConfig,
    state: PageState<ProfileView>,
    editor: Option<ProfileEditForm>,
}

impl ProfilePage {
    /// Create a page for the signed-in `current_user` (None when signed out).
    pub fn new(
        repository: Arc<dyn ProfileRepository>,
        notifier: Arc<dyn Notifier>,
        current_user: Option<UserId>,
        config: EditorConfig,
    ) -> Self {
        Self {
            repository,
            notifier,
            current_user,
            config,
            state: PageState::Loading,
            editor: None,
        }
    }

    pub fn state(&self) -> &PageState<ProfileView> {
        &self.state
    }

    pub fn is_owner(&self) -> bool {
        self.state.ready().is_some_and(|view| view.is_owner)
    }

    pub fn is_editing(&self) -> bool {
        self.editor.is_some()
    }

    pub fn editor(&self) -> Option<&ProfileEditForm> {
        self.editor.as_ref()
    }

    pub fn editor_mut(&mut self) -> Option<&mut ProfileEditForm> {
        self.editor.as_mut()
    }

    /// Load the profile identified by `user_id`.
    ///
    /// Failures end up in [`PageState::Failed`] with a user-facing message.
    #[instrument(skip(self))]
    pub fn load(&mut self, user_id: Option<&str>) -> &PageState<ProfileView> {
        self.state = PageState::Loading;
        self.editor = None;

        self.state = match self.fetch(user_id) {
            Ok(view) => {
                info!(
                    user_id = %view.user.id,
                    is_owner = view.is_owner,
                    references = view.references.len(),
                    "profile loaded"
                );
                PageState::Ready(view)
            }
            Err(err) => {
                error!("Error loading user: {err}");
                PageState::Failed(err.to_string())
            }
        };
        &self.state
    }

    fn fetch(&self, user_id: Option<&str>) -> std::result::Result<ProfileView, StoreError> {
        let user_id = user_id
            .filter(|id| !id.is_empty())
            .ok_or(StoreError::MissingId { entity: "User" })?;
        let user = self.repository.get_user(user_id)?;
        let is_owner = self.current_user.as_deref() == Some(user.id.as_str());

        let references = self
            .repository
            .user_recommendations(&user.id, RecommendationStatus::Approved)?;
        let pending_references = if is_owner {
            self.repository
                .user_recommendations(&user.id, RecommendationStatus::Pending)?
        } else {
            Vec::new()
        };

        Ok(ProfileView {
            user,
            is_owner,
            references,
            pending_references,
        })
    }

    /// Open the edit form. Only the owner of a loaded profile may edit.
    pub fn start_editing(&mut self) -> std::result::Result<&mut ProfileEditForm, PageError> {
        let view = self.state.ready().ok_or(PageError::NotLoaded)?;
        if !view.is_owner {
            return Err(PageError::NotOwner);
        }
        let form = ProfileEditForm::new(view.user.clone(), &self.config, self.notifier.clone());
        Ok(self.editor.insert(form))
    }

    /// Save the edit form's changes.
    pub fn save(&mut self) -> Result<()> {
        let changes = self.editor.as_ref().ok_or(PageError::NotEditing)?.changes();
        self.save_changes(changes)
    }

    /// Merge `changes` into the profile, stamp it and write it back.
    ///
    /// On failure the form stays open so nothing typed is lost.
    pub fn save_changes(&mut self, changes: ProfileChanges) -> Result<()> {
        let view = self.state.ready().ok_or(PageError::NotLoaded)?;
        if !view.is_owner {
            return Err(PageError::NotOwner.into());
        }

        let mut updated = view.user.clone();
        changes.apply_to(&mut updated);
        updated.updated_at = Some(now());

        if let Err(err) = self
            .repository
            .update_user(updated.clone())
            .context("Failed to update profile")
        {
            error!("Error updating profile: {err:#}");
            self.notifier.error("Failed to update profile");
            return Err(err);
        }

        if let Some(view) = self.state.ready_mut() {
            view.user = updated;
        }
        self.editor = None;
        self.notifier.success("Profile updated successfully!");
        Ok(())
    }

    /// Leave the edit form without saving.
    pub fn cancel(&mut self) {
        if self.editor.take().is_some() {
            self.notifier.success("Changes discarded");
        }
    }
}

fn now() -> Timestamp {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_secs() as Timestamp)
        .unwrap_or_default()
}
