//! The job-search part of the profile edit form.
//!
//! Every successful edit returns a [`ProfileUpdate::Availability`] whose
//! patch carries only the field that changed.

use profile_core::{Availability, AvailabilityStatus, WorkStyle};
use tracing::debug;

use crate::positions::PositionList;
use crate::update::{AvailabilityPatch, ProfileUpdate};

#[derive(Debug, Clone)]
pub struct AvailabilitySection {
    status: AvailabilityStatus,
    is_available: bool,
    work_styles: Vec<WorkStyle>,
    positions: PositionList,
    new_position: String,
}

impl AvailabilitySection {
    pub fn new(availability: Availability, position_limit: usize) -> Self {
        Self {
            status: availability.status,
            is_available: availability.is_available,
            work_styles: availability.work_styles,
            positions: PositionList::from_vec(availability.positions_interested_in, position_limit),
            new_position: String::new(),
        }
    }

    /// Current state as a plain `Availability`
    pub fn availability(&self) -> Availability {
        Availability {
            status: self.status,
            is_available: self.is_available,
            positions_interested_in: self.positions.to_vec(),
            work_styles: self.work_styles.clone(),
        }
    }

    pub fn is_available(&self) -> bool {
        self.is_available
    }

    /// Status, work styles and positions are only offered while looking
    pub fn shows_details(&self) -> bool {
        self.is_available
    }

    pub fn status(&self) -> AvailabilityStatus {
        self.status
    }

    pub fn positions(&self) -> &PositionList {
        &self.positions
    }

    pub fn has_work_style(&self, style: WorkStyle) -> bool {
        self.work_styles.contains(&style)
    }

    pub fn set_available(&mut self, is_available: bool) -> ProfileUpdate {
        self.is_available = is_available;
        patch(AvailabilityPatch {
            is_available: Some(is_available),
            ..Default::default()
        })
    }

    pub fn set_status(&mut self, status: AvailabilityStatus) -> ProfileUpdate {
        self.status = status;
        patch(AvailabilityPatch {
            status: Some(status),
            ..Default::default()
        })
    }

    /// Remove `style` if selected, append it otherwise.
    pub fn toggle_work_style(&mut self, style: WorkStyle) -> ProfileUpdate {
        if self.has_work_style(style) {
            self.work_styles.retain(|s| *s != style);
        } else {
            self.work_styles.push(style);
        }
        patch(AvailabilityPatch {
            work_styles: Some(self.work_styles.clone()),
            ..Default::default()
        })
    }

    /// Text currently typed into the position input
    pub fn new_position(&self) -> &str {
        &self.new_position
    }

    pub fn set_new_position(&mut self, text: impl Into<String>) {
        self.new_position = text.into();
    }

    /// Add the typed position. The input is cleared only on success.
    pub fn add_position(&mut self) -> Option<ProfileUpdate> {
        if !self.positions.add(&self.new_position) {
            debug!(position = %self.new_position, "position not added");
            return None;
        }
        self.new_position.clear();
        Some(self.positions_update())
    }

    pub fn remove_position(&mut self, position: &str) -> Option<ProfileUpdate> {
        self.positions
            .remove(position)
            .then(|| self.positions_update())
    }

    fn positions_update(&self) -> ProfileUpdate {
        patch(AvailabilityPatch {
            positions_interested_in: Some(self.positions.to_vec()),
            ..Default::default()
        })
    }
}

fn patch(patch: AvailabilityPatch) -> ProfileUpdate {
    ProfileUpdate::Availability { patch }
}
