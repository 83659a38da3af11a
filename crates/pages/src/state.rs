//! Load state shared by the pages.

use thiserror::Error;

/// Where a page is in its load lifecycle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageState<T> {
    Loading,
    /// Load failed; the message is shown in place of the page
    Failed(String),
    Ready(T),
}

impl<T> PageState<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, PageState::Loading)
    }

    pub fn ready(&self) -> Option<&T> {
        match self {
            PageState::Ready(view) => Some(view),
            _ => None,
        }
    }

    pub fn ready_mut(&mut self) -> Option<&mut T> {
        match self {
            PageState::Ready(view) => Some(view),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            PageState::Failed(message) => Some(message),
            _ => None,
        }
    }
}

/// Page actions attempted in the wrong state.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PageError {
    #[error("Page has not finished loading")]
    NotLoaded,

    #[error("Only the profile owner can edit this profile")]
    NotOwner,

    #[error("Profile is not being edited")]
    NotEditing,
}
