//! Ordered, capped list of positions a user is interested in.

/// Positions in entry order, at most `limit` of them, no duplicates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PositionList {
    entries: Vec<String>,
    limit: usize,
}

impl PositionList {
    pub fn new(limit: usize) -> Self {
        Self {
            entries: Vec::new(),
            limit,
        }
    }

    /// Wrap positions loaded from a profile. They are taken as they are.
    pub fn from_vec(entries: Vec<String>, limit: usize) -> Self {
        Self { entries, limit }
    }

    pub fn as_slice(&self) -> &[String] {
        &self.entries
    }

    pub fn to_vec(&self) -> Vec<String> {
        self.entries.clone()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.entries.len() >= self.limit
    }

    /// Whether the add input should be offered at all
    pub fn can_add(&self) -> bool {
        !self.is_full()
    }

    /// "held/cap", e.g. "2/3"
    pub fn capacity_label(&self) -> String {
        format!("{}/{}", self.entries.len(), self.limit)
    }

    /// Append a position. Returns whether the list changed.
    ///
    /// Input is trimmed; empty input, a full list, or a position already
    /// present are all no-ops.
    pub fn add(&mut self, position: &str) -> bool {
        let position = position.trim();
        if position.is_empty() || self.is_full() {
            return false;
        }
        if self.entries.iter().any(|p| p == position) {
            return false;
        }
        self.entries.push(position.to_string());
        true
    }

    /// Remove the entry equal to `position`. Returns whether one was found.
    pub fn remove(&mut self, position: &str) -> bool {
        match self.entries.iter().position(|p| p == position) {
            Some(index) => {
                self.entries.remove(index);
                true
            }
            None => false,
        }
    }
}
