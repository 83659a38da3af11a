//! Capacity limits for the editors.

use profile_core::SkillCategory;

/// Maximum soft skills a profile may hold
pub const MAX_SOFT_SKILLS: usize = 3;

/// Maximum hard skills a profile may hold
pub const MAX_HARD_SKILLS: usize = 5;

/// Maximum positions of interest
pub const MAX_POSITIONS: usize = 3;

/// Per-category skill caps.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SkillLimits {
    pub soft: usize,
    pub hard: usize,
}

impl SkillLimits {
    pub fn new() -> Self {
        Self {
            soft: MAX_SOFT_SKILLS,
            hard: MAX_HARD_SKILLS,
        }
    }

    pub fn for_category(&self, category: SkillCategory) -> usize {
        match category {
            SkillCategory::Soft => self.soft,
            SkillCategory::Hard => self.hard,
        }
    }
}

impl Default for SkillLimits {
    fn default() -> Self {
        Self::new()
    }
}

/// All editor limits in one place.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EditorConfig {
    pub skill_limits: SkillLimits,
    pub position_limit: usize,
}

impl EditorConfig {
    pub fn new() -> Self {
        Self {
            skill_limits: SkillLimits::new(),
            position_limit: MAX_POSITIONS,
        }
    }

    /// Configure the skill caps (default: 3 soft, 5 hard)
    pub fn with_skill_limits(mut self, limits: SkillLimits) -> Self {
        self.skill_limits = limits;
        self
    }

    /// Configure the positions cap (default: 3)
    pub fn with_position_limit(mut self, limit: usize) -> Self {
        self.position_limit = limit;
        self
    }
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self::new()
    }
}
