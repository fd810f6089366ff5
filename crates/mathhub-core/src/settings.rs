//! Application settings domain model.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// Lowest supported grade level.
pub const GRADE_MIN: u8 = 7;
/// Highest supported grade level.
pub const GRADE_MAX: u8 = 12;

/// How thorough the generated explanation should be.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString, Default,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum ExplanationDepth {
    #[default]
    Simple,
    Comprehensive,
}

/// Visual theme, one of four fixed gradients.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString, Default,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Theme {
    #[default]
    Indigo,
    Emerald,
    Amber,
    Cyan,
}

/// The full settings record, read by every downstream request.
///
/// Settings are replaced wholesale, never partially merged; single-field
/// updates are expressed by replacing with a cloned-and-modified snapshot
/// (see the `with_*` builders).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    pub grade_level: u8,
    pub explanation_depth: ExplanationDepth,
    pub theme: Theme,
    pub enable_thinking: bool,
    pub enable_voice: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            grade_level: 9,
            explanation_depth: ExplanationDepth::Simple,
            theme: Theme::Indigo,
            enable_thinking: true,
            enable_voice: false,
        }
    }
}

impl Settings {
    /// Whether a grade level is inside the supported [`GRADE_MIN`]..=[`GRADE_MAX`] range.
    pub fn is_valid_grade(grade_level: u8) -> bool {
        (GRADE_MIN..=GRADE_MAX).contains(&grade_level)
    }

    pub fn with_grade_level(mut self, grade_level: u8) -> Self {
        self.grade_level = grade_level;
        self
    }

    pub fn with_explanation_depth(mut self, depth: ExplanationDepth) -> Self {
        self.explanation_depth = depth;
        self
    }

    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    pub fn with_thinking(mut self, enabled: bool) -> Self {
        self.enable_thinking = enabled;
        self
    }

    pub fn with_voice(mut self, enabled: bool) -> Self {
        self.enable_voice = enabled;
        self
    }
}
