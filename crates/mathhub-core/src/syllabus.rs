//! Curriculum syllabus returned by the tutor service for one grade.

use serde::{Deserialize, Serialize};

/// One curriculum category with its formula names.
///
/// 5-8 formulas are expected per category; the count is requested in the
/// prompt, not enforced here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SyllabusCategory {
    pub name: String,
    pub formulas: Vec<String>,
}

/// The standard curriculum breakdown for one grade level.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Syllabus {
    pub categories: Vec<SyllabusCategory>,
}
