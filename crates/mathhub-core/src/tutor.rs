//! Tutor service capability trait.
//!
//! The external generative service is an opaque capability behind this
//! interface; the core's only contract is the shape of the request and
//! response, never the service's internals.

use crate::error::Result;
use crate::explanation::Explanation;
use crate::settings::Settings;
use crate::syllabus::Syllabus;

/// Service producing grade-appropriate math content.
///
/// Both operations are single-attempt and fail fast: implementations perform
/// no retry, no partial-result fallback and no schema-level repair. Neither
/// operation has side effects beyond the network call; history and settings
/// are the caller's concern.
#[async_trait::async_trait]
pub trait TutorService: Send + Sync {
    /// Fetches a structured explanation of `topic` for the grade and depth in
    /// `settings`.
    async fn fetch_explanation(&self, topic: &str, settings: &Settings) -> Result<Explanation>;

    /// Fetches the standard curriculum breakdown for `grade_level`.
    async fn fetch_syllabus(&self, grade_level: u8) -> Result<Syllabus>;
}
