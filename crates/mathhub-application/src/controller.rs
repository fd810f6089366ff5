//! Async controller driving the dashboard.
//!
//! Fetches run on spawned tasks; the dashboard write lock is held only for
//! the synchronous begin/complete transitions, never across the network
//! call. Detailed errors are logged here and collapsed to the two fixed
//! user-facing messages before they reach the view.

use std::sync::Arc;

use mathhub_core::explanation::Explanation;
use mathhub_core::settings::Settings;
use mathhub_core::syllabus::Syllabus;
use mathhub_core::tutor::TutorService;
use tokio::sync::{RwLock, mpsc};

use crate::dashboard::Dashboard;

/// Shown when an explanation fetch fails, whatever the internal cause.
pub const EXPLANATION_ERROR_MESSAGE: &str =
    "Could not fetch explanation. Please check your internet or try a different topic.";

/// Shown when a syllabus fetch fails, whatever the internal cause.
pub const SYLLABUS_ERROR_MESSAGE: &str =
    "Could not load the syllabus for this grade. Please check your internet and try again.";

/// Render events delivered to the view when a fetch resolves.
///
/// Stale completions (superseded by a newer fetch or a grade change) emit no
/// event; the dashboard state and the event stream stay consistent.
#[derive(Debug, Clone)]
pub enum HubEvent {
    ExplanationReady {
        topic: String,
        explanation: Explanation,
    },
    ExplanationFailed {
        topic: String,
        message: String,
    },
    SyllabusReady {
        grade_level: u8,
        syllabus: Syllabus,
    },
    SyllabusFailed {
        grade_level: u8,
        message: String,
    },
}

/// Orchestrates the tutor service and the dashboard state.
#[derive(Clone)]
pub struct HubController {
    dashboard: Arc<RwLock<Dashboard>>,
    tutor: Arc<dyn TutorService>,
    events: mpsc::Sender<HubEvent>,
}

impl HubController {
    pub fn new(
        tutor: Arc<dyn TutorService>,
        settings: Settings,
        events: mpsc::Sender<HubEvent>,
    ) -> Self {
        Self {
            dashboard: Arc::new(RwLock::new(Dashboard::new(settings))),
            tutor,
            events,
        }
    }

    /// Shared handle to the dashboard state for rendering.
    pub fn dashboard(&self) -> Arc<RwLock<Dashboard>> {
        Arc::clone(&self.dashboard)
    }

    /// Logs the user in. Empty or whitespace-only names are a no-op.
    pub async fn login(&self, name: &str) -> bool {
        self.dashboard.write().await.login(name)
    }

    /// Replaces the settings wholesale; a grade change triggers the syllabus
    /// re-fetch for the new grade.
    pub async fn apply_settings(&self, settings: Settings) {
        let change = self.dashboard.write().await.apply_settings(settings);
        if let Some(grade_level) = change.refetch_syllabus {
            self.request_syllabus(grade_level).await;
        }
    }

    /// Starts an explanation fetch for `topic` on a background task.
    pub async fn request_explanation(&self, topic: String) {
        let (token, settings) = {
            let mut dashboard = self.dashboard.write().await;
            (dashboard.begin_explanation(), dashboard.settings().clone())
        };

        let dashboard = Arc::clone(&self.dashboard);
        let tutor = Arc::clone(&self.tutor);
        let events = self.events.clone();

        tokio::spawn(async move {
            let outcome = tutor.fetch_explanation(&topic, &settings).await;

            let (applied, event) = match outcome {
                Ok(explanation) => {
                    let applied = dashboard.write().await.complete_explanation(
                        token,
                        &topic,
                        Ok(explanation.clone()),
                    );
                    (
                        applied,
                        HubEvent::ExplanationReady { topic, explanation },
                    )
                }
                Err(err) => {
                    tracing::error!(%topic, error = %err, "explanation fetch failed");
                    let applied = dashboard.write().await.complete_explanation(
                        token,
                        &topic,
                        Err(EXPLANATION_ERROR_MESSAGE.to_string()),
                    );
                    (
                        applied,
                        HubEvent::ExplanationFailed {
                            topic,
                            message: EXPLANATION_ERROR_MESSAGE.to_string(),
                        },
                    )
                }
            };

            if applied {
                let _ = events.send(event).await;
            }
        });
    }

    /// Starts a syllabus fetch for `grade_level` on a background task.
    pub async fn request_syllabus(&self, grade_level: u8) {
        let token = self.dashboard.write().await.begin_syllabus();

        let dashboard = Arc::clone(&self.dashboard);
        let tutor = Arc::clone(&self.tutor);
        let events = self.events.clone();

        tokio::spawn(async move {
            let outcome = tutor.fetch_syllabus(grade_level).await;

            let (applied, event) = match outcome {
                Ok(syllabus) => {
                    let applied = dashboard
                        .write()
                        .await
                        .complete_syllabus(token, Ok(syllabus.clone()));
                    (
                        applied,
                        HubEvent::SyllabusReady {
                            grade_level,
                            syllabus,
                        },
                    )
                }
                Err(err) => {
                    tracing::error!(grade_level, error = %err, "syllabus fetch failed");
                    let applied = dashboard
                        .write()
                        .await
                        .complete_syllabus(token, Err(SYLLABUS_ERROR_MESSAGE.to_string()));
                    (
                        applied,
                        HubEvent::SyllabusFailed {
                            grade_level,
                            message: SYLLABUS_ERROR_MESSAGE.to_string(),
                        },
                    )
                }
            };

            if applied {
                let _ = events.send(event).await;
            }
        });
    }
}
