//! Dashboard state machine.
//!
//! Owns everything the view renders: the user session, the settings record,
//! the recent-topic history and the two query slots. All transitions are
//! synchronous; the async controller drives them around its network calls.

use mathhub_core::explanation::Explanation;
use mathhub_core::history::RecentTopics;
use mathhub_core::session::UserSession;
use mathhub_core::settings::Settings;
use mathhub_core::syllabus::Syllabus;
use mathhub_core::theme::ThemePalette;

use crate::fetch_state::{FetchSlot, FetchState};

/// Outcome of a settings replacement.
///
/// Reconciliation is explicit: the caller receives a directive instead of the
/// dashboard reaching into the network layer itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SettingsChange {
    /// New grade level to fetch the syllabus for, when the grade changed.
    pub refetch_syllabus: Option<u8>,
}

/// Aggregate state behind the REPL.
#[derive(Debug, Default)]
pub struct Dashboard {
    session: UserSession,
    settings: Settings,
    history: RecentTopics,
    explanation: FetchSlot<Explanation>,
    syllabus: FetchSlot<Syllabus>,
}

impl Dashboard {
    pub fn new(settings: Settings) -> Self {
        Self {
            settings,
            ..Self::default()
        }
    }

    pub fn session(&self) -> &UserSession {
        &self.session
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn history(&self) -> &RecentTopics {
        &self.history
    }

    pub fn explanation(&self) -> &FetchState<Explanation> {
        self.explanation.state()
    }

    pub fn syllabus(&self) -> &FetchState<Syllabus> {
        self.syllabus.state()
    }

    /// Palette tokens derived from the current theme.
    pub fn palette(&self) -> ThemePalette {
        self.settings.theme.palette()
    }

    /// Logs the user in. Empty or whitespace-only names are a no-op.
    pub fn login(&mut self, name: &str) -> bool {
        self.session.login(name)
    }

    /// Replaces the settings record wholesale and reconciles dependent state.
    ///
    /// A grade change clears the displayed explanation (the formula card is
    /// grade-specific) and yields a syllabus re-fetch directive for the new
    /// grade. Setting the same grade yields none.
    pub fn apply_settings(&mut self, new: Settings) -> SettingsChange {
        let grade_changed = new.grade_level != self.settings.grade_level;
        self.settings = new;

        if grade_changed {
            self.explanation.reset();
            SettingsChange {
                refetch_syllabus: Some(self.settings.grade_level),
            }
        } else {
            SettingsChange {
                refetch_syllabus: None,
            }
        }
    }

    /// Marks the explanation query as loading and returns its guard token.
    pub fn begin_explanation(&mut self) -> u64 {
        self.explanation.begin()
    }

    /// Applies an explanation completion. On success the topic is recorded in
    /// the history. Stale completions are dropped and record nothing.
    pub fn complete_explanation(
        &mut self,
        token: u64,
        topic: &str,
        outcome: Result<Explanation, String>,
    ) -> bool {
        let recorded = outcome.is_ok();
        let applied = self.explanation.complete(token, outcome);
        if applied && recorded {
            self.history.record(topic);
        }
        applied
    }

    /// Marks the syllabus query as loading and returns its guard token.
    pub fn begin_syllabus(&mut self) -> u64 {
        self.syllabus.begin()
    }

    /// Applies a syllabus completion; stale completions are dropped.
    pub fn complete_syllabus(&mut self, token: u64, outcome: Result<Syllabus, String>) -> bool {
        self.syllabus.complete(token, outcome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mathhub_core::explanation::{SolvedExample, TrapQuestion};
    use mathhub_core::settings::Theme;

    fn sample_explanation() -> Explanation {
        Explanation {
            formula_name: "Quadratic Formula".to_string(),
            exact_formula: "x = (-b +/- sqrt(b^2 - 4ac)) / 2a".to_string(),
            intuitive_meaning: "Finds where a parabola crosses zero.".to_string(),
            when_to_use: "Any quadratic equation.".to_string(),
            when_not_to_use: "Linear equations.".to_string(),
            common_mistake: "Dropping the plus-minus.".to_string(),
            solved_example: SolvedExample {
                steps: vec!["Identify a, b, c".to_string(), "Substitute".to_string()],
                result: "x = 1 or x = -3".to_string(),
            },
            trap_question: TrapQuestion {
                question: "Does b^2 - 4ac < 0 mean no solution?".to_string(),
                explanation: "No real solution, but complex ones exist.".to_string(),
            },
            memory_trick: "Sing it to a familiar tune.".to_string(),
            related_formulas: vec!["Discriminant".to_string()],
        }
    }

    #[test]
    fn test_grade_change_clears_explanation_and_directs_refetch() {
        let mut dashboard = Dashboard::new(Settings::default());
        let token = dashboard.begin_explanation();
        dashboard.complete_explanation(token, "Circles", Ok(sample_explanation()));
        assert!(dashboard.explanation().is_ready());

        let change = dashboard.apply_settings(Settings::default().with_grade_level(11));
        assert_eq!(change.refetch_syllabus, Some(11));
        assert_eq!(dashboard.explanation(), &FetchState::Idle);
    }

    #[test]
    fn test_same_grade_produces_no_directive() {
        let mut dashboard = Dashboard::new(Settings::default());
        let token = dashboard.begin_explanation();
        dashboard.complete_explanation(token, "Circles", Ok(sample_explanation()));

        let change = dashboard.apply_settings(Settings::default().with_theme(Theme::Cyan));
        assert_eq!(change.refetch_syllabus, None);
        assert!(dashboard.explanation().is_ready());
    }

    #[test]
    fn test_settings_replacement_is_total() {
        let mut dashboard = Dashboard::new(Settings::default());
        let new = Settings::default()
            .with_grade_level(7)
            .with_theme(Theme::Amber)
            .with_thinking(false);
        dashboard.apply_settings(new.clone());
        assert_eq!(dashboard.settings(), &new);
    }

    #[test]
    fn test_theme_switch_rederives_palette() {
        let mut dashboard = Dashboard::new(Settings::default());
        let before = dashboard.palette();
        dashboard.apply_settings(Settings::default().with_theme(Theme::Emerald));
        let after = dashboard.palette();
        assert_ne!(before, after);
        assert_eq!(after, Theme::Emerald.palette());
    }

    #[test]
    fn test_success_records_topic_in_history() {
        let mut dashboard = Dashboard::new(Settings::default());
        let token = dashboard.begin_explanation();
        dashboard.complete_explanation(token, "Trigonometry", Ok(sample_explanation()));
        let topics: Vec<&str> = dashboard.history().iter().collect();
        assert_eq!(topics, vec!["Trigonometry"]);
    }

    #[test]
    fn test_failure_records_nothing() {
        let mut dashboard = Dashboard::new(Settings::default());
        let token = dashboard.begin_explanation();
        dashboard.complete_explanation(token, "Trigonometry", Err("failed".to_string()));
        assert!(dashboard.history().is_empty());
        assert!(!dashboard.explanation().is_loading());
    }

    #[test]
    fn test_stale_explanation_never_overwrites_newer_fetch() {
        let mut dashboard = Dashboard::new(Settings::default());
        let old = dashboard.begin_explanation();
        let new = dashboard.begin_explanation();

        let mut newer = sample_explanation();
        newer.formula_name = "Newer".to_string();
        assert!(dashboard.complete_explanation(new, "Newer topic", Ok(newer)));

        assert!(!dashboard.complete_explanation(old, "Older topic", Ok(sample_explanation())));
        let topics: Vec<&str> = dashboard.history().iter().collect();
        assert_eq!(topics, vec!["Newer topic"]);
        match dashboard.explanation() {
            FetchState::Ready(explanation) => assert_eq!(explanation.formula_name, "Newer"),
            other => panic!("unexpected state: {other:?}"),
        }
    }

    #[test]
    fn test_login_delegates_trim_gate() {
        let mut dashboard = Dashboard::new(Settings::default());
        assert!(!dashboard.login("   "));
        assert!(!dashboard.session().is_logged_in);
        assert!(dashboard.login("  Asha "));
        assert_eq!(dashboard.session().name, "Asha");
    }
}
