//! User session domain model.
//!
//! Holds the logged-in student's display name and login flag. Created
//! logged-out at application start, mutated once on login, never persisted.

use serde::{Deserialize, Serialize};

/// The current user session.
///
/// Invariant: `is_logged_in == true` if and only if `name` is non-empty.
/// Both fields are set together, atomically, by [`UserSession::login`].
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct UserSession {
    /// The student's display name, empty while logged out.
    pub name: String,
    /// Whether the student has logged in.
    pub is_logged_in: bool,
}

impl UserSession {
    /// Creates a logged-out session.
    pub fn logged_out() -> Self {
        Self::default()
    }

    /// Logs in with the given display name.
    ///
    /// The name is trimmed first. Empty or whitespace-only submissions are
    /// ignored (a no-op, not an error). Returns whether the login took effect.
    pub fn login(&mut self, name: &str) -> bool {
        let trimmed = name.trim();
        if trimmed.is_empty() {
            return false;
        }
        self.name = trimmed.to_string();
        self.is_logged_in = true;
        true
    }
}
