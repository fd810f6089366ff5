//! Application layer for Math Formula Hub.
//!
//! Coordinates the domain state (dashboard) with the tutor service behind
//! async fetches, and owns the boundary where internal errors collapse to
//! user-facing messages.

pub mod controller;
pub mod dashboard;
pub mod fetch_state;

pub use controller::{
    EXPLANATION_ERROR_MESSAGE, HubController, HubEvent, SYLLABUS_ERROR_MESSAGE,
};
pub use dashboard::{Dashboard, SettingsChange};
pub use fetch_state::{FetchSlot, FetchState};
