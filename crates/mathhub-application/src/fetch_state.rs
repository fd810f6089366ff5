//! Per-query view state with a stale-response guard.
//!
//! Each asynchronous query the dashboard tracks owns one [`FetchSlot`]. The
//! slot hands out a generation token when a fetch begins; a completion is
//! applied only when it carries the current token, so overlapping fetches
//! resolve newest-wins instead of last-write-wins.

/// State of one asynchronous query as the view sees it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchState<T> {
    /// Nothing requested yet, or the previous result was invalidated.
    Idle,
    /// A fetch is outstanding.
    Loading,
    /// The latest fetch succeeded.
    Ready(T),
    /// The latest fetch failed; carries the user-facing message.
    Failed(String),
}

impl<T> Default for FetchState<T> {
    fn default() -> Self {
        Self::Idle
    }
}

impl<T> FetchState<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    pub fn is_ready(&self) -> bool {
        matches!(self, Self::Ready(_))
    }

    /// The ready value, if any.
    pub fn value(&self) -> Option<&T> {
        match self {
            Self::Ready(value) => Some(value),
            _ => None,
        }
    }
}

/// A [`FetchState`] plus the generation counter guarding it.
#[derive(Debug, Clone)]
pub struct FetchSlot<T> {
    state: FetchState<T>,
    generation: u64,
}

impl<T> Default for FetchSlot<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> FetchSlot<T> {
    pub fn new() -> Self {
        Self {
            state: FetchState::Idle,
            generation: 0,
        }
    }

    pub fn state(&self) -> &FetchState<T> {
        &self.state
    }

    /// Moves to `Loading` and returns the token the matching completion must
    /// present.
    pub fn begin(&mut self) -> u64 {
        self.generation += 1;
        self.state = FetchState::Loading;
        self.generation
    }

    /// Applies a completion if `token` is still current. Returns whether the
    /// completion was applied; stale completions leave the slot untouched.
    pub fn complete(&mut self, token: u64, outcome: Result<T, String>) -> bool {
        if token != self.generation {
            return false;
        }
        self.state = match outcome {
            Ok(value) => FetchState::Ready(value),
            Err(message) => FetchState::Failed(message),
        };
        true
    }

    /// Returns to `Idle` and invalidates any outstanding fetch.
    pub fn reset(&mut self) {
        self.generation += 1;
        self.state = FetchState::Idle;
    }
}
