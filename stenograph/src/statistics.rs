pub use web_time::{Duration, Instant};

use crate::{Accuracy, Elapsed, TypingSession, Wpm};

/// Statistics of an attempt at a point in time
///
/// The session doesn't keep time itself; the caller owns the start and end timestamps and passes
/// the elapsed duration in.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Statistics {
    /// `None` until time has passed
    pub wpm: Option<Wpm>,
    /// `None` until something was typed
    pub accuracy: Option<Accuracy>,
    pub elapsed: Elapsed,
}

impl Statistics {
    pub fn new(typed: usize, misses: usize, elapsed: Duration) -> Self {
        Self {
            wpm: Wpm::calculate(typed, elapsed),
            accuracy: Accuracy::calculate(misses, typed),
            elapsed: Elapsed(elapsed),
        }
    }

    /// Measure a session after `elapsed` time
    pub fn from_session(session: &TypingSession, elapsed: Duration) -> Self {
        Self::new(session.typed_count(), session.miss_count(), elapsed)
    }

    /// Words per minute, or an empty string while undefined
    pub fn wpm_text(&self) -> String {
        self.wpm.map(|wpm| wpm.to_string()).unwrap_or_default()
    }

    /// Accuracy as a percentage, or an empty string while undefined
    pub fn accuracy_text(&self) -> String {
        self.accuracy
            .map(|accuracy| accuracy.to_string())
            .unwrap_or_default()
    }
}
