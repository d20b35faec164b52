use derive_more::Display;
use web_time::Duration;

use crate::AVERAGE_WORD_LENGTH;

/// Words Per Minute
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Display)]
#[display("{_0}")]
pub struct Wpm(pub u32);

impl Wpm {
    /// Calculate Words Per Minute
    ///
    /// * `characters` - How many characters were typed during `elapsed`
    /// * `elapsed` - How long the typing took
    ///
    /// Returns `None` if no time has passed.
    pub fn calculate(characters: usize, elapsed: Duration) -> Option<Self> {
        let seconds = elapsed.as_secs_f64();
        if seconds <= 0.0 {
            return None;
        }

        // (characters / 5) / (seconds / 60)
        let wpm = (characters as f64 * 60.0) / (AVERAGE_WORD_LENGTH as f64 * seconds);

        Some(Self(wpm as u32))
    }
}

/// Typing accuracy
///
/// The percentage of keystrokes that matched, between 0.0 and 100.0.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Display)]
#[display("{_0:.2}%")]
pub struct Accuracy(pub f64);

impl Accuracy {
    /// Calculate typing Accuracy
    ///
    /// * `misses` - The total amount of mismatches made
    /// * `typed` - How many characters were typed
    ///
    /// Returns `None` if nothing was typed yet.
    pub fn calculate(misses: usize, typed: usize) -> Option<Self> {
        if typed == 0 {
            return None;
        }

        Some(Self((1.0 - misses as f64 / typed as f64) * 100.0))
    }
}

/// Elapsed time of an attempt
///
/// Displays as seconds with two decimals below a minute, and as whole minutes and seconds from
/// there on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Elapsed(pub Duration);

impl Elapsed {
    /// Whole seconds, as shown by a live status line
    pub const fn whole_seconds(&self) -> u64 {
        self.0.as_secs()
    }
}

impl std::fmt::Display for Elapsed {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let seconds = self.0.as_secs_f64();
        if seconds < 60.0 {
            return write!(f, "{seconds:.2}s");
        }

        let whole = self.0.as_secs();
        write!(f, "{}m {}s", whole / 60, whole % 60)
    }
}

impl From<Duration> for Elapsed {
    fn from(value: Duration) -> Self {
        Self(value)
    }
}
