//! # Configuration Module - Runtime Behavior Settings
//!
//! Options that change how a [TypingSession](crate::TypingSession) treats input and how much of
//! the viewport it keeps around the cursor.
//!
//! ## Usage
//!
//! ```rust
//! use stenograph::Configuration;
//!
//! // Use default configuration
//! let config = Configuration::default();
//!
//! // Practicing source code: don't retype indentation
//! let config = Configuration {
//!     skip_indentation: true,
//!     ..Configuration::default()
//! };
//! ```

use crate::layout::DEFAULT_MIN_HEIGHT;

/// Default lines kept between the cursor and the bottom of the viewport
pub const DEFAULT_SCROLL_PADDING: usize = 5;

/// Runtime configuration for a typing session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Configuration {
    /// Jump over the spaces that start a line after typing a line break
    ///
    /// **Default**: false
    pub skip_indentation: bool,

    /// Lines kept visible below the cursor before the viewport scrolls
    ///
    /// **Default**: 5
    pub scroll_padding: usize,

    /// Smallest height a viewport is shrunk to for short texts
    ///
    /// **Default**: 8
    pub min_height: usize,
}

impl Default for Configuration {
    fn default() -> Self {
        Self {
            skip_indentation: false,
            scroll_padding: DEFAULT_SCROLL_PADDING,
            min_height: DEFAULT_MIN_HEIGHT,
        }
    }
}
