//! # stenograph
//!
//! The engine behind a terminal typing trainer: it keeps track of where the user is in a
//! passage, which characters were mistyped, which word is under the cursor, and how the passage
//! wraps and scrolls inside a fixed-size viewport.
//!
//! ```rust
//! use stenograph::{Input, TypingSession};
//!
//! let mut session = TypingSession::new("Hello World", 80, 30).unwrap();
//! session.input(Input::Char('H'));
//! session.input(Input::Char('x'));
//!
//! assert_eq!(session.cursor(), 2);
//! assert!(session.is_miss(1));
//! ```
//!
//! Rendering surfaces, keystroke sources and result persistence live outside this crate; the
//! types here only describe what to draw and where.

pub mod config;
pub mod input_handler;
pub mod layout;
pub mod math;
pub mod render;
pub mod scroll;
pub mod session;
pub mod statistics;
pub mod text;

pub use config::Configuration;
pub use input_handler::{CharacterResult, Input, InputHandler};
pub use layout::{Layout, LayoutConfig, Position};
pub use math::{Accuracy, Elapsed, Wpm};
pub use render::{Classification, RenderingContext, RenderingIterator};
pub use scroll::scroll_pos;
pub use session::TypingSession;
pub use statistics::Statistics;
pub use text::{Text, WordBounds, is_delimiter};

/// Characters per "word" when computing words per minute
pub const AVERAGE_WORD_LENGTH: usize = 5;
