//! # Session Module - Typing State for One Attempt
//!
//! This module provides the high-level interface for a single attempt at a text. It coordinates
//! the text, the input handler and the layout, and keeps the derived "highlighted word" in sync
//! after every keystroke.
//!
//! ## Key Features
//!
//! - **Keystroke processing**: advance, backspace and delete-word through one [Input] entry point
//! - **O(1) cursor placement**: positions come from the layout's precomputed table
//! - **Resize without losing progress**: only layout-derived state is rebuilt
//! - **Rendering contexts**: per-character classification for any drawing surface
//!
//! ## Session Lifecycle
//!
#![doc = simple_mermaid::mermaid!("../diagrams/session_lifecycle.mmd")]
//!
//! ## Usage Examples
//!
//! ```rust
//! use stenograph::{Input, Position, TypingSession, WordBounds};
//!
//! let mut session =
//!     TypingSession::new("Hello World, this example has a very long line", 20, 30).unwrap();
//!
//! for char in "Hello World, this ex".chars() {
//!     session.input(Input::Char(char));
//! }
//!
//! assert_eq!(session.position(), Position::new(1, 2));
//! assert_eq!(session.highlighted(), Some(WordBounds::new(18, 24)));
//! ```

use std::collections::BTreeSet;

use crate::config::Configuration;
use crate::input_handler::{CharacterResult, Input, InputHandler};
use crate::layout::{Layout, LayoutConfig, Position};
use crate::render::RenderingIterator;
use crate::scroll::scroll_pos;
use crate::text::{Text, WordBounds, is_delimiter};

/// Typing state and layout for one attempt at a text
///
/// # Thread Safety
///
/// A session is owned by the event loop and mutated from a single thread. Anything else that
/// needs to show progress (like a status line) should read it through the loop.
#[derive(Debug, Clone)]
pub struct TypingSession {
    text: Text,
    input_handler: InputHandler,
    layout: Layout,
    highlighted: Option<WordBounds>,
    colors: Vec<u8>,
    config: Configuration,
}

impl TypingSession {
    /// Create a session for `string` in a `width` x `height` viewport
    ///
    /// # Returns
    ///
    /// `None` if the string is empty.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use stenograph::TypingSession;
    ///
    /// let session = TypingSession::new("Hello World", 80, 30).unwrap();
    /// assert_eq!(session.cursor(), 0);
    /// assert_eq!(session.layout().line_count(), 1);
    ///
    /// assert!(TypingSession::new("", 80, 30).is_none());
    /// ```
    pub fn new(string: &str, width: usize, height: usize) -> Option<Self> {
        Self::with_configuration(string, width, height, Configuration::default())
    }

    /// Create a session with custom settings
    pub fn with_configuration(
        string: &str,
        width: usize,
        height: usize,
        config: Configuration,
    ) -> Option<Self> {
        let text = Text::new(string)?;
        let layout = Layout::new(
            &text,
            LayoutConfig::new(width, height).with_min_height(config.min_height),
        );

        let mut session = Self {
            text,
            input_handler: InputHandler::new(),
            layout,
            highlighted: None,
            colors: vec![],
            config,
        };
        session.highlight();

        Some(session)
    }

    /// Move the cursor to `index` before any input (builder pattern)
    ///
    /// Useful for resuming an attempt. The index is clamped to the text length.
    pub fn starting_at(mut self, index: usize) -> Self {
        self.input_handler = InputHandler::starting_at(index.min(self.text.len()));
        self.highlight();
        self
    }

    /// Attach a color index per character (builder pattern)
    ///
    /// The colors are opaque to the session and handed to the renderer as they are. Characters
    /// without an entry have no color.
    pub fn with_colors(mut self, colors: Vec<u8>) -> Self {
        self.colors = colors;
        self
    }

    /// Process one input event
    ///
    /// `Input::Resize` and `Input::Ignore` leave the session untouched; resizing goes through
    /// [TypingSession::resize] since it needs the new dimensions.
    ///
    /// # Returns
    ///
    /// The result of the input, or `None` if it had no effect.
    pub fn input(&mut self, input: Input) -> Option<CharacterResult> {
        match input {
            Input::Char(char) => self.advance(char),
            Input::Backspace => self.backspace(),
            Input::DeleteWord => self.delete_word(),
            Input::Resize | Input::Ignore => None,
        }
    }

    /// Type `char` at the cursor
    ///
    /// # Returns
    ///
    /// `None` once the text is fully typed; the caller should stop sending input then.
    pub fn advance(&mut self, char: char) -> Option<CharacterResult> {
        let result = self
            .input_handler
            .advance(char, &self.text, self.config.skip_indentation)?;
        self.highlight();
        Some(result)
    }

    /// Remove the last typed character
    pub fn backspace(&mut self) -> Option<CharacterResult> {
        let result = self.input_handler.backspace()?;
        self.highlight();
        Some(result)
    }

    /// Remove the last typed word
    pub fn delete_word(&mut self) -> Option<CharacterResult> {
        let result = self.input_handler.delete_word(&self.text)?;
        self.highlight();
        Some(result)
    }

    /// Recompute the word under the cursor
    ///
    /// Once the cursor reaches the end the last highlight is kept. A cursor on a delimiter has no
    /// highlight.
    pub fn highlight(&mut self) {
        let Some(char) = self.text.get_character(self.cursor()) else {
            return;
        };

        self.highlighted = if is_delimiter(char) {
            None
        } else {
            Some(self.text.word_bounds(self.cursor()))
        };
    }

    /// Lay the text out again for a new viewport
    ///
    /// Typing progress is kept; only the layout is rebuilt.
    pub fn resize(&mut self, width: usize, height: usize) {
        self.layout = Layout::new(
            &self.text,
            LayoutConfig::new(width, height).with_min_height(self.config.min_height),
        );
    }

    /// Where the cursor is drawn
    ///
    /// Once the text is fully typed the cursor stays on the last character.
    pub fn position(&self) -> Position {
        self.layout
            .position(self.cursor())
            .or_else(|| self.layout.positions().last().copied())
            .unwrap_or_default()
    }

    /// Topmost line to draw so the cursor stays visible
    pub fn scroll_pos(&self) -> usize {
        scroll_pos(
            self.position().line,
            self.layout.line_count(),
            self.layout.effective_height(),
            self.config.scroll_padding,
        )
    }

    /// Create an iterator over rendering contexts
    pub fn render_iter(&self) -> RenderingIterator<'_> {
        self.into()
    }

    pub const fn text(&self) -> &Text {
        &self.text
    }

    pub const fn layout(&self) -> &Layout {
        &self.layout
    }

    pub const fn config(&self) -> &Configuration {
        &self.config
    }

    /// Index of the next character to be typed
    pub const fn cursor(&self) -> usize {
        self.input_handler.cursor()
    }

    /// Indices that are currently typed wrong
    pub const fn misses(&self) -> &BTreeSet<usize> {
        self.input_handler.misses()
    }

    /// Returns true if the character at `index` is currently typed wrong
    pub fn is_miss(&self, index: usize) -> bool {
        self.input_handler.is_miss(index)
    }

    /// Total mismatches recorded, including those since corrected
    pub const fn miss_count(&self) -> usize {
        self.input_handler.miss_count()
    }

    /// Forward keystrokes processed
    pub const fn typed_count(&self) -> usize {
        self.input_handler.typed_count()
    }

    /// The word under the cursor, if any
    pub const fn highlighted(&self) -> Option<WordBounds> {
        self.highlighted
    }

    /// Color index of the character at `index`, if one was attached
    pub fn color(&self, index: usize) -> Option<u8> {
        self.colors.get(index).copied()
    }

    /// Returns true once every character has been typed
    pub fn is_complete(&self) -> bool {
        self.input_handler.is_fully_typed(&self.text)
    }
}
