//! # Input Handler Module - Keystroke Processing and Validation
//!
//! This module owns the typing progress of an attempt: the cursor, the set of characters that are
//! currently wrong, and the cumulative counters used for statistics.
//!
//! ## Key Responsibilities
//!
//! - **Input Validation**: Compare typed characters against the expected text
//! - **Cursor Movement**: Advance, step back one character, or step back a whole word
//! - **Miss Tracking**: Keep the "currently wrong" set in sync with corrections
//! - **Counters**: Cumulative misses and forward keystrokes, never decremented
//!
//! ## Input Processing Flow
//!
#![doc = simple_mermaid::mermaid!("../diagrams/input_handler_flow.mmd")]
//!
//! ## Usage Example
//!
//! ```rust
//! use stenograph::{CharacterResult, InputHandler, Text};
//!
//! let text = Text::new("hello").unwrap();
//! let mut handler = InputHandler::new();
//!
//! assert_eq!(handler.advance('h', &text, false), Some(CharacterResult::Hit));
//! assert_eq!(handler.advance('x', &text, false), Some(CharacterResult::Miss));
//! assert!(handler.is_miss(1));
//! ```

use std::collections::BTreeSet;

use crate::text::Text;

/// A logical input event from the keystroke source
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Input {
    /// A character to compare against the text
    Char(char),
    /// Remove the last typed character
    Backspace,
    /// Remove the last typed word
    DeleteWord,
    /// The viewport changed size. Handled by the render layer
    Resize,
    /// A key without a meaning for typing, like arrows or function keys
    Ignore,
}

/// The outcome of processing one input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CharacterResult {
    /// The typed character matched
    Hit,
    /// The typed character did not match
    Miss,
    /// The cursor moved backwards
    Deleted,
}

/// Cursor and miss bookkeeping for one attempt
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InputHandler {
    cursor: usize,
    misses: BTreeSet<usize>,
    miss_count: usize,
    typed_count: usize,
}

impl InputHandler {
    /// Create a handler with the cursor at the start of the text
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a handler with the cursor at `index`
    pub fn starting_at(index: usize) -> Self {
        Self {
            cursor: index,
            ..Self::default()
        }
    }

    /// Index of the next character to be typed
    pub const fn cursor(&self) -> usize {
        self.cursor
    }

    /// Indices that are currently typed wrong
    pub const fn misses(&self) -> &BTreeSet<usize> {
        &self.misses
    }

    /// Returns true if the character at `index` is currently typed wrong
    pub fn is_miss(&self, index: usize) -> bool {
        self.misses.contains(&index)
    }

    /// Total mismatches recorded, including those since corrected
    pub const fn miss_count(&self) -> usize {
        self.miss_count
    }

    /// Forward keystrokes processed
    pub const fn typed_count(&self) -> usize {
        self.typed_count
    }

    /// Returns true once every character has been typed
    pub fn is_fully_typed(&self, text: &Text) -> bool {
        self.cursor >= text.len()
    }

    /// Type `input` at the cursor
    ///
    /// With `skip_indentation`, crossing a line break also moves the cursor over the spaces that
    /// start the next line, without counting them as typed.
    ///
    /// # Returns
    ///
    /// `None` if the text is already fully typed. The cursor is never moved past the end.
    pub fn advance(
        &mut self,
        input: char,
        text: &Text,
        skip_indentation: bool,
    ) -> Option<CharacterResult> {
        let expected = text.get_character(self.cursor)?;

        let result = if input == expected {
            self.misses.remove(&self.cursor);
            CharacterResult::Hit
        } else {
            self.misses.insert(self.cursor);
            self.miss_count += 1;
            CharacterResult::Miss
        };

        self.cursor += 1;
        self.typed_count += 1;

        if skip_indentation && expected == '\n' {
            while text.get_character(self.cursor) == Some(' ') {
                self.misses.remove(&self.cursor);
                self.cursor += 1;
            }
        }

        Some(result)
    }

    /// Step back one character
    ///
    /// # Returns
    ///
    /// `None` if the cursor is already at the start.
    pub fn backspace(&mut self) -> Option<CharacterResult> {
        if self.cursor == 0 {
            return None;
        }

        self.cursor -= 1;
        self.misses.remove(&self.cursor);

        Some(CharacterResult::Deleted)
    }

    /// Step back to the start of the previous word
    ///
    /// If the cursor sits right after a space, the word before that space is the one removed.
    /// Every index passed on the way loses its miss.
    ///
    /// # Returns
    ///
    /// `None` if the cursor didn't move: at the start, or right after a line break, which stops
    /// the word scan.
    pub fn delete_word(&mut self, text: &Text) -> Option<CharacterResult> {
        if self.cursor == 0 {
            return None;
        }

        let mut from = self.cursor;
        if text.get_character(from - 1) == Some(' ') {
            from -= 1;
        }

        let target = text.word_bounds(from).start;
        if target == self.cursor {
            return None;
        }

        loop {
            self.misses.remove(&self.cursor);

            if self.cursor == target || self.cursor == 0 {
                break;
            }

            self.cursor -= 1;
        }

        Some(CharacterResult::Deleted)
    }
}
