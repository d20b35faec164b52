//! # Text Module - Passage Storage and Word Boundaries
//!
//! A [Text] is the immutable passage for one attempt. Words are maximal runs of
//! non-delimiter characters, where a delimiter is any whitespace (line breaks included).
//!
//! Data layout example: `"hello world"`
//! ```text
//! Characters: [h][e][l][l][o][ ][w][o][r][l][d]
//! Bounds(2):  [0 ---------- 4]
//! Bounds(8):                    [6 ---------- 10]
//! ```

use derive_more::Deref;

/// Returns true if the character separates words
pub fn is_delimiter(char: char) -> bool {
    char.is_whitespace()
}

/// Inclusive start and end indices of a word
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WordBounds {
    pub start: usize,
    pub end: usize,
}

impl WordBounds {
    pub const fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Returns true if `index` lies within the bounds
    pub const fn contains(&self, index: usize) -> bool {
        self.start <= index && index <= self.end
    }

    /// Number of characters covered by the bounds
    pub const fn len(&self) -> usize {
        self.end - self.start + 1
    }
}

impl From<(usize, usize)> for WordBounds {
    fn from((start, end): (usize, usize)) -> Self {
        Self { start, end }
    }
}

/// The passage being typed
///
/// Dereferences to its characters, so slicing and indexing work like on a `[char]`.
#[derive(Debug, Clone, PartialEq, Eq, Deref)]
pub struct Text {
    characters: Vec<char>,
}

impl Text {
    /// Create a text from a string
    ///
    /// # Returns
    ///
    /// `None` if the input string is empty.
    pub fn new(string: &str) -> Option<Self> {
        if string.is_empty() {
            return None;
        }

        Some(Self {
            characters: string.chars().collect(),
        })
    }

    /// Get the character at `index`
    pub fn get_character(&self, index: usize) -> Option<char> {
        self.characters.get(index).copied()
    }

    /// Find the word around `index`
    ///
    /// Scans backward while the preceding character is not a delimiter and forward while the
    /// following character is not a delimiter. There is no special case for a delimiter at
    /// `index` itself: the scan still reaches the adjacent runs, so callers that care must check
    /// [is_delimiter] first. Indices past the end are clamped to the last character.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use stenograph::{Text, WordBounds};
    ///
    /// let text = Text::new("Hello World").unwrap();
    /// assert_eq!(text.word_bounds(6), WordBounds::new(6, 10));
    /// assert_eq!(text.word_bounds(8), WordBounds::new(6, 10));
    /// ```
    pub fn word_bounds(&self, index: usize) -> WordBounds {
        let last = self.characters.len().saturating_sub(1);
        let index = index.min(last);

        let mut start = index;
        while start > 0 && !is_delimiter(self.characters[start - 1]) {
            start -= 1;
        }

        let mut end = index;
        while end < last && !is_delimiter(self.characters[end + 1]) {
            end += 1;
        }

        WordBounds { start, end }
    }
}

impl std::fmt::Display for Text {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.characters.iter().try_for_each(|char| write!(f, "{char}"))
    }
}
