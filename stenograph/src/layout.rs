//! # Layout Module - Word-Aware Wrapping and Position Lookup
//!
//! Lays a [Text] out into a viewport of fixed width, and precomputes the `(line, column)` of every
//! character so the cursor can be placed in O(1) after each keystroke.
//!
#![doc = simple_mermaid::mermaid!("../diagrams/layout_pipeline.mmd")]
//!
//! ## Wrapping rule
//!
//! For each character, the remaining length of the word it belongs to is added to the current
//! column. If that reaches `width - 1`, or the character is a line break, the character becomes a
//! break point: a `'\n'` is rendered in its place and the next character starts a new line. The
//! last column is kept free so a word that just fits never touches the terminal edge.
//!
//! A word longer than the viewport breaks greedily, one character per line, until its remaining
//! length fits.
//!
//! ```text
//! width = 20
//! "Hello World, this example has a very long line"
//!
//! Hello World, this⏎      <- the space after "this" is the break point
//! example has a very⏎
//! long line
//! ```
//!
//! A layout is tied to the width it was built with. Any width change means building a new one;
//! the table is never patched, as one wrap decision can move every following line.

use crate::text::Text;

/// Lines kept for a viewport even when the text is shorter
pub const DEFAULT_MIN_HEIGHT: usize = 8;

/// Where a character is drawn
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position {
    pub line: usize,
    pub column: usize,
}

impl Position {
    pub const fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }
}

impl From<(usize, usize)> for Position {
    fn from((line, column): (usize, usize)) -> Self {
        Self { line, column }
    }
}

/// Viewport dimensions for a layout
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LayoutConfig {
    /// Columns available per line
    pub width: usize,
    /// Nominal viewport height in lines
    pub height: usize,
    /// Lower limit when shrinking the viewport to fit short texts
    pub min_height: usize,
}

impl LayoutConfig {
    pub const fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            min_height: DEFAULT_MIN_HEIGHT,
        }
    }

    pub const fn with_min_height(mut self, min_height: usize) -> Self {
        self.min_height = min_height;
        self
    }
}

/// The wrapped text and its position table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layout {
    config: LayoutConfig,
    rendered: String,
    positions: Vec<Position>,
    soft_wraps: Vec<usize>,
    line_count: usize,
    effective_height: usize,
}

impl Layout {
    /// Lay out `text` in the viewport described by `config`
    ///
    /// # Performance
    ///
    /// O(n · w) where w is the average word length, as word bounds are computed per character.
    pub fn new(text: &Text, config: LayoutConfig) -> Self {
        let wrap_at = config.width.saturating_sub(1);

        let mut rendered = String::with_capacity(text.len());
        let mut positions = Vec::with_capacity(text.len());
        let mut soft_wraps = vec![];

        let mut line = 0;
        let mut column = 0;

        for (index, &char) in text.iter().enumerate() {
            positions.push(Position { line, column });

            let bounds = text.word_bounds(index);
            let remaining = bounds.end.saturating_sub(index);
            let is_line_break = char == '\n';

            if column + remaining >= wrap_at || is_line_break {
                if !is_line_break {
                    soft_wraps.push(index);
                }
                rendered.push('\n');
                column = 0;
                line += 1;
            } else {
                rendered.push(char);
                column += 1;
            }
        }

        let line_count = rendered.matches('\n').count() + 1;

        // Short texts don't need the whole viewport
        let effective_height = if config.height > line_count {
            line_count.max(config.min_height).min(config.height)
        } else {
            config.height
        };

        tracing::debug!(
            width = config.width,
            height = config.height,
            line_count,
            effective_height,
            "laid out text"
        );

        Self {
            config,
            rendered,
            positions,
            soft_wraps,
            line_count,
            effective_height,
        }
    }

    /// The text with every break point rendered as `'\n'`
    ///
    /// Contains exactly one character per character of the source text.
    pub fn rendered_text(&self) -> &str {
        &self.rendered
    }

    /// Position of every source character, aligned by index
    pub fn positions(&self) -> &[Position] {
        &self.positions
    }

    /// Position of the character at `index`
    pub fn position(&self, index: usize) -> Option<Position> {
        self.positions.get(index).copied()
    }

    /// Indices where the layout broke a line that the text didn't
    pub fn soft_wraps(&self) -> &[usize] {
        &self.soft_wraps
    }

    /// Returns true if the character at `index` was replaced by a wrap
    pub fn is_soft_wrap(&self, index: usize) -> bool {
        self.soft_wraps.binary_search(&index).is_ok()
    }

    /// Total number of rendered lines
    pub const fn line_count(&self) -> usize {
        self.line_count
    }

    /// Viewport height after shrinking to fit short texts
    pub const fn effective_height(&self) -> usize {
        self.effective_height
    }

    pub const fn width(&self) -> usize {
        self.config.width
    }

    pub const fn config(&self) -> LayoutConfig {
        self.config
    }

    /// Rebuild the source text from the rendered text
    pub fn restore(&self, text: &Text) -> String {
        self.rendered
            .chars()
            .enumerate()
            .map(|(index, char)| {
                if self.is_soft_wrap(index) {
                    text[index]
                } else {
                    char
                }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn layout(string: &str, width: usize) -> (Text, Layout) {
        let text = Text::new(string).unwrap();
        let layout = Layout::new(&text, LayoutConfig::new(width, 30));
        (text, layout)
    }

    #[test]
    fn test_single_line() {
        let (_, layout) = layout("Hello World", 80);
        assert_eq!(layout.rendered_text(), "Hello World");
        assert_eq!(layout.line_count(), 1);
        assert_eq!(layout.position(5), Some(Position::new(0, 5)));
        assert!(layout.soft_wraps().is_empty());
    }

    #[test]
    fn test_line_wrap() {
        let (_, layout) = layout("Hello World, this example has a very long line", 20);
        assert_eq!(
            layout.rendered_text(),
            "Hello World, this\nexample has a very\nlong line"
        );
        assert_eq!(layout.line_count(), 3);
        assert_eq!(layout.position(21), Some(Position::new(1, 3)));
        // The wrapped space stays at the end of the line it terminates
        assert_eq!(layout.position(17), Some(Position::new(0, 17)));
        assert_eq!(layout.position(18), Some(Position::new(1, 0)));
        assert_eq!(layout.soft_wraps(), &[17, 36]);
    }

    #[test]
    fn test_line_wrap_on_space() {
        let (_, layout) = layout("Hello world", 6);
        assert_eq!(layout.rendered_text(), "Hello\nworld");
        assert_eq!(layout.position(6), Some(Position::new(1, 0)));
    }

    #[test]
    fn test_line_count_with_line_wrap() {
        let (_, layout) = layout("Hello very long line", 12);
        assert_eq!(layout.line_count(), 2);
    }

    #[test]
    fn test_literal_line_breaks() {
        let (_, layout) = layout("Hello World\nWith line\nbreaks", 80);
        assert_eq!(layout.rendered_text(), "Hello World\nWith line\nbreaks");
        assert_eq!(layout.position(11), Some(Position::new(0, 11)));
        assert_eq!(layout.position(15), Some(Position::new(1, 3)));
        assert!(layout.soft_wraps().is_empty());
        assert_eq!(layout.line_count(), 3);
    }

    #[test]
    fn test_word_longer_than_width() {
        let (text, layout) = layout("abcdefghij", 6);
        // Breaks once per character until the rest of the word fits in front of the margin
        assert_eq!(layout.rendered_text(), "\n\n\n\n\nfghij");
        assert_eq!(layout.soft_wraps(), &[0, 1, 2, 3, 4]);
        assert_eq!(layout.position(0), Some(Position::new(0, 0)));
        assert_eq!(layout.position(4), Some(Position::new(4, 0)));
        assert_eq!(layout.position(5), Some(Position::new(5, 0)));
        assert_eq!(layout.position(9), Some(Position::new(5, 4)));
        assert_eq!(layout.restore(&text), "abcdefghij");
    }

    #[test]
    fn test_degenerate_widths() {
        for width in [0, 1] {
            let (text, layout) = layout("ab c", width);
            assert_eq!(layout.line_count(), 5);
            assert_eq!(layout.restore(&text), "ab c");
        }
    }

    #[test]
    fn test_positions_cover_every_index_in_order() {
        let samples = [
            "Hello World, this example has a very long line",
            "fn main() {\n    println!(\"hi\");\n}\n",
            "a\n\n\nb  c   d",
            "supercalifragilisticexpialidocious is long",
        ];

        for sample in samples {
            for width in [3, 7, 10, 20, 80] {
                let (text, layout) = layout(sample, width);
                assert_eq!(layout.positions().len(), text.len());
                assert_eq!(layout.rendered_text().chars().count(), text.len());
                assert!(
                    layout.positions().windows(2).all(|pair| pair[0] < pair[1]),
                    "positions not increasing for {sample:?} at width {width}"
                );
                assert_eq!(layout.restore(&text), sample);
            }
        }
    }

    #[test]
    fn test_rendered_characters_match_source_or_break() {
        let (text, layout) = layout("the quick brown fox jumps over the lazy dog", 12);
        for (index, char) in layout.rendered_text().chars().enumerate() {
            if char != text[index] {
                assert_eq!(char, '\n');
                assert!(layout.is_soft_wrap(index));
            }
        }
    }

    #[test]
    fn test_effective_height() {
        let text = Text::new("short").unwrap();
        let layout = Layout::new(&text, LayoutConfig::new(80, 30));
        assert_eq!(layout.effective_height(), DEFAULT_MIN_HEIGHT);

        let many_lines = vec!["a"; 12].join("\n");
        let text = Text::new(&many_lines).unwrap();
        let layout = Layout::new(&text, LayoutConfig::new(80, 30));
        assert_eq!(layout.effective_height(), 12);

        let layout = Layout::new(&text, LayoutConfig::new(80, 10));
        assert_eq!(layout.effective_height(), 10);

        // Never grows past the nominal height
        let layout = Layout::new(&Text::new("a").unwrap(), LayoutConfig::new(80, 5));
        assert_eq!(layout.effective_height(), 5);

        let layout = Layout::new(
            &Text::new("a").unwrap(),
            LayoutConfig::new(80, 30).with_min_height(2),
        );
        assert_eq!(layout.effective_height(), 2);
    }
}
