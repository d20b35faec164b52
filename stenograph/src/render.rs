use crate::{Position, TypingSession};

/// How a character should be drawn
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Classification {
    /// Not typed yet, and not part of the word under the cursor
    Untyped,
    /// Typed correctly
    Hit,
    /// Currently typed wrong
    Miss,
    /// Not typed yet, part of the word under the cursor
    Highlighted,
}

/// Everything a renderer needs to know about one character
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderingContext {
    pub char: char,
    pub index: usize,
    pub position: Position,
    pub classification: Classification,
    pub has_cursor: bool,
    /// Color index attached to the session, if any
    pub color: Option<u8>,
}

/// Iterator for rendering contexts
pub struct RenderingIterator<'a> {
    session: &'a TypingSession,
    index: usize,
}

impl<'a> From<&'a TypingSession> for RenderingIterator<'a> {
    fn from(value: &'a TypingSession) -> Self {
        Self {
            session: value,
            index: 0,
        }
    }
}

impl RenderingIterator<'_> {
    fn classify(&self, index: usize) -> Classification {
        let session = self.session;

        if session.is_miss(index) {
            Classification::Miss
        } else if index < session.cursor() {
            Classification::Hit
        } else if session
            .highlighted()
            .is_some_and(|bounds| bounds.contains(index))
        {
            Classification::Highlighted
        } else {
            Classification::Untyped
        }
    }
}

impl ExactSizeIterator for RenderingIterator<'_> {}

impl std::iter::FusedIterator for RenderingIterator<'_> {}

impl Iterator for RenderingIterator<'_> {
    type Item = RenderingContext;

    fn next(&mut self) -> Option<Self::Item> {
        let index = self.index;
        let char = self.session.text().get_character(index)?;
        let position = self.session.layout().position(index)?;

        let context = RenderingContext {
            char,
            index,
            position,
            classification: self.classify(index),
            has_cursor: index == self.session.cursor(),
            color: self.session.color(index),
        };

        self.index += 1;
        Some(context)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.session.text().len().saturating_sub(self.index);
        (remaining, Some(remaining))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Input;

    #[test]
    fn test_rendering() {
        let mut session = TypingSession::new("hello world", 80, 30).unwrap();
        session.input(Input::Char('h'));
        session.input(Input::Char('x'));

        let rendered: Vec<String> = session
            .render_iter()
            .map(|ctx| {
                let class = match ctx.classification {
                    Classification::Untyped => "untyped",
                    Classification::Hit => "hit",
                    Classification::Miss => "miss",
                    Classification::Highlighted => "highlighted",
                };
                let cursor = if ctx.has_cursor { " [cursor]" } else { "" };
                format!("{}:{class}{cursor}", ctx.char)
            })
            .collect();

        assert_eq!(rendered.len(), 11);
        assert_eq!(rendered[0], "h:hit");
        assert_eq!(rendered[1], "e:miss");
        assert_eq!(rendered[2], "l:highlighted [cursor]");
        assert_eq!(rendered[4], "o:highlighted");
        assert_eq!(rendered[5], " :untyped");
        assert_eq!(rendered[6], "w:untyped");

        let iter = session.render_iter();
        assert_eq!(iter.len(), 11);
        assert_eq!(iter.size_hint(), (11, Some(11)));
    }

    #[test]
    fn test_rendering_positions_follow_layout() {
        let session = TypingSession::new("Hello world", 6, 30).unwrap();
        let positions: Vec<Position> = session.render_iter().map(|ctx| ctx.position).collect();
        assert_eq!(positions[5], Position::new(0, 5));
        assert_eq!(positions[6], Position::new(1, 0));
    }

    #[test]
    fn test_rendering_colors() {
        let session = TypingSession::new("ab", 80, 30)
            .unwrap()
            .with_colors(vec![9, 10]);
        let colors: Vec<Option<u8>> = session.render_iter().map(|ctx| ctx.color).collect();
        assert_eq!(colors, vec![Some(9), Some(10)]);
    }

    #[test]
    fn test_no_highlight_on_delimiter() {
        let session = TypingSession::new("ab cd", 80, 30).unwrap().starting_at(2);
        assert!(
            session
                .render_iter()
                .all(|ctx| ctx.classification != Classification::Highlighted)
        );
    }
}
