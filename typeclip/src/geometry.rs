use ratatui::layout::Rect;

/// Rows and columns around the text taken by the border, the padding and the status bar
const CHROME: u16 = 4;

/// Where the typing box and its parts are drawn
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    /// The bordered box
    pub outer: Rect,
    /// The text inside the box
    pub text: Rect,
    /// The status line at the bottom of the box
    pub status: Rect,
}

impl Viewport {
    /// Place the box on a screen of the given size
    ///
    /// Wide screens get a centered box, narrow ones use the whole screen.
    pub fn new(screen: Rect) -> Self {
        let outer = if screen.width > 200 {
            scale(screen, 0.25, 0.25, 0.5, 0.5)
        } else if screen.width > 100 {
            scale(screen, 0.15, 0.25, 0.7, 0.5)
        } else {
            screen
        };

        Self::from_outer(outer)
    }

    fn from_outer(outer: Rect) -> Self {
        let text = Rect {
            x: outer.x + 2,
            y: outer.y + 1,
            width: outer.width.saturating_sub(CHROME),
            height: outer.height.saturating_sub(CHROME),
        };

        let status = Rect {
            x: outer.x + 1,
            y: text.y + text.height + 1,
            width: text.width + 2,
            height: u16::from(outer.height >= CHROME),
        };

        Self {
            outer,
            text,
            status,
        }
    }

    /// Shrink the box to `content_height` rows of text, keeping it vertically centered
    ///
    /// The box never grows.
    pub fn fit_to(self, content_height: usize) -> Self {
        let content_height = u16::try_from(content_height).unwrap_or(u16::MAX);
        let diff = self.text.height.saturating_sub(content_height);
        if diff == 0 {
            return self;
        }

        let outer = Rect {
            y: self.outer.y + diff / 2,
            height: self.outer.height - diff,
            ..self.outer
        };

        Self::from_outer(outer)
    }

    /// Width and height available for text, as the typing engine counts them
    pub fn text_size(&self) -> (usize, usize) {
        (usize::from(self.text.width), usize::from(self.text.height))
    }
}

fn scale(screen: Rect, x: f64, y: f64, width: f64, height: f64) -> Rect {
    let of = |value: u16, factor: f64| (f64::from(value) * factor).round() as u16;

    Rect {
        x: screen.x + of(screen.width, x),
        y: screen.y + of(screen.height, y),
        width: of(screen.width, width),
        height: of(screen.height, height),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_narrow_screen_uses_everything() {
        let viewport = Viewport::new(Rect::new(0, 0, 80, 24));
        assert_eq!(viewport.outer, Rect::new(0, 0, 80, 24));
        assert_eq!(viewport.text, Rect::new(2, 1, 76, 20));
        assert_eq!(viewport.status, Rect::new(1, 22, 78, 1));
        assert_eq!(viewport.text_size(), (76, 20));
    }

    #[test]
    fn test_medium_screen() {
        let viewport = Viewport::new(Rect::new(0, 0, 150, 40));
        assert_eq!(viewport.outer, Rect::new(23, 10, 105, 20));
        assert_eq!(viewport.text_size(), (101, 16));
    }

    #[test]
    fn test_wide_screen() {
        let viewport = Viewport::new(Rect::new(0, 0, 240, 60));
        assert_eq!(viewport.outer, Rect::new(60, 15, 120, 30));
        assert_eq!(viewport.text_size(), (116, 26));
    }

    #[test]
    fn test_fit_to_short_content() {
        let viewport = Viewport::new(Rect::new(0, 0, 80, 24)).fit_to(8);
        assert_eq!(viewport.outer, Rect::new(0, 6, 80, 12));
        assert_eq!(viewport.text, Rect::new(2, 7, 76, 8));
        assert_eq!(viewport.status, Rect::new(1, 16, 78, 1));

        // Never grows
        let viewport = Viewport::new(Rect::new(0, 0, 80, 24));
        assert_eq!(viewport.fit_to(100), viewport);
    }

    #[test]
    fn test_tiny_screen() {
        let viewport = Viewport::new(Rect::new(0, 0, 3, 2));
        assert_eq!(viewport.text_size(), (0, 0));
        assert_eq!(viewport.status.height, 0);
        assert_eq!(viewport.fit_to(0), viewport);
    }
}
