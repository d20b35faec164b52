//! Scroll offset for height-limited viewports.

/// Topmost visible line for a viewport of `viewport_height` lines
///
/// Nothing scrolls while the cursor is more than `padding` lines above the bottom edge, or while
/// every line fits. Near the end of the text the viewport is pinned to the last line. Otherwise
/// the cursor is kept `padding` lines from the bottom edge.
///
/// # Examples
///
/// ```rust
/// use stenograph::scroll_pos;
///
/// assert_eq!(scroll_pos(2, 15, 10, 5), 0);
/// assert_eq!(scroll_pos(6, 15, 10, 5), 1);
/// assert_eq!(scroll_pos(11, 15, 10, 5), 5);
/// ```
pub const fn scroll_pos(
    current_line: usize,
    line_count: usize,
    viewport_height: usize,
    padding: usize,
) -> usize {
    let padded_line = current_line + padding;

    if padded_line < viewport_height.saturating_sub(1) || line_count <= viewport_height {
        return 0;
    }

    if padded_line > line_count.saturating_sub(1) {
        return line_count - viewport_height;
    }

    padded_line.saturating_sub(viewport_height)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_everything_fits() {
        assert_eq!(scroll_pos(14, 15, 15, 5), 0);
        assert_eq!(scroll_pos(3, 4, 10, 5), 0);
    }

    #[test]
    fn test_cursor_above_padding() {
        assert_eq!(scroll_pos(3, 40, 10, 5), 0);
    }

    #[test]
    fn test_keeps_padding_below_cursor() {
        assert_eq!(scroll_pos(6, 15, 10, 5), 1);
        assert_eq!(scroll_pos(7, 15, 10, 5), 2);
        assert_eq!(scroll_pos(20, 40, 10, 5), 15);
    }

    #[test]
    fn test_pins_to_bottom() {
        assert_eq!(scroll_pos(11, 15, 10, 5), 5);
        assert_eq!(scroll_pos(14, 15, 10, 5), 5);
    }

    #[test]
    fn test_clamps_at_zero() {
        // The padded line sits exactly on the last visible row
        assert_eq!(scroll_pos(4, 40, 10, 5), 0);
    }

    #[test]
    fn test_zero_height() {
        assert_eq!(scroll_pos(0, 3, 0, 0), 0);
        assert_eq!(scroll_pos(2, 3, 1, 0), 1);
    }
}
