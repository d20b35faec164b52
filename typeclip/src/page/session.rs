use std::sync::mpsc::Sender;

use crossterm::event::KeyEvent;
use ratatui::{
    Frame,
    style::{Color, Modifier, Style},
    widgets::Paragraph,
};
use stenograph::{
    Classification, Input, RenderingContext, Statistics, TypingSession,
    statistics::{Duration, Instant},
};

use crate::{
    app::Message,
    config::{Settings, Theme},
    events::{AppEvent, StatusTicker, key_to_input},
    geometry::Viewport,
};

/// WPM values from here on are shown as noise and hidden
const WPM_DISPLAY_LIMIT: u32 = 300;

/// Page: Typing session
pub struct Session {
    session: TypingSession,
    started: Option<Instant>,
    ticker: Option<StatusTicker>,
}

impl Session {
    /// Creates a new typing page for `text`
    ///
    /// Returns `None` if the text is empty.
    pub fn new(text: &str, viewport: &Viewport, settings: &Settings) -> Option<Self> {
        let (width, height) = viewport.text_size();
        let session =
            TypingSession::with_configuration(text, width, height, settings.session_config())?;

        Some(Self {
            session,
            started: None,
            ticker: None,
        })
    }

    pub fn resize(&mut self, viewport: &Viewport) {
        let (width, height) = viewport.text_size();
        self.session.resize(width, height);
        tracing::debug!(
            width,
            height,
            line_count = self.session.layout().line_count(),
            "resized session"
        );
    }

    pub fn content_height(&self) -> usize {
        self.session.layout().effective_height()
    }

    fn elapsed(&self) -> Option<Duration> {
        self.started.map(|started| started.elapsed())
    }

    fn statistics(&self, elapsed: Duration) -> Statistics {
        Statistics::from_session(&self.session, elapsed)
    }

    /// The status bar contents after `elapsed`, or before the first keystroke if `None`
    fn status_line(&self, elapsed: Option<Duration>) -> String {
        let Some(elapsed) = elapsed else {
            return " Ready".to_string();
        };

        let stats = self.statistics(elapsed);
        let wpm = match stats.wpm {
            Some(wpm) if wpm.0 < WPM_DISPLAY_LIMIT => format!("  WPM: {wpm}"),
            _ => String::new(),
        };
        let time = format!("Time: {}s", stats.elapsed.whole_seconds());

        format!("{wpm:<17}{time:<18}Accuracy: {}", stats.accuracy_text())
    }
}

// Rendering logic
impl Session {
    pub fn render(&self, frame: &mut Frame, viewport: &Viewport, theme: &Theme) {
        let area = viewport.text.intersection(frame.area());
        let scroll = self.session.scroll_pos();
        let visible = self
            .session
            .layout()
            .effective_height()
            .min(usize::from(area.height));

        let buffer = frame.buffer_mut();
        for ctx in self.session.render_iter() {
            let line = ctx.position.line;
            if line < scroll || line >= scroll + visible {
                continue;
            }

            let placement = u16::try_from(ctx.position.column)
                .ok()
                .filter(|&column| column < area.width)
                .zip(u16::try_from(line - scroll).ok());

            let cell = match placement {
                Some((column, row)) => buffer.cell_mut((area.x + column, area.y + row)),
                None => None,
            };

            let Some(cell) = cell else {
                tracing::warn!(
                    index = ctx.index,
                    line,
                    column = ctx.position.column,
                    width = area.width,
                    "character outside of the text area"
                );
                continue;
            };

            cell.set_char(glyph(ctx.char))
                .set_style(character_style(&ctx, theme));
        }

        let status = Paragraph::new(self.status_line(self.elapsed())).style(theme.reverse());
        frame.render_widget(status, viewport.status.intersection(frame.area()));
    }
}

fn glyph(char: char) -> char {
    match char {
        '\n' => '↵',
        char if char.is_control() => ' ',
        char => char,
    }
}

fn character_style(ctx: &RenderingContext, theme: &Theme) -> Style {
    if ctx.has_cursor {
        return theme.reverse();
    }

    match ctx.classification {
        Classification::Miss => theme.error(),
        Classification::Hit => theme.success(),
        Classification::Highlighted if !matches!(ctx.char, ',' | '.') => {
            theme.base().add_modifier(Modifier::UNDERLINED)
        }
        Classification::Highlighted | Classification::Untyped => ctx
            .color
            .map_or(theme.base(), |color| theme.base().fg(Color::Indexed(color))),
    }
}

// Event handling
impl Session {
    pub fn handle_key(
        &mut self,
        key: &KeyEvent,
        settings: &Settings,
        events: &Sender<AppEvent>,
    ) -> Option<Message> {
        let input = key_to_input(key);
        if input == Input::Ignore {
            return None;
        }

        if self.started.is_none() {
            self.started = Some(Instant::now());
            self.ticker = Some(StatusTicker::start(
                events.clone(),
                settings.tick_interval(),
            ));
            tracing::debug!("attempt started");
        }

        self.session.input(input);

        if self.session.is_complete() {
            // Stops the status bar refresh
            self.ticker = None;

            let stats = self.statistics(self.elapsed().unwrap_or_default());
            tracing::info!(
                wpm = %stats.wpm_text(),
                accuracy = %stats.accuracy_text(),
                elapsed = %stats.elapsed,
                "attempt finished"
            );
            return Some(Message::Finished(stats));
        }

        None
    }
}
