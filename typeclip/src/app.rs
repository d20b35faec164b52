use ratatui::{
    Frame, Terminal,
    backend::Backend,
    layout::{Rect, Size},
    style::Stylize,
    text::ToLine,
    widgets::{Block, BorderType},
};
use stenograph::Statistics;

use crate::{
    config::{Settings, Theme},
    error::AppError,
    events::{AppEvent, Events, KeyPress},
    geometry::Viewport,
    page::{self, Page},
    report::Report,
};

/// A block with a rounded border
const ROUNDED_BLOCK: Block = Block::bordered().border_type(BorderType::Rounded);

/// An app message
#[derive(Debug)]
pub enum Message {
    /// The current text was typed to the end
    Finished(Statistics),
    /// Type the current text again
    Retry,
    /// Move on to the next text
    Next,
    /// Quit the application
    Quit,
}

/// The app itself
pub struct App {
    settings: Settings,
    theme: Theme,
    texts: Vec<String>,
    current: usize,
    minimal: bool,
    screen: Rect,
    reports: Vec<Report>,
}

impl App {
    /// Creates a new `App` for typing `texts` in order
    pub fn new(settings: Settings, texts: Vec<String>, minimal: bool) -> Self {
        Self {
            theme: Theme::from(settings.theme),
            settings,
            texts,
            current: 0,
            minimal,
            screen: Rect::default(),
            reports: vec![],
        }
    }

    /// Runs the app until every text is done or the user quits
    ///
    /// Returns a report for every finished attempt.
    pub fn run<B: Backend>(
        mut self,
        terminal: &mut Terminal<B>,
        events: &Events,
    ) -> Result<Vec<Report>, AppError> {
        let size = terminal.size()?;
        self.screen = Rect::new(0, 0, size.width, size.height);

        let sender = events.sender();
        let Some(mut page) = self.open_session() else {
            return Ok(self.reports);
        };

        loop {
            terminal.draw(|frame| self.draw(frame, &page))?;

            let message = match events.next() {
                AppEvent::Key(key) if key.is_ctrl_press('c') => Some(Message::Quit),
                AppEvent::Key(key) if key.is_press() => {
                    page.handle_key(&key, &self.settings, &sender)
                }
                AppEvent::Key(_) | AppEvent::Tick => None,
                AppEvent::Resize => {
                    self.handle_resize(terminal.size(), &mut page);
                    None
                }
                AppEvent::Failed(error) => return Err(error.into()),
            };

            let next_page = match message {
                None => continue,
                Some(Message::Finished(statistics)) => self.finish(statistics),
                Some(Message::Retry) => self.open_session(),
                Some(Message::Next) => {
                    self.current += 1;
                    self.open_session()
                }
                Some(Message::Quit) => {
                    tracing::info!("quit");
                    None
                }
            };

            match next_page {
                Some(next_page) => page = next_page,
                None => break,
            }
        }

        Ok(self.reports)
    }

    /// Record a finished attempt and decide what comes next
    fn finish(&mut self, statistics: Statistics) -> Option<Page> {
        self.reports.push(Report::new(statistics));

        if self.minimal {
            self.current += 1;
            return self.open_session();
        }

        Some(page::Results::new(statistics, self.has_next()).into())
    }

    const fn has_next(&self) -> bool {
        self.current + 1 < self.texts.len()
    }

    /// A typing page for the current text, skipping texts that can't be typed
    fn open_session(&mut self) -> Option<Page> {
        let viewport = Viewport::new(self.screen);

        while let Some(text) = self.texts.get(self.current) {
            if let Some(session) = page::Session::new(text, &viewport, &self.settings) {
                tracing::info!(
                    text = self.current + 1,
                    of = self.texts.len(),
                    characters = text.chars().count(),
                    "starting attempt"
                );
                return Some(session.into());
            }

            tracing::warn!(text = self.current + 1, "skipping empty text");
            self.current += 1;
        }

        None
    }

    fn handle_resize(&mut self, size: std::io::Result<Size>, page: &mut Page) {
        match size {
            Ok(size) => {
                self.screen = Rect::new(0, 0, size.width, size.height);
                page.resize(&Viewport::new(self.screen));
                tracing::debug!(width = size.width, height = size.height, "terminal resized");
            }
            Err(error) => {
                tracing::warn!(
                    %error,
                    "failed to query terminal size, keeping the previous layout"
                );
            }
        }
    }

    /// Draws the next frame
    fn draw(&self, frame: &mut Frame, page: &Page) {
        let area = frame.area();
        frame.render_widget(Block::new().style(self.theme.base()), area);

        let viewport = Viewport::new(self.screen).fit_to(page.content_height());

        let block = ROUNDED_BLOCK
            .style(self.theme.base())
            .title_top("TYPECLIP".to_line().bold().centered())
            .title_top("<CTRL-C> to exit".to_line().right_aligned());

        frame.render_widget(block, viewport.outer.intersection(area));

        page.render(frame, &viewport, &self.theme);
    }
}

#[cfg(test)]
mod tests {
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use ratatui::backend::TestBackend;

    use super::*;

    fn terminal() -> Terminal<TestBackend> {
        Terminal::new(TestBackend::new(80, 24)).unwrap()
    }

    fn send_keys(events: &Events, keys: &str) {
        let sender = events.sender();
        for char in keys.chars() {
            let code = match char {
                '\r' => KeyCode::Enter,
                char => KeyCode::Char(char),
            };
            sender
                .send(AppEvent::Key(KeyEvent::new(code, KeyModifiers::NONE)))
                .unwrap();
        }
    }

    fn app(texts: &[&str], minimal: bool) -> App {
        let texts = texts.iter().map(ToString::to_string).collect();
        App::new(Settings::default(), texts, minimal)
    }

    #[test]
    fn test_minimal_runs_every_text() {
        let events = Events::new();
        send_keys(&events, "ab cdxx");

        let reports = app(&["ab cd", "xx"], true)
            .run(&mut terminal(), &events)
            .unwrap();

        assert_eq!(reports.len(), 2);
        assert_eq!(reports[0].statistics.accuracy_text(), "100.00%");
    }

    #[test]
    fn test_exit_from_results() {
        let events = Events::new();
        // Type with one mistake, then pick the first menu entry (Exit)
        send_keys(&events, "hx\r");

        let reports = app(&["hi"], false).run(&mut terminal(), &events).unwrap();

        assert_eq!(reports.len(), 1);
        assert_eq!(reports[0].statistics.accuracy_text(), "50.00%");
    }

    #[test]
    fn test_retry_then_next() {
        let events = Events::new();
        // First attempt, retry, second attempt, next, the other text, exit
        send_keys(&events, "hijj\rhi\rok\r");

        let reports = app(&["hi", "ok"], false)
            .run(&mut terminal(), &events)
            .unwrap();

        assert_eq!(reports.len(), 3);
    }

    #[test]
    fn test_ctrl_c_quits() {
        let events = Events::new();
        send_keys(&events, "h");
        events
            .sender()
            .send(AppEvent::Key(KeyEvent::new(
                KeyCode::Char('c'),
                KeyModifiers::CONTROL,
            )))
            .unwrap();

        let reports = app(&["hello", "world"], false)
            .run(&mut terminal(), &events)
            .unwrap();

        assert!(reports.is_empty());
    }

    #[test]
    fn test_input_failure() {
        let events = Events::new();
        events
            .sender()
            .send(AppEvent::Failed(std::io::ErrorKind::UnexpectedEof.into()))
            .unwrap();

        let result = app(&["hello"], false).run(&mut terminal(), &events);
        assert!(matches!(result, Err(AppError::Terminal(_))));
    }

    #[test]
    fn test_resize_failure_keeps_layout() {
        let mut app = app(&["hello"], false);
        app.screen = Rect::new(0, 0, 80, 24);
        let mut page = app.open_session().unwrap();

        app.handle_resize(Err(std::io::ErrorKind::Other.into()), &mut page);
        assert_eq!(app.screen, Rect::new(0, 0, 80, 24));

        app.handle_resize(Ok(Size::new(40, 12)), &mut page);
        assert_eq!(app.screen, Rect::new(0, 0, 40, 12));
    }

    #[test]
    fn test_resize_keeps_progress() {
        let events = Events::new();
        send_keys(&events, "hel");
        events.sender().send(AppEvent::Resize).unwrap();
        send_keys(&events, "lo\r");

        let mut terminal = terminal();
        let reports = app(&["hello"], false).run(&mut terminal, &events).unwrap();

        assert_eq!(reports.len(), 1);
        assert_eq!(reports[0].statistics.accuracy_text(), "100.00%");
    }
}
