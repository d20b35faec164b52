use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    Frame,
    text::{Line, Span},
    widgets::Paragraph,
};
use stenograph::Statistics;
use strum::Display;

use crate::{app::Message, config::Theme, geometry::Viewport};

/// Rows above the menu
const MENU_OFFSET: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum Choice {
    Next,
    Exit,
    Retry,
}

/// Page: Results of a finished attempt
#[derive(Debug)]
pub struct Results {
    statistics: Statistics,
    choices: Vec<Choice>,
    selected: usize,
}

impl Results {
    /// Creates a new results page. `Next` is only offered if another text follows
    pub fn new(statistics: Statistics, has_next: bool) -> Self {
        let choices = if has_next {
            vec![Choice::Next, Choice::Exit, Choice::Retry]
        } else {
            vec![Choice::Exit, Choice::Retry]
        };

        Self {
            statistics,
            choices,
            selected: 0,
        }
    }

    pub fn selected(&self) -> Choice {
        self.choices[self.selected]
    }

    pub fn content_height(&self) -> usize {
        MENU_OFFSET + self.choices.len()
    }
}

// Rendering logic
impl Results {
    pub fn render(&self, frame: &mut Frame, viewport: &Viewport, theme: &Theme) {
        let stats = &self.statistics;

        let mut lines = vec![
            Line::raw(format!("WPM: {}", stats.wpm.map_or(0, |wpm| wpm.0))),
            Line::raw(format!("Time: {}", stats.elapsed)),
            Line::raw(format!("Accuracy: {}", stats.accuracy_text())),
        ];
        lines.resize(MENU_OFFSET, Line::default());

        lines.extend(self.choices.iter().enumerate().map(|(i, choice)| {
            if i == self.selected {
                let label = format!("›  {choice}");
                Line::from(Span::styled(format!("{label:<10}"), theme.reverse()))
            } else {
                Line::raw(format!("   {choice}"))
            }
        }));

        let area = viewport.text.intersection(frame.area());
        frame.render_widget(Paragraph::new(lines).style(theme.base()), area);
    }
}

// Event handling
impl Results {
    pub fn handle_key(&mut self, key: &KeyEvent) -> Option<Message> {
        match key.code {
            KeyCode::Down | KeyCode::Char('j') => {
                self.selected = (self.selected + 1).min(self.choices.len() - 1);
            }
            KeyCode::Up | KeyCode::Char('k') => {
                self.selected = self.selected.saturating_sub(1);
            }
            KeyCode::Enter => {
                tracing::debug!(choice = %self.selected(), "result menu");
                return Some(match self.selected() {
                    Choice::Next => Message::Next,
                    Choice::Exit => Message::Quit,
                    Choice::Retry => Message::Retry,
                });
            }
            _ => (),
        }

        None
    }
}
