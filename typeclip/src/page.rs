use std::sync::mpsc::Sender;

use crossterm::event::KeyEvent;
use ratatui::Frame;

pub mod results;
pub mod session;

pub use results::Results;
pub use session::Session;

use crate::{
    app::Message,
    config::{Settings, Theme},
    events::AppEvent,
    geometry::Viewport,
};

macro_rules! make_page_enum {
    ($($t:tt),*) => {
        pub enum Page {
            $(
                $t(Box<$t>),
            )*
        }

        $(
            impl From<$t> for Page {
                fn from(value: $t) -> Page {
                    Page::$t(Box::new(value))
                }
            }
        )*
    };
}

make_page_enum!(Session, Results);

impl Page {
    pub fn render(&self, frame: &mut Frame, viewport: &Viewport, theme: &Theme) {
        match self {
            Self::Session(page) => page.render(frame, viewport, theme),
            Self::Results(page) => page.render(frame, viewport, theme),
        }
    }

    pub fn handle_key(
        &mut self,
        key: &KeyEvent,
        settings: &Settings,
        events: &Sender<AppEvent>,
    ) -> Option<Message> {
        match self {
            Self::Session(page) => page.handle_key(key, settings, events),
            Self::Results(page) => page.handle_key(key),
        }
    }

    /// Lay the page out for a new viewport
    pub fn resize(&mut self, viewport: &Viewport) {
        match self {
            Self::Session(page) => page.resize(viewport),
            Self::Results(_) => (),
        }
    }

    /// Rows of text the page needs
    pub fn content_height(&self) -> usize {
        match self {
            Self::Session(page) => page.content_height(),
            Self::Results(page) => page.content_height(),
        }
    }
}
