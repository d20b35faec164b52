use std::sync::mpsc::{self, Receiver, RecvTimeoutError, Sender};
use std::thread::JoinHandle;
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use stenograph::Input;

/// Unified event type consumed by the app loop
#[derive(Debug)]
pub enum AppEvent {
    Key(KeyEvent),
    /// The terminal changed size. The new size is queried when the event is handled
    Resize,
    /// Time to refresh the status bar
    Tick,
    /// The terminal input could not be read anymore
    Failed(std::io::Error),
}

/// The event queue of the app
///
/// Everything that wants the main loop's attention sends an [AppEvent] through here: the terminal
/// reader thread, the status ticker, and tests.
pub struct Events {
    tx: Sender<AppEvent>,
    rx: Receiver<AppEvent>,
}

impl Events {
    /// A queue without any producers attached
    pub fn new() -> Self {
        let (tx, rx) = mpsc::channel();
        Self { tx, rx }
    }

    /// A queue fed by a thread reading the terminal
    pub fn crossterm() -> Self {
        let events = Self::new();
        let tx = events.sender();

        std::thread::spawn(move || {
            loop {
                let event = match event::read() {
                    Ok(Event::Key(key)) => AppEvent::Key(key),
                    Ok(Event::Resize(_, _)) => AppEvent::Resize,
                    Ok(_) => continue,
                    Err(error) => {
                        tracing::error!(%error, "failed to read terminal input");
                        let _ = tx.send(AppEvent::Failed(error));
                        break;
                    }
                };

                if tx.send(event).is_err() {
                    break;
                }
            }
        });

        events
    }

    pub fn sender(&self) -> Sender<AppEvent> {
        self.tx.clone()
    }

    /// Block until the next event arrives
    pub fn next(&self) -> AppEvent {
        // `self` holds a sender, so the channel never disconnects
        self.rx
            .recv()
            .unwrap_or_else(|_| AppEvent::Failed(std::io::ErrorKind::BrokenPipe.into()))
    }

    /// Wait up to `timeout` for the next event
    #[cfg(test)]
    pub fn next_timeout(&self, timeout: Duration) -> Option<AppEvent> {
        match self.rx.recv_timeout(timeout) {
            Ok(event) => Some(event),
            Err(RecvTimeoutError::Timeout | RecvTimeoutError::Disconnected) => None,
        }
    }
}

impl Default for Events {
    fn default() -> Self {
        Self::new()
    }
}

/// Sends [AppEvent::Tick] at a fixed interval until stopped or dropped
pub struct StatusTicker {
    stop: Option<Sender<()>>,
    handle: Option<JoinHandle<()>>,
}

impl StatusTicker {
    pub fn start(events: Sender<AppEvent>, interval: Duration) -> Self {
        let (stop, stopped) = mpsc::channel::<()>();

        let handle = std::thread::spawn(move || {
            while let Err(RecvTimeoutError::Timeout) = stopped.recv_timeout(interval) {
                if events.send(AppEvent::Tick).is_err() {
                    break;
                }
            }
        });

        Self {
            stop: Some(stop),
            handle: Some(handle),
        }
    }

    /// Stop ticking. No tick is sent after this returns
    pub fn stop(&mut self) {
        // Dropping the sender wakes the thread up
        self.stop.take();

        if let Some(handle) = self.handle.take()
            && handle.join().is_err()
        {
            tracing::warn!("status ticker panicked");
        }
    }

    #[cfg(test)]
    pub const fn is_running(&self) -> bool {
        self.handle.is_some()
    }
}

impl Drop for StatusTicker {
    fn drop(&mut self) {
        self.stop();
    }
}

/// Helpers for reading key events
pub trait KeyPress {
    /// Returns true if the key went down, as opposed to repeating or being released
    fn is_press(&self) -> bool;

    /// Returns true if `character` was pressed while holding CTRL
    fn is_ctrl_press(&self, character: char) -> bool;
}

impl KeyPress for KeyEvent {
    fn is_press(&self) -> bool {
        self.kind == KeyEventKind::Press
    }

    fn is_ctrl_press(&self, character: char) -> bool {
        self.is_press()
            && self.modifiers.contains(KeyModifiers::CONTROL)
            && self.code == KeyCode::Char(character)
    }
}

/// Translate a key press into typing input
pub fn key_to_input(key: &KeyEvent) -> Input {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    let alt = key.modifiers.contains(KeyModifiers::ALT);

    match key.code {
        KeyCode::Backspace if ctrl || alt => Input::DeleteWord,
        KeyCode::Backspace => Input::Backspace,
        KeyCode::Char('w') if ctrl => Input::DeleteWord,
        KeyCode::Char(_) if ctrl || alt => Input::Ignore,
        KeyCode::Char(char) => Input::Char(char),
        KeyCode::Enter => Input::Char('\n'),
        KeyCode::Tab => Input::Char('\t'),
        _ => Input::Ignore,
    }
}
