use std::io;
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::terminal::{disable_raw_mode, enable_raw_mode};
use log::{debug, info, warn};

/// TUI-specific input events
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TuiEvent {
    InputChar(char),
    Escape,
    ForceQuit, // Ctrl+C: raw mode swallows SIGINT
    CursorUp,
    CursorDown,
    /// Unbound key, modified char, or resize: nothing to do but draw again.
    Redraw,
}

/// Translate a key press into a `TuiEvent`.
///
/// Only plain or shifted characters are input. Any other modifier on a
/// character (Ctrl+X, Alt+Q) is unbound, except Ctrl+C.
pub fn map_key(key: KeyEvent) -> TuiEvent {
    match (key.modifiers, key.code) {
        (KeyModifiers::CONTROL, KeyCode::Char('c')) => TuiEvent::ForceQuit,
        (KeyModifiers::NONE | KeyModifiers::SHIFT, KeyCode::Char(c)) => TuiEvent::InputChar(c),
        (_, KeyCode::Char(_)) => TuiEvent::Redraw,
        (_, KeyCode::Esc) => TuiEvent::Escape,
        (_, KeyCode::Up) => TuiEvent::CursorUp,
        (_, KeyCode::Down) => TuiEvent::CursorDown,
        _ => TuiEvent::Redraw,
    }
}

/// Translate a raw terminal event. Returns `None` for events that should
/// not wake the loop (key releases, repeats, focus, mouse).
pub fn map_event(event: Event) -> Option<TuiEvent> {
    match event {
        Event::Key(key) if key.kind == KeyEventKind::Press => {
            debug!("Key event: {:?} with modifiers {:?}", key.code, key.modifiers);
            Some(map_key(key))
        }
        Event::Resize(..) => Some(TuiEvent::Redraw),
        _ => None,
    }
}

/// Discard everything `next_pending` yields until it reports nothing left.
/// Returns how many events were dropped.
pub fn drain_pending<F>(mut next_pending: F) -> io::Result<usize>
where
    F: FnMut() -> io::Result<Option<Event>>,
{
    let mut dropped = 0;
    while next_pending()?.is_some() {
        dropped += 1;
    }
    Ok(dropped)
}

/// Source of single-key events.
///
/// While acquired, keys arrive one at a time without echo or line
/// buffering. `release` hands the terminal back to ordinary line input
/// until `reacquire` is called.
pub trait KeySource {
    /// Block until the next event. There is no timeout.
    fn next_event(&mut self) -> io::Result<TuiEvent>;
    fn release(&mut self) -> io::Result<()>;
    fn reacquire(&mut self) -> io::Result<()>;
}

/// Keyboard backed by crossterm raw mode. Raw mode is left on drop.
pub struct RawKeyboard {
    raw: bool,
}

impl RawKeyboard {
    pub fn open() -> io::Result<Self> {
        enable_raw_mode()?;
        info!("Raw keyboard mode enabled");
        Ok(Self { raw: true })
    }
}

impl KeySource for RawKeyboard {
    fn next_event(&mut self) -> io::Result<TuiEvent> {
        loop {
            if let Some(event) = map_event(event::read()?) {
                return Ok(event);
            }
        }
    }

    fn release(&mut self) -> io::Result<()> {
        // Keys typed right after the prompt key would otherwise sit in
        // crossterm's queue and come back as commands after the prompt.
        let pending = drain_pending(|| {
            if event::poll(Duration::ZERO)? {
                event::read().map(Some)
            } else {
                Ok(None)
            }
        });
        match pending {
            Ok(0) => {}
            Ok(dropped) => debug!("Discarded {} pending events before line input", dropped),
            Err(e) => warn!("Failed to drain pending events: {}", e),
        }
        disable_raw_mode()?;
        self.raw = false;
        Ok(())
    }

    fn reacquire(&mut self) -> io::Result<()> {
        enable_raw_mode()?;
        self.raw = true;
        Ok(())
    }
}

impl Drop for RawKeyboard {
    fn drop(&mut self) {
        if self.raw {
            let _ = disable_raw_mode();
            info!("Raw keyboard mode disabled");
        }
    }
}
