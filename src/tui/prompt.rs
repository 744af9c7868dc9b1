//! # New-Task Prompt
//!
//! The main loop reads single keys, but a task's text is typed as a whole
//! line. `LineMode` switches the terminal over for the duration of one
//! read:
//!
//! ```text
//! key mode ──enter()──▶ line mode ──drop──▶ key mode
//!  (raw, cursor hidden)   (cooked, cursor shown)
//! ```
//!
//! Restoration happens in `Drop`, so it runs however the read ends.

use std::io::BufRead;

use log::{info, warn};

use crate::core::state::TaskStore;
use crate::tui::event::KeySource;
use crate::tui::ui::{Screen, View};

pub const PROMPT_LABEL: &str = "Enter new task: ";

/// Scoped switch from single-key mode to line input.
pub struct LineMode<'a, K: KeySource, S: Screen> {
    keys: &'a mut K,
    screen: &'a mut S,
}

impl<'a, K: KeySource, S: Screen> LineMode<'a, K, S> {
    /// Release the key source and show the text cursor.
    ///
    /// Failures are logged rather than returned: the guard exists either
    /// way, so key mode is always restored on drop.
    pub fn enter(keys: &'a mut K, screen: &'a mut S) -> Self {
        let mode = Self { keys, screen };
        if let Err(e) = mode.keys.release() {
            warn!("Failed to release key mode: {}", e);
        }
        if let Err(e) = mode.screen.set_cursor_visible(true) {
            warn!("Failed to show cursor: {}", e);
        }
        info!("Switched to line input");
        mode
    }
}

impl<K: KeySource, S: Screen> Drop for LineMode<'_, K, S> {
    fn drop(&mut self) {
        if let Err(e) = self.screen.set_cursor_visible(false) {
            warn!("Failed to hide cursor: {}", e);
        }
        // Nothing better to do if this fails; the next key read reports it.
        if let Err(e) = self.keys.reacquire() {
            warn!("Failed to reacquire key mode: {}", e);
        }
        info!("Switched back to key input");
    }
}

/// Show the prompt, read one line, and return it trimmed.
///
/// A failed read yields an empty string, which the store ignores.
pub fn read_new_task<K: KeySource, S: Screen, R: BufRead>(
    keys: &mut K,
    screen: &mut S,
    input: &mut R,
    store: &TaskStore,
) -> String {
    let view = View {
        store,
        status_message: None,
        prompt: Some(PROMPT_LABEL),
    };
    if let Err(e) = screen.render(&view) {
        warn!("Failed to draw prompt: {}", e);
    }

    let _line_mode = LineMode::enter(keys, screen);
    let mut line = String::new();
    match input.read_line(&mut line) {
        Ok(_) => line.trim().to_string(),
        Err(e) => {
            warn!("Failed to read task text: {}", e);
            String::new()
        }
    }
}
