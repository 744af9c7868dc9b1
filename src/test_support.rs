//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use std::collections::VecDeque;
use std::io::{self, Read};

use ratatui::Terminal;
use ratatui::backend::TestBackend;
use ratatui::buffer::Buffer;

use crate::core::state::TaskStore;
use crate::core::task::Task;
use crate::tui::event::{KeySource, TuiEvent};
use crate::tui::ui::{Screen, View, draw_ui};

/// A store holding `texts` as `Todo` tasks, cursor on the first.
pub fn store_with(texts: &[&str]) -> TaskStore {
    TaskStore::from_tasks(texts.iter().map(|text| Task::new(*text)).collect())
}

/// Rows of a rendered buffer with trailing blanks trimmed.
pub fn buffer_lines(buffer: &Buffer) -> Vec<String> {
    let area = buffer.area;
    (area.top()..area.bottom())
        .map(|y| {
            let row: String = (area.left()..area.right())
                .map(|x| buffer[(x, y)].symbol())
                .collect();
            row.trim_end().to_string()
        })
        .collect()
}

/// Key source that replays a fixed script, then fails like a closed stdin.
pub struct ScriptedKeys {
    events: VecDeque<TuiEvent>,
    pub raw: bool,
    pub releases: usize,
    pub reacquires: usize,
    pub fail_reacquire: bool,
}

impl ScriptedKeys {
    pub fn new(events: Vec<TuiEvent>) -> Self {
        Self {
            events: events.into(),
            raw: true,
            releases: 0,
            reacquires: 0,
            fail_reacquire: false,
        }
    }

    /// Shorthand for a script of plain character presses.
    pub fn chars(keys: &str) -> Self {
        Self::new(keys.chars().map(TuiEvent::InputChar).collect())
    }
}

impl KeySource for ScriptedKeys {
    fn next_event(&mut self) -> io::Result<TuiEvent> {
        self.events
            .pop_front()
            .ok_or_else(|| io::Error::new(io::ErrorKind::UnexpectedEof, "key script exhausted"))
    }

    fn release(&mut self) -> io::Result<()> {
        self.releases += 1;
        self.raw = false;
        Ok(())
    }

    fn reacquire(&mut self) -> io::Result<()> {
        self.reacquires += 1;
        if self.fail_reacquire {
            return Err(io::Error::other("terminal gone"));
        }
        self.raw = true;
        Ok(())
    }
}

/// Screen that draws into a `TestBackend` and keeps every frame's text.
pub struct TestScreen {
    terminal: Terminal<TestBackend>,
    pub frames: Vec<Vec<String>>,
    pub cursor_visible: bool,
    pub cursor_toggles: Vec<bool>,
}

impl TestScreen {
    pub fn new() -> Self {
        Self {
            terminal: Terminal::new(TestBackend::new(100, 16)).unwrap(),
            frames: Vec::new(),
            cursor_visible: false,
            cursor_toggles: Vec::new(),
        }
    }

    pub fn last_frame(&self) -> &[String] {
        self.frames.last().map(Vec::as_slice).unwrap_or_default()
    }
}

impl Screen for TestScreen {
    fn render(&mut self, view: &View) -> io::Result<()> {
        self.terminal.draw(|f| draw_ui(f, view)).unwrap();
        self.frames
            .push(buffer_lines(self.terminal.backend().buffer()));
        Ok(())
    }

    fn set_cursor_visible(&mut self, visible: bool) -> io::Result<()> {
        self.cursor_visible = visible;
        self.cursor_toggles.push(visible);
        Ok(())
    }
}

/// Reader whose every read fails.
pub struct FailingReader;

impl Read for FailingReader {
    fn read(&mut self, _buf: &mut [u8]) -> io::Result<usize> {
        Err(io::Error::other("stdin closed"))
    }
}
