//! # TaskList Component
//!
//! Renders the store's tasks in order, or a hint when there are none.
//!
//! ```text
//! Tasks (3 total):
//!
//!   [✓] Install toolchain
//! ▶ [~] Read the book
//!   [ ] Write a CLI
//! ```
//!
//! Rows are a ratatui `List` so a long list scrolls to keep the cursor
//! visible. The cursor marker is part of the row text rather than the
//! list's highlight symbol, which keeps every row the same width.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{List, ListItem, ListState, Paragraph};

use crate::core::state::TaskStore;
use crate::core::task::{Status, Task};
use crate::tui::component::Component;

pub const EMPTY_HINT: &str = "No tasks. Press 'n' to add a new task.";
const CURSOR_MARKER: &str = "▶ ";
const NO_MARKER: &str = "  ";

pub struct TaskList<'a> {
    store: &'a TaskStore,
}

impl<'a> TaskList<'a> {
    pub fn new(store: &'a TaskStore) -> Self {
        Self { store }
    }
}

/// `"Tasks (N total):"`
pub fn count_header(total: usize) -> String {
    format!("Tasks ({total} total):")
}

/// One task row: marker, glyph, text.
pub fn task_line(task: &Task, selected: bool) -> Line<'_> {
    let marker = if selected { CURSOR_MARKER } else { NO_MARKER };
    let style = match (selected, task.status()) {
        (true, _) => Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        (false, Status::Done) => Style::default().add_modifier(Modifier::DIM),
        (false, _) => Style::default(),
    };
    Line::from(vec![
        Span::raw(marker),
        Span::raw(task.status().glyph()),
        Span::raw(" "),
        Span::raw(task.text()),
    ])
    .style(style)
}

impl Component for TaskList<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        if self.store.is_empty() {
            frame.render_widget(Paragraph::new(EMPTY_HINT), area);
            return;
        }

        // Header line plus one blank line before the rows
        let [header_area, rows_area] =
            Layout::vertical([Constraint::Length(2), Constraint::Min(0)]).areas(area);
        frame.render_widget(
            Paragraph::new(count_header(self.store.len())),
            header_area,
        );

        let cursor = self.store.cursor();
        let items: Vec<ListItem> = self
            .store
            .tasks()
            .iter()
            .enumerate()
            .map(|(index, task)| ListItem::new(task_line(task, index == cursor)))
            .collect();

        let mut state = ListState::default().with_selected(Some(cursor));
        frame.render_stateful_widget(List::new(items), rows_area, &mut state);
    }
}
