//! # Task Store
//!
//! The in-memory task list and the cursor that selects one of its entries.
//!
//! ```text
//! TaskStore
//! ├── tasks: Vec<Task>   // display order, persisted
//! └── cursor: usize      // selected index, never persisted
//! ```
//!
//! When `tasks` is non-empty, `cursor < tasks.len()`. When it is empty the
//! cursor is 0 and does not point at anything, so every operation checks
//! bounds before touching `tasks[cursor]`.
//!
//! Mutations never fail. Acting on nothing (empty list, blank text) is a
//! silent no-op.

use crate::core::task::{Status, Task};

/// Number of tasks in each status.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StatusCounts {
    pub todo: usize,
    pub seen: usize,
    pub done: usize,
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct TaskStore {
    tasks: Vec<Task>,
    cursor: usize,
}

impl TaskStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Wraps a freshly loaded list with the cursor on the first task.
    pub fn from_tasks(tasks: Vec<Task>) -> Self {
        Self { tasks, cursor: 0 }
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// The task under the cursor, if any.
    pub fn current(&self) -> Option<&Task> {
        self.tasks.get(self.cursor)
    }

    pub fn counts(&self) -> StatusCounts {
        self.tasks
            .iter()
            .fold(StatusCounts::default(), |mut counts, task| {
                match task.status() {
                    Status::Todo => counts.todo += 1,
                    Status::Seen => counts.seen += 1,
                    Status::Done => counts.done += 1,
                }
                counts
            })
    }

    /// Appends a `Todo` task and selects it. Blank text is ignored.
    pub fn add_task(&mut self, text: &str) {
        let text = text.trim();
        if text.is_empty() {
            return;
        }
        self.tasks.push(Task::new(text));
        self.cursor = self.tasks.len() - 1;
    }

    /// Removes the selected task.
    ///
    /// The cursor keeps its index, so the following task becomes current.
    /// It only moves when it would point past the end of the shorter list.
    pub fn delete_current_task(&mut self) {
        if self.cursor >= self.tasks.len() {
            return;
        }
        self.tasks.remove(self.cursor);

        if self.tasks.is_empty() {
            self.cursor = 0;
        } else if self.cursor >= self.tasks.len() {
            self.cursor = self.tasks.len() - 1;
        }
    }

    pub fn move_cursor_up(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn move_cursor_down(&mut self) {
        if self.cursor + 1 < self.tasks.len() {
            self.cursor += 1;
        }
    }

    pub fn cycle_status_forward(&mut self) {
        if let Some(task) = self.tasks.get_mut(self.cursor) {
            task.advance();
        }
    }

    pub fn cycle_status_backward(&mut self) {
        if let Some(task) = self.tasks.get_mut(self.cursor) {
            task.regress();
        }
    }
}
