//! # Tasks
//!
//! A `Task` is a line of text plus a progress `Status`. Tasks have no id:
//! their position in the store is their identity.
//!
//! ```text
//! Todo ──next──▶ Seen ──next──▶ Done
//!      ◀──prev──      ◀──prev──
//! ```
//!
//! The chain does not wrap. Stepping past either end leaves the status alone.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    #[default]
    Todo,
    Seen,
    Done,
}

impl Status {
    /// One step forward, saturating at `Done`.
    pub fn next(self) -> Self {
        match self {
            Status::Todo => Status::Seen,
            Status::Seen | Status::Done => Status::Done,
        }
    }

    /// One step backward, saturating at `Todo`.
    pub fn prev(self) -> Self {
        match self {
            Status::Done => Status::Seen,
            Status::Seen | Status::Todo => Status::Todo,
        }
    }

    /// Checkbox glyph shown in the task list.
    pub fn glyph(self) -> &'static str {
        match self {
            Status::Todo => "[ ]",
            Status::Seen => "[~]",
            Status::Done => "[✓]",
        }
    }
}

/// Text is fixed at creation. Status moves only through the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    text: String,
    status: Status,
}

impl Task {
    pub(crate) fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            status: Status::Todo,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn status(&self) -> Status {
        self.status
    }

    pub(crate) fn advance(&mut self) {
        self.status = self.status.next();
    }

    pub(crate) fn regress(&mut self) {
        self.status = self.status.prev();
    }
}
