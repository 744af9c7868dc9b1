//! # Actions
//!
//! Every command the user can give becomes an `Action`.
//! Pressing `f`? That's `Action::CycleForward`.
//! Typing a new task and hitting Enter? That's `Action::AddTask(text)`.
//!
//! `update()` applies an action to the store and returns an `Effect`
//! telling the caller what to do next. No I/O happens here: saving the file
//! and leaving the loop are the caller's job.
//!
//! ```text
//! TaskStore + Action  →  update()  →  Effect
//! ```

use log::debug;

use crate::core::state::TaskStore;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Quit,
    CursorUp,
    CursorDown,
    CycleForward,
    CycleBackward,
    AddTask(String),
    DeleteTask,
}

/// Follow-up work the caller owes after an `update()`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    None,
    /// The task list may have changed and should be written out.
    Save,
    Quit,
}

pub fn update(store: &mut TaskStore, action: Action) -> Effect {
    debug!("update: {:?}", action);
    match action {
        Action::Quit => Effect::Quit,
        Action::CursorUp => {
            store.move_cursor_up();
            Effect::None
        }
        Action::CursorDown => {
            store.move_cursor_down();
            Effect::None
        }
        Action::CycleForward => {
            store.cycle_status_forward();
            Effect::Save
        }
        Action::CycleBackward => {
            store.cycle_status_backward();
            Effect::Save
        }
        Action::AddTask(text) => {
            store.add_task(&text);
            Effect::Save
        }
        Action::DeleteTask => {
            store.delete_current_task();
            Effect::Save
        }
    }
}
