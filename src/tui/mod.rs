//! # TUI Adapter
//!
//! The ratatui/crossterm layer. Renders the store, blocks for one key,
//! translates it into a `core::action::Action`, and persists the task file
//! whenever the reducer asks for it.
//!
//! ## Loop
//!
//! ```text
//! Running ──any key but quit──▶ Running
//! Running ──quit key / key read error──▶ Terminating ──final save──▶ exit
//! ```
//!
//! There is no timeout and no background work: the loop sleeps inside
//! `KeySource::next_event` until a key arrives.
//!
//! ## Terminal ownership
//!
//! Raw mode belongs to `RawKeyboard`, the alternate screen and hidden
//! cursor to `TerminalModeGuard`. Both restore the terminal on drop, and a
//! panic hook does the same if the loop panics. The new-task prompt hands
//! raw mode back temporarily through `prompt::LineMode`.

mod component;
mod components;
pub mod event;
pub mod prompt;
pub mod ui;

use log::{info, warn};
use std::io::{self, BufRead, stdout};
use std::path::Path;

use crossterm::cursor::{Hide, Show};
use crossterm::execute;
use crossterm::terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;

use crate::core::action::{Action, Effect, update};
use crate::core::state::TaskStore;
use crate::core::storage::{self, StorageError};
use crate::tui::event::{KeySource, RawKeyboard, TuiEvent};
use crate::tui::ui::{Screen, View};

/// TUI-specific presentation state (not part of the task store)
#[derive(Debug, Default)]
pub struct TuiState {
    /// Last save failure, shown on the bottom row until the next good save.
    pub status_message: Option<String>,
}

/// Why the loop stopped.
#[derive(Debug)]
pub enum LoopExit {
    Quit,
    KeyReadFailed(io::Error),
}

/// What a key asks the controller to do.
#[derive(Debug, PartialEq, Eq)]
enum Dispatch {
    Apply(Action),
    PromptNewTask,
    Ignore,
}

fn dispatch(event: &TuiEvent) -> Dispatch {
    match event {
        TuiEvent::InputChar('q') | TuiEvent::Escape | TuiEvent::ForceQuit => {
            Dispatch::Apply(Action::Quit)
        }
        TuiEvent::InputChar('e') | TuiEvent::CursorUp => Dispatch::Apply(Action::CursorUp),
        TuiEvent::InputChar('d') | TuiEvent::CursorDown => Dispatch::Apply(Action::CursorDown),
        TuiEvent::InputChar('f') => Dispatch::Apply(Action::CycleForward),
        TuiEvent::InputChar('s') => Dispatch::Apply(Action::CycleBackward),
        TuiEvent::InputChar('n') => Dispatch::PromptNewTask,
        TuiEvent::InputChar('x') => Dispatch::Apply(Action::DeleteTask),
        _ => Dispatch::Ignore,
    }
}

/// Save the task list, recording a failure in the status line.
fn persist(store: &TaskStore, path: &Path, tui: &mut TuiState) {
    match storage::save(path, store.tasks()) {
        Ok(()) => tui.status_message = None,
        Err(e) => {
            warn!("Failed to save tasks: {}", e);
            tui.status_message = Some(format!("Error saving tasks: {e}"));
        }
    }
}

/// Run the render → read → dispatch loop until a quit key or a key read
/// failure. Render failures are returned as errors.
pub fn event_loop<K: KeySource, S: Screen, R: BufRead>(
    store: &mut TaskStore,
    path: &Path,
    keys: &mut K,
    screen: &mut S,
    input: &mut R,
) -> io::Result<LoopExit> {
    let mut tui = TuiState::default();

    loop {
        screen.render(&View {
            store,
            status_message: tui.status_message.as_deref(),
            prompt: None,
        })?;

        let event = match keys.next_event() {
            Ok(event) => event,
            Err(e) => {
                warn!("Key read failed: {}", e);
                return Ok(LoopExit::KeyReadFailed(e));
            }
        };

        let action = match dispatch(&event) {
            Dispatch::Apply(action) => action,
            Dispatch::PromptNewTask => {
                Action::AddTask(prompt::read_new_task(keys, screen, input, store))
            }
            Dispatch::Ignore => continue,
        };

        match update(store, action) {
            Effect::Quit => {
                info!("Quit requested");
                return Ok(LoopExit::Quit);
            }
            Effect::Save => persist(store, path, &mut tui),
            Effect::None => {}
        }
    }
}

/// Alternate screen with a hidden cursor, restored on drop.
struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> io::Result<Self> {
        execute!(stdout(), EnterAlternateScreen, Hide)?;
        info!("Terminal modes enabled (alternate screen, hidden cursor)");
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(stdout(), LeaveAlternateScreen, Show);
    }
}

/// Restore the terminal before the default panic output is printed.
fn install_panic_hook() {
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(stdout(), LeaveAlternateScreen, Show);
        original_hook(panic_info);
    }));
}

/// Load the task file, run the interactive loop, save once more, and
/// report the outcome on stdout.
///
/// Load and keyboard failures are reported and end the run before the
/// loop starts. Terminal setup failures are returned.
pub fn run(path: &Path) -> io::Result<()> {
    let mut store = match storage::load(path) {
        Ok(tasks) => TaskStore::from_tasks(tasks),
        Err(e) => {
            warn!("Failed to load {}: {}", path.display(), e);
            println!("Error loading tasks: {e}");
            return Ok(());
        }
    };

    let mut keys = match RawKeyboard::open() {
        Ok(keys) => keys,
        Err(e) => {
            warn!("Failed to open keyboard: {}", e);
            println!("Error opening keyboard: {e}");
            return Ok(());
        }
    };

    install_panic_hook();
    let terminal_mode_guard = TerminalModeGuard::new()?;
    let mut terminal = Terminal::new(CrosstermBackend::new(stdout()))?;
    let mut input = io::stdin().lock();

    let exit = event_loop(&mut store, path, &mut keys, &mut terminal, &mut input);
    let saved = shutdown(&store, path);

    drop(terminal);
    drop(terminal_mode_guard);
    drop(keys);

    match exit {
        Ok(LoopExit::Quit) => {}
        Ok(LoopExit::KeyReadFailed(e)) => println!("Error reading key: {e}"),
        Err(e) => {
            warn!("Render failed: {}", e);
            println!("Error drawing screen: {e}");
        }
    }
    match saved {
        Ok(()) => println!("Tasks saved successfully."),
        Err(e) => println!("Error saving tasks: {e}"),
    }
    Ok(())
}

/// The unconditional save on the way out.
fn shutdown(store: &TaskStore, path: &Path) -> Result<(), StorageError> {
    let result = storage::save(path, store.tasks());
    match &result {
        Ok(()) => {
            let counts = store.counts();
            info!(
                "Saved {} tasks on exit ({} todo, {} seen, {} done)",
                store.len(),
                counts.todo,
                counts.seen,
                counts.done
            );
        }
        Err(e) => warn!("Failed to save tasks on exit: {}", e),
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::task::Status;
    use crate::test_support::{ScriptedKeys, TestScreen, store_with};
    use std::io::Cursor;

    fn run_script(
        store: &mut TaskStore,
        path: &Path,
        keys: &mut ScriptedKeys,
        input: &str,
    ) -> (LoopExit, TestScreen) {
        let mut screen = TestScreen::new();
        let mut input = Cursor::new(input.to_string());
        let exit = event_loop(store, path, keys, &mut screen, &mut input).unwrap();
        (exit, screen)
    }

    #[test]
    fn test_dispatch_table() {
        use TuiEvent::*;
        assert_eq!(dispatch(&InputChar('q')), Dispatch::Apply(Action::Quit));
        assert_eq!(dispatch(&Escape), Dispatch::Apply(Action::Quit));
        assert_eq!(dispatch(&ForceQuit), Dispatch::Apply(Action::Quit));
        assert_eq!(dispatch(&InputChar('e')), Dispatch::Apply(Action::CursorUp));
        assert_eq!(dispatch(&CursorUp), Dispatch::Apply(Action::CursorUp));
        assert_eq!(dispatch(&InputChar('d')), Dispatch::Apply(Action::CursorDown));
        assert_eq!(dispatch(&CursorDown), Dispatch::Apply(Action::CursorDown));
        assert_eq!(dispatch(&InputChar('f')), Dispatch::Apply(Action::CycleForward));
        assert_eq!(dispatch(&InputChar('s')), Dispatch::Apply(Action::CycleBackward));
        assert_eq!(dispatch(&InputChar('n')), Dispatch::PromptNewTask);
        assert_eq!(dispatch(&InputChar('x')), Dispatch::Apply(Action::DeleteTask));
        assert_eq!(dispatch(&InputChar('Q')), Dispatch::Ignore);
        assert_eq!(dispatch(&Redraw), Dispatch::Ignore);
    }

    #[test]
    fn test_add_and_cycle_are_persisted() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tasks.json");
        let mut store = TaskStore::new();
        let mut keys = ScriptedKeys::chars("nfq");

        let (exit, _) = run_script(&mut store, &path, &mut keys, "Learn Go\n");
        assert!(matches!(exit, LoopExit::Quit));
        assert_eq!(store.len(), 1);
        assert_eq!(store.tasks()[0].status(), Status::Seen);

        let on_disk = storage::load(&path).unwrap();
        assert_eq!(on_disk, store.tasks());
    }

    #[test]
    fn test_cursor_moves_are_not_persisted() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tasks.json");
        let mut store = store_with(&["a", "b"]);
        let mut keys = ScriptedKeys::new(vec![TuiEvent::CursorDown, TuiEvent::Escape]);

        run_script(&mut store, &path, &mut keys, "");
        assert_eq!(store.cursor(), 1);
        assert!(!path.exists());
    }

    #[test]
    fn test_delete_first_of_two() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tasks.json");
        let mut store = store_with(&["first", "second"]);
        let mut keys = ScriptedKeys::chars("xq");

        run_script(&mut store, &path, &mut keys, "");
        assert_eq!(store.len(), 1);
        assert_eq!(store.cursor(), 0);
        assert_eq!(store.tasks()[0].text(), "second");
    }

    #[test]
    fn test_key_read_failure_ends_loop() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tasks.json");
        let mut store = store_with(&["a"]);
        let mut keys = ScriptedKeys::chars("f");

        let (exit, _) = run_script(&mut store, &path, &mut keys, "");
        assert!(matches!(exit, LoopExit::KeyReadFailed(_)));
        assert_eq!(store.tasks()[0].status(), Status::Seen);
    }

    #[test]
    fn test_unbound_key_only_redraws() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tasks.json");
        let mut store = store_with(&["a"]);
        let before = store.clone();
        let mut keys = ScriptedKeys::new(vec![
            TuiEvent::InputChar('z'),
            TuiEvent::Redraw,
            TuiEvent::InputChar('q'),
        ]);

        let (_, screen) = run_script(&mut store, &path, &mut keys, "");
        assert_eq!(screen.frames.len(), 3);
        assert_eq!(store, before);
        assert!(!path.exists());
    }

    #[test]
    fn test_modified_command_keys_do_nothing() {
        use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
        use crate::tui::event::map_key;

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tasks.json");
        let mut store = store_with(&["a", "b"]);
        let before = store.clone();
        let ctrl = |c| map_key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL));
        let alt = |c| map_key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::ALT));
        let mut keys = ScriptedKeys::new(vec![
            ctrl('x'),
            ctrl('f'),
            ctrl('s'),
            ctrl('d'),
            alt('q'),
            TuiEvent::InputChar('q'),
        ]);

        let (exit, screen) = run_script(&mut store, &path, &mut keys, "");
        assert!(matches!(exit, LoopExit::Quit));
        assert_eq!(screen.frames.len(), 6);
        assert_eq!(store, before);
        assert!(!path.exists());
    }

    #[test]
    fn test_blank_new_task_is_ignored() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tasks.json");
        let mut store = TaskStore::new();
        let mut keys = ScriptedKeys::chars("nq");

        let (_, screen) = run_script(&mut store, &path, &mut keys, "   \n");
        assert!(store.is_empty());
        assert_eq!(keys.reacquires, 1);
        assert!(keys.raw);
        assert!(!screen.cursor_visible);
    }

    #[test]
    fn test_save_failure_is_shown_and_loop_continues() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("tasks.json");
        let mut store = store_with(&["a"]);
        let mut keys = ScriptedKeys::chars("fq");

        let (exit, screen) = run_script(&mut store, &path, &mut keys, "");
        assert!(matches!(exit, LoopExit::Quit));
        assert_eq!(store.tasks()[0].status(), Status::Seen);
        let last = screen.last_frame().last().unwrap();
        assert!(last.starts_with("Error saving tasks:"));
    }

    #[test]
    fn test_successful_save_clears_status_message() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tasks.json");
        let mut tui = TuiState {
            status_message: Some("Error saving tasks: earlier".to_string()),
        };
        persist(&store_with(&["a"]), &path, &mut tui);
        assert!(tui.status_message.is_none());
    }

    #[test]
    fn test_shutdown_saves_cursor_free_list() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tasks.json");
        let mut store = store_with(&["a", "b"]);
        store.move_cursor_down();

        shutdown(&store, &path).unwrap();
        let reloaded = TaskStore::from_tasks(storage::load(&path).unwrap());
        assert_eq!(reloaded.tasks(), store.tasks());
        assert_eq!(reloaded.cursor(), 0);
    }
}
