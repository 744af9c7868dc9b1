//! # Task File Persistence
//!
//! The task list lives in a single JSON file (default `tasks.json`):
//!
//! ```json
//! [
//!   {
//!     "text": "Learn Rust",
//!     "status": "seen"
//!   }
//! ]
//! ```
//!
//! Only the list is stored. The cursor starts at the top on every run.
//!
//! Writes go to `<file>.tmp` first (`tasks.json.tmp`) and are renamed into
//! place, so a neighbour like `tasks.tmp` is never touched.

use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use log::{debug, info};

use crate::core::task::Task;

#[derive(Debug)]
pub enum StorageError {
    Io(io::Error),
    Decode(serde_json::Error),
}

impl fmt::Display for StorageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StorageError::Io(e) => write!(f, "task file I/O error: {e}"),
            StorageError::Decode(e) => write!(f, "task file is malformed: {e}"),
        }
    }
}

impl std::error::Error for StorageError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            StorageError::Io(e) => Some(e),
            StorageError::Decode(e) => Some(e),
        }
    }
}

/// Load the task list from `path`.
///
/// A missing file is the first-run case and yields an empty list.
/// Anything that exists but is not a valid task array is a `Decode` error.
pub fn load(path: &Path) -> Result<Vec<Task>, StorageError> {
    let json = match fs::read_to_string(path) {
        Ok(json) => json,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            info!("No task file at {}, starting empty", path.display());
            return Ok(Vec::new());
        }
        Err(e) => return Err(StorageError::Io(e)),
    };

    let tasks: Vec<Task> = serde_json::from_str(&json).map_err(StorageError::Decode)?;
    info!("Loaded {} tasks from {}", tasks.len(), path.display());
    Ok(tasks)
}

/// `tasks.json` -> `tasks.json.tmp`
fn tmp_path_for(path: &Path) -> PathBuf {
    let mut name = path.as_os_str().to_owned();
    name.push(".tmp");
    PathBuf::from(name)
}

/// Write the task list to `path`, replacing its previous content.
pub fn save(path: &Path, tasks: &[Task]) -> Result<(), StorageError> {
    let mut json = serde_json::to_string_pretty(tasks)
        .map_err(|e| StorageError::Io(io::Error::new(io::ErrorKind::InvalidData, e)))?;
    json.push('\n');

    let tmp_path = tmp_path_for(path);
    fs::write(&tmp_path, json).map_err(StorageError::Io)?;
    fs::rename(&tmp_path, path).map_err(StorageError::Io)?;
    debug!("Saved {} tasks to {}", tasks.len(), path.display());
    Ok(())
}
