//! # TUI Components
//!
//! Stateless, props-based widgets. Each receives what it shows as struct
//! fields and renders into the area it is given:
//!
//! - `Banner`: title and key legend
//! - `TaskList`: count header and task rows, or the empty-list hint
//! - `StatusLine`: new-task prompt or last error
//!
//! ```text
//! components/
//! ├── mod.rs          (this file)
//! ├── banner.rs
//! ├── task_list.rs
//! └── status_line.rs
//! ```

pub mod banner;
pub mod status_line;
pub mod task_list;

pub use banner::Banner;
pub use status_line::StatusLine;
pub use task_list::TaskList;
