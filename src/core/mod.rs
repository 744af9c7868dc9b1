//! # Core Application Logic
//!
//! This module contains Nolearn's business logic.
//! It knows nothing about terminals or key codes.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • TaskStore (state)    │
//!                    │  • Action (commands)    │
//!                    │  • update() (reducer)   │
//!                    │  • storage (task file)  │
//!                    └───────────┬─────────────┘
//!                                │
//!                                ▼
//!                         ┌────────────┐
//!                         │    TUI     │
//!                         │  Adapter   │
//!                         │ (ratatui)  │
//!                         └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`task`]: `Task` and its `Status` chain
//! - [`state`]: `TaskStore`, the task list plus cursor
//! - [`action`]: `Action` and the `update()` reducer
//! - [`storage`]: loading and saving the task file
//! - [`config`]: settings from `~/.nolearn/config.toml`, env, and CLI

pub mod action;
pub mod config;
pub mod state;
pub mod storage;
pub mod task;
