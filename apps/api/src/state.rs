//! Application state management.
//!
//! This module defines the shared application state passed to all request handlers.
//! The state contains:
//! - Configuration
//! - The task service owning the process-local store

use domain_tasks::{MemTaskRepository, TaskService};

/// Shared application state.
///
/// This struct is cloned for each handler (inexpensive Arc clones); every
/// clone of the task service points at the same underlying store.
#[derive(Clone)]
pub struct AppState {
    /// Application configuration loaded from environment variables
    pub config: crate::config::Config,
    /// Task service owning the in-memory task store
    pub tasks: TaskService<MemTaskRepository>,
}
