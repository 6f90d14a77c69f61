//! Tasks Domain
//!
//! This module provides a complete domain implementation for managing tasks.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐
//! │   Service   │  ← Business logic, validation
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │ Repository  │  ← Data access (trait + in-memory store)
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Models    │  ← Entities, DTOs
//! └─────────────┘
//! ```
//!
//! The store is process-local: records live in memory for the lifetime of the
//! process and are discarded on exit. Ids are assigned from a monotonic
//! counter starting at 1 and are never reused, even after deletion.
//!
//! # Usage
//!
//! ```rust
//! use domain_tasks::{MemTaskRepository, TaskService};
//!
//! let repository = MemTaskRepository::new();
//! let service = TaskService::new(repository);
//! ```

pub mod error;
pub mod handlers;
pub mod memory;
pub mod models;
pub mod repository;
pub mod service;

// Re-export commonly used types
pub use error::{TaskError, TaskResult};
pub use handlers::ApiDoc;
pub use memory::MemTaskRepository;
pub use models::{CreateTask, Task, UpdateTask};
pub use repository::TaskRepository;
pub use service::TaskService;
