use async_trait::async_trait;

use crate::error::TaskResult;
use crate::models::{CreateTask, Task, UpdateTask};

/// Repository trait for Task storage
///
/// This trait defines the data access interface for tasks. An implementation
/// owns the live records and the id-generation counter.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TaskRepository: Send + Sync {
    /// Create a new task, assigning the next id from the monotonic counter
    async fn create(&self, input: CreateTask) -> TaskResult<Task>;

    /// Get a task by ID
    async fn get_by_id(&self, id: u64) -> TaskResult<Option<Task>>;

    /// List all tasks in creation order
    async fn list(&self) -> TaskResult<Vec<Task>>;

    /// Replace an existing task wholesale
    async fn update(&self, id: u64, input: UpdateTask) -> TaskResult<Task>;

    /// Delete a task by ID, reporting whether a record was removed
    async fn delete(&self, id: u64) -> TaskResult<bool>;

    /// Count live tasks
    async fn count(&self) -> TaskResult<usize>;
}
