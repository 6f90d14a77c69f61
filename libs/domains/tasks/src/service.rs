use std::sync::Arc;
use tracing::instrument;
use validator::Validate;

use crate::error::{TaskError, TaskResult};
use crate::models::{CreateTask, Task, UpdateTask};
use crate::repository::TaskRepository;

/// Service layer for Task business logic
#[derive(Clone)]
pub struct TaskService<R: TaskRepository> {
    repository: Arc<R>,
}

impl<R: TaskRepository> TaskService<R> {
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    /// Create a new task with validation
    #[instrument(skip(self, input), fields(task_title = %input.title))]
    pub async fn create_task(&self, input: CreateTask) -> TaskResult<Task> {
        // Validate input
        input
            .validate()
            .map_err(|e| TaskError::Validation(e.to_string()))?;

        self.repository.create(input).await
    }

    /// Get a task by ID
    #[instrument(skip(self), fields(task_id = %id))]
    pub async fn get_task(&self, id: u64) -> TaskResult<Task> {
        self.repository
            .get_by_id(id)
            .await?
            .ok_or(TaskError::NotFound(id))
    }

    /// List all tasks in creation order
    pub async fn list_tasks(&self) -> TaskResult<Vec<Task>> {
        self.repository.list().await
    }

    /// Replace a task wholesale
    #[instrument(skip(self, input), fields(task_id = %id))]
    pub async fn update_task(&self, id: u64, input: UpdateTask) -> TaskResult<Task> {
        // Validate input
        input
            .validate()
            .map_err(|e| TaskError::Validation(e.to_string()))?;

        self.repository.update(id, input).await
    }

    /// Delete a task
    #[instrument(skip(self), fields(task_id = %id))]
    pub async fn delete_task(&self, id: u64) -> TaskResult<()> {
        let deleted = self.repository.delete(id).await?;

        if !deleted {
            return Err(TaskError::NotFound(id));
        }

        Ok(())
    }

    /// Count all tasks
    pub async fn count_tasks(&self) -> TaskResult<usize> {
        self.repository.count().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::MockTaskRepository;

    fn draft(title: &str) -> CreateTask {
        CreateTask {
            title: title.to_string(),
            description: None,
            completed: false,
        }
    }

    #[tokio::test]
    async fn test_create_task_rejects_empty_title_before_touching_store() {
        // No expectations: the repository must not be called
        let repo = MockTaskRepository::new();
        let service = TaskService::new(repo);

        let result = service.create_task(draft("")).await;

        assert!(matches!(result, Err(TaskError::Validation(_))));
    }

    #[tokio::test]
    async fn test_update_task_rejects_empty_title_before_touching_store() {
        let repo = MockTaskRepository::new();
        let service = TaskService::new(repo);

        let result = service
            .update_task(
                1,
                UpdateTask {
                    title: String::new(),
                    description: None,
                    completed: false,
                },
            )
            .await;

        assert!(matches!(result, Err(TaskError::Validation(_))));
    }

    #[tokio::test]
    async fn test_get_task_maps_absence_to_not_found() {
        let mut repo = MockTaskRepository::new();
        repo.expect_get_by_id()
            .withf(|id| *id == 7)
            .returning(|_| Ok(None));
        let service = TaskService::new(repo);

        let result = service.get_task(7).await;

        assert!(matches!(result, Err(TaskError::NotFound(7))));
    }

    #[tokio::test]
    async fn test_delete_task_maps_false_to_not_found() {
        let mut repo = MockTaskRepository::new();
        repo.expect_delete().returning(|_| Ok(false));
        let service = TaskService::new(repo);

        let result = service.delete_task(3).await;

        assert!(matches!(result, Err(TaskError::NotFound(3))));
    }

    #[tokio::test]
    async fn test_delete_task_succeeds_when_record_removed() {
        let mut repo = MockTaskRepository::new();
        repo.expect_delete().returning(|_| Ok(true));
        let service = TaskService::new(repo);

        assert!(service.delete_task(3).await.is_ok());
    }

    #[tokio::test]
    async fn test_repository_errors_propagate() {
        let mut repo = MockTaskRepository::new();
        repo.expect_count()
            .returning(|| Err(TaskError::Internal("store poisoned".to_string())));
        let service = TaskService::new(repo);

        let result = service.count_tasks().await;

        assert!(matches!(result, Err(TaskError::Internal(_))));
    }
}
