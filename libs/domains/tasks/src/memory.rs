use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::error::{TaskError, TaskResult};
use crate::models::{CreateTask, Task, UpdateTask};
use crate::repository::TaskRepository;

/// The live records plus the id-generation counter.
///
/// `next_id` starts at 1 and increases by 1 on every successful create;
/// deleted ids are never handed out again.
#[derive(Debug)]
struct Store {
    tasks: Vec<Task>,
    next_id: u64,
}

impl Default for Store {
    fn default() -> Self {
        Self {
            tasks: Vec::new(),
            next_id: 1,
        }
    }
}

/// In-memory task repository.
///
/// Process-local storage: the collection lives for the lifetime of the
/// process and is discarded on exit, nothing is flushed. Clones share the
/// same underlying store. One lock guards the whole collection; there are no
/// transactional guarantees across operation sequences.
#[derive(Clone, Default)]
pub struct MemTaskRepository {
    store: Arc<RwLock<Store>>,
}

impl MemTaskRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl TaskRepository for MemTaskRepository {
    async fn create(&self, input: CreateTask) -> TaskResult<Task> {
        let mut store = self.store.write().await;

        let task = Task {
            id: store.next_id,
            title: input.title,
            description: input.description,
            completed: input.completed,
        };
        store.next_id += 1;
        store.tasks.push(task.clone());

        tracing::info!(task_id = task.id, "Created task");
        Ok(task)
    }

    async fn get_by_id(&self, id: u64) -> TaskResult<Option<Task>> {
        let store = self.store.read().await;
        Ok(store.tasks.iter().find(|t| t.id == id).cloned())
    }

    async fn list(&self) -> TaskResult<Vec<Task>> {
        let store = self.store.read().await;
        Ok(store.tasks.clone())
    }

    async fn update(&self, id: u64, input: UpdateTask) -> TaskResult<Task> {
        let mut store = self.store.write().await;

        let task = store
            .tasks
            .iter_mut()
            .find(|t| t.id == id)
            .ok_or(TaskError::NotFound(id))?;
        task.apply_update(input);

        Ok(task.clone())
    }

    async fn delete(&self, id: u64) -> TaskResult<bool> {
        let mut store = self.store.write().await;

        let before = store.tasks.len();
        // retain keeps the relative order of the remaining tasks
        store.tasks.retain(|t| t.id != id);
        let removed = store.tasks.len() < before;

        if removed {
            tracing::info!(task_id = id, "Deleted task");
        }
        Ok(removed)
    }

    async fn count(&self) -> TaskResult<usize> {
        let store = self.store.read().await;
        Ok(store.tasks.len())
    }
}
