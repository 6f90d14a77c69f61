mod rest;

use axum::{Router, routing::get};
use std::sync::Arc;
use utoipa::OpenApi;

use crate::models::{CreateTask, Task, UpdateTask};
use crate::repository::TaskRepository;
use crate::service::TaskService;

/// OpenAPI documentation for the Tasks API
#[derive(OpenApi)]
#[openapi(
    paths(
        rest::list_tasks,
        rest::get_task,
        rest::create_task,
        rest::update_task,
        rest::delete_task,
    ),
    components(
        schemas(Task, CreateTask, UpdateTask)
    ),
    tags(
        (name = "tasks", description = "Task store operations")
    )
)]
pub struct ApiDoc;

/// Create the router for the task endpoints
pub fn router<R: TaskRepository + 'static>(service: TaskService<R>) -> Router {
    let shared_service = Arc::new(service);

    Router::new()
        .route("/", get(rest::list_tasks).post(rest::create_task))
        .route(
            "/{id}",
            get(rest::get_task)
                .put(rest::update_task)
                .delete(rest::delete_task),
        )
        .with_state(shared_service)
}
