use axum::Router;

pub mod health;
pub mod tasks;

/// Creates the API routes mounted at the server root.
///
/// This function takes a reference to AppState and initializes all routers.
/// Returns a stateless Router (all sub-routers have state already applied).
pub fn routes(state: &crate::state::AppState) -> Router {
    Router::new().nest("/tasks", tasks::router(state))
}

/// Creates a router with the /ready endpoint that probes the task store.
///
/// This router has state applied and can be merged with the stateless app
/// router from `create_router`.
pub fn ready_router(state: crate::state::AppState) -> Router {
    use axum::routing::get;

    Router::new()
        .route("/ready", get(health::ready_handler))
        .with_state(state)
}
