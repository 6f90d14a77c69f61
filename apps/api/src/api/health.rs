//! Application-specific readiness checks against the task store.

use crate::state::AppState;
use axum::{
    extract::State,
    response::{IntoResponse, Response},
};
use axum_helpers::server::{HealthCheckFuture, run_health_checks};

/// Readiness check endpoint that verifies the task store answers queries.
///
/// This uses the generic `run_health_checks` utility from axum-helpers
/// to aggregate check results into a single response.
pub async fn ready_handler(State(state): State<AppState>) -> Response {
    let checks: Vec<(&str, HealthCheckFuture<'_>)> = vec![(
        "store",
        Box::pin(async {
            state
                .tasks
                .count_tasks()
                .await
                .map(|_| ())
                .map_err(|e| format!("Task store probe failed: {}", e))
        }),
    )];

    match run_health_checks(checks).await {
        Ok((status, json)) => (status, json).into_response(),
        Err((status, json)) => (status, json).into_response(),
    }
}
