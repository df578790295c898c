use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::models::job::{Job, NewJob};
use crate::state::AppState;

#[derive(Serialize)]
pub struct JobListResponse {
    pub success: bool,
    pub jobs: Vec<Job>,
}

#[derive(Serialize)]
pub struct JobCreatedResponse {
    pub success: bool,
    pub job: Job,
    pub message: &'static str,
}

#[derive(Deserialize)]
pub struct DeleteJobRequest {
    #[serde(default)]
    pub id: String,
}

#[derive(Serialize)]
pub struct JobDeletedResponse {
    pub success: bool,
    pub message: &'static str,
}

/// GET /api/v1/jobs
pub async fn handle_list(State(state): State<AppState>) -> Json<JobListResponse> {
    let jobs = state.store.list().await;
    Json(JobListResponse {
        success: true,
        jobs,
    })
}

/// POST /api/v1/jobs
pub async fn handle_create(
    State(state): State<AppState>,
    body: Result<Json<NewJob>, JsonRejection>,
) -> Result<Json<JobCreatedResponse>, AppError> {
    let Json(new) = body.map_err(|_| AppError::Validation("Invalid JSON data".to_string()))?;
    let job = state.store.create(new).await?;
    Ok(Json(JobCreatedResponse {
        success: true,
        job,
        message: "Job added successfully",
    }))
}

/// DELETE /api/v1/jobs
///
/// Deleting an id that matches nothing still reports success; the operation
/// is idempotent and "already gone" is not a failure.
pub async fn handle_delete(
    State(state): State<AppState>,
    body: Result<Json<DeleteJobRequest>, JsonRejection>,
) -> Result<Json<JobDeletedResponse>, AppError> {
    let Json(req) = body.map_err(|_| AppError::Validation("Job ID required".to_string()))?;
    if req.id.is_empty() {
        return Err(AppError::Validation("Job ID required".to_string()));
    }

    let removed = state.store.delete(&req.id).await?;
    if !removed {
        tracing::debug!("delete for unknown job id {}", req.id);
    }

    Ok(Json(JobDeletedResponse {
        success: true,
        message: "Job deleted successfully",
    }))
}

/// Any other method on the jobs route.
pub async fn handle_method_not_allowed() -> AppError {
    AppError::MethodNotAllowed
}
