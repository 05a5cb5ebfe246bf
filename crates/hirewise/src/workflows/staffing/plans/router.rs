use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post, put},
    Router,
};
use serde::Deserialize;
use serde_json::json;

use super::domain::{StaffingPlanError, StaffingPlanId, StaffingPlanRecord};
use super::repository::{RepositoryError, StaffingPlanRepository};
use super::service::{StaffingPlanService, StaffingServiceError};

#[derive(Debug, Clone, Deserialize)]
pub struct AssignRequest {
    pub allocation: i64,
}

/// Router builder exposing staffing plan creation and recruiter allocation.
pub fn staffing_plan_router<R>(service: Arc<StaffingPlanService<R>>) -> Router
where
    R: StaffingPlanRepository + 'static,
{
    Router::new()
        .route("/api/v1/staffing-plans", post(create_handler::<R>))
        .route("/api/v1/staffing-plans/:plan_id", get(summary_handler::<R>))
        .route(
            "/api/v1/staffing-plans/:plan_id/items/:index/assignees/:assignee_id",
            put(assign_handler::<R>).delete(unassign_handler::<R>),
        )
        .with_state(service)
}

pub(crate) async fn create_handler<R>(
    State(service): State<Arc<StaffingPlanService<R>>>,
    axum::Json(record): axum::Json<StaffingPlanRecord>,
) -> Response
where
    R: StaffingPlanRepository + 'static,
{
    match service.create(record) {
        Ok(plan) => (StatusCode::CREATED, axum::Json(plan.summary())).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn summary_handler<R>(
    State(service): State<Arc<StaffingPlanService<R>>>,
    Path(plan_id): Path<String>,
) -> Response
where
    R: StaffingPlanRepository + 'static,
{
    match service.summary(&StaffingPlanId(plan_id)) {
        Ok(summary) => (StatusCode::OK, axum::Json(summary)).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn assign_handler<R>(
    State(service): State<Arc<StaffingPlanService<R>>>,
    Path((plan_id, index, assignee_id)): Path<(String, usize, String)>,
    axum::Json(request): axum::Json<AssignRequest>,
) -> Response
where
    R: StaffingPlanRepository + 'static,
{
    match service.assign(
        &StaffingPlanId(plan_id),
        index,
        &assignee_id,
        request.allocation,
    ) {
        Ok(plan) => (StatusCode::OK, axum::Json(plan.summary())).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn unassign_handler<R>(
    State(service): State<Arc<StaffingPlanService<R>>>,
    Path((plan_id, index, assignee_id)): Path<(String, usize, String)>,
) -> Response
where
    R: StaffingPlanRepository + 'static,
{
    match service.unassign(&StaffingPlanId(plan_id), index, &assignee_id) {
        Ok(plan) => (StatusCode::OK, axum::Json(plan.summary())).into_response(),
        Err(error) => error_response(error),
    }
}

fn error_response(error: StaffingServiceError) -> Response {
    let status = match &error {
        StaffingServiceError::Plan(StaffingPlanError::ItemNotFound { .. })
        | StaffingServiceError::Repository(RepositoryError::NotFound) => StatusCode::NOT_FOUND,
        StaffingServiceError::Plan(_) => StatusCode::UNPROCESSABLE_ENTITY,
        StaffingServiceError::Repository(RepositoryError::Conflict) => StatusCode::CONFLICT,
        StaffingServiceError::Repository(RepositoryError::Unavailable(_)) => {
            StatusCode::INTERNAL_SERVER_ERROR
        }
    };

    let payload = json!({ "error": error.to_string() });
    (status, axum::Json(payload)).into_response()
}
