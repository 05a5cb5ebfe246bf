use axum::{routing::post, Json, Router};
use serde::Deserialize;
use tracing::warn;

use super::allocation::Allocation;
use super::views::AllocationView;

#[derive(Debug, Clone, Deserialize)]
pub struct AllocationInspectRequest {
    pub total_vacancies: u32,
    #[serde(default)]
    pub assign_to: Option<String>,
}

/// Router exposing stateless allocation parsing for form round trips.
pub fn allocation_router() -> Router {
    Router::new().route("/api/v1/allocations/inspect", post(inspect_handler))
}

pub(crate) async fn inspect_handler(
    Json(request): Json<AllocationInspectRequest>,
) -> Json<AllocationView> {
    let allocation = Allocation::parse(
        request.total_vacancies,
        request.assign_to.as_deref().unwrap_or_default(),
    );

    if allocation.is_over_allocated() {
        warn!(
            total_vacancies = allocation.total_vacancies(),
            total_allocated = allocation.total_allocated(),
            "inspected allocation exceeds vacancies"
        );
    }

    Json(AllocationView::from(&allocation))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{header, Request, StatusCode};
    use serde_json::{json, Value};
    use tower::ServiceExt;

    async fn inspect(payload: Value) -> Value {
        let response = allocation_router()
            .oneshot(
                Request::post("/api/v1/allocations/inspect")
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(payload.to_string()))
                    .expect("request builds"),
            )
            .await
            .expect("route executes");

        assert_eq!(response.status(), StatusCode::OK);
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("body reads");
        serde_json::from_slice(&bytes).expect("json body")
    }

    #[tokio::test]
    async fn inspect_normalizes_stored_text() {
        let body = inspect(json!({
            "total_vacancies": 6,
            "assign_to": "a@x.com-3, garbage ,b@x.com-2"
        }))
        .await;

        assert_eq!(body["assign_to"], json!("a@x.com-3,b@x.com-2"));
        assert_eq!(body["total_allocated"], json!(5));
        assert_eq!(body["remaining"], json!(1));
        assert_eq!(body["status"]["state"], json!("partial"));
        assert_eq!(body["suggested_initial_count"], json!(1));
    }

    #[tokio::test]
    async fn inspect_flags_over_allocation() {
        let body = inspect(json!({
            "total_vacancies": 5,
            "assign_to": "a@x.com-4,b@x.com-3"
        }))
        .await;

        assert_eq!(body["over_allocated"], json!(true));
        assert_eq!(body["status"]["excess"], json!(2));
    }

    #[tokio::test]
    async fn inspect_treats_missing_text_as_unassigned() {
        let body = inspect(json!({ "total_vacancies": 3 })).await;
        assert_eq!(body["assign_to"], json!(""));
        assert_eq!(body["status"]["state"], json!("unassigned"));
        assert_eq!(body["assignments"], json!([]));
    }
}
