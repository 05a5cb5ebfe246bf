use crate::infra::AppState;
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::{Extension, Json};
use hirewise::config::DealConfig;
use hirewise::workflows::deals::deal_router;
use hirewise::workflows::staffing::allocation_router;
use hirewise::workflows::staffing::plans::{
    staffing_plan_router, StaffingPlanRepository, StaffingPlanService,
};
use serde_json::json;
use std::sync::Arc;

pub(crate) fn with_workflow_routes<R>(
    plan_service: Arc<StaffingPlanService<R>>,
    deals: DealConfig,
) -> axum::Router
where
    R: StaffingPlanRepository + 'static,
{
    staffing_plan_router(plan_service)
        .merge(deal_router(deals))
        .merge(allocation_router())
        .route("/health", axum::routing::get(healthcheck))
        .route("/ready", axum::routing::get(readiness_endpoint))
        .route("/metrics", axum::routing::get(metrics_endpoint))
}

pub(crate) async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

pub(crate) async fn readiness_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(std::sync::atomic::Ordering::Relaxed);
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let payload = if ready {
        json!({ "status": "ready" })
    } else {
        json!({ "status": "initializing" })
    };

    (status, Json(payload))
}

pub(crate) async fn metrics_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infra::InMemoryStaffingPlanRepository;
    use axum::body::Body;
    use axum::http::Request;
    use hirewise::workflows::deals::Currency;
    use serde_json::Value;
    use tower::ServiceExt;

    fn app() -> axum::Router {
        let service = Arc::new(StaffingPlanService::new(Arc::new(
            InMemoryStaffingPlanRepository::default(),
        )));
        with_workflow_routes(
            service,
            DealConfig {
                default_currency: Currency::Inr,
            },
        )
    }

    async fn body_json(response: axum::response::Response) -> Value {
        let bytes = axum::body::to_bytes(response.into_body(), 64 * 1024)
            .await
            .expect("body reads");
        serde_json::from_slice(&bytes).expect("json body")
    }

    #[tokio::test]
    async fn healthcheck_reports_ok() {
        let response = app()
            .oneshot(Request::get("/health").body(Body::empty()).expect("request"))
            .await
            .expect("route executes");

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_json(response).await, json!({ "status": "ok" }));
    }

    #[tokio::test]
    async fn merged_router_serves_deal_and_allocation_routes() {
        let quote = app()
            .oneshot(
                Request::post("/api/v1/deals/quote")
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(
                        json!({
                            "hiring_volume": 10,
                            "fee_basis": { "basis": "fixed", "amount_per_hire": 50000 }
                        })
                        .to_string(),
                    ))
                    .expect("request"),
            )
            .await
            .expect("route executes");
        assert_eq!(body_json(quote).await["display"], json!("₹ 5.00 L"));

        let inspect = app()
            .oneshot(
                Request::post("/api/v1/allocations/inspect")
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(
                        json!({ "total_vacancies": 5, "assign_to": "a@x.com-3,b@x.com-2" })
                            .to_string(),
                    ))
                    .expect("request"),
            )
            .await
            .expect("route executes");
        assert_eq!(body_json(inspect).await["status"]["state"], json!("full"));
    }
}
