use super::common::*;
use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use serde_json::json;
use std::sync::Arc;
use tower::ServiceExt;

use crate::workflows::staffing::plans::{staffing_plan_router, StaffingPlanService};

fn json_request(method: &str, uri: &str, body: serde_json::Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .expect("request builds")
}

#[tokio::test]
async fn create_route_returns_summary() {
    let (service, _) = build_service();
    let router = router_with_service(service);

    let response = router
        .oneshot(json_request(
            "POST",
            "/api/v1/staffing-plans",
            serde_json::to_value(record()).expect("record serializes"),
        ))
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::CREATED);
    let payload = read_json_body(response).await;
    assert_eq!(payload["total_vacancies"], json!(14));
    assert_eq!(payload["total_allocated"], json!(2));
    assert_eq!(payload["estimated_budget_display"], json!("₹66.00 L"));
    assert_eq!(payload["items"][0]["allocation"]["assign_to"], json!("asha@hr.co-2"));
}

#[tokio::test]
async fn assign_route_updates_allocation() {
    let (service, _) = build_service();
    let plan = service.create(record()).expect("plan created");
    let router = router_with_service(service);

    let uri = format!(
        "/api/v1/staffing-plans/{}/items/1/assignees/ravi@hr.co",
        plan.plan_id.0
    );
    let response = router
        .oneshot(json_request("PUT", &uri, json!({ "allocation": 4 })))
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::OK);
    let payload = read_json_body(response).await;
    assert_eq!(payload["items"][1]["allocation"]["assign_to"], json!("ravi@hr.co-4"));
    assert_eq!(payload["assignee_load"][0]["assignee_id"], json!("ravi@hr.co"));
}

#[tokio::test]
async fn unassign_route_drops_recruiter() {
    let (service, _) = build_service();
    let plan = service.create(record()).expect("plan created");
    let router = router_with_service(service);

    let uri = format!(
        "/api/v1/staffing-plans/{}/items/0/assignees/asha@hr.co",
        plan.plan_id.0
    );
    let response = router
        .oneshot(
            Request::delete(uri)
                .body(Body::empty())
                .expect("request builds"),
        )
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::OK);
    let payload = read_json_body(response).await;
    assert_eq!(payload["total_allocated"], json!(0));
}

#[tokio::test]
async fn summary_route_returns_not_found_for_unknown_plan() {
    let (service, _) = build_service();
    let router = router_with_service(service);

    let response = router
        .oneshot(
            Request::get("/api/v1/staffing-plans/sp-unknown")
                .body(Body::empty())
                .expect("request builds"),
        )
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn assign_route_rejects_unencodable_assignee() {
    let (service, _) = build_service();
    let plan = service.create(record()).expect("plan created");
    let router = router_with_service(service);

    let uri = format!(
        "/api/v1/staffing-plans/{}/items/1/assignees/first-last@hr.co",
        plan.plan_id.0
    );
    let response = router
        .oneshot(json_request("PUT", &uri, json!({ "allocation": 1 })))
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let payload = read_json_body(response).await;
    assert!(payload["error"]
        .as_str()
        .unwrap_or_default()
        .contains("first-last@hr.co"));
}

#[tokio::test]
async fn repository_outage_maps_to_internal_error() {
    let router = staffing_plan_router(Arc::new(StaffingPlanService::new(Arc::new(
        UnavailableRepository,
    ))));

    let response = router
        .oneshot(json_request(
            "POST",
            "/api/v1/staffing-plans",
            serde_json::to_value(record()).expect("record serializes"),
        ))
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
}
