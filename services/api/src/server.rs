use crate::cli::ServeArgs;
use crate::infra::{AppState, InMemoryStaffingPlanRepository};
use crate::routes::with_workflow_routes;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use hirewise::config::AppConfig;
use hirewise::error::AppError;
use hirewise::telemetry;
use hirewise::workflows::staffing::plans::StaffingPlanService;
use std::sync::atomic::Ordering;
use std::sync::Arc;
use tracing::info;

pub(crate) async fn run(mut args: ServeArgs) -> Result<(), AppError> {
    let mut config = AppConfig::load()?;

    if let Some(host) = args.host.take() {
        config.server.host = host;
    }
    if let Some(port) = args.port.take() {
        config.server.port = port;
    }

    telemetry::init(&config.telemetry)?;

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(std::sync::atomic::AtomicBool::new(false));
    let app_state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
    };

    let repository = Arc::new(InMemoryStaffingPlanRepository::default());
    let plan_service = Arc::new(StaffingPlanService::new(repository));

    let app = with_workflow_routes(plan_service, config.deals)
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(
        ?config.environment,
        %addr,
        default_currency = %config.deals.default_currency,
        "hirewise service ready"
    );

    axum::serve(listener, app).await?;
    Ok(())
}
