use crate::cli::ServeArgs;
use crate::infra::AppState;
use crate::routes::with_kernel_routes;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use leasing_solver::config::AppConfig;
use leasing_solver::error::AppError;
use leasing_solver::workflows::rent_gap::RentGapSolver;
use std::sync::atomic::Ordering;
use std::sync::Arc;
use tracing::info;

pub(crate) async fn run(mut config: AppConfig, mut args: ServeArgs) -> Result<(), AppError> {
    if let Some(host) = args.host.take() {
        config.server.host = host;
    }
    if let Some(port) = args.port.take() {
        config.server.port = port;
    }

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(std::sync::atomic::AtomicBool::new(false));
    let app_state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
    };

    let solver = RentGapSolver::new(config.solver);
    let app = with_kernel_routes(solver)
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(?config.environment, %addr, solver = ?config.solver, "leasing solver ready");

    axum::serve(listener, app).await?;
    Ok(())
}
