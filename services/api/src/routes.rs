use crate::infra::AppState;
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::Extension;
use axum::Json;
use leasing_solver::workflows::availability::availability_router;
use leasing_solver::workflows::rent_gap::{rent_gap_router, RentGapSolver};
use serde_json::json;

pub(crate) fn with_kernel_routes(solver: RentGapSolver) -> axum::Router {
    rent_gap_router(solver)
        .merge(availability_router())
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
    use axum::body::Body;
    use axum::http::Request;
    use metrics_exporter_prometheus::PrometheusBuilder;
    use std::sync::atomic::AtomicBool;
    use std::sync::Arc;
    use tower::ServiceExt;

    fn app_state(ready: bool) -> AppState {
        AppState {
            readiness: Arc::new(AtomicBool::new(ready)),
            metrics: Arc::new(PrometheusBuilder::new().build_recorder().handle()),
        }
    }

    fn router(ready: bool) -> axum::Router {
        with_kernel_routes(RentGapSolver::default()).layer(Extension(app_state(ready)))
    }

    async fn json_body(response: axum::response::Response) -> serde_json::Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("body readable");
        serde_json::from_slice(&bytes).expect("json body")
    }

    #[tokio::test]
    async fn healthcheck_reports_ok() {
        let Json(body) = healthcheck().await;
        assert_eq!(body["status"], "ok");
    }

    #[tokio::test]
    async fn readiness_reflects_listener_state() {
        let response = router(false)
            .oneshot(Request::get("/ready").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);

        let response = router(true)
            .oneshot(Request::get("/ready").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(json_body(response).await["status"], "ready");
    }

    #[tokio::test]
    async fn solve_route_is_mounted() {
        let payload = json!({
            "target_gap": 200,
            "amenities": [
                {"id": "a", "amount": 120},
                {"id": "b", "amount": 80},
                {"id": "c", "amount": 60}
            ]
        });

        let response = router(true)
            .oneshot(
                Request::post("/api/v1/rent-gap/solve")
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(payload.to_string()))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = json_body(response).await;
        assert_eq!(body["remaining_gap"], 0.0);
        assert_eq!(body["combination"].as_array().map(Vec::len), Some(2));
    }

    #[tokio::test]
    async fn reconcile_route_rejects_duplicate_listings() {
        let payload = json!({
            "availabilities": [
                {"id": "a1", "unit_id": "u1", "property_code": "RIV", "status": "Available"},
                {"id": "a1", "unit_id": "u2", "property_code": "RIV", "status": "Available"}
            ],
            "tenancies": [{"id": "t1", "unit_id": "u1", "status": "Current"}]
        });

        let response = router(true)
            .oneshot(
                Request::post("/api/v1/availability/reconcile")
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(payload.to_string()))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
        let body = json_body(response).await;
        assert!(body["error"]
            .as_str()
            .is_some_and(|message| message.contains("duplicate availability id")));
    }
}
