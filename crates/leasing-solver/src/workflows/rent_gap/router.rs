use std::sync::Arc;

use axum::{extract::State, routing::post, Json, Router};
use serde::{Deserialize, Serialize};

use super::domain::{AmenityOption, RentSolverResult};
use super::RentGapSolver;
use crate::error::AppError;
use crate::money::Money;
use crate::workflows::intake;

/// Router exposing the rent-gap solver over HTTP.
pub fn rent_gap_router(solver: RentGapSolver) -> Router {
    Router::new()
        .route("/api/v1/rent-gap/solve", post(solve_handler))
        .with_state(Arc::new(solver))
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SolveRequest {
    pub target_gap: Money,
    #[serde(default)]
    pub amenities: Vec<AmenityOption>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SolveResponse {
    pub target_gap: Money,
    pub combination: Vec<AmenityOption>,
    pub applied_total: Money,
    pub remaining_gap: Money,
}

impl SolveResponse {
    pub fn new(target_gap: Money, result: RentSolverResult) -> Self {
        Self {
            target_gap,
            applied_total: result.applied_total(),
            remaining_gap: result.remaining_gap,
            combination: result.combination,
        }
    }
}

pub(crate) async fn solve_handler(
    State(solver): State<Arc<RentGapSolver>>,
    Json(request): Json<SolveRequest>,
) -> Result<Json<SolveResponse>, AppError> {
    intake::validate_target_gap(request.target_gap)?;
    intake::validate_amenities(&request.amenities)?;
    let result = solver.solve(request.target_gap, &request.amenities);
    Ok(Json(SolveResponse::new(request.target_gap, result)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{header, Request, StatusCode};
    use axum::response::IntoResponse;
    use tower::ServiceExt;

    #[tokio::test]
    async fn solve_handler_reports_remaining_gap() {
        let request = SolveRequest {
            target_gap: Money::from_dollars(200),
            amenities: vec![
                AmenityOption::new("a", Money::from_dollars(175)),
                AmenityOption::new("b", Money::from_dollars(100)),
            ],
        };

        let Json(body) = solve_handler(State(Arc::new(RentGapSolver::default())), Json(request))
            .await
            .expect("solve succeeds");

        assert_eq!(body.combination.len(), 1);
        assert_eq!(body.applied_total, Money::from_dollars(175));
        assert_eq!(body.remaining_gap, Money::from_dollars(25));
    }

    #[tokio::test]
    async fn solve_handler_rejects_duplicate_amenities() {
        let request = SolveRequest {
            target_gap: Money::from_dollars(50),
            amenities: vec![
                AmenityOption::new("a", Money::from_dollars(10)),
                AmenityOption::new("a", Money::from_dollars(20)),
            ],
        };

        let response = solve_handler(State(Arc::new(RentGapSolver::default())), Json(request))
            .await
            .into_response();

        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[tokio::test]
    async fn solve_route_rejects_amounts_that_would_overflow() {
        let payloads = [
            r#"{"target_gap":90000000000000000,"amenities":[{"id":"a","amount":-90000000000000000}]}"#,
            r#"{"target_gap":200,"amenities":[{"id":"a","amount":-90000000000000000}]}"#,
        ];

        for payload in payloads {
            let response = rent_gap_router(RentGapSolver::default())
                .oneshot(
                    Request::post("/api/v1/rent-gap/solve")
                        .header(header::CONTENT_TYPE, "application/json")
                        .body(Body::from(payload))
                        .unwrap(),
                )
                .await
                .unwrap();

            assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY, "{payload}");
        }
    }

    #[tokio::test]
    async fn solve_route_accepts_string_amounts() {
        let router = rent_gap_router(RentGapSolver::default());
        let payload = r#"{"target_gap":"-100","amenities":[{"id":"disc","amount":"-100.00"},{"id":"prem","amount":50}]}"#;

        let response = router
            .oneshot(
                Request::post("/api/v1/rent-gap/solve")
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(payload))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body: SolveResponse = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body.remaining_gap, Money::ZERO);
        assert_eq!(body.combination[0].id.0, "disc");
    }
}
