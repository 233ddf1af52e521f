use axum::{routing::post, Json, Router};
use serde::{Deserialize, Serialize};

use super::domain::{ActiveAvailability, AvailabilityId, StatusUpdate, TenancyRecord};
use super::sweep_stale_availability;
use crate::error::AppError;
use crate::workflows::intake;

/// Router exposing the stale-availability sweep over HTTP.
pub fn availability_router() -> Router {
    Router::new().route("/api/v1/availability/reconcile", post(reconcile_handler))
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReconcileRequest {
    #[serde(default)]
    pub availabilities: Vec<ActiveAvailability>,
    #[serde(default)]
    pub tenancies: Vec<TenancyRecord>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReconcileResponse {
    pub evaluated: usize,
    pub to_deactivate: Vec<AvailabilityId>,
    pub to_update_status: Vec<StatusUpdate>,
}

impl ReconcileResponse {
    pub fn reconcile(
        availabilities: &[ActiveAvailability],
        tenancies: &[TenancyRecord],
    ) -> Result<Self, intake::IntakeError> {
        intake::validate_availabilities(availabilities)?;
        intake::validate_tenancies(tenancies)?;

        let result = sweep_stale_availability(availabilities, tenancies);
        Ok(Self {
            evaluated: availabilities.len(),
            to_deactivate: result.to_deactivate,
            to_update_status: result.to_update_status,
        })
    }
}

pub(crate) async fn reconcile_handler(
    Json(request): Json<ReconcileRequest>,
) -> Result<Json<ReconcileResponse>, AppError> {
    let response = ReconcileResponse::reconcile(&request.availabilities, &request.tenancies)?;
    Ok(Json(response))
}
