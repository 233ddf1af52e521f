//! Stale-availability sweep: reconciles advertised listings against tenancy records.

mod classify;
pub mod domain;
mod priority;
pub mod router;

pub use classify::classify;
pub use domain::{
    ActiveAvailability, AvailabilityId, ClassificationResult, StatusUpdate, TenancyId,
    TenancyRecord, TenancyStatus, UnitId, APPLIED_STATUS, LEASED_STATUS,
};
pub use priority::TenancyPriorityMap;
pub use router::{availability_router, ReconcileRequest, ReconcileResponse};

use tracing::debug;

/// Builds the tenancy priority map and classifies every listing against it.
pub fn sweep_stale_availability(
    availabilities: &[ActiveAvailability],
    tenancies: &[TenancyRecord],
) -> ClassificationResult {
    let priority = TenancyPriorityMap::build(tenancies);
    let result = classify(availabilities, &priority);

    debug!(
        listings = availabilities.len(),
        tenancies = tenancies.len(),
        units = priority.len(),
        deactivate = result.to_deactivate.len(),
        update_status = result.to_update_status.len(),
        "stale availability sweep classified listings"
    );

    result
}
