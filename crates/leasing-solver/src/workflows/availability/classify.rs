use super::domain::{
    ActiveAvailability, ClassificationResult, StatusUpdate, TenancyRecord, TenancyStatus,
    APPLIED_STATUS, LEASED_STATUS,
};
use super::priority::TenancyPriorityMap;

/// Decision for a single listing.
enum ListingAction<'a> {
    Deactivate,
    SetStatus {
        status: &'static str,
        tenancy: &'a TenancyRecord,
    },
    Keep,
}

fn decide<'a>(availability: &ActiveAvailability, tenancy: &'a TenancyRecord) -> ListingAction<'a> {
    let target = match tenancy.status {
        TenancyStatus::Current => return ListingAction::Deactivate,
        TenancyStatus::Future => LEASED_STATUS,
        TenancyStatus::Applicant => APPLIED_STATUS,
        TenancyStatus::Other(_) => return ListingAction::Keep,
    };

    if availability.status == target {
        ListingAction::Keep
    } else {
        ListingAction::SetStatus {
            status: target,
            tenancy,
        }
    }
}

/// Splits listings into deactivations and status corrections, preserving input order.
pub fn classify(
    availabilities: &[ActiveAvailability],
    tenancies: &TenancyPriorityMap,
) -> ClassificationResult {
    let mut result = ClassificationResult::default();

    for availability in availabilities {
        let Some(tenancy) = tenancies.get(&availability.unit_id) else {
            continue;
        };

        match decide(availability, tenancy) {
            ListingAction::Deactivate => result.to_deactivate.push(availability.id.clone()),
            ListingAction::SetStatus { status, tenancy } => {
                result.to_update_status.push(StatusUpdate {
                    id: availability.id.clone(),
                    unit_id: availability.unit_id.clone(),
                    property_code: availability.property_code.clone(),
                    status: status.to_string(),
                    future_tenancy_id: tenancy.id.clone(),
                })
            }
            ListingAction::Keep => {}
        }
    }

    result
}
