//! Boundary validation and CSV loading for kernel inputs.
//!
//! The kernels trust their inputs; malformed records are rejected here with
//! [`IntakeError::InvalidInput`] before either kernel runs.

mod normalizer;
mod parser;

pub use parser::CsvIntake;

use crate::money::Money;
use crate::workflows::availability::{ActiveAvailability, TenancyRecord};
use crate::workflows::rent_gap::AmenityOption;
use std::collections::HashSet;

#[derive(Debug, thiserror::Error)]
pub enum IntakeError {
    #[error("failed to read input: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid CSV data: {0}")]
    Csv(#[from] csv::Error),
    #[error("invalid input at record {line}: {reason}")]
    InvalidInput { line: usize, reason: String },
    #[error("target gap {0} is outside the supported range of +/-{limit}", limit = Money::LIMIT)]
    TargetOutOfRange(Money),
}

impl IntakeError {
    pub(crate) fn invalid(line: usize, reason: impl Into<String>) -> Self {
        Self::InvalidInput {
            line,
            reason: reason.into(),
        }
    }
}

fn require_present(line: usize, field: &str, value: &str) -> Result<(), IntakeError> {
    if value.trim().is_empty() {
        return Err(IntakeError::invalid(line, format!("{field} is empty")));
    }
    Ok(())
}

pub fn validate_target_gap(target_gap: Money) -> Result<(), IntakeError> {
    if !target_gap.within_limit() {
        return Err(IntakeError::TargetOutOfRange(target_gap));
    }
    Ok(())
}

/// Amenity ids must be present and unique, amounts within [`Money::LIMIT`].
pub fn validate_amenities(options: &[AmenityOption]) -> Result<(), IntakeError> {
    let mut seen = HashSet::new();
    for (index, option) in options.iter().enumerate() {
        let line = index + 1;
        require_present(line, "amenity id", &option.id.0)?;
        if !option.amount.within_limit() {
            return Err(IntakeError::invalid(
                line,
                format!(
                    "amenity '{}' amount {} exceeds +/-{}",
                    option.id,
                    option.amount,
                    Money::LIMIT
                ),
            ));
        }
        if !seen.insert(&option.id) {
            return Err(IntakeError::invalid(
                line,
                format!("duplicate amenity id '{}'", option.id),
            ));
        }
    }
    Ok(())
}

pub fn validate_tenancies(tenancies: &[TenancyRecord]) -> Result<(), IntakeError> {
    for (index, tenancy) in tenancies.iter().enumerate() {
        let line = index + 1;
        require_present(line, "tenancy id", &tenancy.id.0)?;
        require_present(line, "tenancy unit_id", &tenancy.unit_id.0)?;
    }
    Ok(())
}

/// Listing ids must be present and unique; every listing needs a unit.
pub fn validate_availabilities(availabilities: &[ActiveAvailability]) -> Result<(), IntakeError> {
    let mut seen = HashSet::new();
    for (index, availability) in availabilities.iter().enumerate() {
        let line = index + 1;
        require_present(line, "availability id", &availability.id.0)?;
        require_present(line, "availability unit_id", &availability.unit_id.0)?;
        if !seen.insert(&availability.id) {
            return Err(IntakeError::invalid(
                line,
                format!("duplicate availability id '{}'", availability.id),
            ));
        }
    }
    Ok(())
}
