use crate::money::Money;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier wrapper for amenity rent adjustments.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AmenityId(pub String);

impl fmt::Display for AmenityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for AmenityId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for AmenityId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

/// Optional rent adjustment that may be applied to a unit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AmenityOption {
    pub id: AmenityId,
    pub amount: Money,
}

impl AmenityOption {
    pub fn new(id: impl Into<AmenityId>, amount: Money) -> Self {
        Self {
            id: id.into(),
            amount,
        }
    }
}

/// Amenities selected to close a rent gap and what is left of the gap afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RentSolverResult {
    pub combination: Vec<AmenityOption>,
    pub remaining_gap: Money,
}

impl RentSolverResult {
    pub(crate) fn new(target_gap: Money, combination: Vec<AmenityOption>) -> Self {
        let applied: Money = combination.iter().map(|option| option.amount).sum();
        Self {
            combination,
            remaining_gap: target_gap - applied,
        }
    }

    pub fn applied_total(&self) -> Money {
        self.combination.iter().map(|option| option.amount).sum()
    }

    pub fn is_exact(&self) -> bool {
        !self.combination.is_empty() && self.remaining_gap.is_zero()
    }

    pub fn contains(&self, id: &AmenityId) -> bool {
        self.combination.iter().any(|option| &option.id == id)
    }
}
