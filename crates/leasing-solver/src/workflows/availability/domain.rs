use serde::{Deserialize, Serialize};
use std::fmt;

macro_rules! string_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(pub String);

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<&str> for $name {
            fn from(value: &str) -> Self {
                Self(value.to_string())
            }
        }

        impl From<String> for $name {
            fn from(value: String) -> Self {
                Self(value)
            }
        }
    };
}

string_id!(
    /// Property-management unit identifier shared by tenancies and listings.
    UnitId
);
string_id!(TenancyId);
string_id!(
    /// Identifier of an active availability listing.
    AvailabilityId
);

/// Status written to a listing promised to a future tenant.
pub const LEASED_STATUS: &str = "Leased";
/// Status written to a listing with a pending applicant.
pub const APPLIED_STATUS: &str = "Applied";

/// Lifecycle status reported for a tenancy.
///
/// Matching is exact; anything other than the three recognized spellings is kept
/// verbatim as [`TenancyStatus::Other`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum TenancyStatus {
    Current,
    Future,
    Applicant,
    Other(String),
}

impl TenancyStatus {
    pub fn priority(&self) -> u8 {
        match self {
            Self::Current => 3,
            Self::Future => 2,
            Self::Applicant => 1,
            Self::Other(_) => 0,
        }
    }

    pub fn label(&self) -> &str {
        match self {
            Self::Current => "Current",
            Self::Future => "Future",
            Self::Applicant => "Applicant",
            Self::Other(raw) => raw.as_str(),
        }
    }
}

impl From<String> for TenancyStatus {
    fn from(value: String) -> Self {
        match value.as_str() {
            "Current" => Self::Current,
            "Future" => Self::Future,
            "Applicant" => Self::Applicant,
            _ => Self::Other(value),
        }
    }
}

impl From<&str> for TenancyStatus {
    fn from(value: &str) -> Self {
        Self::from(value.to_string())
    }
}

impl From<TenancyStatus> for String {
    fn from(value: TenancyStatus) -> Self {
        match value {
            TenancyStatus::Other(raw) => raw,
            recognized => recognized.label().to_string(),
        }
    }
}

impl fmt::Display for TenancyStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TenancyRecord {
    pub id: TenancyId,
    pub unit_id: UnitId,
    pub status: TenancyStatus,
}

/// Listing currently advertised as available for a unit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActiveAvailability {
    pub id: AvailabilityId,
    pub unit_id: UnitId,
    pub property_code: String,
    /// Free-form listing status such as "Available", "Applied", or "Leased".
    pub status: String,
}

/// Status correction for a listing whose unit is promised to a tenant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusUpdate {
    pub id: AvailabilityId,
    pub unit_id: UnitId,
    pub property_code: String,
    pub status: String,
    pub future_tenancy_id: TenancyId,
}

/// Listings to deactivate and listings whose status must change.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassificationResult {
    pub to_deactivate: Vec<AvailabilityId>,
    pub to_update_status: Vec<StatusUpdate>,
}

impl ClassificationResult {
    pub fn is_empty(&self) -> bool {
        self.to_deactivate.is_empty() && self.to_update_status.is_empty()
    }

    pub fn action_count(&self) -> usize {
        self.to_deactivate.len() + self.to_update_status.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_matching_is_exact() {
        assert_eq!(TenancyStatus::from("Current"), TenancyStatus::Current);
        assert_eq!(
            TenancyStatus::from("current"),
            TenancyStatus::Other("current".to_string())
        );
        assert_eq!(TenancyStatus::from("Notice").priority(), 0);
    }

    #[test]
    fn status_serializes_as_plain_string() {
        let record: TenancyRecord =
            serde_json::from_str(r#"{"id":"t1","unit_id":"u1","status":"Past"}"#)
                .expect("record parses");
        assert_eq!(record.status, TenancyStatus::Other("Past".to_string()));

        let json = serde_json::to_value(&TenancyStatus::Future).expect("serializes");
        assert_eq!(json, serde_json::json!("Future"));
    }
}
