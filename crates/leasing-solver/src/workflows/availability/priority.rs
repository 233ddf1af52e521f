use super::domain::{TenancyRecord, UnitId};
use std::collections::HashMap;

/// Highest-priority tenancy per unit, fixed once built.
///
/// Priority is `Current > Future > Applicant > anything else`; among equal
/// priorities the record seen first wins.
#[derive(Debug, Clone, Default)]
pub struct TenancyPriorityMap {
    by_unit: HashMap<UnitId, TenancyRecord>,
}

impl TenancyPriorityMap {
    pub fn build(tenancies: &[TenancyRecord]) -> Self {
        let mut map = Self::default();
        for tenancy in tenancies {
            if map.outranked_by(tenancy) {
                map.by_unit.insert(tenancy.unit_id.clone(), tenancy.clone());
            }
        }
        map
    }

    /// Strictly higher priority is required to replace the kept record.
    fn outranked_by(&self, tenancy: &TenancyRecord) -> bool {
        self.by_unit
            .get(&tenancy.unit_id)
            .map_or(true, |kept| tenancy.status.priority() > kept.status.priority())
    }

    pub fn get(&self, unit_id: &UnitId) -> Option<&TenancyRecord> {
        self.by_unit.get(unit_id)
    }

    pub fn len(&self) -> usize {
        self.by_unit.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_unit.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&UnitId, &TenancyRecord)> {
        self.by_unit.iter()
    }
}

impl FromIterator<TenancyRecord> for TenancyPriorityMap {
    fn from_iter<I: IntoIterator<Item = TenancyRecord>>(iter: I) -> Self {
        let mut map = Self::default();
        for tenancy in iter {
            if map.outranked_by(&tenancy) {
                map.by_unit.insert(tenancy.unit_id.clone(), tenancy);
            }
        }
        map
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::workflows::availability::domain::TenancyStatus;

    fn tenancy(id: &str, unit: &str, status: &str) -> TenancyRecord {
        TenancyRecord {
            id: id.into(),
            unit_id: unit.into(),
            status: status.into(),
        }
    }

    #[test]
    fn current_wins_regardless_of_order() {
        let map = TenancyPriorityMap::build(&[
            tenancy("t1", "u1", "Applicant"),
            tenancy("t2", "u1", "Current"),
            tenancy("t3", "u1", "Future"),
        ]);
        assert_eq!(map.get(&"u1".into()).map(|t| t.id.0.as_str()), Some("t2"));
    }

    #[test]
    fn unknown_status_only_wins_an_otherwise_empty_unit() {
        let map = TenancyPriorityMap::build(&[
            tenancy("t1", "u1", "Past"),
            tenancy("t2", "u1", "Applicant"),
            tenancy("t3", "u2", "Past"),
            tenancy("t4", "u2", "Notice"),
        ]);
        assert_eq!(map.len(), 2);
        assert_eq!(map.get(&"u1".into()).map(|t| t.id.0.as_str()), Some("t2"));
        let fallback = map.get(&"u2".into()).expect("unit kept");
        assert_eq!(fallback.id.0, "t3");
        assert_eq!(fallback.status, TenancyStatus::Other("Past".to_string()));
    }

    #[test]
    fn collects_from_iterator_with_the_same_ranking_as_build() {
        let rows = [
            ("t1", "u1", "Future"),
            ("t2", "u1", "Future"),
            ("t3", "u2", "Applicant"),
            ("t4", "u1", "Current"),
        ];
        let map: TenancyPriorityMap = rows
            .iter()
            .map(|(id, unit, status)| tenancy(id, unit, status))
            .collect();
        let built = TenancyPriorityMap::build(
            &rows
                .iter()
                .map(|(id, unit, status)| tenancy(id, unit, status))
                .collect::<Vec<_>>(),
        );

        assert_eq!(map.len(), 2);
        for unit in ["u1", "u2"] {
            let unit = UnitId::from(unit);
            assert_eq!(map.get(&unit), built.get(&unit));
        }
        assert_eq!(map.get(&UnitId::from("u1")).map(|t| t.id.0.as_str()), Some("t4"));
    }
}
