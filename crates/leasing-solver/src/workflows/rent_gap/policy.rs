use crate::money::Money;
use serde::{Deserialize, Serialize};

/// Product-tuned thresholds steering which amenity combination is offered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SolverPolicy {
    /// Candidates whose remaining gaps differ by at most this much are ranked by size instead.
    pub length_tie_tolerance: Money,
    /// Multi-amenity search only runs when the best single amenity misses by more than this.
    pub combination_threshold: Money,
    /// Branches of two or more amenities must close at least this share of the gap to grow.
    pub min_gap_reduction_pct: u8,
    pub max_combination_size: usize,
}

impl Default for SolverPolicy {
    fn default() -> Self {
        Self {
            length_tie_tolerance: Money::from_dollars(5),
            combination_threshold: Money::from_dollars(10),
            min_gap_reduction_pct: 25,
            max_combination_size: 4,
        }
    }
}

/// How well a candidate combination closes the gap.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Fit {
    /// Signed gap left after applying the candidate.
    pub delta: Money,
    pub len: usize,
}

impl SolverPolicy {
    /// Whether `candidate` should replace the current best selection.
    pub(crate) fn prefers(&self, candidate: Fit, best: Option<Fit>) -> bool {
        let Some(best) = best else {
            return candidate.len > 0;
        };
        if candidate.len == 0 {
            return false;
        }

        let challenger = candidate.delta.abs();
        let incumbent = best.delta.abs();
        match (challenger.is_zero(), incumbent.is_zero()) {
            (true, false) => return true,
            (_, true) => return false,
            _ => {}
        }

        if (challenger - incumbent).abs() <= self.length_tie_tolerance && candidate.len != best.len
        {
            return candidate.len < best.len;
        }

        challenger < incumbent
    }

    pub(crate) fn worth_searching(&self, target_gap: Money, best: Fit) -> bool {
        !target_gap.is_zero() && best.delta.abs() > self.combination_threshold
    }

    /// Depth cap plus the gap-reduction pruning rule for branches of two or more amenities.
    pub(crate) fn keeps_extending(&self, target_gap: Money, node: Fit) -> bool {
        if node.len >= self.max_combination_size {
            return false;
        }
        if node.len < 2 {
            return true;
        }

        let target = i128::from(target_gap.abs().cents());
        let remaining = i128::from(node.delta.abs().cents());
        (target - remaining) * 100 >= i128::from(self.min_gap_reduction_pct) * target
    }
}
