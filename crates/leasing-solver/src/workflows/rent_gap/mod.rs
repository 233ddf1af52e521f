//! Rent-gap solver: picks the amenity adjustments that best close a target rent offset.

pub mod domain;
mod policy;
pub mod router;
mod search;

pub use domain::{AmenityId, AmenityOption, RentSolverResult};
pub use policy::SolverPolicy;
pub use router::{rent_gap_router, SolveRequest, SolveResponse};

use crate::money::Money;
use policy::Fit;
use search::{CombinationSearch, Selection};
use std::cmp::Reverse;
use tracing::debug;

/// Stateless solver that applies a [`SolverPolicy`] to a pool of amenity options.
#[derive(Debug, Clone, Default)]
pub struct RentGapSolver {
    policy: SolverPolicy,
}

impl RentGapSolver {
    pub fn new(policy: SolverPolicy) -> Self {
        Self { policy }
    }

    pub fn policy(&self) -> &SolverPolicy {
        &self.policy
    }

    /// Selects the amenity combination that best closes `target_gap`.
    ///
    /// `options` is never reordered; the returned combination holds clones of the
    /// chosen entries. A non-empty pool always yields at least one amenity.
    pub fn solve(&self, target_gap: Money, options: &[AmenityOption]) -> RentSolverResult {
        let mut ordered: Vec<&AmenityOption> = options.iter().collect();
        ordered.sort_by_key(|option| Reverse(option.amount.abs()));

        let mut best: Option<Selection> = None;
        for (index, option) in ordered.iter().enumerate() {
            let fit = Fit {
                delta: target_gap - option.amount,
                len: 1,
            };
            if fit.delta.is_zero() {
                debug!(%target_gap, amenity = %option.id, "single amenity closes rent gap");
                return RentSolverResult::new(target_gap, vec![(*option).clone()]);
            }
            if self.policy.prefers(fit, best.as_ref().map(|selection| selection.fit)) {
                best = Some(Selection {
                    indices: vec![index],
                    fit,
                });
            }
        }

        let Some(best) = best else {
            return RentSolverResult::new(target_gap, Vec::new());
        };

        let best = if self.policy.worth_searching(target_gap, best.fit) {
            let (selection, visited) =
                CombinationSearch::new(&self.policy, target_gap, &ordered, best).run();
            debug!(
                %target_gap,
                visited,
                size = selection.fit.len,
                remaining = %selection.fit.delta,
                "combination search finished"
            );
            selection
        } else {
            best
        };

        let combination = best
            .indices
            .iter()
            .map(|&index| ordered[index].clone())
            .collect();
        RentSolverResult::new(target_gap, combination)
    }
}

/// Solves with the default [`SolverPolicy`].
pub fn solve(target_gap: Money, options: &[AmenityOption]) -> RentSolverResult {
    RentGapSolver::default().solve(target_gap, options)
}
