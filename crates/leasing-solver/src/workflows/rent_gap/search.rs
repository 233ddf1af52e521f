use super::domain::AmenityOption;
use super::policy::{Fit, SolverPolicy};
use crate::money::Money;

/// Best combination found so far, as indices into the search ordering.
#[derive(Debug, Clone)]
pub(crate) struct Selection {
    pub indices: Vec<usize>,
    pub fit: Fit,
}

/// Depth-bounded branch search over amenity combinations.
pub(crate) struct CombinationSearch<'a> {
    policy: &'a SolverPolicy,
    target_gap: Money,
    options: &'a [&'a AmenityOption],
    chosen: Vec<usize>,
    best: Selection,
    visited: usize,
}

impl<'a> CombinationSearch<'a> {
    pub(crate) fn new(
        policy: &'a SolverPolicy,
        target_gap: Money,
        options: &'a [&'a AmenityOption],
        seed: Selection,
    ) -> Self {
        Self {
            policy,
            target_gap,
            options,
            chosen: Vec::with_capacity(policy.max_combination_size),
            best: seed,
            visited: 0,
        }
    }

    /// Returns the best selection and the number of nodes visited.
    pub(crate) fn run(mut self) -> (Selection, usize) {
        self.extend(0, Money::ZERO);
        (self.best, self.visited)
    }

    /// Returns `true` once an exact match ends the search.
    fn extend(&mut self, start: usize, applied: Money) -> bool {
        for index in start..self.options.len() {
            let applied = applied + self.options[index].amount;
            self.chosen.push(index);
            self.visited += 1;

            let fit = Fit {
                delta: self.target_gap - applied,
                len: self.chosen.len(),
            };

            // every node is re-ranked: the near-tie rule is not transitive, so a
            // single amenity can win back after longer combinations replaced it
            if self.policy.prefers(fit, Some(self.best.fit)) {
                self.best = Selection {
                    indices: self.chosen.clone(),
                    fit,
                };
                if fit.delta.is_zero() {
                    return true;
                }
            }

            if self.policy.keeps_extending(self.target_gap, fit) && self.extend(index + 1, applied)
            {
                return true;
            }
            self.chosen.pop();
        }

        false
    }
}
