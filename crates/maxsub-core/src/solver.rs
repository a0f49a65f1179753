//! # Solver
//!
//! Public entry points tying the pipeline together:
//!
//! ```text
//! values -> PrefixSums -> Segmenter -> RunSet -> degenerate check -> MergeEngine -> Solution
//! ```
//!
//! Degenerate cases short-circuit before the engine:
//! - no runs (every element negative): the largest element, first occurrence
//! - one run: that run

use crate::engine::MergeEngine;
use crate::prefix::PrefixSums;
use crate::segmenter::Segmenter;
use crate::{Element, MaxSubError, MergeBudget, Resolution, Run, Solution, Sum};

/// Configurable solver. `Solver::default()` is unbounded.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Solver {
    budget: MergeBudget,
}

impl Solver {
    /// Create an unbounded solver.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Limit the number of merges per solve.
    #[must_use]
    pub fn with_budget(mut self, budget: MergeBudget) -> Self {
        self.budget = budget;
        self
    }

    /// The configured merge budget.
    #[must_use]
    pub const fn budget(&self) -> MergeBudget {
        self.budget
    }

    /// Solve, reporting the winning run and how it was reached.
    ///
    /// # Errors
    /// - `MaxSubError::InvalidInput` if `values` is empty
    /// - `MaxSubError::BudgetExhausted` if the merge budget runs out
    pub fn solve(&self, values: &[Element]) -> Result<Solution, MaxSubError> {
        if values.is_empty() {
            return Err(MaxSubError::empty_input("max_subarray_sum"));
        }

        let prefix = PrefixSums::new(values);
        let mut runs = Segmenter::segment(values, &prefix)?;
        let initial_runs = runs.len();

        match initial_runs {
            0 => {
                let best = largest_element(values)
                    .ok_or_else(|| MaxSubError::empty_input("max_subarray_sum"))?;
                Ok(Solution {
                    best,
                    initial_runs,
                    merges: 0,
                    resolution: Resolution::AllNegative,
                })
            }
            1 => {
                let best = *runs
                    .first()
                    .ok_or_else(|| MaxSubError::empty_input("max_subarray_sum"))?;
                Ok(Solution {
                    best,
                    initial_runs,
                    merges: 0,
                    resolution: Resolution::SingleRun,
                })
            }
            _ => {
                let outcome = MergeEngine::new(&prefix)
                    .with_budget(self.budget)
                    .run(&mut runs)?;
                Ok(Solution {
                    best: outcome.best,
                    initial_runs,
                    merges: outcome.merges,
                    resolution: Resolution::Merged,
                })
            }
        }
    }

    /// Solve, returning only the best sum.
    pub fn max_subarray_sum(&self, values: &[Element]) -> Result<Sum, MaxSubError> {
        self.solve(values).map(|solution| solution.sum())
    }
}

/// Maximum sum over all non-empty contiguous subsequences, per the run-merge rule.
///
/// Returns `MaxSubError::InvalidInput` for an empty slice.
pub fn max_subarray_sum(values: &[Element]) -> Result<Sum, MaxSubError> {
    Solver::new().max_subarray_sum(values)
}

/// Like [`max_subarray_sum`], also reporting the winning interval.
pub fn solve(values: &[Element]) -> Result<Solution, MaxSubError> {
    Solver::new().solve(values)
}

/// Single-element run at the first occurrence of the largest value.
fn largest_element(values: &[Element]) -> Option<Run> {
    let (first, rest) = values.split_first()?;
    let mut best = (0, *first);
    for (offset, &value) in rest.iter().enumerate() {
        if value > best.1 {
            best = (offset + 1, value);
        }
    }
    Some(Run::single(best.0, best.1))
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_input_is_rejected() {
        let result = max_subarray_sum(&[]);
        assert!(matches!(result, Err(MaxSubError::InvalidInput(_))));
    }

    #[test]
    fn all_negative_picks_first_largest() {
        let solution = solve(&[-2, -2, -1, -2, -1, -2]).expect("solve");
        assert_eq!(solution.best, Run::new(2, 2, -1));
        assert_eq!(solution.resolution, Resolution::AllNegative);
        assert_eq!(solution.initial_runs, 0);
    }

    #[test]
    fn single_run_short_circuits() {
        let solution = solve(&[-3, -1, 6, 7, 0]).expect("solve");
        assert_eq!(solution.best, Run::new(2, 4, 13));
        assert_eq!(solution.resolution, Resolution::SingleRun);
        assert_eq!(solution.merges, 0);
    }

    #[test]
    fn merged_path_reports_interval() {
        let solution = solve(&[-2, 1, -3, 4, -1, 2, 1, -5, 4]).expect("solve");
        assert_eq!(solution.sum(), 6);
        assert_eq!(solution.best, Run::new(3, 6, 6));
        assert_eq!(solution.initial_runs, 4);
        assert_eq!(solution.merges, 1);
        assert_eq!(solution.resolution, Resolution::Merged);
    }

    #[test]
    fn two_runs_without_merge() {
        // min(3, 3) - 4 < 0: stays apart, best is the leftmost run.
        let solution = solve(&[3, -4, 3]).expect("solve");
        assert_eq!(solution.best, Run::new(0, 0, 3));
        assert_eq!(solution.merges, 0);
    }

    #[test]
    fn budget_propagates() {
        let solver = Solver::new().with_budget(MergeBudget::Limited(1));
        assert_eq!(solver.budget(), MergeBudget::Limited(1));

        let result = solver.solve(&[1, -1, 1, -1, 1]);
        assert!(matches!(
            result,
            Err(MaxSubError::BudgetExhausted { merges: 1 })
        ));

        // Degenerate paths never consult the budget.
        let solver = Solver::new().with_budget(MergeBudget::Limited(0));
        assert_eq!(solver.max_subarray_sum(&[1, 2, 3]).expect("sum"), 6);
    }

    #[test]
    fn extremes_do_not_overflow() {
        let max = i128::from(i64::MAX);
        assert_eq!(
            max_subarray_sum(&[i64::MAX, i64::MAX, -1, i64::MAX]).expect("sum"),
            3 * max - 1
        );
        assert_eq!(
            max_subarray_sum(&[i64::MIN, i64::MIN]).expect("sum"),
            i128::from(i64::MIN)
        );
    }
}
