//! # Merge Engine
//!
//! Drives a [`RunSet`] to its fixed point.
//!
//! Each step scans adjacent pairs in start order and merges the FIRST pair
//! satisfying
//!
//! ```text
//! min(prev.sum, cur.sum) + gap_sum(prev, cur) >= MERGE_THRESHOLD
//! ```
//!
//! The scan never looks for a "better" pair past the first eligible one, and
//! after every merge the next search must again return the leftmost eligible
//! pair. This is a greedy local rule: it is exact for up to two runs but can
//! stop short of the optimum on longer inputs, and it is kept as-is.
//!
//! ## Scan cursor
//!
//! A merge only creates two new pairs: (predecessor, merged) and
//! (merged, successor). Every pair further left is unchanged and was already
//! found ineligible, so [`MergeEngine::run`] resumes at the predecessor
//! instead of the first run. The merge sequence is identical to rescanning
//! from the left, and each pair is visited O(1) times amortized, so a full
//! run costs O(runs log runs).

use crate::collection::RunSet;
use crate::prefix::PrefixSums;
use crate::primitives::MERGE_THRESHOLD;
use crate::{MaxSubError, MergeBudget, Run, Sum};

/// An adjacent pair selected for merging, with the gap between them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MergeCandidate {
    /// Left run.
    pub prev: Run,
    /// Right run.
    pub cur: Run,
    /// Sum of the elements strictly between them.
    pub gap: Sum,
}

/// What the engine produced when it stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MergeOutcome {
    /// Run holding the best sum seen (initial runs included).
    pub best: Run,
    /// Number of merges performed.
    pub merges: usize,
}

/// The MergeEngine applies the merge rule until no pair is eligible.
pub struct MergeEngine<'a> {
    prefix: &'a PrefixSums,
    budget: MergeBudget,
}

impl<'a> MergeEngine<'a> {
    /// Create an unbounded engine reading gap sums from `prefix`.
    #[must_use]
    pub fn new(prefix: &'a PrefixSums) -> Self {
        Self {
            prefix,
            budget: MergeBudget::Unbounded,
        }
    }

    /// Limit the number of merges a single [`MergeEngine::run`] may perform.
    #[must_use]
    pub fn with_budget(mut self, budget: MergeBudget) -> Self {
        self.budget = budget;
        self
    }

    /// Check if a pair is eligible under the merge rule.
    #[must_use]
    pub fn is_eligible(prev: &Run, cur: &Run, gap: Sum) -> bool {
        prev.sum().min(cur.sum()) + gap >= MERGE_THRESHOLD
    }

    /// Find the first eligible adjacent pair in start order.
    #[must_use]
    pub fn find_candidate(&self, runs: &RunSet) -> Option<MergeCandidate> {
        self.find_candidate_from(runs, 0)
    }

    /// Find the first eligible adjacent pair whose left run starts at or
    /// after `from`.
    #[must_use]
    pub fn find_candidate_from(&self, runs: &RunSet, from: usize) -> Option<MergeCandidate> {
        runs.adjacent_pairs_from(from).find_map(|(prev, cur)| {
            let gap = self.prefix.gap_sum(prev, cur);
            Self::is_eligible(prev, cur, gap).then_some(MergeCandidate {
                prev: *prev,
                cur: *cur,
                gap,
            })
        })
    }

    /// Check if `runs` is at its fixed point.
    #[must_use]
    pub fn is_fixed_point(&self, runs: &RunSet) -> bool {
        runs.len() < 2 || self.find_candidate(runs).is_none()
    }

    /// Perform one merge step, scanning from the first run.
    ///
    /// Returns the new run, or `None` if no pair is eligible.
    pub fn step(&self, runs: &mut RunSet) -> Result<Option<Run>, MaxSubError> {
        match self.find_candidate(runs) {
            Some(candidate) => Self::apply(runs, &candidate).map(Some),
            None => Ok(None),
        }
    }

    /// Replace the candidate pair with its merged run.
    fn apply(runs: &mut RunSet, candidate: &MergeCandidate) -> Result<Run, MaxSubError> {
        let merged = candidate.prev.merge(&candidate.cur, candidate.gap);
        runs.remove(candidate.prev.start());
        runs.remove(candidate.cur.start());
        runs.insert(merged)?;
        Ok(merged)
    }

    /// Merge until the fixed point, tracking the best run.
    ///
    /// The best run starts as the largest-sum run of the collection and is
    /// replaced by any merged run whose sum is greater than or equal to it.
    ///
    /// # Errors
    /// - `MaxSubError::InvalidInput` if `runs` is empty
    /// - `MaxSubError::BudgetExhausted` if a merge is pending once the budget is spent
    pub fn run(&self, runs: &mut RunSet) -> Result<MergeOutcome, MaxSubError> {
        self.run_observed(runs, |_| {})
    }

    /// [`MergeEngine::run`], reporting each merged run to `on_merge` in order.
    fn run_observed(
        &self,
        runs: &mut RunSet,
        mut on_merge: impl FnMut(&Run),
    ) -> Result<MergeOutcome, MaxSubError> {
        let mut best = *runs
            .max_by_sum()
            .ok_or_else(|| MaxSubError::empty_input("merge engine"))?;
        let mut merges = 0;
        // Every pair whose left run starts before `cursor` is ineligible.
        let mut cursor = 0;

        while let Some(candidate) = self.find_candidate_from(runs, cursor) {
            if !self.budget.allows(merges) {
                return Err(MaxSubError::BudgetExhausted { merges });
            }

            let merged = Self::apply(runs, &candidate)?;
            merges += 1;
            on_merge(&merged);

            if merged.sum() >= best.sum() {
                best = merged;
            }

            cursor = runs
                .before(merged.start())
                .map_or(merged.start(), Run::start);
        }

        Ok(MergeOutcome { best, merges })
    }
}

// =============================================================================
// TESTS
// =============================================================================
