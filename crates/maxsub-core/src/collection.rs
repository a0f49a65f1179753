//! # Run Collection
//!
//! Ordered set of pairwise-disjoint runs, keyed by start index.
//!
//! - Populated once by the segmenter
//! - Mutated only by the merge engine (remove two, insert one)
//! - Iteration is always in start order, so adjacent entries are
//!   neighbors in the array

use crate::{MaxSubError, Run};
use std::collections::BTreeMap;

/// Disjoint runs ordered by start index.
///
/// Uses BTreeMap for deterministic ordering and O(log n) insert/remove.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunSet {
    runs: BTreeMap<usize, Run>,
}

impl RunSet {
    /// Create an empty collection.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a run.
    ///
    /// Returns `MaxSubError::InvalidInput` if the run shares an index with a
    /// run already in the collection.
    pub fn insert(&mut self, run: Run) -> Result<(), MaxSubError> {
        let before = self.runs.range(..=run.start()).next_back();
        let after = self.runs.range(run.start()..).next();

        for (_, neighbor) in before.into_iter().chain(after) {
            if neighbor.overlaps(&run) {
                return Err(MaxSubError::invalid_input(format!(
                    "run {} overlaps {}",
                    run, neighbor
                )));
            }
        }

        self.runs.insert(run.start(), run);
        Ok(())
    }

    /// Remove the run starting at `start`.
    pub fn remove(&mut self, start: usize) -> Option<Run> {
        self.runs.remove(&start)
    }

    /// Get the run starting at `start`.
    #[must_use]
    pub fn get(&self, start: usize) -> Option<&Run> {
        self.runs.get(&start)
    }

    /// Number of runs.
    #[must_use]
    pub fn len(&self) -> usize {
        self.runs.len()
    }

    /// Check if the collection holds no runs.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.runs.is_empty()
    }

    /// First run in start order.
    #[must_use]
    pub fn first(&self) -> Option<&Run> {
        self.runs.values().next()
    }

    /// Iterate runs in start order.
    pub fn iter(&self) -> impl Iterator<Item = &Run> + '_ {
        self.runs.values()
    }

    /// The run immediately left of `start`, if any.
    #[must_use]
    pub fn before(&self, start: usize) -> Option<&Run> {
        self.runs.range(..start).next_back().map(|(_, run)| run)
    }

    /// Iterate `(prev, cur)` pairs of neighboring runs in start order.
    pub fn adjacent_pairs(&self) -> impl Iterator<Item = (&Run, &Run)> + '_ {
        self.adjacent_pairs_from(0)
    }

    /// Iterate neighboring pairs whose left run starts at or after `from`.
    ///
    /// Costs O(log n) to position, then O(1) per pair.
    pub fn adjacent_pairs_from(&self, from: usize) -> impl Iterator<Item = (&Run, &Run)> + '_ {
        self.runs
            .range(from..)
            .zip(self.runs.range(from..).skip(1))
            .map(|((_, prev), (_, cur))| (prev, cur))
    }

    /// The run with the largest sum; the leftmost one on ties.
    #[must_use]
    pub fn max_by_sum(&self) -> Option<&Run> {
        // min_by keeps the first of equal elements, and by_sum_desc puts the
        // largest sum first.
        self.runs.values().min_by(|a, b| Run::by_sum_desc(a, b))
    }

    /// Consume the collection, returning runs in start order.
    #[must_use]
    pub fn into_vec(self) -> Vec<Run> {
        self.runs.into_values().collect()
    }
}

// =============================================================================
// TESTS
// =============================================================================
