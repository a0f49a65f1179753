//! # Prefix Sums
//!
//! Exclusive prefix-sum table over the input array.
//!
//! `sums[i]` holds the sum of the first `i` elements, so any inclusive range
//! `[start, end]` costs two lookups. Both run sums and gap sums are read from
//! this table instead of re-scanning the array.

use crate::{Element, Run, Sum};

/// Prefix-sum table, one entry longer than the input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrefixSums {
    sums: Vec<Sum>,
}

impl PrefixSums {
    /// Build the table for `values`.
    #[must_use]
    pub fn new(values: &[Element]) -> Self {
        let mut sums = Vec::with_capacity(values.len() + 1);
        let mut acc: Sum = 0;
        sums.push(acc);
        for &value in values {
            acc += Sum::from(value);
            sums.push(acc);
        }
        Self { sums }
    }

    /// Number of elements the table covers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.sums.len() - 1
    }

    /// Check if the table covers no elements.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Sum of the elements in `[start, end)`. Empty ranges sum to zero.
    ///
    /// `end` must not exceed [`PrefixSums::len`].
    #[must_use]
    pub fn half_open(&self, start: usize, end: usize) -> Sum {
        if end <= start {
            return 0;
        }
        self.sums[end] - self.sums[start]
    }

    /// Sum of the elements in the inclusive range `[start, end]`.
    #[must_use]
    pub fn inclusive(&self, start: usize, end: usize) -> Sum {
        self.half_open(start, end + 1)
    }

    /// Build the run covering `[start, end]` with its sum. Requires `start <= end`.
    #[must_use]
    pub(crate) fn run(&self, start: usize, end: usize) -> Run {
        Run::new(start, end, self.inclusive(start, end))
    }

    /// Sum of the elements strictly between two disjoint runs.
    ///
    /// Covers `[min(a.end, b.end) + 1, max(a.start, b.start) - 1]`, so the
    /// argument order does not matter. Only meaningful for runs that are
    /// adjacent in a run collection.
    #[must_use]
    pub fn gap_sum(&self, a: &Run, b: &Run) -> Sum {
        let gap_start = a.end().min(b.end()) + 1;
        let gap_end = a.start().max(b.start());
        self.half_open(gap_start, gap_end)
    }
}

// =============================================================================
// TESTS
// =============================================================================
