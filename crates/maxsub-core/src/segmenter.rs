//! # Run Segmenter
//!
//! Splits the input into maximal runs of non-negative elements.
//!
//! - Zero counts as non-negative
//! - Negative elements are never stored; they survive only as gap sums
//! - Every emitted run is maximal: extending it would include a negative

use crate::collection::RunSet;
use crate::prefix::PrefixSums;
use crate::{Element, MaxSubError};

/// The Segmenter performs the single left-to-right segmentation pass.
pub struct Segmenter;

impl Segmenter {
    /// Segment `values` into a fresh [`RunSet`].
    ///
    /// `prefix` must be the table built from the same `values`.
    pub fn segment(values: &[Element], prefix: &PrefixSums) -> Result<RunSet, MaxSubError> {
        let mut runs = RunSet::new();
        let mut open: Option<usize> = None;

        for (i, &value) in values.iter().enumerate() {
            match (value >= 0, open) {
                (true, None) => open = Some(i),
                (false, Some(start)) => {
                    runs.insert(prefix.run(start, i - 1))?;
                    open = None;
                }
                // Continuing a run, or continuing a stretch of negatives.
                (true, Some(_)) | (false, None) => {}
            }
        }

        if let Some(start) = open {
            runs.insert(prefix.run(start, values.len() - 1))?;
        }

        Ok(runs)
    }
}

// =============================================================================
// TESTS
// =============================================================================
