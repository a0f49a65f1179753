//! # maxsub-core
//!
//! The deterministic run-merge engine for maxsub - THE LOGIC.
//!
//! Computes the maximum sum over all non-empty contiguous subsequences of an
//! integer array in two phases:
//!
//! 1. **Segmentation**: split the array into maximal runs of non-negative
//!    elements, kept in a [`RunSet`] ordered by start index.
//! 2. **Merging**: repeatedly merge the first adjacent pair whose smaller sum
//!    absorbs the gap between them, tracking the best sum seen, until no pair
//!    qualifies.
//!
//! ## Architectural Constraints
//!
//! - Pure: no I/O, no async, no logging, no shared state between calls
//! - Deterministic: the same input always takes the same merge sequence
//! - Wide accumulation: every sum is `i128`, so nothing wraps

// =============================================================================
// MODULES
// =============================================================================

pub mod collection;
pub mod engine;
pub mod gap;
pub mod prefix;
pub mod primitives;
pub mod segmenter;
pub mod solver;
pub mod types;

// =============================================================================
// RE-EXPORTS: Core Types (from types module)
// =============================================================================

pub use types::{Element, MaxSubError, MergeBudget, Resolution, Run, Solution, Sum};

// =============================================================================
// RE-EXPORTS: Engine
// =============================================================================

pub use collection::RunSet;
pub use engine::{MergeCandidate, MergeEngine, MergeOutcome};
pub use gap::{extremes, largest_gap};
pub use prefix::PrefixSums;
pub use segmenter::Segmenter;
pub use solver::{Solver, max_subarray_sum, solve};
