//! # Core Type Definitions
//!
//! This module contains the value types shared by every stage of the solver:
//! - Numeric aliases (`Element`, `Sum`)
//! - The interval record (`Run`)
//! - Output structures (`Solution`, `Resolution`)
//! - The merge budget (`MergeBudget`)
//! - Error types (`MaxSubError`)
//!
//! ## Arithmetic Guarantees
//!
//! Input elements are `i64`, every accumulated quantity is `i128`.
//! A sum of `n` elements is bounded by `n * 2^63`, which stays inside `i128`
//! for any slice length addressable on a 64-bit target.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use thiserror::Error;

// =============================================================================
// NUMERIC ALIASES
// =============================================================================

/// A single input element.
pub type Element = i64;

/// Accumulator for run sums, gap sums and merged sums.
pub type Sum = i128;

// =============================================================================
// RUN
// =============================================================================

/// An inclusive index interval `[start, end]` of the input with its sum.
///
/// A Run is immutable once built. Merging two runs produces a new Run.
///
/// `start <= end` always holds: outside the crate a Run can only be built
/// through [`Run::try_new`] or deserialization, and both check it.
///
/// `Run` has no `Ord`: storage ordering ([`Run::by_start`]) and
/// best-candidate ordering ([`Run::by_sum_desc`]) are separate relations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RunFields")]
pub struct Run {
    start: usize,
    end: usize,
    sum: Sum,
}

/// Unchecked wire form of a [`Run`].
#[derive(Deserialize)]
struct RunFields {
    start: usize,
    end: usize,
    sum: Sum,
}

impl TryFrom<RunFields> for Run {
    type Error = MaxSubError;

    fn try_from(fields: RunFields) -> Result<Self, Self::Error> {
        Run::try_new(fields.start, fields.end, fields.sum)
    }
}

impl Run {
    /// Create a run whose bounds are already known to be ordered.
    pub(crate) const fn new(start: usize, end: usize, sum: Sum) -> Self {
        debug_assert!(start <= end);
        Self { start, end, sum }
    }

    /// Create a run, rejecting `start > end`.
    ///
    /// The sum is taken as given; it is not checked against any array.
    pub fn try_new(start: usize, end: usize, sum: Sum) -> Result<Self, MaxSubError> {
        if start > end {
            return Err(MaxSubError::invalid_input(format!(
                "run start {} is after end {}",
                start, end
            )));
        }
        Ok(Self::new(start, end, sum))
    }

    /// A run covering exactly one index.
    #[must_use]
    pub fn single(index: usize, value: Element) -> Self {
        Self::new(index, index, Sum::from(value))
    }

    /// First index covered (inclusive).
    #[must_use]
    pub const fn start(&self) -> usize {
        self.start
    }

    /// Last index covered (inclusive).
    #[must_use]
    pub const fn end(&self) -> usize {
        self.end
    }

    /// Sum of the covered elements.
    #[must_use]
    pub const fn sum(&self) -> Sum {
        self.sum
    }

    /// Number of covered elements.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.end - self.start + 1
    }

    /// Always false; a run covers at least one index.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        false
    }

    /// Check if two runs share at least one index.
    #[must_use]
    pub const fn overlaps(&self, other: &Run) -> bool {
        self.start <= other.end && other.start <= self.end
    }

    /// Merge with a disjoint run, absorbing the gap between them.
    ///
    /// `gap` must be the sum of the elements strictly between the two runs.
    /// The result covers `[min(start), max(end)]`.
    #[must_use]
    pub fn merge(&self, other: &Run, gap: Sum) -> Run {
        Run::new(
            self.start.min(other.start),
            self.end.max(other.end),
            self.sum + other.sum + gap,
        )
    }

    /// Storage ordering: start index ascending.
    #[must_use]
    pub fn by_start(a: &Run, b: &Run) -> Ordering {
        a.start.cmp(&b.start)
    }

    /// Candidate ordering: sum descending.
    #[must_use]
    pub fn by_sum_desc(a: &Run, b: &Run) -> Ordering {
        b.sum.cmp(&a.sum)
    }
}

impl std::fmt::Display for Run {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}..={}] sum={}", self.start, self.end, self.sum)
    }
}

// =============================================================================
// MERGE BUDGET
// =============================================================================

/// Upper bound on the number of merges a single solve may perform.
///
/// The merge loop is quadratic in the number of runs. Callers that need
/// bounded latency pass `Limited(n)`; the engine fails with
/// [`MaxSubError::BudgetExhausted`] instead of performing merge `n + 1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum MergeBudget {
    /// No limit.
    #[default]
    Unbounded,
    /// At most this many merges.
    Limited(usize),
}

impl MergeBudget {
    /// Build a budget from a config value where `0` means unbounded.
    #[must_use]
    pub const fn from_limit(limit: usize) -> Self {
        if limit == 0 {
            Self::Unbounded
        } else {
            Self::Limited(limit)
        }
    }

    /// Check if another merge is allowed after `performed` merges.
    #[must_use]
    pub const fn allows(&self, performed: usize) -> bool {
        match self {
            Self::Unbounded => true,
            Self::Limited(limit) => performed < *limit,
        }
    }
}

// =============================================================================
// SOLUTION
// =============================================================================

/// Which path of the solver produced the answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Resolution {
    /// No non-negative element: the answer is the largest single element.
    AllNegative,
    /// Exactly one run: the answer is its sum.
    SingleRun,
    /// Two or more runs went through the merge engine.
    Merged,
}

impl Resolution {
    /// Get string representation.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Resolution::AllNegative => "all_negative",
            Resolution::SingleRun => "single_run",
            Resolution::Merged => "merged",
        }
    }
}

impl std::fmt::Display for Resolution {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result of a solve: the winning interval plus how it was reached.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Solution {
    /// The interval holding the best sum.
    pub best: Run,
    /// Number of runs produced by segmentation.
    pub initial_runs: usize,
    /// Number of merges performed by the engine.
    pub merges: usize,
    /// Which path produced the answer.
    pub resolution: Resolution,
}

impl Solution {
    /// The maximum subarray sum.
    #[must_use]
    pub const fn sum(&self) -> Sum {
        self.best.sum
    }
}

// =============================================================================
// ERROR TYPES
// =============================================================================

/// Errors that can occur in maxsub.
///
/// - No silent sentinels: an empty input is an error, never `0` or `MIN`
/// - Use `Result<T, MaxSubError>` for fallible operations
/// - The core never panics on caller input
#[derive(Debug, Error)]
pub enum MaxSubError {
    /// The input violates a precondition (empty array, overlapping run, oversize input).
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// The merge budget ran out before the engine reached a fixed point.
    #[error("Merge budget exhausted after {merges} merges")]
    BudgetExhausted {
        /// Merges performed before giving up.
        merges: usize,
    },

    /// Input text could not be parsed into integers.
    #[error("Parse error: {0}")]
    ParseError(String),

    /// Configuration could not be loaded.
    #[error("Config error: {0}")]
    ConfigError(String),

    /// An I/O error occurred.
    #[error("I/O error: {0}")]
    IoError(String),
}

impl MaxSubError {
    /// Creates a `MaxSubError::InvalidInput`.
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }

    /// The error every operation returns for an empty slice.
    pub fn empty_input(operation: &str) -> Self {
        Self::InvalidInput(format!("{} requires a non-empty array", operation))
    }
}

// =============================================================================
// TESTS
// =============================================================================
