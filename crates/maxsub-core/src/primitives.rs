//! # Solver Primitives
//!
//! Hardcoded constants for the maxsub core.
//!
//! ## Primitives
//!
//! 1. **Merge Threshold**: the right-hand side of the merge predicate.
//! 2. **Input Limits**: bounds enforced at the binary's boundaries.

use crate::Sum;

/// Right-hand side of the merge predicate.
///
/// Two adjacent runs merge when `min(prev.sum, cur.sum) + gap >= MERGE_THRESHOLD`.
/// The comparison is tie-inclusive: a pair whose smaller sum exactly cancels
/// the gap is merged.
pub const MERGE_THRESHOLD: Sum = 0;

// =============================================================================
// INPUT VALIDATION LIMITS
// =============================================================================

/// Maximum number of elements accepted from a file or an HTTP request.
///
/// Bounds memory and the O(n log n) merge loop per request.
pub const MAX_INPUT_LENGTH: usize = 100_000;

/// Maximum size of an input file read by the CLI (16 MB).
pub const MAX_INPUT_FILE_SIZE: u64 = 16 * 1024 * 1024;
