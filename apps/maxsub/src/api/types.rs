//! # API Request/Response Types
//!
//! This module defines the JSON structures for the HTTP API.

use maxsub_core::{Element, MaxSubError, Solution, Sum};
use serde::{Deserialize, Serialize};

// =============================================================================
// HEALTH RESPONSE
// =============================================================================

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

impl Default for HealthResponse {
    fn default() -> Self {
        Self {
            status: "ok".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}

// =============================================================================
// VALUES REQUEST
// =============================================================================

/// Request body shared by `/solve` and `/gap`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValuesRequest {
    pub values: Vec<Element>,
}

impl ValuesRequest {
    /// Validate the payload before it reaches the core.
    ///
    /// Empty arrays are left to the core, which reports them as
    /// `InvalidInput` itself; only the length cap is enforced here.
    pub fn validated(&self, max_len: usize) -> Result<&[Element], MaxSubError> {
        if self.values.len() > max_len {
            return Err(MaxSubError::invalid_input(format!(
                "input length {} exceeds maximum {}",
                self.values.len(),
                max_len
            )));
        }
        Ok(&self.values)
    }
}

// =============================================================================
// SOLVE RESPONSE
// =============================================================================

/// Maximum subarray response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SolveResponse {
    pub success: bool,
    pub sum: Option<Sum>,
    pub start: Option<usize>,
    pub end: Option<usize>,
    pub initial_runs: Option<usize>,
    pub merges: Option<usize>,
    pub resolution: Option<String>,
    pub error: Option<String>,
}

impl SolveResponse {
    /// Create a success response from a solution.
    pub fn success(solution: &Solution) -> Self {
        Self {
            success: true,
            sum: Some(solution.sum()),
            start: Some(solution.best.start()),
            end: Some(solution.best.end()),
            initial_runs: Some(solution.initial_runs),
            merges: Some(solution.merges),
            resolution: Some(solution.resolution.to_string()),
            error: None,
        }
    }

    /// Create an error response.
    pub fn error(msg: impl Into<String>) -> Self {
        Self {
            success: false,
            sum: None,
            start: None,
            end: None,
            initial_runs: None,
            merges: None,
            resolution: None,
            error: Some(msg.into()),
        }
    }
}

// =============================================================================
// GAP RESPONSE
// =============================================================================

/// Largest gap response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GapResponse {
    pub success: bool,
    pub gap: Option<Sum>,
    pub error: Option<String>,
}

impl GapResponse {
    /// Create a success response.
    pub fn success(gap: Sum) -> Self {
        Self {
            success: true,
            gap: Some(gap),
            error: None,
        }
    }

    /// Create an error response.
    pub fn error(msg: impl Into<String>) -> Self {
        Self {
            success: false,
            gap: None,
            error: Some(msg.into()),
        }
    }
}
