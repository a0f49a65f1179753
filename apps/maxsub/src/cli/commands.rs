//! # CLI Command Implementations
//!
//! This module contains the actual implementations of CLI commands.
//! Results go to stdout; logs go to stderr.

use super::InputArgs;
use maxsub::api::{self, AppState, GapResponse, SolveResponse};
use maxsub::config::Config;
use maxsub::input::load_values;
use maxsub_core::{Element, MaxSubError, MergeBudget, largest_gap};
use serde::Serialize;

/// Load the values named by `input`, honoring the configured length cap.
fn read_input(config: &Config, input: &InputArgs) -> Result<Vec<Element>, MaxSubError> {
    let values = load_values(
        &input.values,
        input.file.as_deref(),
        input.format,
        config.solver.max_input_length,
    )?;
    tracing::debug!("Loaded {} values", values.len());
    Ok(values)
}

/// Render a value as pretty JSON.
///
/// Goes through the string serializer rather than `serde_json::Value`,
/// which cannot hold sums outside the 64-bit range.
fn to_json<T: Serialize>(value: &T) -> Result<String, MaxSubError> {
    serde_json::to_string_pretty(value)
        .map_err(|e| MaxSubError::IoError(format!("Serialize output: {}", e)))
}

/// Print a value as pretty JSON.
fn print_json<T: Serialize>(value: &T) -> Result<(), MaxSubError> {
    println!("{}", to_json(value)?);
    Ok(())
}

// =============================================================================
// SOLVE COMMAND
// =============================================================================

/// Compute the maximum subarray sum.
pub fn cmd_solve(
    config: &Config,
    input: &InputArgs,
    budget: Option<usize>,
    json_mode: bool,
) -> Result<(), MaxSubError> {
    let values = read_input(config, input)?;

    let mut solver = config.solver();
    if let Some(limit) = budget {
        solver = solver.with_budget(MergeBudget::from_limit(limit));
    }

    let solution = solver.solve(&values)?;
    tracing::info!(
        "Solved {} values: {} runs, {} merges, resolution {}",
        values.len(),
        solution.initial_runs,
        solution.merges,
        solution.resolution
    );

    if json_mode {
        return print_json(&SolveResponse::success(&solution));
    }

    println!("{}", solution.sum());
    Ok(())
}

// =============================================================================
// GAP COMMAND
// =============================================================================

/// Compute the largest gap.
pub fn cmd_gap(config: &Config, input: &InputArgs, json_mode: bool) -> Result<(), MaxSubError> {
    let values = read_input(config, input)?;
    let gap = largest_gap(&values)?;

    if json_mode {
        return print_json(&GapResponse::success(gap));
    }

    println!("{}", gap);
    Ok(())
}

// =============================================================================
// SERVE COMMAND
// =============================================================================

/// Start the HTTP server.
pub async fn cmd_serve(
    config: Config,
    host: Option<String>,
    port: Option<u16>,
) -> Result<(), MaxSubError> {
    let host = host.unwrap_or_else(|| config.server.host.clone());
    let port = port.unwrap_or(config.server.port);

    println!("maxsub HTTP server v{}", env!("CARGO_PKG_VERSION"));
    println!();
    println!("Configuration:");
    println!("  Host:         {}", host);
    println!("  Port:         {}", port);
    println!("  Rate limit:   {} req/s", config.server.rate_limit);
    println!("  Merge budget: {}", config.solver.merge_budget);
    println!("  Max input:    {} values", config.solver.max_input_length);
    println!();
    println!("Endpoints:");
    println!("  GET  /health - Health check");
    println!("  POST /solve  - Maximum subarray sum");
    println!("  POST /gap    - Largest gap");
    println!();
    println!("Press Ctrl+C to stop");
    println!();

    let addr = format!("{}:{}", host, port);
    api::run_server(&addr, AppState::new(&config)).await
}

// =============================================================================
// CONFIG COMMAND
// =============================================================================

/// Print the effective configuration as JSON.
pub fn cmd_config(config: &Config) -> Result<(), MaxSubError> {
    print_json(config)
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    #![allow(clippy::panic)]

    use super::*;
    use serde::ser::Error as _;

    struct Unserializable;

    impl Serialize for Unserializable {
        fn serialize<S: serde::Serializer>(&self, _: S) -> Result<S::Ok, S::Error> {
            Err(S::Error::custom("not representable"))
        }
    }

    #[test]
    fn serialize_failure_is_an_error() {
        let result = to_json(&Unserializable);
        match result {
            Err(MaxSubError::IoError(msg)) => assert!(msg.contains("not representable")),
            other => panic!("expected IoError, got {:?}", other),
        }
        assert!(print_json(&Unserializable).is_err());
    }

    #[test]
    fn large_sums_render_exactly() {
        let sum = 3 * i128::from(i64::MAX);
        let json = to_json(&GapResponse::success(sum)).expect("json");
        assert!(json.contains(&sum.to_string()));
    }
}
