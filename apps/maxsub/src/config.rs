//! # Configuration
//!
//! Layered configuration for the maxsub binary, lowest precedence first:
//!
//! 1. Built-in defaults
//! 2. TOML file (`--config <path>`, or `maxsub.toml` in the working directory)
//! 3. Environment (`MAXSUB_RATE_LIMIT`, `MAXSUB_MERGE_BUDGET`)
//! 4. CLI flags (applied by the command layer)
//!
//! ```toml
//! [server]
//! host = "127.0.0.1"
//! port = 8080
//! rate_limit = 100
//! body_limit = 4194304
//!
//! [solver]
//! merge_budget = 0
//! max_input_length = 100000
//! ```

use maxsub_core::{MaxSubError, MergeBudget, Solver, primitives::MAX_INPUT_LENGTH};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Config file picked up from the working directory when `--config` is absent.
pub const DEFAULT_CONFIG_FILE: &str = "maxsub.toml";

/// Largest config file accepted (64 KB).
const MAX_CONFIG_FILE_SIZE: u64 = 64 * 1024;

// =============================================================================
// CONFIG SECTIONS
// =============================================================================

/// HTTP server settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ServerConfig {
    /// Host to bind to.
    pub host: String,
    /// Port to bind to.
    pub port: u16,
    /// Requests per second across all clients, 0 disables limiting.
    pub rate_limit: u32,
    /// Maximum request body size in bytes.
    pub body_limit: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8080,
            rate_limit: 100,
            body_limit: 4 * 1024 * 1024,
        }
    }
}

/// Solver settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SolverConfig {
    /// Maximum merges per solve, 0 for unbounded.
    pub merge_budget: usize,
    /// Maximum number of input elements.
    pub max_input_length: usize,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            merge_budget: 0,
            max_input_length: MAX_INPUT_LENGTH,
        }
    }
}

// =============================================================================
// CONFIG
// =============================================================================

/// Effective configuration of the binary.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub server: ServerConfig,
    pub solver: SolverConfig,
}

impl Config {
    /// Parse a TOML document. Missing keys keep their defaults.
    pub fn from_toml_str(text: &str) -> Result<Self, MaxSubError> {
        let config: Config =
            toml::from_str(text).map_err(|e| MaxSubError::ConfigError(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Read a TOML file.
    pub fn from_file(path: &Path) -> Result<Self, MaxSubError> {
        let metadata = std::fs::metadata(path).map_err(|e| {
            MaxSubError::ConfigError(format!("Cannot read '{}': {}", path.display(), e))
        })?;
        if metadata.len() > MAX_CONFIG_FILE_SIZE {
            return Err(MaxSubError::ConfigError(format!(
                "Config file {} bytes exceeds maximum {} bytes",
                metadata.len(),
                MAX_CONFIG_FILE_SIZE
            )));
        }

        let text = std::fs::read_to_string(path).map_err(|e| {
            MaxSubError::ConfigError(format!("Cannot read '{}': {}", path.display(), e))
        })?;
        Self::from_toml_str(&text)
    }

    /// Load from an explicit path, else from `maxsub.toml` if present, else defaults.
    ///
    /// An explicit path that does not exist is an error; a missing default
    /// file is not.
    pub fn load(path: Option<&Path>) -> Result<Self, MaxSubError> {
        match path {
            Some(path) => {
                tracing::debug!("Loading config from {}", path.display());
                Self::from_file(path)
            }
            None => {
                let default_path = Path::new(DEFAULT_CONFIG_FILE);
                if default_path.is_file() {
                    tracing::debug!("Loading config from {}", DEFAULT_CONFIG_FILE);
                    Self::from_file(default_path)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }

    /// Apply overrides from the process environment.
    #[must_use]
    pub fn with_env(self) -> Self {
        self.with_env_from(|key| std::env::var(key).ok())
    }

    /// Apply overrides read through `lookup`.
    ///
    /// Unparseable values are ignored with a warning.
    #[must_use]
    pub fn with_env_from(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        if let Some(raw) = lookup("MAXSUB_RATE_LIMIT") {
            match raw.trim().parse() {
                Ok(rate) => self.server.rate_limit = rate,
                Err(e) => tracing::warn!("Ignoring MAXSUB_RATE_LIMIT='{}': {}", raw, e),
            }
        }
        if let Some(raw) = lookup("MAXSUB_MERGE_BUDGET") {
            match raw.trim().parse() {
                Ok(budget) => self.solver.merge_budget = budget,
                Err(e) => tracing::warn!("Ignoring MAXSUB_MERGE_BUDGET='{}': {}", raw, e),
            }
        }
        self
    }

    /// Reject values that cannot work.
    pub fn validate(&self) -> Result<(), MaxSubError> {
        if self.solver.max_input_length == 0 {
            return Err(MaxSubError::ConfigError(
                "solver.max_input_length must be at least 1".to_string(),
            ));
        }
        if self.server.body_limit == 0 {
            return Err(MaxSubError::ConfigError(
                "server.body_limit must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    /// Build the solver described by this configuration.
    #[must_use]
    pub fn solver(&self) -> Solver {
        Solver::new().with_budget(MergeBudget::from_limit(self.solver.merge_budget))
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    /// Same document as the module docs.
    const DOCUMENTED_EXAMPLE: &str = r#"
[server]
host = "127.0.0.1"
port = 8080
rate_limit = 100
body_limit = 4194304

[solver]
merge_budget = 0
max_input_length = 100000
"#;

    #[test]
    fn documented_example_spells_out_defaults() {
        let config = Config::from_toml_str(DOCUMENTED_EXAMPLE).expect("parse");
        assert_eq!(config, Config::default());
    }

    #[test]
    fn defaults() {
        let config = Config::default();
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.server.rate_limit, 100);
        assert_eq!(config.solver.max_input_length, MAX_INPUT_LENGTH);
        assert_eq!(config.solver().budget(), MergeBudget::Unbounded);
    }

    #[test]
    fn partial_toml_keeps_defaults() {
        let config = Config::from_toml_str("[server]\nport = 9000\n").expect("parse");
        assert_eq!(config.server.port, 9000);
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.solver, SolverConfig::default());
    }

    #[test]
    fn unknown_keys_rejected() {
        let result = Config::from_toml_str("[server]\nprot = 9000\n");
        assert!(matches!(result, Err(MaxSubError::ConfigError(_))));
    }

    #[test]
    fn zero_input_length_rejected() {
        let result = Config::from_toml_str("[solver]\nmax_input_length = 0\n");
        assert!(matches!(result, Err(MaxSubError::ConfigError(_))));
    }

    #[test]
    fn env_overrides() {
        let config = Config::default().with_env_from(|key| match key {
            "MAXSUB_RATE_LIMIT" => Some("0".to_string()),
            "MAXSUB_MERGE_BUDGET" => Some("25".to_string()),
            _ => None,
        });
        assert_eq!(config.server.rate_limit, 0);
        assert_eq!(config.solver().budget(), MergeBudget::Limited(25));
    }

    #[test]
    fn bad_env_values_ignored() {
        let config = Config::default().with_env_from(|key| match key {
            "MAXSUB_RATE_LIMIT" => Some("fast".to_string()),
            _ => None,
        });
        assert_eq!(config.server.rate_limit, 100);
    }
}
