//! # Input Parsing
//!
//! Turns command-line arguments and files into `Vec<i64>`.
//!
//! ## Formats
//!
//! - `text`: integers separated by whitespace and/or commas, `#` starts a comment
//! - `json`: a single JSON array of integers

use clap::ValueEnum;
use maxsub_core::{Element, MaxSubError, primitives::MAX_INPUT_FILE_SIZE};
use std::path::{Path, PathBuf};

/// Input file format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum InputFormat {
    /// Integers separated by whitespace or commas.
    #[default]
    Text,
    /// A JSON array of integers.
    Json,
}

/// Parse the `text` format.
pub fn parse_text(text: &str) -> Result<Vec<Element>, MaxSubError> {
    let mut values = Vec::new();

    for (line_no, line) in text.lines().enumerate() {
        let line = line.split('#').next().unwrap_or_default();
        for token in line
            .split(|c: char| c == ',' || c.is_whitespace())
            .filter(|t| !t.is_empty())
        {
            let value = token.parse::<Element>().map_err(|e| {
                MaxSubError::ParseError(format!("line {}: '{}': {}", line_no + 1, token, e))
            })?;
            values.push(value);
        }
    }

    Ok(values)
}

/// Parse the `json` format.
pub fn parse_json(text: &str) -> Result<Vec<Element>, MaxSubError> {
    serde_json::from_str(text).map_err(|e| MaxSubError::ParseError(e.to_string()))
}

/// Parse `text` in the given format.
pub fn parse(text: &str, format: InputFormat) -> Result<Vec<Element>, MaxSubError> {
    match format {
        InputFormat::Text => parse_text(text),
        InputFormat::Json => parse_json(text),
    }
}

/// Reject inputs longer than `max_len`.
pub fn check_length(values: &[Element], max_len: usize) -> Result<(), MaxSubError> {
    if values.len() > max_len {
        return Err(MaxSubError::invalid_input(format!(
            "input length {} exceeds maximum {}",
            values.len(),
            max_len
        )));
    }
    Ok(())
}

/// Validate an input file path.
///
/// Canonicalizes the path (resolving symlinks and "..") and ensures it is a
/// regular file no larger than `MAX_INPUT_FILE_SIZE`.
fn validate_file(path: &Path) -> Result<PathBuf, MaxSubError> {
    let canonical = path.canonicalize().map_err(|e| {
        MaxSubError::IoError(format!("Invalid file path '{}': {}", path.display(), e))
    })?;

    let metadata = std::fs::metadata(&canonical)
        .map_err(|e| MaxSubError::IoError(format!("Cannot read file metadata: {}", e)))?;

    if !metadata.is_file() {
        return Err(MaxSubError::IoError(format!(
            "Path '{}' is not a regular file",
            path.display()
        )));
    }

    if metadata.len() > MAX_INPUT_FILE_SIZE {
        return Err(MaxSubError::invalid_input(format!(
            "File size {} bytes exceeds maximum allowed {} bytes",
            metadata.len(),
            MAX_INPUT_FILE_SIZE
        )));
    }

    Ok(canonical)
}

/// Read and parse an input file.
pub fn read_file(path: &Path, format: InputFormat) -> Result<Vec<Element>, MaxSubError> {
    let validated = validate_file(path)?;
    let text = std::fs::read_to_string(&validated)
        .map_err(|e| MaxSubError::IoError(format!("Read file: {}", e)))?;
    parse(&text, format)
}

/// Collect values from either positional arguments or a file.
///
/// Positional arguments are always read in the `text` format, so
/// `maxsub solve -2 1 -3` and `maxsub solve "-2,1,-3"` are equivalent.
pub fn load_values(
    args: &[String],
    file: Option<&Path>,
    format: InputFormat,
    max_len: usize,
) -> Result<Vec<Element>, MaxSubError> {
    let values = match file {
        Some(_) if !args.is_empty() => {
            return Err(MaxSubError::invalid_input(
                "pass values either inline or with --file, not both",
            ));
        }
        Some(path) => read_file(path, format)?,
        None => parse_text(&args.join(" "))?,
    };

    check_length(&values, max_len)?;
    Ok(values)
}

// =============================================================================
// TESTS
// =============================================================================
