//! # maxsub
//!
//! Library half of the maxsub binary: the HTTP API, configuration loading and
//! input parsing. The CLI in `main.rs` is a thin layer over these modules.

pub mod api;
pub mod config;
pub mod input;
