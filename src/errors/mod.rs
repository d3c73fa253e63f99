//! Error types and error handling for the evaluator.
//!
//! This module defines the single error type returned by scanning and
//! evaluation. It includes:
//!
//! - An error structure carrying the byte offset it was detected at
//! - One variant per failure kind (scanning, literals, arithmetic, nesting)
//! - Error names and suggestions used by the command line diagnostics

pub mod errors;

#[cfg(test)]
mod tests;
