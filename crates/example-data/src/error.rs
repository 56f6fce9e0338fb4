//! Error types for the example-data crate.
//!
//! This module defines semantic error enums for plan parsing and roster
//! generation, following the project's error handling conventions with
//! `thiserror`.

use thiserror::Error;

/// Errors that can occur when parsing or validating a seed plan.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlanError {
    /// The plan JSON is malformed or missing required fields.
    #[error("invalid plan JSON: {message}")]
    ParseError {
        /// Description of the parse error.
        message: String,
    },

    /// The plan version is not supported.
    #[error("unsupported plan version: expected {expected}, found {actual}")]
    UnsupportedVersion {
        /// Expected version number.
        expected: u32,
        /// Actual version found in the plan.
        actual: u32,
    },

    /// The plan requests no students, teachers, or courses.
    #[error("plan requests no students, teachers, or courses")]
    NothingRequested,
}

/// Errors that can occur during roster generation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GenerationError {
    /// Failed to generate a valid display name after maximum retries.
    #[error("failed to generate valid display name after {max_attempts} attempts")]
    DisplayNameGenerationFailed {
        /// Number of attempts made before giving up.
        max_attempts: usize,
    },

    /// A generated course date fell outside the representable range.
    #[error("generated course date fell outside the representable range")]
    DateOutOfRange,
}
