//! Error types for the CAM tools crate.
//!
//! This module provides structured error types for toolpath generation and
//! parameter validation. Path extraction and ordering failures are carried
//! through unchanged from `profilecut_core`.

use profilecut_core::PathError;
use thiserror::Error;

/// Errors that can occur during CAM tool operations.
#[derive(Error, Debug)]
pub enum CamToolError {
    /// G-code generation failed.
    #[error("G-code generation failed: {0}")]
    GenerationFailed(String),

    /// Extracting or ordering the path failed.
    #[error(transparent)]
    Path(#[from] PathError),

    /// A parameter validation error occurred.
    #[error("Parameter error: {0}")]
    Parameter(#[from] ParameterError),
}

/// Errors related to CAM tool parameter validation.
#[derive(Error, Debug)]
pub enum ParameterError {
    /// A parameter that must be strictly positive was not.
    #[error("Parameter '{name}' must be positive, got {value}")]
    NotPositive { name: String, value: f64 },

    /// A parameter value is invalid.
    #[error("Invalid value for '{name}': {reason}")]
    InvalidValue { name: String, reason: String },
}

/// Result type alias for CAM tool operations.
pub type CamToolResult<T> = Result<T, CamToolError>;

/// Result type alias for parameter validation.
pub type ParameterResult<T> = Result<T, ParameterError>;
