//! Error handling for profilecut
//!
//! Provides the error taxonomy for the path pipeline:
//! - Extraction errors (malformed or truncated DXF group values)
//! - Ordering errors (disconnected segment sets, open shapes)
//! - Input errors (I/O while reading the drawing)
//!
//! All error types use `thiserror` for ergonomic error handling.

use thiserror::Error;

/// Path pipeline error type
///
/// Covers everything that can go wrong between reading DXF text and handing
/// an ordered, connected path to the toolpath emitter.
#[derive(Error, Debug)]
pub enum PathError {
    /// A group value could not be parsed as a finite number
    #[error("Invalid number at line {line}: {value:?}")]
    InvalidNumber {
        /// 1-based line number of the value.
        line: usize,
        /// The offending text.
        value: String,
    },

    /// A coordinate group code was the last line of input
    #[error("Missing value for group code {code} at line {line}")]
    MissingValue {
        /// 1-based line number of the group code.
        line: usize,
        /// The group code that had no value.
        code: u16,
    },

    /// No unplaced segment continues the chain
    #[error(
        "Open path: no segment continues from X{x:.3} Y{y:.3} (end of segment {after_index}) at position {position}"
    )]
    OpenPath {
        /// Position in the ordered path that could not be filled.
        position: usize,
        /// Index of the segment whose end point dangles.
        after_index: usize,
        /// X of the dangling end point.
        x: f64,
        /// Y of the dangling end point.
        y: f64,
    },

    /// The last segment does not return to the first
    #[error("Path is not closed: gap of {gap:.4} between last end and first start")]
    NotClosed {
        /// Distance between the final end point and the first start point.
        gap: f64,
    },

    /// There were no segments to work with
    #[error("No line segments found")]
    EmptyPath,

    /// Matching tolerance must be finite and non-negative
    #[error("Invalid tolerance: {0}")]
    InvalidTolerance(f64),

    /// Standard I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl PathError {
    /// Check if this error came from reading or parsing the drawing
    pub fn is_parse_error(&self) -> bool {
        matches!(
            self,
            PathError::InvalidNumber { .. } | PathError::MissingValue { .. }
        )
    }

    /// Check if this error means the segments do not form a usable path
    pub fn is_connectivity_error(&self) -> bool {
        matches!(
            self,
            PathError::OpenPath { .. } | PathError::NotClosed { .. } | PathError::EmptyPath
        )
    }
}

/// Result type using PathError
pub type PathResult<T> = std::result::Result<T, PathError>;
