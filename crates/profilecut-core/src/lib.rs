//! # profilecut Core
//!
//! Core types and utilities for profilecut.
//! Provides the point and segment data model shared by the extraction,
//! ordering and emission stages, along with the error taxonomy they report.

pub mod constants;
pub mod data;
pub mod error;

pub use constants::{
    DEFAULT_CLEARANCE_HEIGHT, DEFAULT_FEED_RATE, DEFAULT_LAYER_COUNT, DEFAULT_TOLERANCE,
    DEFAULT_TOTAL_DEPTH,
};
pub use data::{Point, Segment};
pub use error::{PathError, PathResult};
