//! # profilecut CAM Tools
//!
//! This crate turns loose DXF line work into a layered profile-cutting
//! toolpath.
//!
//! ## Stages
//!
//! - **DXF Lines**: Pulls `LINE` entities out of DXF group-code/value text
//! - **Path Orderer**: Chains segments end to end, starting nearest the origin
//! - **Profile Cutter**: Emits G-code that traces the chain once per layer
//!
//! ## Supporting Infrastructure
//!
//! - **Stats**: Segment count, length, bounds and closure of a path
//! - **Error**: Tool and parameter errors wrapping the core path errors

pub mod dxf_lines;
pub mod error;
pub mod path_orderer;
pub mod profile_cutter;
pub mod stats;

// Re-export commonly used items
pub use dxf_lines::{DxfLineExtractor, GroupCode, SegmentBuilder};
pub use error::{CamToolError, CamToolResult, ParameterError, ParameterResult};
pub use path_orderer::{OrderingParameters, PathOrderer, TieBreak};
pub use profile_cutter::{ProfileCutGenerator, ProfileCutParameters};
pub use stats::{Bounds, PathSummary};
