//! # profilecut
//!
//! Converts the `LINE` entities of a DXF drawing into a layered G-code
//! profile cut.
//!
//! ## Architecture
//!
//! profilecut is organized as a workspace with multiple crates:
//!
//! 1. **profilecut-core** - Points, segments, tolerances, path errors
//! 2. **profilecut-camtools** - DXF line extraction, path ordering, G-code emission
//! 3. **profilecut-settings** - TOML/JSON job configuration
//! 4. **profilecut** - Command-line binary that wires the stages together
//!
//! ## Pipeline
//!
//! DXF text → segments → ordered, oriented path → closure check → G-code

pub mod cli;

use profilecut_camtools::{
    CamToolError, DxfLineExtractor, PathOrderer, PathSummary, ProfileCutGenerator,
};
use profilecut_core::{PathError, Segment};
use profilecut_settings::{Config, SettingsError};
use std::fs::File;
use std::io::{BufReader, Write};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{info, warn};

pub use profilecut_camtools as camtools;
pub use profilecut_core as geometry;
pub use profilecut_settings as settings;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Build date (set at compile time)
pub const BUILD_DATE: &str = env!("PROFILECUT_BUILD_DATE");

/// Errors from a full drawing-to-program conversion
#[derive(Error, Debug)]
pub enum ConvertError {
    /// The input drawing could not be opened
    #[error("Failed to open input {}: {source}", path.display())]
    OpenInput {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Extraction or ordering failed
    #[error(transparent)]
    Path(#[from] PathError),

    /// G-code generation failed
    #[error(transparent)]
    CamTool(#[from] CamToolError),

    /// The configuration was unusable
    #[error(transparent)]
    Settings(#[from] SettingsError),
}

/// Result of converting one drawing
#[derive(Debug, Clone)]
pub struct Conversion {
    /// Segments in cutting order and direction
    pub segments: Vec<Segment>,
    /// Statistics of the ordered path
    pub summary: PathSummary,
    /// One G-code command per entry
    pub gcode: Vec<String>,
}

/// Convert the DXF drawing at `path`
pub fn convert_file(path: &Path, config: &Config) -> Result<Conversion, ConvertError> {
    let file = File::open(path).map_err(|source| ConvertError::OpenInput {
        path: path.to_path_buf(),
        source,
    })?;

    // The reader is dropped once extraction returns.
    let segments = DxfLineExtractor::extract_reader(BufReader::new(file))?;
    info!(path = %path.display(), segments = segments.len(), "Read drawing");

    convert_segments(segments, config)
}

/// Convert DXF text already split into lines
pub fn convert_lines<S: AsRef<str>>(
    lines: &[S],
    config: &Config,
) -> Result<Conversion, ConvertError> {
    let segments = DxfLineExtractor::extract(lines)?;
    convert_segments(segments, config)
}

/// Order extracted segments and generate the program
pub fn convert_segments(
    mut segments: Vec<Segment>,
    config: &Config,
) -> Result<Conversion, ConvertError> {
    config.validate()?;

    let orderer = PathOrderer::new(config.ordering_parameters());
    orderer.order(&mut segments)?;

    match orderer.validate_closed(&segments) {
        Ok(()) => {}
        Err(err @ PathError::NotClosed { .. }) if !config.path.require_closed => {
            warn!(%err, "Cutting an open profile");
        }
        Err(err) => return Err(err.into()),
    }

    let summary = PathSummary::from_segments(&segments, config.path.tolerance);
    info!(
        segments = summary.segment_count,
        length = summary.length,
        closed = summary.closed,
        "Ordered profile path"
    );

    let gcode = ProfileCutGenerator::new(config.cut_parameters()).generate(&segments)?;

    Ok(Conversion {
        segments,
        summary,
        gcode,
    })
}

/// Write one command per line
pub fn write_program<W: Write>(mut writer: W, gcode: &[String]) -> std::io::Result<()> {
    for line in gcode {
        writeln!(writer, "{line}")?;
    }
    writer.flush()
}

/// Log output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    /// Human-readable lines
    #[default]
    Text,
    /// One JSON object per event
    Json,
}

/// Initialize logging
///
/// Sets up structured logging with:
/// - Output on stderr, leaving stdout for the G-code program
/// - RUST_LOG environment variable support (default `info`)
/// - Text or JSON formatting
pub fn init_logging(format: LogFormat) -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_level(true);

    let registry = tracing_subscriber::registry().with(env_filter);
    match format {
        LogFormat::Text => registry.with(fmt_layer).try_init()?,
        LogFormat::Json => registry.with(fmt_layer.json()).try_init()?,
    }

    Ok(())
}
