//! Configuration and settings management for profilecut
//!
//! Provides configuration file handling and validation.
//! Supports JSON and TOML file formats; the default location is the
//! platform config directory.
//!
//! Configuration is organized into logical sections:
//! - I/O settings (input drawing, output program)
//! - Cut settings (feed, depth, layers, clearance)
//! - Path settings (matching tolerance, tie-break, closure requirement)

use crate::error::{ConfigError, SettingsError, SettingsResult};
use profilecut_camtools::{OrderingParameters, ProfileCutParameters, TieBreak};
use profilecut_core::{
    DEFAULT_CLEARANCE_HEIGHT, DEFAULT_FEED_RATE, DEFAULT_LAYER_COUNT, DEFAULT_TOLERANCE,
    DEFAULT_TOTAL_DEPTH,
};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Input and output locations
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct IoSettings {
    /// DXF drawing to convert
    pub input: Option<PathBuf>,
    /// Where to write the program; stdout when unset
    pub output: Option<PathBuf>,
}

/// Cutting settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CutSettings {
    /// Feed rate for XY moves in units/min
    pub feed_rate: f64,
    /// Total material depth
    pub total_depth: f64,
    /// Number of equal layers the depth is split into
    pub layer_count: u32,
    /// Z to retract to after the final layer
    pub clearance_height: f64,
    /// Emit `;` comment lines describing the job
    pub header_comments: bool,
}

impl Default for CutSettings {
    fn default() -> Self {
        Self {
            feed_rate: DEFAULT_FEED_RATE,
            total_depth: DEFAULT_TOTAL_DEPTH,
            layer_count: DEFAULT_LAYER_COUNT,
            clearance_height: DEFAULT_CLEARANCE_HEIGHT,
            header_comments: false,
        }
    }
}

impl CutSettings {
    /// Depth removed by each layer
    pub fn layer_depth(&self) -> f64 {
        self.total_depth / f64::from(self.layer_count.max(1))
    }
}

/// Path reconstruction settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PathSettings {
    /// Endpoint matching tolerance
    pub tolerance: f64,
    /// Candidate choice when several segments continue the chain
    pub tie_break: TieBreak,
    /// Fail instead of warning when the path does not close
    pub require_closed: bool,
}

impl Default for PathSettings {
    fn default() -> Self {
        Self {
            tolerance: DEFAULT_TOLERANCE,
            tie_break: TieBreak::default(),
            require_closed: false,
        }
    }
}

/// Complete job configuration
///
/// Aggregates all settings sections and provides file I/O operations.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Input and output locations
    pub io: IoSettings,
    /// Cutting settings
    pub cut: CutSettings,
    /// Path reconstruction settings
    pub path: PathSettings,
}

impl Config {
    /// Create new config with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Default config file location (`<config dir>/profilecut/config.toml`)
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("profilecut").join("config.toml"))
    }

    /// Load the default config file if there is one, otherwise use defaults
    pub fn load_or_default() -> SettingsResult<Self> {
        match Self::default_path() {
            Some(path) if path.is_file() => Self::load_from_file(&path),
            _ => Ok(Self::default()),
        }
    }

    /// Load config from file (JSON or TOML)
    pub fn load_from_file(path: &Path) -> SettingsResult<Self> {
        let format = ConfigFormat::from_path(path)?;
        let content = std::fs::read_to_string(path)?;

        let config: Self = match format {
            ConfigFormat::Json => serde_json::from_str(&content)?,
            ConfigFormat::Toml => toml::from_str(&content)?,
        };

        config.validate()?;
        debug!(path = %path.display(), "Loaded configuration");
        Ok(config)
    }

    /// Save config to file (JSON or TOML)
    pub fn save_to_file(&self, path: &Path) -> SettingsResult<()> {
        self.validate()?;

        let content = match ConfigFormat::from_path(path)? {
            ConfigFormat::Json => serde_json::to_string_pretty(self)?,
            ConfigFormat::Toml => toml::to_string_pretty(self)?,
        };

        std::fs::write(path, content)?;
        Ok(())
    }

    /// Validate configuration
    pub fn validate(&self) -> SettingsResult<()> {
        if self.cut.layer_count == 0 {
            return Err(invalid("cut.layer_count", "must be at least 1"));
        }

        if !self.cut.feed_rate.is_finite() || self.cut.feed_rate <= 0.0 {
            return Err(invalid("cut.feed_rate", "must be > 0"));
        }

        if !self.cut.total_depth.is_finite() || self.cut.total_depth <= 0.0 {
            return Err(invalid("cut.total_depth", "must be > 0"));
        }

        if !self.cut.clearance_height.is_finite() {
            return Err(invalid("cut.clearance_height", "must be a finite number"));
        }

        if !self.path.tolerance.is_finite() || self.path.tolerance < 0.0 {
            return Err(invalid("path.tolerance", "must be >= 0"));
        }

        Ok(())
    }

    /// Input drawing, or an error naming the missing key
    pub fn input_path(&self) -> SettingsResult<&Path> {
        self.io
            .input
            .as_deref()
            .ok_or_else(|| ConfigError::MissingKey("io.input".to_string()).into())
    }

    /// Parameters for the path orderer
    pub fn ordering_parameters(&self) -> OrderingParameters {
        OrderingParameters {
            tolerance: self.path.tolerance,
            tie_break: self.path.tie_break,
        }
    }

    /// Parameters for the profile cut generator
    pub fn cut_parameters(&self) -> ProfileCutParameters {
        ProfileCutParameters {
            layer_depth: self.cut.layer_depth(),
            layer_count: self.cut.layer_count,
            feed_rate: self.cut.feed_rate,
            clearance_height: self.cut.clearance_height,
            header_comments: self.cut.header_comments,
        }
    }
}

/// Supported config file formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ConfigFormat {
    Json,
    Toml,
}

impl ConfigFormat {
    fn from_path(path: &Path) -> SettingsResult<Self> {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => Ok(Self::Json),
            Some(ext) if ext.eq_ignore_ascii_case("toml") => Ok(Self::Toml),
            other => Err(ConfigError::UnsupportedFormat(other.unwrap_or("").to_string()).into()),
        }
    }
}

fn invalid(key: &str, reason: &str) -> SettingsError {
    SettingsError::InvalidSetting {
        key: key.to_string(),
        reason: reason.to_string(),
    }
}
