//! Command-line interface
//!
//! Flags override the config file, which overrides built-in defaults.

use crate::LogFormat;
use clap::Parser;
use profilecut_camtools::TieBreak;
use profilecut_settings::{Config, SettingsResult};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "profilecut")]
#[command(version, long_version = concat!(env!("CARGO_PKG_VERSION"), " (built ", env!("PROFILECUT_BUILD_DATE"), ")"))]
#[command(about = "Convert DXF line work into a layered G-code profile cut", long_about = None)]
pub struct Cli {
    /// DXF drawing to convert (overrides io.input)
    pub input: Option<PathBuf>,

    /// Config file (.toml or .json); the user config is used when omitted
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Write G-code to this file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Feed rate for XY moves; plunges run at half
    #[arg(short = 'f', long)]
    pub feed_rate: Option<f64>,

    /// Total material depth
    #[arg(short = 'd', long)]
    pub total_depth: Option<f64>,

    /// Number of layers the depth is split into
    #[arg(short = 'l', long)]
    pub layers: Option<u32>,

    /// Endpoint matching tolerance
    #[arg(short = 't', long)]
    pub tolerance: Option<f64>,

    /// Take the first continuing segment instead of the last
    #[arg(long)]
    pub first_match: bool,

    /// Fail when the ordered path does not close
    #[arg(long)]
    pub require_closed: bool,

    /// Emit comment lines describing the job
    #[arg(long)]
    pub header: bool,

    /// Log as JSON on stderr
    #[arg(long)]
    pub log_json: bool,
}

impl Cli {
    pub fn log_format(&self) -> LogFormat {
        if self.log_json {
            LogFormat::Json
        } else {
            LogFormat::Text
        }
    }

    /// Load the config file (explicit or user default) and apply the flags
    pub fn resolve_config(&self) -> SettingsResult<Config> {
        let mut config = match &self.config {
            Some(path) => Config::load_from_file(path)?,
            None => Config::load_or_default()?,
        };
        self.apply(&mut config);
        config.validate()?;
        Ok(config)
    }

    /// Overlay the flags that were given onto `config`
    pub fn apply(&self, config: &mut Config) {
        if let Some(input) = &self.input {
            config.io.input = Some(input.clone());
        }
        if let Some(output) = &self.output {
            config.io.output = Some(output.clone());
        }
        if let Some(feed_rate) = self.feed_rate {
            config.cut.feed_rate = feed_rate;
        }
        if let Some(total_depth) = self.total_depth {
            config.cut.total_depth = total_depth;
        }
        if let Some(layers) = self.layers {
            config.cut.layer_count = layers;
        }
        if let Some(tolerance) = self.tolerance {
            config.path.tolerance = tolerance;
        }
        if self.first_match {
            config.path.tie_break = TieBreak::FirstMatch;
        }
        if self.require_closed {
            config.path.require_closed = true;
        }
        if self.header {
            config.cut.header_comments = true;
        }
    }
}
