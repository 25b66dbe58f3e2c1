//! profilecut Settings Crate
//!
//! Handles job configuration: loading, saving and validating the cutting and
//! path-ordering settings.

pub mod config;
pub mod error;

pub use config::{Config, CutSettings, IoSettings, PathSettings};
pub use error::{ConfigError, SettingsError, SettingsResult};
