//! Project-level configuration support
//!
//! Loads per-dataset configuration from a `castgraph.toml` file placed next
//! to the input data, or from an explicit `--config` path.
//!
//! # Configuration Format
//!
//! ```toml
//! # castgraph.toml
//!
//! [input]
//! skip_header = true
//! delimiter = ","
//!
//! [fame]
//! lead_marker = "Lead"
//! female_marker = "F"
//! threshold = 0.5
//!
//! [output]
//! report_file = "BechdelTesting.txt"
//! tgf_name = "castGender"
//! ```

use crate::error::{CastError, Result};
use serde::Deserialize;
use std::path::Path;
use tracing::{debug, warn};

/// File name looked up in the data directory
pub const CONFIG_FILE_NAME: &str = "castgraph.toml";

/// Project-level configuration loaded from castgraph.toml
#[derive(Debug, Clone, Deserialize, Default, PartialEq)]
pub struct ProjectConfig {
    /// Input file layout
    #[serde(default)]
    pub input: InputConfig,

    /// FAME metric settings
    #[serde(default)]
    pub fame: FameConfig,

    /// Default output locations
    #[serde(default)]
    pub output: OutputConfig,
}

/// How the cast/gender table is laid out
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct InputConfig {
    /// Discard the first line of the file (default: true)
    #[serde(default = "default_true")]
    pub skip_header: bool,

    /// Field separator (default: ',')
    #[serde(default = "default_delimiter")]
    pub delimiter: char,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            skip_header: true,
            delimiter: default_delimiter(),
        }
    }
}

/// FAME lead-role test settings
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct FameConfig {
    /// Substring marking a lead role in the character-type column
    #[serde(default = "default_lead_marker")]
    pub lead_marker: String,

    /// Substring marking a female performer in the gender column
    #[serde(default = "default_female_marker")]
    pub female_marker: String,

    /// Minimum share of female leads for a pass (inclusive)
    #[serde(default = "default_threshold")]
    pub threshold: f64,
}

impl Default for FameConfig {
    fn default() -> Self {
        Self {
            lead_marker: default_lead_marker(),
            female_marker: default_female_marker(),
            threshold: default_threshold(),
        }
    }
}

impl FameConfig {
    /// Threshold must be a share in [0, 1] and markers must be non-empty
    pub fn is_valid(&self) -> bool {
        (0.0..=1.0).contains(&self.threshold)
            && !self.lead_marker.is_empty()
            && !self.female_marker.is_empty()
    }
}

/// Default output file names
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct OutputConfig {
    /// FAME report path
    #[serde(default = "default_report_file")]
    pub report_file: String,

    /// TGF base name (`.tgf` is appended)
    #[serde(default)]
    pub tgf_name: Option<String>,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            report_file: default_report_file(),
            tgf_name: None,
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_delimiter() -> char {
    ','
}

fn default_lead_marker() -> String {
    "Lead".to_string()
}

fn default_female_marker() -> String {
    "F".to_string()
}

fn default_threshold() -> f64 {
    0.5
}

fn default_report_file() -> String {
    "BechdelTesting.txt".to_string()
}

/// Load project configuration from a directory
///
/// Falls back to defaults when no `castgraph.toml` exists or it fails to parse.
pub fn load_project_config(dir: &Path) -> ProjectConfig {
    let toml_path = dir.join(CONFIG_FILE_NAME);
    if toml_path.exists() {
        match load_config_file(&toml_path) {
            Ok(config) => {
                debug!("Loaded project config from {}", toml_path.display());
                return config;
            }
            Err(e) => {
                warn!("Failed to load {}: {}", toml_path.display(), e);
            }
        }
    }

    debug!("No project config found, using defaults");
    ProjectConfig::default()
}

/// Load configuration from an explicit TOML file
pub fn load_config_file(path: &Path) -> Result<ProjectConfig> {
    let content = std::fs::read_to_string(path).map_err(|e| CastError::io(path, e))?;
    parse_config(&content)
}

/// Parse and validate a TOML configuration document
pub fn parse_config(content: &str) -> Result<ProjectConfig> {
    let config: ProjectConfig =
        toml::from_str(content).map_err(|e| CastError::Config(e.to_string()))?;
    if !config.fame.is_valid() {
        return Err(CastError::Config(format!(
            "fame.threshold must be within 0..=1 and markers non-empty (threshold = {})",
            config.fame.threshold
        )));
    }
    Ok(config)
}
