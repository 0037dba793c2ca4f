//! Configuration module for castgraph
//!
//! This module handles:
//! - Project-level configuration (castgraph.toml)
//! - Input layout and FAME metric overrides
//! - Default output locations

mod project_config;

pub use project_config::{
    load_config_file, load_project_config, parse_config, FameConfig, InputConfig, OutputConfig,
    ProjectConfig, CONFIG_FILE_NAME,
};
