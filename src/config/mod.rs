//! Configuration module for Starticulation
//!
//! This module handles:
//! - Project-level configuration (starticulation.toml)
//! - User-level configuration (clinician details)
//! - CLI defaults

mod project_config;
mod user_config;

pub use project_config::{
    load_config_file,
    load_project_config,
    CliDefaults,
    ExportConfig,
    ProjectConfig,
    SessionConfig,
    EXAMPLE_CONFIG,
};
pub use user_config::{ClinicianConfig, UserConfig};
