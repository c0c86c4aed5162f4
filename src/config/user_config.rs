//! User-level configuration for starticulation
//!
//! Supports loading config from:
//! - Environment variables
//! - ~/.config/starticulation/config.toml

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct UserConfig {
    #[serde(default)]
    pub clinician: ClinicianConfig,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct ClinicianConfig {
    /// Name printed in report footers
    pub name: Option<String>,

    /// Practice or clinic name
    pub practice: Option<String>,
}

impl UserConfig {
    /// Load config from all sources, with priority:
    /// 1. Environment variables (highest)
    /// 2. User config (~/.config/starticulation/config.toml)
    pub fn load() -> Result<Self> {
        let mut config = UserConfig::default();

        if let Some(user_config) = Self::user_config_path()
            .filter(|p| p.exists())
            .and_then(|p| std::fs::read_to_string(&p).ok())
            .and_then(|content| toml::from_str::<UserConfig>(&content).ok())
        {
            config.merge(user_config);
        }

        if let Ok(name) = std::env::var("STARTICULATION_CLINICIAN") {
            config.clinician.name = Some(name);
        }

        Ok(config)
    }

    /// Get the user config file path
    pub fn user_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("starticulation").join("config.toml"))
    }

    /// Merge another config into this one (other takes priority)
    fn merge(&mut self, other: UserConfig) {
        if other.clinician.name.is_some() {
            self.clinician.name = other.clinician.name;
        }
        if other.clinician.practice.is_some() {
            self.clinician.practice = other.clinician.practice;
        }
    }

    /// "Name, Practice" for report footers
    pub fn clinician_label(&self) -> Option<String> {
        let name = self
            .clinician
            .name
            .as_deref()
            .map(str::trim)
            .filter(|n| !n.is_empty())?;
        match self.clinician.practice.as_deref().map(str::trim) {
            Some(practice) if !practice.is_empty() => Some(format!("{}, {}", name, practice)),
            _ => Some(name.to_string()),
        }
    }
}
