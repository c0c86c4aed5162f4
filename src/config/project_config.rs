//! Project-level configuration support
//!
//! Loads per-practice defaults from `starticulation.toml` or
//! `.starticulationrc.json` in the working directory.
//!
//! # Configuration Format
//!
//! ```toml
//! # starticulation.toml
//!
//! [defaults]
//! format = "markdown"
//! no_color = false
//! fail_on_delayed = false
//!
//! [session]
//! show_instructions = true
//!
//! [export]
//! output_dir = "reports"
//! ```

use anyhow::Context;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Written by `starticulation init`
pub const EXAMPLE_CONFIG: &str = r#"# Starticulation Configuration

[defaults]
# Default report format (text, json, markdown, html, csv)
format = "text"

# Disable colours in terminal output
no_color = false

# Exit with code 1 when any sound is delayed
fail_on_delayed = false

[session]
# Show the welcome/how-to text before the first assessment
show_instructions = true

[export]
# Directory for auto-named report files (html, markdown, csv)
# output_dir = "reports"
"#;

/// Project-level configuration loaded from starticulation.toml or similar
#[derive(Debug, Clone, Deserialize, Default)]
pub struct ProjectConfig {
    /// Default CLI flags
    #[serde(default)]
    pub defaults: CliDefaults,

    /// Session behaviour
    #[serde(default)]
    pub session: SessionConfig,

    /// Report export settings
    #[serde(default)]
    pub export: ExportConfig,
}

/// Default CLI flags that can be set in project config
#[derive(Debug, Clone, Deserialize, Default)]
pub struct CliDefaults {
    /// Default output format (text, json, markdown, html, csv)
    #[serde(default)]
    pub format: Option<String>,

    /// Disable colours by default
    #[serde(default)]
    pub no_color: Option<bool>,

    /// Exit non-zero when any sound is delayed
    #[serde(default)]
    pub fail_on_delayed: Option<bool>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SessionConfig {
    #[serde(default = "default_show_instructions")]
    pub show_instructions: bool,
}

fn default_show_instructions() -> bool {
    true
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            show_instructions: default_show_instructions(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Default)]
pub struct ExportConfig {
    /// Directory for auto-named report files
    #[serde(default)]
    pub output_dir: Option<PathBuf>,
}

impl ProjectConfig {
    /// Output format, falling back to text
    pub fn format(&self) -> &str {
        self.defaults.format.as_deref().unwrap_or("text")
    }
}

/// Load project configuration from a directory.
///
/// Searches for configuration files in this order:
/// 1. `starticulation.toml`
/// 2. `.starticulationrc.json`
///
/// Files that fail to parse are skipped with a warning.
pub fn load_project_config(dir: &Path) -> ProjectConfig {
    for name in ["starticulation.toml", ".starticulationrc.json"] {
        let path = dir.join(name);
        if !path.exists() {
            continue;
        }
        match load_config_file(&path) {
            Ok(config) => {
                debug!("Loaded project config from {}", path.display());
                return config;
            }
            Err(e) => {
                warn!("Failed to load {}: {:#}", path.display(), e);
            }
        }
    }

    debug!("No project config found, using defaults");
    ProjectConfig::default()
}

/// Load configuration from an explicit TOML or JSON file
pub fn load_config_file(path: &Path) -> anyhow::Result<ProjectConfig> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    let is_json = path
        .extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("json"));
    let config = if is_json {
        serde_json::from_str(&content)?
    } else {
        toml::from_str(&content)?
    };
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ProjectConfig::default();
        assert_eq!(config.format(), "text");
        assert!(config.session.show_instructions);
        assert!(config.export.output_dir.is_none());
        assert!(config.defaults.fail_on_delayed.is_none());
    }

    #[test]
    fn test_example_config_parses() {
        let config: ProjectConfig = toml::from_str(EXAMPLE_CONFIG).unwrap();
        assert_eq!(config.format(), "text");
        assert_eq!(config.defaults.no_color, Some(false));
        assert!(config.session.show_instructions);
    }

    #[test]
    fn test_partial_config() {
        let config: ProjectConfig = toml::from_str(
            r#"
[session]
show_instructions = false

[export]
output_dir = "reports"
"#,
        )
        .unwrap();
        assert!(!config.session.show_instructions);
        assert_eq!(config.export.output_dir, Some(PathBuf::from("reports")));
        assert_eq!(config.format(), "text");
    }

    #[test]
    fn test_load_toml_from_dir() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join("starticulation.toml"),
            "[defaults]\nformat = \"csv\"\n",
        )
        .unwrap();
        assert_eq!(load_project_config(dir.path()).format(), "csv");
    }

    #[test]
    fn test_load_json_from_dir() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join(".starticulationrc.json"),
            r#"{"defaults": {"format": "html", "fail_on_delayed": true}}"#,
        )
        .unwrap();
        let config = load_project_config(dir.path());
        assert_eq!(config.format(), "html");
        assert_eq!(config.defaults.fail_on_delayed, Some(true));
    }

    #[test]
    fn test_invalid_config_falls_back() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("starticulation.toml"), "[defaults\n").unwrap();
        let config = load_project_config(dir.path());
        assert_eq!(config.format(), "text");
    }

    #[test]
    fn test_no_config() {
        let dir = tempfile::tempdir().unwrap();
        let config = load_project_config(dir.path());
        assert!(config.session.show_instructions);
    }
}
