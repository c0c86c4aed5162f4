//! Productions files
//!
//! The clinician-editable form of an assessment. `template()` writes the
//! default grid; `load()` reads an edited one back as overrides.
//!
//! ```toml
//! [child]
//! name = "Sam"
//! age = "4;6"
//!
//! [[productions]]
//! sound = "r"
//! position = "initial"
//! produced = "w"
//! ```

use super::builder::{default_records, ProductionOverride};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::debug;

/// Optional child details carried in the file
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChildSection {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Age as years;months
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub age: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductionsFile {
    #[serde(default)]
    pub child: ChildSection,
    #[serde(default)]
    pub productions: Vec<ProductionOverride>,
}

/// On-disk format of a productions file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProductionsFormat {
    Toml,
    Json,
}

impl ProductionsFormat {
    /// `.json` files are JSON, everything else is TOML
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => ProductionsFormat::Json,
            _ => ProductionsFormat::Toml,
        }
    }
}

impl ProductionsFile {
    /// Default grid: every sound/position with the target as the production
    pub fn template() -> Self {
        Self {
            child: ChildSection {
                name: Some(String::new()),
                age: Some(String::new()),
            },
            productions: default_records()
                .into_iter()
                .map(|r| ProductionOverride::new(r.target, r.position, r.produced))
                .collect(),
        }
    }

    pub fn parse(content: &str, format: ProductionsFormat) -> Result<Self> {
        let file = match format {
            ProductionsFormat::Toml => toml::from_str(content)?,
            ProductionsFormat::Json => serde_json::from_str(content)?,
        };
        Ok(file)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read productions file {}", path.display()))?;
        let file = Self::parse(&content, ProductionsFormat::from_path(path))
            .with_context(|| format!("Invalid productions file {}", path.display()))?;
        debug!(
            "Loaded {} productions from {}",
            file.productions.len(),
            path.display()
        );
        Ok(file)
    }

    pub fn render(&self, format: ProductionsFormat) -> Result<String> {
        let out = match format {
            ProductionsFormat::Toml => toml::to_string_pretty(self)?,
            ProductionsFormat::Json => serde_json::to_string_pretty(self)?,
        };
        Ok(out)
    }

    /// Entries whose production differs from the target
    pub fn changed(&self) -> impl Iterator<Item = &ProductionOverride> {
        self.productions
            .iter()
            .filter(|p| p.produced.trim() != p.sound.symbol())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Position;
    use crate::norms::Sound;

    #[test]
    fn test_parse_toml() {
        let content = r#"
[child]
name = "Sam"
age = "4;6"

[[productions]]
sound = "r"
position = "initial"
produced = "w"

[[productions]]
sound = "spl"
position = "Initial"
"#;
        let file = ProductionsFile::parse(content, ProductionsFormat::Toml).unwrap();
        assert_eq!(file.child.name.as_deref(), Some("Sam"));
        assert_eq!(file.child.age.as_deref(), Some("4;6"));
        assert_eq!(file.productions.len(), 2);
        assert_eq!(file.productions[0].sound, Sound::parse("r").unwrap());
        assert_eq!(file.productions[1].position, Position::Initial);
        // Missing produced means omission
        assert_eq!(file.productions[1].produced, "");
    }

    #[test]
    fn test_parse_json() {
        let content = r#"{"productions": [{"sound": "k", "position": "final", "produced": "t"}]}"#;
        let file = ProductionsFile::parse(content, ProductionsFormat::Json).unwrap();
        assert!(file.child.name.is_none());
        assert_eq!(file.productions.len(), 1);
    }

    #[test]
    fn test_unknown_sound_rejected() {
        let content = r#"
[[productions]]
sound = "q"
position = "initial"
produced = "k"
"#;
        assert!(ProductionsFile::parse(content, ProductionsFormat::Toml).is_err());
    }

    #[test]
    fn test_template_has_no_changes() {
        let template = ProductionsFile::template();
        assert_eq!(template.productions.len(), default_records().len());
        assert_eq!(template.changed().count(), 0);

        let toml = template.render(ProductionsFormat::Toml).unwrap();
        let back = ProductionsFile::parse(&toml, ProductionsFormat::Toml).unwrap();
        assert_eq!(back.productions, template.productions);
    }

    #[test]
    fn test_changed_counts_edited_entries() {
        let mut file = ProductionsFile::template();
        file.productions[0].produced = "".into();
        let r_initial = file
            .productions
            .iter_mut()
            .find(|p| p.sound.symbol() == "r" && p.position == Position::Initial)
            .unwrap();
        r_initial.produced = "w".into();

        let changed: Vec<_> = file.changed().map(|p| p.sound.symbol()).collect();
        assert_eq!(changed, vec!["h", "r"]);
    }

    #[test]
    fn test_format_from_path() {
        assert_eq!(
            ProductionsFormat::from_path(Path::new("sam.JSON")),
            ProductionsFormat::Json
        );
        assert_eq!(
            ProductionsFormat::from_path(Path::new("sam.toml")),
            ProductionsFormat::Toml
        );
    }
}
