//! Init command - write an example project config

use anyhow::{Context, Result};
use console::style;
use starticulation::config::{UserConfig, EXAMPLE_CONFIG};
use std::path::Path;

/// Run the init command
pub(super) fn run(dir: &Path) -> Result<()> {
    let config_path = dir.join("starticulation.toml");
    if config_path.exists() {
        println!(
            "{} Already initialized at {}",
            style("✓").green(),
            style(config_path.display()).cyan()
        );
    } else {
        std::fs::write(&config_path, EXAMPLE_CONFIG)
            .with_context(|| "Failed to create config file")?;
        println!(
            "{} Created {}",
            style("✓").green(),
            style(config_path.display()).cyan()
        );
    }

    if let Some(user_path) = UserConfig::user_config_path() {
        println!(
            "\nSet your name for report footers in {} under [clinician]",
            style(user_path.display()).cyan()
        );
    }

    println!("\nNext steps:");
    println!("  {} Write a productions grid", style("starticulation template -o child.toml").cyan());
    println!("  {} Run the assessment", style("starticulation assess --productions child.toml").cyan());

    Ok(())
}
