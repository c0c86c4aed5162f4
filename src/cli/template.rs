//! Template command - write the default productions grid

use anyhow::{Context, Result};
use console::style;
use starticulation::assessment::{ProductionsFile, ProductionsFormat};
use std::path::Path;

pub(super) fn run(format: &str, output: Option<&Path>) -> Result<()> {
    let format = match format {
        "json" => ProductionsFormat::Json,
        _ => ProductionsFormat::Toml,
    };
    let rendered = ProductionsFile::template().render(format)?;

    match output {
        Some(path) => {
            if path.exists() {
                anyhow::bail!(
                    "{} already exists; refusing to overwrite a productions file",
                    path.display()
                );
            }
            std::fs::write(path, &rendered)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            eprintln!(
                "{} Wrote productions grid to {}",
                style("✓").green(),
                style(path.display()).cyan()
            );
            eprintln!(
                "  Fill in [child] and change `produced` for incorrect sounds, then run {}",
                style(format!("starticulation assess --productions {}", path.display())).cyan()
            );
        }
        None => print!("{}", rendered),
    }
    Ok(())
}
