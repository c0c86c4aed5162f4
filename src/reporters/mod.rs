//! Output reporters for assessment results
//!
//! Supports multiple output formats:
//! - `text` - Terminal output with colors
//! - `json` - Machine-readable JSON
//! - `markdown` - GitHub-flavored Markdown
//! - `html` - Standalone HTML report with colour-coded results
//! - `csv` - Sound, Position, Result table for spreadsheets

mod csv;
mod html;
mod json;
mod markdown;
mod text;

use crate::report::AssessmentReport;
use anyhow::{anyhow, Result};
use std::str::FromStr;

/// Supported output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
    Markdown,
    Html,
    Csv,
}

impl FromStr for OutputFormat {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" | "txt" | "terminal" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            "markdown" | "md" => Ok(OutputFormat::Markdown),
            "html" => Ok(OutputFormat::Html),
            "csv" => Ok(OutputFormat::Csv),
            _ => Err(anyhow!(
                "Unknown format '{}'. Valid formats: text, json, markdown, html, csv",
                s
            )),
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
            OutputFormat::Markdown => write!(f, "markdown"),
            OutputFormat::Html => write!(f, "html"),
            OutputFormat::Csv => write!(f, "csv"),
        }
    }
}

/// Render a report using an OutputFormat enum
pub fn report_with_format(report: &AssessmentReport, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => text::render(report),
        OutputFormat::Json => json::render(report),
        OutputFormat::Markdown => markdown::render(report),
        OutputFormat::Html => html::render(report),
        OutputFormat::Csv => csv::render(report),
    }
}

/// Get the recommended file extension for a format
pub fn file_extension(format: OutputFormat) -> &'static str {
    match format {
        OutputFormat::Text => "txt",
        OutputFormat::Json => "json",
        OutputFormat::Markdown => "md",
        OutputFormat::Html => "html",
        OutputFormat::Csv => "csv",
    }
}

/// Default output file name, e.g. `Sam_articulation_results.csv`
pub fn default_file_name(report: &AssessmentReport, format: OutputFormat) -> String {
    let stem: String = report
        .child
        .name
        .as_deref()
        .unwrap_or("child")
        .chars()
        .map(|c| if c.is_alphanumeric() || c == '-' { c } else { '_' })
        .collect();
    format!("{}_articulation_results.{}", stem, file_extension(format))
}

/// Whole years, as used in "expected mastery by N years"
pub(crate) fn years(months: u32) -> u32 {
    months / 12
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::tests::test_report;

    #[test]
    fn test_format_parsing() {
        assert_eq!(OutputFormat::from_str("text").unwrap(), OutputFormat::Text);
        assert_eq!(OutputFormat::from_str("JSON").unwrap(), OutputFormat::Json);
        assert_eq!(
            OutputFormat::from_str("md").unwrap(),
            OutputFormat::Markdown
        );
        assert_eq!(OutputFormat::from_str("html").unwrap(), OutputFormat::Html);
        assert_eq!(OutputFormat::from_str("CSV").unwrap(), OutputFormat::Csv);
        assert!(OutputFormat::from_str("sarif").is_err());
    }

    #[test]
    fn test_default_file_name() {
        let mut report = test_report();
        assert_eq!(
            default_file_name(&report, OutputFormat::Csv),
            "Sam_articulation_results.csv"
        );

        report.child.name = Some("Mary Jo/2".into());
        assert_eq!(
            default_file_name(&report, OutputFormat::Html),
            "Mary_Jo_2_articulation_results.html"
        );

        report.child.name = None;
        assert_eq!(
            default_file_name(&report, OutputFormat::Json),
            "child_articulation_results.json"
        );
    }

    #[test]
    fn test_every_format_renders() {
        let report = test_report();
        for format in [
            OutputFormat::Text,
            OutputFormat::Json,
            OutputFormat::Markdown,
            OutputFormat::Html,
            OutputFormat::Csv,
        ] {
            let out = report_with_format(&report, format).unwrap();
            assert!(!out.is_empty(), "{} output is empty", format);
        }
    }
}
