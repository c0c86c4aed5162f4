//! CSV reporter
//!
//! One row per assessed sound/position, columns `Sound,Position,Result`.

use crate::report::AssessmentReport;
use anyhow::Result;

const HEADER: &str = "Sound,Position,Result";

/// Render the results table as CSV
pub fn render(report: &AssessmentReport) -> Result<String> {
    let mut out = String::with_capacity(32 * (report.results.len() + 1));
    out.push_str(HEADER);
    out.push('\n');

    for r in &report.results {
        out.push_str(&escape_field(r.sound.symbol()));
        out.push(',');
        out.push_str(&escape_field(&r.position.to_string()));
        out.push(',');
        out.push_str(&escape_field(&r.verdict.to_string()));
        out.push('\n');
    }

    Ok(out)
}

/// Quote a field if it contains a delimiter, quote or line break
fn escape_field(field: &str) -> String {
    if field.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}
