//! HTML reporter
//!
//! Standalone page with the colour-coded results table, the process table
//! and the clinical summary. No external assets.

use super::years;
use crate::models::{ProcessStatus, Verdict};
use crate::report::{AssessmentReport, BucketEntry, ProcessExample};
use anyhow::Result;
use chrono::Local;

const STYLE: &str = r#"
body { font-family: -apple-system, "Segoe UI", Roboto, sans-serif; max-width: 960px; margin: 2rem auto; color: #222; font-size: 16px; }
table { border-collapse: collapse; margin-bottom: 1.5rem; }
th, td { border: 1px solid #ccc; padding: 4px 10px; text-align: left; }
th { background: #f3f3f3; }
.muted { color: #777; font-size: 14px; }
"#;

fn verdict_background(verdict: Verdict) -> &'static str {
    match verdict {
        Verdict::AgeAppropriate => "#d4edda",
        Verdict::IncorrectButAgeAppropriate => "#ffe082",
        Verdict::Delayed => "#f8d7da",
    }
}

fn status_background(status: ProcessStatus) -> &'static str {
    match status {
        ProcessStatus::AgeAppropriate => "#d4edda",
        ProcessStatus::Delayed => "#f8d7da",
    }
}

/// Escape text for HTML element content and attribute values
fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Render report as a standalone HTML page
pub fn render(report: &AssessmentReport) -> Result<String> {
    let name = escape(report.child.display_name());
    let mut html = String::new();

    html.push_str(&format!(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n<title>Articulation Assessment - {name}</title>\n<style>{STYLE}</style>\n</head>\n<body>\n"
    ));
    html.push_str(&format!(
        "<h1>Starticulation Articulation Assessment</h1>\n<p><strong>{}</strong>, age {} ({} months)</p>\n",
        name, report.child.age, report.child.age.months
    ));

    // Results table
    html.push_str("<h2>Assessment Results</h2>\n<table>\n<tr><th>Sound</th><th>Position</th><th>Produced</th><th>Result</th></tr>\n");
    for r in &report.results {
        html.push_str(&format!(
            "<tr><td>{}</td><td>{}</td><td>{}</td><td style=\"background-color: {}; color: black;\">{}</td></tr>\n",
            escape(r.sound.symbol()),
            r.position,
            escape(&r.produced),
            verdict_background(r.verdict),
            r.verdict
        ));
    }
    html.push_str("</table>\n");

    if !report.findings.is_empty() {
        html.push_str("<h2>Detected Phonological Processes</h2>\n<table>\n<tr><th>Process</th><th>Target</th><th>Produced</th><th>Status</th></tr>\n");
        for f in &report.findings {
            html.push_str(&format!(
                "<tr><td>{}</td><td>{}</td><td>{}</td><td style=\"background-color: {}; color: black;\">{}</td></tr>\n",
                escape(f.process.name()),
                escape(f.target.symbol()),
                escape(&f.produced),
                status_background(f.status),
                f.status
            ));
        }
        html.push_str("</table>\n");
    }

    // Summary
    html.push_str(&format!(
        "<h2>Summary Report</h2>\n<p>The following report summarises the findings of <strong>{name}</strong>.</p>\n"
    ));
    html.push_str(&format!(
        "<h3>Delayed Sounds</h3>\n<p>These sounds were produced incorrectly and are typically mastered by {name}'s age:</p>\n{}",
        render_bucket(&report.delayed)
    ));
    html.push_str(&format!(
        "<h3>Incorrect but Age Appropriate Sounds</h3>\n<p>These sounds were produced incorrectly, but are not typically expected to be mastered until an older age:</p>\n{}",
        render_bucket(&report.incorrect_age_appropriate)
    ));

    let ps = &report.process_summary;
    if !ps.is_empty() {
        html.push_str("<h2>Phonological Process Summary</h2>\n");
        if !ps.atypical.is_empty() {
            html.push_str("<h3>Atypical Processes</h3>\n<p>These phonological patterns are not typical at any age and may indicate a more significant speech delay:</p>\n");
            html.push_str(&render_examples(&ps.atypical));
        }
        if !ps.typical_delayed.is_empty() {
            html.push_str("<h3>Typical but Delayed Processes</h3>\n<p>These patterns are part of normal development but should have resolved by now:</p>\n");
            html.push_str(&render_examples(&ps.typical_delayed));
        }
    }

    html.push_str(&format!(
        "<p class=\"muted\">Generated {}{}</p>\n</body>\n</html>\n",
        Local::now().format("%Y-%m-%d %H:%M"),
        report
            .clinician
            .as_deref()
            .map(|c| format!(" by {}", escape(c)))
            .unwrap_or_default()
    ));

    Ok(html)
}

fn render_bucket(entries: &[BucketEntry]) -> String {
    if entries.is_empty() {
        return "<ul><li>None</li></ul>\n".to_string();
    }
    let items: String = entries
        .iter()
        .map(|e| {
            format!(
                "<li>{} ({}) – expected mastery by {} years</li>",
                escape(e.sound.symbol()),
                e.position,
                e.mastery_years()
            )
        })
        .collect();
    format!("<ul>{}</ul>\n", items)
}

fn render_examples(examples: &[ProcessExample]) -> String {
    let items: String = examples
        .iter()
        .map(|e| {
            let resolution = e
                .resolution_months
                .map(|m| format!(" – expected resolution by {} years", years(m)))
                .unwrap_or_default();
            format!(
                "<li>{} (e.g., /{}/ → /{}/){}</li>",
                escape(e.process.name()),
                escape(e.target.symbol()),
                escape(&e.produced),
                resolution
            )
        })
        .collect();
    format!("<ul>{}</ul>\n", items)
}
