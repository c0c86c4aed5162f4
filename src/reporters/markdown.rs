//! Markdown reporter for GitHub-flavored Markdown output
//!
//! Suitable for pasting into clinical notes or shared documents that render
//! Markdown.

use super::years;
use crate::models::Verdict;
use crate::report::{AssessmentReport, BucketEntry, ProcessExample};
use anyhow::Result;
use chrono::Local;

/// Render report as GitHub-flavored Markdown
pub fn render(report: &AssessmentReport) -> Result<String> {
    let mut md = String::new();

    md.push_str(&render_header(report));
    md.push('\n');

    md.push_str(&render_results(report));
    md.push('\n');

    if !report.findings.is_empty() {
        md.push_str(&render_processes(report));
        md.push('\n');
    }

    md.push_str(&render_summary(report));
    md.push('\n');

    md.push_str(&render_process_summary(report));

    md.push_str(&render_footer(report));

    Ok(md)
}

fn verdict_marker(verdict: Verdict) -> &'static str {
    match verdict {
        Verdict::AgeAppropriate => "🟢",
        Verdict::IncorrectButAgeAppropriate => "🟡",
        Verdict::Delayed => "🔴",
    }
}

fn render_header(report: &AssessmentReport) -> String {
    let timestamp = Local::now().format("%Y-%m-%d %H:%M");
    let s = &report.summary;

    format!(
        r#"# Articulation Assessment: {}

**Age:** {} ({} months) | **Delayed:** {} | **Incorrect but age appropriate:** {} | **Correct:** {}

Generated: {}
"#,
        report.child.display_name(),
        report.child.age,
        report.child.age.months,
        s.delayed,
        s.incorrect_age_appropriate,
        s.age_appropriate,
        timestamp
    )
}

fn render_results(report: &AssessmentReport) -> String {
    let mut md = String::from(
        "## Assessment Results\n\n| Sound | Position | Produced | Result |\n|-------|----------|----------|--------|\n",
    );
    for r in &report.results {
        md.push_str(&format!(
            "| /{}/ | {} | {} | {} {} |\n",
            r.sound,
            r.position,
            if r.produced.is_empty() {
                "(omitted)".to_string()
            } else {
                format!("/{}/", r.produced)
            },
            verdict_marker(r.verdict),
            r.verdict
        ));
    }
    md
}

fn render_processes(report: &AssessmentReport) -> String {
    let mut md = String::from(
        "## Detected Phonological Processes\n\n| Process | Target | Produced | Status |\n|---------|--------|----------|--------|\n",
    );
    for f in &report.findings {
        md.push_str(&format!(
            "| {} | /{}/ | /{}/ | {} |\n",
            f.process, f.target, f.produced, f.status
        ));
    }
    md
}

fn render_bucket(entries: &[BucketEntry]) -> String {
    if entries.is_empty() {
        return "- None\n".to_string();
    }
    entries
        .iter()
        .map(|e| {
            format!(
                "- /{}/ ({}) – expected mastery by {} years\n",
                e.sound,
                e.position,
                e.mastery_years()
            )
        })
        .collect()
}

fn render_summary(report: &AssessmentReport) -> String {
    let name = report.child.display_name();
    format!(
        r#"## Summary Report

The following report summarises the findings of **{name}**.

### Delayed Sounds

These sounds were produced incorrectly and are typically mastered by {name}'s age:

{}
### Incorrect but Age Appropriate Sounds

These sounds were produced incorrectly, but are not typically expected to be mastered until an older age:

{}"#,
        render_bucket(&report.delayed),
        render_bucket(&report.incorrect_age_appropriate),
    )
}

fn describe(example: &ProcessExample) -> String {
    match example.resolution_months {
        Some(months) => format!(
            "- {} (e.g., /{}/ → /{}/) – expected resolution by {} years\n",
            example.process,
            example.target,
            example.produced,
            years(months)
        ),
        None => format!(
            "- {} (e.g., /{}/ → /{}/)\n",
            example.process, example.target, example.produced
        ),
    }
}

fn render_process_summary(report: &AssessmentReport) -> String {
    let ps = &report.process_summary;
    if ps.is_empty() {
        return String::new();
    }

    let mut md = String::from("## Phonological Process Summary\n\n");
    if !ps.atypical.is_empty() {
        md.push_str("### Atypical Processes\n\nThese phonological patterns are not typical at any age and may indicate a more significant speech delay:\n\n");
        md.extend(ps.atypical.iter().map(describe));
        md.push('\n');
    }
    if !ps.typical_delayed.is_empty() {
        md.push_str("### Typical but Delayed Processes\n\nThese patterns are part of normal development but should have resolved by now:\n\n");
        md.extend(ps.typical_delayed.iter().map(describe));
        md.push('\n');
    }
    md
}

fn render_footer(report: &AssessmentReport) -> String {
    let mut footer = String::from("---\n\n");
    if let Some(clinician) = &report.clinician {
        footer.push_str(&format!("Assessed by {}. ", clinician));
    }
    footer.push_str(
        "*Use clinical judgement to confirm whether processes such as cluster reduction are truly present.*\n",
    );
    footer
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::tests::test_report;

    #[test]
    fn test_markdown_sections() {
        let md = render(&test_report()).unwrap();
        assert!(md.starts_with("# Articulation Assessment: Sam"));
        assert!(md.contains("## Assessment Results"));
        assert!(md.contains("| /r/ | Initial | /w/ | 🟡 Incorrect but Age Appropriate |"));
        assert!(md.contains("### Atypical Processes"));
        assert!(md.contains("- backing (e.g., /t/ → /k/)\n"));
        assert!(md.contains("- /k/ (Final) – expected mastery by 3 years"));
    }

    #[test]
    fn test_markdown_clinician_footer() {
        let report = test_report().with_clinician(Some("J. Smith".into()));
        let md = render(&report).unwrap();
        assert!(md.contains("Assessed by J. Smith."));
    }
}
