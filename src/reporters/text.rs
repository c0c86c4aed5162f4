//! Text (terminal) reporter with colors and formatting

use super::years;
use crate::models::{ProcessStatus, Verdict};
use crate::report::{AssessmentReport, BucketEntry, ProcessExample};
use anyhow::Result;

/// Verdict colors (ANSI escape codes)
fn verdict_color(verdict: Verdict) -> &'static str {
    match verdict {
        Verdict::AgeAppropriate => "\x1b[32m",             // Green
        Verdict::IncorrectButAgeAppropriate => "\x1b[33m", // Yellow
        Verdict::Delayed => "\x1b[31m",                    // Red
    }
}

fn status_color(status: ProcessStatus) -> &'static str {
    match status {
        ProcessStatus::AgeAppropriate => "\x1b[33m",
        ProcessStatus::Delayed => "\x1b[31m",
    }
}

/// Reset ANSI color
const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";
const DIM: &str = "\x1b[2m";

/// Render report as formatted terminal output
pub fn render(report: &AssessmentReport) -> Result<String> {
    let mut out = String::new();
    let name = report.child.display_name();

    // Header
    out.push_str(&format!("\n{BOLD}Starticulation Assessment{RESET}\n"));
    out.push_str(&format!(
        "{DIM}──────────────────────────────────────{RESET}\n"
    ));
    out.push_str(&format!(
        "Child: {BOLD}{}{RESET}  Age: {} ({} months)",
        name, report.child.age, report.child.age.months
    ));
    if let Some(clinician) = &report.clinician {
        out.push_str(&format!("  Clinician: {}", clinician));
    }
    out.push_str("\n\n");

    // Verdict counts
    let s = &report.summary;
    out.push_str(&format!("{BOLD}RESULTS{RESET} ({} sounds)\n", s.total));
    out.push_str(&format!(
        "  {}{} age appropriate{RESET} | {}{} incorrect but age appropriate{RESET} | {}{} delayed{RESET}\n\n",
        verdict_color(Verdict::AgeAppropriate),
        s.age_appropriate,
        verdict_color(Verdict::IncorrectButAgeAppropriate),
        s.incorrect_age_appropriate,
        verdict_color(Verdict::Delayed),
        s.delayed
    ));

    // Incorrect productions only; correct ones are the default
    let incorrect: Vec<_> = report
        .results
        .iter()
        .filter(|r| r.verdict != Verdict::AgeAppropriate)
        .collect();
    if !incorrect.is_empty() {
        out.push_str(&format!(
            "{DIM}  SOUND   POSITION  PRODUCED  RESULT{RESET}\n"
        ));
        out.push_str(&format!(
            "{DIM}  ──────────────────────────────────────────────────────{RESET}\n"
        ));
        for r in incorrect {
            let produced = if r.produced.is_empty() {
                "(omitted)".to_string()
            } else {
                format!("/{}/", r.produced)
            };
            out.push_str(&format!(
                "  {:<7} {:<9} {:<9} {}{}{RESET}\n",
                format!("/{}/", r.sound),
                r.position,
                produced,
                verdict_color(r.verdict),
                r.verdict
            ));
        }
        out.push('\n');
    }

    // Processes
    if !report.findings.is_empty() {
        out.push_str(&format!("{BOLD}DETECTED PHONOLOGICAL PROCESSES{RESET}\n"));
        for f in &report.findings {
            out.push_str(&format!(
                "  {:<30} /{}/ → /{}/  {}{}{RESET}\n",
                f.process.name(),
                f.target,
                f.produced,
                status_color(f.status),
                f.status
            ));
        }
        out.push('\n');
    }

    // Summary
    out.push_str(&format!("{BOLD}SUMMARY{RESET}\n"));
    out.push_str(&format!(
        "Delayed sounds - produced incorrectly and typically mastered by {}'s age:\n",
        name
    ));
    render_bucket(&mut out, &report.delayed);
    out.push_str(
        "Incorrect but age appropriate - not typically mastered until an older age:\n",
    );
    render_bucket(&mut out, &report.incorrect_age_appropriate);

    let ps = &report.process_summary;
    if !ps.atypical.is_empty() {
        out.push_str(&format!(
            "\n{BOLD}\x1b[31mAtypical processes{RESET} - not typical at any age, may indicate a more significant speech delay:\n"
        ));
        for example in &ps.atypical {
            out.push_str(&format!("  - {}\n", describe(example)));
        }
    }
    if !ps.typical_delayed.is_empty() {
        out.push_str(&format!(
            "\n{BOLD}Typical but delayed processes{RESET} - part of normal development but should have resolved by now:\n"
        ));
        for example in &ps.typical_delayed {
            out.push_str(&format!("  - {}\n", describe(example)));
        }
    }

    Ok(out)
}

fn render_bucket(out: &mut String, entries: &[BucketEntry]) {
    if entries.is_empty() {
        out.push_str(&format!("  {DIM}None{RESET}\n"));
        return;
    }
    for e in entries {
        out.push_str(&format!(
            "  - /{}/ ({}) - expected mastery by {} years\n",
            e.sound,
            e.position,
            e.mastery_years()
        ));
    }
}

fn describe(example: &ProcessExample) -> String {
    let base = format!(
        "{} (e.g., /{}/ → /{}/)",
        example.process, example.target, example.produced
    );
    match example.resolution_months {
        Some(months) => format!("{} - expected resolution by {} years", base, years(months)),
        None => base,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::tests::test_report;

    #[test]
    fn test_text_sections() {
        let out = render(&test_report()).unwrap();
        let plain = console::strip_ansi_codes(&out);
        assert!(plain.contains("Child: Sam  Age: 5;0 (60 months)"));
        assert!(plain.contains("/spl/ (Initial) - expected mastery by 5 years"));
        assert!(plain.contains("backing (e.g., /t/ → /k/)"));
        assert!(plain.contains("gliding (e.g., /r/ → /w/) - expected resolution by 5 years"));
        assert!(plain.contains("Atypical processes"));
    }

    #[test]
    fn test_text_dedups_summary_only() {
        let out = render(&test_report()).unwrap();
        let plain = console::strip_ansi_codes(&out);
        // Listed twice under detected processes, once in the summary
        assert_eq!(plain.matches("gliding (e.g.,").count(), 1);
        assert_eq!(plain.matches("/r/ → /w/").count(), 3);
    }
}
