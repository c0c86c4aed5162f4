//! JSON reporter
//!
//! Outputs the full AssessmentReport as pretty-printed JSON.

use crate::report::AssessmentReport;
use anyhow::Result;

/// Render report as JSON
pub fn render(report: &AssessmentReport) -> Result<String> {
    Ok(serde_json::to_string_pretty(report)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::tests::test_report;

    #[test]
    fn test_json_render_valid() {
        let report = test_report();
        let json_str = render(&report).expect("render JSON");
        let parsed: serde_json::Value = serde_json::from_str(&json_str).expect("parse JSON");
        assert_eq!(parsed["child"]["name"], "Sam");
        assert_eq!(parsed["child"]["age"]["months"], 60);
        assert_eq!(
            parsed["results"].as_array().expect("results array").len(),
            report.results.len()
        );
        assert_eq!(parsed["process_summary"]["atypical"][0]["process"], "backing");
        assert_eq!(parsed["summary"]["delayed"], 3);
    }

    #[test]
    fn test_json_verdict_keys() {
        let report = test_report();
        let json_str = render(&report).expect("render JSON");
        assert!(json_str.contains("\"incorrect_but_age_appropriate\""));
        assert!(json_str.contains("\"cluster-reduction-with-s\""));
    }
}
