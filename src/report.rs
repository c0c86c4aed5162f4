//! Assessment report aggregation
//!
//! Classifies every record for one child, then partitions the results into
//! the buckets the clinical summary is written from.

use crate::classifier::{classify, Classification};
use crate::models::{
    AssessmentRecord, Child, Position, ProcessFinding, ProcessStatus, SoundResult, Verdict,
};
use crate::norms::Sound;
use crate::processes::PhonologicalProcess;
use rustc_hash::FxHashSet;
use serde::Serialize;
use tracing::info;

/// A sound in one of the summary buckets
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BucketEntry {
    pub sound: Sound,
    pub position: Position,
    pub mastery_months: u32,
}

impl BucketEntry {
    /// Whole years of the mastery age, as quoted in the summary
    pub fn mastery_years(&self) -> u32 {
        self.mastery_months / 12
    }
}

/// Counts per verdict
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct VerdictSummary {
    pub age_appropriate: usize,
    pub incorrect_age_appropriate: usize,
    pub delayed: usize,
    pub total: usize,
}

impl VerdictSummary {
    pub fn from_results(results: &[SoundResult]) -> Self {
        let mut summary = Self::default();
        for r in results {
            match r.verdict {
                Verdict::AgeAppropriate => summary.age_appropriate += 1,
                Verdict::IncorrectButAgeAppropriate => summary.incorrect_age_appropriate += 1,
                Verdict::Delayed => summary.delayed += 1,
            }
            summary.total += 1;
        }
        summary
    }
}

/// One deduplicated example of a process in the summary
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProcessExample {
    pub process: PhonologicalProcess,
    pub target: Sound,
    pub produced: String,
    /// Typical resolution age; `None` for atypical processes
    pub resolution_months: Option<u32>,
}

impl ProcessExample {
    fn from_finding(finding: &ProcessFinding) -> Self {
        Self {
            process: finding.process,
            target: finding.target,
            produced: finding.produced.clone(),
            resolution_months: finding.process.age_status().resolution_months(),
        }
    }
}

/// Processes worth the clinician's attention
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ProcessSummary {
    /// Not part of typical development at any age
    pub atypical: Vec<ProcessExample>,
    /// Typical patterns that should have resolved by now
    pub typical_delayed: Vec<ProcessExample>,
}

impl ProcessSummary {
    /// Deduplicate findings by (process, target, produced), keeping the first
    /// occurrence, then split atypical from typical-but-delayed. Typical
    /// processes that are still age-appropriate are left out.
    pub fn from_findings(findings: &[ProcessFinding]) -> Self {
        let mut seen: FxHashSet<(PhonologicalProcess, Sound, &str)> = FxHashSet::default();
        let mut summary = Self::default();

        for finding in findings {
            if !seen.insert((finding.process, finding.target, finding.produced.as_str())) {
                continue;
            }
            if finding.process.is_atypical() {
                summary.atypical.push(ProcessExample::from_finding(finding));
            } else if finding.status == ProcessStatus::Delayed {
                summary.typical_delayed.push(ProcessExample::from_finding(finding));
            }
        }

        summary
    }

    pub fn is_empty(&self) -> bool {
        self.atypical.is_empty() && self.typical_delayed.is_empty()
    }
}

/// Full assessment for one child
#[derive(Debug, Clone, Serialize)]
pub struct AssessmentReport {
    pub child: Child,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub clinician: Option<String>,
    /// One line per record, in record order
    pub results: Vec<SoundResult>,
    /// Every detected process, in record order, duplicates included
    pub findings: Vec<ProcessFinding>,
    pub correct: Vec<BucketEntry>,
    pub incorrect_age_appropriate: Vec<BucketEntry>,
    pub delayed: Vec<BucketEntry>,
    pub process_summary: ProcessSummary,
    pub summary: VerdictSummary,
}

impl AssessmentReport {
    /// Classify `records` for `child` and aggregate the results
    pub fn build(child: Child, records: &[AssessmentRecord]) -> Self {
        let age = child.age.months;
        let classified: Vec<_> = records
            .iter()
            .map(|record| (record.clone(), classify(record, age)))
            .collect();
        Self::aggregate(child, classified)
    }

    /// Aggregate already-classified records
    pub fn aggregate(child: Child, classified: Vec<(AssessmentRecord, Classification)>) -> Self {
        let mut results = Vec::with_capacity(classified.len());
        let mut findings = Vec::new();
        let mut correct = Vec::new();
        let mut incorrect_age_appropriate = Vec::new();
        let mut delayed = Vec::new();

        for (record, classification) in classified {
            let entry = BucketEntry {
                sound: record.target,
                position: record.position,
                mastery_months: record.target.mastery_age(),
            };
            match classification.verdict {
                Verdict::AgeAppropriate => correct.push(entry),
                Verdict::IncorrectButAgeAppropriate => incorrect_age_appropriate.push(entry),
                Verdict::Delayed => delayed.push(entry),
            }
            findings.extend(classification.finding);
            results.push(SoundResult {
                sound: record.target,
                position: record.position,
                produced: record.produced,
                verdict: classification.verdict,
            });
        }

        let process_summary = ProcessSummary::from_findings(&findings);
        let summary = VerdictSummary::from_results(&results);

        info!(
            "Assessed {} productions for {} ({}): {} delayed, {} incorrect but age appropriate, {} processes",
            summary.total,
            child.display_name(),
            child.age,
            summary.delayed,
            summary.incorrect_age_appropriate,
            findings.len()
        );

        Self {
            child,
            clinician: None,
            results,
            findings,
            correct,
            incorrect_age_appropriate,
            delayed,
            process_summary,
            summary,
        }
    }

    pub fn with_clinician(mut self, clinician: Option<String>) -> Self {
        self.clinician = clinician;
        self
    }

    pub fn has_delayed(&self) -> bool {
        !self.delayed.is_empty()
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::assessment::AssessmentBuilder;
    use crate::models::ChildAge;

    fn sound(symbol: &str) -> Sound {
        Sound::parse(symbol).unwrap()
    }

    /// Report for a 5;0 child with a handful of errors
    pub(crate) fn test_report() -> AssessmentReport {
        let records = AssessmentBuilder::with_defaults()
            .with_production(sound("r"), Position::Initial, "w")
            .unwrap()
            .with_production(sound("r"), Position::Medial, "w")
            .unwrap()
            .with_production(sound("t"), Position::Initial, "k")
            .unwrap()
            .with_production(sound("k"), Position::Final, "t")
            .unwrap()
            .with_production(sound("spl"), Position::Initial, "p")
            .unwrap()
            .build();
        let child = Child::new(Some("Sam".into()), ChildAge::from_months(60));
        AssessmentReport::build(child, &records)
    }

    #[test]
    fn test_buckets_partition_results() {
        let report = test_report();
        assert_eq!(
            report.correct.len() + report.incorrect_age_appropriate.len() + report.delayed.len(),
            report.results.len()
        );
        assert_eq!(report.summary.total, report.results.len());
        assert_eq!(report.summary.delayed, report.delayed.len());
    }

    #[test]
    fn test_bucket_contents() {
        let report = test_report();
        // r (72) is not yet expected at 60 months
        assert_eq!(report.incorrect_age_appropriate.len(), 2);
        assert!(report
            .incorrect_age_appropriate
            .iter()
            .all(|e| e.sound == sound("r") && e.mastery_years() == 6));

        // t, k (36) and spl (60) are
        let delayed: Vec<_> = report.delayed.iter().map(|e| e.sound.symbol()).collect();
        assert_eq!(delayed, vec!["k", "t", "spl"]);
    }

    #[test]
    fn test_findings_keep_duplicates() {
        let report = test_report();
        let gliding = report
            .findings
            .iter()
            .filter(|f| f.process == PhonologicalProcess::Gliding)
            .count();
        assert_eq!(gliding, 2);
    }

    #[test]
    fn test_process_summary_dedups_and_partitions() {
        let report = test_report();
        let summary = &report.process_summary;

        assert_eq!(summary.atypical.len(), 1);
        assert_eq!(summary.atypical[0].process, PhonologicalProcess::Backing);
        assert_eq!(summary.atypical[0].resolution_months, None);

        let typical: Vec<_> = summary.typical_delayed.iter().map(|e| e.process).collect();
        assert_eq!(
            typical,
            vec![
                PhonologicalProcess::Fronting,
                PhonologicalProcess::Gliding,
                PhonologicalProcess::ClusterReductionWithS,
            ]
        );
    }

    #[test]
    fn test_age_appropriate_processes_left_out() {
        let findings = vec![ProcessFinding {
            process: PhonologicalProcess::Gliding,
            target: sound("r"),
            produced: "w".into(),
            status: ProcessStatus::AgeAppropriate,
        }];
        assert!(ProcessSummary::from_findings(&findings).is_empty());
    }

    #[test]
    fn test_identical_findings_collapse() {
        let finding = ProcessFinding {
            process: PhonologicalProcess::Stopping,
            target: sound("s"),
            produced: "t".into(),
            status: ProcessStatus::Delayed,
        };
        let other = ProcessFinding {
            produced: "d".into(),
            ..finding.clone()
        };
        let summary = ProcessSummary::from_findings(&[finding.clone(), finding, other]);
        assert_eq!(summary.typical_delayed.len(), 2);
        assert_eq!(summary.typical_delayed[0].produced, "t");
        assert_eq!(summary.typical_delayed[1].produced, "d");
    }

    #[test]
    fn test_all_correct() {
        let child = Child::new(None, ChildAge::from_months(48));
        let report = AssessmentReport::build(child, &AssessmentBuilder::with_defaults().build());
        assert!(!report.has_delayed());
        assert!(report.findings.is_empty());
        assert!(report.process_summary.is_empty());
        assert_eq!(report.correct.len(), report.results.len());
    }
}
