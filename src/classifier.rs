//! Per-production classification
//!
//! Two independent judgements are made for every incorrect production:
//! - the sound-level verdict, from the child's age vs. the sound's mastery age
//! - the process status, from the child's age vs. the process's resolution age
//!
//! Both are pure functions of (target, produced, age).

use crate::models::{AssessmentRecord, ProcessFinding, Verdict};
use crate::norms::Sound;
use crate::processes;
use serde::Serialize;

/// Outcome of classifying one production
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Classification {
    pub verdict: Verdict,
    pub finding: Option<ProcessFinding>,
}

/// Classify one assessment record for a child of `age_months`
pub fn classify(record: &AssessmentRecord, age_months: u32) -> Classification {
    classify_production(record.target, &record.produced, age_months)
}

/// Classify `target` → `produced` for a child of `age_months`
pub fn classify_production(target: Sound, produced: &str, age_months: u32) -> Classification {
    if produced == target.symbol() {
        return Classification {
            verdict: Verdict::AgeAppropriate,
            finding: None,
        };
    }

    let finding = processes::detect(target, produced).map(|process| ProcessFinding {
        process,
        target,
        produced: produced.to_string(),
        status: process.age_status().status_at(age_months),
    });

    let verdict = if age_months >= target.mastery_age() {
        Verdict::Delayed
    } else {
        Verdict::IncorrectButAgeAppropriate
    };

    Classification { verdict, finding }
}
