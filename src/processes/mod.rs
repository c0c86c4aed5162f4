//! Phonological processes
//!
//! ```text
//! (target, produced)
//!        │
//!        ▼
//! ┌──────────────────────────┐  first match wins
//! │ RuleTableDetector        │──────────────────▶ process
//! │  PROCESS_RULES, in order │
//! └──────────────────────────┘
//!        │ no match
//!        ▼
//! ┌──────────────────────────┐
//! │ ClusterReductionDetector │──────────────────▶ cluster reduction
//! └──────────────────────────┘
//! ```
//!
//! Every process has a fixed age of typical resolution, or is atypical at
//! any age (see [`PhonologicalProcess::age_status`]).

mod detector;
mod rules;

pub use detector::{
    detect, ClusterReductionDetector, RuleTableDetector, SubstitutionDetector,
};
pub use rules::{ProcessRule, Substitution, PROCESS_RULES};

use crate::models::ProcessStatus;
use serde::{Deserialize, Serialize};

/// Known phonological processes
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "kebab-case")]
pub enum PhonologicalProcess {
    Gliding,
    Fronting,
    Backing,
    Stopping,
    Deaffrication,
    Affrication,
    Labialisation,
    Alveolarization,
    Depalatisation,
    FinalConsonantDevoicing,
    PrevocalicVoicing,
    FrontalLisp,
    InterdentalLisp,
    Vowelisation,
    Assimilation,
    Denasalisation,
    Coalescence,
    Reduplication,
    #[serde(rename = "cluster-reduction-no-s")]
    ClusterReductionNoS,
    #[serde(rename = "cluster-reduction-with-s")]
    ClusterReductionWithS,
    FinalConsonantDeletion,
    InitialConsonantDeletion,
    WeakSyllableDeletion,
    Epenthesis,
}

impl PhonologicalProcess {
    pub const ALL: [PhonologicalProcess; 24] = [
        PhonologicalProcess::Gliding,
        PhonologicalProcess::Fronting,
        PhonologicalProcess::Backing,
        PhonologicalProcess::Stopping,
        PhonologicalProcess::Deaffrication,
        PhonologicalProcess::Affrication,
        PhonologicalProcess::Labialisation,
        PhonologicalProcess::Alveolarization,
        PhonologicalProcess::Depalatisation,
        PhonologicalProcess::FinalConsonantDevoicing,
        PhonologicalProcess::PrevocalicVoicing,
        PhonologicalProcess::FrontalLisp,
        PhonologicalProcess::InterdentalLisp,
        PhonologicalProcess::Vowelisation,
        PhonologicalProcess::Assimilation,
        PhonologicalProcess::Denasalisation,
        PhonologicalProcess::Coalescence,
        PhonologicalProcess::Reduplication,
        PhonologicalProcess::ClusterReductionNoS,
        PhonologicalProcess::ClusterReductionWithS,
        PhonologicalProcess::FinalConsonantDeletion,
        PhonologicalProcess::InitialConsonantDeletion,
        PhonologicalProcess::WeakSyllableDeletion,
        PhonologicalProcess::Epenthesis,
    ];

    /// Clinical name, as printed in reports
    pub fn name(&self) -> &'static str {
        match self {
            PhonologicalProcess::Gliding => "gliding",
            PhonologicalProcess::Fronting => "fronting",
            PhonologicalProcess::Backing => "backing",
            PhonologicalProcess::Stopping => "stopping",
            PhonologicalProcess::Deaffrication => "deaffrication",
            PhonologicalProcess::Affrication => "affrication",
            PhonologicalProcess::Labialisation => "labialisation",
            PhonologicalProcess::Alveolarization => "alveolarization",
            PhonologicalProcess::Depalatisation => "depalatisation",
            PhonologicalProcess::FinalConsonantDevoicing => "final consonant devoicing",
            PhonologicalProcess::PrevocalicVoicing => "prevocalic voicing",
            PhonologicalProcess::FrontalLisp => "frontal lisp",
            PhonologicalProcess::InterdentalLisp => "interdental lisp",
            PhonologicalProcess::Vowelisation => "vowelisation",
            PhonologicalProcess::Assimilation => "assimilation",
            PhonologicalProcess::Denasalisation => "denasalisation",
            PhonologicalProcess::Coalescence => "coalescence",
            PhonologicalProcess::Reduplication => "reduplication",
            PhonologicalProcess::ClusterReductionNoS => "cluster reduction (no /s/)",
            PhonologicalProcess::ClusterReductionWithS => "cluster reduction (with /s/)",
            PhonologicalProcess::FinalConsonantDeletion => "final consonant deletion",
            PhonologicalProcess::InitialConsonantDeletion => "initial consonant deletion",
            PhonologicalProcess::WeakSyllableDeletion => "weak syllable deletion",
            PhonologicalProcess::Epenthesis => "epenthesis",
        }
    }

    /// Age by which the process typically resolves (Australian norms)
    pub fn age_status(&self) -> ProcessAgeStatus {
        use PhonologicalProcess::*;
        use ProcessAgeStatus::{Atypical, ResolvesBy};

        match self {
            Backing | InterdentalLisp | InitialConsonantDeletion => Atypical,
            Reduplication => ResolvesBy(30),
            Fronting | Assimilation | Coalescence => ResolvesBy(36),
            Stopping
            | Vowelisation
            | Affrication
            | Deaffrication
            | Alveolarization
            | Depalatisation
            | Labialisation
            | Denasalisation
            | PrevocalicVoicing
            | ClusterReductionNoS
            | FinalConsonantDeletion
            | WeakSyllableDeletion => ResolvesBy(48),
            Gliding
            | FinalConsonantDevoicing
            | ClusterReductionWithS
            | Epenthesis
            | FrontalLisp => ResolvesBy(60),
        }
    }

    pub fn is_atypical(&self) -> bool {
        self.age_status().is_atypical()
    }
}

impl std::fmt::Display for PhonologicalProcess {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(self.name())
    }
}

/// When a process stops being age-appropriate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProcessAgeStatus {
    /// Typically resolved by this age in months
    ResolvesBy(u32),
    /// Not part of typical development at any age
    Atypical,
}

impl ProcessAgeStatus {
    pub fn is_atypical(&self) -> bool {
        matches!(self, ProcessAgeStatus::Atypical)
    }

    pub fn resolution_months(&self) -> Option<u32> {
        match self {
            ProcessAgeStatus::ResolvesBy(months) => Some(*months),
            ProcessAgeStatus::Atypical => None,
        }
    }

    /// Status of the process for a child of the given age
    pub fn status_at(&self, age_months: u32) -> ProcessStatus {
        match self {
            ProcessAgeStatus::Atypical => ProcessStatus::Delayed,
            ProcessAgeStatus::ResolvesBy(months) if age_months >= *months => {
                ProcessStatus::Delayed
            }
            ProcessAgeStatus::ResolvesBy(_) => ProcessStatus::AgeAppropriate,
        }
    }
}

impl std::fmt::Display for ProcessAgeStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ProcessAgeStatus::ResolvesBy(months) => write!(f, "{} months", months),
            ProcessAgeStatus::Atypical => write!(f, "atypical"),
        }
    }
}
