//! Substitution rule table
//!
//! Rules are scanned in declaration order and the first match wins, so the
//! order below decides which process a substitution is attributed to when
//! more than one could apply.

use super::PhonologicalProcess;

/// Target sound and the productions accepted as this simplification of it
#[derive(Debug)]
pub struct Substitution {
    pub target: &'static str,
    pub accepted: &'static [&'static str],
}

/// A phonological process and the substitutions that identify it
#[derive(Debug)]
pub struct ProcessRule {
    pub process: PhonologicalProcess,
    pub substitutions: &'static [Substitution],
}

impl ProcessRule {
    /// Accepted productions for `target`, if this rule covers it
    pub fn accepted_for(&self, target: &str) -> Option<&'static [&'static str]> {
        self.substitutions
            .iter()
            .find(|s| s.target == target)
            .map(|s| s.accepted)
    }

    /// Whether this rule identifies `target` → `produced`
    pub fn matches(&self, target: &str, produced: &str) -> bool {
        self.accepted_for(target)
            .is_some_and(|accepted| accepted.iter().any(|a| *a == produced))
    }
}

const fn sub(target: &'static str, accepted: &'static [&'static str]) -> Substitution {
    Substitution { target, accepted }
}

pub static PROCESS_RULES: &[ProcessRule] = &[
    ProcessRule {
        process: PhonologicalProcess::Gliding,
        substitutions: &[sub("r", &["w"]), sub("l", &["w"])],
    },
    ProcessRule {
        process: PhonologicalProcess::Fronting,
        substitutions: &[sub("k", &["t"]), sub("g", &["d"]), sub("ŋ", &["n"])],
    },
    ProcessRule {
        process: PhonologicalProcess::Backing,
        substitutions: &[sub("t", &["k"]), sub("d", &["g"]), sub("n", &["ŋ"])],
    },
    ProcessRule {
        process: PhonologicalProcess::Stopping,
        substitutions: &[
            sub("f", &["p", "b"]),
            sub("v", &["b", "p"]),
            sub("s", &["t", "d"]),
            sub("z", &["d", "t"]),
            sub("ʃ", &["t", "d"]),
            sub("ʒ", &["d", "t"]),
            sub("θ", &["t"]),
            sub("ð", &["d"]),
        ],
    },
    ProcessRule {
        process: PhonologicalProcess::Deaffrication,
        substitutions: &[sub("tʃ", &["ʃ"]), sub("dʒ", &["ʒ"])],
    },
    ProcessRule {
        process: PhonologicalProcess::Affrication,
        substitutions: &[sub("ʃ", &["tʃ"]), sub("ʒ", &["dʒ"])],
    },
    ProcessRule {
        process: PhonologicalProcess::Labialisation,
        substitutions: &[sub("t", &["p"]), sub("d", &["b"])],
    },
    ProcessRule {
        process: PhonologicalProcess::Alveolarization,
        substitutions: &[sub("f", &["s"]), sub("v", &["z"])],
    },
    ProcessRule {
        process: PhonologicalProcess::Depalatisation,
        substitutions: &[sub("ʃ", &["s"]), sub("ʒ", &["z"])],
    },
    ProcessRule {
        process: PhonologicalProcess::FinalConsonantDevoicing,
        substitutions: &[
            sub("b", &["p"]),
            sub("d", &["t"]),
            sub("g", &["k"]),
            sub("v", &["f"]),
            sub("z", &["s"]),
        ],
    },
    ProcessRule {
        process: PhonologicalProcess::PrevocalicVoicing,
        substitutions: &[sub("p", &["b"]), sub("t", &["d"]), sub("k", &["g"])],
    },
    ProcessRule {
        process: PhonologicalProcess::FrontalLisp,
        substitutions: &[sub("s", &["θ"]), sub("z", &["ð"])],
    },
];
