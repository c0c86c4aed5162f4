//! Process detection
//!
//! Two detectors run in a fixed order: the rule table, then the
//! cluster-reduction fallback. At most one process is attributed to a
//! production.

use super::rules::{ProcessRule, PROCESS_RULES};
use super::PhonologicalProcess;
use crate::norms::Sound;
use tracing::trace;

/// Trait for anything that can attribute a substitution to a process
pub trait SubstitutionDetector {
    /// Short identifier, used in trace logs
    fn name(&self) -> &'static str;

    /// The process `target` → `produced` indicates, if any.
    ///
    /// Callers never pass a correct production (`produced == target`).
    fn detect(&self, target: Sound, produced: &str) -> Option<PhonologicalProcess>;
}

/// Scans an ordered rule table; the first rule that covers the target and
/// accepts the production wins.
pub struct RuleTableDetector {
    rules: &'static [ProcessRule],
}

impl RuleTableDetector {
    pub fn new(rules: &'static [ProcessRule]) -> Self {
        Self { rules }
    }
}

impl Default for RuleTableDetector {
    fn default() -> Self {
        Self::new(PROCESS_RULES)
    }
}

impl SubstitutionDetector for RuleTableDetector {
    fn name(&self) -> &'static str {
        "rule-table"
    }

    fn detect(&self, target: Sound, produced: &str) -> Option<PhonologicalProcess> {
        // A rule covering the target but not the production does not stop
        // the scan; a later rule may still accept it.
        self.rules
            .iter()
            .find(|rule| rule.matches(target.symbol(), produced))
            .map(|rule| rule.process)
    }
}

/// Fallback for clusters reduced to one of their own consonants.
///
/// Affricates (/tʃ/, /dʒ/) are single sounds, not clusters, so /tʃ/ → /t/
/// is not reported as cluster reduction.
pub struct ClusterReductionDetector;

impl SubstitutionDetector for ClusterReductionDetector {
    fn name(&self) -> &'static str {
        "cluster-reduction"
    }

    fn detect(&self, target: Sound, produced: &str) -> Option<PhonologicalProcess> {
        if !target.is_cluster() || produced.chars().count() != 1 {
            return None;
        }

        let segments = target.segments();
        if !segments.contains(&produced) {
            return None;
        }

        if segments.contains(&"s") {
            Some(PhonologicalProcess::ClusterReductionWithS)
        } else {
            Some(PhonologicalProcess::ClusterReductionNoS)
        }
    }
}

/// Detect the phonological process behind `target` → `produced`
pub fn detect(target: Sound, produced: &str) -> Option<PhonologicalProcess> {
    let detectors: [&dyn SubstitutionDetector; 2] =
        [&RuleTableDetector::default(), &ClusterReductionDetector];

    detectors.iter().find_map(|detector| {
        let found = detector.detect(target, produced);
        if let Some(process) = found {
            trace!(
                "/{}/ -> /{}/: {} ({})",
                target,
                produced,
                process,
                detector.name()
            );
        }
        found
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::processes::rules::Substitution;

    fn sound(symbol: &str) -> Sound {
        Sound::parse(symbol).unwrap()
    }

    #[test]
    fn test_fronting() {
        assert_eq!(detect(sound("k"), "t"), Some(PhonologicalProcess::Fronting));
        assert_eq!(detect(sound("ŋ"), "n"), Some(PhonologicalProcess::Fronting));
    }

    #[test]
    fn test_frontal_lisp() {
        assert_eq!(detect(sound("s"), "θ"), Some(PhonologicalProcess::FrontalLisp));
        assert_eq!(detect(sound("z"), "ð"), Some(PhonologicalProcess::FrontalLisp));
    }

    #[test]
    fn test_multi_valued_rule() {
        assert_eq!(detect(sound("f"), "p"), Some(PhonologicalProcess::Stopping));
        assert_eq!(detect(sound("f"), "b"), Some(PhonologicalProcess::Stopping));
    }

    #[test]
    fn test_scan_continues_past_covering_rule() {
        // Stopping covers /ʃ/ but not [s]; depalatisation accepts it
        assert_eq!(
            detect(sound("ʃ"), "s"),
            Some(PhonologicalProcess::Depalatisation)
        );
        // /t/ is covered by backing, labialisation and prevocalic voicing
        assert_eq!(detect(sound("t"), "k"), Some(PhonologicalProcess::Backing));
        assert_eq!(detect(sound("t"), "p"), Some(PhonologicalProcess::Labialisation));
        assert_eq!(
            detect(sound("t"), "d"),
            Some(PhonologicalProcess::PrevocalicVoicing)
        );
    }

    #[test]
    fn test_earlier_rule_wins() {
        // /z/ → [d]: stopping comes before final consonant devoicing
        assert_eq!(detect(sound("z"), "d"), Some(PhonologicalProcess::Stopping));
        // /d/ → [t] only appears under final consonant devoicing
        assert_eq!(
            detect(sound("d"), "t"),
            Some(PhonologicalProcess::FinalConsonantDevoicing)
        );
    }

    #[test]
    fn test_first_match_with_shared_target() {
        static RULES: &[ProcessRule] = &[
            ProcessRule {
                process: PhonologicalProcess::Stopping,
                substitutions: &[Substitution {
                    target: "s",
                    accepted: &["t"],
                }],
            },
            ProcessRule {
                process: PhonologicalProcess::Backing,
                substitutions: &[Substitution {
                    target: "s",
                    accepted: &["t", "k"],
                }],
            },
        ];
        let detector = RuleTableDetector::new(RULES);
        assert_eq!(
            detector.detect(sound("s"), "t"),
            Some(PhonologicalProcess::Stopping)
        );
        assert_eq!(
            detector.detect(sound("s"), "k"),
            Some(PhonologicalProcess::Backing)
        );
    }

    #[test]
    fn test_cluster_reduction_with_s() {
        assert_eq!(
            detect(sound("spl"), "p"),
            Some(PhonologicalProcess::ClusterReductionWithS)
        );
        assert_eq!(
            detect(sound("st"), "t"),
            Some(PhonologicalProcess::ClusterReductionWithS)
        );
        assert_eq!(
            detect(sound("sm"), "s"),
            Some(PhonologicalProcess::ClusterReductionWithS)
        );
    }

    #[test]
    fn test_cluster_reduction_without_s() {
        assert_eq!(
            detect(sound("bl"), "b"),
            Some(PhonologicalProcess::ClusterReductionNoS)
        );
        assert_eq!(
            detect(sound("θr"), "θ"),
            Some(PhonologicalProcess::ClusterReductionNoS)
        );
    }

    #[test]
    fn test_no_cluster_reduction() {
        // Not one of the cluster's consonants
        assert_eq!(detect(sound("spl"), "k"), None);
        // More than one segment
        assert_eq!(detect(sound("spl"), "pl"), None);
        // Omission
        assert_eq!(detect(sound("spl"), ""), None);
        // Affricate is not a cluster
        assert_eq!(detect(sound("tʃ"), "t"), None);
    }

    #[test]
    fn test_unknown_substitution() {
        assert_eq!(detect(sound("m"), "n"), None);
        assert_eq!(detect(sound("r"), "j"), None);
    }
}
