//! Default record generation and clinician overrides

use crate::error::{AssessmentError, AssessmentResult};
use crate::models::{validate_position, AssessmentRecord, Position};
use crate::norms::Sound;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use tracing::debug;

/// Every sound in every position it is tested in, assumed correct.
///
/// Order follows the norm table, then initial/medial/final.
pub fn default_records() -> Vec<AssessmentRecord> {
    Sound::all()
        .flat_map(|sound| {
            sound
                .valid_positions()
                .iter()
                .map(move |&position| AssessmentRecord::correct(sound, position))
        })
        .collect()
}

/// A clinician's transcription for one sound/position
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductionOverride {
    pub sound: Sound,
    pub position: Position,
    #[serde(default)]
    pub produced: String,
}

impl ProductionOverride {
    pub fn new(sound: Sound, position: Position, produced: impl Into<String>) -> Self {
        Self {
            sound,
            position,
            produced: produced.into(),
        }
    }
}

/// Parses `SOUND:POSITION=PRODUCED`, e.g. `r:initial=w`. An empty
/// production records an omission.
impl FromStr for ProductionOverride {
    type Err = AssessmentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let malformed = || AssessmentError::MalformedOverride(s.to_string());

        let (key, produced) = s.split_once('=').ok_or_else(malformed)?;
        let (sound, position) = key.rsplit_once(':').ok_or_else(malformed)?;
        if sound.trim().is_empty() || position.trim().is_empty() {
            return Err(malformed());
        }

        Ok(Self {
            sound: Sound::parse(sound)?,
            position: position.parse()?,
            produced: produced.to_string(),
        })
    }
}

/// Builds the record set for one child
#[derive(Debug, Clone)]
pub struct AssessmentBuilder {
    records: Vec<AssessmentRecord>,
}

impl AssessmentBuilder {
    /// Start from the full default grid
    pub fn with_defaults() -> Self {
        Self {
            records: default_records(),
        }
    }

    /// Replace the production for one sound/position.
    ///
    /// Fails if the sound is not tested in that position. Later overrides of
    /// the same sound/position replace earlier ones.
    pub fn override_production(&mut self, o: &ProductionOverride) -> AssessmentResult<()> {
        validate_position(o.sound, o.position)?;

        let record = self
            .records
            .iter_mut()
            .find(|r| r.target == o.sound && r.position == o.position)
            .ok_or_else(|| AssessmentError::InvalidPosition {
                sound: o.sound.symbol().to_string(),
                position: o.position.as_str().to_string(),
            })?;

        debug!(
            "Override /{}/ {}: '{}' -> '{}'",
            o.sound,
            o.position.as_str(),
            record.produced,
            o.produced.trim()
        );
        *record = AssessmentRecord::new(o.sound, o.position, o.produced.as_str());
        Ok(())
    }

    /// Builder-style single override
    pub fn with_production(
        mut self,
        sound: Sound,
        position: Position,
        produced: &str,
    ) -> AssessmentResult<Self> {
        self.override_production(&ProductionOverride::new(sound, position, produced))?;
        Ok(self)
    }

    /// Merge a batch of overrides, stopping at the first invalid one
    pub fn apply_overrides(
        mut self,
        overrides: impl IntoIterator<Item = ProductionOverride>,
    ) -> AssessmentResult<Self> {
        for o in overrides {
            self.override_production(&o)?;
        }
        Ok(self)
    }

    pub fn build(self) -> Vec<AssessmentRecord> {
        self.records
    }
}

impl Default for AssessmentBuilder {
    fn default() -> Self {
        Self::with_defaults()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sound(symbol: &str) -> Sound {
        Sound::parse(symbol).unwrap()
    }

    #[test]
    fn test_default_grid() {
        let records = default_records();
        let expected: usize = Sound::all().map(|s| s.valid_positions().len()).sum();
        assert_eq!(records.len(), expected);
        assert!(records.iter().all(AssessmentRecord::is_correct));

        // h initial comes first, spl last
        assert_eq!(records[0].target, sound("h"));
        assert_eq!(records[records.len() - 1].target, sound("spl"));
    }

    #[test]
    fn test_default_grid_has_no_final_r() {
        let r = sound("r");
        assert!(!default_records()
            .iter()
            .any(|rec| rec.target == r && rec.position == Position::Final));
    }

    #[test]
    fn test_override_merge() {
        let records = AssessmentBuilder::with_defaults()
            .with_production(sound("r"), Position::Initial, " w ")
            .unwrap()
            .build();

        let changed: Vec<_> = records.iter().filter(|r| !r.is_correct()).collect();
        assert_eq!(changed.len(), 1);
        assert_eq!(changed[0].target, sound("r"));
        assert_eq!(changed[0].position, Position::Initial);
        assert_eq!(changed[0].produced, "w");
        assert_eq!(records.len(), default_records().len());
    }

    #[test]
    fn test_later_override_wins() {
        let overrides = vec![
            ProductionOverride::new(sound("s"), Position::Final, "t"),
            ProductionOverride::new(sound("s"), Position::Final, "θ"),
        ];
        let records = AssessmentBuilder::with_defaults()
            .apply_overrides(overrides)
            .unwrap()
            .build();
        let s_final = records
            .iter()
            .find(|r| r.target == sound("s") && r.position == Position::Final)
            .unwrap();
        assert_eq!(s_final.produced, "θ");
    }

    #[test]
    fn test_invalid_position_rejected() {
        let err = AssessmentBuilder::with_defaults()
            .with_production(sound("r"), Position::Final, "w")
            .unwrap_err();
        assert_eq!(
            err,
            AssessmentError::InvalidPosition {
                sound: "r".into(),
                position: "final".into()
            }
        );
    }

    #[test]
    fn test_override_parsing() {
        let o: ProductionOverride = "r:initial=w".parse().unwrap();
        assert_eq!(o, ProductionOverride::new(sound("r"), Position::Initial, "w"));

        let omission: ProductionOverride = "spl:Initial=".parse().unwrap();
        assert_eq!(omission.produced, "");

        assert!(matches!(
            "r=w".parse::<ProductionOverride>(),
            Err(AssessmentError::MalformedOverride(_))
        ));
        assert!(matches!(
            "x:initial=w".parse::<ProductionOverride>(),
            Err(AssessmentError::UnknownSound(_))
        ));
        assert!(matches!(
            "r:middle=w".parse::<ProductionOverride>(),
            Err(AssessmentError::UnknownPosition(_))
        ));
    }
}
