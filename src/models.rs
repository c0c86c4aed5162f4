//! Core data models for Starticulation
//!
//! These models are shared by the engine, the report aggregator and the
//! reporters.

use crate::error::{AssessmentError, AssessmentResult};
use crate::norms::Sound;
use crate::processes::PhonologicalProcess;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::str::FromStr;
use tracing::debug;

/// Word position a sound is tested in
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Position {
    Initial,
    Medial,
    Final,
}

impl Position {
    pub const ALL: [Position; 3] = [Position::Initial, Position::Medial, Position::Final];

    /// Lowercase key used in files and on the command line
    pub fn as_str(&self) -> &'static str {
        match self {
            Position::Initial => "initial",
            Position::Medial => "medial",
            Position::Final => "final",
        }
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(match self {
            Position::Initial => "Initial",
            Position::Medial => "Medial",
            Position::Final => "Final",
        })
    }
}

impl FromStr for Position {
    type Err = AssessmentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "initial" | "i" => Ok(Position::Initial),
            "medial" | "m" => Ok(Position::Medial),
            "final" | "f" => Ok(Position::Final),
            _ => Err(AssessmentError::UnknownPosition(s.to_string())),
        }
    }
}

impl Serialize for Position {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Position {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

/// Sound-level result for one production
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Verdict {
    AgeAppropriate,
    IncorrectButAgeAppropriate,
    Delayed,
}

impl std::fmt::Display for Verdict {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(match self {
            Verdict::AgeAppropriate => "Age Appropriate",
            Verdict::IncorrectButAgeAppropriate => "Incorrect but Age Appropriate",
            Verdict::Delayed => "Delayed",
        })
    }
}

/// Whether a detected process is still expected at the child's age
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProcessStatus {
    AgeAppropriate,
    Delayed,
}

impl std::fmt::Display for ProcessStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ProcessStatus::AgeAppropriate => write!(f, "Age Appropriate"),
            ProcessStatus::Delayed => write!(f, "Delayed"),
        }
    }
}

/// Child's age in whole months
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize)]
pub struct ChildAge {
    pub months: u32,
}

impl ChildAge {
    pub fn from_months(months: u32) -> Self {
        Self { months }
    }

    pub fn years(&self) -> u32 {
        self.months / 12
    }

    pub fn remainder_months(&self) -> u32 {
        self.months % 12
    }
}

impl std::fmt::Display for ChildAge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{};{}", self.years(), self.remainder_months())
    }
}

/// Strict parse of "years;months". Rejects anything the lenient
/// [`parse_age_months`] would silently turn into 0.
impl FromStr for ChildAge {
    type Err = AssessmentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let malformed = |reason| AssessmentError::MalformedAge {
            input: s.to_string(),
            reason,
        };

        let (years, months) = s
            .split_once(';')
            .ok_or_else(|| malformed("missing ';' separator"))?;
        if months.contains(';') {
            return Err(malformed("more than one ';' separator"));
        }
        let years: u32 = years
            .trim()
            .parse()
            .map_err(|_| malformed("years is not a whole number"))?;
        let months: u32 = months
            .trim()
            .parse()
            .map_err(|_| malformed("months is not a whole number"))?;
        if months > 11 {
            return Err(malformed("months must be between 0 and 11"));
        }
        let total = years
            .checked_mul(12)
            .and_then(|m| m.checked_add(months))
            .ok_or_else(|| malformed("age is out of range"))?;

        Ok(ChildAge::from_months(total))
    }
}

/// Lenient "years;months" parse: malformed input yields 0 months.
///
/// Zero is the youngest possible age, so nothing is ever reported as delayed
/// for an unparseable age. Callers that need to surface bad input should use
/// `ChildAge::from_str` instead.
pub fn parse_age_months(input: &str) -> u32 {
    let parsed = input.split_once(';').and_then(|(years, months)| {
        if months.contains(';') {
            return None;
        }
        let years: u32 = years.trim().parse().ok()?;
        let months: u32 = months.trim().parse().ok()?;
        years.checked_mul(12)?.checked_add(months)
    });

    match parsed {
        Some(months) => months,
        None => {
            debug!("Unparseable age '{}', falling back to 0 months", input);
            0
        }
    }
}

/// The child being assessed
#[derive(Debug, Clone, Default, Serialize)]
pub struct Child {
    pub name: Option<String>,
    pub age: ChildAge,
}

impl Child {
    pub fn new(name: Option<String>, age: ChildAge) -> Self {
        let name = name
            .map(|n| n.trim().to_string())
            .filter(|n| !n.is_empty());
        Self { name, age }
    }

    /// Name for report headings
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or("the child")
    }
}

/// One sound/position combination tested for one child
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssessmentRecord {
    pub target: Sound,
    pub position: Position,
    pub produced: String,
}

impl AssessmentRecord {
    /// A record that assumes the target was produced correctly
    pub fn correct(target: Sound, position: Position) -> Self {
        Self {
            target,
            position,
            produced: target.symbol().to_string(),
        }
    }

    pub fn new(target: Sound, position: Position, produced: impl Into<String>) -> Self {
        Self {
            target,
            position,
            produced: produced.into().trim().to_string(),
        }
    }

    pub fn is_correct(&self) -> bool {
        self.produced == self.target.symbol()
    }
}

/// A substitution that matches a known phonological process
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ProcessFinding {
    pub process: PhonologicalProcess,
    pub target: Sound,
    pub produced: String,
    pub status: ProcessStatus,
}

/// Per-record line of the results table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SoundResult {
    pub sound: Sound,
    pub position: Position,
    pub produced: String,
    pub verdict: Verdict,
}

pub(crate) fn validate_position(sound: Sound, position: Position) -> AssessmentResult<()> {
    if sound.valid_positions().contains(&position) {
        Ok(())
    } else {
        Err(AssessmentError::InvalidPosition {
            sound: sound.symbol().to_string(),
            position: position.as_str().to_string(),
        })
    }
}
