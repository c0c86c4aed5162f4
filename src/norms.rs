//! Developmental norm tables
//!
//! Mastery ages and testable word positions for every consonant and
//! consonant cluster in the assessment (Australian norms). The table order
//! is the order sounds appear in the assessment grid.

use crate::error::{AssessmentError, AssessmentResult};
use crate::models::Position;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::str::FromStr;

const ALL: &[Position] = &[Position::Initial, Position::Medial, Position::Final];
const INITIAL: &[Position] = &[Position::Initial];
const MEDIAL: &[Position] = &[Position::Medial];
const INITIAL_MEDIAL: &[Position] = &[Position::Initial, Position::Medial];
const MEDIAL_FINAL: &[Position] = &[Position::Medial, Position::Final];

/// Singleton consonant or consonant cluster
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundKind {
    Singleton,
    Cluster,
}

/// Norm entry for one sound
#[derive(Debug)]
pub struct SoundNorm {
    pub symbol: &'static str,
    /// Age in months by which typically-developing children produce it
    pub mastery_months: u32,
    pub positions: &'static [Position],
    pub kind: SoundKind,
}

const fn single(symbol: &'static str, mastery_months: u32, positions: &'static [Position]) -> SoundNorm {
    SoundNorm {
        symbol,
        mastery_months,
        positions,
        kind: SoundKind::Singleton,
    }
}

/// Clusters are only tested word-initially
const fn cluster(symbol: &'static str, mastery_months: u32) -> SoundNorm {
    SoundNorm {
        symbol,
        mastery_months,
        positions: INITIAL,
        kind: SoundKind::Cluster,
    }
}

pub static SOUND_NORMS: &[SoundNorm] = &[
    single("h", 36, INITIAL),
    single("p", 36, ALL),
    single("m", 36, ALL),
    single("ŋ", 48, MEDIAL_FINAL),
    single("n", 36, ALL),
    single("w", 48, INITIAL_MEDIAL),
    single("b", 36, ALL),
    single("k", 36, ALL),
    single("g", 36, ALL),
    single("d", 36, ALL),
    single("t", 36, ALL),
    single("j", 48, INITIAL),
    single("f", 48, ALL),
    single("ʒ", 72, MEDIAL),
    single("l", 60, ALL),
    single("ʃ", 60, ALL),
    single("tʃ", 60, ALL),
    single("s", 48, ALL),
    single("dʒ", 72, ALL),
    single("z", 60, ALL),
    single("r", 72, INITIAL_MEDIAL),
    single("v", 60, ALL),
    single("ð", 84, INITIAL_MEDIAL),
    single("θ", 72, ALL),
    // /s/ clusters
    cluster("sm", 60),
    cluster("sp", 60),
    cluster("sw", 60),
    cluster("sk", 60),
    cluster("sl", 60),
    cluster("sn", 60),
    cluster("st", 60),
    // l, r and w clusters
    cluster("bl", 48),
    cluster("fl", 48),
    cluster("pl", 48),
    cluster("br", 48),
    cluster("fr", 48),
    cluster("pr", 48),
    cluster("kw", 48),
    cluster("tw", 48),
    cluster("gl", 48),
    cluster("kl", 48),
    cluster("dr", 48),
    cluster("gr", 48),
    cluster("kr", 48),
    cluster("tr", 48),
    cluster("θr", 48),
    // three-element clusters
    cluster("skr", 60),
    cluster("spr", 60),
    cluster("skw", 60),
    cluster("spl", 60),
];

/// A sound from the norm table.
///
/// Only constructible from a table entry, so every `Sound` has exactly one
/// mastery age and one position set.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Sound(u8);

impl Sound {
    /// Look up a sound by its symbol
    pub fn parse(symbol: &str) -> AssessmentResult<Sound> {
        let symbol = symbol.trim();
        SOUND_NORMS
            .iter()
            .position(|norm| norm.symbol == symbol)
            .map(|index| Sound(index as u8))
            .ok_or_else(|| AssessmentError::UnknownSound(symbol.to_string()))
    }

    /// Every sound, in assessment order
    pub fn all() -> impl Iterator<Item = Sound> {
        (0..SOUND_NORMS.len()).map(|index| Sound(index as u8))
    }

    pub fn norm(&self) -> &'static SoundNorm {
        &SOUND_NORMS[self.0 as usize]
    }

    pub fn symbol(&self) -> &'static str {
        self.norm().symbol
    }

    pub fn mastery_age(&self) -> u32 {
        self.norm().mastery_months
    }

    pub fn valid_positions(&self) -> &'static [Position] {
        self.norm().positions
    }

    pub fn is_cluster(&self) -> bool {
        self.norm().kind == SoundKind::Cluster
    }

    /// Individual consonants of a cluster (a singleton yields itself)
    pub fn segments(&self) -> Vec<&'static str> {
        match self.norm().kind {
            SoundKind::Singleton => vec![self.symbol()],
            SoundKind::Cluster => {
                let symbol = self.symbol();
                symbol
                    .char_indices()
                    .map(|(start, c)| &symbol[start..start + c.len_utf8()])
                    .collect()
            }
        }
    }
}

/// Mastery age in months for a sound
pub fn mastery_age(sound: Sound) -> u32 {
    sound.mastery_age()
}

/// Word positions a sound is tested in
pub fn valid_positions(sound: Sound) -> &'static [Position] {
    sound.valid_positions()
}

impl std::fmt::Debug for Sound {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Sound(/{}/)", self.symbol())
    }
}

impl std::fmt::Display for Sound {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(self.symbol())
    }
}

impl FromStr for Sound {
    type Err = AssessmentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Sound::parse(s)
    }
}

impl Serialize for Sound {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.symbol())
    }
}

impl<'de> Deserialize<'de> for Sound {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Sound::parse(&raw).map_err(serde::de::Error::custom)
    }
}
