//! Errors raised at the input-validation boundary of the engine

use thiserror::Error;

/// Errors that can occur while building or validating an assessment
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AssessmentError {
    #[error("Unknown sound '{0}'. Run `starticulation norms` to list the assessed sounds")]
    UnknownSound(String),

    #[error("Unknown position '{0}'. Valid positions: initial, medial, final")]
    UnknownPosition(String),

    #[error("/{sound}/ is not assessed in {position} position")]
    InvalidPosition { sound: String, position: String },

    #[error("Malformed age '{input}': {reason}. Expected years;months, e.g. 4;6")]
    MalformedAge { input: String, reason: &'static str },

    #[error("Malformed production override '{0}'. Expected SOUND:POSITION=PRODUCED, e.g. r:initial=w")]
    MalformedOverride(String),
}

pub type AssessmentResult<T> = Result<T, AssessmentError>;
