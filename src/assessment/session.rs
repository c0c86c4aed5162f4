//! Per-invocation session context

/// Welcome and how-to text shown before the first assessment of a session
pub const INSTRUCTIONS: &str = "\
Welcome to Starticulation, a tool for assessing consonant articulation.
Starticulation is made by speech pathologists, for speech pathologists.

HOW TO USE: record the sound actually produced by the child for each target.
Targets default to correct productions, so only record the sounds the child
got wrong. Generate a grid with `starticulation template`, edit the
`produced` entries, then run `starticulation assess --productions FILE`.

Please note: use clinical judgement to decide whether phonological processes
such as cluster reduction and syllable deletion are truly present, especially
when blends are simplified.";

/// State that lives for one run of the tool and is handed to the
/// presentation code explicitly.
#[derive(Debug, Clone)]
pub struct Session {
    show_instructions: bool,
}

impl Session {
    pub fn new(show_instructions: bool) -> Self {
        Self { show_instructions }
    }

    /// Instructions the first time this is called, `None` afterwards
    pub fn take_instructions(&mut self) -> Option<&'static str> {
        if std::mem::replace(&mut self.show_instructions, false) {
            Some(INSTRUCTIONS)
        } else {
            None
        }
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_instructions_shown_once() {
        let mut session = Session::default();
        assert_eq!(session.take_instructions(), Some(INSTRUCTIONS));
        assert_eq!(session.take_instructions(), None);
        assert_eq!(session.take_instructions(), None);
    }

    #[test]
    fn test_instructions_suppressed() {
        let mut session = Session::new(false);
        assert_eq!(session.take_instructions(), None);
    }
}
