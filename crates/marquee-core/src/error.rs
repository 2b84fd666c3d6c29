#![forbid(unsafe_code)]

//! Construction-time errors.
//!
//! Engines validate their parameters once, at creation. Steady-state
//! operation is infallible: a constructed engine never fails mid-run.

/// Errors from invalid engine construction parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// The phrase list handed to a typewriter was empty.
    EmptyPhrases,
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyPhrases => write!(f, "phrase list must contain at least one phrase"),
        }
    }
}

impl std::error::Error for ConfigError {}
