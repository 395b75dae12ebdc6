//! Error types shared across the crate
//!
//! Library code returns these; the binary wraps them in `anyhow`.

use crate::core::WordError;
use std::path::PathBuf;
use thiserror::Error;

/// Why a guess could not be evaluated or accepted
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GuessError {
    #[error("Guess must be exactly 5 letters, got {len}")]
    InvalidLength { len: usize },

    #[error("Guess may only contain the letters a-z")]
    InvalidCharacters,

    #[error("'{0}' is not in the word list")]
    InvalidWord(String),
}

impl From<WordError> for GuessError {
    fn from(err: WordError) -> Self {
        match err {
            WordError::InvalidLength(len) => Self::InvalidLength { len },
            WordError::NonAscii | WordError::InvalidCharacters => Self::InvalidCharacters,
        }
    }
}

/// Errors from daily target selection
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DailyError {
    #[error("target word list is empty")]
    EmptyTargetList,
}

/// Errors from loading word list files
#[derive(Debug, Error)]
pub enum WordListError {
    #[error("failed to read word list {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("word list {0} contains no valid words")]
    Empty(PathBuf),
}

/// Errors from loading the configuration file
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("invalid config value: {0}")]
    Invalid(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn word_error_maps_to_guess_error() {
        assert_eq!(
            GuessError::from(WordError::InvalidLength(3)),
            GuessError::InvalidLength { len: 3 }
        );
        assert_eq!(
            GuessError::from(WordError::NonAscii),
            GuessError::InvalidCharacters
        );
    }

    #[test]
    fn guess_error_messages() {
        assert_eq!(
            GuessError::InvalidLength { len: 4 }.to_string(),
            "Guess must be exactly 5 letters, got 4"
        );
        assert_eq!(
            GuessError::InvalidWord("xxxxx".into()).to_string(),
            "'xxxxx' is not in the word list"
        );
    }
}
