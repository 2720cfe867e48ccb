//! Error types shared across the crate

use thiserror::Error;

/// Reasons a string or letter list cannot become a [`crate::core::LetterSet`]
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LetterSetError {
    #[error("Must be 7 letters")]
    WrongLength(usize),

    #[error("Must be 7 letters")]
    NotAlphabetic,

    #[error("Letters must be distinct (repeated '{0}')")]
    DuplicateLetter(char),
}

/// Failures while obtaining the candidate word list
#[derive(Debug, Error)]
pub enum DictionaryError {
    #[error("failed to read word list: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to download word list: {0}")]
    Network(#[from] reqwest::Error),

    #[error("failed to parse word list: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("word list JSON must be an object")]
    NotAnObject,

    #[error("dictionary contains no usable words")]
    Empty,
}
