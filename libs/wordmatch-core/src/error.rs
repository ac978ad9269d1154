//! Error types for wordmatch-core.

use crate::types::Language;
use thiserror::Error;

/// Result type alias using GameError.
pub type Result<T> = std::result::Result<T, GameError>;

/// Errors that can occur while loading the vocabulary dataset.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read dataset: {0}")]
    Csv(#[from] csv::Error),

    #[error("dataset needs at least two recognized language columns, found {found}")]
    TooFewLanguages { found: usize },
}

/// Errors that can occur while driving a game session.
#[derive(Debug, Error)]
pub enum GameError {
    #[error("a game is already running")]
    AlreadyStarted,

    #[error("source and target language must differ")]
    SameLanguage,

    #[error("language {0} is not present in the dataset")]
    LanguageUnavailable(Language),

    #[error("dataset has {available} playable rows but a series needs {required}")]
    InsufficientData { available: usize, required: usize },
}
