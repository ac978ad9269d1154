//! Core types for the vocabulary match game.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// Languages a dataset may carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Language {
    German,
    French,
    English,
}

/// The recognized languages, in the order they are offered to the player.
pub const ALL_LANGUAGES: [Language; 3] = [Language::German, Language::French, Language::English];

impl Language {
    /// Column header used for this language in the dataset.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::German => "Deutsch",
            Self::French => "Français",
            Self::English => "English",
        }
    }

    /// Parse from a dataset column header.
    pub fn from_header(header: &str) -> Option<Self> {
        match header {
            "Deutsch" => Some(Self::German),
            "Français" => Some(Self::French),
            "English" => Some(Self::English),
            _ => None,
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Source and target language choice, fixed for the duration of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LanguagePair {
    pub source: Language,
    pub target: Language,
}

impl LanguagePair {
    pub fn new(source: Language, target: Language) -> Self {
        Self { source, target }
    }
}

/// One dataset row: a word per available language.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WordRow {
    /// Position of the record in the dataset, unique per row.
    pub id: usize,
    pub words: HashMap<Language, String>,
}

impl WordRow {
    /// Word for one language, if the row carries it.
    pub fn word(&self, language: Language) -> Option<&str> {
        self.words.get(&language).map(String::as_str)
    }
}

/// A matchable (source word, target word) tuple in the current series.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordPair {
    pub source: String,
    pub target: String,
}

/// Game lifecycle phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GamePhase {
    NotStarted,
    InProgress,
    Completed,
}

impl Default for GamePhase {
    fn default() -> Self {
        Self::NotStarted
    }
}

/// Game tuning knobs.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct GameConfig {
    /// Series played per game.
    pub series_count: u32,
    /// Word pairs dealt per series.
    pub pairs_per_series: usize,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            series_count: 5,
            pairs_per_series: 6,
        }
    }
}
