//! Vocabulary dataset loading and queries.
//!
//! The dataset is a CSV table whose header names the language of each
//! column. Only columns from the recognized language set are read; any
//! other column is ignored. Rows missing a word in a recognized column
//! are skipped at load so every stored row is playable for every
//! language pair.

use crate::error::LoadError;
use crate::types::{Language, WordRow, ALL_LANGUAGES};
use std::collections::{HashMap, HashSet};
use std::io::Read;
use std::path::Path;

/// Loaded word-pair dataset.
///
/// Parsing happens once per source; share the loaded value instead of
/// re-reading the file between games.
#[derive(Debug, Clone)]
pub struct Vocabulary {
    rows: Vec<WordRow>,
    languages: Vec<Language>,
}

impl Vocabulary {
    /// Load a dataset from a CSV file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, LoadError> {
        let reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_path(path.as_ref())?;
        Self::from_reader(reader)
    }

    /// Load a dataset from CSV content already in memory.
    pub fn from_csv(content: &str) -> Result<Self, LoadError> {
        let reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(content.as_bytes());
        Self::from_reader(reader)
    }

    fn from_reader<R: Read>(mut reader: csv::Reader<R>) -> Result<Self, LoadError> {
        let headers = reader.headers()?.clone();

        // First matching column wins if a header repeats.
        let columns: Vec<(usize, Language)> = ALL_LANGUAGES
            .iter()
            .filter_map(|&language| {
                headers
                    .iter()
                    .position(|header| Language::from_header(header) == Some(language))
                    .map(|index| (index, language))
            })
            .collect();
        if columns.len() < 2 {
            return Err(LoadError::TooFewLanguages {
                found: columns.len(),
            });
        }

        let mut rows = Vec::new();
        for (id, record) in reader.records().enumerate() {
            let record = record?;
            let mut words = HashMap::with_capacity(columns.len());
            for &(index, language) in &columns {
                match record.get(index).filter(|word| !word.is_empty()) {
                    Some(word) => {
                        words.insert(language, word.to_string());
                    }
                    None => {
                        words.clear();
                        break;
                    }
                }
            }
            if words.is_empty() {
                tracing::warn!(record = id + 1, "skipping row with missing words");
                continue;
            }
            rows.push(WordRow { id, words });
        }

        let languages = columns.into_iter().map(|(_, language)| language).collect();
        Ok(Self { rows, languages })
    }

    /// Languages present in this dataset.
    pub fn languages(&self) -> &[Language] {
        &self.languages
    }

    /// All playable rows.
    pub fn rows(&self) -> &[WordRow] {
        &self.rows
    }

    /// Number of playable rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Rows whose id is not in the exclusion set.
    pub fn rows_excluding<'a>(
        &'a self,
        used: &'a HashSet<usize>,
    ) -> impl Iterator<Item = &'a WordRow> {
        self.rows.iter().filter(move |row| !used.contains(&row.id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_three_language_dataset() {
        let vocab = Vocabulary::from_csv(
            "Deutsch,Français,English\n\
             Hund,chien,dog\n\
             Katze,chat,cat\n",
        )
        .unwrap();
        assert_eq!(vocab.len(), 2);
        assert_eq!(
            vocab.languages(),
            &[Language::German, Language::French, Language::English]
        );
        assert_eq!(vocab.rows()[0].word(Language::French), Some("chien"));
        assert_eq!(vocab.rows()[1].word(Language::English), Some("cat"));
    }

    #[test]
    fn unknown_columns_are_ignored() {
        let vocab = Vocabulary::from_csv(
            "Deutsch,Notes,English\n\
             Hund,mammal,dog\n",
        )
        .unwrap();
        assert_eq!(vocab.languages(), &[Language::German, Language::English]);
        assert_eq!(vocab.rows()[0].word(Language::French), None);
    }

    #[test]
    fn reject_single_language_column() {
        let result = Vocabulary::from_csv("Deutsch,Notes\nHund,mammal\n");
        assert!(matches!(
            result,
            Err(LoadError::TooFewLanguages { found: 1 })
        ));
    }

    #[test]
    fn reject_unreadable_file() {
        let result = Vocabulary::from_path("no/such/dataset.csv");
        assert!(matches!(result, Err(LoadError::Csv(_))));
    }

    #[test]
    fn incomplete_rows_are_skipped() {
        let vocab = Vocabulary::from_csv(
            "Deutsch,English\n\
             Hund,dog\n\
             Katze,\n\
             Maus,mouse\n",
        )
        .unwrap();
        assert_eq!(vocab.len(), 2);
        // Ids keep their dataset position even across skipped rows.
        assert_eq!(vocab.rows()[1].id, 2);
    }

    #[test]
    fn rows_excluding_filters_by_id() {
        let vocab = Vocabulary::from_csv(
            "Deutsch,English\n\
             Hund,dog\n\
             Katze,cat\n\
             Maus,mouse\n",
        )
        .unwrap();
        let used: HashSet<usize> = [0, 2].into_iter().collect();
        let left: Vec<usize> = vocab.rows_excluding(&used).map(|row| row.id).collect();
        assert_eq!(left, vec![1]);
    }
}
