//! Game session state machine.
//!
//! Owns every piece of mutable game state and exposes the command and
//! query surface the presentation shell drives. Commands take `&mut self`
//! and run to completion, so a single session never interleaves events;
//! hosts that overlap events must wrap the session in their own lock.

use crate::error::{GameError, Result};
use crate::matching::{check_pair, MatchOutcome};
use crate::sampler::{sample_series, SeriesSample};
use crate::shuffle::shuffle_columns;
use crate::types::{GameConfig, GamePhase, Language, LanguagePair, WordPair};
use crate::vocabulary::Vocabulary;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::sync::Arc;

/// Interactive vocabulary match game over a loaded dataset.
#[derive(Debug)]
pub struct GameSession {
    vocabulary: Arc<Vocabulary>,
    config: GameConfig,
    rng: ChaCha8Rng,
    phase: GamePhase,
    languages: Option<LanguagePair>,
    score: i32,
    series: u32,
    used_rows: HashSet<usize>,
    remaining: Vec<WordPair>,
    found: HashSet<String>,
    source_order: Vec<String>,
    target_order: Vec<String>,
    selection: Option<String>,
}

impl GameSession {
    /// Create a session over a loaded vocabulary.
    pub fn new(vocabulary: Arc<Vocabulary>, config: GameConfig) -> Self {
        Self::with_rng(vocabulary, config, ChaCha8Rng::from_entropy())
    }

    /// Create a session with a fixed seed, for reproducible games.
    pub fn with_seed(vocabulary: Arc<Vocabulary>, config: GameConfig, seed: u64) -> Self {
        Self::with_rng(vocabulary, config, ChaCha8Rng::seed_from_u64(seed))
    }

    fn with_rng(vocabulary: Arc<Vocabulary>, config: GameConfig, rng: ChaCha8Rng) -> Self {
        Self {
            vocabulary,
            config,
            rng,
            phase: GamePhase::NotStarted,
            languages: None,
            score: 0,
            series: 0,
            used_rows: HashSet::new(),
            remaining: Vec::new(),
            found: HashSet::new(),
            source_order: Vec::new(),
            target_order: Vec::new(),
            selection: None,
        }
    }

    /// Begin a new game with the given language pair.
    ///
    /// Fails without touching any state: the languages must differ and be
    /// present in the dataset, and the dataset must be able to fill a
    /// series.
    pub fn start(&mut self, languages: LanguagePair) -> Result<()> {
        if self.phase != GamePhase::NotStarted {
            return Err(GameError::AlreadyStarted);
        }
        if languages.source == languages.target {
            return Err(GameError::SameLanguage);
        }
        for language in [languages.source, languages.target] {
            if !self.vocabulary.languages().contains(&language) {
                return Err(GameError::LanguageUnavailable(language));
            }
        }
        let sample = sample_series(
            &self.vocabulary,
            &HashSet::new(),
            languages,
            self.config.pairs_per_series,
            &mut self.rng,
        )?;

        self.languages = Some(languages);
        self.phase = GamePhase::InProgress;
        self.score = 0;
        self.series = 1;
        self.used_rows.clear();
        self.deal(sample);
        tracing::info!(
            source = %languages.source,
            target = %languages.target,
            "game started"
        );
        Ok(())
    }

    /// Record a source-column word as the pending selection.
    ///
    /// Clicking another source word before a target pick replaces the
    /// selection with no penalty. Clicks outside an active board, on an
    /// already-found word, or on a word not in the source column are
    /// dropped.
    pub fn click_source(&mut self, word: &str) {
        if self.phase != GamePhase::InProgress
            || self.found.contains(word)
            || !self.source_order.iter().any(|candidate| candidate == word)
        {
            return;
        }
        self.selection = Some(word.to_string());
    }

    /// Try to match the pending selection against a target-column word.
    ///
    /// Clicks that cannot be evaluated return [`MatchOutcome::Ignored`]
    /// and leave everything untouched, the pending selection included. A
    /// correct match removes the pair, marks both words as found and may
    /// advance the series or finish the game; an incorrect one only costs
    /// a point. Either way the pending selection is consumed.
    pub fn click_target(&mut self, word: &str) -> Result<MatchOutcome> {
        if self.phase != GamePhase::InProgress
            || self.found.contains(word)
            || !self.target_order.iter().any(|candidate| candidate == word)
        {
            return Ok(MatchOutcome::Ignored);
        }
        let Some(source) = self.selection.take() else {
            return Ok(MatchOutcome::Ignored);
        };

        let outcome = check_pair(&source, word, &self.remaining);
        self.score += outcome.score_delta();
        tracing::debug!(%source, target = word, ?outcome, score = self.score, "pair attempted");

        if outcome == MatchOutcome::Correct {
            self.remaining
                .retain(|pair| !(pair.source == source && pair.target == word));
            self.found.insert(source);
            self.found.insert(word.to_string());
            if self.remaining.is_empty() {
                self.next_series()?;
            }
        }
        Ok(outcome)
    }

    /// Abandon the game and return to the initial state.
    ///
    /// Safe to call from any phase, any number of times.
    pub fn abort(&mut self) {
        self.phase = GamePhase::NotStarted;
        self.languages = None;
        self.score = 0;
        self.series = 0;
        self.used_rows.clear();
        self.remaining.clear();
        self.found.clear();
        self.source_order.clear();
        self.target_order.clear();
        self.selection = None;
        tracing::debug!("game aborted");
    }

    /// Advance past a cleared board, or finish the game on the last
    /// series.
    fn next_series(&mut self) -> Result<()> {
        let Some(languages) = self.languages else {
            return Ok(());
        };
        if self.series < self.config.series_count {
            self.series += 1;
            let sample = sample_series(
                &self.vocabulary,
                &self.used_rows,
                languages,
                self.config.pairs_per_series,
                &mut self.rng,
            )?;
            self.deal(sample);
        } else {
            self.phase = GamePhase::Completed;
            self.selection = None;
            tracing::info!(score = self.score, "game completed");
        }
        Ok(())
    }

    /// Install a fresh sample as the current board.
    fn deal(&mut self, sample: SeriesSample) {
        if sample.used_reset {
            self.used_rows.clear();
        }
        self.used_rows.extend(sample.row_ids);
        let (source_order, target_order) = shuffle_columns(&sample.pairs, &mut self.rng);
        self.source_order = source_order;
        self.target_order = target_order;
        self.remaining = sample.pairs;
        self.found.clear();
        self.selection = None;
        tracing::debug!(series = self.series, "series dealt");
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    /// Accumulated score; unbounded in both directions.
    pub fn score(&self) -> i32 {
        self.score
    }

    /// Current 1-based series index; `None` before a game starts.
    pub fn series(&self) -> Option<u32> {
        (self.phase != GamePhase::NotStarted).then_some(self.series)
    }

    /// Language pair of the running (or finished) game.
    pub fn languages(&self) -> Option<LanguagePair> {
        self.languages
    }

    /// Languages the dataset offers.
    pub fn available_languages(&self) -> &[Language] {
        self.vocabulary.languages()
    }

    /// Source-column words in display order, fixed for the series.
    pub fn source_order(&self) -> &[String] {
        &self.source_order
    }

    /// Target-column words in display order, fixed for the series.
    pub fn target_order(&self) -> &[String] {
        &self.target_order
    }

    /// Words from either column already matched this series.
    pub fn found_words(&self) -> &HashSet<String> {
        &self.found
    }

    /// Whether a word has been matched this series.
    pub fn is_found(&self, word: &str) -> bool {
        self.found.contains(word)
    }

    /// Pending source-word selection, if any.
    pub fn selection(&self) -> Option<&str> {
        self.selection.as_deref()
    }

    pub fn vocabulary(&self) -> &Vocabulary {
        &self.vocabulary
    }

    pub fn config(&self) -> GameConfig {
        self.config
    }

    /// Read-model of everything the renderer needs, in one value.
    pub fn snapshot(&self) -> GameSnapshot {
        let mut found: Vec<String> = self.found.iter().cloned().collect();
        found.sort();
        GameSnapshot {
            phase: self.phase,
            series: self.series(),
            series_count: self.config.series_count,
            score: self.score,
            languages: self.languages,
            source_order: self.source_order.clone(),
            target_order: self.target_order.clone(),
            found,
            selection: self.selection.clone(),
        }
    }
}

/// Serializable view of the session for the presentation layer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameSnapshot {
    pub phase: GamePhase,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub series: Option<u32>,
    pub series_count: u32,
    pub score: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub languages: Option<LanguagePair>,
    pub source_order: Vec<String>,
    pub target_order: Vec<String>,
    pub found: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub selection: Option<String>,
}
