//! Per-series sampling of word pairs without repetition.

use crate::error::{GameError, Result};
use crate::types::{LanguagePair, WordPair};
use crate::vocabulary::Vocabulary;
use rand::seq::SliceRandom;
use rand::Rng;
use std::collections::HashSet;

/// One series' worth of freshly drawn pairs.
#[derive(Debug, Clone)]
pub struct SeriesSample {
    /// Drawn (source, target) pairs, one per row.
    pub pairs: Vec<WordPair>,
    /// Dataset ids of the drawn rows; the caller unions these into its
    /// used-set.
    pub row_ids: HashSet<usize>,
    /// True when the unused remainder could not fill the series and the
    /// caller must clear its used-set before applying `row_ids`.
    pub used_reset: bool,
}

/// Draw `count` distinct rows uniformly for the given language pair.
///
/// Rows in `used` are not eligible; once fewer than `count` eligible rows
/// remain, the whole dataset becomes eligible again and `used_reset` is
/// set. Rows missing a word on either side of the pair never take part.
pub fn sample_series(
    vocabulary: &Vocabulary,
    used: &HashSet<usize>,
    languages: LanguagePair,
    count: usize,
    rng: &mut impl Rng,
) -> Result<SeriesSample> {
    let unused = collect_candidates(vocabulary, used, languages);
    let (candidates, used_reset) = if unused.len() < count {
        (
            collect_candidates(vocabulary, &HashSet::new(), languages),
            true,
        )
    } else {
        (unused, false)
    };
    if candidates.len() < count {
        return Err(GameError::InsufficientData {
            available: candidates.len(),
            required: count,
        });
    }

    let mut pairs = Vec::with_capacity(count);
    let mut row_ids = HashSet::with_capacity(count);
    for (id, pair) in candidates.choose_multiple(rng, count) {
        row_ids.insert(*id);
        pairs.push(pair.clone());
    }

    Ok(SeriesSample {
        pairs,
        row_ids,
        used_reset,
    })
}

fn collect_candidates(
    vocabulary: &Vocabulary,
    used: &HashSet<usize>,
    languages: LanguagePair,
) -> Vec<(usize, WordPair)> {
    vocabulary
        .rows_excluding(used)
        .filter_map(|row| {
            let source = row.word(languages.source)?;
            let target = row.word(languages.target)?;
            Some((
                row.id,
                WordPair {
                    source: source.to_string(),
                    target: target.to_string(),
                },
            ))
        })
        .collect()
}
