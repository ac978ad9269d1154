//! Display ordering for a dealt series.

use crate::types::WordPair;
use rand::seq::SliceRandom;
use rand::Rng;

/// Split the pairs into their two word columns and permute each
/// independently, so column positions carry no pairing information.
pub fn shuffle_columns(pairs: &[WordPair], rng: &mut impl Rng) -> (Vec<String>, Vec<String>) {
    let mut source: Vec<String> = pairs.iter().map(|pair| pair.source.clone()).collect();
    let mut target: Vec<String> = pairs.iter().map(|pair| pair.target.clone()).collect();
    source.shuffle(rng);
    target.shuffle(rng);
    (source, target)
}
