//! Pair validation for a tentative (source, target) selection.

use crate::types::WordPair;
use serde::{Deserialize, Serialize};

/// Outcome of a target-word click.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchOutcome {
    /// The selection and the clicked target form a remaining pair.
    Correct,
    /// They do not. A wrong guess reveals nothing about the intended
    /// pair; the player must re-derive it.
    Incorrect,
    /// The click could not be evaluated (no pending selection, word
    /// already found, or not on the board) and was dropped.
    Ignored,
}

impl MatchOutcome {
    /// Score adjustment this outcome carries.
    pub fn score_delta(self) -> i32 {
        match self {
            Self::Correct => 1,
            Self::Incorrect => -1,
            Self::Ignored => 0,
        }
    }
}

/// Check a tentative pair against the pairs still on the board.
pub fn check_pair(source: &str, target: &str, remaining: &[WordPair]) -> MatchOutcome {
    let hit = remaining
        .iter()
        .any(|pair| pair.source == source && pair.target == target);
    if hit {
        MatchOutcome::Correct
    } else {
        MatchOutcome::Incorrect
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn remaining() -> Vec<WordPair> {
        vec![
            WordPair {
                source: "Hund".into(),
                target: "chien".into(),
            },
            WordPair {
                source: "Katze".into(),
                target: "chat".into(),
            },
        ]
    }

    #[test]
    fn matching_pair_is_correct() {
        assert_eq!(
            check_pair("Hund", "chien", &remaining()),
            MatchOutcome::Correct
        );
    }

    #[test]
    fn crossed_pair_is_incorrect() {
        assert_eq!(
            check_pair("Hund", "chat", &remaining()),
            MatchOutcome::Incorrect
        );
    }

    #[test]
    fn score_deltas() {
        assert_eq!(MatchOutcome::Correct.score_delta(), 1);
        assert_eq!(MatchOutcome::Incorrect.score_delta(), -1);
        assert_eq!(MatchOutcome::Ignored.score_delta(), 0);
    }
}
