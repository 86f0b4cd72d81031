//! Structural quality scoring
//!
//! Rewards sentence lengths in a band that reads well aloud, plus some length
//! variety, and penalizes fragments, run-ons, and near-empty input. Component
//! weights sum to 100.

use serde::{Deserialize, Serialize};

use crate::stats;

/// Sentence-length band that scores full marks, in words
pub const TARGET_MIN_WORDS: usize = 10;
pub const TARGET_MAX_WORDS: usize = 20;

/// Sentences shorter or longer than these bounds score nothing
pub const SHORT_SENTENCE_WORDS: usize = 5;
pub const LONG_SENTENCE_WORDS: usize = 35;

const BAND_WEIGHT: f64 = 60.0;
const VARIETY_WEIGHT: f64 = 20.0;
const COUNT_STEP: f64 = 5.0;
const COUNT_CAP: usize = 4;

/// Structure score in [0, 100] plus the sentence count it was computed from
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StructureResult {
    pub score: u32,
    pub sentence_count: usize,
}

pub(crate) fn structure_score(text: &str) -> StructureResult {
    let sentences = stats::sentences(text);
    let count = sentences.len();

    if count == 0 {
        return StructureResult {
            score: 0,
            sentence_count: 0,
        };
    }

    let lengths: Vec<usize> = sentences
        .iter()
        .map(|sentence| stats::word_count(sentence))
        .collect();

    let band_total: f64 = lengths.iter().map(|&len| band_weight(len)).sum();
    let band = band_total / count as f64 * BAND_WEIGHT;

    let variety = if count > 1 {
        let longest = lengths.iter().max().copied().unwrap_or(0);
        let shortest = lengths.iter().min().copied().unwrap_or(0);
        (longest - shortest).min(10) as f64 / 10.0 * VARIETY_WEIGHT
    } else {
        0.0
    };

    let count_bonus = count.min(COUNT_CAP) as f64 * COUNT_STEP;

    let score = (band + variety + count_bonus).round().clamp(0.0, 100.0) as u32;

    StructureResult {
        score,
        sentence_count: count,
    }
}

fn band_weight(length: usize) -> f64 {
    if (TARGET_MIN_WORDS..=TARGET_MAX_WORDS).contains(&length) {
        1.0
    } else if (SHORT_SENTENCE_WORDS..=LONG_SENTENCE_WORDS).contains(&length) {
        0.4
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn repeated_sentences(words_per_sentence: usize, count: usize) -> String {
        let sentence = vec!["word"; words_per_sentence].join(" ");
        vec![sentence; count].join(". ") + "."
    }

    #[test]
    fn test_empty_text_scores_zero() {
        let result = structure_score("");
        assert_eq!(result.score, 0);
        assert_eq!(result.sentence_count, 0);
    }

    #[test]
    fn test_target_band_beats_fragments_at_equal_count() {
        let in_band = structure_score(&repeated_sentences(15, 3));
        let fragments = structure_score(&repeated_sentences(2, 3));
        assert_eq!(in_band.sentence_count, fragments.sentence_count);
        assert!(in_band.score > fragments.score);
    }

    #[test]
    fn test_target_band_beats_run_ons_at_equal_count() {
        let in_band = structure_score(&repeated_sentences(15, 2));
        let run_ons = structure_score(&repeated_sentences(40, 2));
        assert!(in_band.score > run_ons.score);
    }

    #[test]
    fn test_single_run_on_scores_low() {
        let text = vec!["word"; 50].join(" ");
        let result = structure_score(&text);
        assert_eq!(result.sentence_count, 1);
        assert!(result.score < 20);
    }

    #[test]
    fn test_variety_is_rewarded_within_the_band() {
        let short_in_band = vec!["word"; 11].join(" ");
        let long_in_band = vec!["word"; 19].join(" ");
        let varied = structure_score(&format!("{short_in_band}. {long_in_band}."));
        let uniform = structure_score(&repeated_sentences(15, 2));
        assert_eq!(varied.sentence_count, uniform.sentence_count);
        assert!(varied.score > uniform.score);
    }

    #[test]
    fn test_score_stays_in_range() {
        for text in ["", "one", "a. b. c. d. e.", &repeated_sentences(15, 10)] {
            let result = structure_score(text);
            assert!(result.score <= 100);
        }
    }
}
