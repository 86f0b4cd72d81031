//! Lexical complexity scoring
//!
//! Blends average word length and average sentence length into a 0-100
//! score. Both components clamp before blending, so pathological input
//! saturates instead of overflowing.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::stats;

/// Word length, in characters, at or below which a word contributes nothing
const WORD_LEN_FLOOR: f64 = 3.0;
/// Additional characters of average word length that reach full contribution
const WORD_LEN_RANGE: f64 = 4.0;
/// Average sentence length, in words, that reaches full contribution
const SENTENCE_LEN_CEILING: f64 = 30.0;

/// Level cut-offs used for display
pub const HIGH_COMPLEXITY_SCORE: u32 = 70;
pub const MEDIUM_COMPLEXITY_SCORE: u32 = 40;

/// Coarse complexity bucket derived from the numeric score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ComplexityLevel {
    Low,
    Medium,
    High,
}

impl ComplexityLevel {
    pub fn from_score(score: u32) -> Self {
        if score > HIGH_COMPLEXITY_SCORE {
            ComplexityLevel::High
        } else if score > MEDIUM_COMPLEXITY_SCORE {
            ComplexityLevel::Medium
        } else {
            ComplexityLevel::Low
        }
    }
}

impl fmt::Display for ComplexityLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ComplexityLevel::Low => write!(f, "Low"),
            ComplexityLevel::Medium => write!(f, "Medium"),
            ComplexityLevel::High => write!(f, "High"),
        }
    }
}

pub(crate) fn analyze_complexity(text: &str) -> u32 {
    let words = stats::words(text);
    if words.is_empty() {
        return 0;
    }

    let total_chars: usize = words.iter().map(|word| word.chars().count()).sum();
    let avg_word_len = total_chars as f64 / words.len() as f64;

    let sentence_count = stats::sentence_count(text).max(1);
    let avg_sentence_len = words.len() as f64 / sentence_count as f64;

    let word_component = ((avg_word_len - WORD_LEN_FLOOR) / WORD_LEN_RANGE).clamp(0.0, 1.0);
    let sentence_component = (avg_sentence_len / SENTENCE_LEN_CEILING).clamp(0.0, 1.0);

    ((word_component * 0.5 + sentence_component * 0.5) * 100.0)
        .round()
        .clamp(0.0, 100.0) as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_text_scores_zero() {
        assert_eq!(analyze_complexity(""), 0);
        assert_eq!(analyze_complexity("   "), 0);
    }

    #[test]
    fn test_monotone_in_word_length() {
        let short_words = "we go to it now. he is up at one.";
        let long_words = "scientists investigate phenomena rigorously today. researchers celebrate extraordinary experimental breakthroughs.";
        assert!(analyze_complexity(long_words) > analyze_complexity(short_words));
    }

    #[test]
    fn test_single_enormous_token_saturates() {
        let pathological = "a".repeat(10_000);
        let score = analyze_complexity(&pathological);
        assert!(score <= 100);
    }

    #[test]
    fn test_long_sentences_raise_the_score() {
        let clipped = "We act. We win. We go.";
        let sprawling = vec!["word"; 40].join(" ") + ".";
        assert!(analyze_complexity(&sprawling) > analyze_complexity(clipped));
    }

    #[test]
    fn test_level_buckets() {
        assert_eq!(ComplexityLevel::from_score(20), ComplexityLevel::Low);
        assert_eq!(ComplexityLevel::from_score(55), ComplexityLevel::Medium);
        assert_eq!(ComplexityLevel::from_score(85), ComplexityLevel::High);
        assert_eq!(ComplexityLevel::from_score(40), ComplexityLevel::Low);
        assert_eq!(ComplexityLevel::from_score(70), ComplexityLevel::Medium);
    }
}
