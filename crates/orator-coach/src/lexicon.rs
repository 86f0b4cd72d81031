//! Cue-word lexicons for sentiment scoring
//!
//! The polarity lexicons are plain configuration data, kept separate from the
//! scoring logic so they can be tuned and tested independently.

use regex::Regex;
use std::collections::HashSet;

/// Words that signal positive sentiment
const POSITIVE_CUES: &[&str] = &[
    "achieve", "amazing", "best", "breakthrough", "bright", "brilliant", "confident",
    "excellent", "excited", "fantastic", "good", "grateful", "great", "happy", "hope",
    "hopeful", "inspiring", "joy", "love", "opportunity", "optimistic", "outstanding",
    "progress", "proud", "remarkable", "strong", "succeed", "success", "successful",
    "thrive", "win", "wonderful",
];

/// Words that signal negative sentiment
const NEGATIVE_CUES: &[&str] = &[
    "afraid", "angry", "awful", "bad", "broken", "crisis", "decline", "difficult",
    "disaster", "doubt", "fail", "failure", "fear", "hate", "horrible", "loss", "lose",
    "pain", "poor", "problem", "sad", "struggle", "terrible", "threat", "weak",
    "worried", "worst", "wrong",
];

/// Case-insensitive polarity lexicon with precompiled token scanning
#[derive(Debug, Clone)]
pub struct Lexicon {
    positive: HashSet<&'static str>,
    negative: HashSet<&'static str>,
    word_pattern: Regex,
}

impl Lexicon {
    pub fn new() -> Self {
        Self {
            positive: POSITIVE_CUES.iter().copied().collect(),
            negative: NEGATIVE_CUES.iter().copied().collect(),
            word_pattern: Regex::new(r"[a-z']+").unwrap(),
        }
    }

    /// Count positive and negative cue occurrences in the text
    pub fn polarity_counts(&self, text: &str) -> (usize, usize) {
        let lowered = text.to_lowercase();
        let mut positive = 0;
        let mut negative = 0;

        for token in self.word_pattern.find_iter(&lowered) {
            let word = token.as_str().trim_matches('\'');
            if self.positive.contains(word) {
                positive += 1;
            } else if self.negative.contains(word) {
                negative += 1;
            }
        }

        (positive, negative)
    }
}

impl Default for Lexicon {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counts_are_case_insensitive() {
        let lexicon = Lexicon::new();
        let (pos, neg) = lexicon.polarity_counts("GREAT work, great progress, no failure");
        assert_eq!(pos, 3);
        assert_eq!(neg, 1);
    }

    #[test]
    fn test_punctuation_does_not_hide_cues() {
        let lexicon = Lexicon::new();
        let (pos, neg) = lexicon.polarity_counts("Wonderful! Terrible...");
        assert_eq!(pos, 1);
        assert_eq!(neg, 1);
    }

    #[test]
    fn test_cue_free_text() {
        let lexicon = Lexicon::new();
        assert_eq!(lexicon.polarity_counts("the meeting is on tuesday"), (0, 0));
        assert_eq!(lexicon.polarity_counts(""), (0, 0));
    }

    #[test]
    fn test_lexicons_are_disjoint() {
        let lexicon = Lexicon::new();
        assert!(lexicon.positive.is_disjoint(&lexicon.negative));
    }
}
