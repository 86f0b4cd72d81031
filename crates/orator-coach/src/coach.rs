//! Presentation coach facade

use serde::{Deserialize, Serialize};

use crate::complexity::{self, ComplexityLevel};
use crate::lexicon::Lexicon;
use crate::sentiment::{self, Sentiment, SentimentResult};
use crate::stats;
use crate::structure::{self, StructureResult};
use crate::suggest;

/// Full analysis of a speech text
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CoachReport {
    pub sentiment: SentimentResult,
    pub structure: StructureResult,
    pub complexity_score: u32,
    pub complexity_level: ComplexityLevel,
    pub suggestions: Vec<String>,
    pub word_count: usize,
    pub estimated_minutes: f64,
}

/// Rule-based presentation coach
///
/// Holds the polarity lexicon built once in `new()`; the scoring methods are
/// pure functions of their text input and carry no state between calls.
#[derive(Debug, Clone)]
pub struct PresentationCoach {
    lexicon: Lexicon,
}

impl PresentationCoach {
    pub fn new() -> Self {
        Self {
            lexicon: Lexicon::new(),
        }
    }

    /// Classify the overall sentiment of the text
    pub fn analyze_sentiment(&self, text: &str) -> SentimentResult {
        sentiment::analyze(&self.lexicon, text)
    }

    /// Score the sentence structure of the text
    pub fn structure_score(&self, text: &str) -> StructureResult {
        structure::structure_score(text)
    }

    /// Score the lexical complexity of the text
    pub fn analyze_complexity(&self, text: &str) -> u32 {
        complexity::analyze_complexity(text)
    }

    /// Build the ordered improvement-suggestion list from scorer outputs
    pub fn suggest_improvements(
        &self,
        label: Sentiment,
        confidence: f64,
        sentence_count: usize,
        complexity_score: u32,
    ) -> Vec<String> {
        suggest::suggest_improvements(label, confidence, sentence_count, complexity_score)
    }

    /// Run every scorer and bundle the results into a single report
    pub fn analyze(&self, text: &str) -> CoachReport {
        let sentiment = self.analyze_sentiment(text);
        let structure = self.structure_score(text);
        let complexity_score = self.analyze_complexity(text);

        let suggestions = self.suggest_improvements(
            sentiment.label,
            sentiment.confidence,
            structure.sentence_count,
            complexity_score,
        );

        let word_count = stats::word_count(text);

        CoachReport {
            sentiment,
            structure,
            complexity_score,
            complexity_level: ComplexityLevel::from_score(complexity_score),
            suggestions,
            word_count,
            estimated_minutes: stats::estimated_minutes(word_count),
        }
    }
}

impl Default for PresentationCoach {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_positive_text() {
        let coach = PresentationCoach::new();
        let report = coach.analyze("I am happy. This is great news today.");

        assert_eq!(report.sentiment.label, Sentiment::Positive);
        assert!(report.sentiment.confidence > 50.0);
        assert_eq!(report.structure.sentence_count, 2);
        assert_eq!(report.word_count, 8);
    }

    #[test]
    fn test_degenerate_input_produces_zero_scores() {
        let coach = PresentationCoach::new();
        let report = coach.analyze("   \n\t ");

        assert_eq!(report.sentiment.label, Sentiment::Neutral);
        assert_eq!(report.structure.score, 0);
        assert_eq!(report.complexity_score, 0);
        assert_eq!(report.word_count, 0);
        assert!(!report.suggestions.is_empty());
    }

    #[test]
    fn test_all_scores_in_range_for_arbitrary_input() {
        let coach = PresentationCoach::new();
        let inputs = [
            "",
            "!!!???...",
            "word",
            "ünïcödé tëxt with mixed punctuation?! and trailing spaces   ",
            &"x".repeat(5_000),
        ];

        for input in inputs {
            let report = coach.analyze(input);
            assert!(report.sentiment.confidence >= 0.0 && report.sentiment.confidence <= 100.0);
            assert!(report.structure.score <= 100);
            assert!(report.complexity_score <= 100);
            assert!(!report.suggestions.is_empty());
        }
    }

    #[test]
    fn test_analyze_is_idempotent() {
        let coach = PresentationCoach::new();
        let text = "Progress demands courage. We have both in abundance today.";
        let first = coach.analyze(text);
        let second = coach.analyze(text);

        assert_eq!(first.sentiment.label, second.sentiment.label);
        assert_eq!(first.structure.score, second.structure.score);
        assert_eq!(first.complexity_score, second.complexity_score);
        assert_eq!(first.suggestions, second.suggestions);
    }
}
