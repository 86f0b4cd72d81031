//! Threshold-triggered improvement suggestions

use crate::sentiment::Sentiment;

/// Below this many sentences the speech is flagged as underdeveloped
pub const MIN_SENTENCE_COUNT: usize = 3;
/// Negative sentiment at or above this confidence triggers reframing advice
pub const NEGATIVE_CONFIDENCE_THRESHOLD: f64 = 60.0;
/// Complexity scores above this suggest simplifying the vocabulary
pub const HIGH_COMPLEXITY_THRESHOLD: u32 = 70;
/// Complexity scores below this suggest richer language
pub const LOW_COMPLEXITY_THRESHOLD: u32 = 30;

/// Build the ordered suggestion list from the scorer outputs.
///
/// Priority is fixed: sentiment first, then structure, then complexity.
/// When no threshold triggers, a single affirming message is returned, so
/// the list is never empty.
pub(crate) fn suggest_improvements(
    label: Sentiment,
    confidence: f64,
    sentence_count: usize,
    complexity_score: u32,
) -> Vec<String> {
    let mut suggestions = Vec::new();

    if label == Sentiment::Negative && confidence >= NEGATIVE_CONFIDENCE_THRESHOLD {
        suggestions.push(
            "Consider more positive framing; the current wording leans heavily negative."
                .to_string(),
        );
    }

    if sentence_count < MIN_SENTENCE_COUNT {
        suggestions.push(
            "Add more structure and supporting detail; aim for several complete sentences."
                .to_string(),
        );
    }

    if complexity_score > HIGH_COMPLEXITY_THRESHOLD {
        suggestions
            .push("Simplify the vocabulary so a broader audience can follow along.".to_string());
    }

    if complexity_score < LOW_COMPLEXITY_THRESHOLD {
        suggestions.push("Consider more sophisticated language for this context.".to_string());
    }

    if suggestions.is_empty() {
        suggestions.push("Well balanced; the speech reads smoothly as written.".to_string());
    }

    suggestions
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_never_empty() {
        let balanced = suggest_improvements(Sentiment::Positive, 80.0, 5, 50);
        assert_eq!(balanced.len(), 1);
        assert!(balanced[0].contains("balanced"));
    }

    #[test]
    fn test_sentiment_advice_comes_first() {
        let suggestions = suggest_improvements(Sentiment::Negative, 90.0, 1, 85);
        assert!(suggestions.len() >= 3);
        assert!(suggestions[0].contains("positive framing"));
        assert!(suggestions[1].contains("structure"));
        assert!(suggestions[2].contains("Simplify"));
    }

    #[test]
    fn test_low_confidence_negative_is_not_flagged() {
        let suggestions = suggest_improvements(Sentiment::Negative, 55.0, 5, 50);
        assert!(!suggestions.iter().any(|s| s.contains("positive framing")));
    }

    #[test]
    fn test_low_complexity_advice() {
        let suggestions = suggest_improvements(Sentiment::Neutral, 50.0, 5, 10);
        assert!(suggestions.iter().any(|s| s.contains("sophisticated")));
    }

    #[test]
    fn test_high_and_low_complexity_are_mutually_exclusive() {
        for score in [0, 30, 50, 70, 100] {
            let suggestions = suggest_improvements(Sentiment::Neutral, 50.0, 5, score);
            let simplify = suggestions.iter().filter(|s| s.contains("Simplify")).count();
            let enrich = suggestions
                .iter()
                .filter(|s| s.contains("sophisticated"))
                .count();
            assert!(simplify + enrich <= 1);
        }
    }
}
