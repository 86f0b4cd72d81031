//! Lexicon-based sentiment scoring

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::lexicon::Lexicon;

/// Confidence reported when the text carries no polarity cues at all
pub const NEUTRAL_BASELINE_CONFIDENCE: f64 = 50.0;

/// Coarse sentiment label
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Sentiment {
    Positive,
    Negative,
    Neutral,
}

impl fmt::Display for Sentiment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Sentiment::Positive => write!(f, "POSITIVE"),
            Sentiment::Negative => write!(f, "NEGATIVE"),
            Sentiment::Neutral => write!(f, "NEUTRAL"),
        }
    }
}

/// Sentiment label plus confidence percentage in [0, 100]
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SentimentResult {
    pub label: Sentiment,
    pub confidence: f64,
}

pub(crate) fn analyze(lexicon: &Lexicon, text: &str) -> SentimentResult {
    let (positive, negative) = lexicon.polarity_counts(text);

    if positive == 0 && negative == 0 {
        return SentimentResult {
            label: Sentiment::Neutral,
            confidence: NEUTRAL_BASELINE_CONFIDENCE,
        };
    }

    let label = if positive > negative {
        Sentiment::Positive
    } else if negative > positive {
        Sentiment::Negative
    } else {
        Sentiment::Neutral
    };

    let total = (positive + negative) as f64;
    let confidence = (100.0 * positive.max(negative) as f64 / total).clamp(0.0, 100.0);

    SentimentResult { label, confidence }
}
