//! Word and sentence statistics shared by the scorers

/// Average speaking pace used for delivery-time estimates
pub const SPEAKING_RATE_WPM: f64 = 130.0;

/// Split text into whitespace-delimited tokens, punctuation retained
pub fn words(text: &str) -> Vec<&str> {
    text.split_whitespace().collect()
}

/// Number of whitespace-delimited tokens in the text
pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}

/// Split text into sentences on terminal punctuation, dropping empty fragments
pub fn sentences(text: &str) -> Vec<&str> {
    text.split(['.', '!', '?'])
        .map(str::trim)
        .filter(|fragment| !fragment.is_empty())
        .collect()
}

/// Number of non-empty sentences in the text
pub fn sentence_count(text: &str) -> usize {
    sentences(text).len()
}

/// Estimated delivery time in minutes, rounded to one decimal place
pub fn estimated_minutes(word_count: usize) -> f64 {
    (word_count as f64 / SPEAKING_RATE_WPM * 10.0).round() / 10.0
}
