//! Common types used across the Orator system

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Configuration for retry behavior
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RetryConfig {
    pub max_attempts: u32,
    pub base_timeout: Duration,
    pub enable_progressive_prompts: bool,
    pub quality_threshold: f32,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_attempts: 3,
            base_timeout: Duration::from_secs(30),
            enable_progressive_prompts: true,
            quality_threshold: 0.7,
        }
    }
}

/// Represents a generation attempt with quality metrics
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationAttempt {
    pub prompt: String,
    pub result: String,
    pub quality_score: f32,
    pub attempt_number: u32,
}

/// Parameters for a speech generation request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpeechRequest {
    pub topic: String,
    pub duration_minutes: u32,
    pub style: String,
    pub audience: String,
    pub model: String,
    pub temperature: f32,
    pub additional_instructions: Option<String>,
}

impl Default for SpeechRequest {
    fn default() -> Self {
        Self {
            topic: String::new(),
            duration_minutes: 3,
            style: "motivational".to_string(),
            audience: "general public".to_string(),
            model: "llama-3.3-70b-versatile".to_string(),
            temperature: 0.7,
            additional_instructions: None,
        }
    }
}

/// Metadata describing a generated speech
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpeechMetadata {
    pub topic: String,
    pub style: String,
    pub audience: String,
    pub model: String,
    pub word_count: usize,
    pub target_word_count: usize,
    pub generated_at: String,
}
