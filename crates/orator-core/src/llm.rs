//! LLM provider trait and types

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::error::Result;
use crate::types::{GenerationAttempt, RetryConfig};

/// Configuration for text generation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationConfig {
    pub model_id: String,
    pub max_tokens: u32,
    pub temperature: Option<f32>,
    pub top_p: Option<f32>,
    pub stop_sequences: Vec<String>,
    pub timeout: Duration,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            model_id: "llama-3.3-70b-versatile".to_string(),
            max_tokens: 1024,
            temperature: Some(0.7),
            top_p: Some(1.0),
            stop_sequences: Vec::new(),
            timeout: Duration::from_secs(60),
        }
    }
}

/// Result of a text generation request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationResult {
    pub text: String,
    pub model_id: String,
    pub tokens_used: Option<u32>,
    pub quality_score: Option<f32>,
}

/// Trait for LLM providers (e.g., Groq, WatsonX, etc.)
///
/// This trait defines the interface for interacting with hosted Large
/// Language Models. It supports both simple generation and advanced
/// generation with retry logic and quality assessment.
#[async_trait]
pub trait LlmProvider: Send + Sync {
    /// Connect/authenticate with the LLM provider
    async fn connect(&mut self) -> Result<()>;

    /// Generate text using the LLM with default configuration
    async fn generate(&self, prompt: &str) -> Result<GenerationResult>;

    /// Generate text with custom configuration
    async fn generate_with_config(
        &self,
        prompt: &str,
        config: &GenerationConfig,
    ) -> Result<GenerationResult>;

    /// Generate with retry mechanism and feedback integration
    async fn generate_with_feedback(
        &self,
        base_prompt: &str,
        config: &GenerationConfig,
        previous_failures: &[String],
        retry_config: Option<RetryConfig>,
    ) -> Result<GenerationAttempt>;

    /// Assess the quality of generated text
    fn assess_quality(&self, text: &str, prompt: &str) -> f32;

    /// Get the model ID being used
    fn model_id(&self) -> &str;
}
