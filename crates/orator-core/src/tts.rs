//! Text-to-speech provider trait and types

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

use crate::error::Result;

/// Voice selection for speech synthesis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Voice {
    Male,
    Female,
}

impl Voice {
    /// Parse a voice name as typed by a user
    pub fn parse(name: &str) -> Option<Self> {
        match name.trim().to_lowercase().as_str() {
            "male" | "m" => Some(Voice::Male),
            "female" | "f" => Some(Voice::Female),
            _ => None,
        }
    }
}

impl std::fmt::Display for Voice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Voice::Male => write!(f, "male"),
            Voice::Female => write!(f, "female"),
        }
    }
}

/// Configuration for speech synthesis
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SynthesisConfig {
    pub model_id: String,
    pub response_format: String,
    pub timeout: Duration,
}

impl Default for SynthesisConfig {
    fn default() -> Self {
        Self {
            model_id: "playai-tts".to_string(),
            response_format: "mp3".to_string(),
            timeout: Duration::from_secs(120),
        }
    }
}

/// Synthesized speech audio persisted to disk
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpeechAudio {
    pub path: PathBuf,
    pub format: String,
    pub byte_len: usize,
}

/// Trait for hosted text-to-speech providers
#[async_trait]
pub trait TtsProvider: Send + Sync {
    /// Synthesize text into an audio file with default configuration
    async fn synthesize(&self, text: &str, voice: Voice) -> Result<SpeechAudio>;

    /// Synthesize text into an audio file with custom configuration
    async fn synthesize_with_config(
        &self,
        text: &str,
        voice: Voice,
        config: &SynthesisConfig,
    ) -> Result<SpeechAudio>;
}
