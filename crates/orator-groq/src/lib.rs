//! Groq integration for Orator
//!
//! This crate provides the Groq implementation of the LlmProvider and
//! TtsProvider traits, plus the catalog of selectable models.

mod client;
mod config;
mod models;


pub use client::GroqClient;
pub use config::GroqConfig;
pub use models::{AVAILABLE_MODELS, DEFAULT_MODEL, ModelInfo, model_info};

// Re-export core types for convenience
pub use orator_core::{
    Error, GenerationAttempt, GenerationConfig, GenerationResult, LlmProvider, Result,
    RetryConfig, SpeechAudio, SynthesisConfig, TtsProvider, Voice,
};
