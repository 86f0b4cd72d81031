//! Core traits and types for Orator
//!
//! This crate defines the fundamental traits and types used across the Orator
//! workspace. It provides capability-facing interfaces for LLM providers and
//! text-to-speech providers, making the system test-friendly and extensible.

pub mod error;
pub mod llm;
pub mod tts;
pub mod types;

pub use error::{Error, Result};
pub use llm::{GenerationConfig, GenerationResult, LlmProvider};
pub use tts::{SpeechAudio, SynthesisConfig, TtsProvider, Voice};
pub use types::*;
