//! Groq configuration

use orator_core::{Error, Result};
use serde::{Deserialize, Serialize};
use std::env;

/// Configuration for the Groq client
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GroqConfig {
    pub api_key: String,
    pub api_url: String,
}

impl GroqConfig {
    /// Create configuration from environment variables
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();

        let api_key = env::var("GROQ_API_KEY")
            .or_else(|_| env::var("API_KEY"))
            .map_err(|_| {
                Error::Configuration(
                    "GROQ_API_KEY or API_KEY environment variable not found".to_string(),
                )
            })?;

        let api_url = env::var("GROQ_API_URL")
            .unwrap_or_else(|_| "https://api.groq.com/openai/v1".to_string());

        Ok(Self { api_key, api_url })
    }

    /// Create configuration with an explicit API key
    pub fn new(api_key: String) -> Self {
        Self {
            api_key,
            api_url: "https://api.groq.com/openai/v1".to_string(),
        }
    }
}
