//! Groq client implementation

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::io::Write;
use std::time::Duration;
use tokio::time::timeout;

use orator_core::{
    Error, GenerationAttempt, GenerationConfig, GenerationResult, LlmProvider, Result,
    RetryConfig, SpeechAudio, SynthesisConfig, TtsProvider, Voice,
};

use crate::config::GroqConfig;
use crate::models::DEFAULT_MODEL;

/// Groq client for chat completion and speech synthesis
pub struct GroqClient {
    config: GroqConfig,
    client: Client,
    current_model: String,
}

#[derive(Serialize)]
struct ChatMessage {
    role: String,
    content: String,
}

#[derive(Serialize)]
struct ChatRequest {
    model: String,
    messages: Vec<ChatMessage>,
    temperature: f32,
    top_p: f32,
    max_tokens: u32,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    stop: Vec<String>,
}

#[derive(Deserialize)]
struct ResponseMessage {
    content: String,
}

#[derive(Deserialize)]
struct ChatChoice {
    message: ResponseMessage,
}

#[derive(Deserialize)]
struct TokenUsage {
    total_tokens: u32,
}

#[derive(Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
    usage: Option<TokenUsage>,
}

#[derive(Serialize)]
struct SynthesisRequest {
    model: String,
    voice: String,
    input: String,
    response_format: String,
}

impl GroqClient {
    /// Create a new Groq client from configuration
    pub fn new(config: GroqConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(120))
            .build()
            .map_err(|e| Error::Network(e.to_string()))?;

        Ok(Self {
            config,
            client,
            current_model: DEFAULT_MODEL.to_string(),
        })
    }

    /// Create a new Groq client from environment variables
    pub fn from_env() -> Result<Self> {
        let config = GroqConfig::from_env()?;
        Self::new(config)
    }

    /// Set the model to use for generation
    pub fn with_model(mut self, model_id: impl Into<String>) -> Self {
        self.current_model = model_id.into();
        self
    }

    fn map_status_error(status: reqwest::StatusCode, body: String) -> Error {
        match status.as_u16() {
            401 | 403 => Error::Authentication(format!(
                "Groq rejected the API key (status {}): {}",
                status, body
            )),
            429 => Error::LlmProvider(format!("Groq rate limit or quota exceeded: {}", body)),
            _ => Error::LlmProvider(format!(
                "Groq API request failed with status {}: {}",
                status, body
            )),
        }
    }

    /// Perform the actual chat completion request
    async fn perform_generation(
        &self,
        prompt: &str,
        config: &GenerationConfig,
    ) -> Result<(String, Option<u32>)> {
        let request_body = ChatRequest {
            model: config.model_id.clone(),
            messages: vec![ChatMessage {
                role: "user".to_string(),
                content: prompt.to_string(),
            }],
            temperature: config.temperature.unwrap_or(0.7),
            top_p: config.top_p.unwrap_or(1.0),
            max_tokens: config.max_tokens,
            stop: config.stop_sequences.clone(),
        };

        let url = format!("{}/chat/completions", self.config.api_url);

        let response = self
            .client
            .post(&url)
            .header("Content-Type", "application/json")
            .header("Authorization", format!("Bearer {}", self.config.api_key))
            .json(&request_body)
            .send()
            .await
            .map_err(|e| Error::Network(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(Self::map_status_error(status, error_text));
        }

        let chat_response: ChatResponse = response
            .json()
            .await
            .map_err(|e| Error::Serialization(e.to_string()))?;

        let tokens_used = chat_response.usage.map(|usage| usage.total_tokens);

        let text = chat_response
            .choices
            .into_iter()
            .next()
            .map(|choice| choice.message.content)
            .unwrap_or_default();

        if text.trim().is_empty() {
            return Err(Error::LlmProvider(
                "Empty completion from Groq API".to_string(),
            ));
        }

        Ok((clean_speech_text(&text), tokens_used))
    }

    /// Enhance prompt with feedback from previous failures
    fn enhance_prompt_with_feedback(
        &self,
        base_prompt: &str,
        previous_failures: &[String],
        attempt_number: u32,
    ) -> String {
        if previous_failures.is_empty() && attempt_number <= 1 {
            return base_prompt.to_string();
        }

        let mut enhanced_prompt = base_prompt.to_string();

        if !previous_failures.is_empty() {
            enhanced_prompt.push_str("\n\nPREVIOUS ATTEMPTS WERE REJECTED FOR THESE REASONS:\n");
            for (i, failure) in previous_failures.iter().enumerate() {
                enhanced_prompt.push_str(&format!("{}. {}\n", i + 1, failure));
            }
        }

        match attempt_number {
            0 | 1 => {}
            2 => {
                enhanced_prompt.push_str(
                    "\nPlease write the speech again as plain spoken prose, staying on topic.",
                );
            }
            _ => {
                enhanced_prompt.push_str("\nIMPORTANT: Earlier drafts were unusable. Please:\n");
                enhanced_prompt.push_str("- Output only the speech text itself\n");
                enhanced_prompt.push_str("- Use complete sentences a speaker can deliver aloud\n");
                enhanced_prompt.push_str("- Avoid headings, lists, and commentary about the task\n");
            }
        }

        enhanced_prompt
    }

    fn voice_id(voice: Voice) -> &'static str {
        match voice {
            Voice::Male => "Fritz-PlayAI",
            Voice::Female => "Celeste-PlayAI",
        }
    }
}

/// Strip markdown fences and prompt echoes from a completion
fn clean_speech_text(text: &str) -> String {
    let mut cleaned = text.replace("\r\n", "\n").trim().to_string();

    if cleaned.starts_with("```") {
        cleaned = cleaned
            .lines()
            .skip(1)
            .collect::<Vec<_>>()
            .join("\n")
            .trim()
            .to_string();
    }
    if cleaned.ends_with("```") {
        let without_fence = cleaned.trim_end_matches('`');
        cleaned = without_fence.trim().to_string();
    }

    // Models often echo a framing line such as "Here is your speech:" first
    if let Some(first_line) = cleaned.lines().next() {
        let lowered = first_line.to_lowercase();
        let is_echo = first_line.trim_end().ends_with(':')
            && (lowered.starts_with("here is")
                || lowered.starts_with("here's")
                || lowered.starts_with("title"));
        if is_echo {
            cleaned = cleaned
                .lines()
                .skip(1)
                .collect::<Vec<_>>()
                .join("\n")
                .trim()
                .to_string();
        }
    }

    cleaned
}

#[async_trait]
impl LlmProvider for GroqClient {
    async fn connect(&mut self) -> Result<()> {
        let url = format!("{}/models", self.config.api_url);

        let response = self
            .client
            .get(&url)
            .header("Authorization", format!("Bearer {}", self.config.api_key))
            .send()
            .await
            .map_err(|e| Error::Network(e.to_string()))?;

        if !response.status().is_success() {
            return Err(Error::Authentication(format!(
                "Authentication failed: {}",
                response.status()
            )));
        }

        Ok(())
    }

    async fn generate(&self, prompt: &str) -> Result<GenerationResult> {
        let config = GenerationConfig {
            model_id: self.current_model.clone(),
            ..Default::default()
        };
        self.generate_with_config(prompt, &config).await
    }

    async fn generate_with_config(
        &self,
        prompt: &str,
        config: &GenerationConfig,
    ) -> Result<GenerationResult> {
        let generation_future = self.perform_generation(prompt, config);

        let (text, tokens_used) = match timeout(config.timeout, generation_future).await {
            Ok(result) => result?,
            Err(_) => return Err(Error::Timeout("Request timed out".to_string())),
        };

        Ok(GenerationResult {
            text,
            model_id: config.model_id.clone(),
            tokens_used,
            quality_score: None,
        })
    }

    async fn generate_with_feedback(
        &self,
        base_prompt: &str,
        config: &GenerationConfig,
        previous_failures: &[String],
        retry_config: Option<RetryConfig>,
    ) -> Result<GenerationAttempt> {
        let retry_cfg = retry_config.unwrap_or_default();
        let mut best_attempt: Option<GenerationAttempt> = None;

        for attempt in 1..=retry_cfg.max_attempts {
            let enhanced_prompt =
                self.enhance_prompt_with_feedback(base_prompt, previous_failures, attempt);

            let timeout_duration =
                retry_cfg.base_timeout + Duration::from_secs((attempt - 1) as u64 * 10);

            let mut attempt_config = config.clone();
            attempt_config.timeout = timeout_duration;

            match self
                .generate_with_config(&enhanced_prompt, &attempt_config)
                .await
            {
                Ok(result) => {
                    let quality_score = self.assess_quality(&result.text, base_prompt);

                    let current_attempt = GenerationAttempt {
                        prompt: enhanced_prompt,
                        result: result.text.clone(),
                        quality_score,
                        attempt_number: attempt,
                    };

                    if quality_score >= retry_cfg.quality_threshold {
                        return Ok(current_attempt);
                    }

                    if best_attempt
                        .as_ref()
                        .map_or(true, |best| quality_score > best.quality_score)
                    {
                        best_attempt = Some(current_attempt);
                    }
                }
                Err(e) => {
                    if attempt == retry_cfg.max_attempts {
                        return Err(e);
                    }
                }
            }
        }

        best_attempt
            .ok_or_else(|| Error::LlmProvider("All generation attempts failed".to_string()))
    }

    fn assess_quality(&self, text: &str, _prompt: &str) -> f32 {
        let mut score = 0.0;
        let mut max_score = 0.0;

        let trimmed = text.trim();
        let word_count = trimmed.split_whitespace().count();
        let sentence_count = trimmed
            .split(['.', '!', '?'])
            .filter(|fragment| !fragment.trim().is_empty())
            .count();

        // A deliverable speech has real length
        max_score += 0.3;
        if word_count >= 100 {
            score += 0.3;
        } else if word_count >= 40 {
            score += 0.15;
        }

        // It flows as multiple sentences rather than a fragment
        max_score += 0.2;
        if sentence_count >= 3 {
            score += 0.2;
        }

        // No assistant meta-commentary leaking through
        max_score += 0.2;
        let meta_indicators = ["as an ai", "i cannot", "i'm sorry", "language model"];
        let lowered = trimmed.to_lowercase();
        if !meta_indicators
            .iter()
            .any(|indicator| lowered.contains(indicator))
        {
            score += 0.2;
        }

        // No obvious error text
        max_score += 0.15;
        let error_indicators = ["error", "failed", "invalid request"];
        if !error_indicators
            .iter()
            .any(|indicator| lowered.contains(indicator))
        {
            score += 0.15;
        }

        // No leftover markdown scaffolding
        max_score += 0.15;
        if !trimmed.contains("```") && !trimmed.starts_with('#') {
            score += 0.15;
        }

        if max_score > 0.0 { score / max_score } else { 0.0 }
    }

    fn model_id(&self) -> &str {
        &self.current_model
    }
}

#[async_trait]
impl TtsProvider for GroqClient {
    async fn synthesize(&self, text: &str, voice: Voice) -> Result<SpeechAudio> {
        self.synthesize_with_config(text, voice, &SynthesisConfig::default())
            .await
    }

    async fn synthesize_with_config(
        &self,
        text: &str,
        voice: Voice,
        config: &SynthesisConfig,
    ) -> Result<SpeechAudio> {
        if text.trim().is_empty() {
            return Err(Error::InvalidInput(
                "Cannot synthesize empty text".to_string(),
            ));
        }

        let request_body = SynthesisRequest {
            model: config.model_id.clone(),
            voice: Self::voice_id(voice).to_string(),
            input: text.to_string(),
            response_format: config.response_format.clone(),
        };

        let url = format!("{}/audio/speech", self.config.api_url);

        let request_future = async {
            let response = self
                .client
                .post(&url)
                .header("Content-Type", "application/json")
                .header("Authorization", format!("Bearer {}", self.config.api_key))
                .json(&request_body)
                .send()
                .await
                .map_err(|e| Error::Network(e.to_string()))?;

            if !response.status().is_success() {
                let status = response.status();
                let error_text = response
                    .text()
                    .await
                    .unwrap_or_else(|_| "Unknown error".to_string());
                return match status.as_u16() {
                    401 | 403 => Err(Error::Authentication(format!(
                        "Groq rejected the API key (status {}): {}",
                        status, error_text
                    ))),
                    _ => Err(Error::TtsProvider(format!(
                        "Groq TTS request failed with status {}: {}",
                        status, error_text
                    ))),
                };
            }

            response
                .bytes()
                .await
                .map_err(|e| Error::Network(e.to_string()))
        };

        let bytes = match timeout(config.timeout, request_future).await {
            Ok(result) => result?,
            Err(_) => return Err(Error::Timeout("TTS request timed out".to_string())),
        };

        if bytes.is_empty() {
            return Err(Error::TtsProvider(
                "Empty audio payload from Groq TTS".to_string(),
            ));
        }

        let mut file = tempfile::Builder::new()
            .prefix("orator-speech-")
            .suffix(&format!(".{}", config.response_format))
            .tempfile()
            .map_err(Error::Io)?;
        file.write_all(&bytes).map_err(Error::Io)?;
        let (_, path) = file.keep().map_err(|e| Error::Io(e.error))?;

        Ok(SpeechAudio {
            path,
            format: config.response_format.clone(),
            byte_len: bytes.len(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quality_assessment() {
        let config = GroqConfig::new("test_key".to_string());
        let client = GroqClient::new(config).unwrap();

        let speech = "Friends, today we gather with purpose. ".repeat(20);
        let score = client.assess_quality(&speech, "write a speech");
        assert!(score > 0.7);

        let bad_output = "Error: invalid request";
        let score = client.assess_quality(bad_output, "write a speech");
        assert!(score < 0.5);
    }

    #[test]
    fn test_clean_speech_text_strips_fences_and_echo() {
        let raw = "```\nHere is your speech:\nFriends, we begin today.\n```";
        assert_eq!(clean_speech_text(raw), "Friends, we begin today.");

        let plain = "Friends, we begin today.";
        assert_eq!(clean_speech_text(plain), plain);
    }

    #[test]
    fn test_voice_mapping() {
        assert_eq!(GroqClient::voice_id(Voice::Male), "Fritz-PlayAI");
        assert_eq!(GroqClient::voice_id(Voice::Female), "Celeste-PlayAI");
    }
}
