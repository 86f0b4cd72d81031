//! Speech composer: prompt construction and post-compose metadata

use chrono::Utc;

use orator_core::{
    Error, GenerationConfig, LlmProvider, Result, SpeechMetadata, SpeechRequest,
};

use crate::styles;

/// Words per minute assumed for a natural speaking pace
const WORDS_PER_MINUTE: usize = 130;
/// Upper bound on completion length regardless of requested duration
const MAX_COMPLETION_TOKENS: u32 = 4096;

/// Speech composer that turns a request into a prompt, calls the LLM, and
/// assembles metadata for the finished speech
pub struct SpeechComposer<L: LlmProvider> {
    llm: L,
}

impl<L: LlmProvider> SpeechComposer<L> {
    /// Create a new speech composer
    pub fn new(llm: L) -> Self {
        Self { llm }
    }

    /// Access the underlying provider, e.g. for audio synthesis
    pub fn provider(&self) -> &L {
        &self.llm
    }

    /// Generate a speech for the given request
    pub async fn compose(&self, request: &SpeechRequest) -> Result<(String, SpeechMetadata)> {
        if request.topic.trim().is_empty() {
            return Err(Error::InvalidInput(
                "Speech topic must not be empty".to_string(),
            ));
        }

        let target_word_count = request.duration_minutes as usize * WORDS_PER_MINUTE;
        let prompt = build_prompt(request, target_word_count);

        let config = GenerationConfig {
            model_id: request.model.clone(),
            max_tokens: MAX_COMPLETION_TOKENS,
            temperature: Some(request.temperature),
            ..Default::default()
        };

        let result = self.llm.generate_with_config(&prompt, &config).await?;
        let text = result.text;

        let metadata = SpeechMetadata {
            topic: request.topic.clone(),
            style: request.style.clone(),
            audience: request.audience.clone(),
            model: request.model.clone(),
            word_count: text.split_whitespace().count(),
            target_word_count,
            generated_at: Utc::now().to_rfc3339(),
        };

        Ok((text, metadata))
    }
}

pub(crate) fn build_prompt(request: &SpeechRequest, target_word_count: usize) -> String {
    let mut prompt = format!(
        "You are a professional speechwriter. Write a complete, ready-to-deliver speech.\n\
         \n\
         Topic: {}\n\
         Length: about {} words, suitable for a {}-minute delivery at a natural speaking pace.\n\
         Style: {}\n\
         Audience: {}\n",
        request.topic,
        target_word_count,
        request.duration_minutes,
        styles::style_guidance(&request.style),
        styles::audience_guidance(&request.audience),
    );

    if let Some(instructions) = &request.additional_instructions {
        if !instructions.trim().is_empty() {
            prompt.push_str(&format!("Additional instructions: {}\n", instructions.trim()));
        }
    }

    prompt.push_str(
        "\nWrite only the speech itself, with no headings, stage directions, or commentary.",
    );

    prompt
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use orator_core::{GenerationAttempt, GenerationResult, RetryConfig};

    struct MockLlm {
        reply: String,
    }

    #[async_trait]
    impl LlmProvider for MockLlm {
        async fn connect(&mut self) -> Result<()> {
            Ok(())
        }

        async fn generate(&self, prompt: &str) -> Result<GenerationResult> {
            self.generate_with_config(prompt, &GenerationConfig::default())
                .await
        }

        async fn generate_with_config(
            &self,
            _prompt: &str,
            config: &GenerationConfig,
        ) -> Result<GenerationResult> {
            Ok(GenerationResult {
                text: self.reply.clone(),
                model_id: config.model_id.clone(),
                tokens_used: None,
                quality_score: None,
            })
        }

        async fn generate_with_feedback(
            &self,
            base_prompt: &str,
            config: &GenerationConfig,
            _previous_failures: &[String],
            _retry_config: Option<RetryConfig>,
        ) -> Result<GenerationAttempt> {
            let result = self.generate_with_config(base_prompt, config).await?;
            Ok(GenerationAttempt {
                prompt: base_prompt.to_string(),
                result: result.text,
                quality_score: 1.0,
                attempt_number: 1,
            })
        }

        fn assess_quality(&self, _text: &str, _prompt: &str) -> f32 {
            1.0
        }

        fn model_id(&self) -> &str {
            "mock-model"
        }
    }

    #[tokio::test]
    async fn test_compose_builds_metadata() {
        let composer = SpeechComposer::new(MockLlm {
            reply: "Friends, we gather today with purpose and hope.".to_string(),
        });

        let request = SpeechRequest {
            topic: "The future of rural libraries".to_string(),
            duration_minutes: 3,
            ..Default::default()
        };

        let (text, metadata) = composer.compose(&request).await.unwrap();
        assert_eq!(metadata.topic, "The future of rural libraries");
        assert_eq!(metadata.target_word_count, 390);
        assert_eq!(metadata.word_count, text.split_whitespace().count());
        assert!(!metadata.generated_at.is_empty());
    }

    #[tokio::test]
    async fn test_empty_topic_is_rejected() {
        let composer = SpeechComposer::new(MockLlm {
            reply: String::new(),
        });

        let request = SpeechRequest {
            topic: "   ".to_string(),
            ..Default::default()
        };

        let err = composer.compose(&request).await.unwrap_err();
        assert!(matches!(err, Error::InvalidInput(_)));
    }

    #[test]
    fn test_prompt_embeds_request_details() {
        let request = SpeechRequest {
            topic: "Artificial Intelligence in Education".to_string(),
            duration_minutes: 5,
            style: "persuasive".to_string(),
            audience: "students".to_string(),
            additional_instructions: Some("Include a personal anecdote".to_string()),
            ..Default::default()
        };

        let prompt = build_prompt(&request, 650);
        assert!(prompt.contains("Artificial Intelligence in Education"));
        assert!(prompt.contains("about 650 words"));
        assert!(prompt.contains("5-minute delivery"));
        assert!(prompt.contains("Argument-driven"));
        assert!(prompt.contains("concrete examples"));
        assert!(prompt.contains("Include a personal anecdote"));
    }
}
