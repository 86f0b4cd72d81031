//! Catalog of selectable Groq models

use serde::Serialize;

/// A selectable chat model with a short description for pickers
#[derive(Debug, Clone, Serialize)]
pub struct ModelInfo {
    pub id: &'static str,
    pub description: &'static str,
    pub max_tokens: u32,
}

/// Default model used when the caller does not pick one
pub const DEFAULT_MODEL: &str = "llama-3.3-70b-versatile";

/// Models offered by the speech generator
pub const AVAILABLE_MODELS: &[ModelInfo] = &[
    ModelInfo {
        id: "llama-3.3-70b-versatile",
        description: "Most capable general model, best overall speech quality",
        max_tokens: 32768,
    },
    ModelInfo {
        id: "llama-3.1-8b-instant",
        description: "Fast and lightweight, good for quick drafts",
        max_tokens: 8192,
    },
    ModelInfo {
        id: "deepseek-r1-distill-llama-70b",
        description: "Reasoning-tuned model for structured arguments",
        max_tokens: 16384,
    },
    ModelInfo {
        id: "gemma2-9b-it",
        description: "Compact model with balanced quality and speed",
        max_tokens: 8192,
    },
    ModelInfo {
        id: "mixtral-8x7b-32768",
        description: "Long-context mixture-of-experts model",
        max_tokens: 32768,
    },
];

/// Look up a model by id
pub fn model_info(id: &str) -> Option<&'static ModelInfo> {
    AVAILABLE_MODELS.iter().find(|model| model.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_model_is_in_catalog() {
        assert!(model_info(DEFAULT_MODEL).is_some());
    }

    #[test]
    fn test_unknown_model_is_absent() {
        assert!(model_info("not-a-model").is_none());
    }

    #[test]
    fn test_catalog_ids_are_unique() {
        for (i, model) in AVAILABLE_MODELS.iter().enumerate() {
            assert!(
                AVAILABLE_MODELS[i + 1..].iter().all(|m| m.id != model.id),
                "duplicate model id {}",
                model.id
            );
        }
    }
}
