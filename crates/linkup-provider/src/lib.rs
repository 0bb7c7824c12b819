pub mod openrouter;

use anyhow::Result;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

pub use openrouter::{OpenRouterProvider, DEFAULT_BASE_URL, DEFAULT_MODEL};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LlmMessage {
    pub role: String,
    pub content: String,
}

impl LlmMessage {
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            role: "user".into(),
            content: text.into(),
        }
    }

    pub fn assistant(text: impl Into<String>) -> Self {
        Self {
            role: "assistant".into(),
            content: text.into(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LlmRequest {
    pub model: String,
    pub system: Option<String>,
    pub messages: Vec<LlmMessage>,
}

impl LlmRequest {
    pub fn simple(model: String, system: Option<String>, text: String) -> Self {
        Self {
            model,
            system,
            messages: vec![LlmMessage::user(text)],
        }
    }
}

#[derive(Debug, Clone)]
pub struct LlmResponse {
    pub text: String,
}

#[async_trait]
pub trait LlmProvider: Send + Sync {
    async fn chat(&self, request: LlmRequest) -> Result<LlmResponse>;

    async fn health(&self) -> Result<()> {
        Ok(())
    }
}

/// Offline provider: echoes the last user message. Used in tests and when
/// no API key is configured, so the app keeps working without a network.
pub struct StubProvider;

#[async_trait]
impl LlmProvider for StubProvider {
    async fn chat(&self, request: LlmRequest) -> Result<LlmResponse> {
        let user_text = request
            .messages
            .last()
            .map(|m| m.content.clone())
            .unwrap_or_default();
        Ok(LlmResponse {
            text: format!("[stub:{}] {}", request.model, user_text),
        })
    }
}
