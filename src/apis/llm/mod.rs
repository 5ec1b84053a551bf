/// LLM provider layer
///
/// One OpenAI-compatible provider behind the `LlmClient` trait. The
/// trait seam keeps the risk narrative generator independent of the
/// wire format, and lets tests substitute a canned client.
pub mod openai;
pub mod types;

pub use self::openai::OpenAiClient;
pub use self::types::{ChatMessage, ChatRequest, ChatResponse, LlmError, MessageRole};

use crate::config::LlmConfig;
use async_trait::async_trait;
use std::sync::Arc;

/// Common interface over chat-completion providers
#[async_trait]
pub trait LlmClient: Send + Sync {
    /// Provider identifier for logs
    fn name(&self) -> &'static str;

    fn is_enabled(&self) -> bool;

    /// Execute a chat completion request
    async fn call(&self, request: ChatRequest) -> Result<ChatResponse, LlmError>;
}

/// Build the configured LLM client, if one is usable
///
/// Returns None when the provider is disabled or no credential is
/// configured; callers degrade to their documented fallback.
pub fn build_llm_client(config: &LlmConfig) -> Option<Arc<dyn LlmClient>> {
    if !config.enabled || config.api_key.trim().is_empty() {
        return None;
    }

    match OpenAiClient::new(config) {
        Ok(client) => Some(Arc::new(client)),
        Err(_) => None,
    }
}
