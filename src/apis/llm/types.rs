/// Core LLM API types
///
/// Unified request/response types; the provider module transforms these
/// to and from its specific wire format.
use serde::{Deserialize, Serialize};
use std::fmt;

// ============================================================================
// MESSAGE TYPES
// ============================================================================

/// Chat message with role and content
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ChatMessage {
    pub role: MessageRole,
    pub content: String,
}

impl ChatMessage {
    /// Create a system message
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: MessageRole::System,
            content: content.into(),
        }
    }

    /// Create a user message
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: MessageRole::User,
            content: content.into(),
        }
    }
}

/// Message role in a chat conversation
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum MessageRole {
    System,
    User,
    Assistant,
}

impl fmt::Display for MessageRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MessageRole::System => write!(f, "system"),
            MessageRole::User => write!(f, "user"),
            MessageRole::Assistant => write!(f, "assistant"),
        }
    }
}

// ============================================================================
// REQUEST / RESPONSE TYPES
// ============================================================================

/// Chat completion request
#[derive(Debug, Clone)]
pub struct ChatRequest {
    pub model: String,
    pub messages: Vec<ChatMessage>,
    pub temperature: Option<f32>,
    pub max_tokens: Option<u32>,
}

impl ChatRequest {
    pub fn new(model: impl Into<String>, messages: Vec<ChatMessage>) -> Self {
        Self {
            model: model.into(),
            messages,
            temperature: None,
            max_tokens: None,
        }
    }

    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = Some(temperature);
        self
    }

    pub fn with_max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = Some(max_tokens);
        self
    }
}

/// Chat completion response
#[derive(Debug, Clone)]
pub struct ChatResponse {
    /// Generated text content
    pub content: String,

    /// Model used for generation
    pub model: String,

    /// Reason for completion finish
    pub finish_reason: String,

    /// Latency in milliseconds
    pub latency_ms: f64,
}

// ============================================================================
// ERROR TYPES
// ============================================================================

/// LLM API errors
#[derive(Debug, Clone)]
pub enum LlmError {
    Timeout { timeout_ms: u64 },
    AuthError { message: String },
    NetworkError { message: String },
    ParseError { message: String },
    InvalidResponse { message: String },
    ApiError { status_code: u16, message: String },
    Disabled,
}

impl fmt::Display for LlmError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LlmError::Timeout { timeout_ms } => write!(f, "Request timeout ({}ms)", timeout_ms),
            LlmError::AuthError { message } => write!(f, "Auth error: {}", message),
            LlmError::NetworkError { message } => write!(f, "Network error: {}", message),
            LlmError::ParseError { message } => write!(f, "Parse error: {}", message),
            LlmError::InvalidResponse { message } => write!(f, "Invalid response: {}", message),
            LlmError::ApiError {
                status_code,
                message,
            } => write!(f, "API error {}: {}", status_code, message),
            LlmError::Disabled => write!(f, "Provider disabled in config"),
        }
    }
}

impl std::error::Error for LlmError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn message_roles_serialize_lowercase() {
        let msg = ChatMessage::system("be useful");
        let json = serde_json::to_string(&msg).unwrap();
        assert!(json.contains(r#""role":"system""#));
    }

    #[test]
    fn request_builder_sets_options() {
        let request = ChatRequest::new("test-model", vec![ChatMessage::user("hi")])
            .with_temperature(0.2)
            .with_max_tokens(64);
        assert_eq!(request.temperature, Some(0.2));
        assert_eq!(request.max_tokens, Some(64));
        assert_eq!(request.messages.len(), 1);
    }
}
