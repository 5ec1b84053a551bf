/// OpenAI-compatible chat completions client (raw HTTP via reqwest)
///
/// Works against any provider that speaks the Chat Completions format;
/// the base URL and model come from configuration.
///
/// Endpoint:
/// - POST {base_url}/chat/completions
pub mod types;

pub use self::types::{OpenAiMessage, OpenAiRequest, OpenAiResponse};

use crate::apis::client::RateLimiter;
use crate::apis::llm::{ChatRequest, ChatResponse, LlmClient, LlmError};
use crate::config::LlmConfig;
use crate::logger::{self, LogTag};
use async_trait::async_trait;
use reqwest::Client;
use std::time::{Duration, Instant};

const ENDPOINT_CHAT: &str = "/chat/completions";

// ============================================================================
// CLIENT IMPLEMENTATION
// ============================================================================

pub struct OpenAiClient {
    api_key: String,
    client: Client,
    base_url: String,
    model: String,
    timeout: Duration,
    rate_limiter: RateLimiter,
    enabled: bool,
}

impl OpenAiClient {
    pub fn new(config: &LlmConfig) -> Result<Self, String> {
        if config.api_key.trim().is_empty() {
            return Err("LLM API key cannot be empty".to_string());
        }

        Ok(Self {
            api_key: config.api_key.clone(),
            client: Client::new(),
            base_url: config.base_url.trim_end_matches('/').to_string(),
            model: config.model.clone(),
            timeout: Duration::from_secs(config.timeout_secs),
            rate_limiter: RateLimiter::new(config.rate_limit_per_minute),
            enabled: config.enabled,
        })
    }

    /// Convert the unified request to wire format
    fn build_wire_request(&self, request: &ChatRequest) -> OpenAiRequest {
        let messages = request
            .messages
            .iter()
            .map(|msg| OpenAiMessage {
                role: msg.role.to_string(),
                content: msg.content.clone(),
            })
            .collect();

        let model = if request.model.is_empty() {
            self.model.clone()
        } else {
            request.model.clone()
        };

        OpenAiRequest {
            model,
            messages,
            temperature: request.temperature,
            max_tokens: request.max_tokens,
        }
    }

    async fn execute_request(
        &self,
        request: OpenAiRequest,
    ) -> Result<(OpenAiResponse, f64), LlmError> {
        if !self.enabled {
            return Err(LlmError::Disabled);
        }

        let guard = self
            .rate_limiter
            .acquire()
            .await
            .map_err(|e| LlmError::NetworkError {
                message: format!("Rate limiter error: {}", e),
            })?;

        let url = format!("{}{}", self.base_url, ENDPOINT_CHAT);

        logger::debug(
            LogTag::Llm,
            &format!("Calling chat completions: model={}", request.model),
        );

        let start = Instant::now();
        let response_result = self
            .client
            .post(&url)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .header("Content-Type", "application/json")
            .json(&request)
            .timeout(self.timeout)
            .send()
            .await;

        drop(guard);
        let elapsed = start.elapsed().as_millis() as f64;

        let response = response_result.map_err(|e| {
            if e.is_timeout() {
                LlmError::Timeout {
                    timeout_ms: self.timeout.as_millis() as u64,
                }
            } else {
                LlmError::NetworkError {
                    message: format!("Request failed: {}", e),
                }
            }
        })?;

        let status = response.status();
        if !status.is_success() {
            let error_body = response.text().await.unwrap_or_default();

            return Err(match status.as_u16() {
                401 => LlmError::AuthError {
                    message: "Invalid API key".to_string(),
                },
                _ => LlmError::ApiError {
                    status_code: status.as_u16(),
                    message: error_body,
                },
            });
        }

        let parsed = response
            .json::<OpenAiResponse>()
            .await
            .map_err(|e| LlmError::ParseError {
                message: format!("Failed to parse response: {}", e),
            })?;

        Ok((parsed, elapsed))
    }
}

#[async_trait]
impl LlmClient for OpenAiClient {
    fn name(&self) -> &'static str {
        "openai-compatible"
    }

    fn is_enabled(&self) -> bool {
        self.enabled
    }

    async fn call(&self, request: ChatRequest) -> Result<ChatResponse, LlmError> {
        let wire_request = self.build_wire_request(&request);
        let (response, latency_ms) = self.execute_request(wire_request).await?;

        let choice = response
            .choices
            .into_iter()
            .next()
            .ok_or_else(|| LlmError::InvalidResponse {
                message: "No choices in response".to_string(),
            })?;

        Ok(ChatResponse {
            content: choice.message.content,
            model: response.model,
            finish_reason: choice.finish_reason.unwrap_or_else(|| "stop".to_string()),
            latency_ms,
        })
    }
}

// ============================================================================
// TESTS
// ============================================================================
