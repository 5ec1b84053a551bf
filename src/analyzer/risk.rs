/// Risk narrative generation
///
/// Builds the structured prompt from assembled TokenFacts, relays the
/// model's text, and parses only the RISK_LEVEL header line. Any
/// generator failure degrades to an "unavailable" brief; this stage can
/// never fail the request.
use super::facts::{RiskBrief, RiskLevel, TokenFacts};
use crate::apis::llm::{ChatMessage, ChatRequest, LlmClient};
use crate::config::LlmConfig;
use crate::logger::{self, LogTag};
use std::sync::Arc;

/// Notice used when no generative-text credential is configured
const NOTICE_NOT_CONFIGURED: &str =
    "AI risk analysis is not configured for this deployment. Review the market data manually.";

/// Notice used when the generator call fails or times out
const NOTICE_UNAVAILABLE: &str =
    "AI risk analysis unavailable. The market data above was gathered normally.";

/// Header prefix the model is instructed to emit on its first line
const RISK_LEVEL_PREFIX: &str = "RISK_LEVEL:";

/// Fixed system instruction constraining the model's behavior
const SYSTEM_PROMPT: &str = "\
You are a cautious crypto token analyst. You receive a JSON snapshot of \
on-chain and market facts about a single token and write a short risk brief.

Rules you must follow:
- Do not give financial advice.
- Do not recommend buying, selling, holding, or any trading action, and do \
not mention price targets.
- Treat missing or null fields as data limitations, not as red flags.
- Do not infer suspicion from a domain name alone.
- Base every statement on the provided data only.

Your response must use exactly this layout:
Line 1: RISK_LEVEL: <Low|Medium|High|Unknown>
Line 2: (blank)
Then these labeled bullet sections, in order:
RED FLAGS: bullet list (or 'none observed')
POSITIVE SIGNALS: bullet list (or 'none observed')
DATA LIMITATIONS: bullet list of missing or null fields
HONEYPOT LIKELIHOOD: one short line
Finally one caution line reminding the reader to verify independently.";

// ============================================================================
// GENERATION
// ============================================================================

/// Produce a risk brief for the assembled facts
///
/// `client` is None when no credential is configured; the pipeline
/// still succeeds with the fixed notice brief.
pub async fn generate_risk_brief(
    client: Option<&Arc<dyn LlmClient>>,
    llm_config: &LlmConfig,
    facts: &TokenFacts,
) -> RiskBrief {
    let client = match client {
        Some(client) => client,
        None => {
            return RiskBrief {
                level: RiskLevel::Unknown,
                text: NOTICE_NOT_CONFIGURED.to_string(),
            };
        }
    };

    let snapshot = match serde_json::to_string_pretty(facts) {
        Ok(snapshot) => snapshot,
        Err(e) => {
            logger::error(
                LogTag::Llm,
                &format!("Failed to serialize facts for {}: {}", facts.address, e),
            );
            return RiskBrief {
                level: RiskLevel::Unknown,
                text: NOTICE_UNAVAILABLE.to_string(),
            };
        }
    };

    let request = ChatRequest::new(
        llm_config.model.clone(),
        vec![
            ChatMessage::system(SYSTEM_PROMPT),
            ChatMessage::user(snapshot),
        ],
    )
    .with_temperature(llm_config.temperature)
    .with_max_tokens(llm_config.max_tokens);

    match client.call(request).await {
        Ok(response) => {
            logger::debug(
                LogTag::Llm,
                &format!(
                    "Risk brief for {} in {:.0}ms ({})",
                    facts.address, response.latency_ms, response.model
                ),
            );
            parse_risk_response(&response.content)
        }
        Err(e) => {
            logger::warning(
                LogTag::Llm,
                &format!("Risk narrative failed for {}: {}", facts.address, e),
            );
            RiskBrief {
                level: RiskLevel::Unknown,
                text: NOTICE_UNAVAILABLE.to_string(),
            }
        }
    }
}

// ============================================================================
// RESPONSE PARSING
// ============================================================================

/// Parse the model response: first line populates the level when it
/// carries the RISK_LEVEL prefix (case-insensitive); the remainder is
/// passed through verbatim.
pub fn parse_risk_response(content: &str) -> RiskBrief {
    let mut lines = content.lines();

    let first_line = lines.next().unwrap_or("").trim();

    let header_matches = first_line
        .get(..RISK_LEVEL_PREFIX.len())
        .map(|prefix| prefix.eq_ignore_ascii_case(RISK_LEVEL_PREFIX))
        .unwrap_or(false);

    if header_matches {
        let level = RiskLevel::from_str(&first_line[RISK_LEVEL_PREFIX.len()..]);
        let rest: Vec<&str> = lines.collect();
        return RiskBrief {
            level,
            text: rest.join("\n").trim().to_string(),
        };
    }

    // No recognizable header; relay everything and stay Unknown
    RiskBrief {
        level: RiskLevel::Unknown,
        text: content.to_string(),
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::apis::llm::{ChatResponse, LlmError};
    use async_trait::async_trait;

    struct CannedClient {
        reply: Result<String, ()>,
    }

    #[async_trait]
    impl LlmClient for CannedClient {
        fn name(&self) -> &'static str {
            "canned"
        }

        fn is_enabled(&self) -> bool {
            true
        }

        async fn call(&self, _request: ChatRequest) -> Result<ChatResponse, LlmError> {
            match &self.reply {
                Ok(content) => Ok(ChatResponse {
                    content: content.clone(),
                    model: "canned-model".to_string(),
                    finish_reason: "stop".to_string(),
                    latency_ms: 1.0,
                }),
                Err(()) => Err(LlmError::NetworkError {
                    message: "boom".to_string(),
                }),
            }
        }
    }

    fn facts() -> TokenFacts {
        TokenFacts {
            name: "Dog".to_string(),
            symbol: "DOG".to_string(),
            chain_id: "solana".to_string(),
            address: "abc".to_string(),
            price_usd: None,
            volume_24h: None,
            liquidity_usd: None,
            market_cap: None,
            fdv: None,
            holders: None,
            website: None,
            telegram_url: None,
            x_url: None,
            dexscreener_url: None,
            description: None,
        }
    }

    #[test]
    fn parses_header_line_and_relays_body() {
        let brief = parse_risk_response(
            "RISK_LEVEL: High\n\nRED FLAGS:\n- thin liquidity\n\nVerify independently.",
        );
        assert_eq!(brief.level, RiskLevel::High);
        assert!(brief.text.starts_with("RED FLAGS:"));
        assert!(brief.text.contains("Verify independently."));
    }

    #[test]
    fn header_prefix_match_is_case_insensitive() {
        let brief = parse_risk_response("risk_level: medium\n\nbody");
        assert_eq!(brief.level, RiskLevel::Medium);
        assert_eq!(brief.text, "body");
    }

    #[test]
    fn unparseable_header_keeps_full_text_and_unknown() {
        let reply = "The token looks fine to me.";
        let brief = parse_risk_response(reply);
        assert_eq!(brief.level, RiskLevel::Unknown);
        assert_eq!(brief.text, reply);
    }

    #[test]
    fn unrecognized_level_token_maps_to_unknown() {
        let brief = parse_risk_response("RISK_LEVEL: Critical\n\nbody");
        assert_eq!(brief.level, RiskLevel::Unknown);
    }

    #[tokio::test]
    async fn missing_client_degrades_to_notice() {
        let brief = generate_risk_brief(None, &LlmConfig::default(), &facts()).await;
        assert_eq!(brief.level, RiskLevel::Unknown);
        assert_eq!(brief.text, NOTICE_NOT_CONFIGURED);
    }

    #[tokio::test]
    async fn failing_client_degrades_to_unavailable() {
        let client: Arc<dyn LlmClient> = Arc::new(CannedClient { reply: Err(()) });
        let brief = generate_risk_brief(Some(&client), &LlmConfig::default(), &facts()).await;
        assert_eq!(brief.level, RiskLevel::Unknown);
        assert_eq!(brief.text, NOTICE_UNAVAILABLE);
    }

    #[tokio::test]
    async fn successful_client_reply_is_parsed() {
        let client: Arc<dyn LlmClient> = Arc::new(CannedClient {
            reply: Ok("RISK_LEVEL: Low\n\nPOSITIVE SIGNALS:\n- deep liquidity".to_string()),
        });
        let brief = generate_risk_brief(Some(&client), &LlmConfig::default(), &facts()).await;
        assert_eq!(brief.level, RiskLevel::Low);
        assert!(brief.text.contains("deep liquidity"));
    }

    #[test]
    fn system_prompt_pins_required_layout() {
        assert!(SYSTEM_PROMPT.contains("RISK_LEVEL: <Low|Medium|High|Unknown>"));
        assert!(SYSTEM_PROMPT.contains("Do not give financial advice"));
        assert!(SYSTEM_PROMPT.contains("data limitations"));
        assert!(SYSTEM_PROMPT.contains("HONEYPOT LIKELIHOOD"));
    }
}
