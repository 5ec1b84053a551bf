//! Token analysis endpoint
//!
//! POST /api/analyze with `{ "input": "<address or URL>" }`.

use axum::{
    extract::State,
    http::StatusCode,
    response::Response,
    routing::post,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::analyzer::{Report, TokenFacts};
use crate::errors::AnalyzeError;
use crate::logger::{self, LogTag};
use crate::webserver::state::AppState;
use crate::webserver::utils::{error_response, success_response};

// ============================================================================
// ROUTES
// ============================================================================

pub fn routes() -> Router<Arc<AppState>> {
    Router::new().route("/analyze", post(analyze))
}

// ============================================================================
// REQUEST / RESPONSE TYPES
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct AnalyzeRequest {
    /// Token contract address or launchpad page URL.
    /// "url" is accepted as an alias for URL-only deployments.
    #[serde(alias = "url")]
    pub input: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzeResponse {
    pub ok: bool,
    pub summary: String,
    pub ai_risk: String,
    pub ai_risk_level: String,
    pub links: LinksResponse,
    #[serde(flatten)]
    pub facts: TokenFacts,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LinksResponse {
    pub website: Option<String>,
    pub telegram: Option<String>,
    pub x: Option<String>,
    pub dexscreener: Option<String>,
}

impl AnalyzeResponse {
    fn from_report(report: Report) -> Self {
        let links = LinksResponse {
            website: report.facts.website.clone(),
            telegram: report.facts.telegram_url.clone(),
            x: report.facts.x_url.clone(),
            dexscreener: report.facts.dexscreener_url.clone(),
        };

        Self {
            ok: true,
            summary: report.summary,
            ai_risk: report.risk.text,
            ai_risk_level: report.risk.level.as_str().to_string(),
            links,
            facts: report.facts,
        }
    }
}

// ============================================================================
// HANDLERS
// ============================================================================

/// POST /api/analyze - Run the analysis pipeline for one input
async fn analyze(
    State(state): State<Arc<AppState>>,
    Json(request): Json<AnalyzeRequest>,
) -> Response {
    let input = match request.input.as_deref() {
        Some(input) if !input.trim().is_empty() => input,
        _ => {
            return error_response(StatusCode::BAD_REQUEST, "VALIDATION_ERROR", "Missing input");
        }
    };

    match state.analyzer.analyze(input).await {
        Ok(report) => success_response(AnalyzeResponse::from_report(report)),
        Err(err) => {
            logger::warning(
                LogTag::Api,
                &format!("Analyze request failed ({}): {}", err.code(), err),
            );
            analyze_error_response(&err)
        }
    }
}

fn analyze_error_response(err: &AnalyzeError) -> Response {
    let status =
        StatusCode::from_u16(err.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    error_response(status, err.code(), err.message())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analyzer::{RiskBrief, RiskLevel};

    fn report() -> Report {
        let facts = TokenFacts {
            name: "Dog".to_string(),
            symbol: "DOG".to_string(),
            chain_id: "solana".to_string(),
            address: "abc".to_string(),
            price_usd: Some(0.5),
            volume_24h: None,
            liquidity_usd: None,
            market_cap: None,
            fdv: None,
            holders: None,
            website: Some("https://dog.example".to_string()),
            telegram_url: None,
            x_url: None,
            dexscreener_url: None,
            description: None,
        };
        Report {
            summary: "summary text".to_string(),
            risk: RiskBrief {
                level: RiskLevel::Medium,
                text: "brief".to_string(),
            },
            facts,
        }
    }

    #[test]
    fn response_envelope_flattens_facts() {
        let response = AnalyzeResponse::from_report(report());
        let json = serde_json::to_value(&response).unwrap();

        assert_eq!(json["ok"], true);
        assert_eq!(json["summary"], "summary text");
        assert_eq!(json["aiRisk"], "brief");
        assert_eq!(json["aiRiskLevel"], "medium");
        assert_eq!(json["links"]["website"], "https://dog.example");
        // Flattened facts live at the top level
        assert_eq!(json["chainId"], "solana");
        assert_eq!(json["priceUsd"], 0.5);
    }

    #[test]
    fn request_accepts_url_alias() {
        let parsed: AnalyzeRequest =
            serde_json::from_str(r#"{"url": "https://anoncoin.it/FOOdoge"}"#).unwrap();
        assert_eq!(parsed.input.as_deref(), Some("https://anoncoin.it/FOOdoge"));
    }

    #[test]
    fn error_statuses_map_from_taxonomy() {
        let response = analyze_error_response(&AnalyzeError::NotFound("x".into()));
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let response = analyze_error_response(&AnalyzeError::Upstream("x".into()));
        assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
    }
}
