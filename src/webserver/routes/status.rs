//! Service status and health endpoints

use axum::{extract::State, response::Response, routing::get, Router};
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::sync::Arc;

use crate::config::with_config;
use crate::webserver::state::AppState;
use crate::webserver::utils::success_response;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/status", get(get_status))
        .route("/health", get(get_health))
}

// ============================================================================
// RESPONSE TYPES
// ============================================================================

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusResponse {
    pub version: String,
    pub uptime_seconds: u64,
    pub persona: String,
    pub launchpad_domain: String,
    pub accept_url: bool,
    pub accept_direct_address: bool,
    pub enforce_suffix: bool,
    pub llm_configured: bool,
    pub holders_enabled: bool,
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
    pub version: String,
}

// ============================================================================
// HANDLERS
// ============================================================================

/// GET /api/status - Configuration-level service status
async fn get_status(State(state): State<Arc<AppState>>) -> Response {
    let response = with_config(|cfg| StatusResponse {
        version: env!("CARGO_PKG_VERSION").to_string(),
        uptime_seconds: state.uptime_seconds(),
        persona: cfg.analyzer.persona_name.clone(),
        launchpad_domain: cfg.analyzer.launchpad_domain.clone(),
        accept_url: cfg.analyzer.accept_url,
        accept_direct_address: cfg.analyzer.accept_direct_address,
        enforce_suffix: cfg.analyzer.enforce_suffix,
        llm_configured: !cfg.apis.llm.api_key.trim().is_empty() && cfg.apis.llm.enabled,
        holders_enabled: cfg.apis.holders.enabled,
    });

    success_response(response)
}

/// GET /api/health - Liveness probe
async fn get_health() -> Response {
    success_response(HealthResponse {
        status: "ok".to_string(),
        timestamp: Utc::now(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}
