/// Core records flowing through the analysis pipeline
///
/// TokenFacts is assembled once per request and read-only afterwards;
/// the narrative generator and report assembler only borrow it.
use crate::apis::dexscreener::MarketSnapshot;
use serde::{Deserialize, Serialize};

// ============================================================================
// TOKEN FACTS
// ============================================================================

/// Everything gathered about a token for one request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenFacts {
    pub name: String,
    pub symbol: String,
    pub chain_id: String,
    pub address: String,
    pub price_usd: Option<f64>,
    pub volume_24h: Option<f64>,
    pub liquidity_usd: Option<f64>,
    pub market_cap: Option<f64>,
    pub fdv: Option<f64>,
    pub holders: Option<u64>,
    pub website: Option<String>,
    pub telegram_url: Option<String>,
    pub x_url: Option<String>,
    pub dexscreener_url: Option<String>,
    pub description: Option<String>,
}

impl TokenFacts {
    /// Combine the market snapshot with the remaining gathered fields
    pub fn from_market(
        address: String,
        snapshot: MarketSnapshot,
        holders: Option<u64>,
        description: Option<String>,
    ) -> Self {
        Self {
            name: snapshot.name,
            symbol: snapshot.symbol,
            chain_id: snapshot.chain_id,
            address,
            price_usd: snapshot.price_usd,
            volume_24h: snapshot.volume_24h,
            liquidity_usd: snapshot.liquidity_usd,
            market_cap: snapshot.market_cap,
            fdv: snapshot.fdv,
            holders,
            website: snapshot.website,
            telegram_url: snapshot.telegram_url,
            x_url: snapshot.x_url,
            dexscreener_url: snapshot.pair_url,
            description,
        }
    }
}

// ============================================================================
// RISK BRIEF
// ============================================================================

/// Qualitative risk level relayed from the narrative generator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
    Unknown,
}

impl RiskLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            RiskLevel::Low => "low",
            RiskLevel::Medium => "medium",
            RiskLevel::High => "high",
            RiskLevel::Unknown => "unknown",
        }
    }

    /// Parse a lowercased level token; anything unrecognized is Unknown
    pub fn from_str(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "low" => RiskLevel::Low,
            "medium" => RiskLevel::Medium,
            "high" => RiskLevel::High,
            _ => RiskLevel::Unknown,
        }
    }
}

impl std::fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Narrative risk output; Unknown + notice text when the generator is
/// unavailable or its output is unparseable
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskBrief {
    pub level: RiskLevel,
    pub text: String,
}

// ============================================================================
// REPORT
// ============================================================================

/// Terminal value returned to the caller; never persisted
#[derive(Debug, Clone, PartialEq)]
pub struct Report {
    pub summary: String,
    pub risk: RiskBrief,
    pub facts: TokenFacts,
}
