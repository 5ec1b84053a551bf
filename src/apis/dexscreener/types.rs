/// DexScreener API wire types
///
/// Shapes match the /tokens/v1 endpoint responses. Numeric prices come
/// back as strings on the wire; everything else is optional because
/// freshly listed tokens often miss whole sections.
use serde::Deserialize;

// ============================================================================
// RAW WIRE TYPES
// ============================================================================

/// One trading pair as returned by /tokens/v1/{chainId}/{address}
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct PairRaw {
    pub chain_id: String,
    pub url: Option<String>,
    pub base_token: Option<BaseTokenRaw>,
    pub price_usd: Option<String>,
    pub volume: Option<VolumeRaw>,
    pub liquidity: Option<LiquidityRaw>,
    pub fdv: Option<f64>,
    pub market_cap: Option<f64>,
    pub info: Option<PairInfoRaw>,
}

impl PairRaw {
    /// Liquidity in USD; absent liquidity counts as zero for ranking
    pub fn liquidity_usd(&self) -> f64 {
        self.liquidity
            .as_ref()
            .and_then(|l| l.usd)
            .unwrap_or(0.0)
    }
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct BaseTokenRaw {
    pub address: Option<String>,
    pub name: Option<String>,
    pub symbol: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct VolumeRaw {
    pub h24: Option<f64>,
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct LiquidityRaw {
    pub usd: Option<f64>,
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct PairInfoRaw {
    pub websites: Vec<WebsiteRaw>,
    pub socials: Vec<SocialRaw>,
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct WebsiteRaw {
    pub label: Option<String>,
    pub url: Option<String>,
}

/// Social link entry; some payloads use "type", older ones "platform"
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct SocialRaw {
    #[serde(rename = "type", alias = "platform")]
    pub platform: Option<String>,
    pub url: Option<String>,
    pub handle: Option<String>,
}

// ============================================================================
// DOMAIN TYPE
// ============================================================================

/// Flattened market data from the most liquid pair of a token
#[derive(Debug, Clone, PartialEq)]
pub struct MarketSnapshot {
    pub chain_id: String,
    pub name: String,
    pub symbol: String,
    pub price_usd: Option<f64>,
    pub volume_24h: Option<f64>,
    pub liquidity_usd: Option<f64>,
    pub fdv: Option<f64>,
    pub market_cap: Option<f64>,
    pub website: Option<String>,
    pub telegram_url: Option<String>,
    pub x_url: Option<String>,
    pub pair_url: Option<String>,
}

const TELEGRAM_BASE_URL: &str = "https://t.me/";
const X_BASE_URL: &str = "https://x.com/";

impl MarketSnapshot {
    /// Flatten a raw pair into the fields the report needs
    pub fn from_pair(pair: &PairRaw) -> Self {
        let base = pair.base_token.as_ref();

        let name = base
            .and_then(|t| t.name.clone())
            .filter(|n| !n.is_empty())
            .unwrap_or_else(|| "Unknown".to_string());
        let symbol = base
            .and_then(|t| t.symbol.clone())
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| "?".to_string());

        let website = pair
            .info
            .as_ref()
            .and_then(|i| i.websites.first())
            .and_then(|w| w.url.clone());

        let socials: &[SocialRaw] = pair
            .info
            .as_ref()
            .map(|i| i.socials.as_slice())
            .unwrap_or(&[]);

        Self {
            chain_id: pair.chain_id.clone(),
            name,
            symbol,
            price_usd: pair.price_usd.as_deref().and_then(|p| p.parse().ok()),
            volume_24h: pair.volume.as_ref().and_then(|v| v.h24),
            liquidity_usd: pair.liquidity.as_ref().and_then(|l| l.usd),
            fdv: pair.fdv,
            market_cap: pair.market_cap,
            website,
            telegram_url: resolve_social(socials, &["telegram"], TELEGRAM_BASE_URL),
            x_url: resolve_social(socials, &["twitter", "x"], X_BASE_URL),
            pair_url: pair.url.clone(),
        }
    }
}

/// First social whose platform name contains one of the needles.
/// Explicit URL fields win over handle-built links.
fn resolve_social(socials: &[SocialRaw], needles: &[&str], base_url: &str) -> Option<String> {
    let social = socials.iter().find(|s| {
        s.platform
            .as_deref()
            .map(|p| {
                let p = p.to_lowercase();
                needles.iter().any(|needle| p.contains(needle))
            })
            .unwrap_or(false)
    })?;

    if let Some(url) = social.url.as_ref().filter(|u| !u.is_empty()) {
        return Some(url.clone());
    }

    social
        .handle
        .as_ref()
        .filter(|h| !h.is_empty())
        .map(|h| format!("{}{}", base_url, h.trim_start_matches('@')))
}
