/// DexScreener market data client
///
/// API Documentation: https://docs.dexscreener.com/api/reference
///
/// Endpoint used:
/// - /tokens/v1/{chainId}/{tokenAddress} - pairs for one token
pub mod types;

pub use self::types::{MarketSnapshot, PairRaw};

use crate::apis::client::{HttpClient, RateLimiter};
use crate::config::DexScreenerConfig;
use crate::errors::{AnalyzeError, AnalyzeResult};
use crate::logger::{self, LogTag};
use std::time::Instant;

// ============================================================================
// CLIENT IMPLEMENTATION
// ============================================================================

pub struct DexScreenerClient {
    http_client: HttpClient,
    rate_limiter: RateLimiter,
    base_url: String,
}

impl DexScreenerClient {
    pub fn new(config: &DexScreenerConfig) -> Result<Self, String> {
        Ok(Self {
            http_client: HttpClient::new(config.timeout_secs)?,
            rate_limiter: RateLimiter::new(config.rate_limit_per_minute),
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Fetch all trading pairs for a (chain, address) token
    ///
    /// Non-success status -> Upstream; a body that is valid JSON but not
    /// an array -> NotFound (token has no listed pairs).
    pub async fn fetch_token_pairs(
        &self,
        chain_id: &str,
        address: &str,
    ) -> AnalyzeResult<Vec<PairRaw>> {
        let guard = self
            .rate_limiter
            .acquire()
            .await
            .map_err(AnalyzeError::Internal)?;

        let url = format!("{}/tokens/v1/{}/{}", self.base_url, chain_id, address);

        logger::debug(
            LogTag::Api,
            &format!("[DEXSCREENER] Fetching pairs: chain={} token={}", chain_id, address),
        );

        let start = Instant::now();
        let response = self
            .http_client
            .client()
            .get(&url)
            .send()
            .await
            .map_err(AnalyzeError::from)?;

        drop(guard);

        let status = response.status();
        if !status.is_success() {
            return Err(AnalyzeError::Upstream(format!(
                "Market data API returned HTTP {}",
                status.as_u16()
            )));
        }

        let body: serde_json::Value = response.json().await.map_err(|e| {
            AnalyzeError::Upstream(format!("Malformed market data response: {}", e))
        })?;

        if !body.is_array() {
            return Err(AnalyzeError::NotFound(
                "No trading pairs found for this token".to_string(),
            ));
        }

        let pairs: Vec<PairRaw> = serde_json::from_value(body).map_err(|e| {
            AnalyzeError::Upstream(format!("Malformed market data response: {}", e))
        })?;

        logger::debug(
            LogTag::Api,
            &format!(
                "[DEXSCREENER] {} pairs for {} in {}ms",
                pairs.len(),
                address,
                start.elapsed().as_millis()
            ),
        );

        Ok(pairs)
    }

    /// Fetch pairs and flatten the most liquid one
    pub async fn best_market_snapshot(
        &self,
        chain_id: &str,
        address: &str,
    ) -> AnalyzeResult<MarketSnapshot> {
        let pairs = self.fetch_token_pairs(chain_id, address).await?;

        let best = select_most_liquid(&pairs).ok_or_else(|| {
            AnalyzeError::NotFound("No trading pairs found for this token".to_string())
        })?;

        Ok(MarketSnapshot::from_pair(best))
    }
}

/// Pick the pair with the highest USD liquidity
///
/// Stable left fold: a later pair must be strictly more liquid to
/// replace the current pick, so ties keep the first-seen pair.
pub fn select_most_liquid(pairs: &[PairRaw]) -> Option<&PairRaw> {
    pairs.iter().fold(None, |best, pair| match best {
        None => Some(pair),
        Some(current) => {
            if pair.liquidity_usd() > current.liquidity_usd() {
                Some(pair)
            } else {
                Some(current)
            }
        }
    })
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::apis::dexscreener::types::LiquidityRaw;

    fn pair_with_liquidity(usd: Option<f64>, url: &str) -> PairRaw {
        PairRaw {
            chain_id: "solana".to_string(),
            url: Some(url.to_string()),
            liquidity: usd.map(|usd| LiquidityRaw { usd: Some(usd) }),
            ..Default::default()
        }
    }

    #[test]
    fn most_liquid_pair_selected() {
        let pairs = vec![
            pair_with_liquidity(Some(100.0), "a"),
            pair_with_liquidity(Some(50.0), "b"),
            pair_with_liquidity(Some(300.0), "c"),
        ];
        let best = select_most_liquid(&pairs).unwrap();
        assert_eq!(best.url.as_deref(), Some("c"));
    }

    #[test]
    fn tie_keeps_first_seen_pair() {
        let pairs = vec![
            pair_with_liquidity(Some(100.0), "first"),
            pair_with_liquidity(Some(100.0), "second"),
        ];
        let best = select_most_liquid(&pairs).unwrap();
        assert_eq!(best.url.as_deref(), Some("first"));
    }

    #[test]
    fn missing_liquidity_ranks_as_zero() {
        let pairs = vec![
            pair_with_liquidity(None, "none"),
            pair_with_liquidity(Some(1.0), "one"),
        ];
        let best = select_most_liquid(&pairs).unwrap();
        assert_eq!(best.url.as_deref(), Some("one"));
    }

    #[test]
    fn empty_slice_selects_nothing() {
        assert!(select_most_liquid(&[]).is_none());
    }

    #[test]
    fn wire_pairs_parse_from_json() {
        let body = serde_json::json!([{
            "chainId": "solana",
            "url": "https://dexscreener.com/solana/abc",
            "baseToken": { "address": "abc", "name": "Dog Coin", "symbol": "DOG" },
            "priceUsd": "0.001",
            "volume": { "h24": 1234.5 },
            "liquidity": { "usd": 999.0 },
            "fdv": 100000.0,
            "marketCap": 90000.0,
            "info": {
                "websites": [{ "label": "Website", "url": "https://dog.example" }],
                "socials": [{ "type": "telegram", "url": "https://t.me/dog" }]
            }
        }]);

        let pairs: Vec<PairRaw> = serde_json::from_value(body).unwrap();
        assert_eq!(pairs.len(), 1);

        let snapshot = MarketSnapshot::from_pair(&pairs[0]);
        assert_eq!(snapshot.name, "Dog Coin");
        assert_eq!(snapshot.symbol, "DOG");
        assert_eq!(snapshot.price_usd, Some(0.001));
        assert_eq!(snapshot.volume_24h, Some(1234.5));
        assert_eq!(snapshot.liquidity_usd, Some(999.0));
        assert_eq!(snapshot.website.as_deref(), Some("https://dog.example"));
        assert_eq!(snapshot.telegram_url.as_deref(), Some("https://t.me/dog"));
        assert_eq!(snapshot.x_url, None);
    }
}
