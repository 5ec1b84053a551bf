/// Holder count client (best-effort, Solana provider)
///
/// Only the total is needed, so the list page size is pinned to 1.
/// Failures here are logged and swallowed; the analysis pipeline must
/// keep working with a null holder count.
use crate::apis::client::{HttpClient, RateLimiter};
use crate::config::HoldersConfig;
use crate::logger::{self, LogTag};
use serde::Deserialize;

/// Page size for the holder listing; the response total is all we read
const HOLDER_PAGE_LIMIT: u32 = 1;

#[derive(Debug, Deserialize)]
struct HoldersResponse {
    total: u64,
}

// ============================================================================
// CLIENT IMPLEMENTATION
// ============================================================================

pub struct HoldersClient {
    http_client: HttpClient,
    rate_limiter: RateLimiter,
    base_url: String,
    enabled: bool,
}

impl HoldersClient {
    pub fn new(config: &HoldersConfig) -> Result<Self, String> {
        Ok(Self {
            http_client: HttpClient::new(config.timeout_secs)?,
            rate_limiter: RateLimiter::new(config.rate_limit_per_minute),
            base_url: config.base_url.trim_end_matches('/').to_string(),
            enabled: config.enabled,
        })
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Fetch the holder count for a token address
    ///
    /// Returns None on any failure (disabled client, non-success status,
    /// network error, parse error). Never propagates an error.
    pub async fn fetch_holder_count(&self, address: &str) -> Option<u64> {
        if !self.enabled {
            return None;
        }

        let guard = match self.rate_limiter.acquire().await {
            Ok(guard) => guard,
            Err(e) => {
                logger::warning(LogTag::Api, &format!("[HOLDERS] Rate limiter error: {}", e));
                return None;
            }
        };

        let url = format!("{}/token/holders", self.base_url);
        let limit = HOLDER_PAGE_LIMIT.to_string();

        let response = self
            .http_client
            .client()
            .get(&url)
            .query(&[("tokenAddress", address), ("limit", limit.as_str())])
            .send()
            .await;

        drop(guard);

        let response = match response {
            Ok(response) => response,
            Err(e) => {
                logger::warning(
                    LogTag::Api,
                    &format!("[HOLDERS] Request failed for {}: {}", address, e),
                );
                return None;
            }
        };

        let status = response.status();
        if !status.is_success() {
            logger::warning(
                LogTag::Api,
                &format!("[HOLDERS] HTTP {} for {}", status.as_u16(), address),
            );
            return None;
        }

        match response.json::<HoldersResponse>().await {
            Ok(parsed) => {
                logger::debug(
                    LogTag::Api,
                    &format!("[HOLDERS] {} holders for {}", parsed.total, address),
                );
                Some(parsed.total)
            }
            Err(e) => {
                logger::warning(
                    LogTag::Api,
                    &format!("[HOLDERS] Parse error for {}: {}", address, e),
                );
                None
            }
        }
    }
}
