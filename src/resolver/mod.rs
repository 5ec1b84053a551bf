/// Source resolution - classify caller input and scrape launchpad pages
///
/// Input is either a direct contract address or a launchpad page URL.
/// A launchpad URL must be https, live on the configured domain (or a
/// subdomain), and point directly at a token page: exactly one
/// non-empty path segment, which excludes sub-pages.
use crate::apis::client::HttpClient;
use crate::config::AnalyzerConfig;
use crate::errors::{AnalyzeError, AnalyzeResult};
use crate::extractor::{self, AddressCandidate};
use crate::logger::{self, LogTag};
use url::Url;

// ============================================================================
// CLASSIFICATION
// ============================================================================

/// How the caller's input was classified
#[derive(Debug, Clone, PartialEq)]
pub enum ResolvedInput {
    /// Input is itself a qualifying contract address
    Address(AddressCandidate),

    /// Input is a launchpad token page to fetch and scrape
    LaunchpadPage(Url),
}

/// Classify raw caller input
///
/// URL classification is attempted first; anything that does not parse
/// as an absolute URL falls through to direct address extraction.
pub fn classify_input(input: &str, config: &AnalyzerConfig) -> AnalyzeResult<ResolvedInput> {
    let input = input.trim();

    if input.is_empty() {
        return Err(AnalyzeError::Validation("Missing input".to_string()));
    }

    if let Ok(url) = Url::parse(input) {
        if url.scheme() == "http" || url.scheme() == "https" {
            if !config.accept_url {
                return Err(AnalyzeError::Validation(
                    "URL input is not accepted".to_string(),
                ));
            }
            return validate_launchpad_url(url, config).map(ResolvedInput::LaunchpadPage);
        }
    }

    if !config.accept_direct_address {
        return Err(AnalyzeError::Validation(
            "Direct address input is not accepted".to_string(),
        ));
    }

    let suffixes = suffix_policy(config);
    match extractor::extract_address(input, suffixes) {
        Some(candidate) => Ok(ResolvedInput::Address(candidate)),
        None => Err(AnalyzeError::Validation(
            "Input is not a valid token address or launchpad URL".to_string(),
        )),
    }
}

/// Enforce the launchpad URL rules
fn validate_launchpad_url(url: Url, config: &AnalyzerConfig) -> AnalyzeResult<Url> {
    if url.scheme() != "https" {
        return Err(AnalyzeError::Validation(
            "Launchpad URLs must use https".to_string(),
        ));
    }

    let host = url
        .host_str()
        .ok_or_else(|| AnalyzeError::Validation("URL has no host".to_string()))?
        .to_lowercase();
    let domain = config.launchpad_domain.to_lowercase();

    let host_allowed = host == domain || host.ends_with(&format!(".{}", domain));
    if !host_allowed {
        return Err(AnalyzeError::Validation(format!(
            "Only {} pages are supported",
            config.launchpad_domain
        )));
    }

    let segments: Vec<&str> = url
        .path_segments()
        .map(|segments| segments.filter(|s| !s.is_empty()).collect())
        .unwrap_or_default();

    if segments.len() != 1 {
        return Err(AnalyzeError::Validation(
            "URL must point directly at a token page".to_string(),
        ));
    }

    Ok(url)
}

fn suffix_policy(config: &AnalyzerConfig) -> &[String] {
    if config.enforce_suffix {
        &config.allowed_suffixes
    } else {
        &[]
    }
}

// ============================================================================
// PAGE SCRAPING
// ============================================================================

/// What a launchpad page yielded
#[derive(Debug, Clone, PartialEq)]
pub struct ScrapedPage {
    pub candidate: AddressCandidate,
    pub description: Option<String>,
}

/// Fetches launchpad pages and extracts the embedded address
pub struct PageResolver {
    http_client: HttpClient,
}

impl PageResolver {
    pub fn new(config: &AnalyzerConfig) -> Result<Self, String> {
        Ok(Self {
            http_client: HttpClient::new(config.page_fetch_timeout_secs)?,
        })
    }

    /// Fetch a launchpad page and scrape it
    ///
    /// Non-success fetch -> Upstream; page without a qualifying address
    /// -> NotFound. The description scrape never fails, only yields
    /// None.
    pub async fn scrape(&self, url: &Url, config: &AnalyzerConfig) -> AnalyzeResult<ScrapedPage> {
        logger::debug(LogTag::Analyzer, &format!("Fetching launchpad page {}", url));

        let response = self
            .http_client
            .client()
            .get(url.as_str())
            .send()
            .await
            .map_err(AnalyzeError::from)?;

        let status = response.status();
        if !status.is_success() {
            return Err(AnalyzeError::Upstream(format!(
                "Launchpad page returned HTTP {}",
                status.as_u16()
            )));
        }

        let html = response
            .text()
            .await
            .map_err(|e| AnalyzeError::Upstream(format!("Failed to read page body: {}", e)))?;

        let candidate = extractor::extract_address(&html, suffix_policy(config)).ok_or_else(
            || AnalyzeError::NotFound("No token address found on the page".to_string()),
        )?;

        let description = extractor::extract_description(&html, config.description_max_chars);

        Ok(ScrapedPage {
            candidate,
            description,
        })
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extractor::ChainGuess;

    fn config() -> AnalyzerConfig {
        AnalyzerConfig::default()
    }

    const SOL_DUB: &str = "6q5mPHT9zhqeYJ1Z8MGq1Y4xcWR2aTfSN4cVrArkqDUB";

    #[test]
    fn bare_base58_with_suffix_accepted() {
        let resolved = classify_input(SOL_DUB, &config()).unwrap();
        match resolved {
            ResolvedInput::Address(candidate) => {
                assert_eq!(candidate.chain, ChainGuess::Solana);
                assert_eq!(candidate.address, SOL_DUB);
            }
            other => panic!("expected address, got {:?}", other),
        }
    }

    #[test]
    fn launchpad_url_with_one_segment_accepted() {
        let resolved = classify_input("https://anoncoin.it/TOKENdoge", &config()).unwrap();
        assert!(matches!(resolved, ResolvedInput::LaunchpadPage(_)));
    }

    #[test]
    fn subdomain_of_launchpad_accepted() {
        let resolved = classify_input("https://www.anoncoin.it/TOKENdoge", &config()).unwrap();
        assert!(matches!(resolved, ResolvedInput::LaunchpadPage(_)));
    }

    #[test]
    fn lookalike_domain_rejected() {
        let err = classify_input("https://notanoncoin.it/TOKENdoge", &config()).unwrap_err();
        assert!(matches!(err, AnalyzeError::Validation(_)));
    }

    #[test]
    fn two_path_segments_rejected() {
        let err = classify_input("https://anoncoin.it/tokens/FOOdoge", &config()).unwrap_err();
        assert!(matches!(err, AnalyzeError::Validation(_)));
    }

    #[test]
    fn schemeless_launchpad_path_rejected() {
        // No scheme means no URL classification; "FOOdoge" is not an address
        let err = classify_input("anoncoin.it/FOOdoge", &config()).unwrap_err();
        assert!(matches!(err, AnalyzeError::Validation(_)));
    }

    #[test]
    fn insecure_scheme_rejected() {
        let err = classify_input("http://anoncoin.it/TOKENdoge", &config()).unwrap_err();
        assert!(matches!(err, AnalyzeError::Validation(_)));
    }

    #[test]
    fn root_page_rejected() {
        let err = classify_input("https://anoncoin.it/", &config()).unwrap_err();
        assert!(matches!(err, AnalyzeError::Validation(_)));
    }

    #[test]
    fn empty_input_rejected() {
        let err = classify_input("   ", &config()).unwrap_err();
        assert_eq!(err, AnalyzeError::Validation("Missing input".to_string()));
    }

    #[test]
    fn address_without_required_suffix_rejected() {
        // Valid base58, wrong tail
        let addr = format!("{}A", &SOL_DUB[..43]);
        let err = classify_input(&addr, &config()).unwrap_err();
        assert!(matches!(err, AnalyzeError::Validation(_)));
    }

    #[test]
    fn suffix_policy_skipped_when_not_enforced() {
        let mut cfg = config();
        cfg.enforce_suffix = false;
        let addr = format!("{}A", &SOL_DUB[..43]);
        assert!(classify_input(&addr, &cfg).is_ok());
    }

    #[test]
    fn url_rejected_when_url_input_disabled() {
        let mut cfg = config();
        cfg.accept_url = false;
        let err = classify_input("https://anoncoin.it/TOKENdoge", &cfg).unwrap_err();
        assert!(matches!(err, AnalyzeError::Validation(_)));
    }

    #[test]
    fn address_rejected_when_direct_input_disabled() {
        let mut cfg = config();
        cfg.accept_direct_address = false;
        let err = classify_input(SOL_DUB, &cfg).unwrap_err();
        assert!(matches!(err, AnalyzeError::Validation(_)));
    }
}
