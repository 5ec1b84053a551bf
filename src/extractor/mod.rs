/// Address and description extraction from free-form text or HTML
///
/// Two address shapes are recognized:
/// - EVM: `0x` followed by exactly 40 hex characters
/// - Base58: 32-44 characters of the Bitcoin alphabet (no 0, O, I, l)
///
/// EVM is checked before Base58; the first match per pattern wins and
/// overlapping matches are not deduplicated. An optional suffix policy
/// discards matches whose tail does not equal one of the allowed
/// suffixes under a case-insensitive comparison.
use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

// ============================================================================
// PATTERNS
// ============================================================================

static EVM_ADDRESS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"0x[0-9a-fA-F]{40}").expect("valid EVM address pattern"));

/// Maximal runs of Base58 characters; length bounds are applied per run
/// so a 45-character run is rejected instead of matching its prefix.
static BASE58_RUN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[1-9A-HJ-NP-Za-km-z]+").expect("valid Base58 run pattern"));

const BASE58_MIN_LEN: usize = 32;
const BASE58_MAX_LEN: usize = 44;

// ============================================================================
// TYPES
// ============================================================================

/// Chain inferred from the address shape
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ChainGuess {
    Ethereum,
    Solana,
}

impl ChainGuess {
    /// Chain identifier used by the market-data API
    pub fn chain_id(&self) -> &'static str {
        match self {
            ChainGuess::Ethereum => "ethereum",
            ChainGuess::Solana => "solana",
        }
    }
}

/// A candidate address found in caller input or scraped HTML
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddressCandidate {
    pub address: String,
    pub chain: ChainGuess,
}

// ============================================================================
// ADDRESS EXTRACTION
// ============================================================================

/// Find the first qualifying address in a text blob
///
/// `allowed_suffixes` is the suffix policy: when non-empty, a match is
/// kept only if its tail equals one of the suffixes case-insensitively.
/// Pass an empty slice to accept arbitrary addresses.
pub fn extract_address(text: &str, allowed_suffixes: &[String]) -> Option<AddressCandidate> {
    if let Some(m) = EVM_ADDRESS.find(text) {
        if suffix_allowed(m.as_str(), allowed_suffixes) {
            return Some(AddressCandidate {
                address: m.as_str().to_string(),
                chain: ChainGuess::Ethereum,
            });
        }
    }

    for run in BASE58_RUN.find_iter(text) {
        let candidate = run.as_str();
        if candidate.len() < BASE58_MIN_LEN || candidate.len() > BASE58_MAX_LEN {
            continue;
        }
        if suffix_allowed(candidate, allowed_suffixes) {
            return Some(AddressCandidate {
                address: candidate.to_string(),
                chain: ChainGuess::Solana,
            });
        }
    }

    None
}

/// Check an address tail against the suffix policy
///
/// A suffix passes when the address, lowered or uppered as a whole,
/// ends with the same transformation of the suffix.
fn suffix_allowed(address: &str, allowed_suffixes: &[String]) -> bool {
    if allowed_suffixes.is_empty() {
        return true;
    }

    allowed_suffixes.iter().any(|suffix| {
        address.to_lowercase().ends_with(&suffix.to_lowercase())
            || address.to_uppercase().ends_with(&suffix.to_uppercase())
    })
}

// ============================================================================
// DESCRIPTION SCRAPING
// ============================================================================

static META_DESCRIPTION: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"(?is)<meta[^>]*\bname\s*=\s*["']description["'][^>]*\bcontent\s*=\s*["']([^"']+)["']"#)
        .expect("valid meta description pattern")
});

static OG_DESCRIPTION: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r#"(?is)<meta[^>]*\bproperty\s*=\s*["']og:description["'][^>]*\bcontent\s*=\s*["']([^"']+)["']"#,
    )
    .expect("valid og:description pattern")
});

/// Text following a literal "Description" label, bounded at the next
/// tag or line break
static LABELED_DESCRIPTION: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)description\s*[:\-]?\s*([^<>\r\n]+)").expect("valid label pattern")
});

/// Best-effort description scrape over raw HTML
///
/// Tried in order: meta description tag, Open Graph description tag,
/// "Description" label heuristic. Returns None when nothing usable is
/// found; never errors.
pub fn extract_description(html: &str, max_chars: usize) -> Option<String> {
    let raw = META_DESCRIPTION
        .captures(html)
        .or_else(|| OG_DESCRIPTION.captures(html))
        .or_else(|| LABELED_DESCRIPTION.captures(html))
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().trim().to_string())?;

    if raw.is_empty() {
        return None;
    }

    if raw.chars().count() > max_chars {
        Some(raw.chars().take(max_chars).collect())
    } else {
        Some(raw)
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn branding_suffixes() -> Vec<String> {
        vec!["doge".to_string(), "DUB".to_string()]
    }

    /// Build a 40-hex-char EVM address with the given tail
    fn evm_addr(tail: &str) -> String {
        format!("0x{}{}", "1".repeat(40 - tail.len()), tail)
    }

    const EVM_PLAIN: &str = "0xAbCdEf0123456789aBcDeF0123456789abcdef01";
    const SOL_DUB: &str = "6q5mPHT9zhqeYJ1Z8MGq1Y4xcWR2aTfSN4cVrArkqDUB";

    #[test]
    fn evm_address_extracted_without_policy() {
        let text = format!("token launched at {} today", EVM_PLAIN);
        let found = extract_address(&text, &[]).unwrap();
        assert_eq!(found.address, EVM_PLAIN);
        assert_eq!(found.chain, ChainGuess::Ethereum);
    }

    #[test]
    fn evm_address_with_allowed_suffix() {
        let suffixes = vec!["beef".to_string()];
        let found = extract_address(&evm_addr("beef"), &suffixes).unwrap();
        assert_eq!(found.chain, ChainGuess::Ethereum);
        assert!(extract_address(&evm_addr("beee"), &suffixes).is_none());
    }

    #[test]
    fn evm_suffix_comparison_is_case_insensitive() {
        let suffixes = vec!["beef".to_string()];
        let addr = evm_addr("BEEF");
        let found = extract_address(&addr, &suffixes).unwrap();
        assert_eq!(found.address, addr);
    }

    #[test]
    fn disallowed_suffix_returns_none() {
        // Hex tails can never satisfy the doge/DUB branding gate
        let text = format!("see {}", evm_addr("d09e"));
        assert!(extract_address(&text, &branding_suffixes()).is_none());
    }

    #[test]
    fn base58_address_guessed_as_solana() {
        assert_eq!(SOL_DUB.len(), 44);
        let found = extract_address(SOL_DUB, &branding_suffixes()).unwrap();
        assert_eq!(found.chain, ChainGuess::Solana);
        assert_eq!(found.address, SOL_DUB);
    }

    #[test]
    fn base58_suffix_doge_accepted_lowercase() {
        // 36 chars ending in doge
        let addr = format!("{}doge", "4".repeat(32));
        let found = extract_address(&addr, &branding_suffixes()).unwrap();
        assert_eq!(found.chain, ChainGuess::Solana);
    }

    #[test]
    fn base58_length_bounds_enforced() {
        let too_short = "1".repeat(31);
        let too_long = "2".repeat(45);
        assert!(extract_address(&too_short, &[]).is_none());
        assert!(extract_address(&too_long, &[]).is_none());

        let exact_min = "3".repeat(32);
        assert!(extract_address(&exact_min, &[]).is_some());
    }

    #[test]
    fn evm_takes_priority_over_base58() {
        let text = format!("{} and {}", SOL_DUB, EVM_PLAIN);
        let found = extract_address(&text, &[]).unwrap();
        assert_eq!(found.chain, ChainGuess::Ethereum);
    }

    #[test]
    fn failed_evm_suffix_falls_through_to_base58() {
        let text = format!("{} {}", evm_addr("d09e"), SOL_DUB);
        let found = extract_address(&text, &branding_suffixes()).unwrap();
        assert_eq!(found.chain, ChainGuess::Solana);
    }

    #[test]
    fn no_address_in_plain_text() {
        assert!(extract_address("nothing to see here", &[]).is_none());
    }

    #[test]
    fn meta_description_preferred() {
        let html = r#"<html><head>
            <meta name="description" content="A community token.">
            <meta property="og:description" content="OG text">
            </head><body>Description: body text</body></html>"#;
        assert_eq!(
            extract_description(html, 300),
            Some("A community token.".to_string())
        );
    }

    #[test]
    fn og_description_fallback() {
        let html = r#"<meta property="og:description" content="OG only text">"#;
        assert_eq!(
            extract_description(html, 300),
            Some("OG only text".to_string())
        );
    }

    #[test]
    fn labeled_description_fallback_is_bounded() {
        let html = "<p>Description: a dog coin with a twist</p>";
        assert_eq!(
            extract_description(html, 12),
            Some("a dog coin w".to_string())
        );
    }

    #[test]
    fn missing_description_is_none() {
        assert_eq!(extract_description("<html><body>hi</body></html>", 300), None);
    }
}
