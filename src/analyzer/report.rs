/// Report assembly
///
/// Pure rendering of TokenFacts into a fixed-order multi-line summary.
/// Every labeled line is always present; missing values render as "?",
/// "not listed" (links) or "not provided" (description). Identical
/// inputs must produce byte-identical output since consumers diff
/// reports between runs.
use super::facts::TokenFacts;

const PLACEHOLDER_VALUE: &str = "?";
const PLACEHOLDER_LINK: &str = "not listed";
const PLACEHOLDER_DESCRIPTION: &str = "not provided";

/// Render the human-readable summary
pub fn render_summary(facts: &TokenFacts, persona: &str) -> String {
    let mut out = String::new();

    out.push_str(&format!("=== {} Token Report ===\n", persona));

    out.push_str("\n[Token]\n");
    out.push_str(&format!("Name: {}\n", facts.name));
    out.push_str(&format!("Symbol: {}\n", facts.symbol));
    out.push_str(&format!("Chain: {}\n", facts.chain_id));
    out.push_str(&format!("Address: {}\n", facts.address));

    out.push_str("\n[Market Data]\n");
    out.push_str(&format!("Price (USD): {}\n", fmt_price(facts.price_usd)));
    out.push_str(&format!("24h Volume: {}\n", fmt_amount(facts.volume_24h)));
    out.push_str(&format!(
        "Liquidity (USD): {}\n",
        fmt_amount(facts.liquidity_usd)
    ));
    out.push_str(&format!("Market Cap: {}\n", fmt_amount(facts.market_cap)));
    out.push_str(&format!("FDV: {}\n", fmt_amount(facts.fdv)));
    out.push_str(&format!("Holders: {}\n", fmt_count(facts.holders)));

    out.push_str("\n[Links]\n");
    out.push_str(&format!("Website: {}\n", fmt_link(&facts.website)));
    out.push_str(&format!("Telegram: {}\n", fmt_link(&facts.telegram_url)));
    out.push_str(&format!("X: {}\n", fmt_link(&facts.x_url)));
    out.push_str(&format!(
        "DexScreener: {}\n",
        fmt_link(&facts.dexscreener_url)
    ));

    out.push_str("\n[Description]\n");
    out.push_str(&format!(
        "{}\n",
        facts
            .description
            .as_deref()
            .unwrap_or(PLACEHOLDER_DESCRIPTION)
    ));

    out
}

// ============================================================================
// FIELD FORMATTERS
// ============================================================================

fn fmt_price(value: Option<f64>) -> String {
    match value {
        Some(v) => format!("${:.8}", v),
        None => PLACEHOLDER_VALUE.to_string(),
    }
}

fn fmt_amount(value: Option<f64>) -> String {
    match value {
        Some(v) => format!("${:.2}", v),
        None => PLACEHOLDER_VALUE.to_string(),
    }
}

fn fmt_count(value: Option<u64>) -> String {
    match value {
        Some(v) => v.to_string(),
        None => PLACEHOLDER_VALUE.to_string(),
    }
}

fn fmt_link(value: &Option<String>) -> String {
    match value.as_deref() {
        Some(v) if !v.is_empty() => v.to_string(),
        _ => PLACEHOLDER_LINK.to_string(),
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn sparse_facts() -> TokenFacts {
        TokenFacts {
            name: "Unknown".to_string(),
            symbol: "?".to_string(),
            chain_id: "solana".to_string(),
            address: "6q5mPHT9zhqeYJ1Z8MGq1Y4xcWR2aTfSN4cVrArkqDUB".to_string(),
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
    fn rendering_is_deterministic() {
        let facts = sparse_facts();
        let first = render_summary(&facts, "TokenScope");
        let second = render_summary(&facts, "TokenScope");
        assert_eq!(first, second);
    }

    #[test]
    fn missing_fields_keep_labeled_lines() {
        let summary = render_summary(&sparse_facts(), "TokenScope");
        assert!(summary.contains("Price (USD): ?"));
        assert!(summary.contains("Holders: ?"));
        assert!(summary.contains("Website: not listed"));
        assert!(summary.contains("Telegram: not listed"));
        assert!(summary.contains("not provided"));
    }

    #[test]
    fn populated_fields_render_values() {
        let facts = TokenFacts {
            price_usd: Some(0.00123),
            volume_24h: Some(4500.0),
            holders: Some(321),
            website: Some("https://dog.example".to_string()),
            description: Some("A dog coin.".to_string()),
            ..sparse_facts()
        };
        let summary = render_summary(&facts, "TokenScope");
        assert!(summary.contains("Price (USD): $0.00123000"));
        assert!(summary.contains("24h Volume: $4500.00"));
        assert!(summary.contains("Holders: 321"));
        assert!(summary.contains("Website: https://dog.example"));
        assert!(summary.contains("A dog coin."));
    }

    #[test]
    fn sections_appear_in_fixed_order() {
        let summary = render_summary(&sparse_facts(), "TokenScope");
        let token_pos = summary.find("[Token]").unwrap();
        let market_pos = summary.find("[Market Data]").unwrap();
        let links_pos = summary.find("[Links]").unwrap();
        let desc_pos = summary.find("[Description]").unwrap();
        assert!(token_pos < market_pos && market_pos < links_pos && links_pos < desc_pos);
    }
}
