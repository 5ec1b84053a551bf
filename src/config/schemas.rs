/// Configuration schemas - all config structures defined once with defaults
///
/// Each struct is defined using the config_struct! macro which provides:
/// - Single-source definition (no repetition)
/// - Embedded defaults
/// - Serde support
use crate::config_struct;

// ============================================================================
// SERVER CONFIGURATION
// ============================================================================

config_struct! {
    /// HTTP server configuration
    pub struct ServerConfig {
        host: String = "127.0.0.1".to_string(),
        port: u16 = 8080,
    }
}

// ============================================================================
// ANALYZER CONFIGURATION
// ============================================================================

config_struct! {
    /// Analysis pipeline configuration
    ///
    /// The suffix list and launchpad domain are product branding rules,
    /// kept as configuration rather than hard-coded checks.
    pub struct AnalyzerConfig {
        /// Display name used in report headers
        persona_name: String = "TokenScope".to_string(),

        /// Launchpad domain accepted for URL inputs (subdomains allowed)
        launchpad_domain: String = "anoncoin.it".to_string(),

        /// Accept a bare contract address as input
        accept_direct_address: bool = true,

        /// Accept a launchpad page URL as input
        accept_url: bool = true,

        /// Require addresses to end with one of allowed_suffixes
        enforce_suffix: bool = true,

        /// Vanity suffixes accepted when enforce_suffix is on
        /// (compared case-insensitively against the address tail)
        allowed_suffixes: Vec<String> = vec!["doge".to_string(), "DUB".to_string()],

        /// Timeout for launchpad page fetches (seconds)
        page_fetch_timeout_secs: u64 = 10,

        /// Upper bound on scraped description length (characters)
        description_max_chars: usize = 300,
    }
}

// ============================================================================
// EXTERNAL API CONFIGURATION
// ============================================================================

config_struct! {
    /// DexScreener market data API
    pub struct DexScreenerConfig {
        base_url: String = "https://api.dexscreener.com".to_string(),
        timeout_secs: u64 = 10,
        rate_limit_per_minute: usize = 300,
    }
}

config_struct! {
    /// Holder count API (Solana only, best-effort)
    pub struct HoldersConfig {
        enabled: bool = true,
        base_url: String = "https://public-api.solscan.io".to_string(),
        timeout_secs: u64 = 8,
        rate_limit_per_minute: usize = 60,
    }
}

config_struct! {
    /// Generative-text provider (OpenAI-compatible chat completions)
    ///
    /// An empty api_key degrades the risk narrative to a fixed
    /// unavailable notice; the pipeline still succeeds.
    pub struct LlmConfig {
        enabled: bool = true,
        api_key: String = String::new(),
        base_url: String = "https://api.openai.com/v1".to_string(),
        model: String = "gpt-4o-mini".to_string(),
        timeout_secs: u64 = 30,
        max_tokens: u32 = 700,
        temperature: f32 = 0.4,
        rate_limit_per_minute: usize = 60,
    }
}

config_struct! {
    /// Grouping for all outbound API settings
    pub struct ApisConfig {
        dexscreener: DexScreenerConfig = DexScreenerConfig::default(),
        holders: HoldersConfig = HoldersConfig::default(),
        llm: LlmConfig = LlmConfig::default(),
    }
}

// ============================================================================
// ROOT CONFIGURATION
// ============================================================================

config_struct! {
    /// Root configuration loaded from data/config.toml
    pub struct Config {
        server: ServerConfig = ServerConfig::default(),
        analyzer: AnalyzerConfig = AnalyzerConfig::default(),
        apis: ApisConfig = ApisConfig::default(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_cover_branding_gate() {
        let config = Config::default();
        assert_eq!(config.analyzer.launchpad_domain, "anoncoin.it");
        assert_eq!(config.analyzer.allowed_suffixes, vec!["doge", "DUB"]);
        assert!(config.analyzer.enforce_suffix);
        assert_eq!(config.server.port, 8080);
    }

    #[test]
    fn config_roundtrips_through_toml() {
        let config = Config::default();
        let toml_str = toml::to_string_pretty(&config).unwrap();
        assert!(toml_str.contains("[server]"));
        assert!(toml_str.contains("[analyzer]"));
        assert!(toml_str.contains("[apis.llm]"));

        let parsed: Config = toml::from_str(&toml_str).unwrap();
        assert_eq!(parsed.analyzer.launchpad_domain, config.analyzer.launchpad_domain);
    }

    #[test]
    fn partial_toml_fills_defaults() {
        let parsed: Config = toml::from_str("[server]\nport = 9000\n").unwrap();
        assert_eq!(parsed.server.port, 9000);
        assert_eq!(parsed.server.host, "127.0.0.1");
        assert!(parsed.apis.holders.enabled);
    }
}
