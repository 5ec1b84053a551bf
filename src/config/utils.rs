use super::schemas::Config;
/// Configuration utilities - loading and access helpers
///
/// - Loading configuration from disk at startup
/// - Thread-safe access helpers
/// - Environment override for the LLM credential
use once_cell::sync::OnceCell;
use std::sync::RwLock;

/// Global configuration instance
///
/// Single source of truth for all configuration values.
/// Access it using the helper functions below.
pub static CONFIG: OnceCell<RwLock<Config>> = OnceCell::new();

/// Default configuration file path
pub const CONFIG_FILE_PATH: &str = "data/config.toml";

/// Environment variable that overrides the configured LLM API key
pub const LLM_API_KEY_ENV: &str = "TOKENSCOPE_LLM_API_KEY";

/// Load configuration from disk and initialize the global CONFIG
///
/// Should be called once at startup. If the config file doesn't exist,
/// defaults from the schema definitions are used.
pub fn load_config() -> Result<(), String> {
    load_config_from_path(CONFIG_FILE_PATH)
}

/// Load configuration from a specific file path
pub fn load_config_from_path(path: &str) -> Result<(), String> {
    let mut config = if std::path::Path::new(path).exists() {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| format!("Failed to read config file '{}': {}", path, e))?;

        toml::from_str::<Config>(&contents)
            .map_err(|e| format!("Failed to parse config file '{}': {}", path, e))?
    } else {
        eprintln!("⚠️  Config file '{}' not found, using default values", path);
        Config::default()
    };

    apply_env_overrides(&mut config);

    CONFIG
        .set(RwLock::new(config))
        .map_err(|_| "Config already initialized".to_string())?;

    Ok(())
}

/// Apply environment variable overrides
///
/// Credentials stay out of checked-in TOML; the key can arrive via env.
fn apply_env_overrides(config: &mut Config) {
    if let Ok(key) = std::env::var(LLM_API_KEY_ENV) {
        if !key.trim().is_empty() {
            config.apis.llm.api_key = key;
        }
    }
}

/// Execute a function with read access to the configuration
///
/// This is the recommended way to read configuration values.
///
/// # Example
/// ```ignore
/// let port = with_config(|cfg| cfg.server.port);
/// ```
pub fn with_config<F, R>(f: F) -> R
where
    F: FnOnce(&Config) -> R,
{
    let config_lock = CONFIG
        .get()
        .expect("Config not initialized. Call load_config() first.");

    let config = config_lock
        .read()
        .expect("Failed to acquire config read lock");

    f(&config)
}

/// Get a clone of the entire configuration
///
/// Useful when config values must be held across await points.
pub fn get_config_clone() -> Config {
    with_config(|cfg| cfg.clone())
}

/// Check if configuration has been initialized
pub fn is_config_initialized() -> bool {
    CONFIG.get().is_some()
}

/// Initialize the global CONFIG with explicit values (tests only)
#[cfg(test)]
pub fn init_config_for_tests(config: Config) {
    let _ = CONFIG.set(RwLock::new(config));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn with_config_reads_initialized_values() {
        init_config_for_tests(Config::default());
        let domain = with_config(|cfg| cfg.analyzer.launchpad_domain.clone());
        assert_eq!(domain, "anoncoin.it");
        assert!(is_config_initialized());
    }
}
