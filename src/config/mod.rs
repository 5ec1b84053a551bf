/// Configuration system
///
/// TOML-backed configuration with embedded defaults, loaded once at
/// startup into a global cell and read through `with_config`.
pub mod macros;
pub mod schemas;
pub mod utils;

pub use schemas::{
    AnalyzerConfig, ApisConfig, Config, DexScreenerConfig, HoldersConfig, LlmConfig, ServerConfig,
};
pub use utils::{
    get_config_clone, is_config_initialized, load_config, load_config_from_path, with_config,
    CONFIG, CONFIG_FILE_PATH, LLM_API_KEY_ENV,
};

#[cfg(test)]
pub use utils::init_config_for_tests;
