/// Logger runtime configuration
///
/// Populated once at startup from command-line arguments and kept in a
/// global cell. Tags with `--debug-<key>` enabled emit Debug-level logs;
/// `--verbose` lowers the threshold for everything.
use super::levels::LogLevel;
use super::tags::LogTag;
use once_cell::sync::Lazy;
use std::collections::HashSet;
use std::sync::RwLock;

#[derive(Debug, Clone)]
pub struct LoggerConfig {
    /// Minimum level shown (errors bypass this)
    pub min_level: LogLevel,
    /// Tags with --debug-<key> enabled
    pub debug_tags: HashSet<&'static str>,
    /// Global --verbose flag
    pub verbose: bool,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            min_level: LogLevel::Info,
            debug_tags: HashSet::new(),
            verbose: false,
        }
    }
}

static LOGGER_CONFIG: Lazy<RwLock<LoggerConfig>> =
    Lazy::new(|| RwLock::new(LoggerConfig::default()));

/// Scan command-line arguments and configure the logger
pub fn init_from_args() {
    let args = crate::arguments::get_cmd_args();

    let mut config = LoggerConfig::default();

    if args.iter().any(|a| a == "--verbose") {
        config.verbose = true;
        config.min_level = LogLevel::Verbose;
    } else if args.iter().any(|a| a == "--debug") {
        config.min_level = LogLevel::Debug;
    } else if args.iter().any(|a| a == "--quiet") {
        config.min_level = LogLevel::Warning;
    }

    for tag in LogTag::all() {
        let flag = format!("--debug-{}", tag.to_debug_key());
        if args.iter().any(|a| *a == flag) {
            config.debug_tags.insert(tag.to_debug_key());
        }
    }

    set_logger_config(config);
}

pub fn get_logger_config() -> LoggerConfig {
    LOGGER_CONFIG
        .read()
        .map(|c| c.clone())
        .unwrap_or_default()
}

pub fn set_logger_config(config: LoggerConfig) {
    if let Ok(mut current) = LOGGER_CONFIG.write() {
        *current = config;
    }
}

/// Check if debug logging is enabled for a specific tag
pub fn is_debug_enabled_for_tag(tag: &LogTag) -> bool {
    let config = get_logger_config();
    config.min_level >= LogLevel::Debug || config.debug_tags.contains(tag.to_debug_key())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_threshold_is_info() {
        let config = LoggerConfig::default();
        assert_eq!(config.min_level, LogLevel::Info);
        assert!(!config.verbose);
        assert!(config.debug_tags.is_empty());
    }
}
