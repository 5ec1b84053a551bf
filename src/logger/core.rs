/// Core logging implementation with automatic filtering
///
/// Filtering rules:
/// 1. Errors are always shown
/// 2. Check against minimum log level threshold
/// 3. Debug level requires --debug-<module> flag for that tag
/// 4. Verbose level requires the --verbose flag
use super::config::{get_logger_config, is_debug_enabled_for_tag};
use super::levels::LogLevel;
use super::tags::LogTag;

/// Check if a log message should be displayed
pub fn should_log(tag: &LogTag, level: LogLevel) -> bool {
    let config = get_logger_config();

    // Rule 1: Errors always log
    if level == LogLevel::Error {
        return true;
    }

    // Rule 3: Debug level requires debug mode for that specific tag
    if level == LogLevel::Debug {
        return is_debug_enabled_for_tag(tag);
    }

    // Rule 4: Verbose requires the explicit --verbose flag
    if level == LogLevel::Verbose {
        return config.verbose;
    }

    // Rule 2: Check minimum level threshold
    level <= config.min_level
}

/// Internal logging function with automatic filtering
pub fn log_internal(tag: LogTag, level: LogLevel, message: &str) {
    if !should_log(&tag, level) {
        return;
    }

    super::format::format_and_log(tag, level, message);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn errors_always_pass_filter() {
        assert!(should_log(&LogTag::Api, LogLevel::Error));
    }

    #[test]
    fn debug_gated_by_tag_flag() {
        // No --debug-api flag in test args, so Debug must be filtered
        assert!(!should_log(&LogTag::Api, LogLevel::Debug));
    }
}
