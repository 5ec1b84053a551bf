/// Log line formatting and console output
///
/// Format: `HH:MM:SS.mmm LEVEL [TAG] message`
/// Errors and warnings go to stderr, everything else to stdout.
use super::levels::LogLevel;
use super::tags::LogTag;
use colored::Colorize;

/// Format a log line and write it to the console
pub fn format_and_log(tag: LogTag, level: LogLevel, message: &str) {
    let timestamp = chrono::Local::now().format("%H:%M:%S%.3f").to_string();

    let level_str = match level {
        LogLevel::Error => level.as_str().red().bold(),
        LogLevel::Warning => level.as_str().yellow(),
        LogLevel::Info => level.as_str().green(),
        LogLevel::Debug => level.as_str().cyan(),
        LogLevel::Verbose => level.as_str().dimmed(),
    };

    let line = format!(
        "{} {} [{}] {}",
        timestamp.as_str().dimmed(),
        level_str,
        tag.as_str().blue(),
        message
    );

    match level {
        LogLevel::Error | LogLevel::Warning => eprintln!("{}", line),
        _ => println!("{}", line),
    }
}
