/// Centralized command-line argument handling
///
/// Features:
/// - Thread-safe CMD_ARGS storage (overridable in tests)
/// - Flag and value lookup helpers
/// - Help text
use once_cell::sync::Lazy;
use std::env;
use std::sync::Mutex;

/// Global command-line arguments storage
pub static CMD_ARGS: Lazy<Mutex<Vec<String>>> = Lazy::new(|| Mutex::new(env::args().collect()));

/// Sets the global command-line arguments
/// Used by tests to override the default env::args() collection
pub fn set_cmd_args(args: Vec<String>) {
    if let Ok(mut cmd_args) = CMD_ARGS.lock() {
        *cmd_args = args;
    }
}

/// Gets a copy of the current command-line arguments
pub fn get_cmd_args() -> Vec<String> {
    match CMD_ARGS.lock() {
        Ok(args) => args.clone(),
        Err(_) => env::args().collect(),
    }
}

/// Checks if a specific argument is present in the command line
pub fn has_arg(arg: &str) -> bool {
    get_cmd_args().iter().any(|a| a == arg)
}

/// Gets the value of a command-line argument that follows a flag
/// Returns None if the flag is not found or has no value
pub fn get_arg_value(flag: &str) -> Option<String> {
    let args = get_cmd_args();
    for (i, arg) in args.iter().enumerate() {
        if arg == flag && i + 1 < args.len() {
            return Some(args[i + 1].clone());
        }
    }
    None
}

/// Checks if help was requested
pub fn is_help_requested() -> bool {
    has_arg("--help") || has_arg("-h")
}

/// Config file path override (--config <path>)
pub fn get_config_path_override() -> Option<String> {
    get_arg_value("--config")
}

/// Listening port override (--port <port>)
pub fn get_port_override() -> Option<u16> {
    get_arg_value("--port").and_then(|v| v.parse::<u16>().ok())
}

/// Print usage information
pub fn print_help() {
    println!("tokenscope - token analysis backend");
    println!();
    println!("USAGE:");
    println!("    tokenscope [OPTIONS]");
    println!();
    println!("OPTIONS:");
    println!("    --config <path>      Path to config.toml (default: data/config.toml)");
    println!("    --port <port>        Override the configured listening port");
    println!("    --quiet              Only show warnings and errors");
    println!("    --debug              Show debug output for all modules");
    println!("    --debug-<module>     Show debug output for one module");
    println!("                         (system, config, webserver, api, analyzer, llm)");
    println!("    --verbose            Show all output including traces");
    println!("    -h, --help           Print this help text");
}
