use std::sync::Arc;

use tokenscope::{
    analyzer::Analyzer,
    arguments,
    config::{self, CONFIG_FILE_PATH},
    logger::{self, LogTag},
    webserver,
};

/// Main entry point for tokenscope
///
/// Startup order matters: logger first (so config loading can log),
/// then configuration, then the pipeline and webserver.
#[tokio::main]
async fn main() {
    logger::init();

    if arguments::is_help_requested() {
        arguments::print_help();
        std::process::exit(0);
    }

    logger::info(LogTag::System, "🚀 tokenscope starting up...");

    let config_path = arguments::get_config_path_override()
        .unwrap_or_else(|| CONFIG_FILE_PATH.to_string());

    if let Err(e) = config::load_config_from_path(&config_path) {
        logger::error(LogTag::Config, &format!("❌ {}", e));
        std::process::exit(1);
    }

    let analyzer = match Analyzer::from_config(&config::get_config_clone()) {
        Ok(analyzer) => analyzer,
        Err(e) => {
            logger::error(
                LogTag::System,
                &format!("❌ Failed to build analysis pipeline: {}", e),
            );
            std::process::exit(1);
        }
    };

    let state = Arc::new(webserver::state::AppState::new(analyzer));

    // Ctrl-C triggers the graceful shutdown path
    tokio::spawn(async {
        if tokio::signal::ctrl_c().await.is_ok() {
            logger::info(LogTag::System, "Interrupt received, shutting down");
            webserver::shutdown();
        }
    });

    match webserver::start_server(state).await {
        Ok(()) => logger::info(LogTag::System, "✅ tokenscope stopped"),
        Err(e) => {
            logger::error(LogTag::System, &format!("❌ tokenscope failed: {}", e));
            std::process::exit(1);
        }
    }
}
