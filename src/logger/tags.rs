/// Log tags for per-module filtering
///
/// Each tag maps to a `--debug-<key>` command-line flag.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LogTag {
    System,
    Config,
    Webserver,
    Api,
    Analyzer,
    Llm,
}

impl LogTag {
    /// Get display name for log output
    pub fn as_str(&self) -> &'static str {
        match self {
            LogTag::System => "SYSTEM",
            LogTag::Config => "CONFIG",
            LogTag::Webserver => "WEBSERVER",
            LogTag::Api => "API",
            LogTag::Analyzer => "ANALYZER",
            LogTag::Llm => "LLM",
        }
    }

    /// Get the key used in --debug-<key> flags
    pub fn to_debug_key(&self) -> &'static str {
        match self {
            LogTag::System => "system",
            LogTag::Config => "config",
            LogTag::Webserver => "webserver",
            LogTag::Api => "api",
            LogTag::Analyzer => "analyzer",
            LogTag::Llm => "llm",
        }
    }

    /// All tags, for flag scanning at startup
    pub fn all() -> &'static [LogTag] {
        &[
            LogTag::System,
            LogTag::Config,
            LogTag::Webserver,
            LogTag::Api,
            LogTag::Analyzer,
            LogTag::Llm,
        ]
    }
}

impl std::fmt::Display for LogTag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
