/// Error handling for the analysis pipeline
///
/// One variant per HTTP outcome class. Best-effort stages (holder count,
/// risk narrative) never produce these; their failures are absorbed at
/// the call site with a degraded value instead.

// =============================================================================
// MAIN ERROR TYPE
// =============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnalyzeError {
    /// Bad or missing caller input (address, URL, suffix) -> 400
    Validation(String),

    /// No address on a scraped page, or no trading pairs -> 404
    NotFound(String),

    /// Page fetch or market-data call failed upstream -> 502
    Upstream(String),

    /// Unexpected internal failure -> 500
    Internal(String),
}

impl AnalyzeError {
    /// HTTP status code this error maps to
    pub fn status_code(&self) -> u16 {
        match self {
            AnalyzeError::Validation(_) => 400,
            AnalyzeError::NotFound(_) => 404,
            AnalyzeError::Upstream(_) => 502,
            AnalyzeError::Internal(_) => 500,
        }
    }

    /// Short machine-readable code for response envelopes
    pub fn code(&self) -> &'static str {
        match self {
            AnalyzeError::Validation(_) => "VALIDATION_ERROR",
            AnalyzeError::NotFound(_) => "NOT_FOUND",
            AnalyzeError::Upstream(_) => "UPSTREAM_ERROR",
            AnalyzeError::Internal(_) => "INTERNAL_ERROR",
        }
    }

    /// User-visible message (no internals, no stack traces)
    pub fn message(&self) -> &str {
        match self {
            AnalyzeError::Validation(msg)
            | AnalyzeError::NotFound(msg)
            | AnalyzeError::Upstream(msg)
            | AnalyzeError::Internal(msg) => msg,
        }
    }
}

impl std::fmt::Display for AnalyzeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AnalyzeError::Validation(msg) => write!(f, "Validation error: {}", msg),
            AnalyzeError::NotFound(msg) => write!(f, "Not found: {}", msg),
            AnalyzeError::Upstream(msg) => write!(f, "Upstream error: {}", msg),
            AnalyzeError::Internal(msg) => write!(f, "Internal error: {}", msg),
        }
    }
}

impl std::error::Error for AnalyzeError {}

// =============================================================================
// CONVERSIONS
// =============================================================================

impl From<reqwest::Error> for AnalyzeError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            AnalyzeError::Upstream(format!("Upstream request timed out: {}", err))
        } else {
            AnalyzeError::Upstream(format!("Upstream request failed: {}", err))
        }
    }
}

impl From<serde_json::Error> for AnalyzeError {
    fn from(err: serde_json::Error) -> Self {
        AnalyzeError::Upstream(format!("Malformed upstream response: {}", err))
    }
}

/// Convenience alias used throughout the pipeline
pub type AnalyzeResult<T> = Result<T, AnalyzeError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_codes_match_taxonomy() {
        assert_eq!(AnalyzeError::Validation("x".into()).status_code(), 400);
        assert_eq!(AnalyzeError::NotFound("x".into()).status_code(), 404);
        assert_eq!(AnalyzeError::Upstream("x".into()).status_code(), 502);
        assert_eq!(AnalyzeError::Internal("x".into()).status_code(), 500);
    }

    #[test]
    fn display_prefixes_class() {
        let err = AnalyzeError::NotFound("no trading pairs".into());
        assert_eq!(err.to_string(), "Not found: no trading pairs");
        assert_eq!(err.message(), "no trading pairs");
    }
}
