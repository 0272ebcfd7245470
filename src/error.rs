//! Application-wide error types.
//!
//! Each subsystem defines its own `thiserror` enum (catalog, recommend,
//! pod, session); this module aggregates them for callers that drive the
//! whole flow. The CLI layer uses `anyhow` on top for convenient
//! propagation.

/// Application-wide result type.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level application error.
///
/// Aggregates errors from all subsystems for unified handling.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// File I/O error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Catalog search error
    #[error("Catalog error: {0}")]
    Catalog(#[from] crate::catalog::CatalogError),

    /// LLM backend error
    #[error("Recommendation error: {0}")]
    Recommend(#[from] crate::recommend::RecommendError),

    /// Pod storage error
    #[error("Pod error: {0}")]
    Pod(#[from] crate::pod::PodError),

    /// Recommendation cycle error
    #[error("Cycle error: {0}")]
    Cycle(#[from] crate::session::CycleError),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] crate::config::ConfigError),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pod::PodError;
    use crate::session::CycleError;

    #[test]
    fn test_error_display_disambiguates_failure_points() {
        // Every terminal failure reads distinctly enough to tell the steps apart
        let messages = [
            Error::from(CycleError::NoSongsSelected).to_string(),
            Error::from(CycleError::CycleInProgress).to_string(),
            Error::from(CycleError::EmptyRecommendation).to_string(),
            Error::from(PodError::NoStorageFound("webid".to_string())).to_string(),
            Error::from(PodError::WriteFailed("HTTP 500".to_string())).to_string(),
        ];
        for (i, a) in messages.iter().enumerate() {
            for b in &messages[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn test_subsystem_errors_convert() {
        let err: Error = crate::recommend::RecommendError::Malformed("<html>".to_string()).into();
        assert!(err.to_string().contains("malformed"));
    }
}
