//! Error types for the engine binary.
//!
//! [`EngineError`] wraps every failure that stops the engine. Problems with
//! a single input line are reported back on stdout and never reach here.

/// Top-level error for the engine binary.
#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    /// Configuration loading failed.
    #[error("config error: {source}")]
    Config {
        /// The underlying config error.
        #[from]
        source: furrow_core::ConfigError,
    },

    /// The session could not be started.
    #[error("session error: {source}")]
    Session {
        /// The underlying session error.
        #[from]
        source: furrow_core::SessionError,
    },

    /// An output message could not be encoded.
    #[error("JSON error: {source}")]
    Json {
        /// The underlying serde error.
        #[from]
        source: serde_json::Error,
    },

    /// Reading stdin or writing stdout failed.
    #[error("I/O error: {source}")]
    Io {
        /// The underlying I/O error.
        #[from]
        source: std::io::Error,
    },
}
