//! Error types for foreman-llm

use thiserror::Error;

/// LLM construction error type
#[derive(Debug, Error)]
pub enum Error {
    /// Required credential variable is absent or empty.
    ///
    /// The message carries the exact variable name so an operator can fix
    /// the environment without reading source.
    #[error("{var} environment variable is required")]
    MissingCredential {
        /// Name of the credential variable that failed to resolve
        var: String,
    },

    /// Provider name outside the supported set
    #[error("unsupported LLM provider: {0}. Supported providers: openai, gemini, huggingface")]
    UnsupportedProvider(String),
}

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;
