use std::time::Duration;
use thiserror::Error;

/// Errors that can occur when building or driving the generation pipeline.
///
/// None of these are produced by `GenerationPipeline::generate`, which always
/// answers with text. They surface from configuration, request validation and
/// provider construction.
#[derive(Error, Debug)]
pub enum Error {
    #[error("HTTP client error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("Invalid request: {0}")]
    InvalidRequest(String),
}

impl Error {
    pub fn config(message: impl Into<String>) -> Self {
        Error::Config(message.into())
    }

    pub fn invalid_request(message: impl Into<String>) -> Self {
        Error::InvalidRequest(message.into())
    }
}

/// Why a single provider attempt did not produce a story.
///
/// These are values, not faults: the pipeline records them and moves on to
/// the next provider.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ProviderError {
    #[error("Demo token - {hint}")]
    Unconfigured { provider: String, hint: String },

    #[error("Transport error: {0}")]
    Transport(String),

    #[error("Timed out after {0:?}")]
    Timeout(Duration),

    #[error("API Error: {status}")]
    Status { status: u16, body: String },

    #[error("Unexpected response body: {0}")]
    Parse(String),
}

impl ProviderError {
    pub fn unconfigured(provider: impl Into<String>, hint: impl Into<String>) -> Self {
        ProviderError::Unconfigured {
            provider: provider.into(),
            hint: hint.into(),
        }
    }

    pub fn transport(message: impl Into<String>) -> Self {
        ProviderError::Transport(message.into())
    }

    pub fn parse(message: impl Into<String>) -> Self {
        ProviderError::Parse(message.into())
    }

    /// True when the provider was skipped without any network I/O.
    pub fn is_unconfigured(&self) -> bool {
        matches!(self, ProviderError::Unconfigured { .. })
    }
}

impl From<reqwest::Error> for ProviderError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            ProviderError::Parse(err.to_string())
        } else {
            ProviderError::Transport(err.to_string())
        }
    }
}

impl From<serde_json::Error> for ProviderError {
    fn from(err: serde_json::Error) -> Self {
        ProviderError::Parse(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_creation() {
        let error = Error::config("missing endpoint");
        assert!(error.to_string().contains("Invalid configuration"));
        assert!(error.to_string().contains("missing endpoint"));

        let error = Error::invalid_request("prompt must not be empty");
        assert!(error.to_string().starts_with("Invalid request"));
    }

    #[test]
    fn test_provider_error_details() {
        let err = ProviderError::unconfigured("huggingface", "set HUGGINGFACE_TOKEN");
        assert!(err.is_unconfigured());
        assert_eq!(err.to_string(), "Demo token - set HUGGINGFACE_TOKEN");

        let err = ProviderError::Status {
            status: 503,
            body: "loading".to_string(),
        };
        assert!(!err.is_unconfigured());
        assert_eq!(err.to_string(), "API Error: 503");
    }

    #[test]
    fn test_json_error_becomes_parse_failure() {
        let json_err = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
        let err: ProviderError = json_err.into();
        assert!(matches!(err, ProviderError::Parse(_)));
    }
}
