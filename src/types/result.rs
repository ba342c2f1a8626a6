use crate::error::ProviderError;

/// One provider that was tried and did not produce the story.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProviderAttempt {
    /// Human-readable provider label.
    pub provider: String,
    pub error: ProviderError,
}

/// Outcome of a generation call.
///
/// `text` is present iff `succeeded`, `error_detail` iff not.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationResult {
    succeeded: bool,
    text: Option<String>,
    provider_label: String,
    error_detail: Option<String>,
    attempts: Vec<ProviderAttempt>,
}

impl GenerationResult {
    pub fn success(provider_label: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            succeeded: true,
            text: Some(text.into()),
            provider_label: provider_label.into(),
            error_detail: None,
            attempts: Vec::new(),
        }
    }

    pub fn failure(provider_label: impl Into<String>, error: &ProviderError) -> Self {
        Self {
            succeeded: false,
            text: None,
            provider_label: provider_label.into(),
            error_detail: Some(error.to_string()),
            attempts: Vec::new(),
        }
    }

    /// Attach the providers that failed before this result was produced.
    pub fn with_attempts(mut self, attempts: Vec<ProviderAttempt>) -> Self {
        self.attempts = attempts;
        self
    }

    pub fn succeeded(&self) -> bool {
        self.succeeded
    }

    pub fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }

    pub fn provider_label(&self) -> &str {
        &self.provider_label
    }

    pub fn error_detail(&self) -> Option<&str> {
        self.error_detail.as_deref()
    }

    pub fn attempts(&self) -> &[ProviderAttempt] {
        &self.attempts
    }
}
