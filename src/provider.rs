use reqwest::Client;
use serde::Serialize;
use std::time::Duration;

use crate::error::ProviderError;
use crate::providers::http;
use crate::{GenerationRequest, ProviderConfig};

/// Result of one provider attempt: the generated story text, or why not.
pub type ProviderOutcome = Result<String, ProviderError>;

/// A remote text-generation service the pipeline may call.
///
/// Implementations build their own payload and parse their own response
/// shape. They report failures through [`ProviderOutcome`] and never panic on
/// bad input from the network.
#[async_trait::async_trait]
pub trait StoryProvider: Send + Sync + 'static {
    /// Stable identifier, e.g. `"huggingface"`.
    fn name(&self) -> &str;

    /// Human-readable label reported in results.
    fn label(&self) -> &str;

    /// False when the provider holds its sentinel credential. The pipeline
    /// skips unconfigured providers without calling [`attempt`](Self::attempt).
    fn is_configured(&self) -> bool;

    /// Why the provider is unconfigured, shown in the recorded attempt.
    fn unconfigured_hint(&self) -> String {
        "no real credential configured".to_string()
    }

    /// Ceiling for a single attempt.
    fn timeout(&self) -> Duration;

    /// Perform one generation call.
    async fn attempt(&self, request: &GenerationRequest) -> ProviderOutcome;
}

/// A provider that makes a single JSON POST per attempt.
///
/// Implementors only describe their wire format. Identity, the credential
/// check and the timeout all come from [`config`](Self::config), and every
/// implementor is a [`StoryProvider`].
pub trait HttpStoryProvider: Send + Sync + 'static {
    type Payload: Serialize + Send + Sync;

    fn config(&self) -> &ProviderConfig;

    fn client(&self) -> &Client;

    /// Auth and version headers sent with every request.
    fn headers(&self) -> Vec<(&'static str, String)>;

    fn convert_request(&self, request: &GenerationRequest) -> Self::Payload;

    /// Pull the story out of a 2xx body.
    fn extract_text(body: &[u8]) -> ProviderOutcome;
}

#[async_trait::async_trait]
impl<T: HttpStoryProvider> StoryProvider for T {
    fn name(&self) -> &str {
        self.config().kind.id()
    }

    fn label(&self) -> &str {
        self.config().kind.label()
    }

    fn is_configured(&self) -> bool {
        self.config().is_configured()
    }

    fn unconfigured_hint(&self) -> String {
        self.config().kind.credential_hint().to_string()
    }

    fn timeout(&self) -> Duration {
        self.config().timeout
    }

    async fn attempt(&self, request: &GenerationRequest) -> ProviderOutcome {
        let config = self.config();
        let payload = self.convert_request(request);
        let headers = self.headers();

        let body = http::post_json(
            self.client(),
            &config.endpoint,
            &headers,
            &payload,
            config.timeout,
        )
        .await?;
        T::extract_text(&body)
    }
}
