use super::types::{AnthropicContentBlock, AnthropicRequest, AnthropicResponse};
use crate::provider::{HttpStoryProvider, ProviderOutcome};
use crate::providers::http;
use crate::types::Message;
use crate::{Error, GenerationRequest, ProviderConfig};
use reqwest::Client;

const ANTHROPIC_VERSION: &str = "2023-06-01";
const TEMPERATURE: f32 = 0.8;

/// Anthropic Claude provider over the public messages API.
pub struct AnthropicProvider {
    client: Client,
    config: ProviderConfig,
}

impl AnthropicProvider {
    pub fn new(config: ProviderConfig) -> Result<Self, Error> {
        let client = http::build_client(config.timeout)?;
        Ok(Self { client, config })
    }
}

impl HttpStoryProvider for AnthropicProvider {
    type Payload = AnthropicRequest;

    fn config(&self) -> &ProviderConfig {
        &self.config
    }

    fn client(&self) -> &Client {
        &self.client
    }

    fn headers(&self) -> Vec<(&'static str, String)> {
        vec![
            ("x-api-key", self.config.credential.clone()),
            ("anthropic-version", ANTHROPIC_VERSION.to_string()),
        ]
    }

    fn convert_request(&self, request: &GenerationRequest) -> AnthropicRequest {
        AnthropicRequest {
            model: self.config.model_name().unwrap_or_default().to_string(),
            messages: vec![Message::user(request.prompt())],
            max_tokens: request.max_length(),
            system: Some(request.genre().system_message()),
            temperature: Some(TEMPERATURE),
        }
    }

    /// Text of the first `text` content block.
    fn extract_text(body: &[u8]) -> ProviderOutcome {
        let response: AnthropicResponse = serde_json::from_slice(body)?;
        let text = response.content.into_iter().find_map(|block| match block {
            AnthropicContentBlock::Text { text } => Some(text),
            AnthropicContentBlock::Other => None,
        });
        http::non_empty(text, "content[].text")
    }
}
