use super::types::{ChatCompletionRequest, ChatCompletionResponse};
use crate::provider::{HttpStoryProvider, ProviderOutcome};
use crate::providers::http;
use crate::types::Message;
use crate::{Error, GenerationRequest, ProviderConfig};
use reqwest::Client;

/// Sampling temperature used for every story request.
const TEMPERATURE: f32 = 0.8;

/// OpenAI chat completions provider.
pub struct OpenAIProvider {
    client: Client,
    config: ProviderConfig,
}

impl OpenAIProvider {
    /// Create a new OpenAI provider.
    pub fn new(config: ProviderConfig) -> Result<Self, Error> {
        let client = http::build_client(config.timeout)?;
        Ok(Self { client, config })
    }
}

impl HttpStoryProvider for OpenAIProvider {
    type Payload = ChatCompletionRequest;

    fn config(&self) -> &ProviderConfig {
        &self.config
    }

    fn client(&self) -> &Client {
        &self.client
    }

    fn headers(&self) -> Vec<(&'static str, String)> {
        vec![("Authorization", format!("Bearer {}", self.config.credential))]
    }

    /// Convert a generation request to the chat completions format.
    fn convert_request(&self, request: &GenerationRequest) -> ChatCompletionRequest {
        ChatCompletionRequest {
            model: self.config.model_name().unwrap_or_default().to_string(),
            messages: vec![
                Message::system(request.genre().system_message()),
                Message::user(request.prompt()),
            ],
            max_tokens: Some(request.max_length()),
            temperature: Some(TEMPERATURE),
        }
    }

    /// Pull `choices[0].message.content` out of a 2xx body.
    fn extract_text(body: &[u8]) -> ProviderOutcome {
        let response: ChatCompletionResponse = serde_json::from_slice(body)?;
        let content = response
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content);
        http::non_empty(content, "choices[0].message.content")
    }
}
