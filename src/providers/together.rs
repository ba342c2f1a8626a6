//! Together AI inference endpoint.

use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::provider::{HttpStoryProvider, ProviderOutcome};
use crate::providers::http;
use crate::{Error, GenerationRequest, ProviderConfig};

#[derive(Debug, Clone, Serialize)]
pub struct InferenceRequest {
    pub model: String,
    pub prompt: String,
    pub max_tokens: u32,
    pub temperature: f32,
}

/// The legacy endpoint nests choices under `output`; the completions-style
/// reply has them at the top level. Either is accepted.
#[derive(Debug, Clone, Deserialize)]
pub struct InferenceResponse {
    #[serde(default)]
    pub output: Option<InferenceOutput>,
    #[serde(default)]
    pub choices: Option<Vec<InferenceChoice>>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct InferenceOutput {
    pub choices: Vec<InferenceChoice>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct InferenceChoice {
    #[serde(default)]
    pub text: Option<String>,
}

pub struct TogetherProvider {
    client: Client,
    config: ProviderConfig,
}

impl TogetherProvider {
    pub fn new(config: ProviderConfig) -> Result<Self, Error> {
        let client = http::build_client(config.timeout)?;
        Ok(Self { client, config })
    }
}

impl HttpStoryProvider for TogetherProvider {
    type Payload = InferenceRequest;

    fn config(&self) -> &ProviderConfig {
        &self.config
    }

    fn client(&self) -> &Client {
        &self.client
    }

    fn headers(&self) -> Vec<(&'static str, String)> {
        vec![("Authorization", format!("Bearer {}", self.config.credential))]
    }

    fn convert_request(&self, request: &GenerationRequest) -> InferenceRequest {
        InferenceRequest {
            model: self.config.model_name().unwrap_or_default().to_string(),
            prompt: request.prefixed_prompt(),
            max_tokens: request.max_length(),
            temperature: 0.8,
        }
    }

    fn extract_text(body: &[u8]) -> ProviderOutcome {
        let response: InferenceResponse = serde_json::from_slice(body)?;
        let choices = response
            .output
            .map(|output| output.choices)
            .or(response.choices)
            .unwrap_or_default();
        let text = choices.into_iter().next().and_then(|choice| choice.text);
        http::non_empty(text, "choices[0].text")
    }
}
