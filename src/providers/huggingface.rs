//! Hugging Face Inference API text generation.

use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::provider::{HttpStoryProvider, ProviderOutcome};
use crate::providers::http;
use crate::{Error, GenerationRequest, ProviderConfig};

#[derive(Debug, Clone, Serialize)]
pub struct TextGenerationRequest {
    pub inputs: String,
    pub parameters: TextGenerationParameters,
}

#[derive(Debug, Clone, Serialize)]
pub struct TextGenerationParameters {
    pub max_length: u32,
    pub temperature: f32,
    pub top_p: f32,
    pub do_sample: bool,
    pub return_full_text: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GeneratedText {
    #[serde(default)]
    pub generated_text: Option<String>,
}

/// Hosted GPT-2 on the Hugging Face inference endpoint.
pub struct HuggingFaceProvider {
    client: Client,
    config: ProviderConfig,
}

impl HuggingFaceProvider {
    pub fn new(config: ProviderConfig) -> Result<Self, Error> {
        let client = http::build_client(config.timeout)?;
        Ok(Self { client, config })
    }
}

impl HttpStoryProvider for HuggingFaceProvider {
    type Payload = TextGenerationRequest;

    fn config(&self) -> &ProviderConfig {
        &self.config
    }

    fn client(&self) -> &Client {
        &self.client
    }

    fn headers(&self) -> Vec<(&'static str, String)> {
        vec![("Authorization", format!("Bearer {}", self.config.credential))]
    }

    fn convert_request(&self, request: &GenerationRequest) -> TextGenerationRequest {
        TextGenerationRequest {
            inputs: request.prefixed_prompt(),
            parameters: TextGenerationParameters {
                max_length: request.max_length(),
                temperature: 0.8,
                top_p: 0.95,
                do_sample: true,
                return_full_text: false,
            },
        }
    }

    /// The endpoint answers with `[{"generated_text": ...}]`.
    fn extract_text(body: &[u8]) -> ProviderOutcome {
        let generations: Vec<GeneratedText> = serde_json::from_slice(body)?;
        let text = generations
            .into_iter()
            .next()
            .and_then(|generation| generation.generated_text);
        http::non_empty(text, "[0].generated_text")
    }
}
