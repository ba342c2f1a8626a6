//! Replicate predictions API.

use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::provider::{HttpStoryProvider, ProviderOutcome};
use crate::providers::http;
use crate::{Error, GenerationRequest, ProviderConfig};

#[derive(Debug, Clone, Serialize)]
pub struct PredictionRequest {
    pub version: String,
    pub input: PredictionInput,
}

#[derive(Debug, Clone, Serialize)]
pub struct PredictionInput {
    pub prompt: String,
    pub max_length: u32,
    pub temperature: f32,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PredictionResponse {
    #[serde(default)]
    pub output: Option<PredictionOutput>,
}

/// Language models on Replicate emit either one string or a list of
/// streamed fragments.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum PredictionOutput {
    Text(String),
    Fragments(Vec<String>),
}

impl PredictionOutput {
    fn into_text(self) -> String {
        match self {
            PredictionOutput::Text(text) => text,
            PredictionOutput::Fragments(parts) => parts.concat(),
        }
    }
}

pub struct ReplicateProvider {
    client: Client,
    config: ProviderConfig,
}

impl ReplicateProvider {
    pub fn new(config: ProviderConfig) -> Result<Self, Error> {
        let client = http::build_client(config.timeout)?;
        Ok(Self { client, config })
    }
}

impl HttpStoryProvider for ReplicateProvider {
    type Payload = PredictionRequest;

    fn config(&self) -> &ProviderConfig {
        &self.config
    }

    fn client(&self) -> &Client {
        &self.client
    }

    fn headers(&self) -> Vec<(&'static str, String)> {
        vec![("Authorization", format!("Token {}", self.config.credential))]
    }

    fn convert_request(&self, request: &GenerationRequest) -> PredictionRequest {
        PredictionRequest {
            version: self.config.model_name().unwrap_or_default().to_string(),
            input: PredictionInput {
                prompt: request.prefixed_prompt(),
                max_length: request.max_length(),
                temperature: 0.8,
            },
        }
    }

    fn extract_text(body: &[u8]) -> ProviderOutcome {
        let response: PredictionResponse = serde_json::from_slice(body)?;
        http::non_empty(response.output.map(PredictionOutput::into_text), "output")
    }
}
