use std::env;
use std::fmt;
use std::time::Duration;

use crate::Error;

/// Per-call ceiling applied to every provider unless overridden.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Environment variable overriding [`DEFAULT_TIMEOUT`], in whole seconds.
pub const TIMEOUT_ENV_VAR: &str = "STORY_PROVIDER_TIMEOUT_SECS";

/// Supported remote text-generation services.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProviderKind {
    OpenAI,
    Anthropic,
    HuggingFace,
    Replicate,
    Together,
}

impl ProviderKind {
    /// Premium chat models first, free inference hosts after.
    pub const DEFAULT_PRIORITY: [ProviderKind; 5] = [
        ProviderKind::OpenAI,
        ProviderKind::Anthropic,
        ProviderKind::HuggingFace,
        ProviderKind::Replicate,
        ProviderKind::Together,
    ];

    /// Stable identifier.
    pub fn id(&self) -> &'static str {
        match self {
            ProviderKind::OpenAI => "openai",
            ProviderKind::Anthropic => "anthropic",
            ProviderKind::HuggingFace => "huggingface",
            ProviderKind::Replicate => "replicate",
            ProviderKind::Together => "together",
        }
    }

    /// Human-readable label reported in results.
    pub fn label(&self) -> &'static str {
        match self {
            ProviderKind::OpenAI => "OpenAI",
            ProviderKind::Anthropic => "Anthropic",
            ProviderKind::HuggingFace => "Hugging Face",
            ProviderKind::Replicate => "Replicate",
            ProviderKind::Together => "Together AI",
        }
    }

    pub fn default_endpoint(&self) -> &'static str {
        match self {
            ProviderKind::OpenAI => "https://api.openai.com/v1/chat/completions",
            ProviderKind::Anthropic => "https://api.anthropic.com/v1/messages",
            ProviderKind::HuggingFace => "https://api-inference.huggingface.co/models/gpt2",
            ProviderKind::Replicate => "https://api.replicate.com/v1/predictions",
            ProviderKind::Together => "https://api.together.xyz/inference",
        }
    }

    /// Model (or model version) sent in the payload. Hugging Face encodes the
    /// model in its endpoint instead.
    pub fn default_model(&self) -> Option<&'static str> {
        match self {
            ProviderKind::OpenAI => Some("gpt-4o-mini"),
            ProviderKind::Anthropic => Some("claude-3-5-haiku-latest"),
            ProviderKind::HuggingFace => None,
            ProviderKind::Replicate => Some("replicate/gpt-2:latest"),
            ProviderKind::Together => Some("togethercomputer/RedPajama-INCITE-Chat-3B-v1"),
        }
    }

    /// Credential value meaning "no real credential configured".
    pub fn sentinel(&self) -> &'static str {
        match self {
            ProviderKind::HuggingFace => "hf_demo",
            _ => "demo",
        }
    }

    /// Secret name read at startup.
    pub fn env_var(&self) -> &'static str {
        match self {
            ProviderKind::OpenAI => "OPENAI_API_KEY",
            ProviderKind::Anthropic => "ANTHROPIC_API_KEY",
            ProviderKind::HuggingFace => "HUGGINGFACE_TOKEN",
            ProviderKind::Replicate => "REPLICATE_TOKEN",
            ProviderKind::Together => "TOGETHER_TOKEN",
        }
    }

    /// Where to obtain a real credential.
    pub fn credential_hint(&self) -> &'static str {
        match self {
            ProviderKind::OpenAI => "get real key from platform.openai.com/api-keys",
            ProviderKind::Anthropic => "get real key from console.anthropic.com/settings/keys",
            ProviderKind::HuggingFace => "get real token from huggingface.co/settings/tokens",
            ProviderKind::Replicate => "get real token from replicate.com/account/api-tokens",
            ProviderKind::Together => "get real token from api.together.xyz/settings/api-keys",
        }
    }
}

impl fmt::Display for ProviderKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// Connection settings for one provider.
#[derive(Clone)]
pub struct ProviderConfig {
    pub kind: ProviderKind,
    pub endpoint: String,
    pub credential: String,
    pub model: Option<String>,
    pub timeout: Duration,
}

impl ProviderConfig {
    /// Configuration with the provider's default endpoint, model and timeout.
    pub fn new(kind: ProviderKind, credential: impl Into<String>) -> Self {
        Self {
            kind,
            endpoint: kind.default_endpoint().to_string(),
            credential: credential.into(),
            model: kind.default_model().map(str::to_string),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Configuration holding the sentinel credential.
    pub fn unconfigured(kind: ProviderKind) -> Self {
        Self::new(kind, kind.sentinel())
    }

    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Configured model, else the provider default.
    pub fn model_name(&self) -> Option<&str> {
        self.model.as_deref().or(self.kind.default_model())
    }

    /// False when the credential is empty or the provider's sentinel.
    pub fn is_configured(&self) -> bool {
        let credential = self.credential.trim();
        !credential.is_empty() && credential != self.kind.sentinel()
    }
}

impl fmt::Debug for ProviderConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProviderConfig")
            .field("kind", &self.kind)
            .field("endpoint", &self.endpoint)
            .field("configured", &self.is_configured())
            .field("model", &self.model)
            .field("timeout", &self.timeout)
            .finish()
    }
}

/// Ordered provider list. Index order is priority order.
#[derive(Debug, Clone)]
pub struct PipelineConfig {
    providers: Vec<ProviderConfig>,
}

impl PipelineConfig {
    pub fn new(providers: Vec<ProviderConfig>) -> Self {
        Self { providers }
    }

    /// Load credentials from environment variables.
    pub fn from_env() -> Result<Self, Error> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build the default priority list, reading each secret through `lookup`.
    ///
    /// Absent secrets leave the provider on its sentinel credential.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, Error>
    where
        F: Fn(&str) -> Option<String>,
    {
        let timeout = match lookup(TIMEOUT_ENV_VAR) {
            Some(raw) => {
                let secs: u64 = raw.trim().parse().map_err(|_| {
                    Error::config(format!(
                        "{TIMEOUT_ENV_VAR} must be a whole number of seconds, got '{raw}'"
                    ))
                })?;
                if secs == 0 {
                    return Err(Error::config(format!("{TIMEOUT_ENV_VAR} must be positive")));
                }
                Duration::from_secs(secs)
            }
            None => DEFAULT_TIMEOUT,
        };

        let providers = ProviderKind::DEFAULT_PRIORITY
            .iter()
            .map(|&kind| {
                let credential = lookup(kind.env_var()).unwrap_or_else(|| kind.sentinel().to_string());
                ProviderConfig::new(kind, credential).with_timeout(timeout)
            })
            .collect::<Vec<_>>();

        for provider in &providers {
            log::debug!(
                "Provider {} {}",
                provider.kind,
                if provider.is_configured() { "configured" } else { "disabled (demo token)" }
            );
        }

        Ok(Self { providers })
    }

    pub fn providers(&self) -> &[ProviderConfig] {
        &self.providers
    }

    /// Sum of all per-call ceilings: the worst-case wait before the fallback.
    pub fn worst_case_latency(&self) -> Duration {
        self.providers
            .iter()
            .filter(|p| p.is_configured())
            .map(|p| p.timeout)
            .sum()
    }
}
