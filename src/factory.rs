use crate::providers::{
    AnthropicProvider, HuggingFaceProvider, OpenAIProvider, ReplicateProvider, TogetherProvider,
};
use crate::{Error, PipelineConfig, ProviderConfig, ProviderKind, StoryProvider};

/// Factory for creating story providers.
pub struct ProviderFactory;

impl ProviderFactory {
    /// Create a provider from configuration.
    ///
    /// Unconfigured providers are still created; the pipeline skips them.
    pub fn create(config: &ProviderConfig) -> Result<Box<dyn StoryProvider>, Error> {
        if config.endpoint.trim().is_empty() {
            return Err(Error::config(format!("{} endpoint must not be empty", config.kind)));
        }
        if config.timeout.is_zero() {
            return Err(Error::config(format!("{} timeout must be positive", config.kind)));
        }

        let config = config.clone();
        let provider: Box<dyn StoryProvider> = match config.kind {
            ProviderKind::OpenAI => Box::new(OpenAIProvider::new(config)?),
            ProviderKind::Anthropic => Box::new(AnthropicProvider::new(config)?),
            ProviderKind::HuggingFace => Box::new(HuggingFaceProvider::new(config)?),
            ProviderKind::Replicate => Box::new(ReplicateProvider::new(config)?),
            ProviderKind::Together => Box::new(TogetherProvider::new(config)?),
        };
        Ok(provider)
    }

    /// Create every provider in priority order.
    pub fn create_all(config: &PipelineConfig) -> Result<Vec<Box<dyn StoryProvider>>, Error> {
        config.providers().iter().map(Self::create).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_create_keeps_identity() {
        for kind in ProviderKind::DEFAULT_PRIORITY {
            let config = ProviderConfig::new(kind, "real-key").with_timeout(Duration::from_secs(7));
            let provider = ProviderFactory::create(&config).unwrap();
            assert_eq!(provider.name(), kind.id());
            assert_eq!(provider.label(), kind.label());
            assert!(provider.is_configured());
            assert_eq!(provider.timeout(), Duration::from_secs(7));
            assert_eq!(provider.unconfigured_hint(), kind.credential_hint());
        }
    }

    #[test]
    fn test_unconfigured_provider_is_created() {
        let provider =
            ProviderFactory::create(&ProviderConfig::unconfigured(ProviderKind::Replicate)).unwrap();
        assert!(!provider.is_configured());
        assert!(provider.unconfigured_hint().contains("replicate.com"));
    }

    #[test]
    fn test_invalid_config_rejected() {
        let empty_endpoint = ProviderConfig::new(ProviderKind::OpenAI, "k").with_endpoint(" ");
        assert!(matches!(
            ProviderFactory::create(&empty_endpoint),
            Err(Error::Config(_))
        ));

        let zero_timeout = ProviderConfig::new(ProviderKind::OpenAI, "k").with_timeout(Duration::ZERO);
        assert!(ProviderFactory::create(&zero_timeout).is_err());
    }

    #[test]
    fn test_create_all_preserves_priority() {
        let config = PipelineConfig::from_lookup(|_| None).unwrap();
        let names: Vec<_> = ProviderFactory::create_all(&config)
            .unwrap()
            .iter()
            .map(|p| p.name().to_string())
            .collect();
        assert_eq!(names, ["openai", "anthropic", "huggingface", "replicate", "together"]);
    }
}
