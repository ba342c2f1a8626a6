//! Ordered provider evaluation with a guaranteed template fallback.

use log::{debug, info, warn};
use rand::Rng;

use crate::error::ProviderError;
use crate::fallback::{self, FALLBACK_LABEL};
use crate::probe::{ProbeEntry, ProbeReport};
use crate::provider::{ProviderOutcome, StoryProvider};
use crate::{
    Error, GenerationRequest, GenerationResult, PipelineConfig, ProviderAttempt, ProviderFactory,
};

/// Tries providers strictly in priority order and returns the first story.
///
/// Providers are attempted one at a time. Each attempt is bounded by that
/// provider's own timeout, so the worst case before falling back is the sum
/// of the configured timeouts.
pub struct GenerationPipeline {
    providers: Vec<Box<dyn StoryProvider>>,
}

impl GenerationPipeline {
    /// Build a pipeline over providers already in priority order.
    pub fn new(providers: Vec<Box<dyn StoryProvider>>) -> Self {
        Self { providers }
    }

    pub fn from_config(config: &PipelineConfig) -> Result<Self, Error> {
        Ok(Self::new(ProviderFactory::create_all(config)?))
    }

    /// Load credentials from the environment and build every provider.
    pub fn from_env() -> Result<Self, Error> {
        Self::from_config(&PipelineConfig::from_env()?)
    }

    /// Generate a story. Always succeeds with non-empty text.
    pub async fn generate(&self, request: &GenerationRequest) -> GenerationResult {
        match self.try_providers(request).await {
            Ok(result) => result,
            Err(attempts) => Self::fallback(request, attempts, &mut rand::thread_rng()),
        }
    }

    /// Same as [`generate`](Self::generate) with an explicit randomness source
    /// for the template fallback.
    pub async fn generate_with_rng<R: Rng + ?Sized>(
        &self,
        request: &GenerationRequest,
        rng: &mut R,
    ) -> GenerationResult {
        match self.try_providers(request).await {
            Ok(result) => result,
            Err(attempts) => Self::fallback(request, attempts, rng),
        }
    }

    /// Walk the providers; the first success short-circuits.
    async fn try_providers(
        &self,
        request: &GenerationRequest,
    ) -> Result<GenerationResult, Vec<ProviderAttempt>> {
        let mut attempts = Vec::new();

        for provider in &self.providers {
            match Self::attempt_one(provider.as_ref(), request).await {
                Ok(text) => {
                    info!("Story generated by {}", provider.name());
                    return Ok(GenerationResult::success(provider.label(), text)
                        .with_attempts(attempts));
                }
                Err(error) => {
                    if error.is_unconfigured() {
                        debug!("Skipping {}: {error}", provider.name());
                    } else {
                        warn!("Provider {} failed: {error}", provider.name());
                    }
                    attempts.push(ProviderAttempt {
                        provider: provider.label().to_string(),
                        error,
                    });
                }
            }
        }

        Err(attempts)
    }

    /// One bounded attempt. Unconfigured providers never reach the network.
    async fn attempt_one(provider: &dyn StoryProvider, request: &GenerationRequest) -> ProviderOutcome {
        if !provider.is_configured() {
            return Err(ProviderError::unconfigured(
                provider.name(),
                provider.unconfigured_hint(),
            ));
        }

        debug!("Trying provider {}", provider.name());
        let timeout = provider.timeout();
        let text = match tokio::time::timeout(timeout, provider.attempt(request)).await {
            Ok(outcome) => outcome?,
            Err(_) => return Err(ProviderError::Timeout(timeout)),
        };

        if text.trim().is_empty() {
            return Err(ProviderError::parse("provider returned empty text"));
        }
        Ok(text)
    }

    fn fallback<R: Rng + ?Sized>(
        request: &GenerationRequest,
        attempts: Vec<ProviderAttempt>,
        rng: &mut R,
    ) -> GenerationResult {
        info!(
            "All {} providers failed, using {FALLBACK_LABEL}",
            attempts.len()
        );
        let story = fallback::fallback_story(request.prompt(), request.genre(), rng);
        GenerationResult::success(FALLBACK_LABEL, story).with_attempts(attempts)
    }

    /// Attempt every provider, without short-circuiting, and report each
    /// outcome alongside the template fallback.
    ///
    /// Attempts run concurrently since no ordering is involved.
    pub async fn probe(&self, request: &GenerationRequest) -> ProbeReport {
        let outcomes = futures::future::join_all(
            self.providers
                .iter()
                .map(|provider| Self::attempt_one(provider.as_ref(), request)),
        )
        .await;

        let mut entries: Vec<ProbeEntry> = self
            .providers
            .iter()
            .zip(outcomes)
            .map(|(provider, outcome)| ProbeEntry::new(provider.label(), outcome))
            .collect();

        let story = fallback::fallback_story(request.prompt(), request.genre(), &mut rand::thread_rng());
        entries.push(ProbeEntry::new(FALLBACK_LABEL, Ok(story)));

        ProbeReport::new(entries)
    }
}
