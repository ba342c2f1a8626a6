#![allow(dead_code)]

use anime_story_generator::{GenerationRequest, ProviderError, ProviderOutcome, StoryProvider};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

/// What a stub provider does when attempted.
#[derive(Clone)]
pub enum Behavior {
    Succeed(&'static str),
    Fail(ProviderError),
    /// Never answers within any reasonable timeout.
    Hang,
}

/// In-memory provider that counts how often it is attempted.
pub struct StubProvider {
    name: &'static str,
    behavior: Behavior,
    configured: bool,
    timeout: Duration,
    calls: Arc<AtomicUsize>,
}

impl StubProvider {
    pub fn new(name: &'static str, behavior: Behavior) -> Self {
        Self {
            name,
            behavior,
            configured: true,
            timeout: Duration::from_secs(5),
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    pub fn unconfigured(mut self) -> Self {
        self.configured = false;
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Shared counter, readable after the stub is boxed into a pipeline.
    pub fn calls(&self) -> Arc<AtomicUsize> {
        Arc::clone(&self.calls)
    }
}

#[async_trait::async_trait]
impl StoryProvider for StubProvider {
    fn name(&self) -> &str {
        self.name
    }

    fn label(&self) -> &str {
        self.name
    }

    fn is_configured(&self) -> bool {
        self.configured
    }

    fn timeout(&self) -> Duration {
        self.timeout
    }

    async fn attempt(&self, _request: &GenerationRequest) -> ProviderOutcome {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match &self.behavior {
            Behavior::Succeed(text) => Ok(text.to_string()),
            Behavior::Fail(error) => Err(error.clone()),
            Behavior::Hang => {
                tokio::time::sleep(Duration::from_secs(3600)).await;
                Ok("too late".to_string())
            }
        }
    }
}

pub fn count(calls: &Arc<AtomicUsize>) -> usize {
    calls.load(Ordering::SeqCst)
}
