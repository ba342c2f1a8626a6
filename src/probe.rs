//! Connectivity report produced by [`GenerationPipeline::probe`](crate::GenerationPipeline::probe).

use crate::provider::ProviderOutcome;

/// Characters of generated text kept as a sample.
pub const SAMPLE_CHARS: usize = 100;

/// One provider's probe result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProbeEntry {
    pub provider: String,
    /// Truncated sample on success, error detail on failure.
    pub outcome: Result<String, String>,
}

impl ProbeEntry {
    pub fn new(provider: impl Into<String>, outcome: ProviderOutcome) -> Self {
        Self {
            provider: provider.into(),
            outcome: outcome.map(|text| sample(&text)).map_err(|e| e.to_string()),
        }
    }

    pub fn succeeded(&self) -> bool {
        self.outcome.is_ok()
    }
}

/// Per-provider probe results in priority order, fallback last.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProbeReport {
    entries: Vec<ProbeEntry>,
}

impl ProbeReport {
    pub fn new(entries: Vec<ProbeEntry>) -> Self {
        Self { entries }
    }

    pub fn entries(&self) -> &[ProbeEntry] {
        &self.entries
    }

    pub fn successful(&self) -> impl Iterator<Item = &ProbeEntry> {
        self.entries.iter().filter(|e| e.succeeded())
    }

    pub fn failed(&self) -> impl Iterator<Item = &ProbeEntry> {
        self.entries.iter().filter(|e| !e.succeeded())
    }
}

/// First [`SAMPLE_CHARS`] characters, with `...` when anything was cut.
pub fn sample(text: &str) -> String {
    let mut chars = text.chars();
    let head: String = chars.by_ref().take(SAMPLE_CHARS).collect();
    if chars.next().is_some() {
        format!("{head}...")
    } else {
        head
    }
}
