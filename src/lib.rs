//! Anime story generation over a prioritized list of text-generation providers.
//!
//! A [`GenerationPipeline`] tries OpenAI, Anthropic, Hugging Face, Replicate and
//! Together AI in order, returns the first story produced, and falls back to a
//! local template generator when every provider fails. Callers always get text.

pub mod error;
pub mod types;
pub mod genre;
pub mod provider;
pub mod providers;
pub mod factory;
pub mod fallback;
pub mod pipeline;
pub mod probe;
pub mod stats;

// Re-export core types for easy usage
pub use error::{Error, ProviderError};
pub use types::*;
pub use genre::{Genre, GenreProfile};
pub use provider::{HttpStoryProvider, ProviderOutcome, StoryProvider};
pub use providers::*;
pub use factory::ProviderFactory;
pub use fallback::{fallback_story, FALLBACK_LABEL};
pub use pipeline::GenerationPipeline;
pub use probe::{ProbeEntry, ProbeReport};
pub use stats::StoryMetrics;
