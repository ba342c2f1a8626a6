//! Provider implementations for the supported text-generation services.

pub(crate) mod http;

pub mod anthropic;
pub mod huggingface;
pub mod openai;
pub mod replicate;
pub mod together;

// Re-export commonly used provider types
pub use anthropic::AnthropicProvider;
pub use huggingface::HuggingFaceProvider;
pub use openai::OpenAIProvider;
pub use replicate::ReplicateProvider;
pub use together::TogetherProvider;
