//! OpenAI chat completions.

mod client;
pub mod types;

pub use client::OpenAIProvider;
