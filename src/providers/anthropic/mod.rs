//! Anthropic messages API.

mod client;
pub mod types;

pub use client::AnthropicProvider;
