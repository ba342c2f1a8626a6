//! Display metrics a caller derives from a finished story.

use std::time::Duration;

/// Rough tokens-per-word ratio for English prose.
pub const TOKENS_PER_WORD: f64 = 1.3;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StoryMetrics {
    pub word_count: usize,
    pub token_estimate: u64,
    pub elapsed: Duration,
    /// Zero when `elapsed` is zero.
    pub tokens_per_second: u64,
}

impl StoryMetrics {
    pub fn measure(text: &str, elapsed: Duration) -> Self {
        let word_count = text.split_whitespace().count();
        let token_estimate = (word_count as f64 * TOKENS_PER_WORD) as u64;
        let secs = elapsed.as_secs_f64();
        let tokens_per_second = if secs > 0.0 {
            (token_estimate as f64 / secs) as u64
        } else {
            0
        };
        Self {
            word_count,
            token_estimate,
            elapsed,
            tokens_per_second,
        }
    }
}
