//! Generate one story from the command line.
//!
//! Usage: cargo run --example generate_story -- [genre] [prompt...]
//! Credentials come from the environment or a `.env` file.

use anime_story_generator::{Error, GenerationPipeline, GenerationRequest, StoryMetrics};
use std::time::Instant;

const DEFAULT_PROMPT: &str =
    "A young warrior discovers a legendary sword hidden in an ancient temple";

#[tokio::main]
async fn main() -> Result<(), Error> {
    dotenvy::dotenv().ok();
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let genre = args.next().unwrap_or_else(|| "shonen".to_string());
    let prompt = {
        let rest: Vec<String> = args.collect();
        if rest.is_empty() {
            DEFAULT_PROMPT.to_string()
        } else {
            rest.join(" ")
        }
    };

    let pipeline = GenerationPipeline::from_env()?;
    let request = GenerationRequest::new(prompt, &genre)?;

    println!("🎌 Generating a {} story...", request.genre().profile().display_name);
    let started = Instant::now();
    let result = pipeline.generate(&request).await;
    let metrics = StoryMetrics::measure(result.text().unwrap_or_default(), started.elapsed());

    for attempt in result.attempts() {
        println!("⚠️  {} skipped: {}", attempt.provider, attempt.error);
    }

    println!("\n📖 Generated Story\n");
    println!("{}\n", result.text().unwrap_or_default());
    println!("📊 Tokens:   {}", metrics.token_estimate);
    println!("⏱️  Time:     {:.2}s", metrics.elapsed.as_secs_f64());
    println!("🚀 Speed:    {} tok/s", metrics.tokens_per_second);
    println!("🤖 Provider: {}", result.provider_label());

    Ok(())
}
