//! Check which providers are reachable with the configured credentials.

use anime_story_generator::{Error, GenerationPipeline, GenerationRequest, PipelineConfig};

#[tokio::main]
async fn main() -> Result<(), Error> {
    dotenvy::dotenv().ok();
    env_logger::init();

    println!("🎌 ANIME STORY GENERATOR - PROVIDER CHECK 🎌");
    println!("{}", "=".repeat(60));

    let config = PipelineConfig::from_env()?;
    for provider in config.providers() {
        let state = if provider.is_configured() { "configured" } else { "demo token" };
        println!("  {:<12} {state}", provider.kind.label());
    }
    println!(
        "  Worst-case wait before the fallback: {:.0}s",
        config.worst_case_latency().as_secs_f64()
    );

    let pipeline = GenerationPipeline::from_config(&config)?;
    let request = GenerationRequest::new("Once upon a time in a magical world", "isekai")?
        .with_max_length(50)?;
    let report = pipeline.probe(&request).await;

    for entry in report.entries() {
        match &entry.outcome {
            Ok(sample) => println!("\n✅ {}: SUCCESS\n   Sample: {sample}", entry.provider),
            Err(error) => println!("\n❌ {}: FAILED\n   Error: {error}", entry.provider),
        }
    }

    println!("\n{}", "=".repeat(60));
    let working: Vec<&str> = report
        .successful()
        .map(|e| e.provider.as_str())
        .collect();
    println!("✅ Successful: {}", working.len());
    println!("❌ Failed:     {}", report.failed().count());
    println!("\n🎉 Stories will come from: {}", working.join(", "));

    Ok(())
}
