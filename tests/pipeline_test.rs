mod common;

use anime_story_generator::{
    fallback_story, GenerationPipeline, GenerationRequest, Genre, PipelineConfig, ProviderError,
    StoryProvider, FALLBACK_LABEL,
};
use common::{count, Behavior, StubProvider};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::time::{Duration, Instant};

fn request(prompt: &str, genre: &str) -> GenerationRequest {
    GenerationRequest::new(prompt, genre).unwrap()
}

fn boxed(stubs: Vec<StubProvider>) -> Vec<Box<dyn StoryProvider>> {
    stubs
        .into_iter()
        .map(|s| Box::new(s) as Box<dyn StoryProvider>)
        .collect()
}

#[tokio::test]
async fn test_first_success_short_circuits() {
    let first = StubProvider::new("first", Behavior::Fail(ProviderError::transport("refused")));
    let second = StubProvider::new("second", Behavior::Succeed("A story from second."));
    let third = StubProvider::new("third", Behavior::Succeed("A story from third."));
    let (c1, c2, c3) = (first.calls(), second.calls(), third.calls());

    let pipeline = GenerationPipeline::new(boxed(vec![first, second, third]));
    let result = pipeline.generate(&request("A young pirate sets sail", "shonen")).await;

    assert!(result.succeeded());
    assert_eq!(result.provider_label(), "second");
    assert_eq!(result.text(), Some("A story from second."));
    assert_eq!((count(&c1), count(&c2), count(&c3)), (1, 1, 0));

    assert_eq!(result.attempts().len(), 1);
    assert_eq!(result.attempts()[0].provider, "first");
}

#[tokio::test]
async fn test_unconfigured_providers_are_never_attempted() {
    let skipped = StubProvider::new("skipped", Behavior::Succeed("should not appear")).unconfigured();
    let live = StubProvider::new("live", Behavior::Succeed("Live story."));
    let (skipped_calls, live_calls) = (skipped.calls(), live.calls());

    let pipeline = GenerationPipeline::new(boxed(vec![skipped, live]));
    let result = pipeline.generate(&request("Teenage pilots", "mecha")).await;

    assert_eq!(result.provider_label(), "live");
    assert_eq!(count(&skipped_calls), 0);
    assert_eq!(count(&live_calls), 1);
    assert!(result.attempts()[0].error.is_unconfigured());
}

#[tokio::test]
async fn test_all_failures_fall_back_to_templates() {
    for genre in ["shonen", "isekai", "mecha", "romance", "slice", "action", "unknown"] {
        let pipeline = GenerationPipeline::new(boxed(vec![
            StubProvider::new(
                "a",
                Behavior::Fail(ProviderError::Status { status: 500, body: "boom".to_string() }),
            ),
            StubProvider::new("b", Behavior::Fail(ProviderError::parse("missing generated_text"))),
            StubProvider::new("c", Behavior::Fail(ProviderError::transport("dns error"))),
        ]));
        let result = pipeline.generate(&request("Three friends start a band", genre)).await;

        assert!(result.succeeded());
        assert_eq!(result.provider_label(), FALLBACK_LABEL);
        let text = result.text().unwrap();
        assert!(!text.trim().is_empty());
        assert!(!text.contains('{') && !text.contains('}'));

        let details: Vec<_> = result.attempts().iter().map(|a| a.error.to_string()).collect();
        assert_eq!(details[0], "API Error: 500");
        assert_eq!(details.len(), 3);
    }
}

#[tokio::test]
async fn test_empty_pipeline_still_answers() {
    let pipeline = GenerationPipeline::new(Vec::new());
    let result = pipeline.generate(&request("A lone samurai", "action")).await;
    assert!(result.succeeded());
    assert_eq!(result.provider_label(), FALLBACK_LABEL);
    assert!(result.attempts().is_empty());
}

#[tokio::test]
async fn test_blank_provider_text_counts_as_failure() {
    let blank = StubProvider::new("blank", Behavior::Succeed("   "));
    let pipeline = GenerationPipeline::new(boxed(vec![blank]));
    let result = pipeline.generate(&request("An empty answer", "romance")).await;

    assert_eq!(result.provider_label(), FALLBACK_LABEL);
    assert!(matches!(result.attempts()[0].error, ProviderError::Parse(_)));
}

#[tokio::test]
async fn test_end_to_end_all_unconfigured() {
    // No secrets at all: every provider keeps its demo token
    let config = PipelineConfig::from_lookup(|_| None).unwrap();
    let pipeline = GenerationPipeline::from_config(&config).unwrap();

    let result = pipeline.generate(&request("A cat learns to fly", "mecha")).await;

    assert!(result.succeeded());
    assert_eq!(result.provider_label(), "Template Fallback");
    let text = result.text().unwrap();
    assert!(text.starts_with("Based on your idea: \"A cat learns to fly\""));
    assert!(!text.contains('{') && !text.contains('}'));
    assert_eq!(result.attempts().len(), 5);
    assert!(result.attempts().iter().all(|a| a.error.is_unconfigured()));
    assert!(result.attempts()[0]
        .error
        .to_string()
        .starts_with("Demo token - "));
}

#[tokio::test]
async fn test_fallback_is_deterministic_given_seed() {
    let pipeline = GenerationPipeline::new(Vec::new());
    let req = request("A cat learns to fly", "mecha");

    let a = pipeline.generate_with_rng(&req, &mut StdRng::seed_from_u64(99)).await;
    let b = pipeline.generate_with_rng(&req, &mut StdRng::seed_from_u64(99)).await;
    assert_eq!(a.text(), b.text());

    let direct = fallback_story("A cat learns to fly", Genre::Mecha, &mut StdRng::seed_from_u64(99));
    assert_eq!(a.text(), Some(direct.as_str()));
}

#[tokio::test]
async fn test_unknown_genre_matches_baseline() {
    let pipeline = GenerationPipeline::new(Vec::new());
    let unknown = request("A demon slayer", "not-a-real-genre");
    let baseline = request("A demon slayer", "shonen");

    assert_eq!(unknown.prefixed_prompt(), baseline.prefixed_prompt());

    let a = pipeline.generate_with_rng(&unknown, &mut StdRng::seed_from_u64(5)).await;
    let b = pipeline.generate_with_rng(&baseline, &mut StdRng::seed_from_u64(5)).await;
    assert_eq!(a.text(), b.text());
}

#[tokio::test]
async fn test_timeouts_are_per_call_and_additive() {
    let timeout = Duration::from_millis(150);
    let hanging: Vec<_> = ["slow-a", "slow-b", "slow-c"]
        .into_iter()
        .map(|name| StubProvider::new(name, Behavior::Hang).with_timeout(timeout))
        .collect();
    let calls: Vec<_> = hanging.iter().map(|s| s.calls()).collect();

    let pipeline = GenerationPipeline::new(boxed(hanging));
    let started = Instant::now();
    let result = pipeline.generate(&request("Waiting forever", "slice")).await;
    let elapsed = started.elapsed();

    assert_eq!(result.provider_label(), FALLBACK_LABEL);
    assert!(calls.iter().all(|c| count(c) == 1));
    assert!(result
        .attempts()
        .iter()
        .all(|a| a.error == ProviderError::Timeout(timeout)));

    // Sequential: roughly the sum of the three ceilings, never an hour
    assert!(elapsed >= timeout * 3, "{elapsed:?}");
    assert!(elapsed < Duration::from_secs(3), "{elapsed:?}");
}

#[tokio::test]
async fn test_hanging_provider_does_not_block_next() {
    let slow = StubProvider::new("slow", Behavior::Hang).with_timeout(Duration::from_millis(100));
    let fast = StubProvider::new("fast", Behavior::Succeed("Fast story."));

    let pipeline = GenerationPipeline::new(boxed(vec![slow, fast]));
    let started = Instant::now();
    let result = pipeline.generate(&request("Race", "action")).await;

    assert_eq!(result.provider_label(), "fast");
    assert!(started.elapsed() < Duration::from_secs(2));
}

#[tokio::test]
async fn test_probe_attempts_every_provider() {
    let ok = StubProvider::new("ok", Behavior::Succeed("Fine."));
    let broken = StubProvider::new("broken", Behavior::Fail(ProviderError::transport("refused")));
    let skipped = StubProvider::new("skipped", Behavior::Succeed("unused")).unconfigured();
    let (ok_calls, broken_calls, skipped_calls) = (ok.calls(), broken.calls(), skipped.calls());

    let pipeline = GenerationPipeline::new(boxed(vec![ok, broken, skipped]));
    let report = pipeline.probe(&request("Once upon a time in a magical world", "isekai")).await;

    assert_eq!((count(&ok_calls), count(&broken_calls), count(&skipped_calls)), (1, 1, 0));

    let labels: Vec<_> = report.entries().iter().map(|e| e.provider.as_str()).collect();
    assert_eq!(labels, ["ok", "broken", "skipped", FALLBACK_LABEL]);

    let successful: Vec<_> = report.successful().map(|e| e.provider.as_str()).collect();
    assert_eq!(successful, ["ok", FALLBACK_LABEL]);
    assert_eq!(report.failed().count(), 2);
}
