//! Pipeline orchestration tests with fake collaborators.
//!
//! Validates the short-circuit and ordering properties of the engine:
//! a failing step aborts the request before anything downstream runs,
//! and the generator receives exactly the assembled prompt.

mod common;

use common::{fixture_match, FakeEmbedder, FakeGenerator, FakeStore};
use santrilogy::types::RetrievalPolicy;
use santrilogy::{ChatEngine, PromptBuilder};
use std::sync::Arc;

const PERSONA: &str = "Kamu adalah Santrilogy AI. Jawab dengan sopan.";

fn engine(
    embedder: Arc<FakeEmbedder>,
    store: Arc<FakeStore>,
    generator: Arc<FakeGenerator>,
    policy: RetrievalPolicy,
) -> ChatEngine {
    ChatEngine::new(
        embedder,
        store,
        generator,
        PromptBuilder::new(PERSONA),
        policy,
    )
}

#[tokio::test]
async fn embedding_failure_short_circuits_the_pipeline() {
    let embedder = Arc::new(FakeEmbedder::failing());
    let store = Arc::new(FakeStore::returning(vec![fixture_match()]));
    let generator = Arc::new(FakeGenerator::answering("unused"));

    let engine = engine(
        embedder.clone(),
        store.clone(),
        generator.clone(),
        RetrievalPolicy::default(),
    );

    let result = engine.answer("Apa hukum wudhu?").await;

    assert!(result.is_err());
    assert_eq!(embedder.calls(), 1);
    assert!(store.queries().is_empty(), "retriever must not be called");
    assert!(generator.prompts().is_empty(), "generator must not be called");
}

#[tokio::test]
async fn retrieval_failure_skips_generation() {
    let embedder = Arc::new(FakeEmbedder::returning(vec![0.1, 0.2]));
    let store = Arc::new(FakeStore::failing());
    let generator = Arc::new(FakeGenerator::answering("unused"));

    let engine = engine(
        embedder,
        store.clone(),
        generator.clone(),
        RetrievalPolicy::default(),
    );

    let result = engine.answer("Apa hukum wudhu?").await;

    assert!(result.is_err());
    assert_eq!(store.queries().len(), 1);
    assert!(generator.prompts().is_empty(), "generator must not be called");
}

#[tokio::test]
async fn retrieval_policy_is_forwarded_to_the_store() {
    let embedder = Arc::new(FakeEmbedder::returning(vec![0.5, -0.5, 1.0]));
    let store = Arc::new(FakeStore::returning(Vec::new()));
    let generator = Arc::new(FakeGenerator::answering("jawaban"));

    let policy = RetrievalPolicy {
        threshold: 0.65,
        count: 5,
    };
    let engine = engine(embedder, store.clone(), generator, policy);

    engine.answer("pertanyaan").await.unwrap();

    let queries = store.queries();
    assert_eq!(queries.len(), 1);
    assert_eq!(queries[0].embedding, vec![0.5, -0.5, 1.0]);
    assert_eq!(queries[0].threshold, 0.65);
    assert_eq!(queries[0].count, 5);
}

#[tokio::test]
async fn generator_receives_the_assembled_prompt_with_citations() {
    let embedder = Arc::new(FakeEmbedder::returning(vec![0.1]));
    let store = Arc::new(FakeStore::returning(vec![fixture_match()]));
    let generator = Arc::new(FakeGenerator::answering("Hukum wudhu adalah wajib."));

    let engine = engine(embedder, store, generator.clone(), RetrievalPolicy::default());

    let answer = engine.answer("Apa hukum wudhu?").await.unwrap();
    assert_eq!(answer, "Hukum wudhu adalah wajib.");

    let prompts = generator.prompts();
    assert_eq!(prompts.len(), 1);

    let expected = PromptBuilder::new(PERSONA).build(&[fixture_match()], "Apa hukum wudhu?");
    assert_eq!(prompts[0], expected);
    assert!(prompts[0].contains("[Kitab: Fiqh Al-Ghazali]"));
    assert!(prompts[0].ends_with("\n\nUser: Apa hukum wudhu?"));
}

#[tokio::test]
async fn empty_retrieval_uses_the_disclaimer_branch() {
    let embedder = Arc::new(FakeEmbedder::returning(vec![0.1]));
    let store = Arc::new(FakeStore::returning(Vec::new()));
    let generator = Arc::new(FakeGenerator::answering("jawaban umum"));

    let engine = engine(embedder, store, generator.clone(), RetrievalPolicy::default());

    let answer = engine.answer("Apa itu tayamum?").await.unwrap();
    assert_eq!(answer, "jawaban umum");

    let prompts = generator.prompts();
    assert_eq!(prompts.len(), 1);
    assert!(prompts[0].contains("Maaf, belum ada data kitab spesifik di database"));
    assert!(!prompts[0].contains("[Kitab:"));
}

#[tokio::test]
async fn generation_failure_propagates_without_partial_answer() {
    let embedder = Arc::new(FakeEmbedder::returning(vec![0.1]));
    let store = Arc::new(FakeStore::returning(vec![fixture_match()]));
    let generator = Arc::new(FakeGenerator::failing());

    let engine = engine(embedder, store, generator, RetrievalPolicy::default());

    let result = engine.answer("Apa hukum wudhu?").await;
    assert!(result.is_err());
}
