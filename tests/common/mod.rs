//! Shared test fixtures.
//!
//! Provides fake pipeline collaborators with call recording, plus
//! configuration helpers that point the real clients at local mock
//! servers.

#![allow(dead_code)]

use async_trait::async_trait;
use santrilogy::types::{AppError, DocumentMatch, Result};
use santrilogy::{Config, DocumentStore, EmbeddingClient, GenerationClient};
use serde_json::json;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

/// Build a config whose upstream endpoints point at the given mock
/// servers. Only the required keys plus endpoint overrides are set, so
/// every other value exercises its documented default.
pub fn test_config(supabase_url: &str, gemini_base: &str) -> Config {
    let env = HashMap::from([
        ("SUPABASE_URL", supabase_url),
        ("SUPABASE_SERVICE_ROLE_KEY", "test-service-role-key"),
        ("GEMINI_API_KEY", "test-gemini-key"),
        ("GEMINI_API_BASE", gemini_base),
    ]);
    Config::from_lookup(|key| env.get(key).map(|v| v.to_string())).unwrap()
}

/// A retrieved match shaped like the production store rows.
pub fn fixture_match() -> DocumentMatch {
    DocumentMatch {
        content: "... bab wudhu ...".to_string(),
        metadata: json!({ "kitab": "Fiqh Al-Ghazali" }),
        similarity: 0.81,
    }
}

// ============= Fake Collaborators =============

/// Fake embedding client with a fixed vector and call counting.
pub struct FakeEmbedder {
    vector: Vec<f32>,
    should_fail: bool,
    calls: AtomicUsize,
}

impl FakeEmbedder {
    pub fn returning(vector: Vec<f32>) -> Self {
        Self {
            vector,
            should_fail: false,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn failing() -> Self {
        Self {
            vector: Vec::new(),
            should_fail: true,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl EmbeddingClient for FakeEmbedder {
    async fn embed(&self, _text: &str) -> Result<Vec<f32>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.should_fail {
            return Err(AppError::Embedding("fake embedding failure".to_string()));
        }
        Ok(self.vector.clone())
    }
}

/// Recorded arguments of a document store call.
#[derive(Debug, Clone, PartialEq)]
pub struct RecordedQuery {
    pub embedding: Vec<f32>,
    pub threshold: f32,
    pub count: usize,
}

/// Fake document store with fixed matches and query recording.
pub struct FakeStore {
    matches: Vec<DocumentMatch>,
    should_fail: bool,
    queries: Mutex<Vec<RecordedQuery>>,
}

impl FakeStore {
    pub fn returning(matches: Vec<DocumentMatch>) -> Self {
        Self {
            matches,
            should_fail: false,
            queries: Mutex::new(Vec::new()),
        }
    }

    pub fn failing() -> Self {
        Self {
            matches: Vec::new(),
            should_fail: true,
            queries: Mutex::new(Vec::new()),
        }
    }

    pub fn queries(&self) -> Vec<RecordedQuery> {
        self.queries.lock().unwrap().clone()
    }
}

#[async_trait]
impl DocumentStore for FakeStore {
    async fn match_documents(
        &self,
        query_embedding: &[f32],
        threshold: f32,
        count: usize,
    ) -> Result<Vec<DocumentMatch>> {
        self.queries.lock().unwrap().push(RecordedQuery {
            embedding: query_embedding.to_vec(),
            threshold,
            count,
        });
        if self.should_fail {
            return Err(AppError::Retrieval("fake store failure".to_string()));
        }
        Ok(self.matches.clone())
    }
}

/// Fake generation client that records every prompt it receives.
pub struct FakeGenerator {
    answer: String,
    should_fail: bool,
    prompts: Mutex<Vec<String>>,
}

impl FakeGenerator {
    pub fn answering(answer: &str) -> Self {
        Self {
            answer: answer.to_string(),
            should_fail: false,
            prompts: Mutex::new(Vec::new()),
        }
    }

    pub fn failing() -> Self {
        Self {
            answer: String::new(),
            should_fail: true,
            prompts: Mutex::new(Vec::new()),
        }
    }

    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }
}

#[async_trait]
impl GenerationClient for FakeGenerator {
    async fn generate(&self, prompt: &str) -> Result<String> {
        self.prompts.lock().unwrap().push(prompt.to_string());
        if self.should_fail {
            return Err(AppError::Generation("fake generation failure".to_string()));
        }
        Ok(self.answer.clone())
    }

    fn model_name(&self) -> &str {
        "fake-model"
    }
}
