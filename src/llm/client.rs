//! Model client abstractions.
//!
//! Providers implement these traits behind `Arc<dyn ...>` so the pipeline
//! can be wired with any backend (or a test fake) without changing
//! application code.

use crate::types::Result;
use async_trait::async_trait;

/// Turns free text into a fixed-length embedding vector.
///
/// The vector's dimensionality is whatever the underlying model emits;
/// callers must not assume a particular length, only that query vectors
/// and stored vectors come from the same model.
#[async_trait]
pub trait EmbeddingClient: Send + Sync {
    /// Embed a single text. One outbound call, no retry; a provider
    /// failure or a malformed response propagates as an embedding error.
    async fn embed(&self, text: &str) -> Result<Vec<f32>>;
}

/// Generates an answer from a fully assembled prompt.
#[async_trait]
pub trait GenerationClient: Send + Sync {
    /// Generate a completion. One outbound call, no retry, no streaming.
    async fn generate(&self, prompt: &str) -> Result<String>;

    /// Get the model name/identifier.
    fn model_name(&self) -> &str;
}

/// Inference parameters forwarded to the generation endpoint.
#[derive(Debug, Clone, Copy)]
pub struct GenerationParams {
    pub temperature: f32,
    pub max_output_tokens: u32,
    pub top_p: f32,
    pub top_k: u32,
}

impl Default for GenerationParams {
    fn default() -> Self {
        Self {
            temperature: 0.7,
            max_output_tokens: 2048,
            top_p: 0.9,
            top_k: 40,
        }
    }
}
