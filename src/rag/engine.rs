//! Request pipeline orchestration.

use crate::db::DocumentStore;
use crate::llm::{EmbeddingClient, GenerationClient};
use crate::rag::prompt::PromptBuilder;
use crate::types::{Result, RetrievalPolicy};
use std::sync::Arc;

/// Orchestrates embed, retrieve, assemble, and generate for one request.
///
/// Collaborators are injected so every external contract can be replaced
/// with a fake in tests. The engine is stateless across requests: the
/// query vector and retrieved matches live only for the duration of one
/// `answer` call.
pub struct ChatEngine {
    embedder: Arc<dyn EmbeddingClient>,
    store: Arc<dyn DocumentStore>,
    generator: Arc<dyn GenerationClient>,
    prompt: PromptBuilder,
    retrieval: RetrievalPolicy,
}

impl ChatEngine {
    pub fn new(
        embedder: Arc<dyn EmbeddingClient>,
        store: Arc<dyn DocumentStore>,
        generator: Arc<dyn GenerationClient>,
        prompt: PromptBuilder,
        retrieval: RetrievalPolicy,
    ) -> Self {
        Self {
            embedder,
            store,
            generator,
            prompt,
            retrieval,
        }
    }

    /// Answer a user query through the full pipeline.
    ///
    /// Steps run strictly in sequence; the first failure aborts the
    /// request and nothing downstream is called. No retries.
    pub async fn answer(&self, query: &str) -> Result<String> {
        let query_vector = self.embedder.embed(query).await?;

        let matches = self
            .store
            .match_documents(&query_vector, self.retrieval.threshold, self.retrieval.count)
            .await?;

        tracing::debug!(
            matches = matches.len(),
            threshold = self.retrieval.threshold,
            "similarity search completed"
        );

        let prompt = self.prompt.build(&matches, query);
        self.generator.generate(&prompt).await
    }

    /// Name of the generation model behind this engine.
    pub fn model_name(&self) -> &str {
        self.generator.model_name()
    }
}
