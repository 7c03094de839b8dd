//! Language model clients and abstractions.
//!
//! The pipeline talks to two model endpoints: one that turns text into an
//! embedding vector and one that generates an answer from an assembled
//! prompt. Both sit behind traits so the orchestrator never depends on a
//! concrete provider and tests can substitute fakes per contract.
//!
//! # Architecture
//!
//! - [`EmbeddingClient`] - text in, fixed-length vector out
//! - [`GenerationClient`] - prompt in, answer text out
//! - [`GeminiClient`] - the Google Generative Language API implementation
//!   of both traits
//!
//! # Example
//!
//! ```ignore
//! use santrilogy::llm::{EmbeddingClient, GenerationClient, GeminiClient};
//!
//! let client = Arc::new(GeminiClient::new(&config.gemini, timeout)?);
//! let vector = client.embed("Apa hukum wudhu?").await?;
//! let answer = client.generate(&assembled_prompt).await?;
//! ```

/// Embedding and generation client traits plus model parameters.
pub mod client;
/// Google Gemini implementation of both client traits.
pub mod gemini;

pub use client::{EmbeddingClient, GenerationClient, GenerationParams};
pub use gemini::GeminiClient;
