//! Retrieval Augmented Generation (RAG) pipeline.
//!
//! The pipeline for each request:
//!
//! 1. **Embed** - the user's question becomes a query vector
//! 2. **Retrieve** - the document store returns the closest snippets
//!    above the similarity threshold
//! 3. **Assemble** - persona, snippets (or a fallback disclaimer), and
//!    the question become one instruction string
//! 4. **Generate** - the language model answers from the assembled prompt
//!
//! Steps run strictly sequentially; any failure aborts the request and no
//! partial answer is ever returned. The engine holds no state across
//! requests.

/// Pipeline orchestration.
pub mod engine;
/// Deterministic prompt assembly.
pub mod prompt;

pub use engine::ChatEngine;
pub use prompt::PromptBuilder;
