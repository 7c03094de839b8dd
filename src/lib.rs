//! # Santrilogy Chat Engine
//!
//! A retrieval-augmented question answering server for Islamic reference
//! works. Each request embeds the user's question, runs a similarity
//! search against an external document store of kitab snippets, assembles
//! a context-grounded prompt, and asks a generation model for the answer.
//!
//! ## Overview
//!
//! The engine can be used in two ways:
//!
//! 1. **As a standalone server** - Run the `santrilogy-engine` binary
//! 2. **As a library** - Wire [`ChatEngine`] with your own collaborators
//!
//! ## Quick Start (Library Usage)
//!
//! ```rust,ignore
//! use santrilogy::{AppState, Config};
//!
//! let config = Config::from_env()?;
//! let state = AppState::from_config(config)?;
//! let router = santrilogy::api::routes::create_router(state);
//! ```
//!
//! ## Pipeline
//!
//! ```text
//! POST / {"prompt"} -> embed -> retrieve -> assemble -> generate -> {"answer"}
//! ```
//!
//! Every step is behind a trait ([`llm::EmbeddingClient`],
//! [`db::DocumentStore`], [`llm::GenerationClient`]) so tests substitute
//! fakes for each external contract. Failures abort the request
//! immediately; no partial answer is ever returned.
//!
//! ## Modules
//!
//! - [`api`] - REST API handlers and routes
//! - [`db`] - Document store clients (Supabase RPC)
//! - [`llm`] - Model clients (Gemini embeddings and generation)
//! - [`rag`] - Prompt assembly and pipeline orchestration
//! - [`types`] - Common types and error handling
//! - [`utils`] - Configuration utilities

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

/// HTTP API handlers and routes.
pub mod api;
/// Document store clients.
pub mod db;
/// Language model clients and abstractions.
pub mod llm;
/// Retrieval Augmented Generation (RAG) pipeline.
pub mod rag;
/// Core types (requests, responses, errors).
pub mod types;
/// Configuration utilities.
pub mod utils;

// Re-export commonly used types
pub use api::routes::create_router;
pub use db::{DocumentStore, SupabaseStore};
pub use llm::{EmbeddingClient, GeminiClient, GenerationClient};
pub use rag::{ChatEngine, PromptBuilder};
pub use types::{AppError, Result};
pub use utils::config::Config;

use std::sync::Arc;
use std::time::Duration;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    /// Loaded configuration
    pub config: Arc<Config>,
    /// The request pipeline
    pub engine: Arc<ChatEngine>,
}

impl AppState {
    /// Wire the production collaborators from configuration.
    ///
    /// The Gemini client serves both the embedding and the generation
    /// contract; the Supabase client serves retrieval.
    pub fn from_config(config: Config) -> Result<Self> {
        let timeout = Duration::from_secs(config.rag.request_timeout_secs);
        let gemini = Arc::new(GeminiClient::new(&config.gemini, timeout)?);
        let store = Arc::new(SupabaseStore::new(&config.supabase, timeout)?);

        let engine = ChatEngine::new(
            gemini.clone(),
            store,
            gemini,
            PromptBuilder::new(config.rag.persona.clone()),
            config.rag.retrieval,
        );

        Ok(Self {
            config: Arc::new(config),
            engine: Arc::new(engine),
        })
    }

    /// Build state around an already-wired engine.
    ///
    /// Used by tests to inject fake collaborators.
    pub fn with_engine(config: Config, engine: ChatEngine) -> Self {
        Self {
            config: Arc::new(config),
            engine: Arc::new(engine),
        }
    }
}
