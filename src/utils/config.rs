//! Environment-based configuration.
//!
//! All configuration is read once at startup from process environment
//! variables (a `.env` file is honored via dotenvy). Required credentials
//! that are missing are collected and reported together in a single
//! startup error, so a misconfigured deployment fails before the listener
//! binds rather than on the first request.

use crate::llm::client::GenerationParams;
use crate::types::{AppError, Result, RetrievalPolicy};
use std::env;

/// Default Gemini API endpoint. Overridable via `GEMINI_API_BASE`,
/// which is also how the test suite points the engine at a local fake.
pub const DEFAULT_GEMINI_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Default assistant persona prepended to every assembled prompt.
pub const DEFAULT_PERSONA: &str = "Kamu adalah Santrilogy AI. Jawab dengan sopan.";

#[derive(Debug, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub supabase: SupabaseConfig,
    pub gemini: GeminiConfig,
    pub rag: RagConfig,
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone)]
pub struct SupabaseConfig {
    pub url: String,
    pub service_role_key: String,
}

#[derive(Debug, Clone)]
pub struct GeminiConfig {
    pub api_key: String,
    pub api_base: String,
    pub generation_model: String,
    pub embedding_model: String,
    pub params: GenerationParams,
}

#[derive(Debug, Clone)]
pub struct RagConfig {
    pub persona: String,
    pub retrieval: RetrievalPolicy,
    /// Timeout applied to every outbound call (Gemini and Supabase).
    pub request_timeout_secs: u64,
}

impl Config {
    /// Load configuration from the process environment.
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration from an arbitrary key lookup.
    ///
    /// Exists so tests can supply a plain map instead of mutating the
    /// process environment.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut missing = Vec::new();
        let mut require = |key: &str| -> String {
            match lookup(key) {
                Some(value) if !value.is_empty() => value,
                _ => {
                    missing.push(key.to_string());
                    String::new()
                }
            }
        };

        let supabase_url = require("SUPABASE_URL");
        let service_role_key = require("SUPABASE_SERVICE_ROLE_KEY");
        let gemini_api_key = require("GEMINI_API_KEY");

        if !missing.is_empty() {
            return Err(AppError::Config(format!(
                "missing required environment variables: {}",
                missing.join(", ")
            )));
        }

        Ok(Config {
            server: ServerConfig {
                host: lookup("HOST").unwrap_or_else(|| "127.0.0.1".to_string()),
                port: parse_var(&lookup, "PORT", 3000)?,
            },
            supabase: SupabaseConfig {
                url: supabase_url.trim_end_matches('/').to_string(),
                service_role_key,
            },
            gemini: GeminiConfig {
                api_key: gemini_api_key,
                api_base: lookup("GEMINI_API_BASE")
                    .unwrap_or_else(|| DEFAULT_GEMINI_API_BASE.to_string())
                    .trim_end_matches('/')
                    .to_string(),
                generation_model: lookup("GEMINI_GENERATION_MODEL")
                    .unwrap_or_else(|| "gemini-1.5-flash".to_string()),
                embedding_model: lookup("GEMINI_EMBEDDING_MODEL")
                    .unwrap_or_else(|| "text-embedding-004".to_string()),
                params: GenerationParams {
                    temperature: parse_var(&lookup, "GEMINI_TEMPERATURE", 0.7)?,
                    max_output_tokens: parse_var(&lookup, "GEMINI_MAX_OUTPUT_TOKENS", 2048)?,
                    top_p: parse_var(&lookup, "GEMINI_TOP_P", 0.9)?,
                    top_k: parse_var(&lookup, "GEMINI_TOP_K", 40)?,
                },
            },
            rag: RagConfig {
                persona: lookup("PERSONA").unwrap_or_else(|| DEFAULT_PERSONA.to_string()),
                retrieval: RetrievalPolicy {
                    threshold: parse_var(&lookup, "RAG_MATCH_THRESHOLD", 0.5)?,
                    count: parse_var(&lookup, "RAG_MATCH_COUNT", 3)?,
                },
                request_timeout_secs: parse_var(&lookup, "REQUEST_TIMEOUT_SECS", 30)?,
            },
        })
    }
}

fn parse_var<F, T>(lookup: &F, key: &str, default: T) -> Result<T>
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr,
{
    match lookup(key) {
        Some(raw) => raw
            .parse()
            .map_err(|_| AppError::Config(format!("invalid value for {}: {}", key, raw))),
        None => Ok(default),
    }
}
