//! Google Gemini client implementation.
//!
//! Implements both [`EmbeddingClient`] and [`GenerationClient`] against the
//! Generative Language REST API (`embedContent` and `generateContent`).
//!
//! The API key travels as a query parameter, so error messages built here
//! must never include the request URL or the raw response body; failures
//! carry the HTTP status only and the details go to tracing.

use crate::llm::client::{EmbeddingClient, GenerationClient, GenerationParams};
use crate::types::{AppError, Result};
use crate::utils::config::GeminiConfig;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Client for the Google Generative Language API.
pub struct GeminiClient {
    http: reqwest::Client,
    api_base: String,
    api_key: String,
    generation_model: String,
    embedding_model: String,
    params: GenerationParams,
}

impl GeminiClient {
    /// Create a client from configuration.
    ///
    /// The timeout applies to each outbound call so a hung upstream
    /// surfaces as a typed pipeline error instead of a stuck request.
    pub fn new(config: &GeminiConfig, timeout: Duration) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| AppError::Config(format!("failed to build HTTP client: {e}")))?;

        Ok(Self {
            http,
            api_base: config.api_base.clone(),
            api_key: config.api_key.clone(),
            generation_model: config.generation_model.clone(),
            embedding_model: config.embedding_model.clone(),
            params: config.params,
        })
    }

    fn endpoint(&self, model: &str, method: &str) -> String {
        format!("{}/models/{}:{}", self.api_base, model, method)
    }
}

// ============= Wire Types =============

#[derive(Serialize)]
struct Part<'a> {
    text: &'a str,
}

#[derive(Serialize)]
struct EmbedContentRequest<'a> {
    model: String,
    content: EmbedContent<'a>,
}

#[derive(Serialize)]
struct EmbedContent<'a> {
    parts: Vec<Part<'a>>,
}

#[derive(Deserialize)]
struct EmbedContentResponse {
    embedding: Option<EmbeddingValues>,
}

#[derive(Deserialize)]
struct EmbeddingValues {
    values: Option<Vec<f32>>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentRequest<'a> {
    contents: Vec<TurnContent<'a>>,
    generation_config: GenerationConfig,
}

#[derive(Serialize)]
struct TurnContent<'a> {
    role: &'a str,
    parts: Vec<Part<'a>>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    temperature: f32,
    max_output_tokens: u32,
    top_p: f32,
    top_k: u32,
}

impl From<GenerationParams> for GenerationConfig {
    fn from(params: GenerationParams) -> Self {
        Self {
            temperature: params.temperature,
            max_output_tokens: params.max_output_tokens,
            top_p: params.top_p,
            top_k: params.top_k,
        }
    }
}

#[derive(Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<TextPart>,
}

#[derive(Deserialize)]
struct TextPart {
    text: Option<String>,
}

// ============= Trait Implementations =============

#[async_trait]
impl EmbeddingClient for GeminiClient {
    async fn embed(&self, text: &str) -> Result<Vec<f32>> {
        let body = EmbedContentRequest {
            model: format!("models/{}", self.embedding_model),
            content: EmbedContent {
                parts: vec![Part { text }],
            },
        };

        let response = self
            .http
            .post(self.endpoint(&self.embedding_model, "embedContent"))
            .query(&[("key", self.api_key.as_str())])
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                AppError::Embedding(format!("embedding request failed: {}", e.without_url()))
            })?;

        let status = response.status();
        if !status.is_success() {
            let detail = response.text().await.unwrap_or_default();
            tracing::warn!(%status, %detail, "embedding endpoint returned an error");
            return Err(AppError::Embedding(format!(
                "embedding endpoint returned status {status}"
            )));
        }

        let payload: EmbedContentResponse = response.json().await.map_err(|e| {
            AppError::Embedding(format!(
                "failed to decode embedding response: {}",
                e.without_url()
            ))
        })?;

        payload
            .embedding
            .and_then(|e| e.values)
            .ok_or_else(|| {
                AppError::Embedding("embedding response missing embedding.values".to_string())
            })
    }
}

#[async_trait]
impl GenerationClient for GeminiClient {
    async fn generate(&self, prompt: &str) -> Result<String> {
        let body = GenerateContentRequest {
            contents: vec![TurnContent {
                role: "user",
                parts: vec![Part { text: prompt }],
            }],
            generation_config: self.params.into(),
        };

        let response = self
            .http
            .post(self.endpoint(&self.generation_model, "generateContent"))
            .query(&[("key", self.api_key.as_str())])
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                AppError::Generation(format!("generation request failed: {}", e.without_url()))
            })?;

        let status = response.status();
        if !status.is_success() {
            let detail = response.text().await.unwrap_or_default();
            tracing::warn!(%status, %detail, "generation endpoint returned an error");
            return Err(AppError::Generation(format!(
                "generation endpoint returned status {status}"
            )));
        }

        let payload: GenerateContentResponse = response.json().await.map_err(|e| {
            AppError::Generation(format!(
                "failed to decode generation response: {}",
                e.without_url()
            ))
        })?;

        // Every step of candidates[0].content.parts[0].text is a guarded
        // lookup; an empty or truncated response is a typed error, never
        // an index panic.
        payload
            .candidates
            .into_iter()
            .next()
            .and_then(|candidate| candidate.content)
            .and_then(|content| content.parts.into_iter().next())
            .and_then(|part| part.text)
            .ok_or_else(|| {
                AppError::Generation(
                    "generation response missing candidates[0].content.parts[0].text".to_string(),
                )
            })
    }

    fn model_name(&self) -> &str {
        &self.generation_model
    }
}
