//! Supabase document store client.
//!
//! Similarity search is a PostgREST RPC call to the `match_documents`
//! database function, which compares the query vector against stored
//! document embeddings and returns the closest rows above the threshold.

use crate::db::traits::DocumentStore;
use crate::types::{AppError, DocumentMatch, Result};
use crate::utils::config::SupabaseConfig;
use async_trait::async_trait;
use serde::Serialize;
use std::time::Duration;

/// Client for the Supabase `match_documents` RPC.
pub struct SupabaseStore {
    http: reqwest::Client,
    url: String,
    service_role_key: String,
}

impl SupabaseStore {
    /// Create a store client from configuration.
    pub fn new(config: &SupabaseConfig, timeout: Duration) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| AppError::Config(format!("failed to build HTTP client: {e}")))?;

        Ok(Self {
            http,
            url: config.url.clone(),
            service_role_key: config.service_role_key.clone(),
        })
    }
}

#[derive(Serialize)]
struct MatchDocumentsRequest<'a> {
    query_embedding: &'a [f32],
    match_threshold: f32,
    match_count: usize,
}

#[async_trait]
impl DocumentStore for SupabaseStore {
    async fn match_documents(
        &self,
        query_embedding: &[f32],
        threshold: f32,
        count: usize,
    ) -> Result<Vec<DocumentMatch>> {
        let body = MatchDocumentsRequest {
            query_embedding,
            match_threshold: threshold,
            match_count: count,
        };

        let response = self
            .http
            .post(format!("{}/rest/v1/rpc/match_documents", self.url))
            .header("apikey", &self.service_role_key)
            .bearer_auth(&self.service_role_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                AppError::Retrieval(format!("document store request failed: {}", e.without_url()))
            })?;

        let status = response.status();
        if !status.is_success() {
            let detail = response.text().await.unwrap_or_default();
            tracing::warn!(%status, %detail, "document store returned an error");
            return Err(AppError::Retrieval(format!(
                "document store returned status {status}"
            )));
        }

        let mut matches: Vec<DocumentMatch> = response.json().await.map_err(|e| {
            AppError::Retrieval(format!(
                "failed to decode document store response: {}",
                e.without_url()
            ))
        })?;

        // The RPC enforces the cap; truncating again keeps the contract
        // even against a store that returns more rows than asked.
        matches.truncate(count);
        Ok(matches)
    }
}
