//! Document store abstraction.

use crate::types::{DocumentMatch, Result};
use async_trait::async_trait;

/// Similarity search over the external document store.
///
/// The comparison metric lives in the store; callers only supply the
/// cutoff value and the result cap.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Return the stored documents most similar to `query_embedding`,
    /// ranked by similarity descending, excluding candidates scoring
    /// below `threshold` and capped at `count` results.
    ///
    /// Zero matches is success with an empty list, never an error; only
    /// a failing store call (network, auth, malformed reply) is.
    async fn match_documents(
        &self,
        query_embedding: &[f32],
        threshold: f32,
        count: usize,
    ) -> Result<Vec<DocumentMatch>>;
}
