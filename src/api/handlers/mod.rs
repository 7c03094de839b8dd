//! API request handlers.

/// Question answering, preflight, and health handlers.
pub mod chat;
