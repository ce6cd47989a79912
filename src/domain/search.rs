use crate::domain::models::{Query, SearchResult};
use async_trait::async_trait;
use thiserror::Error;

/// How a single search attempt can fail. Every variant is terminal for that
/// attempt: the message is surfaced in the UI and nothing is retried.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SearchError {
    /// Network-level failure before a response arrived.
    #[error("search request failed: {0}")]
    Transport(String),

    /// Non-2xx response whose body carried a server-provided error message.
    #[error("{0}")]
    Server(String),

    /// Non-2xx response without a usable error body; we synthesize a message
    /// from the status line instead.
    #[error("search failed: HTTP {status} {phrase}")]
    Status { status: u16, phrase: String },

    /// 2xx response whose body was not a JSON array. Never silently treated
    /// as empty results.
    #[error("invalid response from server")]
    MalformedResponse,
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SearchGateway: Send + Sync {
    /// Issues exactly one request for the given query.
    async fn search(&self, query: &Query) -> Result<Vec<SearchResult>, SearchError>;
}
