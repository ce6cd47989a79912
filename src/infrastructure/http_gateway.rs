use crate::domain::models::{Query, SearchResult};
use crate::domain::search::{SearchError, SearchGateway};
use anyhow::Result;
use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use url::Url;

/// Talks to the remote search service over HTTP. One GET per `search` call,
/// no retries, transport-default timeouts.
pub struct HttpSearchGateway {
    client: Client,
    base: Url,
}

impl HttpSearchGateway {
    pub fn new(base: Url) -> Result<Self> {
        let client = Client::builder()
            .user_agent(concat!("seeker/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self { client, base })
    }
}

/// `{base}/api/search?q=<encoded>&type=<filter>`. `query_pairs_mut` handles
/// the percent-encoding of the user text.
fn search_url(base: &Url, query: &Query) -> Result<Url, url::ParseError> {
    let mut url = base.join("/api/search")?;
    url.query_pairs_mut()
        .append_pair("q", query.trimmed())
        .append_pair("type", query.content_type.as_param());
    Ok(url)
}

/// Maps a non-2xx response to an error string. A JSON body with a string
/// `error` field wins; anything else falls back to the status line.
fn interpret_failure(status: StatusCode, body: &str) -> SearchError {
    if let Ok(value) = serde_json::from_str::<serde_json::Value>(body) {
        if let Some(message) = value.get("error").and_then(|e| e.as_str()) {
            return SearchError::Server(message.to_string());
        }
    }
    SearchError::Status {
        status: status.as_u16(),
        phrase: status
            .canonical_reason()
            .unwrap_or("Unknown Status")
            .to_string(),
    }
}

/// A 2xx body must be a JSON array; the records themselves stay opaque.
fn interpret_success(body: &str) -> Result<Vec<SearchResult>, SearchError> {
    serde_json::from_str::<Vec<SearchResult>>(body).map_err(|_| SearchError::MalformedResponse)
}

#[async_trait]
impl SearchGateway for HttpSearchGateway {
    async fn search(&self, query: &Query) -> Result<Vec<SearchResult>, SearchError> {
        let url = search_url(&self.base, query)
            .map_err(|e| SearchError::Transport(e.to_string()))?;

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| SearchError::Transport(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| SearchError::Transport(e.to_string()))?;

        if !status.is_success() {
            return Err(interpret_failure(status, &body));
        }
        interpret_success(&body)
    }
}
