//! Chat endpoint client.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Native builds only carry the [`ChatTransport`] seam and the pure parsing
//! helpers so the controller can be driven by an in-memory transport.
//!
//! ERROR HANDLING
//! ==============
//! Transport and decode failures collapse into [`ChatError`]. The HTTP status
//! is not consulted: the backend reports its own failures as a normal reply,
//! so any body that parses as a [`ChatResponse`] is rendered.

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use std::future::Future;

use super::types::{ChatRequest, ChatResponse};

/// A failed chat round trip.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum ChatError {
    #[error("chat request failed: {0}")]
    Network(String),
    #[error("invalid chat response: {0}")]
    Decode(String),
    #[error("could not encode chat request: {0}")]
    Encode(String),
}

impl From<serde_json::Error> for ChatError {
    fn from(err: serde_json::Error) -> Self {
        Self::Decode(err.to_string())
    }
}

/// Something that can carry one chat request to the backend.
pub trait ChatTransport {
    /// Send `request` and decode the reply.
    fn send(&self, request: &ChatRequest) -> impl Future<Output = Result<ChatResponse, ChatError>>;
}

/// Decode a raw response body.
///
/// # Errors
///
/// Returns [`ChatError::Decode`] if the body is not JSON or lacks `response`.
pub fn parse_chat_response(body: &str) -> Result<ChatResponse, ChatError> {
    Ok(serde_json::from_str(body)?)
}

/// Encode the request body sent to the endpoint.
///
/// # Errors
///
/// Returns [`ChatError::Encode`] if serialization fails.
pub fn encode_chat_request(request: &ChatRequest) -> Result<String, ChatError> {
    serde_json::to_string(request).map_err(|e| ChatError::Encode(e.to_string()))
}

/// `fetch`-backed transport posting JSON to the configured endpoint.
#[cfg(feature = "hydrate")]
#[derive(Clone, Debug)]
pub struct HttpChatTransport {
    endpoint: String,
}

#[cfg(feature = "hydrate")]
impl HttpChatTransport {
    #[must_use]
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self { endpoint: endpoint.into() }
    }
}

#[cfg(feature = "hydrate")]
impl ChatTransport for HttpChatTransport {
    async fn send(&self, request: &ChatRequest) -> Result<ChatResponse, ChatError> {
        let body = encode_chat_request(request)?;
        let resp = gloo_net::http::Request::post(&self.endpoint)
            .header("Content-Type", "application/json")
            .body(body)
            .map_err(|e| ChatError::Encode(e.to_string()))?
            .send()
            .await
            .map_err(|e| ChatError::Network(e.to_string()))?;
        let status = resp.status();
        if !(200..300).contains(&status) {
            log::warn!("chat endpoint answered {status}");
        }
        let text = resp.text().await.map_err(|e| ChatError::Network(e.to_string()))?;
        parse_chat_response(&text)
    }
}
