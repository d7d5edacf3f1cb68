//! HTTP transport to the agent backend.
//!
//! The wire contract is a single `POST {endpoint}` carrying the prompt text
//! plus the full document snapshot (the agent gets complete context, not a
//! diff), answered by either a success envelope with an action batch or an
//! error envelope:
//!
//! ```text
//! → { "text": "...", "state": { ...Document... } }
//! ← { "status": "success", "actions": [ { "action": "...", "payload": {...} } ] }
//! ← { "status": "error", "error": "RATE_LIMIT" }
//! ```

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use url::Url;

use promptcanvas_core::{ActionCall, Document};

/// Request body sent to the agent.
#[derive(Debug, Clone, Serialize)]
pub struct PromptRequest {
    /// The user's instruction.
    pub text: String,
    /// Full current document snapshot.
    pub state: Document,
}

/// Response envelope from the agent.
#[derive(Debug, Clone, Deserialize)]
pub struct AgentResponse {
    /// `"success"` or `"error"`.
    pub status: String,
    /// Action batch; present on success.
    #[serde(default)]
    pub actions: Option<Vec<ActionCall>>,
    /// Failure code; may accompany an error status.
    #[serde(default)]
    pub error: Option<String>,
}

impl AgentResponse {
    /// Extract the action batch, treating a non-success status or a missing
    /// `actions` field as a refusal.
    ///
    /// # Errors
    ///
    /// Returns the agent's error code, or `None` when the envelope carried
    /// no code, so the caller can compose its fallback message.
    pub fn into_batch(self) -> Result<Vec<ActionCall>, Option<String>> {
        if self.status == "success" {
            self.actions.ok_or(self.error)
        } else {
            Err(self.error)
        }
    }
}

/// Transport-level failures. All of them collapse to the same user-visible
/// handling as an agent error envelope.
#[derive(Debug, Error)]
pub enum TransportError {
    /// Endpoint URL did not parse.
    #[error("invalid endpoint: {0}")]
    Endpoint(#[from] url::ParseError),

    /// Request failed or the response body was not the expected JSON.
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),
}

/// The seam between the session and the network.
#[async_trait]
pub trait AgentTransport: Send + Sync {
    /// Submit a prompt and await the agent's action batch.
    ///
    /// # Errors
    ///
    /// Returns [`TransportError`] on network failure or a malformed response
    /// body. An agent *error envelope* is not a transport error - it decodes
    /// fine and is handled by the session.
    async fn send(&self, request: &PromptRequest) -> Result<AgentResponse, TransportError>;
}

/// reqwest-backed transport talking to the agent's `/prompt` endpoint.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: reqwest::Client,
    endpoint: Url,
}

impl HttpTransport {
    /// Create a transport for the given endpoint URL.
    ///
    /// # Errors
    ///
    /// Returns [`TransportError::Endpoint`] if `endpoint` is not a valid URL.
    pub fn new(endpoint: &str) -> Result<Self, TransportError> {
        Ok(Self {
            client: reqwest::Client::new(),
            endpoint: Url::parse(endpoint)?,
        })
    }
}

#[async_trait]
impl AgentTransport for HttpTransport {
    async fn send(&self, request: &PromptRequest) -> Result<AgentResponse, TransportError> {
        tracing::debug!(endpoint = %self.endpoint, text = %request.text, "submitting prompt");

        let response = self
            .client
            .post(self.endpoint.clone())
            .json(request)
            .send()
            .await?
            .json::<AgentResponse>()
            .await?;

        tracing::debug!(status = %response.status, "agent responded");
        Ok(response)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_success_envelope_yields_batch() {
        let response: AgentResponse = serde_json::from_value(json!({
            "status": "success",
            "actions": [{"action": "change_background", "payload": {"r": 255, "g": 0, "b": 0}}]
        }))
        .expect("decode");

        let batch = response.into_batch().expect("success");
        assert_eq!(batch.len(), 1);
        assert_eq!(batch[0].action, "change_background");
    }

    #[test]
    fn test_error_envelope_carries_code() {
        let response: AgentResponse = serde_json::from_value(json!({
            "status": "error",
            "error": "RATE_LIMIT"
        }))
        .expect("decode");

        assert_eq!(response.into_batch(), Err(Some("RATE_LIMIT".to_string())));
    }

    #[test]
    fn test_success_without_actions_is_refusal() {
        let response: AgentResponse =
            serde_json::from_value(json!({"status": "success"})).expect("decode");
        assert_eq!(response.into_batch(), Err(None));
    }

    #[test]
    fn test_invalid_endpoint() {
        assert!(matches!(
            HttpTransport::new("not a url"),
            Err(TransportError::Endpoint(_))
        ));
    }
}
