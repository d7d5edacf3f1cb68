//! Session orchestration - the prompt submission lifecycle.
//!
//! A [`Session`] owns the document and transitions it through submissions:
//! ship prompt + snapshot to the agent, interpret the returned batch, and
//! either install the new document or surface a failure as placeholder text
//! plus the transient shake. No failure path panics or escapes as an
//! unhandled error - every exit leaves the session in a usable state with
//! the prompt field reset.

use promptcanvas_core::{
    apply_batch, ActionOutcome, ActionRegistry, BatchError, Document,
    document::DEFAULT_PLACEHOLDER,
};
use tokio::sync::watch;

use crate::feedback::ErrorSignal;
use crate::transport::{AgentTransport, PromptRequest};

/// Placeholder shown when the transport itself failed.
pub const GENERIC_FAILURE: &str = "Something went wrong...";

/// Placeholder shown when a batch referenced a nonexistent element id.
pub const ID_NOT_FOUND_FAILURE: &str = "Something went wrong... (ID not found)";

/// Fallback error code when the agent's error envelope carries none.
pub const UNKNOWN_ERROR_CODE: &str = "UNKNOWN_Error";

/// How a submission ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Submission {
    /// The batch applied; the document was replaced.
    Applied {
        /// Per-action outcomes, in batch order.
        outcomes: Vec<ActionOutcome>,
    },
    /// The submission failed as a whole; the pre-submission elements stand
    /// and `message` is now the placeholder.
    Rejected {
        /// The user-visible failure text.
        message: String,
    },
    /// A submission was already in flight; nothing was touched.
    Busy,
}

/// Owns the canvas document and drives submissions against a transport.
#[derive(Debug)]
pub struct Session<T> {
    document: Document,
    registry: ActionRegistry,
    transport: T,
    signal: ErrorSignal,
    in_flight: bool,
}

impl<T: AgentTransport> Session<T> {
    /// Create a session over `transport` with the built-in action vocabulary.
    #[must_use]
    pub fn new(transport: T) -> Self {
        Self::with_registry(transport, ActionRegistry::with_builtins())
    }

    /// Create a session with a custom (extended) registry.
    #[must_use]
    pub fn with_registry(transport: T, registry: ActionRegistry) -> Self {
        Self {
            document: Document::new(),
            registry,
            transport,
            signal: ErrorSignal::new(),
            in_flight: false,
        }
    }

    /// The current document snapshot.
    #[must_use]
    pub fn document(&self) -> &Document {
        &self.document
    }

    /// Update the prompt field (mirrors the input box).
    pub fn set_prompt(&mut self, text: impl Into<String>) {
        self.document.prompt = text.into();
    }

    /// Subscribe to the transient error flag.
    #[must_use]
    pub fn error_signal(&self) -> watch::Receiver<bool> {
        self.signal.subscribe()
    }

    /// Submit the current prompt to the agent and apply the response.
    ///
    /// The document is replaced atomically on success; on any batch- or
    /// submission-fatal failure the pre-submission elements are kept, the
    /// prompt is cleared, the placeholder carries the failure text, and the
    /// shake signal fires. Returns [`Submission::Busy`] without touching any
    /// state if a previous submission has not resolved yet.
    pub async fn submit(&mut self) -> Submission {
        if !self.try_begin() {
            tracing::warn!("submission rejected: one already in flight");
            return Submission::Busy;
        }
        let result = self.submit_inner().await;
        self.in_flight = false;
        result
    }

    fn try_begin(&mut self) -> bool {
        if self.in_flight {
            return false;
        }
        self.in_flight = true;
        true
    }

    async fn submit_inner(&mut self) -> Submission {
        let request = PromptRequest {
            text: self.document.prompt.clone(),
            state: self.document.clone(),
        };

        let response = match self.transport.send(&request).await {
            Ok(response) => response,
            Err(err) => {
                tracing::error!(%err, "transport failure");
                return self.reject(GENERIC_FAILURE.to_string());
            }
        };

        let batch = match response.into_batch() {
            Ok(batch) => batch,
            Err(code) => {
                let code = code.unwrap_or_else(|| UNKNOWN_ERROR_CODE.to_string());
                tracing::error!(%code, "agent refused the prompt");
                return self.reject(format!("Unable to execute: {code}"));
            }
        };

        match apply_batch(&self.registry, &self.document, &batch) {
            Ok(mut result) => {
                result.document.prompt.clear();
                result.document.placeholder = DEFAULT_PLACEHOLDER.to_string();
                self.document = result.document;
                tracing::debug!(
                    actions = result.outcomes.len(),
                    elements = self.document.element_count(),
                    "batch applied"
                );
                Submission::Applied {
                    outcomes: result.outcomes,
                }
            }
            Err(BatchError::IdNotFound(id)) => {
                tracing::error!(%id, "batch-fatal: id not found");
                self.reject(ID_NOT_FOUND_FAILURE.to_string())
            }
        }
    }

    /// Surface a submission-fatal failure: clear the prompt, put the message
    /// in the placeholder, fire the shake. Elements are left as they were.
    fn reject(&mut self, message: String) -> Submission {
        self.document.prompt.clear();
        self.document.placeholder.clone_from(&message);
        self.signal.trigger();
        Submission::Rejected { message }
    }
}
