//! Batch interpreter - applies an ordered action batch to a document.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::{ActionError, ActionRegistry, BatchError, Document};

/// One entry of an action batch as delivered on the wire.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActionCall {
    /// Action name, looked up in the registry.
    pub action: String,
    /// Action payload; defaults to null when absent.
    #[serde(default)]
    pub payload: Value,
}

/// Result of applying one batch entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The action was applied and produced a new document.
    Applied,
    /// The action was passed over without effect (unregistered name).
    Skipped {
        /// Why the action was passed over.
        reason: String,
    },
    /// The action was attempted and rejected (malformed payload).
    Failed {
        /// Why the action was rejected.
        reason: String,
    },
}

/// A batch entry's position and name paired with its [`Outcome`].
///
/// Outcomes are consumed immediately by the feedback layer; they are not
/// part of the document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionOutcome {
    /// Zero-based position within the batch.
    pub index: usize,
    /// The action name as received.
    pub action: String,
    /// What happened.
    pub outcome: Outcome,
}

/// Successful result of interpreting a whole batch.
#[derive(Debug, Clone)]
pub struct BatchResult {
    /// The document after every applied action.
    pub document: Document,
    /// One outcome per batch entry, in order.
    pub outcomes: Vec<ActionOutcome>,
}

impl BatchResult {
    /// Number of entries that were actually applied.
    #[must_use]
    pub fn applied_count(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|o| o.outcome == Outcome::Applied)
            .count()
    }
}

/// Apply `batch` to `document`, one action at a time in array order.
///
/// Each action runs against the document produced by the previous step, so
/// later actions may depend on ids spawned earlier in the same batch. The
/// input document is never mutated.
///
/// Per-action failures are recorded and the batch continues:
/// an unregistered name becomes [`Outcome::Skipped`], a malformed or
/// duplicate-id payload becomes [`Outcome::Failed`].
///
/// # Errors
///
/// [`BatchError::IdNotFound`] when an edit references a nonexistent element
/// id. This is batch-fatal: no partial document is returned and the caller's
/// snapshot stands.
pub fn apply_batch(
    registry: &ActionRegistry,
    document: &Document,
    batch: &[ActionCall],
) -> Result<BatchResult, BatchError> {
    let mut current = document.clone();
    let mut outcomes = Vec::with_capacity(batch.len());

    for (index, call) in batch.iter().enumerate() {
        tracing::debug!(index, action = %call.action, "applying action");

        let outcome = match registry.dispatch(&call.action, &current, &call.payload) {
            Ok(next) => {
                current = next;
                Outcome::Applied
            }
            Err(ActionError::IdNotFound(id)) => {
                tracing::error!(index, action = %call.action, %id, "batch-fatal: id not found");
                return Err(BatchError::IdNotFound(id));
            }
            Err(err @ ActionError::UnknownAction(_)) => {
                tracing::warn!(index, action = %call.action, "skipping unknown action");
                Outcome::Skipped {
                    reason: err.to_string(),
                }
            }
            Err(err) => {
                tracing::warn!(index, action = %call.action, %err, "action failed");
                Outcome::Failed {
                    reason: err.to_string(),
                }
            }
        };

        outcomes.push(ActionOutcome {
            index,
            action: call.action.clone(),
            outcome,
        });
    }

    Ok(BatchResult {
        document: current,
        outcomes,
    })
}
