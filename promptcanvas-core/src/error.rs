//! Error taxonomy for action dispatch and batch interpretation.

use thiserror::Error;

/// Result type for core operations.
pub type CoreResult<T> = Result<T, ActionError>;

/// Errors from dispatching a single action.
///
/// Only [`ActionError::IdNotFound`] escalates to batch-fatal; the interpreter
/// recovers from the other variants and continues with the rest of the batch.
#[derive(Debug, Clone, Error)]
pub enum ActionError {
    /// Action name is not in the registry.
    #[error("unknown action: {0}")]
    UnknownAction(String),

    /// Payload failed schema validation for its action.
    #[error("invalid payload for {action}: {reason}")]
    Validation {
        /// Action whose payload was rejected.
        action: String,
        /// Human-readable decode/validation failure.
        reason: String,
    },

    /// Spawn carried an id already present in the document.
    #[error("duplicate element id: {0}")]
    DuplicateId(String),

    /// Edit referenced an id with no matching element.
    #[error("element not found: {0}")]
    IdNotFound(String),
}

impl ActionError {
    /// Build a validation error for `action` from any displayable reason.
    #[must_use]
    pub fn validation(action: &str, reason: impl std::fmt::Display) -> Self {
        Self::Validation {
            action: action.to_string(),
            reason: reason.to_string(),
        }
    }
}

/// Terminal failure of an entire batch.
///
/// When the interpreter returns this, no document from the batch is adopted -
/// the caller keeps its pre-batch snapshot untouched.
#[derive(Debug, Clone, Error)]
pub enum BatchError {
    /// An edit action referenced a nonexistent element id.
    #[error("element not found: {0}")]
    IdNotFound(String),
}
