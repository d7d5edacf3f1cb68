//! The canvas document - the canonical state the agent mutates.

use serde::{Deserialize, Serialize};

use crate::{Element, Rgb};

/// Placeholder text shown when nothing is wrong.
pub const DEFAULT_PLACEHOLDER: &str = "Enter an instruction";

/// Background color of a fresh document.
pub const DEFAULT_BACKGROUND: Rgb = Rgb::new(34, 34, 34);

/// The complete canvas state.
///
/// A `Document` is an immutable snapshot: the interpreter never mutates one
/// in place, every transition produces a new value and the owner swaps it in
/// wholesale. Element order is insertion order and carries no rendering
/// meaning beyond enumeration - visual stacking uses each element's
/// `z_index`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document {
    /// The user's current prompt text.
    pub prompt: String,
    /// Canvas background color.
    pub background: Rgb,
    /// Placeholder shown in the prompt field (doubles as the error surface).
    pub placeholder: String,
    /// All elements, in insertion order.
    pub elements: Vec<Element>,
}

impl Document {
    /// Create the initial empty document.
    #[must_use]
    pub fn new() -> Self {
        Self {
            prompt: String::new(),
            background: DEFAULT_BACKGROUND,
            placeholder: DEFAULT_PLACEHOLDER.to_string(),
            elements: Vec::new(),
        }
    }

    /// Look up an element by id.
    #[must_use]
    pub fn element(&self, id: &str) -> Option<&Element> {
        self.elements.iter().find(|e| e.id == id)
    }

    /// Whether any element carries the given id.
    #[must_use]
    pub fn contains_id(&self, id: &str) -> bool {
        self.element(id).is_some()
    }

    /// Number of elements on the canvas.
    #[must_use]
    pub fn element_count(&self) -> usize {
        self.elements.len()
    }

    /// Serialize the document to JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Deserialize a document from JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if deserialization fails.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}
