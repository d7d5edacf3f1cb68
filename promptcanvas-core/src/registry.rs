//! Action registry - the single seam for extending the action vocabulary.

use std::collections::HashMap;

use serde_json::Value;

use crate::schema::{
    self, BackgroundChange, DeleteSet, ImagePatch, ImageSpawn, TextPatch, TextSpawn,
};
use crate::{ActionError, CoreResult, Document, Element, Rgb};

/// A pure state-transition function for one action kind.
///
/// Handlers never mutate the input document; they validate the payload and
/// return a fresh snapshot (or an error, leaving the caller's state intact).
pub type Handler = fn(&Document, &Value) -> CoreResult<Document>;

/// Mapping from action name to its transition function.
///
/// The vocabulary is closed at runtime: extension happens at build time by
/// calling [`ActionRegistry::register`] before the registry is handed to the
/// interpreter. Unknown names are reported, never silently dropped - whether
/// to recover is the interpreter's decision.
#[derive(Debug, Clone)]
pub struct ActionRegistry {
    handlers: HashMap<String, Handler>,
}

impl ActionRegistry {
    /// Create an empty registry with no actions.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            handlers: HashMap::new(),
        }
    }

    /// Create a registry with the six built-in actions registered.
    #[must_use]
    pub fn with_builtins() -> Self {
        let mut registry = Self::empty();
        registry.register("change_background", change_background);
        registry.register("spawn_text", spawn_text);
        registry.register("edit_text", edit_text);
        registry.register("spawn_image", spawn_image);
        registry.register("edit_image", edit_image);
        registry.register("delete_elements", delete_elements);
        registry
    }

    /// Register a handler under `name`, replacing any previous registration.
    pub fn register(&mut self, name: impl Into<String>, handler: Handler) {
        self.handlers.insert(name.into(), handler);
    }

    /// Whether `name` is a registered action.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.handlers.contains_key(name)
    }

    /// Apply the named action's handler to `document`.
    ///
    /// # Errors
    ///
    /// [`ActionError::UnknownAction`] if `name` is not registered; otherwise
    /// whatever the handler returns.
    pub fn dispatch(
        &self,
        name: &str,
        document: &Document,
        payload: &Value,
    ) -> CoreResult<Document> {
        let handler = self
            .handlers
            .get(name)
            .ok_or_else(|| ActionError::UnknownAction(name.to_string()))?;
        handler(document, payload)
    }
}

impl Default for ActionRegistry {
    fn default() -> Self {
        Self::with_builtins()
    }
}

// Built-in handlers. Each clones the document, applies its transition, and
// returns the new snapshot; errors leave the caller's document untouched.

fn change_background(document: &Document, payload: &Value) -> CoreResult<Document> {
    let change: BackgroundChange = schema::decode("change_background", payload)?;
    let mut next = document.clone();
    // Channels pass through unclamped; rendering tolerates out-of-range.
    next.background = Rgb::new(change.r, change.g, change.b);
    Ok(next)
}

fn spawn_text(document: &Document, payload: &Value) -> CoreResult<Document> {
    let spawn: TextSpawn = schema::decode("spawn_text", payload)?;
    append_element(document, spawn.into_element())
}

fn spawn_image(document: &Document, payload: &Value) -> CoreResult<Document> {
    let spawn: ImageSpawn = schema::decode("spawn_image", payload)?;
    append_element(document, spawn.into_element())
}

fn append_element(document: &Document, element: Element) -> CoreResult<Document> {
    if document.contains_id(&element.id) {
        return Err(ActionError::DuplicateId(element.id));
    }
    let mut next = document.clone();
    next.elements.push(element);
    Ok(next)
}

fn edit_text(document: &Document, payload: &Value) -> CoreResult<Document> {
    let patch: TextPatch = schema::decode("edit_text", payload)?;
    let target = document
        .element(&patch.id)
        .ok_or_else(|| ActionError::IdNotFound(patch.id.clone()))?;
    let merged = patch.merge_into(target)?;
    Ok(replace_element(document, merged))
}

fn edit_image(document: &Document, payload: &Value) -> CoreResult<Document> {
    let patch: ImagePatch = schema::decode("edit_image", payload)?;
    let target = document
        .element(&patch.id)
        .ok_or_else(|| ActionError::IdNotFound(patch.id.clone()))?;
    let merged = patch.merge_into(target)?;
    Ok(replace_element(document, merged))
}

fn replace_element(document: &Document, replacement: Element) -> Document {
    let mut next = document.clone();
    if let Some(slot) = next.elements.iter_mut().find(|e| e.id == replacement.id) {
        *slot = replacement;
    }
    next
}

fn delete_elements(document: &Document, payload: &Value) -> CoreResult<Document> {
    let delete: DeleteSet = schema::decode("delete_elements", payload)?;
    let mut next = document.clone();
    // Ids with no matching element are ignored; deletion is idempotent.
    next.elements.retain(|e| !delete.ids.contains(&e.id));
    Ok(next)
}
