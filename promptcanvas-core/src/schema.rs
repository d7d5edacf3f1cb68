//! Typed payload schemas for the action vocabulary.
//!
//! Every incoming payload is decoded into one of these structs before a
//! handler touches the document. Decoding is strict about required identity
//! fields (`id`, coordinates) and forward-compatible about everything else:
//! unknown payload fields are ignored, and a stray `type` field is never
//! honored - the action name alone fixes the element variant.
//!
//! Presentational defaulting (white text, sans-serif) is deliberately absent
//! here; see [`Element::resolved_color`](crate::Element::resolved_color).

use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::Value;

use crate::{ActionError, CoreResult, Element, ElementKind};

/// Decode a raw payload into a typed schema struct.
///
/// # Errors
///
/// Returns [`ActionError::Validation`] carrying the serde failure when the
/// payload is missing a required field or a field has the wrong type.
pub fn decode<T: DeserializeOwned>(action: &str, payload: &Value) -> CoreResult<T> {
    serde_json::from_value(payload.clone()).map_err(|e| ActionError::validation(action, e))
}

/// Payload of `change_background`: three required integer channels.
#[derive(Debug, Clone, Deserialize)]
pub struct BackgroundChange {
    /// Red channel (unclamped).
    pub r: i64,
    /// Green channel (unclamped).
    pub g: i64,
    /// Blue channel (unclamped).
    pub b: i64,
}

/// Payload of `spawn_text`.
#[derive(Debug, Clone, Deserialize)]
pub struct TextSpawn {
    /// New element id (required, must be unique in the document).
    pub id: String,
    /// Horizontal position, percentage string (required).
    pub x: String,
    /// Vertical position, percentage string (required).
    pub y: String,
    /// Stacking depth.
    #[serde(default)]
    pub z_index: i64,
    /// Text content.
    #[serde(default)]
    pub content: String,
    /// CSS color.
    pub color: Option<String>,
    /// Font family.
    pub font: Option<String>,
    /// Font size, pixel string.
    pub font_size: Option<String>,
}

impl TextSpawn {
    /// Build the element this spawn describes. The variant tag is forced to
    /// text regardless of anything in the payload.
    #[must_use]
    pub fn into_element(self) -> Element {
        Element {
            id: self.id,
            z_index: self.z_index,
            x: self.x,
            y: self.y,
            kind: ElementKind::Text {
                content: self.content,
                color: self.color,
                font: self.font,
                font_size: self.font_size,
            },
        }
    }
}

/// Payload of `spawn_image`.
#[derive(Debug, Clone, Deserialize)]
pub struct ImageSpawn {
    /// New element id (required, must be unique in the document).
    pub id: String,
    /// Horizontal position, percentage string (required).
    pub x: String,
    /// Vertical position, percentage string (required).
    pub y: String,
    /// Stacking depth.
    #[serde(default)]
    pub z_index: i64,
    /// Image source URL.
    #[serde(default)]
    pub url: String,
    /// Width, pixel string.
    pub width: Option<String>,
}

impl ImageSpawn {
    /// Build the element this spawn describes, tag forced to image.
    #[must_use]
    pub fn into_element(self) -> Element {
        Element {
            id: self.id,
            z_index: self.z_index,
            x: self.x,
            y: self.y,
            kind: ElementKind::Image {
                url: self.url,
                width: self.width,
            },
        }
    }
}

/// Payload of `edit_text`: the target id plus any fields to overwrite.
#[derive(Debug, Clone, Deserialize)]
pub struct TextPatch {
    /// Id of the element to edit (required; never changed by the patch).
    pub id: String,
    /// New horizontal position.
    pub x: Option<String>,
    /// New vertical position.
    pub y: Option<String>,
    /// New stacking depth.
    pub z_index: Option<i64>,
    /// New text content.
    pub content: Option<String>,
    /// New CSS color.
    pub color: Option<String>,
    /// New font family.
    pub font: Option<String>,
    /// New font size.
    pub font_size: Option<String>,
}

impl TextPatch {
    /// Shallow-merge this patch over an existing text element.
    ///
    /// Fields absent from the patch keep the element's current value; `id`
    /// and the variant are immutable.
    ///
    /// # Errors
    ///
    /// Returns [`ActionError::Validation`] if the target is not a text
    /// element.
    pub fn merge_into(&self, element: &Element) -> CoreResult<Element> {
        let ElementKind::Text {
            content,
            color,
            font,
            font_size,
        } = &element.kind
        else {
            return Err(ActionError::validation(
                "edit_text",
                format!("element '{}' is not a text element", element.id),
            ));
        };

        Ok(Element {
            id: element.id.clone(),
            z_index: self.z_index.unwrap_or(element.z_index),
            x: self.x.clone().unwrap_or_else(|| element.x.clone()),
            y: self.y.clone().unwrap_or_else(|| element.y.clone()),
            kind: ElementKind::Text {
                content: self.content.clone().unwrap_or_else(|| content.clone()),
                color: self.color.clone().or_else(|| color.clone()),
                font: self.font.clone().or_else(|| font.clone()),
                font_size: self.font_size.clone().or_else(|| font_size.clone()),
            },
        })
    }
}

/// Payload of `edit_image`.
#[derive(Debug, Clone, Deserialize)]
pub struct ImagePatch {
    /// Id of the element to edit (required; never changed by the patch).
    pub id: String,
    /// New horizontal position.
    pub x: Option<String>,
    /// New vertical position.
    pub y: Option<String>,
    /// New stacking depth.
    pub z_index: Option<i64>,
    /// New image URL.
    pub url: Option<String>,
    /// New width.
    pub width: Option<String>,
}

impl ImagePatch {
    /// Shallow-merge this patch over an existing image element.
    ///
    /// # Errors
    ///
    /// Returns [`ActionError::Validation`] if the target is not an image
    /// element.
    pub fn merge_into(&self, element: &Element) -> CoreResult<Element> {
        let ElementKind::Image { url, width } = &element.kind else {
            return Err(ActionError::validation(
                "edit_image",
                format!("element '{}' is not an image element", element.id),
            ));
        };

        Ok(Element {
            id: element.id.clone(),
            z_index: self.z_index.unwrap_or(element.z_index),
            x: self.x.clone().unwrap_or_else(|| element.x.clone()),
            y: self.y.clone().unwrap_or_else(|| element.y.clone()),
            kind: ElementKind::Image {
                url: self.url.clone().unwrap_or_else(|| url.clone()),
                width: self.width.clone().or_else(|| width.clone()),
            },
        })
    }
}

/// Payload of `delete_elements`.
#[derive(Debug, Clone, Deserialize)]
pub struct DeleteSet {
    /// Ids to remove; ids with no matching element are silently ignored.
    pub ids: Vec<String>,
}
