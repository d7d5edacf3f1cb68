//! Canvas elements - positioned text and image units.

use serde::{Deserialize, Serialize};

/// Fallback text color applied by the rendering layer when an element
/// carries none.
pub const FALLBACK_COLOR: &str = "white";

/// Fallback font family applied by the rendering layer.
pub const FALLBACK_FONT: &str = "sans-serif";

/// The content variant of an element.
///
/// The tag is never taken from an incoming payload - the action name alone
/// (`spawn_text` vs `spawn_image`) fixes the variant, and edits cannot change
/// it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ElementKind {
    /// A text label.
    Text {
        /// Text content to display.
        #[serde(default)]
        content: String,
        /// CSS color; rendering falls back to [`FALLBACK_COLOR`] when absent.
        #[serde(skip_serializing_if = "Option::is_none")]
        color: Option<String>,
        /// Font family; rendering falls back to [`FALLBACK_FONT`] when absent.
        #[serde(skip_serializing_if = "Option::is_none")]
        font: Option<String>,
        /// Font size as a pixel string, e.g. `"20px"`.
        #[serde(skip_serializing_if = "Option::is_none")]
        font_size: Option<String>,
    },
    /// An image referenced by URL.
    Image {
        /// Image source URL.
        #[serde(default)]
        url: String,
        /// Width as a pixel string, e.g. `"300px"`.
        #[serde(skip_serializing_if = "Option::is_none")]
        width: Option<String>,
    },
}

impl ElementKind {
    /// The wire tag for this variant (`"text"` or `"image"`).
    #[must_use]
    pub const fn tag(&self) -> &'static str {
        match self {
            Self::Text { .. } => "text",
            Self::Image { .. } => "image",
        }
    }
}

/// A positioned visual unit on the canvas.
///
/// `id` is unique within a [`Document`](crate::Document) and immutable for
/// the element's lifetime, as is the variant of `kind`. Coordinates are
/// percentage strings (`"50%"`) interpreted by the rendering layer; stacking
/// order comes from `z_index`, not from position in the element list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Element {
    /// Agent-assigned unique identifier.
    pub id: String,
    /// Relative depth for visual stacking.
    #[serde(default)]
    pub z_index: i64,
    /// Horizontal position as a percentage string.
    pub x: String,
    /// Vertical position as a percentage string.
    pub y: String,
    /// Content variant.
    #[serde(flatten)]
    pub kind: ElementKind,
}

impl Element {
    /// Effective text color for rendering, substituting the lenient fallback.
    ///
    /// Presentational fallback is deliberately kept out of the schema and the
    /// interpreter: the stored element records exactly what the agent sent.
    #[must_use]
    pub fn resolved_color(&self) -> &str {
        match &self.kind {
            ElementKind::Text {
                color: Some(color), ..
            } => color,
            _ => FALLBACK_COLOR,
        }
    }

    /// Effective font stack for rendering.
    ///
    /// A provided font is suffixed with the fallback family, matching how the
    /// view layer composes `font-family`.
    #[must_use]
    pub fn resolved_font(&self) -> String {
        match &self.kind {
            ElementKind::Text {
                font: Some(font), ..
            } => format!("{font}, {FALLBACK_FONT}"),
            _ => FALLBACK_FONT.to_string(),
        }
    }
}
