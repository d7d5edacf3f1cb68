//! # Promptcanvas Core
//!
//! Document model and action-dispatch engine for a prompt-driven canvas.
//!
//! A remote agent answers a natural-language prompt with an ordered batch of
//! named actions; this crate applies the batch to an immutable [`Document`]
//! snapshot and reports a per-action [`Outcome`] list. The crate is pure and
//! synchronous - transport and timers live in `promptcanvas-client`.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │             promptcanvas-core               │
//! ├─────────────────────────────────────────────┤
//! │  Document Model  │  Element Schema          │
//! │  - background    │  - text / image variants │
//! │  - prompt        │  - typed payloads        │
//! │  - elements      │  - per-variant merge     │
//! ├─────────────────────────────────────────────┤
//! │  Action Registry │  Batch Interpreter       │
//! │  - name→handler  │  - sequential fold       │
//! │  - built-ins     │  - outcome reporting     │
//! └─────────────────────────────────────────────┘
//! ```

#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod color;
pub mod document;
pub mod element;
pub mod error;
pub mod interpret;
pub mod registry;
pub mod schema;

pub use color::Rgb;
pub use document::Document;
pub use element::{Element, ElementKind};
pub use error::{ActionError, BatchError, CoreResult};
pub use interpret::{apply_batch, ActionCall, ActionOutcome, BatchResult, Outcome};
pub use registry::{ActionRegistry, Handler};

/// Promptcanvas core version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
