//! # Promptcanvas Client
//!
//! The submission side of Promptcanvas: ships the user's prompt (with the
//! full document snapshot) to the agent backend, runs the returned action
//! batch through `promptcanvas-core`, and drives the transient error
//! feedback the view reacts to.

#![forbid(unsafe_code)]

pub mod feedback;
pub mod session;
pub mod transport;

pub use feedback::ErrorSignal;
pub use session::{Session, Submission};
pub use transport::{AgentResponse, AgentTransport, HttpTransport, PromptRequest, TransportError};
