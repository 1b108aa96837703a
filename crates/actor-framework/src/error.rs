//! # Framework Errors
//!
//! The store itself cannot fail, so the only errors the framework reports are
//! failures of the channel between a client and its actor.

/// Errors that can occur within the actor framework itself.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FrameworkError {
    #[error("Actor closed")]
    ActorClosed,
    #[error("Actor dropped response channel")]
    ActorDropped,
}
