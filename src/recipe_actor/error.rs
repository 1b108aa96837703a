//! Error types for the Recipe actor.

use thiserror::Error;

/// Errors that can occur during recipe operations.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RecipeError {
    /// The store actor is gone or dropped the request.
    #[error("Recipe store unavailable: {0}")]
    StoreUnavailable(String),
}

