use crate::recipe_actor::RecipeError;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Body of every error response.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub message: String,
}

/// Route-level failures. The display text is the exact `message` clients receive.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Invalid recipe data")]
    InvalidRecipe,

    #[error("Recipe not found")]
    NotFound,

    #[error("Recipe store unavailable")]
    StoreUnavailable(#[from] RecipeError),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::InvalidRecipe => StatusCode::BAD_REQUEST,
            ApiError::NotFound => StatusCode::NOT_FOUND,
            ApiError::StoreUnavailable(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if let ApiError::StoreUnavailable(e) = &self {
            tracing::error!("Recipe store call failed: {}", e);
        }

        (
            self.status(),
            Json(ErrorResponse {
                message: self.to_string(),
            }),
        )
            .into_response()
    }
}
