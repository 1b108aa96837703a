use crate::api::{ApiError, AppState};
use crate::model::{Recipe, RecipeCreate};
use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::Json;

/// Checks a JSON body before anything reaches the store.
///
/// Shape errors (missing fields, wrong types, unknown enum values, non-JSON bodies) come
/// from the extractor; an empty `title` or `instructions` is caught here.
pub(super) fn validate(
    payload: Result<Json<RecipeCreate>, JsonRejection>,
) -> Result<RecipeCreate, ApiError> {
    let Json(recipe) = payload.map_err(|rejection| {
        tracing::debug!(reason = %rejection.body_text(), "Rejected recipe body");
        ApiError::InvalidRecipe
    })?;

    if let Some(field) = recipe.blank_field() {
        tracing::debug!(field, "Rejected recipe with empty field");
        return Err(ApiError::InvalidRecipe);
    }

    Ok(recipe)
}

pub async fn create_recipe(
    State(client): State<AppState>,
    payload: Result<Json<RecipeCreate>, JsonRejection>,
) -> Result<Json<Recipe>, ApiError> {
    let recipe = validate(payload)?;
    let created = client.create_recipe(recipe).await?;
    Ok(Json(created))
}
