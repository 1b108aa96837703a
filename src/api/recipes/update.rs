use super::create::validate;
use super::parse_id;
use crate::api::{ApiError, AppState};
use crate::model::{Recipe, RecipeCreate};
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::Json;

/// Replaces a recipe wholesale, or stores it under `id` if nothing is there yet.
///
/// The body is validated first, so a bad body answers 400 even for an id that could not
/// exist.
pub async fn update_recipe(
    State(client): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<RecipeCreate>, JsonRejection>,
) -> Result<Json<Recipe>, ApiError> {
    let recipe = validate(payload)?;
    let id = parse_id(&id).ok_or(ApiError::NotFound)?;

    let updated = client.update_recipe(id, recipe).await?;
    Ok(Json(updated))
}
