use super::parse_id;
use crate::api::{ApiError, AppState};
use crate::model::Recipe;
use actor_framework::ActorClient;
use axum::extract::{Path, State};
use axum::Json;

pub async fn get_recipe(
    State(client): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Recipe>, ApiError> {
    let id = parse_id(&id).ok_or(ApiError::NotFound)?;

    match client.get(id).await? {
        Some(recipe) => Ok(Json(recipe)),
        None => Err(ApiError::NotFound),
    }
}
