use crate::api::{ApiError, AppState};
use crate::model::Recipe;
use actor_framework::ActorClient;
use axum::extract::State;
use axum::Json;

/// Every recipe, oldest first.
pub async fn list_recipes(State(client): State<AppState>) -> Result<Json<Vec<Recipe>>, ApiError> {
    let recipes = client.list().await?;
    Ok(Json(recipes))
}
