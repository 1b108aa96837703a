use crate::api::{ApiError, AppState};
use crate::model::Recipe;
use axum::extract::{Path, State};
use axum::Json;

pub async fn search_recipes(
    State(client): State<AppState>,
    Path(query): Path<String>,
) -> Result<Json<Vec<Recipe>>, ApiError> {
    let recipes = client.search_recipes(&query).await?;
    Ok(Json(recipes))
}
