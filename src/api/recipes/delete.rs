use super::parse_id;
use crate::api::{ApiError, AppState};
use actor_framework::ActorClient;
use axum::extract::{Path, State};
use axum::http::StatusCode;

/// Always 204 unless the store is gone; deleting a missing recipe is fine.
pub async fn delete_recipe(
    State(client): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    if let Some(id) = parse_id(&id) {
        client.delete(id).await?;
    }
    Ok(StatusCode::NO_CONTENT)
}
