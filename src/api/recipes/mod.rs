pub mod create;
pub mod delete;
pub mod get;
pub mod list;
pub mod search;
pub mod update;

use crate::api::AppState;
use crate::model::RecipeId;
use axum::routing::get;
use axum::Router;

/// Returns the router for /api/recipes endpoints (mounted at /api/recipes)
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list::list_recipes).post(create::create_recipe))
        .route("/search/{query}", get(search::search_recipes))
        .route(
            "/{id}",
            get(get::get_recipe)
                .put(update::update_recipe)
                .delete(delete::delete_recipe),
        )
}

/// Path ids are taken as text so a non-integer id reaches the handler instead of being
/// rejected by the extractor. Such an id names no recipe.
fn parse_id(raw: &str) -> Option<RecipeId> {
    raw.parse().ok()
}
