//! # Recipe Client
//!
//! Provides a high-level API for interacting with the `Recipe` actor.
//! It wraps a `ResourceClient<Recipe>` and exposes domain-specific methods.
use crate::model::{Recipe, RecipeCreate, RecipeId, RecipeQuery};
use crate::recipe_actor::RecipeError;
use actor_framework::{ActorClient, FrameworkError, ResourceClient};
use async_trait::async_trait;
use tracing::{debug, instrument};

/// Client for interacting with the Recipe actor.
///
/// `get`, `list` and `delete` come from [`ActorClient`].
#[derive(Clone)]
pub struct RecipeClient {
    inner: ResourceClient<Recipe>,
}

impl RecipeClient {
    pub fn new(inner: ResourceClient<Recipe>) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl ActorClient<Recipe> for RecipeClient {
    type Error = RecipeError;

    fn inner(&self) -> &ResourceClient<Recipe> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        RecipeError::StoreUnavailable(e.to_string())
    }
}

impl RecipeClient {
    /// Stores a new recipe and returns it with its assigned id.
    #[instrument(skip(self, params), fields(title = %params.title))]
    pub async fn create_recipe(&self, params: RecipeCreate) -> Result<Recipe, RecipeError> {
        debug!(?params, "create_recipe called");
        self.inner.create(params).await.map_err(Self::map_error)
    }

    /// Replaces every field of recipe `id`. Stores the recipe under `id` if it is absent.
    #[instrument(skip(self, params))]
    pub async fn update_recipe(
        &self,
        id: RecipeId,
        params: RecipeCreate,
    ) -> Result<Recipe, RecipeError> {
        debug!(?params, "update_recipe called");
        self.inner.update(id, params).await.map_err(Self::map_error)
    }

    /// Recipes whose title or ingredients contain `text`, ignoring case, in list order.
    #[instrument(skip(self))]
    pub async fn search_recipes(&self, text: &str) -> Result<Vec<Recipe>, RecipeError> {
        debug!("Sending request");
        self.inner
            .search(RecipeQuery::new(text))
            .await
            .map_err(Self::map_error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Difficulty, RecipeKind};
    use actor_framework::mock::{create_mock_client, expect_search, expect_update, MockClient};

    fn crust() -> RecipeCreate {
        RecipeCreate {
            title: "Graham Cracker Crust".to_string(),
            kind: RecipeKind::Crust,
            ingredients: vec!["graham crackers".to_string(), "butter".to_string()],
            instructions: "Press into the pan".to_string(),
            notes: None,
            image_type: "graham".to_string(),
            tags: vec!["no-bake".to_string()],
            bake_temp: None,
            difficulty: Difficulty::Easy,
        }
    }

    #[tokio::test]
    async fn test_search_sends_lowercased_query() {
        let (client, mut receiver) = create_mock_client::<Recipe>(10);
        let recipe_client = RecipeClient::new(client);

        let search_task =
            tokio::spawn(async move { recipe_client.search_recipes("GRAHAM").await });

        let (query, responder) = expect_search(&mut receiver)
            .await
            .expect("Expected Search request");
        assert_eq!(query.needle(), "graham");
        responder
            .send(Ok(vec![Recipe::new(RecipeId(1), crust())]))
            .unwrap();

        let hits = search_task.await.unwrap().unwrap();
        assert_eq!(hits.len(), 1);
    }

    #[tokio::test]
    async fn test_update_forwards_id_and_payload() {
        let (client, mut receiver) = create_mock_client::<Recipe>(10);
        let recipe_client = RecipeClient::new(client);

        let update_task = tokio::spawn(async move {
            recipe_client.update_recipe(RecipeId(5), crust()).await
        });

        let (id, params, responder) = expect_update(&mut receiver)
            .await
            .expect("Expected Update request");
        assert_eq!(id, RecipeId(5));
        assert_eq!(params.title, "Graham Cracker Crust");
        responder.send(Ok(Recipe::new(id, params))).unwrap();

        let updated = update_task.await.unwrap().unwrap();
        assert_eq!(updated.id, RecipeId(5));
    }

    #[tokio::test]
    async fn test_store_failure_maps_to_recipe_error() {
        let mut mock = MockClient::<Recipe>::new();
        mock.expect_create()
            .return_err(FrameworkError::ActorClosed);
        mock.expect_get(RecipeId(1))
            .return_err(FrameworkError::ActorDropped);

        let client = RecipeClient::new(mock.client());
        let created = client.create_recipe(crust()).await;
        assert!(matches!(created, Err(RecipeError::StoreUnavailable(_))));
        let fetched = client.get(RecipeId(1)).await;
        assert!(matches!(fetched, Err(RecipeError::StoreUnavailable(_))));

        mock.verify();
    }
}
