//! Entity trait implementation for the Recipe domain type.

use crate::model::{Recipe, RecipeCreate, RecipeId, RecipeQuery};
use actor_framework::ActorEntity;

impl ActorEntity for Recipe {
    type Id = RecipeId;
    type Params = RecipeCreate;
    type Query = RecipeQuery;

    fn from_params(id: RecipeId, params: RecipeCreate) -> Self {
        Recipe::new(id, params)
    }

    fn id(&self) -> &RecipeId {
        &self.id
    }

    fn matches(&self, query: &RecipeQuery) -> bool {
        self.matches_query(query)
    }
}
