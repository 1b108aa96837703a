//! # Recipe Actor
//!
//! The single owner of the recipe collection. Every create, read, update, delete and
//! search goes through this actor's channel, so id allocation and insertion never race.
//!
//! ## Structure
//!
//! - [`entity`] - [`ActorEntity`](actor_framework::ActorEntity) implementation for [`Recipe`]
//! - [`error`] - [`RecipeError`] type for type-safe error handling
//! - [`new()`] - Factory function that creates the actor and client
//!
//! ## Usage
//!
//! ```rust
//! use froggy_pies::model::{RecipeCreate, RecipeKind, Difficulty};
//! use froggy_pies::recipe_actor;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let (actor, client) = recipe_actor::new(32);
//!     tokio::spawn(actor.run());
//!
//!     let pie = client
//!         .create_recipe(RecipeCreate {
//!             title: "Apple Pie".to_string(),
//!             kind: RecipeKind::Pie,
//!             ingredients: vec!["apples".to_string()],
//!             instructions: "Bake it".to_string(),
//!             notes: None,
//!             image_type: "berry-red".to_string(),
//!             tags: vec![],
//!             bake_temp: Some(375),
//!             difficulty: Difficulty::Easy,
//!         })
//!         .await?;
//!     assert_eq!(pie.id.0, 1);
//!     Ok(())
//! }
//! ```

pub mod entity;
pub mod error;

pub use error::*;

use crate::clients::RecipeClient;
use crate::model::Recipe;
use actor_framework::ResourceActor;

/// Creates a new Recipe actor and its client.
pub fn new(buffer_size: usize) -> (ResourceActor<Recipe>, RecipeClient) {
    let (actor, client) = ResourceActor::new(buffer_size);
    (actor, RecipeClient::new(client))
}
