//! # Froggy Pies
//!
//! A personal pie and crust recipe catalog served as a small JSON API.
//!
//! ## Module Tour
//!
//! ### 1. The Store ([`recipe_actor`])
//! One [`ResourceActor`](actor_framework::ResourceActor) owns every recipe and the id
//! counter. Requests are processed one at a time, so no locks are needed.
//!
//! ### 2. The Interface ([`clients`])
//! [`RecipeClient`](clients::RecipeClient) wraps the raw message passing in typed async
//! calls. `get`, `list` and `delete` come from the [`ActorClient`] trait.
//!
//! ### 3. The Routes ([`api`])
//! axum handlers, one file per operation, under `/api/recipes`. Validation happens here;
//! the store never sees a bad payload.
//!
//! ### 4. The Orchestrator ([`lifecycle`])
//! [`RecipeSystem`](lifecycle::RecipeSystem) starts the store and shuts it down, and
//! [`setup_tracing`](lifecycle::setup_tracing) installs structured logging.
//!
//! ### 5. Supporting Pieces
//! - [`model`]: the recipe types and their JSON shape
//! - [`catalog`]: image variants, tag groups and crust references
//! - [`seed`]: starter recipes for `--seed`
//! - [`config`]: command-line and environment settings
//!
//! ## Running
//!
//! ```bash
//! RUST_LOG=info cargo run -- --seed
//! curl localhost:5000/api/recipes/search/graham
//! ```

pub mod api;
pub mod catalog;
pub mod clients;
pub mod config;
pub mod lifecycle;
pub mod model;
pub mod recipe_actor;
pub mod seed;

pub use actor_framework::ActorClient;
