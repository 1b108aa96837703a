//! Type-safe wrappers around [`ResourceClient`](actor_framework::ResourceClient).

pub mod recipe_client;

pub use recipe_client::*;
