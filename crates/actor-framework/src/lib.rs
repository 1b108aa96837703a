//! # Actor Framework
//!
//! Building blocks for keeping a collection of entities in memory behind a single owning
//! task. One [`ResourceActor`] owns an [`EntityStore`] and processes requests sequentially;
//! any number of cheap [`ResourceClient`] clones send it requests over a bounded channel.
//!
//! ## Layers
//!
//! 1. **Entity Layer** ([`ActorEntity`]) - how an entity is built from a payload and how it
//!    matches a search query.
//! 2. **Store Layer** ([`EntityStore`]) - insertion-ordered map plus a monotonic id counter.
//!    Create, get, list, update (upsert), delete (idempotent) and search.
//! 3. **Runtime Layer** ([`ResourceActor`]) - message loop, structured logging.
//! 4. **Interface Layer** ([`ResourceClient`], [`ActorClient`]) - typed async calls.
//!
//! ## Concurrency Model
//!
//! - The actor runs in its own Tokio task and is the only owner of the store.
//! - Messages are processed one at a time, so "allocate an id, then insert" is atomic
//!   from every caller's point of view without a mutex.
//! - Dropping the last client closes the channel; the actor logs its final size and exits.
//!
//! ## Testing
//!
//! The [`mock`] module lets domain clients be tested against scripted responses instead
//! of a running actor.

pub mod actor;
pub mod client;
pub mod client_trait;
pub mod entity;
pub mod error;
pub mod message;
pub mod mock;
pub mod store;

// Re-export core types for convenience
pub use actor::ResourceActor;
pub use client::ResourceClient;
pub use client_trait::ActorClient;
pub use entity::ActorEntity;
pub use error::FrameworkError;
pub use message::{ResourceRequest, Response};
pub use store::EntityStore;
