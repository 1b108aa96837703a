//! # ActorEntity Trait
//!
//! The `ActorEntity` trait is the contract a resource type must satisfy to be kept in an
//! [`EntityStore`](crate::store::EntityStore) and served by a [`ResourceActor`](crate::ResourceActor).
//!
//! The store never inspects an entity beyond this trait: it asks the entity to build
//! itself from an id and a payload, and to say whether it matches a search query.
//! Everything else (identity allocation, ordering, replacement) is the store's job.
//!
//! # Associated Types
//!
//! - `Id`: the key. Must be buildable from the store's `u32` counter.
//! - `Params`: the payload for both create and update. An update replaces every field
//!   except the id, so it takes the same payload as a create.
//! - `Query`: whatever [`ActorEntity::matches`] needs to filter a search.

use std::fmt::{Debug, Display};
use std::hash::Hash;

/// Trait that any resource entity must implement to be managed by ResourceActor.
pub trait ActorEntity: Clone + Send + Sync + 'static {
    /// The unique identifier for this entity.
    /// Must be convertible from u32 for automatic ID generation.
    type Id: Eq + Hash + Clone + Send + Sync + Display + Debug + From<u32>;

    /// The data carried by create and update requests (id excluded).
    type Params: Send + Sync + Debug;

    /// The search criteria understood by [`ActorEntity::matches`].
    type Query: Send + Sync + Debug;

    /// Construct the full entity from its id and payload.
    ///
    /// Used for creates and for updates alike; the id always wins over anything the
    /// payload might carry.
    fn from_params(id: Self::Id, params: Self::Params) -> Self;

    fn id(&self) -> &Self::Id;

    /// Returns true when this entity belongs in the result of a search for `query`.
    fn matches(&self, query: &Self::Query) -> bool;
}
