//! # Generic Messages
//!
//! The requests a `ResourceClient` sends to its `ResourceActor`. Every variant carries a
//! oneshot sender the actor answers on.

use crate::entity::ActorEntity;
use crate::error::FrameworkError;
use tokio::sync::oneshot;

/// Type alias for the one-shot response channel used by actors.
pub type Response<T> = oneshot::Sender<Result<T, FrameworkError>>;

/// Internal message type sent to the actor to request operations.
///
/// The variants map one-to-one onto the [`EntityStore`](crate::store::EntityStore)
/// operations:
///
/// - **Create**: allocate an id and store a new entity built from [`ActorEntity::Params`].
/// - **Get**: fetch one entity by id; absence is `None`, not an error.
/// - **List**: every entity in insertion order.
/// - **Update**: replace (or upsert) the entity at an id.
/// - **Delete**: remove the entity at an id if present.
/// - **Search**: entities matching an [`ActorEntity::Query`].
#[derive(Debug)]
pub enum ResourceRequest<T: ActorEntity> {
    Create {
        params: T::Params,
        respond_to: Response<T>,
    },
    Get {
        id: T::Id,
        respond_to: Response<Option<T>>,
    },
    List {
        respond_to: Response<Vec<T>>,
    },
    Update {
        id: T::Id,
        params: T::Params,
        respond_to: Response<T>,
    },
    Delete {
        id: T::Id,
        respond_to: Response<()>,
    },
    Search {
        query: T::Query,
        respond_to: Response<Vec<T>>,
    },
}
