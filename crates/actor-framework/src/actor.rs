//! # Generic Actor Server
//!
//! This module defines the `ResourceActor`, the task that owns an [`EntityStore`] and
//! serves requests against it one at a time.

use crate::client::ResourceClient;
use crate::entity::ActorEntity;
use crate::message::ResourceRequest;
use crate::store::EntityStore;
use tokio::sync::mpsc;
use tracing::{debug, info};

/// The generic actor that manages a collection of entities.
///
/// This struct is the "Server" half of the actor. It owns the store and the receiver end
/// of the channel. Messages are processed sequentially, so id allocation and insertion on
/// create happen as one step with no lock around the store.
///
/// ```rust
/// use actor_framework::{ActorEntity, ResourceActor};
///
/// #[derive(Clone, Debug)]
/// struct Tag { id: u32, label: String }
///
/// impl ActorEntity for Tag {
///     type Id = u32;
///     type Params = String;
///     type Query = String;
///     fn from_params(id: u32, label: String) -> Self { Self { id, label } }
///     fn id(&self) -> &u32 { &self.id }
///     fn matches(&self, query: &String) -> bool { self.label.contains(query.as_str()) }
/// }
///
/// #[tokio::main]
/// async fn main() {
///     let (actor, client) = ResourceActor::<Tag>::new(10);
///     tokio::spawn(actor.run());
///
///     let tag = client.create("fruit".to_string()).await.unwrap();
///     assert_eq!(tag.id, 1);
/// }
/// ```
pub struct ResourceActor<T: ActorEntity> {
    receiver: mpsc::Receiver<ResourceRequest<T>>,
    store: EntityStore<T>,
}

impl<T: ActorEntity> ResourceActor<T> {
    /// Creates a new `ResourceActor` and its associated `ResourceClient`.
    ///
    /// `buffer_size` is the capacity of the MPSC channel. If the channel is full,
    /// calls to the client wait until there is space.
    pub fn new(buffer_size: usize) -> (Self, ResourceClient<T>) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let actor = Self {
            receiver,
            store: EntityStore::new(),
        };
        let client = ResourceClient::new(sender);
        (actor, client)
    }

    /// Runs the actor's event loop, processing messages until every client is dropped.
    pub async fn run(mut self) {
        // Extract just the type name (e.g., "Recipe" instead of "froggy_pies::model::recipe::Recipe")
        let entity_type = std::any::type_name::<T>()
            .split("::")
            .last()
            .unwrap_or("Unknown");
        info!(entity_type, "Actor started");

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                ResourceRequest::Create { params, respond_to } => {
                    debug!(entity_type, ?params, "Create");
                    let item = self.store.create(params);
                    info!(entity_type, id = %item.id(), size = self.store.len(), "Created");
                    let _ = respond_to.send(Ok(item));
                }
                ResourceRequest::Get { id, respond_to } => {
                    let item = self.store.get(&id);
                    debug!(entity_type, %id, found = item.is_some(), "Get");
                    let _ = respond_to.send(Ok(item));
                }
                ResourceRequest::List { respond_to } => {
                    debug!(entity_type, size = self.store.len(), "List");
                    let _ = respond_to.send(Ok(self.store.list()));
                }
                ResourceRequest::Update {
                    id,
                    params,
                    respond_to,
                } => {
                    debug!(entity_type, %id, ?params, "Update");
                    let item = self.store.update(id.clone(), params);
                    info!(entity_type, %id, size = self.store.len(), "Updated");
                    let _ = respond_to.send(Ok(item));
                }
                ResourceRequest::Delete { id, respond_to } => {
                    let removed = self.store.delete(&id);
                    if removed {
                        info!(entity_type, %id, size = self.store.len(), "Deleted");
                    } else {
                        debug!(entity_type, %id, "Delete of missing entity ignored");
                    }
                    let _ = respond_to.send(Ok(()));
                }
                ResourceRequest::Search { query, respond_to } => {
                    let items = self.store.search(&query);
                    debug!(entity_type, ?query, matches = items.len(), "Search");
                    let _ = respond_to.send(Ok(items));
                }
            }
        }

        info!(entity_type, size = self.store.len(), "Shutdown");
    }
}
