use crate::clients::RecipeClient;
use thiserror::Error;
use tracing::{error, info};

/// Errors raised while stopping the system.
#[derive(Debug, Error)]
pub enum ShutdownError {
    #[error("Recipe actor task failed: {0}")]
    ActorTask(#[from] tokio::task::JoinError),
}

/// Owns the running recipe store.
///
/// There is exactly one store per process. It is created at startup and lives until
/// [`shutdown`](RecipeSystem::shutdown).
///
/// # Example
///
/// ```rust
/// use froggy_pies::lifecycle::RecipeSystem;
/// use froggy_pies::ActorClient;
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let system = RecipeSystem::new(32);
///     assert!(system.recipe_client.list().await?.is_empty());
///     system.shutdown().await?;
///     Ok(())
/// }
/// ```
pub struct RecipeSystem {
    /// Client for interacting with the Recipe actor
    pub recipe_client: RecipeClient,

    handle: tokio::task::JoinHandle<()>,
}

impl RecipeSystem {
    /// Spawns the recipe actor with a request queue of `channel_capacity`.
    ///
    /// Must be called from within a Tokio runtime.
    pub fn new(channel_capacity: usize) -> Self {
        let (recipe_actor, recipe_client) = crate::recipe_actor::new(channel_capacity);
        let handle = tokio::spawn(recipe_actor.run());

        Self {
            recipe_client,
            handle,
        }
    }

    /// Drops the system's client and waits for the actor to exit.
    ///
    /// Returns once every other clone of the client has been dropped too.
    pub async fn shutdown(self) -> Result<(), ShutdownError> {
        info!("Shutting down system...");

        drop(self.recipe_client);

        if let Err(e) = self.handle.await {
            error!("Actor task failed: {:?}", e);
            return Err(e.into());
        }

        info!("System shutdown complete.");
        Ok(())
    }
}
