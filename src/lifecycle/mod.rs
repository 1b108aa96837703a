//! # System Lifecycle
//!
//! Starts the recipe store actor, hands its client to whoever needs it (the HTTP layer,
//! the starter-recipe loader) and shuts it down cleanly when the server stops.
//!
//! ## Graceful Shutdown
//!
//! 1. **Drop all clients** - the router and every clone it handed out go first, then
//!    [`RecipeSystem::shutdown`] drops its own client
//! 2. **Actor detects closure** - `receiver.recv()` returns `None` once the queue drains
//! 3. **Await completion** - the actor task is joined and a panic surfaces as
//!    [`ShutdownError`]
//!
//! A client clone still alive elsewhere keeps the actor running, so `shutdown` waits for it.
//!
//! ## Observability
//!
//! [`setup_tracing`] installs the global subscriber once at startup:
//!
//! ```bash
//! RUST_LOG=info cargo run      # Compact logs
//! RUST_LOG=debug cargo run     # Full payloads
//! ```

pub mod recipe_system;
pub mod tracing;

pub use recipe_system::*;
pub use tracing::*;
