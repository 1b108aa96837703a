//! # Observability & Tracing
//!
//! Structured logging for the whole process.
//!
//! The subscriber uses a compact format without the module prefix (`with_target(false)`);
//! the actor's events carry an `entity_type` field instead. `RUST_LOG` wins when it is
//! set, otherwise the configured default filter applies.
//!
//! ## What Gets Traced
//!
//! - **Actor Lifecycle**: startup, shutdown and final collection size
//! - **Store Operations**: creates, updates and deletes at `info`, reads at `debug`
//! - **Client Calls**: one span per [`RecipeClient`](crate::clients::RecipeClient) method
//! - **HTTP Requests**: one `http_request` span per request with method and path, and a
//!   completion event with status and latency
//!
//! ## Workflow Trace Example
//!
//! **With `RUST_LOG=info`**:
//!
//! ```text
//! INFO Actor started entity_type="Recipe"
//! INFO http_request: Created entity_type="Recipe" id=1 size=1
//! INFO http_request: request completed status=200 latency_ms=0
//! ```

use tracing_subscriber::EnvFilter;

/// Installs the global subscriber. `default_filter` applies when `RUST_LOG` is unset.
pub fn setup_tracing(default_filter: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false) // Don't show module paths - we use entity_type instead
        .compact()
        .init();
}
