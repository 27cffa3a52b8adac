//! # Observability & Tracing
//!
//! [`setup_tracing`] installs a compact `tracing-subscriber` formatter for the
//! whole process. Module paths are hidden (`with_target(false)`); the actors
//! log an `entity_type` field instead.
//!
//! ## What Gets Traced
//!
//! - **Actor lifecycle**: `Actor started`, `Shutdown` with the store size
//! - **Operations**: `List`, `Create`, `Get`, `Update`, `Delete` at debug
//! - **Mutations**: `Created`, `Updated`, `Deleted` at info
//! - **Rejections**: the failing validation step at debug, the error at warn
//! - **HTTP**: one span per request with method and path
//!
//! ## Usage Examples
//!
//! ```bash
//! # Compact logs (default)
//! cargo run
//!
//! # Show payloads and every validation step
//! RUST_LOG=trace cargo run
//!
//! # Without RUST_LOG, GRUBDASH_LOG_FILTER is used
//! GRUBDASH_LOG_FILTER=warn cargo run
//! ```
//!
//! **With `RUST_LOG=debug`**, a rejected update reads:
//!
//! ```text
//! DEBUG request{method=PUT path=/orders/5}: update_order called data=Object {...}
//! DEBUG Update entity_type="orders" id="5" payload=Payload {...}
//! DEBUG Validation failed resource=Order step=LineQuantities error=Dish 0 must have a quantity that is an integer greater than 0
//! WARN  Update failed entity_type="orders" id="5" error=Dish 0 must have a quantity that is an integer greater than 0
//! ```

use tracing_subscriber::EnvFilter;

/// Installs the global subscriber. `RUST_LOG` takes precedence over `default_filter`.
///
/// Call once per process; a second call panics.
pub fn setup_tracing(default_filter: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false) // Don't show module paths - we use entity_type instead
        .compact()
        .init();
}
