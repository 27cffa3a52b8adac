//! Type-safe wrappers around [`ResourceClient`](crate::framework::ResourceClient).
//!
//! The wrappers turn raw `data` objects into [`Payload`](crate::pipeline::Payload)s
//! and every failure into an [`ApiError`](crate::error::ApiError), which is what
//! the HTTP layer speaks.

pub mod actor_client;
pub mod dish_client;
pub mod order_client;

pub use actor_client::ActorClient;
pub use dish_client::*;
pub use order_client::*;
