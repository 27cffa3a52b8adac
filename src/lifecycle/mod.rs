//! # System Lifecycle & Orchestration
//!
//! Starting, wiring and stopping the two resource actors.
//!
//! 1. [`Config`] is read from `GRUBDASH_*` environment variables.
//! 2. [`SeedData`] provides the fixture collections, or nothing.
//! 3. [`RestaurantSystem`] creates one shared [`IdGenerator`](crate::framework::IdGenerator),
//!    seeds and spawns both actors and keeps their join handles.
//! 4. [`RestaurantSystem::shutdown`] drops the clients and waits for the actors to drain.
//!
//! Observability is set up once per process with [`setup_tracing`].

pub mod config;
pub mod restaurant_system;
pub mod seed;
pub mod tracing;

pub use config::Config;
pub use restaurant_system::{RestaurantSystem, SystemError};
pub use seed::SeedData;
pub use self::tracing::setup_tracing;
