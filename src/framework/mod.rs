//! Generic actor framework for in-memory resource collections.
//!
//! This module provides the building blocks shared by the dish and order
//! subsystems:
//!
//! - [`ActorEntity`] - Trait that resource types implement to be managed by actors
//! - [`ResourceActor`] - Generic actor that owns one ordered collection
//! - [`ResourceClient`] - Type-safe handle for sending requests to an actor
//! - [`IdGenerator`] - Id counter shared by all actors of a system
//! - [`FrameworkError`] - Errors raised by the plumbing itself
//!
//! # Testing
//!
//! See [`mock`] module for utilities to test clients without spawning full actors.

pub mod core;
pub mod ids;
pub mod mock;

// Re-export core types for convenience
pub use core::*;
pub use ids::IdGenerator;
