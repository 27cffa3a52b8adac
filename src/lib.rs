//! # GrubDash
//!
//! > **An in-memory REST API for a restaurant's dishes and orders.**
//!
//! Every mutating request runs through a **validation pipeline**: an ordered
//! list of independent checks over the request payload. The first failing
//! check ends the request with its error; only a payload that passed every
//! check reaches the mutation, so a rejected request never changes a store.
//!
//! ## Architecture Notes
//!
//! ### 1. One actor per collection
//! Each collection lives inside a [`ResourceActor`](framework::ResourceActor)
//! running in its own Tokio task. It processes requests one at a time, so the
//! store needs no locks and requests on one collection are strictly sequential.
//!
//! ### 2. Pipelines are data
//! A [`Pipeline`](pipeline::Pipeline) is a list of [`ValidationStep`](pipeline::ValidationStep)
//! trait objects. Each entity declares its create and update pipelines in its
//! [`ActorEntity`](framework::ActorEntity) implementation; the actor decides
//! when they run (lookup first, mutation last).
//!
//! ### 3. One error type
//! [`ApiError`](error::ApiError) covers every way a request can fail and knows
//! its HTTP status. Validators, actors and clients return it through `Result`;
//! only the [`http`] layer turns it into a response.
//!
//! ### 4. Observability
//! `tracing` everywhere, with structured fields. See [`lifecycle::tracing`].
//!
//! ## Module Tour
//!
//! - [`framework`]: the generic actor, client, id generator and mocks.
//! - [`pipeline`]: payloads, the pipeline executor and the shared steps.
//! - [`model`]: [`Dish`](model::Dish) and [`Order`](model::Order).
//! - [`dish_actor`], [`order_actor`]: the entity implementations and their steps.
//! - [`clients`]: typed clients that speak [`ApiError`](error::ApiError).
//! - [`lifecycle`]: configuration, seed data, startup and shutdown.
//! - [`http`]: the axum router.
//!
//! ## Running
//!
//! ```bash
//! RUST_LOG=debug cargo run
//! curl -s localhost:5000/dishes
//! ```

pub mod clients;
pub mod dish_actor;
pub mod error;
pub mod framework;
pub mod http;
pub mod lifecycle;
pub mod model;
pub mod order_actor;
pub mod pipeline;
