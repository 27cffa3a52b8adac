//! Dish-specific resource logic and entity implementation.

pub mod entity;
pub mod validation;

pub use validation::ValidPrice;

use crate::clients::DishClient;
use crate::framework::{IdGenerator, ResourceActor};
use crate::model::Dish;

/// Creates a new Dish actor and its client.
///
/// The actor is not running yet; spawn [`ResourceActor::run`] on a Tokio task.
pub fn new(buffer_size: usize, ids: IdGenerator) -> (ResourceActor<Dish>, DishClient) {
    let (actor, generic_client) = ResourceActor::new(buffer_size, ids);
    (actor, DishClient::new(generic_client))
}
