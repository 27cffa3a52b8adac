//! Order-specific resource logic and entity implementation.

pub mod entity;
pub mod validation;

pub use validation::{DishesIsArray, KnownStatus, LineQuantities};

use crate::clients::OrderClient;
use crate::framework::{IdGenerator, ResourceActor};
use crate::model::Order;

/// Creates a new Order actor and its client.
///
/// Pass a clone of the generator used for dishes so ids stay unique across
/// both collections.
pub fn new(buffer_size: usize, ids: IdGenerator) -> (ResourceActor<Order>, OrderClient) {
    let (actor, generic_client) = ResourceActor::new(buffer_size, ids);
    (actor, OrderClient::new(generic_client))
}
