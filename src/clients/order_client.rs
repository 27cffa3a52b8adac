//! # Order Client
//!
//! Provides a high-level API for interacting with the `Order` actor.

use crate::clients::actor_client::ActorClient;
use crate::error::ApiError;
use crate::framework::{FrameworkError, ResourceClient};
use crate::model::Order;
use crate::pipeline::Payload;
use async_trait::async_trait;
use serde_json::Value;
use tracing::{debug, info, instrument};

/// Client for interacting with the Order actor.
#[derive(Clone)]
pub struct OrderClient {
    inner: ResourceClient<Order>,
}

impl OrderClient {
    pub fn new(inner: ResourceClient<Order>) -> Self {
        Self { inner }
    }

    /// Validates `data` and appends a new order with a fresh id. The status and
    /// each line's `dishId` are stored as sent, whatever their JSON type.
    #[instrument(skip(self, data))]
    pub async fn create_order(&self, data: Value) -> Result<Order, ApiError> {
        debug!(?data, "create_order called");
        info!("Sending create_order to actor");
        self.inner
            .create(Payload::new(data))
            .await
            .map_err(Self::map_error)
    }

    /// Validates `data` against the order `id` and overwrites it.
    #[instrument(skip(self, data))]
    pub async fn update_order(&self, id: &str, data: Value) -> Result<Order, ApiError> {
        debug!(?data, "update_order called");
        self.inner
            .update(id, Payload::new(data))
            .await
            .map_err(Self::map_error)
    }

    /// Removes the order if it is still pending.
    #[instrument(skip(self))]
    pub async fn delete_order(&self, id: &str) -> Result<(), ApiError> {
        debug!("Sending request");
        self.inner.delete(id).await.map_err(Self::map_error)
    }
}

#[async_trait]
impl ActorClient<Order> for OrderClient {
    type Error = ApiError;

    fn inner(&self) -> &ResourceClient<Order> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        ApiError::from(e)
    }
}
