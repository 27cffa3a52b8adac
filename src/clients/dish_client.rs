//! # Dish Client
//!
//! Provides a high-level API for interacting with the `Dish` actor.

use crate::clients::actor_client::ActorClient;
use crate::error::ApiError;
use crate::framework::{FrameworkError, ResourceClient};
use crate::model::Dish;
use crate::pipeline::Payload;
use async_trait::async_trait;
use serde_json::Value;
use tracing::{debug, instrument};

/// Client for interacting with the Dish actor.
#[derive(Clone)]
pub struct DishClient {
    inner: ResourceClient<Dish>,
}

impl DishClient {
    pub fn new(inner: ResourceClient<Dish>) -> Self {
        Self { inner }
    }

    /// Validates `data` and appends a new dish with a fresh id.
    #[instrument(skip(self, data))]
    pub async fn create_dish(&self, data: Value) -> Result<Dish, ApiError> {
        debug!(?data, "create_dish called");
        self.inner
            .create(Payload::new(data))
            .await
            .map_err(Self::map_error)
    }

    /// Validates `data` against the dish `id` and overwrites it.
    #[instrument(skip(self, data))]
    pub async fn update_dish(&self, id: &str, data: Value) -> Result<Dish, ApiError> {
        debug!(?data, "update_dish called");
        self.inner
            .update(id, Payload::new(data))
            .await
            .map_err(Self::map_error)
    }
}

#[async_trait]
impl ActorClient<Dish> for DishClient {
    type Error = ApiError;

    fn inner(&self) -> &ResourceClient<Dish> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        ApiError::from(e)
    }
}
