//! [`ActorEntity`] implementation for [`Dish`].
//!
//! | Operation | Steps |
//! |-----------|-------|
//! | create | present(name, description, price, image_url), valid price |
//! | update | present(name, description, price, image_url), non-empty(name, description, image_url), valid price, id match |
//!
//! Dishes are never deleted: [`Dish::on_delete`] always refuses.

use super::validation::ValidPrice;
use crate::error::ApiError;
use crate::framework::ActorEntity;
use crate::model::{Dish, Resource};
use crate::pipeline::{positive_integer, IdMatchesRoute, Payload, Pipeline};

const REQUIRED: [&str; 4] = ["name", "description", "price", "image_url"];

impl ActorEntity for Dish {
    const RESOURCE: Resource = Resource::Dish;

    fn id(&self) -> &str {
        &self.id
    }

    fn set_id(&mut self, id: String) {
        self.id = id;
    }

    fn create_pipeline() -> Pipeline {
        Pipeline::new(Self::RESOURCE)
            .require(&REQUIRED)
            .step(ValidPrice)
    }

    fn update_pipeline() -> Pipeline {
        Pipeline::new(Self::RESOURCE)
            .require(&REQUIRED)
            .require_non_empty(&["name", "description", "image_url"])
            .step(ValidPrice)
            .step(IdMatchesRoute)
    }

    fn from_payload(id: String, payload: &Payload) -> Result<Self, ApiError> {
        let price = payload
            .field("price")
            .and_then(positive_integer)
            .ok_or(ApiError::InvalidPrice)?;
        Ok(Dish::new(
            id,
            payload.string(Self::RESOURCE, "name")?,
            payload.string(Self::RESOURCE, "description")?,
            price,
            payload.string(Self::RESOURCE, "image_url")?,
        ))
    }

    fn on_delete(&self) -> Result<(), ApiError> {
        Err(ApiError::MethodNotAllowed {
            method: "DELETE".to_string(),
            path: format!("/{}/{}", Self::RESOURCE.collection(), self.id),
        })
    }
}
