//! [`ActorEntity`] implementation for [`Order`].
//!
//! | Operation | Steps |
//! |-----------|-------|
//! | create | present(deliverTo), non-empty(deliverTo), present(mobileNumber), present(dishes), non-empty(dishes), dishes is array, line quantities |
//! | update | the create steps, present(status), known status, id match |
//!
//! An order can only be deleted while it is pending.

use super::validation::{DishesIsArray, KnownStatus, LineQuantities};
use crate::error::ApiError;
use crate::framework::ActorEntity;
use crate::model::{Order, OrderLine, OrderStatus, Resource};
use crate::pipeline::{positive_integer, IdMatchesRoute, Payload, Pipeline};
use serde_json::Value;

fn parse_line(index: usize, value: &Value) -> Result<OrderLine, ApiError> {
    let Value::Object(fields) = value else {
        return Err(ApiError::InvalidQuantity(index));
    };
    let quantity = fields
        .get("quantity")
        .and_then(positive_integer)
        .ok_or(ApiError::InvalidQuantity(index))?;
    let mut details = fields.clone();
    let dish_id = details.remove("dishId");
    details.remove("quantity");
    Ok(OrderLine {
        dish_id,
        quantity,
        details,
    })
}

impl ActorEntity for Order {
    const RESOURCE: Resource = Resource::Order;

    fn id(&self) -> &str {
        &self.id
    }

    fn set_id(&mut self, id: String) {
        self.id = id;
    }

    fn create_pipeline() -> Pipeline {
        Pipeline::new(Self::RESOURCE)
            .require(&["deliverTo"])
            .require_non_empty(&["deliverTo"])
            .require(&["mobileNumber", "dishes"])
            .require_non_empty(&["dishes"])
            .step(DishesIsArray)
            .step(LineQuantities)
    }

    fn update_pipeline() -> Pipeline {
        Self::create_pipeline()
            .require(&["status"])
            .step(KnownStatus)
            .step(IdMatchesRoute)
    }

    fn from_payload(id: String, payload: &Payload) -> Result<Self, ApiError> {
        let Some(Value::Array(lines)) = payload.field("dishes") else {
            return Err(ApiError::InvalidDishes);
        };
        let dishes = lines
            .iter()
            .enumerate()
            .map(|(index, line)| parse_line(index, line))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Order {
            id,
            deliver_to: payload.string(Self::RESOURCE, "deliverTo")?,
            mobile_number: payload.string(Self::RESOURCE, "mobileNumber")?,
            status: payload.field("status").map(OrderStatus::from_value),
            dishes,
        })
    }

    fn on_delete(&self) -> Result<(), ApiError> {
        if self.is_pending() {
            Ok(())
        } else {
            Err(ApiError::DeleteConstraintViolation)
        }
    }
}
