//! Validation steps that only apply to orders.

use crate::error::ApiError;
use crate::model::{OrderStatus, Resource};
use crate::pipeline::{positive_integer, Payload, ValidationStep};
use serde_json::Value;

/// `dishes` must be a sequence.
#[derive(Debug, Clone, Copy)]
pub struct DishesIsArray;

impl ValidationStep for DishesIsArray {
    fn check(&self, _resource: Resource, payload: &Payload) -> Result<(), ApiError> {
        match payload.field("dishes") {
            Some(Value::Array(_)) => Ok(()),
            _ => Err(ApiError::InvalidDishes),
        }
    }
}

/// Every line's `quantity` must be a positive integer.
///
/// Fails with the zero-based index of the first offending line.
#[derive(Debug, Clone, Copy)]
pub struct LineQuantities;

impl ValidationStep for LineQuantities {
    fn check(&self, _resource: Resource, payload: &Payload) -> Result<(), ApiError> {
        let Some(Value::Array(lines)) = payload.field("dishes") else {
            return Err(ApiError::InvalidDishes);
        };
        for (index, line) in lines.iter().enumerate() {
            if line.get("quantity").and_then(positive_integer).is_none() {
                return Err(ApiError::InvalidQuantity(index));
            }
        }
        Ok(())
    }
}

/// `status` must be one of the four lifecycle values.
#[derive(Debug, Clone, Copy)]
pub struct KnownStatus;

impl ValidationStep for KnownStatus {
    fn check(&self, _resource: Resource, payload: &Payload) -> Result<(), ApiError> {
        match payload.field("status").map(OrderStatus::from_value) {
            Some(status) if status.is_known() => Ok(()),
            _ => Err(ApiError::InvalidStatus),
        }
    }
}
