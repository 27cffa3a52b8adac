//! Validation steps that only apply to dishes.

use crate::error::ApiError;
use crate::model::Resource;
use crate::pipeline::{positive_integer, Payload, ValidationStep};

/// `price` must be an integer greater than zero.
#[derive(Debug, Clone, Copy)]
pub struct ValidPrice;

impl ValidationStep for ValidPrice {
    fn check(&self, _resource: Resource, payload: &Payload) -> Result<(), ApiError> {
        payload
            .field("price")
            .and_then(positive_integer)
            .map(|_| ())
            .ok_or(ApiError::InvalidPrice)
    }
}
