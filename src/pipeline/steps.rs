//! Validation steps shared by both resources.

use super::{is_truthy, Payload, ValidationStep};
use crate::error::ApiError;
use crate::model::Resource;
use serde_json::Value;

/// The field must be present and truthy.
#[derive(Debug, Clone, Copy)]
pub struct Present(pub &'static str);

impl ValidationStep for Present {
    fn check(&self, resource: Resource, payload: &Payload) -> Result<(), ApiError> {
        match payload.field(self.0) {
            Some(value) if is_truthy(value) => Ok(()),
            _ => Err(ApiError::MissingField {
                resource,
                field: self.0,
            }),
        }
    }
}

/// The field must be a string or sequence with at least one element.
#[derive(Debug, Clone, Copy)]
pub struct NotEmpty(pub &'static str);

impl ValidationStep for NotEmpty {
    fn check(&self, resource: Resource, payload: &Payload) -> Result<(), ApiError> {
        let len = match payload.field(self.0) {
            Some(Value::String(s)) => s.len(),
            Some(Value::Array(items)) => items.len(),
            _ => 0,
        };
        if len > 0 {
            Ok(())
        } else {
            Err(ApiError::EmptyField {
                resource,
                field: self.0,
            })
        }
    }
}

/// An `id` in the payload, if given, must equal the route id.
///
/// A missing, `null` or empty id passes. Numbers are compared by their decimal
/// text, so `3` matches the route id `"3"`.
#[derive(Debug, Clone, Copy)]
pub struct IdMatchesRoute;

impl ValidationStep for IdMatchesRoute {
    fn check(&self, resource: Resource, payload: &Payload) -> Result<(), ApiError> {
        let payload_id = match payload.field("id") {
            None | Some(Value::Null) => return Ok(()),
            Some(Value::String(s)) if s.is_empty() => return Ok(()),
            Some(Value::String(s)) => s.clone(),
            Some(other) => other.to_string(),
        };
        let route_id = payload.route_id().unwrap_or_default();
        if payload_id == route_id {
            Ok(())
        } else {
            Err(ApiError::IdMismatch {
                resource,
                payload_id,
                route_id: route_id.to_string(),
            })
        }
    }
}
