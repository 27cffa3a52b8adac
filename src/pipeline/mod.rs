//! # Validation Pipelines
//!
//! Every mutating operation runs its request payload through a [`Pipeline`]: an
//! ordered list of independent [`ValidationStep`]s. The executor runs the steps in
//! order and stops at the first failure, whose [`ApiError`] becomes the result of
//! the whole request. Steps only read the payload; the mutation happens after
//! the pipeline has passed, so a rejected request never leaves a partial change.
//!
//! Nothing in here knows about HTTP. The transport hands over a [`Payload`] (the
//! `data` object plus the route id, if any) and receives a `Result`.

pub mod steps;

pub use steps::*;

use crate::error::ApiError;
use crate::model::Resource;
use serde_json::Value;
use std::fmt::Debug;
use tracing::{debug, trace};

/// The request data a pipeline validates.
#[derive(Debug, Clone, PartialEq)]
pub struct Payload {
    data: Value,
    route_id: Option<String>,
}

impl Payload {
    /// Wraps the `data` object of a request body.
    pub fn new(data: Value) -> Self {
        Self {
            data,
            route_id: None,
        }
    }

    /// Attaches the id taken from the request route.
    pub fn with_route_id(mut self, id: impl Into<String>) -> Self {
        self.route_id = Some(id.into());
        self
    }

    pub fn data(&self) -> &Value {
        &self.data
    }

    pub fn route_id(&self) -> Option<&str> {
        self.route_id.as_deref()
    }

    /// Looks up a top-level field. Returns `None` when `data` is not an object.
    pub fn field(&self, name: &str) -> Option<&Value> {
        self.data.get(name)
    }

    /// Reads a required string field.
    pub fn string(&self, resource: Resource, field: &'static str) -> Result<String, ApiError> {
        match self.field(field) {
            Some(Value::String(s)) => Ok(s.clone()),
            None | Some(Value::Null) => Err(ApiError::MissingField { resource, field }),
            Some(_) => Err(ApiError::WrongType {
                resource,
                field,
                expected: "string",
            }),
        }
    }
}

/// JavaScript-style truthiness of a JSON value.
///
/// `null`, `false`, `0` and `""` are falsy; every array and object is truthy,
/// even an empty one.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// Returns the value as a positive integer, accepting integral floats like `2.0`.
pub fn positive_integer(value: &Value) -> Option<u64> {
    if let Some(n) = value.as_u64() {
        return (n > 0).then_some(n);
    }
    let f = value.as_f64()?;
    if f.is_finite() && f > 0.0 && f.fract() == 0.0 && f <= u64::MAX as f64 {
        Some(f as u64)
    } else {
        None
    }
}

/// A single named check over a payload.
pub trait ValidationStep: Debug + Send + Sync {
    /// Passes with `Ok(())` or halts the pipeline with the error to report.
    fn check(&self, resource: Resource, payload: &Payload) -> Result<(), ApiError>;
}

/// An ordered chain of validation steps for one operation on one resource.
#[derive(Debug)]
pub struct Pipeline {
    resource: Resource,
    steps: Vec<Box<dyn ValidationStep>>,
}

impl Pipeline {
    pub fn new(resource: Resource) -> Self {
        Self {
            resource,
            steps: Vec::new(),
        }
    }

    /// Appends a step.
    pub fn step(mut self, step: impl ValidationStep + 'static) -> Self {
        self.steps.push(Box::new(step));
        self
    }

    /// Appends one [`Present`] step per field, in the given order.
    pub fn require(mut self, fields: &[&'static str]) -> Self {
        for &field in fields {
            self.steps.push(Box::new(Present(field)));
        }
        self
    }

    /// Appends one [`NotEmpty`] step per field, in the given order.
    pub fn require_non_empty(mut self, fields: &[&'static str]) -> Self {
        for &field in fields {
            self.steps.push(Box::new(NotEmpty(field)));
        }
        self
    }

    pub fn resource(&self) -> Resource {
        self.resource
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Runs every step in order, stopping at the first failure.
    pub fn run(&self, payload: &Payload) -> Result<(), ApiError> {
        for step in &self.steps {
            trace!(resource = %self.resource, ?step, "Validate");
            if let Err(e) = step.check(self.resource, payload) {
                debug!(resource = %self.resource, ?step, error = %e, "Validation failed");
                return Err(e);
            }
        }
        Ok(())
    }
}
