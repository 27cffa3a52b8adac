//! # API Errors
//!
//! Every failure a request can end in, from a missing payload field to a closed
//! actor channel. Validators, actors and clients all return [`ApiError`]; only the
//! HTTP layer turns it into a response, using [`ApiError::status_code`].

use crate::model::Resource;
use thiserror::Error;

/// Errors that end a request.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ApiError {
    /// A required field is absent or falsy.
    #[error("{resource} must include a {field}")]
    MissingField {
        resource: Resource,
        field: &'static str,
    },

    /// A string or sequence field has length zero (or no length at all).
    #[error("{resource} must include a {field}")]
    EmptyField {
        resource: Resource,
        field: &'static str,
    },

    /// A field passed validation but has the wrong JSON type.
    #[error("{resource} {field} must be a {expected}")]
    WrongType {
        resource: Resource,
        field: &'static str,
        expected: &'static str,
    },

    #[error("Dish must have a price that is an integer greater than 0")]
    InvalidPrice,

    #[error("Order must have a status of pending, preparing, out-for-delivery, delivered")]
    InvalidStatus,

    #[error("Order must include at least one dish")]
    InvalidDishes,

    /// The order line at this index has a missing or non-positive quantity.
    #[error("Dish {0} must have a quantity that is an integer greater than 0")]
    InvalidQuantity(usize),

    #[error("{resource} id does not match route id. {resource}: {payload_id}, Route: {route_id}")]
    IdMismatch {
        resource: Resource,
        payload_id: String,
        route_id: String,
    },

    #[error("{resource} id not found: {id}")]
    NotFound { resource: Resource, id: String },

    #[error("An order cannot be deleted unless it is pending")]
    DeleteConstraintViolation,

    #[error("{method} not allowed for {path}")]
    MethodNotAllowed { method: String, path: String },

    #[error("Path not found: {0}")]
    PathNotFound(String),

    /// The request body could not be parsed as JSON.
    #[error("{0}")]
    MalformedBody(String),

    /// The owning actor is gone; nothing can be served.
    #[error("Service unavailable: {0}")]
    Unavailable(String),
}

impl ApiError {
    /// HTTP status code for this error.
    pub fn status_code(&self) -> u16 {
        match self {
            ApiError::NotFound { .. } | ApiError::PathNotFound(_) => 404,
            ApiError::MethodNotAllowed { .. } => 405,
            ApiError::Unavailable(_) => 503,
            _ => 400,
        }
    }
}
