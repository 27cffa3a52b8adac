//! Request and response envelopes.

use crate::error::ApiError;
use axum::async_trait;
use axum::extract::{FromRequest, Request};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use serde_json::{json, Map, Value};

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status =
            StatusCode::from_u16(self.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        let body = json!({ "error": self.to_string() });
        (status, Json(body)).into_response()
    }
}

/// A successful response body, `{ "data": ... }`.
#[derive(Debug, Clone)]
pub struct Data<T>(pub T);

impl<T: Serialize> IntoResponse for Data<T> {
    fn into_response(self) -> Response {
        Json(json!({ "data": self.0 })).into_response()
    }
}

/// The `data` member of a JSON request body.
///
/// A body without `data` (or one that is not an object) yields `{}`, so the
/// presence checks report the first missing field. A body that is not JSON is
/// rejected with [`ApiError::MalformedBody`].
#[derive(Debug, Clone, PartialEq)]
pub struct DataBody(pub Value);

#[async_trait]
impl<S> FromRequest<S> for DataBody
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(body) = Json::<Value>::from_request(req, state)
            .await
            .map_err(|rejection| ApiError::MalformedBody(rejection.body_text()))?;
        Ok(Self(extract_data(body)))
    }
}

fn extract_data(body: Value) -> Value {
    match body {
        Value::Object(mut fields) => fields
            .remove("data")
            .unwrap_or_else(|| Value::Object(Map::new())),
        _ => Value::Object(Map::new()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn data_is_unwrapped() {
        assert_eq!(
            extract_data(json!({ "data": { "name": "Taco" } })),
            json!({ "name": "Taco" })
        );
    }

    #[test]
    fn missing_data_is_an_empty_object() {
        assert_eq!(extract_data(json!({ "name": "Taco" })), json!({}));
        assert_eq!(extract_data(json!([1, 2])), json!({}));
    }

    #[test]
    fn errors_map_to_status_codes() {
        let response = ApiError::InvalidPrice.into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let response = ApiError::PathNotFound("/nope".into()).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let response = ApiError::MethodNotAllowed {
            method: "PATCH".into(),
            path: "/dishes".into(),
        }
        .into_response();
        assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
    }
}
