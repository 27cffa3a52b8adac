//! # HTTP Transport
//!
//! Maps the REST routes onto the resource clients. Handlers only translate:
//! the `data` envelope in, `{ "data": ... }` or `{ "error": ... }` out. All
//! validation happens behind the clients.
//!
//! | Route | Methods |
//! |-------|---------|
//! | `/dishes` | `GET`, `POST` |
//! | `/dishes/:dishId` | `GET`, `PUT` (`DELETE` always 405) |
//! | `/orders` | `GET`, `POST` |
//! | `/orders/:orderId` | `GET`, `PUT`, `DELETE` |
//! | `/health` | `GET` |
//!
//! Any other method on these paths answers 405, any other path 404.

pub mod dishes;
pub mod orders;
pub mod response;

pub use response::{Data, DataBody};

use crate::clients::{DishClient, OrderClient};
use crate::error::ApiError;
use crate::lifecycle::RestaurantSystem;
use axum::extract::Request;
use axum::http::{Method, Uri};
use axum::middleware::{self, Next};
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use serde_json::json;
use std::future::Future;
use tokio::net::TcpListener;
use tracing::{debug, info, info_span, Instrument};

/// Shared handler state: one client per collection.
#[derive(Clone)]
pub struct AppState {
    pub dishes: DishClient,
    pub orders: OrderClient,
}

impl AppState {
    pub fn new(dishes: DishClient, orders: OrderClient) -> Self {
        Self { dishes, orders }
    }

    /// Clones the clients of a running system.
    pub fn from_system(system: &RestaurantSystem) -> Self {
        Self::new(system.dish_client.clone(), system.order_client.clone())
    }
}

/// Builds the application router.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health).fallback(method_not_allowed))
        .route(
            "/dishes",
            get(dishes::list)
                .post(dishes::create)
                .fallback(method_not_allowed),
        )
        .route(
            "/dishes/:dish_id",
            get(dishes::read)
                .put(dishes::update)
                .delete(dishes::delete)
                .fallback(method_not_allowed),
        )
        .route(
            "/orders",
            get(orders::list)
                .post(orders::create)
                .fallback(method_not_allowed),
        )
        .route(
            "/orders/:order_id",
            get(orders::read)
                .put(orders::update)
                .delete(orders::delete)
                .fallback(method_not_allowed),
        )
        .fallback(path_not_found)
        .layer(middleware::from_fn(trace_request))
        .with_state(state)
}

/// Serves `state` on `listener` until `shutdown` resolves.
///
/// The router (and its client clones) is dropped when this returns, after
/// which [`RestaurantSystem::shutdown`] can drain the actors.
pub async fn serve<F>(listener: TcpListener, state: AppState, shutdown: F) -> std::io::Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    info!(addr = %listener.local_addr()?, "Listening");
    axum::serve(listener, router(state))
        .with_graceful_shutdown(shutdown)
        .await
}

async fn trace_request(request: Request, next: Next) -> Response {
    let span = info_span!(
        "request",
        method = %request.method(),
        path = %request.uri().path()
    );
    async move {
        let response = next.run(request).await;
        debug!(status = %response.status(), "Response");
        response
    }
    .instrument(span)
    .await
}

async fn health() -> impl IntoResponse {
    Json(json!({ "ok": true }))
}

pub(crate) async fn method_not_allowed(method: Method, uri: Uri) -> ApiError {
    ApiError::MethodNotAllowed {
        method: method.to_string(),
        path: uri.path().to_string(),
    }
}

async fn path_not_found(uri: Uri) -> ApiError {
    ApiError::PathNotFound(uri.path().to_string())
}
