//! Handlers for `/orders`.

use super::{AppState, Data, DataBody};
use crate::clients::ActorClient;
use crate::error::ApiError;
use crate::model::Order;
use axum::extract::{Path, State};
use axum::http::StatusCode;

pub async fn list(State(state): State<AppState>) -> Result<Data<Vec<Order>>, ApiError> {
    Ok(Data(state.orders.list().await?))
}

pub async fn create(
    State(state): State<AppState>,
    DataBody(data): DataBody,
) -> Result<(StatusCode, Data<Order>), ApiError> {
    let order = state.orders.create_order(data).await?;
    Ok((StatusCode::CREATED, Data(order)))
}

pub async fn read(
    State(state): State<AppState>,
    Path(order_id): Path<String>,
) -> Result<Data<Order>, ApiError> {
    Ok(Data(state.orders.get(&order_id).await?))
}

pub async fn update(
    State(state): State<AppState>,
    Path(order_id): Path<String>,
    DataBody(data): DataBody,
) -> Result<Data<Order>, ApiError> {
    Ok(Data(state.orders.update_order(&order_id, data).await?))
}

/// Removes a pending order; 204 with an empty body.
pub async fn delete(
    State(state): State<AppState>,
    Path(order_id): Path<String>,
) -> Result<StatusCode, ApiError> {
    state.orders.delete_order(&order_id).await?;
    Ok(StatusCode::NO_CONTENT)
}
