//! Handlers for `/dishes`.

use super::{method_not_allowed, AppState, Data, DataBody};
use crate::clients::ActorClient;
use crate::error::ApiError;
use crate::model::Dish;
use axum::extract::{Path, State};
use axum::http::{Method, StatusCode, Uri};

pub async fn list(State(state): State<AppState>) -> Result<Data<Vec<Dish>>, ApiError> {
    Ok(Data(state.dishes.list().await?))
}

pub async fn create(
    State(state): State<AppState>,
    DataBody(data): DataBody,
) -> Result<(StatusCode, Data<Dish>), ApiError> {
    let dish = state.dishes.create_dish(data).await?;
    Ok((StatusCode::CREATED, Data(dish)))
}

pub async fn read(
    State(state): State<AppState>,
    Path(dish_id): Path<String>,
) -> Result<Data<Dish>, ApiError> {
    Ok(Data(state.dishes.get(&dish_id).await?))
}

pub async fn update(
    State(state): State<AppState>,
    Path(dish_id): Path<String>,
    DataBody(data): DataBody,
) -> Result<Data<Dish>, ApiError> {
    Ok(Data(state.dishes.update_dish(&dish_id, data).await?))
}

/// Dishes cannot be deleted; answers 405 whether or not the dish exists.
pub async fn delete(method: Method, uri: Uri) -> ApiError {
    method_not_allowed(method, uri).await
}
