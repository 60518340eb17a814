//! Generic list/create/delete handlers for document collections.
//!
//! One set of handlers serves `pasteles`, `empleados` and `pedidos`; the
//! collection name and acknowledgment texts come from [`CrudEntity`].

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::{delete, get};
use axum::{Json, Router};
use pasteleria_core::{CrudEntity, Record};
use tracing::debug;

use crate::error::ApiError;
use crate::state::AppState;

/// Mounts `/api/<collection>` and `/api/<collection>/{id}` for `T`.
pub fn routes<T: CrudEntity>() -> Router<AppState> {
    let base = format!("/api/{}", T::COLLECTION);
    let item = format!("{base}/{{id}}");

    Router::new()
        .route(&base, get(list::<T>).post(create::<T>))
        .route(&item, delete(remove::<T>))
}

/// Every record in insertion order.
pub async fn list<T: CrudEntity>(
    State(state): State<AppState>,
) -> Result<Json<Vec<Record<T>>>, ApiError> {
    let records = state.db.collection::<T>().list().await?;
    Ok(Json(records))
}

/// Stores the body as a new record.
pub async fn create<T: CrudEntity>(
    State(state): State<AppState>,
    Json(data): Json<T>,
) -> Result<(StatusCode, &'static str), ApiError> {
    state.db.collection::<T>().insert(data).await?;
    Ok((StatusCode::CREATED, T::CREATED_MESSAGE))
}

/// Deletes by id. An unknown id still acknowledges success.
pub async fn remove<T: CrudEntity>(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<&'static str, ApiError> {
    let removed = state.db.collection::<T>().delete(&id).await?;
    if !removed {
        debug!(collection = T::COLLECTION, %id, "Delete matched nothing");
    }
    Ok(T::DELETED_MESSAGE)
}
