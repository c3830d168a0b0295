use std::sync::Arc;

use axum::Json;
use axum::Router;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::{get, post};
use serde::Deserialize;
use tracing::info;

use crate::api::rest::coerce::lenient_string;
use crate::error::AppError;
use crate::models::driver::{Driver, NewDriver};
use crate::state::AppState;

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/drivers", post(register_driver).get(list_drivers))
        .route("/api/drivers/:driver_id", get(get_driver))
}

#[derive(Deserialize)]
pub struct RegisterDriverRequest {
    #[serde(default, deserialize_with = "lenient_string")]
    pub name: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub phone: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub vehicle: String,
}

async fn register_driver(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<RegisterDriverRequest>,
) -> (StatusCode, Json<Driver>) {
    let driver = state.store.write().await.register_driver(NewDriver {
        name: payload.name,
        phone: payload.phone,
        vehicle: payload.vehicle,
    });

    state.metrics.drivers_registered_total.inc();
    info!(driver_id = driver.id, "driver registered");

    (StatusCode::CREATED, Json(driver))
}

async fn list_drivers(State(state): State<Arc<AppState>>) -> Json<Vec<Driver>> {
    Json(state.store.read().await.drivers().to_vec())
}

async fn get_driver(
    State(state): State<Arc<AppState>>,
    Path(driver_id): Path<u64>,
) -> Result<Json<Driver>, AppError> {
    let store = state.store.read().await;
    let driver = store
        .get_driver(driver_id)
        .ok_or_else(|| AppError::NotFound(format!("driver {driver_id} not found")))?;

    Ok(Json(driver.clone()))
}
