use std::sync::Arc;

use axum::Json;
use axum::Router;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::{get, post};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{info, warn};

use crate::api::rest::coerce::{self, coerce_price, lenient_string};
use crate::error::AppError;
use crate::models::order::{NewOrder, Order};
use crate::state::AppState;

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/orders", post(create_order).get(list_orders))
        .route("/api/orders/:order_id", get(get_order))
        .route("/api/orders/:order_id/assign", post(assign_driver))
}

#[derive(Deserialize)]
pub struct CreateOrderRequest {
    #[serde(default, deserialize_with = "lenient_string")]
    pub customer_name: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub pickup_address: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub delivery_address: String,
    #[serde(default)]
    pub total_price: Option<Value>,
}

#[derive(Deserialize)]
pub struct AssignDriverRequest {
    #[serde(default)]
    pub driver_id: Option<Value>,
}

#[derive(Serialize)]
pub struct AssignDriverResponse {
    pub success: bool,
    pub message: &'static str,
}

async fn create_order(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<CreateOrderRequest>,
) -> Result<(StatusCode, Json<Order>), AppError> {
    let total_price = coerce_price(payload.total_price.as_ref())?;

    let order = state.store.write().await.create_order(NewOrder {
        customer_name: payload.customer_name,
        pickup_address: payload.pickup_address,
        delivery_address: payload.delivery_address,
        total_price,
    });

    state.metrics.orders_created_total.inc();
    info!(order_id = order.id, total_price = order.total_price, "order created");

    Ok((StatusCode::CREATED, Json(order)))
}

async fn list_orders(State(state): State<Arc<AppState>>) -> Json<Vec<Order>> {
    Json(state.store.read().await.orders().to_vec())
}

async fn get_order(
    State(state): State<Arc<AppState>>,
    Path(order_id): Path<u64>,
) -> Result<Json<Order>, AppError> {
    let store = state.store.read().await;
    let order = store
        .get_order(order_id)
        .ok_or_else(|| AppError::NotFound(format!("order {order_id} not found")))?;

    Ok(Json(order.clone()))
}

async fn assign_driver(
    State(state): State<Arc<AppState>>,
    Path(order_id): Path<u64>,
    Json(payload): Json<AssignDriverRequest>,
) -> Result<Json<AssignDriverResponse>, AppError> {
    let Some(driver_id) = coerce::driver_id(payload.driver_id.as_ref()) else {
        state.metrics.record_assignment(false);
        warn!(
            order_id,
            driver_id = ?payload.driver_id,
            "driver assignment failed: unusable driver_id"
        );
        return Err(AppError::AssignmentFailed(format!(
            "unusable driver_id for order {order_id}"
        )));
    };

    let outcome = state.store.write().await.assign_driver(order_id, driver_id);
    state.metrics.record_assignment(outcome.is_ok());

    let event = outcome.map_err(|err| {
        warn!(order_id, driver_id, error = %err, "driver assignment failed");
        AppError::from(err)
    })?;

    info!(order_id, driver_id, "driver assigned");
    let _ = state.assignment_events_tx.send(event);

    Ok(Json(AssignDriverResponse {
        success: true,
        message: "Driver assigned",
    }))
}
