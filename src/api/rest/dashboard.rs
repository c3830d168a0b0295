use std::fmt::Write as _;
use std::sync::Arc;

use axum::Json;
use axum::Router;
use axum::extract::State;
use axum::response::Html;
use axum::routing::get;
use serde::Serialize;

use crate::models::dashboard::DashboardSummary;
use crate::models::driver::Driver;
use crate::models::order::Order;
use crate::state::AppState;

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/", get(dashboard_page))
        .route("/api/dashboard", get(dashboard_summary))
}

async fn dashboard_summary(State(state): State<Arc<AppState>>) -> Json<DashboardSummary> {
    Json(state.store.read().await.summary())
}

async fn dashboard_page(State(state): State<Arc<AppState>>) -> Html<String> {
    let store = state.store.read().await;
    Html(render_dashboard(
        &store.summary(),
        store.orders(),
        store.drivers(),
    ))
}

fn render_dashboard(summary: &DashboardSummary, orders: &[Order], drivers: &[Driver]) -> String {
    let mut page = String::from(
        "<!DOCTYPE html>\n<html>\n<head><meta charset=\"utf-8\"><title>Delivery Dashboard</title></head>\n<body>\n<h1>Delivery Dashboard</h1>\n",
    );

    let _ = write!(
        page,
        "<ul class=\"stats\">\
         <li>Total orders: {}</li>\
         <li>Pending orders: {}</li>\
         <li>Delivered orders: {}</li>\
         <li>Available drivers: {}</li>\
         </ul>\n",
        summary.total_orders,
        summary.pending_orders,
        summary.delivered_orders,
        summary.available_drivers,
    );

    page.push_str(
        "<h2>Orders</h2>\n<table>\n<tr><th>ID</th><th>Customer</th><th>Pickup</th><th>Delivery</th><th>Status</th><th>Driver</th><th>Total</th></tr>\n",
    );
    for order in orders {
        let driver = order
            .driver_id
            .map(|id| id.to_string())
            .unwrap_or_else(|| "-".to_string());
        let _ = writeln!(
            page,
            "<tr><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>${:.2}</td></tr>",
            order.id,
            escape_html(&order.customer_name),
            escape_html(&order.pickup_address),
            escape_html(&order.delivery_address),
            status_label(&order.status),
            driver,
            order.total_price,
        );
    }
    page.push_str("</table>\n");

    page.push_str(
        "<h2>Drivers</h2>\n<table>\n<tr><th>ID</th><th>Name</th><th>Phone</th><th>Vehicle</th><th>Status</th><th>Rating</th></tr>\n",
    );
    for driver in drivers {
        let _ = writeln!(
            page,
            "<tr><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{:.1}</td></tr>",
            driver.id,
            escape_html(&driver.name),
            escape_html(&driver.phone),
            escape_html(&driver.vehicle),
            status_label(&driver.status),
            driver.rating,
        );
    }
    page.push_str("</table>\n</body>\n</html>\n");

    page
}

/// The status label exactly as it appears in the JSON API.
fn status_label<T: Serialize>(status: &T) -> String {
    match serde_json::to_value(status) {
        Ok(serde_json::Value::String(label)) => label,
        _ => String::new(),
    }
}

fn escape_html(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());
    for ch in raw.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}
