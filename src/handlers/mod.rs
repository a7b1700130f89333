use axum::{
    routing::{get, post},
    Router,
};
use tower_http::trace::TraceLayer;

use crate::AppState;

pub mod extract;
pub mod order_book;
pub mod order_history;

/// Build the HTTP router for all endpoints
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/orderbook/get", get(order_book::get_order_book))
        .route("/orderbook/save", post(order_book::save_order_book))
        .route("/orderhistory/get", get(order_history::get_order_history))
        .route("/order/save", post(order_history::save_order))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
