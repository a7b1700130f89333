use axum::{
    extract::{Query, State},
    http::StatusCode,
    Json,
};

use super::extract::JsonBody;
use crate::{
    error::ApiError,
    models::order_book::{DepthOrder, OrderBookQuery, SaveOrderBookRequest},
    AppState,
};

/// Handler for GET /orderbook/get
/// Returns the stored asks followed by the stored bids
pub async fn get_order_book(
    State(state): State<AppState>,
    Query(query): Query<OrderBookQuery>,
) -> Result<Json<Vec<DepthOrder>>, ApiError> {
    tracing::debug!(
        "Fetching order book for {} {}",
        query.exchange_name,
        query.pair
    );

    let orders = state
        .service
        .get_order_book(&query.exchange_name, &query.pair)
        .await?;

    Ok(Json(orders))
}

/// Handler for POST /orderbook/save
pub async fn save_order_book(
    State(state): State<AppState>,
    JsonBody(request): JsonBody<SaveOrderBookRequest>,
) -> Result<StatusCode, ApiError> {
    state
        .service
        .save_order_book(&request.exchange_name, &request.pair, &request.order_book)
        .await?;

    tracing::info!(
        "Saved order book {} {} ({} levels)",
        request.exchange_name,
        request.pair,
        request.order_book.len()
    );
    Ok(StatusCode::OK)
}
