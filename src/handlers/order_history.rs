use axum::{extract::State, http::StatusCode, Json};

use super::extract::JsonBody;
use crate::{
    error::ApiError,
    models::order_history::{Client, HistoryOrder},
    AppState,
};

/// Handler for GET /orderhistory/get
/// The client is read from the JSON body; only `client_name` is matched.
pub async fn get_order_history(
    State(state): State<AppState>,
    JsonBody(client): JsonBody<Client>,
) -> Result<Json<Vec<HistoryOrder>>, ApiError> {
    tracing::debug!("Fetching order history for {}", client.client_name);

    let history = state.service.get_order_history(&client).await?;
    Ok(Json(history))
}

/// Handler for POST /order/save
pub async fn save_order(
    State(state): State<AppState>,
    JsonBody(order): JsonBody<HistoryOrder>,
) -> Result<StatusCode, ApiError> {
    let client = order.client();
    state.service.save_order(&client, &order).await?;

    tracing::info!(
        "Saved {} {} order for {} on {}",
        order.side,
        order.pair,
        client.client_name,
        order.exchange_name
    );
    Ok(StatusCode::OK)
}
