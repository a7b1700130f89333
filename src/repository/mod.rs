//! Storage for order books and order history

use async_trait::async_trait;

use crate::error::AppError;
use crate::models::order_book::DepthOrder;
use crate::models::order_history::{Client, HistoryOrder};

pub mod memory;
pub mod postgres;

pub use memory::InMemoryRepository;
pub use postgres::PostgresRepository;

#[async_trait]
pub trait Repository: Send + Sync {
    /// Stored asks followed by stored bids for (exchange, pair)
    async fn get_order_book(
        &self,
        exchange_name: &str,
        pair: &str,
    ) -> Result<Vec<DepthOrder>, AppError>;

    /// Split `order_book` at its midpoint and upsert it under (exchange, pair)
    async fn save_order_book(
        &self,
        exchange_name: &str,
        pair: &str,
        order_book: &[DepthOrder],
    ) -> Result<(), AppError>;

    /// All history rows for `client.client_name`, in storage order
    async fn get_order_history(&self, client: &Client) -> Result<Vec<HistoryOrder>, AppError>;

    /// Append one history row owned by `client.client_name`
    async fn save_order(&self, client: &Client, order: &HistoryOrder) -> Result<(), AppError>;
}
