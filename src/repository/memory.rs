use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use super::Repository;
use crate::error::AppError;
use crate::models::order_book::{DepthOrder, OrderBook};
use crate::models::order_history::{Client, HistoryOrder};

/// Process-local repository with the same semantics as the Postgres one.
/// Used by tests and for running the service without a database.
#[derive(Default)]
pub struct InMemoryRepository {
    order_books: RwLock<HashMap<(String, String), OrderBook>>,
    history: RwLock<Vec<HistoryOrder>>,
}

impl InMemoryRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored (exchange, pair) rows
    pub async fn order_book_count(&self) -> usize {
        self.order_books.read().await.len()
    }

    /// Number of stored history rows across all clients
    pub async fn history_len(&self) -> usize {
        self.history.read().await.len()
    }
}

#[async_trait]
impl Repository for InMemoryRepository {
    async fn get_order_book(
        &self,
        exchange_name: &str,
        pair: &str,
    ) -> Result<Vec<DepthOrder>, AppError> {
        let books = self.order_books.read().await;
        let book = books
            .get(&(exchange_name.to_string(), pair.to_string()))
            .cloned()
            .ok_or_else(|| AppError::OrderBookNotFound {
                exchange: exchange_name.to_string(),
                pair: pair.to_string(),
            })?;

        Ok(book.into_depth_orders())
    }

    async fn save_order_book(
        &self,
        exchange_name: &str,
        pair: &str,
        order_book: &[DepthOrder],
    ) -> Result<(), AppError> {
        let mut book = OrderBook::from_depth_orders(exchange_name, pair, order_book);
        let mut books = self.order_books.write().await;
        let key = (exchange_name.to_string(), pair.to_string());

        // Row id survives an overwrite, as with ON CONFLICT DO UPDATE
        book.id = match books.get(&key) {
            Some(existing) => existing.id,
            None => books.values().map(|b| b.id).max().unwrap_or(0) + 1,
        };
        books.insert(key, book);

        Ok(())
    }

    async fn get_order_history(&self, client: &Client) -> Result<Vec<HistoryOrder>, AppError> {
        let history = self.history.read().await;
        Ok(history
            .iter()
            .filter(|order| order.client_name == client.client_name)
            .cloned()
            .collect())
    }

    async fn save_order(&self, client: &Client, order: &HistoryOrder) -> Result<(), AppError> {
        let mut row = order.clone();
        row.client_name = client.client_name.clone();
        self.history.write().await.push(row);
        Ok(())
    }
}
