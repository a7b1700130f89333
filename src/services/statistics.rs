//! Statistics service
//!
//! Thin facade over a [`Repository`] so handlers depend on an abstraction
//! rather than on a concrete store.

use std::sync::Arc;

use crate::error::AppError;
use crate::models::order_book::DepthOrder;
use crate::models::order_history::{Client, HistoryOrder};
use crate::repository::Repository;

#[derive(Clone)]
pub struct StatisticsService {
    repo: Arc<dyn Repository>,
}

impl StatisticsService {
    pub fn new(repo: Arc<dyn Repository>) -> Self {
        Self { repo }
    }

    pub async fn get_order_book(
        &self,
        exchange_name: &str,
        pair: &str,
    ) -> Result<Vec<DepthOrder>, AppError> {
        self.repo.get_order_book(exchange_name, pair).await
    }

    pub async fn save_order_book(
        &self,
        exchange_name: &str,
        pair: &str,
        order_book: &[DepthOrder],
    ) -> Result<(), AppError> {
        self.repo.save_order_book(exchange_name, pair, order_book).await
    }

    pub async fn get_order_history(&self, client: &Client) -> Result<Vec<HistoryOrder>, AppError> {
        self.repo.get_order_history(client).await
    }

    pub async fn save_order(&self, client: &Client, order: &HistoryOrder) -> Result<(), AppError> {
        self.repo.save_order(client, order).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use chrono::Utc;
    use sea_orm::DbErr;
    use tokio::sync::Mutex;

    /// Records every call and answers with canned values
    #[derive(Default)]
    struct RecordingRepository {
        calls: Mutex<Vec<String>>,
        fail: bool,
    }

    impl RecordingRepository {
        fn failing() -> Self {
            Self {
                fail: true,
                ..Default::default()
            }
        }

        async fn record(&self, call: String) -> Result<(), AppError> {
            self.calls.lock().await.push(call);
            if self.fail {
                return Err(AppError::Database(DbErr::Custom("backend down".to_string())));
            }
            Ok(())
        }
    }

    #[async_trait]
    impl Repository for RecordingRepository {
        async fn get_order_book(
            &self,
            exchange_name: &str,
            pair: &str,
        ) -> Result<Vec<DepthOrder>, AppError> {
            self.record(format!("get_order_book {exchange_name} {pair}"))
                .await?;
            Ok(vec![DepthOrder {
                price: 1.0,
                base_qty: 2.0,
            }])
        }

        async fn save_order_book(
            &self,
            exchange_name: &str,
            pair: &str,
            order_book: &[DepthOrder],
        ) -> Result<(), AppError> {
            self.record(format!(
                "save_order_book {exchange_name} {pair} {}",
                order_book.len()
            ))
            .await
        }

        async fn get_order_history(&self, client: &Client) -> Result<Vec<HistoryOrder>, AppError> {
            self.record(format!("get_order_history {}", client.client_name))
                .await?;
            Ok(Vec::new())
        }

        async fn save_order(&self, client: &Client, order: &HistoryOrder) -> Result<(), AppError> {
            self.record(format!("save_order {} {}", client.client_name, order.label))
                .await
        }
    }

    fn order() -> HistoryOrder {
        HistoryOrder {
            client_name: "alice".to_string(),
            exchange_name: "binance".to_string(),
            label: "l1".to_string(),
            pair: "BTC/USDT".to_string(),
            side: "buy".to_string(),
            order_type: "limit".to_string(),
            base_qty: 1.0,
            price: 2.0,
            algorithm_name_placed: "alg".to_string(),
            lowest_sell_price: 3.0,
            highest_buy_price: 1.5,
            commission_quote_qty: 0.1,
            time_placed: Utc::now(),
        }
    }

    #[tokio::test]
    async fn test_forwards_each_call_once() {
        let repo = Arc::new(RecordingRepository::default());
        let service = StatisticsService::new(repo.clone());

        let book = service.get_order_book("binance", "BTC/USDT").await.unwrap();
        assert_eq!(book.len(), 1);
        service
            .save_order_book("binance", "BTC/USDT", &book)
            .await
            .unwrap();
        service
            .get_order_history(&Client::named("alice"))
            .await
            .unwrap();
        service
            .save_order(&Client::named("alice"), &order())
            .await
            .unwrap();

        assert_eq!(
            *repo.calls.lock().await,
            vec![
                "get_order_book binance BTC/USDT",
                "save_order_book binance BTC/USDT 1",
                "get_order_history alice",
                "save_order alice l1",
            ]
        );
    }

    #[tokio::test]
    async fn test_errors_propagate_unchanged() {
        let service = StatisticsService::new(Arc::new(RecordingRepository::failing()));

        let err = service.get_order_book("binance", "BTC/USDT").await.unwrap_err();
        assert!(matches!(err, AppError::Database(DbErr::Custom(ref msg)) if msg == "backend down"));

        let err = service
            .save_order(&Client::named("alice"), &order())
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Database(_)));
    }
}
