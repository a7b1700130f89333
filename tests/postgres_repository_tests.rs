//! Repository tests against a real PostgreSQL instance.
//! Run with `TEST_DATABASE_URL=... cargo test -- --ignored`.

mod common;

use chrono::{TimeZone, Utc};
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter};
use stats_collection_service::{
    entities::{order_books, order_history, prelude::*},
    models::{
        order_book::DepthOrder,
        order_history::{Client, HistoryOrder},
    },
    repository::{PostgresRepository, Repository},
};

use crate::common::setup_test_db;

async fn clean(db: &DatabaseConnection, exchange: &str, client_name: &str) {
    OrderBooks::delete_many()
        .filter(order_books::Column::Exchange.eq(exchange))
        .exec(db)
        .await
        .unwrap();
    OrderHistory::delete_many()
        .filter(order_history::Column::ClientName.eq(client_name))
        .exec(db)
        .await
        .unwrap();
}

fn order(client_name: &str) -> HistoryOrder {
    HistoryOrder {
        client_name: client_name.to_string(),
        exchange_name: "Binance".to_string(),
        label: "order1".to_string(),
        pair: "BTC/USD".to_string(),
        side: "buy".to_string(),
        order_type: "limit".to_string(),
        base_qty: 1.0,
        price: 10000.0,
        algorithm_name_placed: "alg1".to_string(),
        lowest_sell_price: 9900.0,
        highest_buy_price: 10050.0,
        commission_quote_qty: 10.0,
        time_placed: Utc.with_ymd_and_hms(2009, 11, 10, 23, 0, 0).unwrap(),
    }
}

#[tokio::test]
#[ignore = "requires TEST_DATABASE_URL"]
async fn test_order_book_round_trip_and_upsert() {
    let db = setup_test_db().await.expect("Failed to connect to test DB");
    clean(&db, "pg-test-exchange", "pg-test-client").await;
    // `DatabaseConnection` is not `Clone` with sea-orm's `mock` feature
    // (enabled for unit tests), so the repository gets its own connection.
    let repo = PostgresRepository::new(
        setup_test_db()
            .await
            .expect("Failed to connect to test DB"),
    );

    let first = vec![
        DepthOrder {
            price: 10000.0,
            base_qty: 1.0,
        },
        DepthOrder {
            price: 10500.0,
            base_qty: 2.0,
        },
    ];
    repo.save_order_book("pg-test-exchange", "BTC/USD", &first)
        .await
        .unwrap();
    assert_eq!(
        repo.get_order_book("pg-test-exchange", "BTC/USD").await.unwrap(),
        first
    );

    let second = vec![DepthOrder {
        price: 9000.0,
        base_qty: 3.0,
    }];
    repo.save_order_book("pg-test-exchange", "BTC/USD", &second)
        .await
        .unwrap();

    let rows = OrderBooks::find()
        .filter(order_books::Column::Exchange.eq("pg-test-exchange"))
        .count(&db)
        .await
        .unwrap();
    assert_eq!(rows, 1);
    assert_eq!(
        repo.get_order_book("pg-test-exchange", "BTC/USD").await.unwrap(),
        second
    );
}

#[tokio::test]
#[ignore = "requires TEST_DATABASE_URL"]
async fn test_order_history_append_only() {
    let db = setup_test_db().await.expect("Failed to connect to test DB");
    clean(&db, "pg-test-exchange-2", "pg-test-client-2").await;
    let repo = PostgresRepository::new(db);
    let client = Client::named("pg-test-client-2");

    repo.save_order(&client, &order("pg-test-client-2"))
        .await
        .unwrap();
    repo.save_order(&client, &order("pg-test-client-2"))
        .await
        .unwrap();

    let history = repo.get_order_history(&client).await.unwrap();
    assert_eq!(history.len(), 2);
    assert_eq!(history[0], order("pg-test-client-2"));

    let other = repo
        .get_order_history(&Client::named("pg-test-nobody"))
        .await
        .unwrap();
    assert!(other.is_empty());
}
