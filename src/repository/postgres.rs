use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    sea_query::OnConflict, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, Set,
};

use super::Repository;
use crate::entities::{order_books, order_history, prelude::*};
use crate::error::AppError;
use crate::models::order_book::{DepthOrder, OrderBook};
use crate::models::order_history::{Client, HistoryOrder};

/// Repository backed by the `order_books` and `order_history` tables
pub struct PostgresRepository {
    db: DatabaseConnection,
}

impl PostgresRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl Repository for PostgresRepository {
    async fn get_order_book(
        &self,
        exchange_name: &str,
        pair: &str,
    ) -> Result<Vec<DepthOrder>, AppError> {
        let row = OrderBooks::find()
            .filter(order_books::Column::Exchange.eq(exchange_name))
            .filter(order_books::Column::Pair.eq(pair))
            .one(&self.db)
            .await?
            .ok_or_else(|| AppError::OrderBookNotFound {
                exchange: exchange_name.to_string(),
                pair: pair.to_string(),
            })?;

        let book = OrderBook::try_from(row)?;
        Ok(book.into_depth_orders())
    }

    async fn save_order_book(
        &self,
        exchange_name: &str,
        pair: &str,
        order_book: &[DepthOrder],
    ) -> Result<(), AppError> {
        let book = OrderBook::from_depth_orders(exchange_name, pair, order_book);

        let row = order_books::ActiveModel {
            asks: Set(serde_json::to_value(&book.asks)?),
            bids: Set(serde_json::to_value(&book.bids)?),
            exchange: Set(book.exchange),
            pair: Set(book.pair),
            ..Default::default()
        };

        OrderBooks::insert(row)
            .on_conflict(
                OnConflict::columns([order_books::Column::Exchange, order_books::Column::Pair])
                    .update_columns([order_books::Column::Asks, order_books::Column::Bids])
                    .to_owned(),
            )
            .exec_without_returning(&self.db)
            .await?;

        tracing::debug!(
            "Upserted order book {} {} ({} levels)",
            exchange_name,
            pair,
            order_book.len()
        );
        Ok(())
    }

    async fn get_order_history(&self, client: &Client) -> Result<Vec<HistoryOrder>, AppError> {
        let rows = OrderHistory::find()
            .filter(order_history::Column::ClientName.eq(client.client_name.as_str()))
            .all(&self.db)
            .await?;

        Ok(rows.into_iter().map(HistoryOrder::from).collect())
    }

    async fn save_order(&self, client: &Client, order: &HistoryOrder) -> Result<(), AppError> {
        let row = order_history::ActiveModel {
            client_name: Set(client.client_name.clone()),
            exchange_name: Set(order.exchange_name.clone()),
            label: Set(order.label.clone()),
            pair: Set(order.pair.clone()),
            side: Set(order.side.clone()),
            order_type: Set(order.order_type.clone()),
            base_qty: Set(order.base_qty),
            price: Set(order.price),
            algorithm_name_placed: Set(order.algorithm_name_placed.clone()),
            lowest_sell_prc: Set(order.lowest_sell_price),
            highest_buy_prc: Set(order.highest_buy_price),
            commission_quote_qty: Set(order.commission_quote_qty),
            time_placed: Set(order.time_placed.into()),
            ..Default::default()
        };

        OrderHistory::insert(row)
            .exec_without_returning(&self.db)
            .await?;

        Ok(())
    }
}

impl TryFrom<order_books::Model> for OrderBook {
    type Error = serde_json::Error;

    fn try_from(row: order_books::Model) -> Result<Self, Self::Error> {
        Ok(Self {
            id: row.id,
            exchange: row.exchange,
            pair: row.pair,
            asks: decode_side(row.asks)?,
            bids: decode_side(row.bids)?,
        })
    }
}

/// A stored JSON `null` reads back as an empty side
fn decode_side(value: serde_json::Value) -> Result<Vec<DepthOrder>, serde_json::Error> {
    Ok(serde_json::from_value::<Option<Vec<DepthOrder>>>(value)?.unwrap_or_default())
}

impl From<order_history::Model> for HistoryOrder {
    fn from(row: order_history::Model) -> Self {
        Self {
            client_name: row.client_name,
            exchange_name: row.exchange_name,
            label: row.label,
            pair: row.pair,
            side: row.side,
            order_type: row.order_type,
            base_qty: row.base_qty,
            price: row.price,
            algorithm_name_placed: row.algorithm_name_placed,
            lowest_sell_price: row.lowest_sell_prc,
            highest_buy_price: row.highest_buy_prc,
            commission_quote_qty: row.commission_quote_qty,
            time_placed: row.time_placed.with_timezone(&Utc),
        }
    }
}
