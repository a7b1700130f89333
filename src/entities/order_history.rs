//! `SeaORM` Entity for order_history table

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "order_history")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub client_name: String,
    pub exchange_name: String,
    pub label: String,
    pub pair: String,
    pub side: String,
    #[sea_orm(column_name = "type")]
    pub order_type: String,
    pub base_qty: f64,
    pub price: f64,
    pub algorithm_name_placed: String,
    pub lowest_sell_prc: f64,
    pub highest_buy_prc: f64,
    pub commission_quote_qty: f64,
    pub time_placed: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
