//! `SeaORM` Entity for order_books table

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "order_books")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    /// Exchange name, unique together with `pair`
    pub exchange: String,
    pub pair: String,
    /// First half of the saved depth levels as a JSON array
    #[sea_orm(column_type = "JsonBinary")]
    pub asks: Json,
    /// Second half of the saved depth levels as a JSON array
    #[sea_orm(column_type = "JsonBinary")]
    pub bids: Json,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
