use serde::{Deserialize, Serialize};

/// One price level of one side of an order book.
/// Missing fields decode as zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DepthOrder {
    pub price: f64,
    pub base_qty: f64,
}

/// Order book for a single (exchange, pair)
#[derive(Debug, Clone, PartialEq)]
pub struct OrderBook {
    pub id: i32,
    pub exchange: String,
    pub pair: String,
    pub asks: Vec<DepthOrder>,
    pub bids: Vec<DepthOrder>,
}

impl OrderBook {
    /// Build an order book from a flat list of levels.
    ///
    /// The list is split at `len / 2`: the first half becomes asks and the
    /// second half bids, so on odd length the extra level lands in bids.
    /// Callers cannot supply their own ask/bid distinction.
    pub fn from_depth_orders(
        exchange: impl Into<String>,
        pair: impl Into<String>,
        orders: &[DepthOrder],
    ) -> Self {
        let (asks, bids) = orders.split_at(orders.len() / 2);

        Self {
            id: 0,
            exchange: exchange.into(),
            pair: pair.into(),
            asks: asks.to_vec(),
            bids: bids.to_vec(),
        }
    }

    /// Flatten back into asks followed by bids
    pub fn into_depth_orders(self) -> Vec<DepthOrder> {
        let mut orders = self.asks;
        orders.extend(self.bids);
        orders
    }
}

/// Query parameters for GET /orderbook/get
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct OrderBookQuery {
    pub exchange_name: String,
    pub pair: String,
}

/// Body for POST /orderbook/save
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SaveOrderBookRequest {
    pub exchange_name: String,
    pub pair: String,
    pub order_book: Vec<DepthOrder>,
}
