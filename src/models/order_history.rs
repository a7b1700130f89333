use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Owner of history entries. Only `client_name` is used for lookups.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Client {
    pub client_name: String,
    pub exchange_name: String,
    pub label: String,
    pub pair: String,
}

impl Client {
    pub fn named(client_name: impl Into<String>) -> Self {
        Self {
            client_name: client_name.into(),
            ..Default::default()
        }
    }
}

/// A previously placed or filled order.
/// Missing fields decode as empty strings, zero and the Unix epoch.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HistoryOrder {
    pub client_name: String,
    pub exchange_name: String,
    pub label: String,
    pub pair: String,
    pub side: String,
    #[serde(rename = "type")]
    pub order_type: String,
    pub base_qty: f64,
    pub price: f64,
    pub algorithm_name_placed: String,
    pub lowest_sell_price: f64,
    pub highest_buy_price: f64,
    pub commission_quote_qty: f64,
    pub time_placed: DateTime<Utc>,
}

impl HistoryOrder {
    /// Client record carried inline on the order payload
    pub fn client(&self) -> Client {
        Client {
            client_name: self.client_name.clone(),
            exchange_name: self.exchange_name.clone(),
            label: self.label.clone(),
            pair: self.pair.clone(),
        }
    }
}
