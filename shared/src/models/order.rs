//! Order Models

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Order entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Order {
    pub id: i64,
    pub user_id: i64,
    pub order_date: DateTime<Utc>,
}

/// Create order payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderCreate {
    pub user_id: i64,
    pub order_date: DateTime<Utc>,
}

/// Line item linking an order to a sized product
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderProduct {
    pub id: i64,
    pub order_id: i64,
    pub product_size_id: i64,
    pub quantity: i32,
}

/// Create order line payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderProductCreate {
    pub order_id: i64,
    pub product_size_id: i64,
    pub quantity: i32,
}
