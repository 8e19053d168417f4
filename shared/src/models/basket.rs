//! Basket Models

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Raw basket row
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BasketEntry {
    pub id: i64,
    pub user_id: i64,
    pub product_size_id: i64,
    pub quantity: i32,
}

/// Basket row joined with product data, as returned by `GET /basket/{user_id}`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BasketItem {
    pub id: i64,
    pub user_id: i64,
    pub product_size_id: i64,
    pub quantity: i32,
    pub product_id: i64,
    pub product_name: String,
    pub size: i32,
    /// Remaining stock for this size
    pub available: i32,
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

/// Container for the basket listing response
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BasketItems {
    #[serde(default)]
    pub items: Vec<BasketItem>,
}

/// Add-to-basket payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BasketAdd {
    pub user_id: i64,
    pub product_size_id: i64,
    pub quantity: i32,
}

/// Update-basket-row payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BasketUpdate {
    pub quantity: i32,
}
