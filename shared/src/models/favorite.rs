//! Favorites Models

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Raw favorites row
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Favorite {
    pub id: i64,
    pub user_id: i64,
    pub product_size_id: i64,
}

/// Favorites row joined with product data, as returned by `GET /favorites/{user_id}`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FavoriteItem {
    pub id: i64,
    pub user_id: i64,
    pub product_size_id: i64,
    pub product_id: i64,
    pub product_name: String,
    pub size: i32,
    /// The favorites join serializes price as a string, unlike the rest
    /// of the API
    pub price: Decimal,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

/// Container for the favorites listing response
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FavoriteItems {
    #[serde(default)]
    pub items: Vec<FavoriteItem>,
}

/// Add-to-favorites payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FavoriteAdd {
    pub user_id: i64,
    pub product_size_id: i64,
}
