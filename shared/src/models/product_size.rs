//! Product Size Model

use serde::{Deserialize, Serialize};

/// One size row of a product
///
/// `quantity == 0` means the size is listed but out of stock.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductSize {
    pub id: i64,
    #[serde(rename = "id_product")]
    pub product_id: i64,
    pub size: i32,
    pub quantity: i32,
}

impl ProductSize {
    pub fn in_stock(&self) -> bool {
        self.quantity > 0
    }
}

/// Create/update size payload (admin)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductSizeUpsert {
    #[serde(rename = "id_product")]
    pub product_id: i64,
    pub size: i32,
    pub quantity: i32,
}
