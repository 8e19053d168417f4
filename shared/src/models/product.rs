//! Product Model

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Product entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: i64,
    pub name: String,
    /// Comma-joined list of image URLs; may be absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    /// The backend serializes prices as JSON numbers
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
    pub brand_id: i64,
    pub category_id: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl Product {
    /// Split the comma-joined `image_url` field into trimmed URLs.
    pub fn image_urls(&self) -> Vec<&str> {
        self.image_url
            .as_deref()
            .unwrap_or("")
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .collect()
    }

    /// First image URL, if any (used for grid thumbnails).
    pub fn primary_image(&self) -> Option<&str> {
        self.image_urls().first().copied()
    }
}

/// Create product payload (admin)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductCreate {
    pub name: String,
    pub image_url: Option<String>,
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
    pub brand_id: i64,
    pub category_id: i64,
    pub description: Option<String>,
}

/// Update product payload (admin)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProductUpdate {
    pub name: Option<String>,
    pub image_url: Option<String>,
    #[serde(default, with = "rust_decimal::serde::float_option")]
    pub price: Option<Decimal>,
    pub brand_id: Option<i64>,
    pub category_id: Option<i64>,
    pub description: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn product(image_url: Option<&str>) -> Product {
        Product {
            id: 1,
            name: "Nike Air Max".to_string(),
            image_url: image_url.map(str::to_string),
            price: dec!(4990.00),
            brand_id: 1,
            category_id: 2,
            description: None,
        }
    }

    #[test]
    fn image_urls_splits_and_trims() {
        let p = product(Some("https://a/1.jpg, https://a/2.jpg ,"));
        assert_eq!(p.image_urls(), vec!["https://a/1.jpg", "https://a/2.jpg"]);
        assert_eq!(p.primary_image(), Some("https://a/1.jpg"));
    }

    #[test]
    fn image_urls_empty_when_absent() {
        let p = product(None);
        assert!(p.image_urls().is_empty());
        assert_eq!(p.primary_image(), None);
    }
}
