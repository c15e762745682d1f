use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A catalog product as the rest of the application sees it.
///
/// Built from the upstream catalog record by a field-for-field projection;
/// nothing here is computed. Serialized field names follow the public shape
/// consumed by the storefront pages (`nombre`, `precio`, `imagen`, ...), and
/// absent optional fields are omitted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogItem {
    /// Upstream identifier. Always positive.
    pub id: u64,
    #[serde(rename = "nombre")]
    pub name: String,
    /// May be empty.
    #[serde(rename = "descripcion", default)]
    pub description: String,
    /// Unit price, serialized as a JSON number.
    #[serde(rename = "precio", with = "rust_decimal::serde::float")]
    pub price: Decimal,
    pub stock: u32,
    /// Primary image URL: the upstream thumbnail, else the first gallery image.
    #[serde(rename = "imagen", default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(rename = "categoria", default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub brand: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub discount_percentage: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub warranty_information: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shipping_information: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub return_policy: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub minimum_order_quantity: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reviews: Option<Vec<Review>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dimensions: Option<Dimensions>,
}

impl CatalogItem {
    /// Returns `true` when at least one unit is in stock.
    #[must_use]
    pub fn in_stock(&self) -> bool {
        self.stock > 0
    }

    /// Returns `true` when a positive discount is advertised.
    #[must_use]
    pub fn has_discount(&self) -> bool {
        self.discount_percentage.is_some_and(|d| d > 0.0)
    }
}

/// A customer review attached to a [`CatalogItem`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Review {
    pub rating: f64,
    pub comment: String,
    /// Review timestamp exactly as upstream sends it.
    pub date: String,
    pub reviewer_name: String,
    pub reviewer_email: String,
}

/// Physical package dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Dimensions {
    pub width: f64,
    pub height: f64,
    pub depth: f64,
}
