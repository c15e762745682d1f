//! Response types for the remote catalog API (`dummyjson.com`).
//!
//! ## Observed shape
//!
//! `GET /products` wraps items in `{ "products": [...], "total", "skip",
//! "limit" }`. Without query parameters upstream returns its default first
//! page (30 items); the pagination fields are decoded but never acted on.
//!
//! `GET /products/{id}` returns one bare item.
//!
//! Items carry more than we project: `availabilityStatus`, `sku`, `weight`
//! and a `meta` object with barcode and timestamps. Unknown fields are
//! ignored by serde.
//!
//! Groceries have no `brand` key at all, so every non-identity field is
//! optional here and absence propagates to the normalized item.

use rust_decimal::Decimal;
use serde::Deserialize;

/// Envelope returned by `GET /products`.
#[derive(Debug, Deserialize)]
pub struct RemoteEnvelope {
    pub products: Vec<RemoteItem>,
    pub total: u64,
    pub skip: u64,
    pub limit: u64,
}

impl RemoteEnvelope {
    /// Validates every item in the envelope.
    ///
    /// # Errors
    ///
    /// Returns the first item's violation, prefixed with its position.
    pub fn validate(&self) -> Result<(), String> {
        for (idx, item) in self.products.iter().enumerate() {
            item.validate()
                .map_err(|reason| format!("products[{idx}]: {reason}"))?;
        }
        Ok(())
    }
}

/// A single product as the remote catalog sends it.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RemoteItem {
    pub id: u64,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    /// Accepts both JSON integers and floats.
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
    #[serde(default)]
    pub discount_percentage: Option<f64>,
    #[serde(default)]
    pub rating: Option<f64>,
    pub stock: u32,
    #[serde(default)]
    pub brand: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    /// Small preview image. Sometimes an empty string.
    #[serde(default)]
    pub thumbnail: Option<String>,
    /// Full-size gallery, in display order.
    #[serde(default)]
    pub images: Option<Vec<String>>,
    #[serde(default)]
    pub tags: Option<Vec<String>>,
    #[serde(default)]
    pub warranty_information: Option<String>,
    #[serde(default)]
    pub shipping_information: Option<String>,
    #[serde(default)]
    pub return_policy: Option<String>,
    #[serde(default)]
    pub minimum_order_quantity: Option<u32>,
    #[serde(default)]
    pub reviews: Option<Vec<RemoteReview>>,
    #[serde(default)]
    pub dimensions: Option<RemoteDimensions>,
}

impl RemoteItem {
    /// Checks the constraints the typed decode cannot express.
    ///
    /// # Errors
    ///
    /// Returns a human-readable reason when the identifier is zero, the title
    /// is empty, or the price or discount is negative.
    pub fn validate(&self) -> Result<(), String> {
        if self.id == 0 {
            return Err("id must be positive".to_owned());
        }
        if self.title.trim().is_empty() {
            return Err(format!("item {} has an empty title", self.id));
        }
        if self.price < Decimal::ZERO {
            return Err(format!("item {} has negative price {}", self.id, self.price));
        }
        if let Some(discount) = self.discount_percentage {
            if discount < 0.0 {
                return Err(format!(
                    "item {} has negative discount percentage {discount}",
                    self.id
                ));
            }
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RemoteReview {
    pub rating: f64,
    pub comment: String,
    pub date: String,
    pub reviewer_name: String,
    pub reviewer_email: String,
}

#[derive(Debug, Clone, Copy, Deserialize)]
pub struct RemoteDimensions {
    pub width: f64,
    pub height: f64,
    pub depth: f64,
}
