use super::common::ResourceRef;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Catalog product as stored by the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    pub name: String,
    pub category: ResourceRef,
    #[serde(default)]
    pub subcategory: Option<ResourceRef>,
    #[serde(default)]
    pub design: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub short_description: String,
    pub price: f64,
    pub quantity: u32,
    #[serde(default)]
    pub sizes: Vec<String>,
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(default)]
    pub options: Vec<ProductOption>,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

/// One color/size variant of a product, with its own image set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductOption {
    pub color: String,
    #[serde(default)]
    pub color_code: String,
    pub quantity: u32,
    #[serde(default)]
    pub price: Option<f64>,
    #[serde(default)]
    pub image_urls: Vec<String>,
}

/// Create/update payload. References are sent as bare ids.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductPayload {
    pub name: String,
    pub category: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subcategory: Option<String>,
    pub design: String,
    pub description: String,
    pub short_description: String,
    pub price: f64,
    pub quantity: u32,
    pub sizes: Vec<String>,
    pub images: Vec<String>,
    pub options: Vec<ProductOption>,
}
