use super::common::ResourceRef;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Subcategory {
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    pub name: String,
    pub category: ResourceRef,
    #[serde(default)]
    pub description: String,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SubcategoryPayload {
    pub name: String,
    pub category: String,
    pub description: String,
}
