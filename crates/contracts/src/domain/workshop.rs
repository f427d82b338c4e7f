use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Workshop {
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    /// Scheduled day in `YYYY-MM-DD` form, as the date input produces it.
    pub date: String,
    #[serde(default)]
    pub location: String,
    pub price: f64,
    pub capacity: u32,
    #[serde(default)]
    pub image: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkshopPayload {
    pub title: String,
    pub description: String,
    pub date: String,
    pub location: String,
    pub price: f64,
    pub capacity: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}
