use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Banner {
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    pub title: String,
    pub image: String,
    #[serde(default)]
    pub link: Option<String>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BannerPayload {
    pub title: String,
    pub image: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
    pub is_active: bool,
}
