use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Reel {
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    pub title: String,
    pub video_url: String,
    #[serde(default)]
    pub thumbnail: Option<String>,
    pub visible: bool,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReelPayload {
    pub title: String,
    pub video_url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thumbnail: Option<String>,
    pub visible: bool,
}
