use super::common::ResourceRef;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Workshop sign-up. Created by the storefront; the admin side only
/// lists and deletes these.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Registration {
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    pub workshop: ResourceRef,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
    pub created_at: DateTime<Utc>,
}
