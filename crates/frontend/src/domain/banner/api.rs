use contracts::domain::banner::{Banner, BannerPayload};

use crate::shared::api::{client, ApiError};

pub const RESOURCE: &str = "banners";

pub async fn create(payload: &BannerPayload) -> Result<Banner, ApiError> {
    client::create(RESOURCE, payload).await
}

pub async fn update(id: &str, payload: &BannerPayload) -> Result<Banner, ApiError> {
    client::update(RESOURCE, id, payload).await
}

pub async fn delete(id: &str) -> Result<(), ApiError> {
    client::delete(RESOURCE, id).await
}

/// Flip the homepage visibility flag server-side.
pub async fn toggle_active(id: &str) -> Result<Banner, ApiError> {
    client::toggle(RESOURCE, id, "toggle-active").await
}
