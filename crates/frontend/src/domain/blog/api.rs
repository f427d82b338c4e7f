use contracts::domain::blog::{Blog, BlogPayload};

use crate::shared::api::{client, ApiError};

pub const RESOURCE: &str = "blogs";

pub async fn create(payload: &BlogPayload) -> Result<Blog, ApiError> {
    client::create(RESOURCE, payload).await
}

pub async fn update(id: &str, payload: &BlogPayload) -> Result<Blog, ApiError> {
    client::update(RESOURCE, id, payload).await
}

pub async fn delete(id: &str) -> Result<(), ApiError> {
    client::delete(RESOURCE, id).await
}

pub async fn toggle_publish(id: &str) -> Result<Blog, ApiError> {
    client::toggle(RESOURCE, id, "toggle-publish").await
}
