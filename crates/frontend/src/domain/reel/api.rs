use contracts::domain::reel::{Reel, ReelPayload};

use crate::shared::api::{client, ApiError};

pub const RESOURCE: &str = "reels";

pub async fn create(payload: &ReelPayload) -> Result<Reel, ApiError> {
    client::create(RESOURCE, payload).await
}

pub async fn update(id: &str, payload: &ReelPayload) -> Result<Reel, ApiError> {
    client::update(RESOURCE, id, payload).await
}

pub async fn delete(id: &str) -> Result<(), ApiError> {
    client::delete(RESOURCE, id).await
}

pub async fn toggle_visibility(id: &str) -> Result<Reel, ApiError> {
    client::toggle(RESOURCE, id, "toggle-visibility").await
}
