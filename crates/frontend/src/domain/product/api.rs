use contracts::domain::product::{Product, ProductPayload};

use crate::shared::api::{client, ApiError};

pub const RESOURCE: &str = "products";

pub async fn create(payload: &ProductPayload) -> Result<Product, ApiError> {
    client::create(RESOURCE, payload).await
}

pub async fn update(id: &str, payload: &ProductPayload) -> Result<Product, ApiError> {
    client::update(RESOURCE, id, payload).await
}

pub async fn delete(id: &str) -> Result<(), ApiError> {
    client::delete(RESOURCE, id).await
}
