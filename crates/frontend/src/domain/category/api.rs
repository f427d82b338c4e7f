use contracts::domain::category::{Category, CategoryPayload};
use contracts::shared::ListQuery;

use crate::shared::api::{client, ApiError, DROPDOWN_FETCH_LIMIT};

pub const RESOURCE: &str = "categories";

pub async fn create(payload: &CategoryPayload) -> Result<Category, ApiError> {
    client::create(RESOURCE, payload).await
}

pub async fn update(id: &str, payload: &CategoryPayload) -> Result<Category, ApiError> {
    client::update(RESOURCE, id, payload).await
}

pub async fn delete(id: &str) -> Result<(), ApiError> {
    client::delete(RESOURCE, id).await
}

/// Every category in one oversized page, for the dropdowns in the
/// product and subcategory forms.
pub async fn fetch_all_for_dropdown() -> Result<Vec<Category>, ApiError> {
    let query = ListQuery::new(1, DROPDOWN_FETCH_LIMIT);
    Ok(client::list_typed::<Category>(RESOURCE, &query).await?.data)
}
