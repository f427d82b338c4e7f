use contracts::domain::subcategory::{Subcategory, SubcategoryPayload};
use contracts::shared::ListQuery;

use crate::shared::api::{client, ApiError, DROPDOWN_FETCH_LIMIT};

pub const RESOURCE: &str = "subcategories";

pub async fn create(payload: &SubcategoryPayload) -> Result<Subcategory, ApiError> {
    client::create(RESOURCE, payload).await
}

pub async fn update(id: &str, payload: &SubcategoryPayload) -> Result<Subcategory, ApiError> {
    client::update(RESOURCE, id, payload).await
}

pub async fn delete(id: &str) -> Result<(), ApiError> {
    client::delete(RESOURCE, id).await
}

/// Every subcategory in one oversized page; the product form filters
/// them by the selected category on the client.
pub async fn fetch_all_for_dropdown() -> Result<Vec<Subcategory>, ApiError> {
    let query = ListQuery::new(1, DROPDOWN_FETCH_LIMIT);
    Ok(client::list_typed::<Subcategory>(RESOURCE, &query).await?.data)
}
