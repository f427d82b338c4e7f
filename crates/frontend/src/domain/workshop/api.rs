use contracts::domain::workshop::{Workshop, WorkshopPayload};
use contracts::shared::ListQuery;

use crate::shared::api::{client, ApiError, DROPDOWN_FETCH_LIMIT};

pub const RESOURCE: &str = "workshops";

pub async fn create(payload: &WorkshopPayload) -> Result<Workshop, ApiError> {
    client::create(RESOURCE, payload).await
}

pub async fn update(id: &str, payload: &WorkshopPayload) -> Result<Workshop, ApiError> {
    client::update(RESOURCE, id, payload).await
}

pub async fn delete(id: &str) -> Result<(), ApiError> {
    client::delete(RESOURCE, id).await
}

/// Every workshop in one oversized page, for the registration filter.
pub async fn fetch_all_for_dropdown() -> Result<Vec<Workshop>, ApiError> {
    let query = ListQuery::new(1, DROPDOWN_FETCH_LIMIT);
    Ok(client::list_typed::<Workshop>(RESOURCE, &query).await?.data)
}
