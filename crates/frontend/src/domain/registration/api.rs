use crate::shared::api::{client, ApiError};

pub const RESOURCE: &str = "registrations";

/// Registrations are created by the storefront; the admin side only
/// removes them.
pub async fn delete(id: &str) -> Result<(), ApiError> {
    client::delete(RESOURCE, id).await
}
