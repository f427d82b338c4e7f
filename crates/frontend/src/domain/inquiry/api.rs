use contracts::domain::inquiry::{Inquiry, InquiryStatus, InquiryUpdate};

use crate::shared::api::{client, ApiError};

pub const RESOURCE: &str = "inquiries";

pub async fn set_status(id: &str, status: InquiryStatus) -> Result<Inquiry, ApiError> {
    client::update(RESOURCE, id, &InquiryUpdate { status }).await
}

pub async fn delete(id: &str) -> Result<(), ApiError> {
    client::delete(RESOURCE, id).await
}
