pub mod list_query;
pub mod page;

pub use list_query::{clamp_page, ListQuery, SortSpec};
pub use page::{pages_for, PageEnvelope, RawListResponse};
