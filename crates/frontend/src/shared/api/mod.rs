pub mod client;
pub mod error;
pub mod query;

pub use client::DROPDOWN_FETCH_LIMIT;
pub use error::ApiError;
pub use query::{typed_rows, use_page_query, PageQuery, QueryClient, QueryKey};
