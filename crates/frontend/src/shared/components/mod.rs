pub mod form_field;
pub mod page_header;
pub mod pagination_controls;
pub mod search_input;

pub use form_field::{field_error, sync_field_error, FormField};
pub use page_header::PageHeader;
pub use pagination_controls::{scroll_to_top, PaginationControls};
pub use search_input::SearchInput;
