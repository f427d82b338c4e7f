pub mod list;

pub use list::InquirySection;
