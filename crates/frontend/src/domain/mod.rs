pub mod banner;
pub mod blog;
pub mod category;
pub mod inquiry;
pub mod product;
pub mod reel;
pub mod registration;
pub mod subcategory;
pub mod workshop;
