pub mod list;

pub use list::RegistrationSection;
