pub mod book;
pub mod home;
