pub mod book_view;
pub mod drop_zone;
pub mod share_menu;
pub mod story_loading;
