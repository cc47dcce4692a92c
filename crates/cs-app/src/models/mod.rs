pub mod menu;

pub use menu::{menu_title, MenuItem, MenuModel, MENU_TITLE_MAX_CHARS};
