pub mod forms;
pub mod nav_menu;
pub mod scroll;
