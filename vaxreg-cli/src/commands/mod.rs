pub mod catalog;
pub mod menu;
