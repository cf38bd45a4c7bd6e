pub mod category;
pub mod item;
pub mod milestone;
pub mod shop;
