pub mod cli;
pub mod items;

pub use items::{ItemRegistry, ItemType, ItemTypeError, MenuItem};
