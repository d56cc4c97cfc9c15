//! Database operations for the `items` table.

mod read;
mod types;
mod write;

pub use read::{count_items_in_box, escape_like, list_items_in_box};
pub use types::{ItemRow, NewItem};
pub use write::insert_item;
