//! Item sources and collection change notifications.

mod item_source;
mod items_changed;

pub use item_source::*;
pub use items_changed::*;
