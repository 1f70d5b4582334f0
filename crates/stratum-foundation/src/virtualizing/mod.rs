//! Virtualizing stack panel.
//!
//! [`VirtualizingStackPanel`] realizes containers only for the items around
//! the current scroll position. Scrolling along the stack axis is logical
//! (one unit per item); scrolling along the cross axis is in layout units.

mod config;
mod error;
mod panel;
mod reconcile;
mod scroll;
mod scroll_ops;

pub use config::*;
pub use error::*;
pub use panel::*;
pub use scroll::*;
