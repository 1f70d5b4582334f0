//! Layout contracts for Stratum.
//!
//! Defines the measure/arrange contract a container must satisfy
//! ([`LayoutElement`]), stacking orientation helpers, the sizing rules a panel
//! applies to its children, and dirty-phase tracking for layout invalidation.

mod dirty;
mod element;
mod orientation;
mod sizing;

pub use dirty::{DirtyPhase, LayoutInvalidation};
pub use element::LayoutElement;
pub use orientation::Orientation;
pub use sizing::PanelSizing;

pub use stratum_ui_graphics::{Point, Rect, Size};
