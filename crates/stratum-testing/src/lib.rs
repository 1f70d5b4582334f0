//! Testing utilities for Stratum panels.
//!
//! [`TestContainer`] records what the panel did to it, [`TestContainerFactory`]
//! hands them out with a per-item size, and the probes count scroll-owner
//! and invalidation notifications.

pub mod container;
pub mod panel;
pub mod probe;

pub use container::*;
pub use panel::*;
pub use probe::*;

pub mod prelude {
    pub use crate::container::{TestContainer, TestContainerFactory};
    pub use crate::panel::{layout, realized_items, recycling_panel, standard_panel};
    pub use crate::probe::{InvalidationProbe, ScrollOwnerProbe};
}
