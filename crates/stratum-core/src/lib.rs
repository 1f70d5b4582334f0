//! Core plumbing shared across the Stratum crates.

pub mod callbacks;
pub mod collections;
mod id;

pub use callbacks::{CallbackId, CallbackList};
pub use id::{ContainerId, ContainerIdAllocator};
