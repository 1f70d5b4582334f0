//! Item container generation.
//!
//! A generator maps item indices to realized containers. Two strategies are
//! provided:
//! - [`StandardContainerGenerator`] drops containers once they are released
//! - [`RecyclingContainerGenerator`] keeps released containers in a
//!   [`ContainerPool`] and rebinds them to new items
//!
//! Both share [`RealizedContainers`] for the index/position bookkeeping, so
//! the panel only sees the [`ContainerGenerator`] trait.

mod factory;
mod pool;
mod position;
mod realized;
mod recycling;
mod standard;

pub use factory::*;
pub use pool::*;
pub use position::*;
pub use realized::*;
pub use recycling::*;
pub use standard::*;

use stratum_core::ContainerId;
use stratum_ui_layout::LayoutElement;

/// How a generator treats containers that leave the retained window.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum VirtualizationMode {
    /// Released containers are discarded.
    Standard,
    /// Released containers are pooled and reused for other items.
    #[default]
    Recycling,
}

/// Outcome of realizing an item.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Realization {
    /// Child index of the container in the realized list.
    pub child_index: usize,
    pub id: ContainerId,
    /// `false` when the item already had a container.
    pub newly_realized: bool,
}

/// Container lifecycle statistics.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct GeneratorStats {
    /// Containers currently realized, detached ones included.
    pub items_in_use: usize,

    /// Containers waiting in the recycle pool.
    pub items_in_pool: usize,

    /// Containers created by the factory so far.
    pub total_created: usize,

    /// Realizations served from the pool instead of the factory.
    pub reuse_count: usize,
}

/// Maps item indices to realized containers for items of type `T`.
pub trait ContainerGenerator<T> {
    type Container: LayoutElement;

    fn mode(&self) -> VirtualizationMode;

    fn realized(&self) -> &RealizedContainers<Self::Container>;

    fn realized_mut(&mut self) -> &mut RealizedContainers<Self::Container>;

    /// Returns the container for `item_index`, creating or reusing one if the
    /// item is not realized yet. The container is (re)bound to `item`.
    fn realize(&mut self, item_index: usize, item: &T) -> Realization;

    /// Unrealizes the container at `child_index`.
    fn release(&mut self, child_index: usize);

    fn stats(&self) -> GeneratorStats;

    fn generator_position_from_index(&self, item_index: usize) -> GeneratorPosition {
        self.realized().position_from_index(item_index)
    }

    fn index_from_generator_position(&self, position: GeneratorPosition) -> Option<usize> {
        self.realized().index_from_position(position)
    }

    /// Number of realized containers that are panel children.
    fn child_count(&self) -> usize {
        self.realized().attached_count()
    }

    /// `count` items were inserted at `index`.
    fn items_inserted(&mut self, index: usize, count: usize) {
        self.realized_mut().shift_for_insert(index, count);
    }

    /// `count` items were removed at `index`. Returns the number of
    /// containers released.
    fn items_removed(&mut self, index: usize, count: usize) -> usize {
        let released = self.items_replaced(index, count);
        self.realized_mut().shift_for_remove(index, count);
        released
    }

    /// `count` items were replaced at `index`. Returns the number of
    /// containers released.
    fn items_replaced(&mut self, index: usize, count: usize) -> usize {
        let children = self.realized().children_in_range(index, count);
        for &child in &children {
            self.release(child);
        }
        children.len()
    }

    /// Releases every realized container, detached ones included.
    fn release_all(&mut self) {
        for child in (0..self.realized().len()).rev() {
            self.release(child);
        }
    }
}
