//! Ordered storage of realized containers.

use std::ops::{Index, IndexMut};

use smallvec::SmallVec;
use stratum_core::{ContainerId, ContainerIdAllocator};

use super::position::saturating_i32;
use super::GeneratorPosition;

/// A container currently bound to an item.
#[derive(Debug)]
pub struct RealizedContainer<C> {
    id: ContainerId,
    item_index: usize,
    content_type: Option<u64>,
    detached: bool,
    container: C,
}

impl<C> RealizedContainer<C> {
    pub fn id(&self) -> ContainerId {
        self.id
    }

    pub fn item_index(&self) -> usize {
        self.item_index
    }

    pub fn content_type(&self) -> Option<u64> {
        self.content_type
    }

    /// Whether the container is still realized but no longer a panel child.
    ///
    /// Set when a clean-up hook cancels the release of a container that left
    /// the retained window. Realizing its item again makes it a child again.
    pub fn is_detached(&self) -> bool {
        self.detached
    }

    pub fn container(&self) -> &C {
        &self.container
    }

    pub fn container_mut(&mut self) -> &mut C {
        &mut self.container
    }

    pub fn into_container(self) -> C {
        self.container
    }
}

/// Realized containers, sorted by item index.
///
/// Positions in this list are generator child indices. They include detached
/// entries, so they match panel child order but not panel child numbering
/// once a container is detached.
#[derive(Debug)]
pub struct RealizedContainers<C> {
    entries: Vec<RealizedContainer<C>>,
    ids: ContainerIdAllocator,
}

impl<C> RealizedContainers<C> {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            ids: ContainerIdAllocator::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of entries that are panel children.
    pub fn attached_count(&self) -> usize {
        self.entries.iter().filter(|entry| !entry.detached).count()
    }

    /// Entries that are panel children, in child order.
    pub fn attached(&self) -> impl Iterator<Item = &RealizedContainer<C>> + '_ {
        self.entries.iter().filter(|entry| !entry.detached)
    }

    pub fn get(&self, child_index: usize) -> Option<&RealizedContainer<C>> {
        self.entries.get(child_index)
    }

    pub fn get_mut(&mut self, child_index: usize) -> Option<&mut RealizedContainer<C>> {
        self.entries.get_mut(child_index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, RealizedContainer<C>> {
        self.entries.iter()
    }

    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, RealizedContainer<C>> {
        self.entries.iter_mut()
    }

    /// Child index of the container realized for `item_index`, if any.
    pub fn child_index_of_item(&self, item_index: usize) -> Option<usize> {
        self.search(item_index).ok()
    }

    /// Child index of the container with `id`, if it is realized.
    pub fn child_index_of(&self, id: ContainerId) -> Option<usize> {
        self.entries.iter().position(|entry| entry.id == id)
    }

    fn search(&self, item_index: usize) -> Result<usize, usize> {
        self.entries
            .binary_search_by_key(&item_index, |entry| entry.item_index)
    }

    /// Translates an item index into a generator position.
    pub fn position_from_index(&self, item_index: usize) -> GeneratorPosition {
        match self.search(item_index) {
            Ok(child) => GeneratorPosition::child(child),
            Err(0) => {
                GeneratorPosition::new(-1, saturating_i32(item_index.saturating_add(1)))
            }
            Err(insert_at) => {
                let previous = &self.entries[insert_at - 1];
                GeneratorPosition::new(
                    saturating_i32(insert_at - 1),
                    saturating_i32(item_index - previous.item_index),
                )
            }
        }
    }

    /// Translates a generator position back into an item index.
    ///
    /// Returns `None` when the position names a realized container that does
    /// not exist or resolves to a negative index.
    pub fn index_from_position(&self, position: GeneratorPosition) -> Option<usize> {
        let base = if position.index < 0 {
            -1
        } else {
            self.entries.get(position.index as usize)?.item_index as i64
        };
        usize::try_from(base + position.offset as i64).ok()
    }

    /// Stores a new container for `item_index` at its sorted position and
    /// returns its child index and id.
    pub(crate) fn insert(
        &mut self,
        item_index: usize,
        content_type: Option<u64>,
        container: C,
    ) -> (usize, ContainerId) {
        let child_index = match self.search(item_index) {
            Ok(existing) => {
                log::warn!("item {item_index} realized twice; replacing child {existing}");
                self.entries.remove(existing);
                existing
            }
            Err(insert_at) => insert_at,
        };
        let id = self.ids.next_id();
        self.entries.insert(
            child_index,
            RealizedContainer {
                id,
                item_index,
                content_type,
                detached: false,
                container,
            },
        );
        (child_index, id)
    }

    /// Takes the entry at `child_index` out of the panel's children without
    /// unrealizing it.
    pub(crate) fn detach(&mut self, child_index: usize) {
        self.entries[child_index].detached = true;
    }

    /// Makes a detached entry a panel child again. Returns whether it was
    /// detached.
    pub(crate) fn reattach(&mut self, child_index: usize) -> bool {
        std::mem::replace(&mut self.entries[child_index].detached, false)
    }

    /// Removes and returns the entry at `child_index`.
    pub(crate) fn take(&mut self, child_index: usize) -> RealizedContainer<C> {
        self.entries.remove(child_index)
    }

    /// Child indices whose items fall inside `index..index + count`, in
    /// descending order so they can be taken one by one.
    pub(crate) fn children_in_range(&self, index: usize, count: usize) -> SmallVec<[usize; 8]> {
        let end = index.saturating_add(count);
        self.entries
            .iter()
            .enumerate()
            .rev()
            .filter(|(_, entry)| entry.item_index >= index && entry.item_index < end)
            .map(|(child, _)| child)
            .collect()
    }

    /// Accounts for `count` items inserted at `index`.
    pub(crate) fn shift_for_insert(&mut self, index: usize, count: usize) {
        for entry in self.entries.iter_mut().filter(|e| e.item_index >= index) {
            entry.item_index += count;
        }
    }

    /// Accounts for `count` items removed at `index`. Entries inside the
    /// removed range must already be gone.
    pub(crate) fn shift_for_remove(&mut self, index: usize, count: usize) {
        let end = index.saturating_add(count);
        for entry in self.entries.iter_mut().filter(|e| e.item_index >= end) {
            entry.item_index -= count;
        }
    }
}

impl<C> Default for RealizedContainers<C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C> Index<usize> for RealizedContainers<C> {
    type Output = RealizedContainer<C>;

    fn index(&self, child_index: usize) -> &Self::Output {
        &self.entries[child_index]
    }
}

impl<C> IndexMut<usize> for RealizedContainers<C> {
    fn index_mut(&mut self, child_index: usize) -> &mut Self::Output {
        &mut self.entries[child_index]
    }
}
