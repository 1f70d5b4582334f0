//! Item source trait for virtualizing panels.

use std::ops::Range;

use super::ItemsChanged;

/// Ordered sequence of items a virtualizing panel presents.
///
/// The panel only asks for the count and for the items it is about to
/// realize. Structural changes are reported to the panel separately through
/// [`ItemsChanged`] events, after the source has been mutated.
pub trait ItemSource {
    type Item;

    /// The total number of items (realized or not).
    fn item_count(&self) -> usize;

    /// Returns the item at `index`, or `None` past the end.
    fn item(&self, index: usize) -> Option<&Self::Item>;
}

/// A `Vec`-backed [`ItemSource`] whose mutators report the matching
/// [`ItemsChanged`] event.
///
/// ```rust,ignore
/// let event = panel.items_mut().insert(0, row);
/// panel.on_items_changed(event);
/// ```
#[derive(Clone, Debug, Default)]
pub struct VecItemSource<T> {
    items: Vec<T>,
}

impl<T> VecItemSource<T> {
    pub fn new(items: Vec<T>) -> Self {
        Self { items }
    }

    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    pub fn push(&mut self, item: T) -> ItemsChanged {
        let index = self.items.len();
        self.items.push(item);
        ItemsChanged::Add { index, count: 1 }
    }

    /// Inserts `item` at `index`, clamped to the end of the source.
    pub fn insert(&mut self, index: usize, item: T) -> ItemsChanged {
        let index = index.min(self.items.len());
        self.items.insert(index, item);
        ItemsChanged::Add { index, count: 1 }
    }

    /// Inserts every item of `items` starting at `index`.
    pub fn insert_many<I>(&mut self, index: usize, items: I) -> ItemsChanged
    where
        I: IntoIterator<Item = T>,
    {
        let index = index.min(self.items.len());
        let before = self.items.len();
        let tail = self.items.split_off(index);
        self.items.extend(items);
        let count = self.items.len() - before + tail.len();
        self.items.extend(tail);
        ItemsChanged::Add { index, count }
    }

    /// Removes `range`, clamped to the current bounds.
    pub fn remove_range(&mut self, range: Range<usize>) -> ItemsChanged {
        let end = range.end.min(self.items.len());
        let start = range.start.min(end);
        self.items.drain(start..end);
        ItemsChanged::Remove {
            index: start,
            count: end - start,
        }
    }

    /// Replaces the item at `index`. Returns `None` if `index` is out of bounds.
    pub fn replace(&mut self, index: usize, item: T) -> Option<ItemsChanged> {
        let slot = self.items.get_mut(index)?;
        *slot = item;
        Some(ItemsChanged::Replace { index, count: 1 })
    }

    /// Replaces the whole content.
    pub fn reset(&mut self, items: Vec<T>) -> ItemsChanged {
        self.items = items;
        ItemsChanged::Reset
    }
}

impl<T> ItemSource for VecItemSource<T> {
    type Item = T;

    fn item_count(&self) -> usize {
        self.items.len()
    }

    fn item(&self, index: usize) -> Option<&T> {
        self.items.get(index)
    }
}

impl<T> From<Vec<T>> for VecItemSource<T> {
    fn from(items: Vec<T>) -> Self {
        Self::new(items)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_many_reports_inserted_count() {
        let mut source = VecItemSource::new(vec![1, 2, 3]);
        let event = source.insert_many(1, [10, 11]);
        assert_eq!(event, ItemsChanged::Add { index: 1, count: 2 });
        assert_eq!(source.as_slice(), &[1, 10, 11, 2, 3]);
    }

    #[test]
    fn test_remove_range_is_clamped() {
        let mut source = VecItemSource::new((0..5).collect());
        let event = source.remove_range(3..10);
        assert_eq!(event, ItemsChanged::Remove { index: 3, count: 2 });
        assert_eq!(source.item_count(), 3);
    }

    #[test]
    fn test_replace_out_of_bounds() {
        let mut source = VecItemSource::new(vec!["a"]);
        assert_eq!(source.replace(3, "b"), None);
        assert_eq!(
            source.replace(0, "b"),
            Some(ItemsChanged::Replace { index: 0, count: 1 })
        );
        assert_eq!(source.item(0), Some(&"b"));
    }
}
