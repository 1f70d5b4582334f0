/// A structural change to an item source, in item indices.
///
/// Events describe a change that has already been applied to the source:
/// `Add { index, count }` means the items now at `index..index + count` are
/// new, `Remove` means `count` items that used to start at `index` are gone.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ItemsChanged {
    Add { index: usize, count: usize },
    Remove { index: usize, count: usize },
    Replace { index: usize, count: usize },
    Reset,
}

impl ItemsChanged {
    /// Number of items touched by the change, `0` for [`ItemsChanged::Reset`].
    pub fn item_count(&self) -> usize {
        match *self {
            ItemsChanged::Add { count, .. }
            | ItemsChanged::Remove { count, .. }
            | ItemsChanged::Replace { count, .. } => count,
            ItemsChanged::Reset => 0,
        }
    }
}
