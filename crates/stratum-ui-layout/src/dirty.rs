use stratum_core::{CallbackId, CallbackList};

/// Set of layout passes that need to run again.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DirtyPhase(u8);

impl DirtyPhase {
    pub const NONE: Self = Self(0);
    pub const MEASURE: Self = Self(1 << 0);
    pub const ARRANGE: Self = Self(1 << 1);

    pub fn contains(self, other: Self) -> bool {
        self.0 & other.0 != 0
    }

    pub fn insert(&mut self, other: Self) {
        self.0 |= other.0;
    }

    pub fn remove(&mut self, other: Self) {
        self.0 &= !other.0;
    }

    pub fn is_empty(self) -> bool {
        self.0 == 0
    }
}

impl std::ops::BitOr for DirtyPhase {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

/// Tracks which layout passes an element needs and tells the host about it.
///
/// A measure invalidation implies an arrange invalidation: a re-measured
/// element always has to be placed again.
#[derive(Debug)]
pub struct LayoutInvalidation {
    dirty: DirtyPhase,
    callbacks: CallbackList<DirtyPhase>,
}

impl LayoutInvalidation {
    /// New elements start dirty in both phases.
    pub fn new() -> Self {
        Self {
            dirty: DirtyPhase::MEASURE | DirtyPhase::ARRANGE,
            callbacks: CallbackList::new(),
        }
    }

    pub fn invalidate_measure(&mut self) {
        self.mark_dirty(DirtyPhase::MEASURE | DirtyPhase::ARRANGE);
    }

    pub fn invalidate_arrange(&mut self) {
        self.mark_dirty(DirtyPhase::ARRANGE);
    }

    fn mark_dirty(&mut self, phases: DirtyPhase) {
        self.dirty.insert(phases);
        self.callbacks.notify(phases);
    }

    pub fn mark_clean(&mut self, phases: DirtyPhase) {
        self.dirty.remove(phases);
    }

    pub fn is_dirty(&self, phases: DirtyPhase) -> bool {
        self.dirty.contains(phases)
    }

    pub fn dirty(&self) -> DirtyPhase {
        self.dirty
    }

    /// Registers a host callback invoked with the phases being invalidated.
    pub fn add_callback(&mut self, callback: Box<dyn Fn(DirtyPhase)>) -> CallbackId {
        self.callbacks.add(callback)
    }

    pub fn remove_callback(&mut self, id: CallbackId) -> bool {
        self.callbacks.remove(id)
    }
}

impl Default for LayoutInvalidation {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn test_measure_implies_arrange() {
        let mut inv = LayoutInvalidation::new();
        inv.mark_clean(DirtyPhase::MEASURE | DirtyPhase::ARRANGE);
        assert!(inv.dirty().is_empty());

        inv.invalidate_measure();
        assert!(inv.is_dirty(DirtyPhase::MEASURE));
        assert!(inv.is_dirty(DirtyPhase::ARRANGE));
    }

    #[test]
    fn test_arrange_only() {
        let mut inv = LayoutInvalidation::new();
        inv.mark_clean(DirtyPhase::MEASURE | DirtyPhase::ARRANGE);
        inv.invalidate_arrange();
        assert!(!inv.is_dirty(DirtyPhase::MEASURE));
        assert!(inv.is_dirty(DirtyPhase::ARRANGE));
    }

    #[test]
    fn test_callbacks_receive_phases() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let mut inv = LayoutInvalidation::new();
        let s = seen.clone();
        inv.add_callback(Box::new(move |phase| s.borrow_mut().push(phase)));

        inv.invalidate_arrange();
        inv.invalidate_measure();

        let seen = seen.borrow();
        assert_eq!(seen.len(), 2);
        assert_eq!(seen[0], DirtyPhase::ARRANGE);
        assert!(seen[1].contains(DirtyPhase::MEASURE));
    }
}
