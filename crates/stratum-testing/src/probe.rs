use std::cell::{Cell, RefCell};
use std::rc::Rc;

use stratum_core::CallbackId;
use stratum_foundation::{ContainerGenerator, ItemSource, VirtualizingStackPanel};
use stratum_ui_layout::DirtyPhase;

/// Counts scroll-owner notifications of a panel.
#[derive(Debug, Clone)]
pub struct ScrollOwnerProbe {
    id: CallbackId,
    count: Rc<Cell<usize>>,
}

impl ScrollOwnerProbe {
    pub fn attach<S, G>(panel: &mut VirtualizingStackPanel<S, G>) -> Self
    where
        S: ItemSource,
        G: ContainerGenerator<S::Item>,
    {
        let count = Rc::new(Cell::new(0));
        let counter = Rc::clone(&count);
        let id = panel.add_scroll_owner(Box::new(move || counter.set(counter.get() + 1)));
        Self { id, count }
    }

    pub fn id(&self) -> CallbackId {
        self.id
    }

    pub fn count(&self) -> usize {
        self.count.get()
    }

    pub fn reset(&self) {
        self.count.set(0);
    }
}

/// Records the phases a panel asks its host to re-run.
#[derive(Debug, Clone, Default)]
pub struct InvalidationProbe {
    phases: Rc<RefCell<Vec<DirtyPhase>>>,
}

impl InvalidationProbe {
    pub fn attach<S, G>(panel: &mut VirtualizingStackPanel<S, G>) -> Self
    where
        S: ItemSource,
        G: ContainerGenerator<S::Item>,
    {
        let probe = Self::default();
        let phases = Rc::clone(&probe.phases);
        panel
            .layout_invalidation_mut()
            .add_callback(Box::new(move |phase| phases.borrow_mut().push(phase)));
        probe
    }

    pub fn phases(&self) -> Vec<DirtyPhase> {
        self.phases.borrow().clone()
    }

    pub fn take(&self) -> Vec<DirtyPhase> {
        std::mem::take(&mut *self.phases.borrow_mut())
    }
}
