//! Registered callback lists.
//!
//! Used for scroll-owner notifications and layout invalidation requests.
//! Callbacks are caller-supplied closures; there is no ambient registry.

use smallvec::SmallVec;

/// Handle returned by [`CallbackList::add`], used to unregister.
pub type CallbackId = u64;

/// An ordered list of callbacks receiving a `Copy` argument.
pub struct CallbackList<A: Copy = ()> {
    callbacks: SmallVec<[(CallbackId, Box<dyn Fn(A)>); 2]>,
    next_id: CallbackId,
}

impl<A: Copy> CallbackList<A> {
    pub fn new() -> Self {
        Self {
            callbacks: SmallVec::new(),
            next_id: 1,
        }
    }

    /// Adds a callback and returns its id.
    pub fn add(&mut self, callback: Box<dyn Fn(A)>) -> CallbackId {
        let id = self.next_id;
        self.next_id += 1;
        self.callbacks.push((id, callback));
        id
    }

    /// Removes a callback. Returns `false` if the id was not registered.
    pub fn remove(&mut self, id: CallbackId) -> bool {
        let before = self.callbacks.len();
        self.callbacks.retain(|(cb_id, _)| *cb_id != id);
        before != self.callbacks.len()
    }

    pub fn len(&self) -> usize {
        self.callbacks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.callbacks.is_empty()
    }

    /// Invokes every callback in registration order.
    pub fn notify(&self, arg: A) {
        log::trace!("notifying {} callback(s)", self.callbacks.len());
        for (_, callback) in &self.callbacks {
            callback(arg);
        }
    }
}

impl<A: Copy> Default for CallbackList<A> {
    fn default() -> Self {
        Self::new()
    }
}

impl<A: Copy> std::fmt::Debug for CallbackList<A> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CallbackList")
            .field("len", &self.callbacks.len())
            .finish()
    }
}
