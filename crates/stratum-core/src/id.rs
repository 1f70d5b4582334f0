use std::fmt;

/// Stable identity of a realized container.
///
/// Ids are never reused by the allocator that produced them, so a stale id
/// held by a caller can never alias a newer container.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ContainerId(u64);

impl ContainerId {
    pub const fn from_raw(raw: u64) -> Self {
        Self(raw)
    }

    pub const fn raw(self) -> u64 {
        self.0
    }
}

impl fmt::Display for ContainerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Monotonic source of [`ContainerId`]s.
#[derive(Debug)]
pub struct ContainerIdAllocator {
    next: u64,
}

impl ContainerIdAllocator {
    pub fn new() -> Self {
        Self { next: 1 }
    }

    pub fn next_id(&mut self) -> ContainerId {
        let id = ContainerId(self.next);
        self.next += 1;
        id
    }
}

impl Default for ContainerIdAllocator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_are_unique_and_increasing() {
        let mut alloc = ContainerIdAllocator::new();
        let a = alloc.next_id();
        let b = alloc.next_id();
        assert_ne!(a, b);
        assert!(a < b);
        assert_eq!(a.to_string(), "#1");
    }
}
