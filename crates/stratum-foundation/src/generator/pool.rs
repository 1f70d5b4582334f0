//! Pool of released containers kept for reuse.
//!
//! Containers are grouped by content type so a container is only handed to
//! an item it was built for.

use stratum_core::collections::map::HashMap;

/// Default number of containers kept per content type.
pub const DEFAULT_POOLED_PER_TYPE: usize = 7;

/// Policy for keeping released containers.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ContainerPoolPolicy {
    /// Maximum number of pooled containers for each content type.
    pub max_per_type: usize,

    /// Whether pooling is enabled.
    pub enabled: bool,
}

impl Default for ContainerPoolPolicy {
    fn default() -> Self {
        Self {
            max_per_type: DEFAULT_POOLED_PER_TYPE,
            enabled: true,
        }
    }
}

impl ContainerPoolPolicy {
    pub fn new(max_per_type: usize) -> Self {
        Self {
            max_per_type,
            enabled: true,
        }
    }

    pub fn disabled() -> Self {
        Self {
            max_per_type: 0,
            enabled: false,
        }
    }
}

/// Released containers available for reuse, keyed by content type.
#[derive(Debug)]
pub struct ContainerPool<C> {
    /// Key is the content type (`None` maps to 0).
    available: HashMap<u64, Vec<C>>,
    policy: ContainerPoolPolicy,
}

impl<C> ContainerPool<C> {
    pub fn new() -> Self {
        Self::with_policy(ContainerPoolPolicy::default())
    }

    pub fn with_policy(policy: ContainerPoolPolicy) -> Self {
        Self {
            available: HashMap::default(),
            policy,
        }
    }

    pub fn policy(&self) -> &ContainerPoolPolicy {
        &self.policy
    }

    /// Takes a pooled container of the given content type, if any.
    pub fn try_take(&mut self, content_type: Option<u64>) -> Option<C> {
        if !self.policy.enabled {
            return None;
        }
        self.available
            .get_mut(&content_type.unwrap_or(0))
            .and_then(|containers| containers.pop())
    }

    /// Offers a container for reuse. Returns `false` if the pool refused it,
    /// in which case the container has been dropped.
    pub fn put(&mut self, content_type: Option<u64>, container: C) -> bool {
        if !self.policy.enabled {
            return false;
        }
        let containers = self.available.entry(content_type.unwrap_or(0)).or_default();
        if containers.len() < self.policy.max_per_type {
            containers.push(container);
            true
        } else {
            false
        }
    }

    pub fn available_count(&self) -> usize {
        self.available.values().map(Vec::len).sum()
    }

    pub fn clear(&mut self) {
        self.available.clear();
    }
}

impl<C> Default for ContainerPool<C> {
    fn default() -> Self {
        Self::new()
    }
}
