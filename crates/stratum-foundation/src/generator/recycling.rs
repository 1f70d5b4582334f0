use std::marker::PhantomData;

use super::{
    ContainerFactory, ContainerGenerator, ContainerPool, ContainerPoolPolicy, GeneratorStats,
    Realization, RealizedContainers, VirtualizationMode,
};

/// Generator that pools released containers and rebinds them to new items.
pub struct RecyclingContainerGenerator<T, F: ContainerFactory<T>> {
    factory: F,
    realized: RealizedContainers<F::Container>,
    pool: ContainerPool<F::Container>,
    total_created: usize,
    reuse_count: usize,
    _items: PhantomData<fn(&T)>,
}

impl<T, F: ContainerFactory<T>> RecyclingContainerGenerator<T, F> {
    pub fn new(factory: F) -> Self {
        Self::with_policy(factory, ContainerPoolPolicy::default())
    }

    pub fn with_policy(factory: F, policy: ContainerPoolPolicy) -> Self {
        Self {
            factory,
            realized: RealizedContainers::new(),
            pool: ContainerPool::with_policy(policy),
            total_created: 0,
            reuse_count: 0,
            _items: PhantomData,
        }
    }

    pub fn factory(&self) -> &F {
        &self.factory
    }

    pub fn factory_mut(&mut self) -> &mut F {
        &mut self.factory
    }

    pub fn pool(&self) -> &ContainerPool<F::Container> {
        &self.pool
    }

    /// Drops every pooled container.
    pub fn clear_pool(&mut self) {
        self.pool.clear();
    }
}

impl<T, F: ContainerFactory<T>> ContainerGenerator<T> for RecyclingContainerGenerator<T, F> {
    type Container = F::Container;

    fn mode(&self) -> VirtualizationMode {
        VirtualizationMode::Recycling
    }

    fn realized(&self) -> &RealizedContainers<F::Container> {
        &self.realized
    }

    fn realized_mut(&mut self) -> &mut RealizedContainers<F::Container> {
        &mut self.realized
    }

    fn realize(&mut self, item_index: usize, item: &T) -> Realization {
        if let Some(child_index) = self.realized.child_index_of_item(item_index) {
            if self.realized.reattach(child_index) {
                log::trace!("item {item_index} is back in view; reattaching its container");
            }
            let entry = &mut self.realized[child_index];
            self.factory.prepare_container(entry.container_mut(), item);
            return Realization {
                child_index,
                id: entry.id(),
                newly_realized: false,
            };
        }

        let content_type = self.factory.content_type(item);
        let mut container = match self.pool.try_take(content_type) {
            Some(recycled) => {
                self.reuse_count += 1;
                recycled
            }
            None => {
                self.total_created += 1;
                self.factory.create_container(item)
            }
        };
        self.factory.prepare_container(&mut container, item);
        let (child_index, id) = self.realized.insert(item_index, content_type, container);
        Realization {
            child_index,
            id,
            newly_realized: true,
        }
    }

    fn release(&mut self, child_index: usize) {
        let entry = self.realized.take(child_index);
        let content_type = entry.content_type();
        log::trace!(
            "recycling container {} (item {})",
            entry.id(),
            entry.item_index()
        );
        let mut container = entry.into_container();
        self.factory.clear_container(&mut container);
        if !self.pool.put(content_type, container) {
            log::trace!("recycle pool full for content type {content_type:?}; container dropped");
        }
    }

    fn stats(&self) -> GeneratorStats {
        GeneratorStats {
            items_in_use: self.realized.len(),
            items_in_pool: self.pool.available_count(),
            total_created: self.total_created,
            reuse_count: self.reuse_count,
        }
    }
}
