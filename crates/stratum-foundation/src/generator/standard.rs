use std::marker::PhantomData;

use super::{
    ContainerFactory, ContainerGenerator, GeneratorStats, Realization, RealizedContainers,
    VirtualizationMode,
};

/// Generator that discards containers when they are released.
pub struct StandardContainerGenerator<T, F: ContainerFactory<T>> {
    factory: F,
    realized: RealizedContainers<F::Container>,
    total_created: usize,
    _items: PhantomData<fn(&T)>,
}

impl<T, F: ContainerFactory<T>> StandardContainerGenerator<T, F> {
    pub fn new(factory: F) -> Self {
        Self {
            factory,
            realized: RealizedContainers::new(),
            total_created: 0,
            _items: PhantomData,
        }
    }

    pub fn factory(&self) -> &F {
        &self.factory
    }

    pub fn factory_mut(&mut self) -> &mut F {
        &mut self.factory
    }
}

impl<T, F: ContainerFactory<T>> ContainerGenerator<T> for StandardContainerGenerator<T, F> {
    type Container = F::Container;

    fn mode(&self) -> VirtualizationMode {
        VirtualizationMode::Standard
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
        let mut container = self.factory.create_container(item);
        self.total_created += 1;
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
        log::trace!(
            "discarding container {} (item {})",
            entry.id(),
            entry.item_index()
        );
        let mut container = entry.into_container();
        self.factory.clear_container(&mut container);
    }

    fn stats(&self) -> GeneratorStats {
        GeneratorStats {
            items_in_use: self.realized.len(),
            items_in_pool: 0,
            total_created: self.total_created,
            reuse_count: 0,
        }
    }
}
