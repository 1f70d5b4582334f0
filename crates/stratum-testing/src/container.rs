use stratum_foundation::ContainerFactory;
use stratum_ui_graphics::{Rect, Size};
use stratum_ui_layout::LayoutElement;

/// A container that records the layout calls it receives.
///
/// Its desired size is the size assigned by the factory for the bound item,
/// limited by the constraint of the last measure.
#[derive(Debug, Clone)]
pub struct TestContainer<T> {
    pub item: Option<T>,
    pub size: Size,
    pub last_available: Option<Size>,
    pub arranged: Option<Rect>,
    pub measure_calls: usize,
    pub arrange_calls: usize,
    /// Number of times the container was bound to an item.
    pub bind_count: usize,
    desired: Size,
}

impl<T> TestContainer<T> {
    pub fn new(size: Size) -> Self {
        Self {
            item: None,
            size,
            last_available: None,
            arranged: None,
            measure_calls: 0,
            arrange_calls: 0,
            bind_count: 0,
            desired: Size::ZERO,
        }
    }

    pub fn is_bound(&self) -> bool {
        self.item.is_some()
    }
}

impl<T> LayoutElement for TestContainer<T> {
    fn measure(&mut self, available: Size) {
        self.measure_calls += 1;
        self.last_available = Some(available);
        self.desired = Size::new(
            self.size.width.min(available.width),
            self.size.height.min(available.height),
        );
    }

    fn desired_size(&self) -> Size {
        self.desired
    }

    fn arrange(&mut self, final_rect: Rect) {
        self.arrange_calls += 1;
        self.arranged = Some(final_rect);
    }

    fn render_size(&self) -> Size {
        self.arranged.map(|rect| rect.size()).unwrap_or(Size::ZERO)
    }
}

type SizeFn<T> = Box<dyn Fn(&T) -> Size>;
type ContentTypeFn<T> = Box<dyn Fn(&T) -> Option<u64>>;

/// Factory producing [`TestContainer`]s.
pub struct TestContainerFactory<T> {
    size_of: SizeFn<T>,
    content_type_of: Option<ContentTypeFn<T>>,
    pub created: usize,
    pub prepared: usize,
    pub cleared: usize,
}

impl<T> TestContainerFactory<T> {
    /// Every item gets `size`.
    pub fn fixed(size: Size) -> Self {
        Self::sized_by(move |_| size)
    }

    /// Item sizes come from `size_of`.
    pub fn sized_by(size_of: impl Fn(&T) -> Size + 'static) -> Self {
        Self {
            size_of: Box::new(size_of),
            content_type_of: None,
            created: 0,
            prepared: 0,
            cleared: 0,
        }
    }

    /// Containers are pooled per content type returned by `content_type_of`.
    pub fn with_content_type(
        mut self,
        content_type_of: impl Fn(&T) -> Option<u64> + 'static,
    ) -> Self {
        self.content_type_of = Some(Box::new(content_type_of));
        self
    }
}

impl<T: Clone> ContainerFactory<T> for TestContainerFactory<T> {
    type Container = TestContainer<T>;

    fn create_container(&mut self, item: &T) -> TestContainer<T> {
        self.created += 1;
        TestContainer::new((self.size_of)(item))
    }

    fn prepare_container(&mut self, container: &mut TestContainer<T>, item: &T) {
        self.prepared += 1;
        container.size = (self.size_of)(item);
        container.item = Some(item.clone());
        container.bind_count += 1;
    }

    fn clear_container(&mut self, container: &mut TestContainer<T>) {
        self.cleared += 1;
        container.item = None;
        container.arranged = None;
    }

    fn content_type(&self, item: &T) -> Option<u64> {
        self.content_type_of
            .as_ref()
            .and_then(|content_type_of| content_type_of(item))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_container_desired_size_is_limited_by_constraint() {
        let mut container = TestContainer::<u32>::new(Size::new(300.0, 20.0));
        container.measure(Size::new(100.0, f32::INFINITY));
        assert_eq!(container.desired_size(), Size::new(100.0, 20.0));
        assert_eq!(container.measure_calls, 1);
    }

    #[test]
    fn test_factory_binds_and_clears() {
        let mut factory =
            TestContainerFactory::sized_by(|item: &u32| Size::new(10.0, *item as f32));
        let mut container = factory.create_container(&4);
        factory.prepare_container(&mut container, &4);
        assert_eq!(container.item, Some(4));
        assert_eq!(container.size, Size::new(10.0, 4.0));

        factory.clear_container(&mut container);
        assert!(!container.is_bound());
        assert_eq!((factory.created, factory.prepared, factory.cleared), (1, 1, 1));
    }
}
