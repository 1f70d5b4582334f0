use stratum_ui_layout::LayoutElement;

/// Creates and binds containers for items of type `T`.
///
/// Supplied by the caller; the generator decides when a container is
/// created, bound to an item, or unbound.
pub trait ContainerFactory<T> {
    type Container: LayoutElement;

    /// Creates a fresh, unbound container suitable for `item`.
    fn create_container(&mut self, item: &T) -> Self::Container;

    /// Binds `container` to `item`. Called every time the container is
    /// handed out for a measure pass, including for already-realized ones.
    fn prepare_container(&mut self, container: &mut Self::Container, item: &T);

    /// Unbinds `container` before it is pooled or dropped.
    fn clear_container(&mut self, container: &mut Self::Container) {
        let _ = container;
    }

    /// Containers are only reused for items of the same content type.
    /// `None` is pooled together with type `0`.
    fn content_type(&self, item: &T) -> Option<u64> {
        let _ = item;
        None
    }
}
