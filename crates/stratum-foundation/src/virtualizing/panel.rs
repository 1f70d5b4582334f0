//! Panel state, measure and arrange.

use stratum_core::{CallbackId, CallbackList, ContainerId};
use stratum_ui_graphics::{Rect, Size};
use stratum_ui_layout::{DirtyPhase, LayoutElement, LayoutInvalidation, Orientation};

use super::{ScrollData, StackPanelConfig};
use crate::generator::{
    ContainerGenerator, GeneratorPosition, GeneratorStats, RealizedContainer, VirtualizationMode,
};
use crate::items::ItemSource;

/// Arguments of the clean-up hook run before a container is released.
pub struct CleanUpVirtualizedItem<'a, C> {
    pub id: ContainerId,
    pub item_index: usize,
    pub container: &'a C,
    /// Set to keep the container realized. It still stops being a child.
    pub cancel: bool,
}

/// Hook run before a measure pass releases a container.
pub type CleanUpHandler<C> = Box<dyn FnMut(&mut CleanUpVirtualizedItem<'_, C>)>;

/// A stacking panel that only realizes containers around its scroll position.
///
/// The panel owns its item source and its container generator. Children are
/// the generator's realized containers that are not detached, always in item
/// order.
pub struct VirtualizingStackPanel<S, G>
where
    S: ItemSource,
    G: ContainerGenerator<S::Item>,
{
    pub(super) items: S,
    pub(super) generator: G,
    pub(super) config: StackPanelConfig,
    pub(super) scroll: ScrollData,
    pub(super) scroll_owner: CallbackList,
    pub(super) layout: LayoutInvalidation,
    clean_up: Option<CleanUpHandler<G::Container>>,
    warned_unbounded: bool,
}

impl<S, G> VirtualizingStackPanel<S, G>
where
    S: ItemSource,
    G: ContainerGenerator<S::Item>,
{
    /// Creates a vertical panel with the default configuration.
    pub fn new(items: S, generator: G) -> Self {
        Self::with_config(items, generator, StackPanelConfig::default())
    }

    /// Creates a panel with an explicit configuration. Nothing is realized
    /// until the first [`measure`](Self::measure).
    pub fn with_config(items: S, generator: G, config: StackPanelConfig) -> Self {
        Self {
            items,
            generator,
            config,
            scroll: ScrollData::default(),
            scroll_owner: CallbackList::new(),
            layout: LayoutInvalidation::new(),
            clean_up: None,
            warned_unbounded: false,
        }
    }

    /// The item source.
    pub fn items(&self) -> &S {
        &self.items
    }

    /// Mutable access to the item source. Structural changes must be
    /// followed by [`on_items_changed`](Self::on_items_changed).
    pub fn items_mut(&mut self) -> &mut S {
        &mut self.items
    }

    /// The container generator.
    pub fn generator(&self) -> &G {
        &self.generator
    }

    /// The panel configuration.
    pub fn config(&self) -> &StackPanelConfig {
        &self.config
    }

    /// The stacking direction.
    pub fn orientation(&self) -> Orientation {
        self.config.orientation
    }

    /// Changes the stacking direction and invalidates measure if it differs.
    pub fn set_orientation(&mut self, orientation: Orientation) {
        if self.config.orientation != orientation {
            self.config.orientation = orientation;
            self.layout.invalidate_measure();
        }
    }

    /// The generator's virtualization mode.
    pub fn virtualization_mode(&self) -> VirtualizationMode {
        self.generator.mode()
    }

    /// Container lifecycle statistics from the generator.
    pub fn stats(&self) -> GeneratorStats {
        self.generator.stats()
    }

    /// Child containers in child order. Detached containers are skipped.
    pub fn children(&self) -> impl Iterator<Item = &RealizedContainer<G::Container>> + '_ {
        self.generator.realized().attached()
    }

    /// Number of child containers.
    pub fn child_count(&self) -> usize {
        self.generator.child_count()
    }

    /// The child container with `id`, if it is a child.
    pub fn container(&self, id: ContainerId) -> Option<&G::Container> {
        self.child_entry(id).map(RealizedContainer::container)
    }

    /// The child container bound to `item_index`, if any.
    pub fn container_for_item(
        &self,
        item_index: usize,
    ) -> Option<&RealizedContainer<G::Container>> {
        let realized = self.generator.realized();
        realized
            .child_index_of_item(item_index)
            .map(|child| &realized[child])
            .filter(|entry| !entry.is_detached())
    }

    pub(super) fn child_entry(&self, id: ContainerId) -> Option<&RealizedContainer<G::Container>> {
        let realized = self.generator.realized();
        realized
            .child_index_of(id)
            .map(|child| &realized[child])
            .filter(|entry| !entry.is_detached())
    }

    /// Extent, viewport, offset and scroll capabilities.
    pub fn scroll_data(&self) -> &ScrollData {
        &self.scroll
    }

    /// Registers a scroll-owner callback, invoked whenever extent, viewport
    /// or offset change.
    pub fn add_scroll_owner(&mut self, callback: Box<dyn Fn()>) -> CallbackId {
        self.scroll_owner.add(Box::new(move |()| callback()))
    }

    /// Unregisters a scroll-owner callback. Returns whether it was registered.
    pub fn remove_scroll_owner(&mut self, id: CallbackId) -> bool {
        self.scroll_owner.remove(id)
    }

    pub(super) fn notify_scroll_owner(&self) {
        self.scroll_owner.notify(());
    }

    /// Pending layout passes.
    pub fn layout_invalidation(&self) -> &LayoutInvalidation {
        &self.layout
    }

    /// Pending layout passes, for hosts that register invalidation callbacks.
    pub fn layout_invalidation_mut(&mut self) -> &mut LayoutInvalidation {
        &mut self.layout
    }

    /// Whether a measure pass is pending.
    pub fn needs_measure(&self) -> bool {
        self.layout.is_dirty(DirtyPhase::MEASURE)
    }

    /// Whether an arrange pass is pending.
    pub fn needs_arrange(&self) -> bool {
        self.layout.is_dirty(DirtyPhase::ARRANGE)
    }

    /// Installs the hook run before each container is released by a measure
    /// pass. Replaces any previous hook.
    pub fn set_clean_up_handler(&mut self, handler: CleanUpHandler<G::Container>) {
        self.clean_up = Some(handler);
    }

    /// Removes the clean-up hook; releases are no longer cancellable.
    pub fn clear_clean_up_handler(&mut self) {
        self.clean_up = None;
    }

    /// Measures the panel and realizes the containers it needs.
    ///
    /// Starts at the item under the stack offset and realizes forward until
    /// the stack length exceeds `available` by `beyond_limit` items or the
    /// source is exhausted. Children outside that window are released.
    pub fn measure(&mut self, available: Size) -> Size {
        let orientation = self.config.orientation;
        let item_count = self.items.item_count();
        let start = self.scroll.stack_offset(orientation).max(0.0).floor() as usize;
        let available_stack = orientation.stack(available);
        let available_cross = orientation.cross(available);
        let beyond_limit = self.config.effective_beyond_limit();

        let mut stack_total = 0.0f32;
        let mut cross_max = 0.0f32;
        let mut visible = 0usize;
        let mut beyond = 0usize;

        if item_count > 0 {
            if available_stack.is_infinite() && !self.warned_unbounded {
                log::warn!(
                    "VirtualizingStackPanel: unbounded stack-axis constraint, all {} items \
                     will be realized. Place the panel in a constrained container.",
                    item_count
                );
                self.warned_unbounded = true;
            }

            let child_available = self.config.sizing.child_constraint(orientation);
            let start_position = self.generator.generator_position_from_index(start);
            let mut insert_at = start_position.insertion_index();

            for index in start..item_count {
                if beyond >= beyond_limit {
                    break;
                }
                let Some(item) = self.items.item(index) else {
                    break;
                };

                let realization = self.generator.realize(index, item);
                debug_assert_eq!(realization.child_index, insert_at);
                if realization.newly_realized {
                    log::trace!("realized item {} as container {}", index, realization.id);
                }

                let child = &mut self.generator.realized_mut()[realization.child_index];
                child.container_mut().measure(child_available);
                let size = child.container().desired_size();

                visible += 1;
                cross_max = cross_max.max(orientation.cross(size));
                stack_total += orientation.stack(size);
                if stack_total > available_stack {
                    beyond += 1;
                }
                insert_at = realization.child_index + 1;
            }
        }

        self.remove_unused_containers(start, visible);

        let viewport_items = visible - beyond;
        let extent = orientation.size(item_count as f32, cross_max);
        let viewport = orientation.size(viewport_items as f32, available_cross);
        let changed = self.scroll.extent != extent || self.scroll.viewport != viewport;
        self.scroll.extent = extent;
        self.scroll.viewport = viewport;

        log::trace!(
            "measure: start={} realized={} visible={} beyond={} children={}",
            start,
            visible,
            viewport_items,
            beyond,
            self.generator.child_count()
        );

        self.layout.mark_clean(DirtyPhase::MEASURE);
        if changed {
            self.notify_scroll_owner();
        }

        let desired_stack = if available_stack.is_finite() {
            available_stack
        } else {
            stack_total
        };
        orientation.size(desired_stack, cross_max.min(available_cross))
    }

    /// Releases every child whose item lies outside `first..first + count`.
    ///
    /// A child whose release the clean-up hook cancels is detached instead:
    /// it stays realized in the generator but is no longer a child.
    fn remove_unused_containers(&mut self, first: usize, count: usize) {
        let end = first + count;
        for child in (0..self.generator.realized().len()).rev() {
            let position = GeneratorPosition::child(child);
            let Some(item_index) = self.generator.index_from_generator_position(position) else {
                continue;
            };
            if item_index >= first && item_index < end {
                continue;
            }

            let entry = &self.generator.realized()[child];
            if entry.is_detached() {
                continue;
            }
            let mut args = CleanUpVirtualizedItem {
                id: entry.id(),
                item_index,
                container: entry.container(),
                cancel: false,
            };
            if let Some(handler) = self.clean_up.as_mut() {
                handler(&mut args);
            }
            if args.cancel {
                log::debug!(
                    "clean-up of container {} (item {}) cancelled; detaching it",
                    args.id,
                    item_index
                );
                self.generator.realized_mut().detach(child);
                continue;
            }
            self.generator.release(child);
        }
    }

    /// Places realized children end to end along the stack axis, shifted by
    /// the cross-axis scroll offset.
    pub fn arrange(&mut self, final_size: Size) -> Size {
        let orientation = self.config.orientation;
        let cross_scroll = self.scroll.cross_offset(orientation);
        let mut stack = 0.0f32;
        let mut cross = orientation.cross(final_size);

        for child in self
            .generator
            .realized_mut()
            .iter_mut()
            .filter(|child| !child.is_detached())
        {
            let size = child.container().desired_size();
            let rect = match orientation {
                Orientation::Vertical => Rect::new(-cross_scroll, stack, size.width, size.height),
                Orientation::Horizontal => Rect::new(stack, -cross_scroll, size.width, size.height),
            };
            child
                .container_mut()
                .arrange(if rect.is_empty() { Rect::ZERO } else { rect });

            cross = cross.max(orientation.cross(size));
            stack += orientation.stack(size);
        }

        self.layout.mark_clean(DirtyPhase::ARRANGE);
        orientation.size(stack.max(orientation.stack(final_size)), cross)
    }
}
