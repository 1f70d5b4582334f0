//! Collection change reconciliation.

use super::{clamp_offset, VirtualizingStackPanel};
use crate::generator::ContainerGenerator;
use crate::items::{ItemSource, ItemsChanged};

impl<S, G> VirtualizingStackPanel<S, G>
where
    S: ItemSource,
    G: ContainerGenerator<S::Item>,
{
    /// Applies a change the item source has already undergone.
    ///
    /// Offsets are corrected so the same items stay in view, realized
    /// containers are shifted or released, and a new measure is requested.
    pub fn on_items_changed(&mut self, change: ItemsChanged) {
        let orientation = self.config.orientation;
        let item_count = self.items.item_count();
        log::debug!("items changed: {:?} (now {} items)", change, item_count);

        match change {
            ItemsChanged::Add { index, count } => {
                let mut offset = self.scroll.stack_offset(orientation).floor();
                if index as f32 <= offset {
                    offset += count as f32;
                }
                self.scroll.set_stack_extent(orientation, item_count as f32);
                let viewport = orientation.stack(self.scroll.viewport);
                let offset = clamp_offset(offset, viewport, item_count as f32);
                self.scroll.set_stack_offset(orientation, offset);
                self.generator.items_inserted(index, count);
            }
            ItemsChanged::Remove { index, count } => {
                let mut offset = self.scroll.stack_offset(orientation).floor();
                let viewable = orientation.stack(self.scroll.viewport).floor();
                if (index as f32) < offset {
                    offset = (offset - count as f32).max(0.0);
                }
                offset = offset.min(item_count as f32 - viewable).max(0.0);
                self.scroll.set_stack_extent(orientation, item_count as f32);
                self.scroll.set_stack_offset(orientation, offset);

                let released = self.generator.items_removed(index, count);
                if released > 0 {
                    log::trace!("released {} container(s) for removed items", released);
                }
            }
            ItemsChanged::Replace { index, count } => {
                let released = self.generator.items_replaced(index, count);
                if released > 0 {
                    log::trace!("released {} container(s) for replaced items", released);
                }
            }
            ItemsChanged::Reset => {
                self.clear_children();
                self.scroll.reset();
                self.layout.invalidate_measure();
                self.notify_scroll_owner();
                return;
            }
        }

        self.layout.invalidate_measure();
        self.notify_scroll_owner();
    }

    /// Releases every realized container. The clean-up hook is not consulted.
    fn clear_children(&mut self) {
        let count = self.generator.child_count();
        self.generator.release_all();
        if count > 0 {
            log::trace!("released all {} container(s)", count);
        }
    }
}
