//! Offset setters, line/page/wheel steps and `make_visible`.

use stratum_core::ContainerId;
use stratum_ui_graphics::Rect;
use stratum_ui_layout::{LayoutElement, Orientation};

use super::{clamp_offset, PanelError, VirtualizingStackPanel};
use crate::generator::ContainerGenerator;
use crate::items::ItemSource;

impl<S, G> VirtualizingStackPanel<S, G>
where
    S: ItemSource,
    G: ContainerGenerator<S::Item>,
{
    /// Total horizontal extent: item count or widest child, by orientation.
    pub fn extent_width(&self) -> f32 {
        self.scroll.extent.width
    }

    /// Total vertical extent: item count or tallest child, by orientation.
    pub fn extent_height(&self) -> f32 {
        self.scroll.extent.height
    }

    /// Horizontal viewport size from the last measure.
    pub fn viewport_width(&self) -> f32 {
        self.scroll.viewport.width
    }

    /// Vertical viewport size from the last measure.
    pub fn viewport_height(&self) -> f32 {
        self.scroll.viewport.height
    }

    /// Current horizontal scroll offset.
    pub fn horizontal_offset(&self) -> f32 {
        self.scroll.offset.x
    }

    /// Current vertical scroll offset.
    pub fn vertical_offset(&self) -> f32 {
        self.scroll.offset.y
    }

    /// Whether the scroll owner allows horizontal scrolling.
    pub fn can_horizontally_scroll(&self) -> bool {
        self.scroll.can_horizontally_scroll
    }

    /// Stored for the scroll owner; layout does not read it.
    pub fn set_can_horizontally_scroll(&mut self, value: bool) {
        self.scroll.can_horizontally_scroll = value;
    }

    /// Whether the scroll owner allows vertical scrolling.
    pub fn can_vertically_scroll(&self) -> bool {
        self.scroll.can_vertically_scroll
    }

    /// Stored for the scroll owner; layout does not read it.
    pub fn set_can_vertically_scroll(&mut self, value: bool) {
        self.scroll.can_vertically_scroll = value;
    }

    /// Sets the horizontal offset, clamped into the scrollable range.
    ///
    /// Does nothing when the clamped value equals the current offset.
    pub fn set_horizontal_offset(&mut self, offset: f32) {
        let offset = clamp_offset(offset, self.scroll.viewport.width, self.scroll.extent.width);
        if self.scroll.offset.x == offset {
            return;
        }
        self.scroll.offset.x = offset;
        self.offset_changed(Orientation::Horizontal);
    }

    /// Sets the vertical offset, clamped into the scrollable range.
    ///
    /// Does nothing when the clamped value equals the current offset.
    pub fn set_vertical_offset(&mut self, offset: f32) {
        let offset = clamp_offset(offset, self.scroll.viewport.height, self.scroll.extent.height);
        if self.scroll.offset.y == offset {
            return;
        }
        self.scroll.offset.y = offset;
        self.offset_changed(Orientation::Vertical);
    }

    /// `axis` is the direction of the offset that moved.
    fn offset_changed(&mut self, axis: Orientation) {
        if axis == self.config.orientation {
            // New items may come into view.
            self.layout.invalidate_measure();
        } else {
            self.layout.invalidate_arrange();
        }
        self.notify_scroll_owner();
    }

    /// One line step along `axis`: one item on the stack axis, `line_delta`
    /// on the cross axis.
    fn line_step(&self, axis: Orientation) -> f32 {
        if axis == self.config.orientation {
            1.0
        } else {
            self.config.line_delta
        }
    }

    fn wheel_step(&self, axis: Orientation) -> f32 {
        self.line_step(axis) * self.config.wheel_multiplier
    }

    /// Scrolls up by one line.
    pub fn line_up(&mut self) {
        let step = self.line_step(Orientation::Vertical);
        self.set_vertical_offset(self.vertical_offset() - step);
    }

    /// Scrolls down by one line.
    pub fn line_down(&mut self) {
        let step = self.line_step(Orientation::Vertical);
        self.set_vertical_offset(self.vertical_offset() + step);
    }

    /// Scrolls left by one line.
    pub fn line_left(&mut self) {
        let step = self.line_step(Orientation::Horizontal);
        self.set_horizontal_offset(self.horizontal_offset() - step);
    }

    /// Scrolls right by one line.
    pub fn line_right(&mut self) {
        let step = self.line_step(Orientation::Horizontal);
        self.set_horizontal_offset(self.horizontal_offset() + step);
    }

    /// Scrolls up by one wheel notch (`wheel_multiplier` lines).
    pub fn mouse_wheel_up(&mut self) {
        let step = self.wheel_step(Orientation::Vertical);
        self.set_vertical_offset(self.vertical_offset() - step);
    }

    pub fn mouse_wheel_down(&mut self) {
        let step = self.wheel_step(Orientation::Vertical);
        self.set_vertical_offset(self.vertical_offset() + step);
    }

    pub fn mouse_wheel_left(&mut self) {
        let step = self.wheel_step(Orientation::Horizontal);
        self.set_horizontal_offset(self.horizontal_offset() - step);
    }

    pub fn mouse_wheel_right(&mut self) {
        let step = self.wheel_step(Orientation::Horizontal);
        self.set_horizontal_offset(self.horizontal_offset() + step);
    }

    /// Scrolls up by one viewport height.
    pub fn page_up(&mut self) {
        self.set_vertical_offset(self.vertical_offset() - self.viewport_height());
    }

    /// Scrolls down by one viewport height.
    pub fn page_down(&mut self) {
        self.set_vertical_offset(self.vertical_offset() + self.viewport_height());
    }

    /// Scrolls left by one viewport width.
    pub fn page_left(&mut self) {
        self.set_horizontal_offset(self.horizontal_offset() - self.viewport_width());
    }

    /// Scrolls right by one viewport width.
    pub fn page_right(&mut self) {
        self.set_horizontal_offset(self.horizontal_offset() + self.viewport_width());
    }

    /// Scrolls so `rect` of the child `target` is visible and returns the
    /// exposed area in panel coordinates.
    ///
    /// The cross-axis offset is moved to `rect`'s cross position. Along the
    /// stack axis the offset moves only as far as needed to bring the
    /// target's item into the viewport. The returned rect is relative to the
    /// first item in view after that move, which is where the next arrange
    /// places it.
    pub fn make_visible(&mut self, target: ContainerId, rect: Rect) -> Result<Rect, PanelError> {
        let orientation = self.config.orientation;
        let entry = self
            .child_entry(target)
            .ok_or(PanelError::NotAChild { container: target })?;
        let item_index = entry.item_index();
        let render = entry.container().render_size();

        match orientation {
            Orientation::Vertical if rect.x != self.horizontal_offset() => {
                self.set_horizontal_offset(rect.x);
            }
            Orientation::Horizontal if rect.y != self.vertical_offset() => {
                self.set_vertical_offset(rect.y);
            }
            _ => {}
        }

        let offset = self.scroll.stack_offset(orientation);
        let viewport = orientation.stack(self.scroll.viewport);
        let item = item_index as f32;
        if item < offset {
            self.set_stack_axis_offset(item);
        } else if viewport >= 1.0 && item >= offset + viewport {
            self.set_stack_axis_offset(item - viewport + 1.0);
        }

        let first_in_view = self.scroll.stack_offset(orientation).floor() as usize;
        let stack: f32 = self
            .children()
            .filter(|child| (first_in_view..item_index).contains(&child.item_index()))
            .map(|child| orientation.stack(child.container().render_size()))
            .sum();

        let exposed = match orientation {
            Orientation::Vertical => Rect::new(
                self.horizontal_offset(),
                stack,
                render.width.min(self.viewport_width()),
                render.height,
            ),
            Orientation::Horizontal => Rect::new(
                stack,
                self.vertical_offset(),
                render.width,
                render.height.min(self.viewport_height()),
            ),
        };
        Ok(exposed)
    }

    fn set_stack_axis_offset(&mut self, offset: f32) {
        match self.config.orientation {
            Orientation::Vertical => self.set_vertical_offset(offset),
            Orientation::Horizontal => self.set_horizontal_offset(offset),
        }
    }
}
