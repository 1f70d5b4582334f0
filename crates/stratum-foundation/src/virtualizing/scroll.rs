//! Scroll state of a virtualizing panel.
//!
//! Along the stack axis extent and viewport are item counts and offsets are
//! item indices; along the cross axis all three are layout units.

use stratum_ui_graphics::{Point, Size};
use stratum_ui_layout::Orientation;

/// Extent, viewport and offset of a scrollable panel.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ScrollData {
    pub extent: Size,
    pub viewport: Size,
    pub offset: Point,
    pub can_horizontally_scroll: bool,
    pub can_vertically_scroll: bool,
}

impl ScrollData {
    /// Largest valid horizontal offset.
    pub fn max_horizontal_offset(&self) -> f32 {
        (self.extent.width - self.viewport.width).max(0.0)
    }

    /// Largest valid vertical offset.
    pub fn max_vertical_offset(&self) -> f32 {
        (self.extent.height - self.viewport.height).max(0.0)
    }

    /// Zeroes extent, viewport and offset. Scroll capability flags are kept.
    pub fn reset(&mut self) {
        self.extent = Size::ZERO;
        self.viewport = Size::ZERO;
        self.offset = Point::ZERO;
    }

    pub(crate) fn stack_offset(&self, orientation: Orientation) -> f32 {
        orientation.stack_offset(self.offset)
    }

    pub(crate) fn cross_offset(&self, orientation: Orientation) -> f32 {
        orientation.cross_offset(self.offset)
    }

    /// Writes the stack-axis offset without clamping or notification.
    pub(crate) fn set_stack_offset(&mut self, orientation: Orientation, offset: f32) {
        match orientation {
            Orientation::Vertical => self.offset.y = offset,
            Orientation::Horizontal => self.offset.x = offset,
        }
    }

    /// Writes the stack-axis extent without notification.
    pub(crate) fn set_stack_extent(&mut self, orientation: Orientation, extent: f32) {
        match orientation {
            Orientation::Vertical => self.extent.height = extent,
            Orientation::Horizontal => self.extent.width = extent,
        }
    }
}

/// Clamps `offset` into `[0, extent - viewport]`.
///
/// Negative and NaN offsets become 0, as does any offset when the viewport
/// already covers the extent.
pub fn clamp_offset(offset: f32, viewport: f32, extent: f32) -> f32 {
    if offset.is_nan() || offset < 0.0 || viewport >= extent {
        0.0
    } else if offset + viewport >= extent {
        extent - viewport
    } else {
        offset
    }
}
