use stratum_ui_graphics::Size;

use crate::Orientation;

/// Explicit size and min/max limits of a panel.
///
/// `None` for `width`/`height` means the panel has no explicit length on that
/// axis.
#[derive(Clone, Debug, PartialEq)]
pub struct PanelSizing {
    pub width: Option<f32>,
    pub height: Option<f32>,
    pub min_width: f32,
    pub max_width: f32,
    pub min_height: f32,
    pub max_height: f32,
}

impl Default for PanelSizing {
    fn default() -> Self {
        Self {
            width: None,
            height: None,
            min_width: 0.0,
            max_width: f32::INFINITY,
            min_height: 0.0,
            max_height: f32::INFINITY,
        }
    }
}

impl PanelSizing {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn width(mut self, width: f32) -> Self {
        self.width = Some(width);
        self
    }

    pub fn height(mut self, height: f32) -> Self {
        self.height = Some(height);
        self
    }

    pub fn width_range(mut self, min: f32, max: f32) -> Self {
        self.min_width = min;
        self.max_width = max;
        self
    }

    pub fn height_range(mut self, min: f32, max: f32) -> Self {
        self.min_height = min;
        self.max_height = max;
        self
    }

    /// The constraint each child is measured against.
    ///
    /// Unbounded along the stack axis. Along the cross axis: the explicit
    /// length if any, clamped by max then raised to min.
    pub fn child_constraint(&self, orientation: Orientation) -> Size {
        let mut available = Size::INFINITE;
        match orientation {
            Orientation::Vertical => {
                let width = self.width.unwrap_or(f32::INFINITY);
                available.width = width.min(self.max_width).max(self.min_width);
            }
            Orientation::Horizontal => {
                let height = self.height.unwrap_or(f32::INFINITY);
                available.height = height.min(self.max_height).max(self.min_height);
            }
        }
        available
    }
}
