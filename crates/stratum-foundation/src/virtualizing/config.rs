use stratum_ui_layout::{Orientation, PanelSizing};

/// Cross-axis distance of one line step, in layout units.
pub const DEFAULT_LINE_DELTA: f32 = 14.7;

/// Number of line steps in one mouse-wheel notch.
pub const DEFAULT_WHEEL_MULTIPLIER: f32 = 3.0;

/// Items counted past the viewport edge before a measure pass stops.
pub const DEFAULT_BEYOND_LIMIT: usize = 2;

/// Configuration for a [`VirtualizingStackPanel`](super::VirtualizingStackPanel).
#[derive(Clone, Debug, PartialEq)]
pub struct StackPanelConfig {
    /// Stacking direction.
    pub orientation: Orientation,

    /// Explicit size and limits applied to children on the cross axis.
    pub sizing: PanelSizing,

    /// Cross-axis line step in layout units.
    pub line_delta: f32,

    /// Wheel notch size, in line steps.
    pub wheel_multiplier: f32,

    /// Measure stops once this many items have been counted past the
    /// viewport edge. The first such item is the partially visible one,
    /// the rest are lookahead. Values below 1 are treated as 1.
    pub beyond_limit: usize,
}

impl Default for StackPanelConfig {
    fn default() -> Self {
        Self {
            orientation: Orientation::Vertical,
            sizing: PanelSizing::default(),
            line_delta: DEFAULT_LINE_DELTA,
            wheel_multiplier: DEFAULT_WHEEL_MULTIPLIER,
            beyond_limit: DEFAULT_BEYOND_LIMIT,
        }
    }
}

impl StackPanelConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn vertical() -> Self {
        Self::default()
    }

    pub fn horizontal() -> Self {
        Self::default().orientation(Orientation::Horizontal)
    }

    pub fn orientation(mut self, orientation: Orientation) -> Self {
        self.orientation = orientation;
        self
    }

    pub fn sizing(mut self, sizing: PanelSizing) -> Self {
        self.sizing = sizing;
        self
    }

    pub fn line_delta(mut self, line_delta: f32) -> Self {
        self.line_delta = line_delta;
        self
    }

    pub fn wheel_multiplier(mut self, wheel_multiplier: f32) -> Self {
        self.wheel_multiplier = wheel_multiplier;
        self
    }

    pub fn beyond_limit(mut self, beyond_limit: usize) -> Self {
        self.beyond_limit = beyond_limit;
        self
    }

    pub(crate) fn effective_beyond_limit(&self) -> usize {
        self.beyond_limit.max(1)
    }
}
