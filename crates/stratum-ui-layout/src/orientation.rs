use stratum_ui_graphics::{Point, Size};

/// Stacking direction of a panel.
///
/// The *stack axis* is the direction items are laid end to end; the *cross
/// axis* is perpendicular to it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Orientation {
    #[default]
    Vertical,
    Horizontal,
}

impl Orientation {
    pub fn is_vertical(self) -> bool {
        matches!(self, Orientation::Vertical)
    }

    /// Length of `size` along the stack axis.
    pub fn stack(self, size: Size) -> f32 {
        match self {
            Orientation::Vertical => size.height,
            Orientation::Horizontal => size.width,
        }
    }

    /// Length of `size` along the cross axis.
    pub fn cross(self, size: Size) -> f32 {
        match self {
            Orientation::Vertical => size.width,
            Orientation::Horizontal => size.height,
        }
    }

    /// Builds a size from stack and cross lengths.
    pub fn size(self, stack: f32, cross: f32) -> Size {
        match self {
            Orientation::Vertical => Size::new(cross, stack),
            Orientation::Horizontal => Size::new(stack, cross),
        }
    }

    /// Component of `point` along the stack axis.
    pub fn stack_offset(self, point: Point) -> f32 {
        match self {
            Orientation::Vertical => point.y,
            Orientation::Horizontal => point.x,
        }
    }

    /// Component of `point` along the cross axis.
    pub fn cross_offset(self, point: Point) -> f32 {
        match self {
            Orientation::Vertical => point.x,
            Orientation::Horizontal => point.y,
        }
    }
}
