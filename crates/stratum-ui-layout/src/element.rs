use stratum_ui_graphics::{Rect, Size};

/// Measure/arrange contract implemented by every container a panel hosts.
///
/// Layout is two-pass: `measure` lets the element compute its desired size
/// for an available size (possibly infinite); `arrange` assigns its final
/// rectangle in the parent's coordinate space.
pub trait LayoutElement {
    /// Computes the desired size for the given available space.
    fn measure(&mut self, available: Size);

    /// Desired size from the last `measure` call.
    fn desired_size(&self) -> Size;

    /// Places the element at `final_rect`.
    fn arrange(&mut self, final_rect: Rect);

    /// Size the element was last arranged at.
    fn render_size(&self) -> Size;
}

impl<E: LayoutElement + ?Sized> LayoutElement for Box<E> {
    fn measure(&mut self, available: Size) {
        (**self).measure(available)
    }

    fn desired_size(&self) -> Size {
        (**self).desired_size()
    }

    fn arrange(&mut self, final_rect: Rect) {
        (**self).arrange(final_rect)
    }

    fn render_size(&self) -> Size {
        (**self).render_size()
    }
}
