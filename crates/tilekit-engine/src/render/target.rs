use crate::coords::{PixelRect, Vector2};
use crate::paint::Color;

/// Drawing surface consumed by the tile grid.
pub trait DrawTarget {
    /// Surface size in pixels (width, height).
    fn surface_size(&self) -> Vector2<u32>;

    /// Paints `rect` with `color`. Parts outside the surface are ignored.
    fn draw_filled_rect(&mut self, color: Color, rect: PixelRect);
}

impl<T: DrawTarget + ?Sized> DrawTarget for &mut T {
    #[inline]
    fn surface_size(&self) -> Vector2<u32> {
        (**self).surface_size()
    }

    #[inline]
    fn draw_filled_rect(&mut self, color: Color, rect: PixelRect) {
        (**self).draw_filled_rect(color, rect)
    }
}
