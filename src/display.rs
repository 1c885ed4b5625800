use crate::pixel::Color;

/// A display that can paint one pixel at an absolute position.
pub trait DrawTarget {
    fn draw_pixel_at(&mut self, x: i32, y: i32, color: Color);
}

impl<T: DrawTarget + ?Sized> DrawTarget for &mut T {
    fn draw_pixel_at(&mut self, x: i32, y: i32, color: Color) {
        (**self).draw_pixel_at(x, y, color);
    }
}
