use crate::color::Color;
use crate::framebuffer::Framebuffer;

impl<const WIDTH: usize, const PAGES: usize> Framebuffer<WIDTH, PAGES> {
    /// Blits a packed 1-bit bitmap with its top-left corner at `(x, y)`.
    ///
    /// `bitmap` holds `h` rows of `ceil(w / 8)` bytes, leftmost pixel in the
    /// most significant bit. Set bits are painted `color`; clear bits leave the
    /// framebuffer alone. Nothing is drawn when the anchor is off screen, and
    /// drawing stops early if `bitmap` is shorter than the declared size.
    pub fn draw_bitmap(&mut self, x: i16, y: i16, bitmap: &[u8], w: u16, h: u16, color: Color) {
        let (x, y) = (i32::from(x), i32::from(y));
        if !Self::contains(x, y) {
            return;
        }
        let stride = usize::from(w).div_ceil(8);
        for (j, row) in bitmap.chunks(stride.max(1)).take(usize::from(h)).enumerate() {
            for i in 0..usize::from(w) {
                let Some(&byte) = row.get(i / 8) else {
                    return;
                };
                if byte & (0x80 >> (i % 8)) != 0 {
                    self.set_pixel(x + i as i32, y + j as i32, color);
                }
            }
        }
    }
}
