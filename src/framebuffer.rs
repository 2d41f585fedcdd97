use crate::color::Color;
use crate::error::BufferError;

/// Bit-packed monochrome framebuffer in the controller's page layout.
///
/// Each page row holds `WIDTH` bytes and covers eight pixel rows; bit `k` of
/// byte `x` in page `p` is pixel `(x, p * 8 + k)`.
#[derive(Clone, PartialEq, Eq)]
pub struct Framebuffer<const WIDTH: usize, const PAGES: usize> {
    pages: [[u8; WIDTH]; PAGES],
}

impl<const WIDTH: usize, const PAGES: usize> Framebuffer<WIDTH, PAGES> {
    pub const HEIGHT: usize = PAGES * 8;
    pub const SIZE: usize = WIDTH * PAGES;

    pub const fn new() -> Self {
        Self {
            pages: [[0u8; WIDTH]; PAGES],
        }
    }

    pub fn fill(&mut self, color: Color) {
        let byte = color.fill_byte();
        for page in self.pages.iter_mut() {
            page.fill(byte);
        }
    }

    /// Sets or clears one pixel. Coordinates outside the buffer are ignored.
    ///
    /// Takes `i32` so the primitives can pass their widened arithmetic through.
    pub fn set_pixel(&mut self, x: i32, y: i32, color: Color) {
        let Some((x, y)) = Self::index(x, y) else {
            return;
        };
        let bit = 1u8 << (y % 8);
        let byte = &mut self.pages[y / 8][x];
        match color {
            Color::On => *byte |= bit,
            Color::Off => *byte &= !bit,
        }
    }

    /// Replaces the first `bytes.len()` bytes of the buffer, leaving the rest as is.
    pub fn load(&mut self, bytes: &[u8]) -> Result<(), BufferError> {
        if bytes.len() > Self::SIZE {
            log::warn!("framebuffer load of {} bytes rejected", bytes.len());
            return Err(BufferError::Size {
                len: bytes.len(),
                capacity: Self::SIZE,
            });
        }
        for (page, chunk) in self.pages.iter_mut().zip(bytes.chunks(WIDTH)) {
            page[..chunk.len()].copy_from_slice(chunk);
        }
        Ok(())
    }

    /// Bytes of one page row, as sent to the controller.
    ///
    /// # Panics
    ///
    /// Panics if `page >= PAGES`.
    pub fn page(&self, page: usize) -> &[u8; WIDTH] {
        &self.pages[page]
    }

    pub fn pages(&self) -> &[[u8; WIDTH]] {
        &self.pages
    }

    /// XORs `mask` into the byte at column `x` of `page`.
    pub(crate) fn xor_byte(&mut self, x: usize, page: usize, mask: u8) {
        if let Some(byte) = self.pages.get_mut(page).and_then(|p| p.get_mut(x)) {
            *byte ^= mask;
        }
    }

    pub(crate) fn contains(x: i32, y: i32) -> bool {
        Self::index(x, y).is_some()
    }

    fn index(x: i32, y: i32) -> Option<(usize, usize)> {
        let x = usize::try_from(x).ok()?;
        let y = usize::try_from(y).ok()?;
        (x < WIDTH && y < Self::HEIGHT).then_some((x, y))
    }

    #[cfg(test)]
    pub(crate) fn is_on(&self, x: i32, y: i32) -> bool {
        Self::index(x, y).is_some_and(|(x, y)| self.pages[y / 8][x] & (1 << (y % 8)) != 0)
    }

    #[cfg(test)]
    pub(crate) fn lit_pixels(&self) -> std::vec::Vec<(i32, i32)> {
        let mut lit = std::vec::Vec::new();
        for y in 0..Self::HEIGHT as i32 {
            for x in 0..WIDTH as i32 {
                if self.is_on(x, y) {
                    lit.push((x, y));
                }
            }
        }
        lit
    }
}

impl<const WIDTH: usize, const PAGES: usize> Default for Framebuffer<WIDTH, PAGES> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const WIDTH: usize, const PAGES: usize> core::fmt::Debug for Framebuffer<WIDTH, PAGES> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Framebuffer")
            .field("width", &WIDTH)
            .field("height", &Self::HEIGHT)
            .finish_non_exhaustive()
    }
}
