use crate::color::Color;
use crate::error::GlyphError;
use crate::font::Font;
use crate::framebuffer::Framebuffer;

/// Text insertion point, advanced as characters are written.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Cursor {
    pub x: i16,
    pub y: i16,
}

impl Cursor {
    pub const fn new() -> Self {
        Self { x: 0, y: 0 }
    }

    /// Moves the cursor. Validity is only checked when drawing.
    pub fn set(&mut self, x: i16, y: i16) {
        self.x = x;
        self.y = y;
    }

    /// Draws `ch` with its top-left corner at the cursor and advances it.
    ///
    /// Glyphs are opaque: clear glyph bits are painted with `!color`. Nothing
    /// is drawn, and the cursor stays put, if the character has no glyph or
    /// the whole glyph box does not fit in the framebuffer.
    pub fn write_char<const WIDTH: usize, const PAGES: usize>(
        &mut self,
        fb: &mut Framebuffer<WIDTH, PAGES>,
        ch: char,
        font: &Font,
        color: Color,
    ) -> Result<char, GlyphError> {
        if !Font::supports(ch) {
            return Err(GlyphError::Unsupported(ch));
        }
        let (x, y) = (i32::from(self.x), i32::from(self.y));
        if x < 0
            || y < 0
            || x + i32::from(font.width) > WIDTH as i32
            || y + i32::from(font.height) > Framebuffer::<WIDTH, PAGES>::HEIGHT as i32
        {
            return Err(GlyphError::OutOfBounds(ch));
        }

        for row in 0..font.height {
            let bits = font.glyph_row(ch, row).unwrap_or(0);
            for col in 0..font.width {
                let ink = (bits << col) & 0x8000 != 0;
                let pixel = if ink { color } else { !color };
                fb.set_pixel(x + i32::from(col), y + i32::from(row), pixel);
            }
        }
        self.x = self.x.saturating_add(i16::from(font.advance(ch)));
        Ok(ch)
    }

    /// Writes characters until the string ends or one fails.
    ///
    /// The error names the first character that was not written.
    pub fn write_str<const WIDTH: usize, const PAGES: usize>(
        &mut self,
        fb: &mut Framebuffer<WIDTH, PAGES>,
        text: &str,
        font: &Font,
        color: Color,
    ) -> Result<(), GlyphError> {
        for ch in text.chars() {
            self.write_char(fb, ch, font, color)?;
        }
        Ok(())
    }
}
