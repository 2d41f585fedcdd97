//! Fixed-height bitmap fonts covering printable ASCII.
//!
//! Glyph rows are stored as `u16` with the leftmost pixel in the most
//! significant bit, so glyphs up to 16 pixels wide share one table format.

use font8x8::legacy::BASIC_LEGACY;

/// First character with a glyph (space).
pub const FIRST_CHAR: char = ' ';
/// Last character with a glyph (tilde).
pub const LAST_CHAR: char = '~';

const GLYPH_COUNT: usize = LAST_CHAR as usize - FIRST_CHAR as usize + 1;

/// Immutable font descriptor.
#[derive(Clone, Copy, Debug)]
pub struct Font {
    /// Width of the glyph box in pixels, at most 16.
    pub width: u8,
    pub height: u8,
    /// Per-character advance, indexed by `ch - ' '`. `None` means monospace.
    pub char_width: Option<&'static [u8]>,
    /// `height` rows per glyph, glyphs in character order starting at `' '`.
    pub data: &'static [u16],
}

impl Font {
    /// Row `row` of the glyph for `ch`, or `None` when the font has no such glyph.
    pub fn glyph_row(&self, ch: char, row: u8) -> Option<u16> {
        let index = Self::glyph_index(ch)?;
        if row >= self.height {
            return None;
        }
        self.data
            .get(index * usize::from(self.height) + usize::from(row))
            .copied()
    }

    /// How far the cursor moves after drawing `ch`.
    pub fn advance(&self, ch: char) -> u8 {
        match (self.char_width, Self::glyph_index(ch)) {
            (Some(widths), Some(index)) => widths.get(index).copied().unwrap_or(self.width),
            _ => self.width,
        }
    }

    pub fn supports(ch: char) -> bool {
        (FIRST_CHAR..=LAST_CHAR).contains(&ch)
    }

    fn glyph_index(ch: char) -> Option<usize> {
        Self::supports(ch).then(|| ch as usize - FIRST_CHAR as usize)
    }
}

// font8x8 stores rows with the leftmost pixel in bit 0.
const fn basic_glyph_rows() -> [u16; GLYPH_COUNT * 8] {
    let mut data = [0u16; GLYPH_COUNT * 8];
    let mut glyph = 0;
    while glyph < GLYPH_COUNT {
        let rows = BASIC_LEGACY[glyph + FIRST_CHAR as usize];
        let mut row = 0;
        while row < 8 {
            data[glyph * 8 + row] = (rows[row].reverse_bits() as u16) << 8;
            row += 1;
        }
        glyph += 1;
    }
    data
}

/// Ink width plus one column of spacing; blank glyphs advance half a box.
const fn basic_glyph_advances() -> [u8; GLYPH_COUNT] {
    let mut widths = [0u8; GLYPH_COUNT];
    let mut glyph = 0;
    while glyph < GLYPH_COUNT {
        let rows = BASIC_LEGACY[glyph + FIRST_CHAR as usize];
        let mut ink = 0u8;
        let mut row = 0;
        while row < 8 {
            ink |= rows[row];
            row += 1;
        }
        widths[glyph] = if ink == 0 {
            4
        } else {
            let columns = 8 - ink.leading_zeros() as u8;
            if columns < 8 { columns + 1 } else { 8 }
        };
        glyph += 1;
    }
    widths
}

const BASIC_ROWS: [u16; GLYPH_COUNT * 8] = basic_glyph_rows();
const BASIC_ADVANCES: [u8; GLYPH_COUNT] = basic_glyph_advances();

/// 8x8 monospace font.
pub const FONT_8X8: Font = Font {
    width: 8,
    height: 8,
    char_width: None,
    data: &BASIC_ROWS,
};

/// The 8x8 glyphs with per-character advances, for denser text.
pub const FONT_8X8_PROPORTIONAL: Font = Font {
    width: 8,
    height: 8,
    char_width: Some(&BASIC_ADVANCES),
    data: &BASIC_ROWS,
};
