use core::ops::Not;

/// State of a single pixel.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Color {
    #[default]
    Off,
    On,
}

impl Not for Color {
    type Output = Color;

    fn not(self) -> Color {
        match self {
            Color::Off => Color::On,
            Color::On => Color::Off,
        }
    }
}

impl From<bool> for Color {
    fn from(value: bool) -> Self {
        if value { Color::On } else { Color::Off }
    }
}

impl Color {
    /// Byte written by a whole-buffer fill.
    pub const fn fill_byte(self) -> u8 {
        match self {
            Color::Off => 0x00,
            Color::On => 0xFF,
        }
    }
}
