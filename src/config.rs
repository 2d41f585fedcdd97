/// Panel options applied by [`Display::init`](crate::Display::init).
///
/// ```
/// use rp2040_oled::Config;
///
/// let config = Config::new().mirror_vertical(true).contrast(0x7F);
/// assert_eq!(config.contrast, 0x7F);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Config {
    /// Scan COM outputs bottom to top, flipping the image vertically.
    pub mirror_vertical: bool,
    /// Map column 0 to segment 0, flipping the image horizontally.
    pub mirror_horizontal: bool,
    /// Light pixels whose RAM bit is clear.
    pub inverse: bool,
    /// First visible RAM column, for panels wired with a column offset.
    pub column_offset: u8,
    /// Contrast sent during init.
    pub contrast: u8,
}

impl Config {
    pub const fn new() -> Self {
        Self {
            mirror_vertical: false,
            mirror_horizontal: false,
            inverse: false,
            column_offset: 0,
            contrast: 0xFF,
        }
    }

    pub const fn mirror_vertical(mut self, mirror: bool) -> Self {
        self.mirror_vertical = mirror;
        self
    }

    pub const fn mirror_horizontal(mut self, mirror: bool) -> Self {
        self.mirror_horizontal = mirror;
        self
    }

    pub const fn inverse(mut self, inverse: bool) -> Self {
        self.inverse = inverse;
        self
    }

    pub const fn column_offset(mut self, offset: u8) -> Self {
        self.column_offset = offset;
        self
    }

    pub const fn contrast(mut self, contrast: u8) -> Self {
        self.contrast = contrast;
        self
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}
