use core::fmt;

/// Rejected whole-buffer or whole-region operation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BufferError {
    /// `load` got more bytes than the framebuffer holds.
    Size { len: usize, capacity: usize },
    /// Region corners are out of bounds or out of order.
    Range { x1: i16, y1: i16, x2: i16, y2: i16 },
}

impl fmt::Display for BufferError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BufferError::Size { len, capacity } => {
                write!(f, "{len} bytes do not fit in a {capacity} byte framebuffer")
            }
            BufferError::Range { x1, y1, x2, y2 } => {
                write!(f, "invalid region ({x1}, {y1})..=({x2}, {y2})")
            }
        }
    }
}

/// A character the text renderer could not draw.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GlyphError {
    /// Outside printable ASCII, so the font has no glyph for it.
    Unsupported(char),
    /// The glyph box at the cursor would leave the framebuffer.
    OutOfBounds(char),
}

impl GlyphError {
    /// The character that was not written.
    pub fn unwritten(&self) -> char {
        match *self {
            GlyphError::Unsupported(ch) | GlyphError::OutOfBounds(ch) => ch,
        }
    }
}

impl fmt::Display for GlyphError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GlyphError::Unsupported(ch) => write!(f, "no glyph for {ch:?}"),
            GlyphError::OutOfBounds(ch) => write!(f, "no room left for {ch:?}"),
        }
    }
}

/// Error returned by [`Display`](crate::Display) operations.
///
/// `E` is the error type of the underlying [`DisplayInterface`](crate::DisplayInterface)
/// and is passed through untouched.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Error<E> {
    Buffer(BufferError),
    Transport(E),
}

impl<E> From<BufferError> for Error<E> {
    fn from(err: BufferError) -> Self {
        Error::Buffer(err)
    }
}

impl<E: fmt::Debug> fmt::Display for Error<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Buffer(err) => err.fmt(f),
            Error::Transport(err) => write!(f, "display transport failed: {err:?}"),
        }
    }
}
