//! Graphics engine for a 128 column SSD1306-class monochrome OLED.
//!
//! Drawing happens in a bit-packed [`Framebuffer`] (one byte holds eight
//! vertically stacked pixels) and [`Display::update`] pushes the whole buffer
//! to the controller page by page through a [`DisplayInterface`].

#![cfg_attr(not(test), no_std)]

mod bitmap;
mod color;
pub mod command;
mod config;
pub mod demo;
mod display;
mod error;
pub mod font;
mod framebuffer;
mod interface;
mod raster;
mod text;

pub use color::Color;
pub use config::Config;
pub use display::{Display, Display128x128, Display128x32, Display128x64, State};
pub use error::{BufferError, Error, GlyphError};
pub use font::{Font, FONT_8X8, FONT_8X8_PROPORTIONAL};
pub use framebuffer::Framebuffer;
pub use interface::{DisplayInterface, I2cInterface, DEFAULT_I2C_ADDRESS};
pub use raster::Vertex;
pub use text::Cursor;
