use embedded_hal::delay::DelayNs;

use crate::color::Color;
use crate::command::*;
use crate::config::Config;
use crate::error::{BufferError, Error, GlyphError};
use crate::font::Font;
use crate::framebuffer::Framebuffer;
use crate::interface::DisplayInterface;
use crate::raster::Vertex;
use crate::text::Cursor;

type DisplayResult<E> = Result<(), Error<E>>;

pub type Display128x128<I> = Display<I, 128, 16>;
pub type Display128x64<I> = Display<I, 128, 8>;
pub type Display128x32<I> = Display<I, 128, 4>;

/// Lifecycle of a [`Display`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum State {
    Uninitialized,
    Initializing,
    Ready,
}

/// A display session: the controller link, the framebuffer and the text cursor.
///
/// Drawing only touches the framebuffer; nothing reaches the panel until
/// [`update`](Self::update). Callers must run [`init`](Self::init) before
/// drawing or updating; the session does not guard against earlier use.
///
/// The controller drives at most 128 columns and panels of 32, 64 or 128
/// lines. Any other geometry is rejected at compile time:
///
/// ```compile_fail
/// use rp2040_oled::{Config, Display, DisplayInterface};
///
/// struct Bus;
///
/// impl DisplayInterface for Bus {
///     type Error = ();
///     fn write_command(&mut self, _: u8) -> Result<(), ()> { Ok(()) }
///     fn write_data(&mut self, _: &[u8]) -> Result<(), ()> { Ok(()) }
/// }
///
/// let _ = Display::<Bus, 128, 6>::new(Bus, Config::default());
/// ```
pub struct Display<I, const WIDTH: usize, const PAGES: usize> {
    interface: I,
    config: Config,
    framebuffer: Framebuffer<WIDTH, PAGES>,
    cursor: Cursor,
    state: State,
    display_on: bool,
    contrast: u8,
}

impl<I, const WIDTH: usize, const PAGES: usize> Display<I, WIDTH, PAGES>
where
    I: DisplayInterface,
{
    pub const HEIGHT: usize = PAGES * 8;

    const GEOMETRY: () = assert!(
        matches!(PAGES, 4 | 8 | 16) && WIDTH > 0 && WIDTH <= 128,
        "unsupported panel geometry"
    );

    pub fn new(interface: I, config: Config) -> Self {
        let () = Self::GEOMETRY;
        Self {
            interface,
            contrast: config.contrast,
            config,
            framebuffer: Framebuffer::new(),
            cursor: Cursor::new(),
            state: State::Uninitialized,
            display_on: false,
        }
    }

    /// Configures the controller, clears the panel and resets the cursor.
    pub fn init<D: DelayNs>(&mut self, delay: &mut D) -> DisplayResult<I::Error> {
        log::debug!("initializing {}x{} display", WIDTH, Self::HEIGHT);
        self.state = State::Initializing;
        delay.delay_ms(100);

        self.set_display_on(false)?;

        self.command(SET_MEMORY_ADDRESSING_MODE)?;
        self.command(HORIZONTAL_ADDRESSING)?;
        self.command(SET_PAGE_START)?;

        self.command(SET_MULTIPLEX_RATIO)?;
        self.command((Self::HEIGHT - 1) as u8)?;

        self.command(if self.config.mirror_vertical {
            COM_SCAN_INCREMENT
        } else {
            COM_SCAN_DECREMENT
        })?;

        self.command(SET_DISPLAY_OFFSET)?;
        self.command(0x00)?;
        self.command(SET_START_LINE)?;

        self.set_contrast(self.config.contrast)?;

        self.command(if self.config.mirror_horizontal {
            SEGMENT_REMAP_NORMAL
        } else {
            SEGMENT_REMAP_REVERSED
        })?;
        self.command(if self.config.inverse {
            INVERSE_DISPLAY
        } else {
            NORMAL_DISPLAY
        })?;
        self.command(DISPLAY_FOLLOWS_RAM)?;

        self.command(SET_COM_PINS)?;
        self.command(if Self::HEIGHT == 32 {
            COM_PINS_SEQUENTIAL
        } else {
            COM_PINS_ALTERNATIVE
        })?;

        self.command(SET_CLOCK_DIVIDE)?;
        self.command(CLOCK_DIVIDE_DEFAULT)?;
        self.command(SET_PRECHARGE_PERIOD)?;
        self.command(PRECHARGE_DEFAULT)?;
        self.command(SET_VCOMH_DESELECT)?;
        self.command(VCOMH_DEFAULT)?;
        self.command(CHARGE_PUMP)?;
        self.command(CHARGE_PUMP_ENABLE)?;

        self.set_display_on(true)?;

        self.framebuffer.fill(Color::Off);
        self.update()?;
        self.cursor = Cursor::new();
        self.state = State::Ready;
        log::debug!("display ready");
        Ok(())
    }

    /// Sends the whole framebuffer to the panel, one page at a time.
    pub fn update(&mut self) -> DisplayResult<I::Error> {
        log::trace!("flushing {} pages", PAGES);
        let offset = self.config.column_offset;
        for (index, page) in self.framebuffer.pages().iter().enumerate() {
            self.interface
                .write_command(SET_PAGE_START + index as u8)
                .map_err(Error::Transport)?;
            self.interface
                .write_command(SET_LOWER_COLUMN | (offset & 0x0F))
                .map_err(Error::Transport)?;
            self.interface
                .write_command(SET_HIGHER_COLUMN | (offset >> 4))
                .map_err(Error::Transport)?;
            self.interface.write_data(page).map_err(Error::Transport)?;
        }
        Ok(())
    }

    /// Same as [`update`](Self::update).
    pub fn flush(&mut self) -> DisplayResult<I::Error> {
        self.update()
    }

    pub fn set_contrast(&mut self, contrast: u8) -> DisplayResult<I::Error> {
        log::debug!("contrast {contrast:#04x}");
        self.command(SET_CONTRAST)?;
        self.command(contrast)?;
        self.contrast = contrast;
        Ok(())
    }

    pub fn contrast(&self) -> u8 {
        self.contrast
    }

    pub fn set_display_on(&mut self, on: bool) -> DisplayResult<I::Error> {
        log::debug!("display {}", if on { "on" } else { "off" });
        self.command(if on { DISPLAY_ON } else { DISPLAY_OFF })?;
        self.display_on = on;
        Ok(())
    }

    pub fn display_on(&self) -> bool {
        self.display_on
    }

    pub fn state(&self) -> State {
        self.state
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn framebuffer(&self) -> &Framebuffer<WIDTH, PAGES> {
        &self.framebuffer
    }

    pub fn framebuffer_mut(&mut self) -> &mut Framebuffer<WIDTH, PAGES> {
        &mut self.framebuffer
    }

    /// Gives the transport back, consuming the session.
    pub fn release(self) -> I {
        self.interface
    }

    pub fn fill(&mut self, color: Color) {
        self.framebuffer.fill(color);
    }

    pub fn load(&mut self, bytes: &[u8]) -> Result<(), BufferError> {
        self.framebuffer.load(bytes)
    }

    pub fn set_pixel(&mut self, x: i32, y: i32, color: Color) {
        self.framebuffer.set_pixel(x, y, color);
    }

    pub fn set_cursor(&mut self, x: i16, y: i16) {
        self.cursor.set(x, y);
    }

    pub fn cursor(&self) -> Cursor {
        self.cursor
    }

    pub fn write_char(&mut self, ch: char, font: &Font, color: Color) -> Result<char, GlyphError> {
        self.cursor.write_char(&mut self.framebuffer, ch, font, color)
    }

    pub fn write_string(&mut self, text: &str, font: &Font, color: Color) -> Result<(), GlyphError> {
        self.cursor.write_str(&mut self.framebuffer, text, font, color)
    }

    pub fn draw_line(&mut self, x1: i16, y1: i16, x2: i16, y2: i16, color: Color) {
        self.framebuffer.draw_line(x1, y1, x2, y2, color);
    }

    pub fn draw_polyline(&mut self, vertices: &[Vertex], color: Color) {
        self.framebuffer.draw_polyline(vertices, color);
    }

    pub fn draw_rectangle(&mut self, x1: i16, y1: i16, x2: i16, y2: i16, color: Color) {
        self.framebuffer.draw_rectangle(x1, y1, x2, y2, color);
    }

    pub fn fill_rectangle(&mut self, x1: i16, y1: i16, x2: i16, y2: i16, color: Color) {
        self.framebuffer.fill_rectangle(x1, y1, x2, y2, color);
    }

    pub fn invert_rectangle(&mut self, x1: i16, y1: i16, x2: i16, y2: i16) -> Result<(), BufferError> {
        self.framebuffer.invert_rectangle(x1, y1, x2, y2)
    }

    pub fn draw_circle(&mut self, cx: i16, cy: i16, radius: u8, color: Color) {
        self.framebuffer.draw_circle(cx, cy, radius, color);
    }

    pub fn fill_circle(&mut self, cx: i16, cy: i16, radius: u8, color: Color) {
        self.framebuffer.fill_circle(cx, cy, radius, color);
    }

    pub fn draw_arc(&mut self, cx: i16, cy: i16, radius: u8, start_angle: u16, sweep: u16, color: Color) {
        self.framebuffer.draw_arc(cx, cy, radius, start_angle, sweep, color);
    }

    pub fn draw_arc_with_radius_line(
        &mut self,
        cx: i16,
        cy: i16,
        radius: u8,
        start_angle: u16,
        sweep: u16,
        color: Color,
    ) {
        self.framebuffer
            .draw_arc_with_radius_line(cx, cy, radius, start_angle, sweep, color);
    }

    pub fn fill_triangle(
        &mut self,
        x0: i16,
        y0: i16,
        x1: i16,
        y1: i16,
        x2: i16,
        y2: i16,
        color: Color,
    ) {
        self.framebuffer.fill_triangle(x0, y0, x1, y1, x2, y2, color);
    }

    pub fn draw_bitmap(&mut self, x: i16, y: i16, bitmap: &[u8], w: u16, h: u16, color: Color) {
        self.framebuffer.draw_bitmap(x, y, bitmap, w, h, color);
    }

    fn command(&mut self, command: u8) -> DisplayResult<I::Error> {
        self.interface.write_command(command).map_err(Error::Transport)
    }
}
