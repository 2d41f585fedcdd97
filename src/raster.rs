//! Geometric primitives drawn into a [`Framebuffer`].
//!
//! Everything except [`Framebuffer::invert_rectangle`] is built on
//! [`Framebuffer::set_pixel`], so pixels falling outside the buffer are
//! dropped rather than wrapping or panicking.
//!
//! Coordinates are `i16` and widened to `i32` for the arithmetic, so no
//! input overflows and every loop is bounded by the `i16` range.

use crate::color::Color;
use crate::error::BufferError;
use crate::framebuffer::Framebuffer;

/// Samples used to approximate a full circle when drawing arcs.
const ARC_SEGMENTS: u32 = 36;

/// A polyline point.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Vertex {
    pub x: i16,
    pub y: i16,
}

impl Vertex {
    pub const fn new(x: i16, y: i16) -> Self {
        Self { x, y }
    }
}

impl From<(i16, i16)> for Vertex {
    fn from((x, y): (i16, i16)) -> Self {
        Self { x, y }
    }
}

/// Angles up to 360 pass through; larger ones wrap, with a full turn kept as 360.
fn normalize_degrees(degrees: u16) -> u32 {
    let degrees = u32::from(degrees);
    if degrees <= 360 {
        degrees
    } else {
        match degrees % 360 {
            0 => 360,
            rest => rest,
        }
    }
}

/// Point on the circle, 0° straight down the y axis, truncated toward the center.
fn arc_point(cx: i32, cy: i32, radius: u8, degrees: f32) -> (i32, i32) {
    let rad = degrees * (core::f32::consts::PI / 180.0);
    let r = f32::from(radius);
    (
        cx + (libm::sinf(rad) * r) as i32,
        cy + (libm::cosf(rad) * r) as i32,
    )
}

impl<const WIDTH: usize, const PAGES: usize> Framebuffer<WIDTH, PAGES> {
    /// Bresenham line including both end points.
    pub fn draw_line(&mut self, x1: i16, y1: i16, x2: i16, y2: i16, color: Color) {
        self.line(x1.into(), y1.into(), x2.into(), y2.into(), color);
    }

    fn line(&mut self, x1: i32, y1: i32, x2: i32, y2: i32, color: Color) {
        let delta_x = (x2 - x1).abs();
        let delta_y = (y2 - y1).abs();
        let sign_x = if x1 < x2 { 1 } else { -1 };
        let sign_y = if y1 < y2 { 1 } else { -1 };
        let mut error = delta_x - delta_y;
        let (mut x, mut y) = (x1, y1);

        self.set_pixel(x2, y2, color);
        while x != x2 || y != y2 {
            self.set_pixel(x, y, color);
            let error2 = error * 2;
            if error2 > -delta_y {
                error -= delta_y;
                x += sign_x;
            }
            if error2 < delta_x {
                error += delta_x;
                y += sign_y;
            }
        }
    }

    pub fn draw_polyline(&mut self, vertices: &[Vertex], color: Color) {
        for pair in vertices.windows(2) {
            self.draw_line(pair[0].x, pair[0].y, pair[1].x, pair[1].y, color);
        }
    }

    pub fn draw_rectangle(&mut self, x1: i16, y1: i16, x2: i16, y2: i16, color: Color) {
        self.draw_line(x1, y1, x2, y1, color);
        self.draw_line(x2, y1, x2, y2, color);
        self.draw_line(x2, y2, x1, y2, color);
        self.draw_line(x1, y2, x1, y1, color);
    }

    /// Fills the rectangle spanned by two opposite corners, given in any order.
    pub fn fill_rectangle(&mut self, x1: i16, y1: i16, x2: i16, y2: i16, color: Color) {
        let (x1, y1, x2, y2) = (i32::from(x1), i32::from(y1), i32::from(x2), i32::from(y2));
        let (x_start, x_end) = (x1.min(x2).max(0), x1.max(x2).min(WIDTH as i32 - 1));
        let (y_start, y_end) = (y1.min(y2).max(0), y1.max(y2).min(Self::HEIGHT as i32 - 1));
        for y in y_start..=y_end {
            for x in x_start..=x_end {
                self.set_pixel(x, y, color);
            }
        }
    }

    /// Flips every pixel inside the rectangle.
    ///
    /// Works a byte at a time: pages fully inside the rectangle are inverted
    /// whole, the top and bottom pages through a mask. Unlike the other
    /// primitives this refuses out-of-range regions instead of clipping them.
    pub fn invert_rectangle(&mut self, x1: i16, y1: i16, x2: i16, y2: i16) -> Result<(), BufferError> {
        if x1 < 0
            || y1 < 0
            || i32::from(x2) >= WIDTH as i32
            || i32::from(y2) >= Self::HEIGHT as i32
            || x1 > x2
            || y1 > y2
        {
            log::warn!("invert rejected for ({x1}, {y1})..=({x2}, {y2})");
            return Err(BufferError::Range { x1, y1, x2, y2 });
        }
        let (x1, y1, x2, y2) = (x1 as usize, y1 as usize, x2 as usize, y2 as usize);
        let (top, bottom) = (y1 / 8, y2 / 8);
        let top_mask = 0xFFu8 << (y1 % 8);
        let bottom_mask = 0xFFu8 >> (7 - y2 % 8);

        if top == bottom {
            for x in x1..=x2 {
                self.xor_byte(x, top, top_mask & bottom_mask);
            }
        } else {
            for x in x1..=x2 {
                self.xor_byte(x, top, top_mask);
                for page in top + 1..bottom {
                    self.xor_byte(x, page, 0xFF);
                }
                self.xor_byte(x, bottom, bottom_mask);
            }
        }
        Ok(())
    }

    /// Bresenham circle outline. Skipped entirely when the center is off screen.
    pub fn draw_circle(&mut self, cx: i16, cy: i16, radius: u8, color: Color) {
        let (cx, cy) = (i32::from(cx), i32::from(cy));
        if !Self::contains(cx, cy) {
            return;
        }
        for (x, y) in CircleSteps::new(radius) {
            self.set_pixel(cx - x, cy + y, color);
            self.set_pixel(cx + x, cy + y, color);
            self.set_pixel(cx + x, cy - y, color);
            self.set_pixel(cx - x, cy - y, color);
        }
    }

    /// Solid disc walking the same steps as [`draw_circle`](Self::draw_circle),
    /// so it always covers the outline.
    pub fn fill_circle(&mut self, cx: i16, cy: i16, radius: u8, color: Color) {
        let (cx, cy) = (i32::from(cx), i32::from(cy));
        if !Self::contains(cx, cy) {
            return;
        }
        for (x, y) in CircleSteps::new(radius) {
            // x <= 0 and y >= 0 for every step.
            for row in cy - y..=cy + y {
                for col in cx + x..=cx - x {
                    self.set_pixel(col, row, color);
                }
            }
        }
    }

    /// Arc approximated by straight chords, 36 per full turn.
    ///
    /// Angles are in degrees, 0° pointing down (+y) and growing toward +x.
    /// Drawing starts at the sample nearest below `start_angle` and ends
    /// exactly at `sweep` degrees. A sweep of 0 draws nothing.
    pub fn draw_arc(&mut self, cx: i16, cy: i16, radius: u8, start_angle: u16, sweep: u16, color: Color) {
        self.arc(cx, cy, radius, start_angle, sweep, color);
    }

    /// Like [`draw_arc`](Self::draw_arc) plus the two radii closing the sector.
    pub fn draw_arc_with_radius_line(
        &mut self,
        cx: i16,
        cy: i16,
        radius: u8,
        start_angle: u16,
        sweep: u16,
        color: Color,
    ) {
        if let Some((first, last)) = self.arc(cx, cy, radius, start_angle, sweep, color) {
            let (cx, cy) = (i32::from(cx), i32::from(cy));
            self.line(cx, cy, first.0, first.1, color);
            self.line(cx, cy, last.0, last.1, color);
        }
    }

    /// Draws the chords and returns the first and last sample points, if any.
    fn arc(
        &mut self,
        cx: i16,
        cy: i16,
        radius: u8,
        start_angle: u16,
        sweep: u16,
        color: Color,
    ) -> Option<((i32, i32), (i32, i32))> {
        let sweep = normalize_degrees(sweep);
        let segments = (sweep * ARC_SEGMENTS + 180) / 360;
        if segments == 0 {
            return None;
        }
        let (cx, cy) = (i32::from(cx), i32::from(cy));
        let step = sweep as f32 / segments as f32;
        let mut count = normalize_degrees(start_angle) * ARC_SEGMENTS / 360;

        let first = arc_point(cx, cy, radius, count as f32 * step);
        let mut last = first;
        while count < segments {
            let from = arc_point(cx, cy, radius, count as f32 * step);
            count += 1;
            let degrees = if count == segments { sweep as f32 } else { count as f32 * step };
            last = arc_point(cx, cy, radius, degrees);
            self.line(from.0, from.1, last.0, last.1, color);
        }
        Some((first, last))
    }

    /// Scanline fill of the triangle `(x0, y0)`, `(x1, y1)`, `(x2, y2)`.
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
        let (mut a, mut b, mut c) = (
            (i32::from(x0), i32::from(y0)),
            (i32::from(x1), i32::from(y1)),
            (i32::from(x2), i32::from(y2)),
        );
        if a.1 > b.1 {
            core::mem::swap(&mut a, &mut b);
        }
        if b.1 > c.1 {
            core::mem::swap(&mut b, &mut c);
        }
        if a.1 > b.1 {
            core::mem::swap(&mut a, &mut b);
        }
        let ((x0, y0), (x1, y1), (x2, y2)) = (a, b, c);

        let inverse_slope = |dx: i32, dy: i32| if dy != 0 { dx as f32 / dy as f32 } else { 0.0 };
        let slope01 = inverse_slope(x1 - x0, y1 - y0);
        let slope02 = inverse_slope(x2 - x0, y2 - y0);
        let slope12 = inverse_slope(x2 - x1, y2 - y1);

        let (mut left, mut right) = (x0 as f32, x0 as f32);
        for y in y0..=y1 {
            self.span(left as i32, right as i32, y, color);
            left += slope01;
            right += slope02;
        }

        left = x1 as f32;
        right = x0 as f32 + slope02 * (y1 - y0) as f32;
        for y in y1..=y2 {
            self.span(left as i32, right as i32, y, color);
            left += slope12;
            right += slope02;
        }
    }

    fn span(&mut self, a: i32, b: i32, y: i32, color: Color) {
        if y < 0 || y >= Self::HEIGHT as i32 {
            return;
        }
        let (start, end) = (a.min(b).max(0), a.max(b).min(WIDTH as i32 - 1));
        for x in start..=end {
            self.set_pixel(x, y, color);
        }
    }
}

/// Offsets `(x, y)` visited by the Bresenham circle, `x` running from `-r` up to 0.
struct CircleSteps {
    x: i32,
    y: i32,
    err: i32,
}

impl CircleSteps {
    fn new(radius: u8) -> Self {
        let r = i32::from(radius);
        Self { x: -r, y: 0, err: 2 - 2 * r }
    }
}

impl Iterator for CircleSteps {
    type Item = (i32, i32);

    fn next(&mut self) -> Option<(i32, i32)> {
        if self.x > 0 {
            return None;
        }
        let point = (self.x, self.y);
        let mut e2 = self.err;
        if e2 <= self.y {
            self.y += 1;
            self.err += self.y * 2 + 1;
            if -self.x == self.y && e2 <= self.x {
                e2 = 0;
            }
        }
        if e2 > self.x {
            self.x += 1;
            self.err += self.x * 2 + 1;
        }
        Some(point)
    }
}

#[cfg(test)]
mod tests;
