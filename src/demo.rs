//! Display self-test scenes and the bouncing ball animation.

use crate::color::Color;
use crate::framebuffer::Framebuffer;

/// One frame of the self-test cycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Scene {
    Blank,
    Lit,
    Diagonal,
    Outline,
    FilledRectangle,
    Circle,
    FilledCircle,
    HalfArc,
    Sector,
    Triangle,
    Frame,
    InvertedFrame,
}

impl Scene {
    pub const ALL: [Scene; 12] = [
        Scene::Blank,
        Scene::Lit,
        Scene::Diagonal,
        Scene::Outline,
        Scene::FilledRectangle,
        Scene::Circle,
        Scene::FilledCircle,
        Scene::HalfArc,
        Scene::Sector,
        Scene::Triangle,
        Scene::Frame,
        Scene::InvertedFrame,
    ];

    /// The scene after this one, wrapping around at the end of the cycle.
    pub fn next(self) -> Scene {
        let index = Self::ALL.iter().position(|&s| s == self).unwrap_or(0);
        Self::ALL[(index + 1) % Self::ALL.len()]
    }

    /// Redraws the whole framebuffer for this scene.
    pub fn render<const WIDTH: usize, const PAGES: usize>(self, fb: &mut Framebuffer<WIDTH, PAGES>) {
        let right = WIDTH as i16 - 1;
        let bottom = Framebuffer::<WIDTH, PAGES>::HEIGHT as i16 - 1;
        let (cx, cy) = (WIDTH as i16 / 2, (bottom + 1) / 2);

        fb.fill(match self {
            Scene::Lit | Scene::Frame | Scene::InvertedFrame => Color::On,
            _ => Color::Off,
        });
        match self {
            Scene::Blank | Scene::Lit => {}
            Scene::Diagonal => fb.draw_line(0, 0, right, bottom, Color::On),
            Scene::Outline => fb.draw_rectangle(0, 0, right, bottom, Color::On),
            Scene::FilledRectangle => fb.fill_rectangle(10, 10, right - 9, bottom - 9, Color::On),
            Scene::Circle => fb.draw_circle(cx, cy, 20, Color::On),
            Scene::FilledCircle => fb.fill_circle(cx, cy, 20, Color::On),
            Scene::HalfArc => fb.draw_arc(cx, cy, 20, 0, 180, Color::On),
            Scene::Sector => fb.draw_arc_with_radius_line(cx, cy, 20, 0, 270, Color::On),
            Scene::Triangle => fb.fill_triangle(0, bottom, cx, 0, right, bottom, Color::On),
            Scene::Frame => fb.draw_rectangle(0, 0, right, bottom, Color::Off),
            Scene::InvertedFrame => {
                fb.draw_rectangle(0, 0, right, bottom, Color::Off);
                _ = fb.invert_rectangle(0, 0, right, bottom);
            }
        }
    }
}

/// A ball bouncing inside the screen frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BouncingBall {
    pub x: i16,
    pub y: i16,
    pub dx: i16,
    pub dy: i16,
    pub radius: u8,
}

impl BouncingBall {
    pub const RADIUS: u8 = 4;

    /// A ball at the center of a `width` x `height` screen heading down-right.
    pub const fn centered(width: i16, height: i16) -> Self {
        Self {
            x: width / 2,
            y: height / 2,
            dx: 1,
            dy: 1,
            radius: Self::RADIUS,
        }
    }

    /// Moves one step, reversing direction on contact with an edge.
    pub fn advance(&mut self, width: i16, height: i16) {
        let r = i16::from(self.radius);
        self.x += self.dx;
        self.y += self.dy;
        if self.x - r <= 0 || self.x + r >= width {
            self.dx = -self.dx;
        }
        if self.y - r <= 0 || self.y + r >= height {
            self.dy = -self.dy;
        }
    }

    /// Black ball on a white screen inside a black border.
    pub fn render<const WIDTH: usize, const PAGES: usize>(&self, fb: &mut Framebuffer<WIDTH, PAGES>) {
        let bottom = Framebuffer::<WIDTH, PAGES>::HEIGHT as i16 - 1;
        fb.fill(Color::On);
        fb.draw_rectangle(0, 0, WIDTH as i16 - 1, bottom, Color::Off);
        fb.fill_circle(self.x, self.y, self.radius, Color::Off);
    }
}
