use rand::Rng;

use crate::{
    data::{HEIGHT, WIDTH},
    graphics::{Argb, Canvas, Pixel, P2},
};

pub const RAIN_COLOR: Argb = 0xFF_8A_2B_E2;

const DROP_WIDTH: i32 = 2;

/// One streak of rain. The pool is allocated once at startup and
/// drops are recycled above the frame instead of being destroyed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Raindrop {
    pub x: i32,
    pub y: f32,
    pub length: u32,
    pub speed: f32,
    pub color: Argb,
}

impl Raindrop {
    pub fn new(rng: &mut impl Rng) -> Self {
        Self {
            x: rng.random_range(0..=WIDTH as i32),
            y: rng.random_range(-(HEIGHT as f32)..0.0),
            length: rng.random_range(8..=18),
            speed: rng.random_range(4.0..10.0),
            color: RAIN_COLOR,
        }
    }

    /// Advances the drop by one frame. Past the bottom edge it is
    /// resampled above the frame at a fresh column, which keeps y
    /// inside [-HEIGHT, HEIGHT] at all times.
    pub fn fall(&mut self, rng: &mut impl Rng) {
        self.y += self.speed;

        if self.y > HEIGHT as f32 {
            self.y = rng.random_range(-(HEIGHT as f32)..0.0);
            self.x = rng.random_range(0..=WIDTH as i32);
        }
    }

    // The streak runs downward from y, fading out toward its tail.
    pub fn draw(&self, canvas: &mut Canvas) {
        let top = self.y as i32;
        let length = self.length as i32;

        for step in 0..length {
            let fade = ((step + 1) * 255 / length) as u8;
            let color = self.color.fade(fade);

            for dx in 0..DROP_WIDTH {
                canvas.plot(P2::new(self.x + dx, top + step), color, Argb::mix);
            }
        }
    }
}
