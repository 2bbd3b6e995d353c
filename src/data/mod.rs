pub mod reader;

use std::time::Duration;

use crate::{graphics::Canvas, scene::Scene};

pub const WIDTH: usize = 800;
pub const HEIGHT: usize = 600;

pub const BUILDING_COUNT: usize = 8;
pub const RAINDROP_COUNT: usize = 80;

/// Height of the road strip along the bottom of the frame.
pub const ROAD_HEIGHT: usize = 70;

pub const DEFAULT_MILLI_HZ: u32 = 60 * 1000;
pub const DEFAULT_SCALE: u8 = 1;

/// Main program struct.
///
/// Holds the effective configuration, the canvas the scene renders
/// into, and the scene itself. The canvas is always WIDTH x HEIGHT;
/// `scale` only affects how it is blown up onto the window surface.
pub(crate) struct Program {
    scale: u8,
    hidden: bool,

    pub pix: Canvas,
    pub scene: Scene,

    pub milli_hz: u32,
    pub refresh_rate: Duration,

    pub seed: Option<u64>,
}

impl Program {
    pub fn new() -> Self {
        let mut out = Self {
            scale: DEFAULT_SCALE,
            hidden: false,

            pix: Canvas::new(WIDTH, HEIGHT),
            scene: Scene::new(None),

            milli_hz: DEFAULT_MILLI_HZ,
            refresh_rate: Duration::ZERO,

            seed: None,
        };

        out.change_fps_frac(DEFAULT_MILLI_HZ);

        out
    }

    pub fn scale(&self) -> u8 {
        self.scale
    }

    pub fn set_hidden(&mut self, b: bool) {
        self.hidden = b;
    }

    pub fn is_hidden(&self) -> bool {
        self.hidden
    }

    pub fn change_fps_frac(&mut self, milli_hz: u32) {
        let fps = milli_hz as f32 / 1000.0;
        self.milli_hz = milli_hz;
        self.refresh_rate = Duration::from_micros((1_000_000.0 / fps) as u64);
    }

    pub fn frame_interval(&self) -> Duration {
        self.refresh_rate
    }

    /// One animation step plus a full redraw of the canvas.
    pub fn render(&mut self) {
        self.scene.advance();
        self.scene.draw(&mut self.pix);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_frame_interval_matches_60_fps() {
        let prog = Program::new();

        let micros = prog.frame_interval().as_micros();
        assert!((16_600..=16_700).contains(&micros));
    }

    #[test]
    fn change_fps_frac_rescales_the_interval() {
        let mut prog = Program::new();

        prog.change_fps_frac(30 * 1000);
        assert_eq!(prog.milli_hz, 30 * 1000);

        let micros = prog.frame_interval().as_micros();
        assert!((33_200..=33_400).contains(&micros));
    }

    #[test]
    fn render_fills_the_whole_canvas() {
        let mut prog = Program::new();
        prog.render();

        // After one frame no pixel is left blank.
        assert!(prog.pix.as_slice().iter().all(|&p| p != 0));
    }
}
