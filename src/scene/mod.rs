pub mod rain;
pub mod skyline;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::{
    data::{RAINDROP_COUNT, WIDTH},
    graphics::{Argb, Canvas, Pixel, P2},
};

use rain::Raindrop;
use skyline::Building;

pub const SKY_COLOR: Argb = 0xFF_14_14_1E;
pub const MOON_COLOR: Argb = 0xFF_DC_DC_B4;

const MOON_RADIUS: i32 = 40;
const MOON_X: i32 = WIDTH as i32 - 80;
const MOON_Y: i32 = 80;

pub struct Scene {
    buildings: Vec<Building>,
    drops: Vec<Raindrop>,
    rng: ChaCha8Rng,
}

impl Scene {
    /// Builds the static skyline and the raindrop pool. Building
    /// geometry is drawn from the generator before anything else,
    /// so a fixed seed reproduces the same skyline run to run.
    pub fn new(seed: Option<u64>) -> Self {
        let mut rng = match seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed),
            None => ChaCha8Rng::from_os_rng(),
        };

        let buildings = skyline::generate_buildings(&mut rng);
        let drops = (0..RAINDROP_COUNT)
            .map(|_| Raindrop::new(&mut rng))
            .collect();

        Self {
            buildings,
            drops,
            rng,
        }
    }

    pub fn buildings(&self) -> &[Building] {
        &self.buildings
    }

    pub fn advance(&mut self) {
        for drop in &mut self.drops {
            drop.fall(&mut self.rng);
        }
    }

    // Background to foreground: sky, moon, skyline, road, rain.
    pub fn draw(&mut self, canvas: &mut Canvas) {
        canvas.fill(SKY_COLOR);

        canvas.draw_circle_by(
            P2::new(MOON_X, MOON_Y),
            MOON_RADIUS,
            true,
            MOON_COLOR,
            Argb::over,
        );

        skyline::draw_skyline(canvas, &self.buildings, &mut self.rng);
        skyline::draw_road(canvas);

        for drop in &self.drops {
            drop.draw(canvas);
        }
    }
}
