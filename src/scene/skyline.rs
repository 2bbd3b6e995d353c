use rand::Rng;

use crate::{
    data::{BUILDING_COUNT, HEIGHT, ROAD_HEIGHT, WIDTH},
    graphics::{Argb, Canvas, P2},
};

pub const BUILDING_COLOR: Argb = 0xFF_3C_3C_46;
pub const WINDOW_COLOR: Argb = 0xFF_C8_C8_50;
pub const ROAD_COLOR: Argb = 0xFF_28_28_2D;
pub const LANE_COLOR: Argb = 0xFF_DC_DC_DC;

/// Top of the road strip; buildings stand on this line.
pub const GROUND_LEVEL: i32 = (HEIGHT - ROAD_HEIGHT) as i32;

// Facades are inset this much from each side of their column.
const FACADE_INSET: i32 = 10;

const WINDOW_W: usize = 18;
const WINDOW_H: usize = 12;
const WINDOW_STEP_X: i32 = 30;
const WINDOW_STEP_Y: i32 = 35;
const WINDOW_MARGIN_X: i32 = 10;
const WINDOW_MARGIN_Y: i32 = 20;
const LIT_CHANCE: f64 = 0.4;

const LANE_STEP: usize = 70;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Building {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

/// Partitions the frame into equal columns and raises one building
/// of random height per column. Called once; the skyline never
/// changes afterwards.
pub fn generate_buildings(rng: &mut impl Rng) -> Vec<Building> {
    let column = (WIDTH / BUILDING_COUNT) as i32;

    (0..BUILDING_COUNT as i32)
        .map(|i| {
            let h = rng.random_range(100..=250);

            Building {
                x: i * column + FACADE_INSET,
                y: GROUND_LEVEL - h,
                w: column - 2 * FACADE_INSET,
                h,
            }
        })
        .collect()
}

/// Facades plus their window grids. The lit pattern is rolled anew
/// every frame; no window state is kept between frames.
pub fn draw_skyline(canvas: &mut Canvas, buildings: &[Building], rng: &mut impl Rng) {
    for b in buildings {
        canvas.draw_rect_wh(P2::new(b.x, b.y), b.w as usize, b.h as usize, BUILDING_COLOR);

        let mut y = b.y + WINDOW_MARGIN_Y;
        while y < b.y + b.h - WINDOW_MARGIN_Y {
            let mut x = b.x + WINDOW_MARGIN_X;
            while x < b.x + b.w - 2 * WINDOW_MARGIN_X {
                if rng.random_bool(LIT_CHANCE) {
                    canvas.draw_rect_wh(P2::new(x, y), WINDOW_W, WINDOW_H, WINDOW_COLOR);
                }
                x += WINDOW_STEP_X;
            }
            y += WINDOW_STEP_Y;
        }
    }
}

pub fn draw_road(canvas: &mut Canvas) {
    canvas.draw_rect_wh(P2::new(0, GROUND_LEVEL), WIDTH, ROAD_HEIGHT, ROAD_COLOR);

    for x in (0..WIDTH as i32).step_by(LANE_STEP) {
        canvas.draw_rect_wh(P2::new(x + 15, GROUND_LEVEL + 25), 40, 10, LANE_COLOR);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn generates_one_building_per_column() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let buildings = generate_buildings(&mut rng);

        assert_eq!(buildings.len(), BUILDING_COUNT);
    }

    #[test]
    fn heights_stay_in_range_and_rest_on_the_ground() {
        let mut rng = ChaCha8Rng::seed_from_u64(2);

        for b in generate_buildings(&mut rng) {
            assert!((100..=250).contains(&b.h));
            assert_eq!(b.y + b.h, GROUND_LEVEL);
        }
    }

    #[test]
    fn columns_do_not_overlap() {
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let buildings = generate_buildings(&mut rng);

        for pair in buildings.windows(2) {
            assert!(pair[0].x + pair[0].w <= pair[1].x);
        }
    }

    #[test]
    fn same_seed_gives_identical_geometry() {
        let mut a = ChaCha8Rng::seed_from_u64(42);
        let mut b = ChaCha8Rng::seed_from_u64(42);

        assert_eq!(generate_buildings(&mut a), generate_buildings(&mut b));
    }

    #[test]
    fn road_and_lane_marks_land_on_the_strip() {
        let mut canvas = Canvas::new(WIDTH, HEIGHT);
        draw_road(&mut canvas);

        assert_eq!(canvas.pixel_xy(P2::new(0, GROUND_LEVEL)), ROAD_COLOR);
        assert_eq!(canvas.pixel_xy(P2::new(0, HEIGHT as i32 - 1)), ROAD_COLOR);
        assert_eq!(canvas.pixel_xy(P2::new(15, GROUND_LEVEL + 25)), LANE_COLOR);
        assert_eq!(canvas.pixel_xy(P2::new(60, GROUND_LEVEL + 25)), ROAD_COLOR);

        // Above the strip nothing is drawn.
        assert_eq!(canvas.pixel_xy(P2::new(0, GROUND_LEVEL - 1)), 0);
    }
}
