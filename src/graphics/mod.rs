#![allow(dead_code)]

pub mod blend;
pub mod draw;

pub use blend::Argb;

pub const COLOR_BLANK: Argb = 0x00_00_00_00;

pub(crate) trait Pixel: Copy + Clone + Sized + std::fmt::Debug {
    fn black() -> Self;
    fn white() -> Self;
    fn trans() -> Self;

    fn over(self, other: Self) -> Self;
    fn mix(self, other: Self) -> Self;

    fn fade(self, alpha: u8) -> Self;
    fn decompose(self) -> [u8; 4];
    fn compose(array: [u8; 4]) -> Self;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct P2 {
    pub x: i32,
    pub y: i32,
}

impl P2 {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

pub struct Canvas {
    pix: Vec<Argb>,
    width: usize,
    height: usize,
}

impl Canvas {
    pub fn new(w: usize, h: usize) -> Self {
        Self {
            pix: vec![COLOR_BLANK; w * h],
            width: w,
            height: h,
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn size(&self) -> P2 {
        P2::new(self.width as i32, self.height as i32)
    }

    pub fn sizel(&self) -> usize {
        self.pix.len()
    }

    pub fn fill(&mut self, c: Argb) {
        self.pix.fill(c);
    }

    pub fn clear(&mut self) {
        self.fill(COLOR_BLANK);
    }

    pub fn is_in_bound(&self, p: P2) -> bool {
        (p.x as usize) < self.width && (p.y as usize) < self.height
    }

    // Negative coordinates wrap to huge values and fail the
    // bound check in plot(), so no sign test is needed here.
    pub fn get_idx_fast(&self, p: P2) -> usize {
        let x = p.x as usize;
        let y = p.y as usize;

        y.wrapping_mul(self.width).wrapping_add(x)
    }

    pub fn pixel(&self, i: usize) -> Argb {
        self.pix[i]
    }

    pub fn pixel_xy(&self, p: P2) -> Argb {
        self.pix[self.get_idx_fast(p)]
    }

    pub fn plot(&mut self, p: P2, c: Argb, b: blend::Mixer) {
        if self.is_in_bound(p) {
            let i = self.get_idx_fast(p);
            let p = &mut self.pix[i];
            *p = b(*p, c);
        }
    }

    pub fn as_slice(&self) -> &[Argb] {
        self.pix.as_slice()
    }

    pub fn as_mut_slice(&mut self) -> &mut [Argb] {
        self.pix.as_mut_slice()
    }

    // On Winit Wayland, resize increments aren't implemented,
    // so the width parameter is there to ensure that the
    // horizontal lines stay aligned in the destination.
    pub fn scale_to(&self, scale: usize, dest: &mut [Argb], width: Option<usize>) {
        if self.width == 0 {
            return;
        }

        let dst_width = width.unwrap_or(self.width * scale);

        self.pix
            .chunks_exact(self.width) // source lines
            .zip(dest.chunks_exact_mut(dst_width * scale)) // with destination blocks
            .flat_map(|(src_row, dst_row)| {
                src_row.iter().cycle().zip(dst_row.chunks_exact_mut(scale))
            })
            .for_each(|(src_pixel, dst_chunk)| dst_chunk.fill(*src_pixel));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn out_of_bound_plots_are_discarded() {
        let mut canvas = Canvas::new(4, 4);

        canvas.plot(P2::new(-1, 0), Argb::white(), Argb::over);
        canvas.plot(P2::new(0, -1), Argb::white(), Argb::over);
        canvas.plot(P2::new(4, 0), Argb::white(), Argb::over);
        canvas.plot(P2::new(0, 4), Argb::white(), Argb::over);

        assert!(canvas.as_slice().iter().all(|&p| p == COLOR_BLANK));
    }

    #[test]
    fn plot_writes_at_the_right_index() {
        let mut canvas = Canvas::new(4, 4);

        canvas.plot(P2::new(2, 1), Argb::white(), Argb::over);

        assert_eq!(canvas.pixel(6), Argb::white());
        assert_eq!(canvas.pixel_xy(P2::new(2, 1)), Argb::white());
    }

    #[test]
    fn scale_to_replicates_pixels_in_blocks() {
        let mut canvas = Canvas::new(2, 2);
        canvas.plot(P2::new(0, 0), 0xFF_AA_AA_AA, Argb::over);
        canvas.plot(P2::new(1, 1), 0xFF_BB_BB_BB, Argb::over);

        let mut dest = vec![0u32; 4 * 4];
        canvas.scale_to(2, &mut dest, None);

        for (x, y) in [(0, 0), (1, 0), (0, 1), (1, 1)] {
            assert_eq!(dest[y * 4 + x], 0xFF_AA_AA_AA);
        }
        for (x, y) in [(2, 2), (3, 2), (2, 3), (3, 3)] {
            assert_eq!(dest[y * 4 + x], 0xFF_BB_BB_BB);
        }
    }
}
