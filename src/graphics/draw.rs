use super::{blend::Mixer, Argb, Canvas, Pixel, P2};

impl Canvas {
    pub fn draw_rect_wh(&mut self, p: P2, w: usize, h: usize, c: Argb) {
        self.draw_rect_wh_by(p, w, h, c, Argb::over);
    }

    pub fn draw_rect_wh_by(&mut self, p: P2, w: usize, h: usize, c: Argb, b: Mixer) {
        let xs = p.x.max(0) as usize;
        let ys = p.y.max(0) as usize;

        let xe = p.x.saturating_add(w as i32).max(0) as usize;
        let ye = p.y.saturating_add(h as i32).max(0) as usize;

        let xe = xe.min(self.width());
        let ye = ye.min(self.height());

        if xs >= xe || ys >= ye {
            return;
        }

        let width = self.width();
        let buffer = self.as_mut_slice();

        for row in ys..ye {
            let start = row * width;
            for pixel in &mut buffer[start + xs..start + xe] {
                *pixel = b(*pixel, c);
            }
        }
    }

    pub fn draw_circle_by(&mut self, center: P2, radius: i32, filled: bool, c: Argb, b: Mixer) {
        if radius <= 0 {
            return;
        }

        let r2 = radius * radius;

        for dy in -radius..=radius {
            // Horizontal extent of the disk at this scanline.
            let dx = ((r2 - dy * dy) as f32).sqrt() as i32;

            let y = center.y + dy;

            if filled {
                for x in center.x - dx..=center.x + dx {
                    self.plot(P2::new(x, y), c, b);
                }
            } else {
                self.plot(P2::new(center.x - dx, y), c, b);
                self.plot(P2::new(center.x + dx, y), c, b);
            }
        }
    }
}
