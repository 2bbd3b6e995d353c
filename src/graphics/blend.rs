pub type Argb = u32;

pub type Mixer = fn(Argb, Argb) -> Argb;

use super::Pixel;

pub fn u8_mul(a: u8, b: u8) -> u8 {
    (a as u16 * b as u16).to_be_bytes()[0]
}

pub fn argb_fade(this: Argb, other: u8) -> Argb {
    let [aa, r, g, b] = this.decompose();
    Argb::compose([u8_mul(aa, other), r, g, b])
}

pub fn composite_u32(c1: Argb, c2: Argb) -> Argb {
    let [a1, r1, g1, b1] = c1.decompose();
    let [a2, r2, g2, b2] = c2.decompose();

    let (a, a3) = {
        let a1 = a1 as u16;
        let a2 = a2 as u16;

        let a3 = (a1 * (255 - a2)) / 256;

        (a2 + a3, a3)
    };

    if a == 0 {
        return Argb::compose([0, 0, 0, 0]);
    }

    let composite_channel = |c1: u8, c2: u8| -> u8 {
        let c1 = c1 as u16;
        let c2 = c2 as u16;
        let a2 = a2 as u16;
        let a = a as u16;

        ((c2 * a2 + c1 * a3) / a) as u8
    };

    Argb::compose([
        a as u8,
        composite_channel(r1, r2),
        composite_channel(g1, g2),
        composite_channel(b1, b2),
    ])
}

impl Pixel for Argb {
    fn black() -> Argb {
        0xFF_00_00_00
    }

    fn white() -> Argb {
        0xFF_FF_FF_FF
    }

    fn trans() -> Argb {
        0x0
    }

    fn over(self, other: Argb) -> Argb {
        other
    }

    fn mix(self, other: Argb) -> Argb {
        composite_u32(self, other)
    }

    fn fade(self, alpha: u8) -> Argb {
        argb_fade(self, alpha)
    }

    fn decompose(self) -> [u8; 4] {
        self.to_be_bytes()
    }

    fn compose(array: [u8; 4]) -> Argb {
        Argb::from_be_bytes(array)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn u8_mul_scales_into_byte_range() {
        assert_eq!(u8_mul(255, 255), 254);
        assert_eq!(u8_mul(0, 255), 0);
        assert_eq!(u8_mul(255, 0), 0);
        assert_eq!(u8_mul(128, 128), 64);
    }

    #[test]
    fn mix_with_opaque_source_replaces() {
        let below = 0xFF_10_20_30;
        let above = 0xFF_80_90_A0;
        assert_eq!(below.mix(above), above);
    }

    #[test]
    fn mix_with_transparent_source_keeps_destination() {
        let below = 0xFF_10_20_30;
        let [a, r, g, b] = below.mix(0x00_FF_FF_FF).decompose();
        assert_eq!([r, g, b], [0x10, 0x20, 0x30]);
        assert!(a >= 0xFE);
    }

    #[test]
    fn fade_only_touches_alpha() {
        let c = 0xFF_AA_BB_CC;
        let [a, r, g, b] = c.fade(128).decompose();
        assert_eq!([r, g, b], [0xAA, 0xBB, 0xCC]);
        assert!(a < 0xFF);
    }
}
