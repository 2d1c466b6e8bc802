//! Reduction of a float modulo pi/2.
//!
//! Same structure as the double reducer with float-sized pieces of pi/2:
//! Cody-Waite up to 2^7 * pi/2, then the shared Payne-Hanek kernel.

use super::fabsf;
use super::rem_pio2::kernel_rem_pio2;

// High 24 bits of n*pi/2 as float patterns, n = 1..=32.
const NPIO2_HW: [u32; 32] = [
    0x3fc90f00, 0x40490f00, 0x4096cb00, 0x40c90f00, 0x40fb5300, 0x4116cb00, 0x412fed00, 0x41490f00,
    0x41623100, 0x417b5300, 0x418a3a00, 0x4196cb00, 0x41a35c00, 0x41afed00, 0x41bc7e00, 0x41c90f00,
    0x41d5a000, 0x41e23100, 0x41eec200, 0x41fb5300, 0x4203f200, 0x420a3a00, 0x42108300, 0x4216cb00,
    0x421d1400, 0x42235c00, 0x4229a500, 0x422fed00, 0x42363600, 0x423c7e00, 0x4242c700, 0x42490f00,
];

const INVPIO2: f32 = f32::from_bits(0x3f22_f984);
// pi/2 as three 16-bit pieces with their tails.
const PIO2_1: f32 = f32::from_bits(0x3fc9_0f80);
const PIO2_1T: f32 = f32::from_bits(0x3735_4443);
const PIO2_2: f32 = f32::from_bits(0x3735_4400);
const PIO2_2T: f32 = f32::from_bits(0x2e85_a308);
const PIO2_3: f32 = f32::from_bits(0x2e85_a300);
const PIO2_3T: f32 = f32::from_bits(0x248d_3132);

/// Returns `(n, y0, y1)` with `y0 + y1 ~ x - n*pi/2` and `|y0| <= pi/4`.
pub(crate) fn rem_pio2f(x: f32) -> (i32, f32, f32) {
    let hx = x.to_bits() as i32;
    let ix = (hx & 0x7fff_ffff) as u32;

    if ix <= 0x3f49_0fd8 {
        return (0, x, 0.0);
    }

    // |x| < 3pi/4
    if ix < 0x4016_cbe4 {
        let s = if hx > 0 { 1.0f32 } else { -1.0 };
        let z = x - s * PIO2_1;
        let (y0, y1) = if (ix & 0xffff_fff0) != 0x3fc9_0fd0 {
            let y0 = z - s * PIO2_1T;
            (y0, (z - y0) - s * PIO2_1T)
        } else {
            let z2 = z - s * PIO2_2;
            let y0 = z2 - s * PIO2_2T;
            (y0, (z2 - y0) - s * PIO2_2T)
        };
        return (s as i32, y0, y1);
    }

    // |x| <= 2^7 * pi/2
    if ix <= 0x4349_0f80 {
        let t = fabsf(x);
        let n = (t * INVPIO2 + 0.5) as i32;
        let fn_ = n as f32;
        let mut r = t - fn_ * PIO2_1;
        let mut w = fn_ * PIO2_1T;
        let mut y0 = r - w;

        if n >= 32 || (ix & 0xffff_ff00) == NPIO2_HW[(n - 1) as usize] {
            let j = (ix >> 23) as i32;
            let i = j - ((y0.to_bits() >> 23) & 0xff) as i32;
            if i > 8 {
                let t2 = r;
                w = fn_ * PIO2_2;
                r = t2 - w;
                w = fn_ * PIO2_2T - ((t2 - r) - w);
                y0 = r - w;
                let i = j - ((y0.to_bits() >> 23) & 0xff) as i32;
                if i > 25 {
                    let t3 = r;
                    w = fn_ * PIO2_3;
                    r = t3 - w;
                    w = fn_ * PIO2_3T - ((t3 - r) - w);
                    y0 = r - w;
                }
            }
        }
        let y1 = (r - y0) - w;
        return if hx < 0 { (-n, -y0, -y1) } else { (n, y0, y1) };
    }

    if ix >= 0x7f80_0000 {
        let y = x - x;
        return (0, y, y);
    }

    // z = |x| scaled to [2^23, 2^24), an exact integer
    let e0 = (ix >> 23) as i32 - 150;
    let z = f32::from_bits(ix.wrapping_sub((e0 as u32) << 23));
    let (n, y) = kernel_rem_pio2(&[z as f64], e0, 1);
    let hi = y[0] as f32;
    let lo = ((y[0] - hi as f64) + y[1]) as f32;
    if hx < 0 { (-n, -hi, -lo) } else { (n, hi, lo) }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reduced(x: f32) -> (i32, f64) {
        let (n, y0, y1) = rem_pio2f(x);
        (n, y0 as f64 + y1 as f64)
    }

    #[test]
    fn agrees_with_the_double_reducer() {
        let mut x = 0.9f32;
        while x < 1.0e30 {
            let (n, r) = reduced(x);
            let (m, y0, y1) = super::super::rem_pio2::rem_pio2(x as f64);
            assert_eq!(n & 3, m & 3, "{x}");
            assert!((r - (y0 + y1)).abs() <= 1e-9 * (1.0 + y0.abs()), "{x}: {r} vs {y0}");
            x *= 1.9;
        }
    }

    #[test]
    fn negative_is_symmetric() {
        let (n, y0, y1) = rem_pio2f(-100.0);
        let (m, z0, z1) = rem_pio2f(100.0);
        assert_eq!(n, -m);
        assert_eq!((y0, y1), (-z0, -z1));
    }

    #[test]
    fn non_finite() {
        assert!(rem_pio2f(f32::INFINITY).1.is_nan());
        assert!(rem_pio2f(f32::NAN).2.is_nan());
    }
}
