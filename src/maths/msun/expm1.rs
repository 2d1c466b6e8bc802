//! e^x - 1 for float and double, accurate near zero.
//!
//! Same reduction as `exp`; on the reduced interval a rational form in
//! `x^2/2` gives e^r - 1 directly, and the final scaling by 2^k is arranged
//! so the subtraction of one never cancels.

use super::{hi_word, lo_word, with_hi_lo};

const O_THRESHOLD: f64 = 7.09782712893383973096e+02;
const LN2_HI: f64 = 6.93147180369123816490e-01;
const LN2_LO: f64 = 1.90821492927058770002e-10;
const INVLN2: f64 = 1.44269504088896338700e+00;
const TINY: f64 = 1.0e-300;
const HUGE: f64 = 1.0e+300;

// scaled for R(2z) with z = x*x/2
const Q1: f64 = -3.33333333333331316428e-02;
const Q2: f64 = 1.58730158725481460165e-03;
const Q3: f64 = -7.93650757867487942473e-05;
const Q4: f64 = 4.00821782732936239552e-06;
const Q5: f64 = -2.01099218183624371326e-07;

pub fn expm1(x: f64) -> f64 {
    let hx = hi_word(x);
    let neg = hx & 0x8000_0000 != 0;
    let hx = hx & 0x7fff_ffff;

    // |x| >= 56 ln2
    if hx >= 0x4043_687a {
        if hx >= 0x4086_2e42 {
            if hx >= 0x7ff0_0000 {
                if ((hx & 0xf_ffff) | lo_word(x)) != 0 {
                    return x + x;
                }
                return if neg { -1.0 } else { x };
            }
            if x > O_THRESHOLD {
                return HUGE * HUGE;
            }
        }
        if neg {
            return TINY - 1.0;
        }
    }

    let mut x = x;
    let k;
    let mut c = 0.0;

    if hx > 0x3fd6_2e42 {
        // |x| > ln2/2
        let hi;
        let lo;
        if hx < 0x3ff0_a2b2 {
            if neg {
                hi = x + LN2_HI;
                lo = -LN2_LO;
                k = -1;
            } else {
                hi = x - LN2_HI;
                lo = LN2_LO;
                k = 1;
            }
        } else {
            k = (INVLN2 * x + if neg { -0.5 } else { 0.5 }) as i32;
            let t = k as f64;
            hi = x - t * LN2_HI;
            lo = t * LN2_LO;
        }
        x = hi - lo;
        c = (hi - x) - lo;
    } else if hx < 0x3c90_0000 {
        // |x| < 2^-54
        return x;
    } else {
        k = 0;
    }

    let hfx = 0.5 * x;
    let hxs = x * hfx;
    let r1 = 1.0 + hxs * (Q1 + hxs * (Q2 + hxs * (Q3 + hxs * (Q4 + hxs * Q5))));
    let t = 3.0 - r1 * hfx;
    let mut e = hxs * ((r1 - t) / (6.0 - x * t));
    if k == 0 {
        return x - (x * e - hxs);
    }

    let twopk = with_hi_lo(((0x3ff + k) as u32) << 20, 0);
    e = x * (e - c) - c;
    e -= hxs;
    if k == -1 {
        return 0.5 * (x - e) - 0.5;
    }
    if k == 1 {
        if x < -0.25 {
            return -2.0 * (e - (x + 0.5));
        }
        return 1.0 + 2.0 * (x - e);
    }
    if k <= -2 || k > 56 {
        let mut y = 1.0 - (e - x);
        if k == 1024 {
            y = y * 2.0 * f64::from_bits(0x7fe0_0000_0000_0000);
        } else {
            y *= twopk;
        }
        return y - 1.0;
    }
    if k < 20 {
        // t = 1 - 2^-k
        let t = with_hi_lo(0x3ff0_0000 - (0x20_0000 >> k), 0);
        (t - (e - x)) * twopk
    } else {
        // t = 2^-k
        let t = with_hi_lo(((0x3ff - k) as u32) << 20, 0);
        ((x - (e + t)) + 1.0) * twopk
    }
}

const O_THRESHOLD_F: f32 = f32::from_bits(0x42b1_7180);
const LN2_HI_F: f32 = f32::from_bits(0x3f31_7180);
const LN2_LO_F: f32 = f32::from_bits(0x3717_f7d1);
const INVLN2_F: f32 = f32::from_bits(0x3fb8_aa3b);
const TINY_F: f32 = 1.0e-30;
const HUGE_F: f32 = 1.0e+30;
const Q1_F: f32 = -3.3333212137e-2;
const Q2_F: f32 = 1.5807170421e-3;

pub fn expm1f(x: f32) -> f32 {
    let hx = x.to_bits();
    let neg = hx & 0x8000_0000 != 0;
    let hx = hx & 0x7fff_ffff;

    // |x| >= 27 ln2
    if hx >= 0x4195_b844 {
        if hx >= 0x42b1_7218 {
            if hx > 0x7f80_0000 {
                return x + x;
            }
            if hx == 0x7f80_0000 {
                return if neg { -1.0 } else { x };
            }
            if x > O_THRESHOLD_F {
                return HUGE_F * HUGE_F;
            }
        }
        if neg {
            return TINY_F - 1.0;
        }
    }

    let mut x = x;
    let k;
    let mut c = 0.0;

    if hx > 0x3eb1_7218 {
        let hi;
        let lo;
        if hx < 0x3f85_1592 {
            if neg {
                hi = x + LN2_HI_F;
                lo = -LN2_LO_F;
                k = -1;
            } else {
                hi = x - LN2_HI_F;
                lo = LN2_LO_F;
                k = 1;
            }
        } else {
            k = (INVLN2_F * x + if neg { -0.5 } else { 0.5 }) as i32;
            let t = k as f32;
            hi = x - t * LN2_HI_F;
            lo = t * LN2_LO_F;
        }
        x = hi - lo;
        c = (hi - x) - lo;
    } else if hx < 0x3300_0000 {
        // |x| < 2^-25
        return x;
    } else {
        k = 0;
    }

    let hfx = 0.5 * x;
    let hxs = x * hfx;
    let r1 = 1.0 + hxs * (Q1_F + hxs * Q2_F);
    let t = 3.0 - r1 * hfx;
    let mut e = hxs * ((r1 - t) / (6.0 - x * t));
    if k == 0 {
        return x - (x * e - hxs);
    }

    let twopk = f32::from_bits(((0x7f + k) as u32) << 23);
    e = x * (e - c) - c;
    e -= hxs;
    if k == -1 {
        return 0.5 * (x - e) - 0.5;
    }
    if k == 1 {
        if x < -0.25 {
            return -2.0 * (e - (x + 0.5));
        }
        return 1.0 + 2.0 * (x - e);
    }
    if k <= -2 || k > 56 {
        let mut y = 1.0 - (e - x);
        if k == 128 {
            y = y * 2.0 * f32::from_bits(0x7f00_0000);
        } else {
            y *= twopk;
        }
        return y - 1.0;
    }
    if k < 23 {
        let t = f32::from_bits(0x3f80_0000 - (0x100_0000 >> k));
        (t - (e - x)) * twopk
    } else {
        let t = f32::from_bits(((0x7f - k) as u32) << 23);
        ((x - (e + t)) + 1.0) * twopk
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn small_arguments_keep_their_bits() {
        assert_eq!(expm1(1e-20), 1e-20);
        assert_eq!(expm1(-0.0).to_bits(), (-0.0f64).to_bits());
        assert_eq!(expm1f(1e-10), 1e-10);
        // e^x - 1 ~ x + x^2/2
        let x = 1e-8;
        assert!((expm1(x) - (x + x * x / 2.0)).abs() < 1e-24);
    }

    #[test]
    fn saturation_and_specials() {
        assert_eq!(expm1(-50.0), -1.0);
        assert_eq!(expm1(f64::NEG_INFINITY), -1.0);
        assert_eq!(expm1(f64::INFINITY), f64::INFINITY);
        assert_eq!(expm1(710.0), f64::INFINITY);
        assert!(expm1(f64::NAN).is_nan());
        assert_eq!(expm1f(-20.0), -1.0);
        assert_eq!(expm1f(89.0), f32::INFINITY);
    }

    #[test]
    fn known_values() {
        assert!((expm1(1.0) - 1.718281828459045).abs() <= 2.3e-16);
        assert!((expm1(-1.0) + 0.6321205588285577).abs() <= 1.2e-16);
        assert!((expm1(0.1) - 0.10517091807564763).abs() <= 2e-17);
        assert!((expm1(30.0) - 10686474581523.463).abs() <= 4e-3);
        assert!((expm1(700.0) / 1.0142320547350045e304 - 1.0).abs() < 1e-15);
        assert!((expm1f(1.0) - 1.718_281_8).abs() <= 2.4e-7);
        assert!((expm1f(-0.3) + 0.259_181_8).abs() <= 6e-8);
    }
}
