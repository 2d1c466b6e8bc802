//! e^x for float and double, plus the double-double entry used by tgamma.
//!
//! Reduction: x = k*ln2 + r with |r| <= ln2/2, where `k*ln2` is carried as
//! `k*LN2HI + k*LN2LO` and `k*LN2HI` is exact. On the reduced interval
//! e^r is evaluated through the Remez rational form
//! `1 + r + r*c/(2 - c)` with `c = r - r^2 * P(r^2)`.

use super::{copysign, hi_word, lo_word, scalbn, with_hi_lo};

const HALF: [f64; 2] = [0.5, -0.5];
const O_THRESHOLD: f64 = 7.09782712893383973096e+02;
const U_THRESHOLD: f64 = -7.45133219101941108420e+02;
const LN2HI: f64 = 6.93147180369123816490e-01; // 0x3fe62e42 0xfee00000
const LN2LO: f64 = 1.90821492927058770002e-10; // 0x3dea39ef 0x35793c76
const INVLN2: f64 = 1.44269504088896338700e+00;

// |exp(r) rational form error| < 2^-59
const P1: f64 = 1.66666666666666019037e-01;
const P2: f64 = -2.77777777770155933842e-03;
const P3: f64 = 6.61375632143793436117e-05;
const P4: f64 = -1.65339022054652515390e-06;
const P5: f64 = 4.13813679705723846039e-08;

const HUGE: f64 = 1.0e+300;
const TWOM1000: f64 = 9.33263618503218878990e-302; // 2^-1000

#[inline(always)]
fn poly(t: f64) -> f64 {
    t * (P1 + t * (P2 + t * (P3 + t * (P4 + t * P5))))
}

pub fn exp(x: f64) -> f64 {
    let hx = hi_word(x);
    let xsb = (hx >> 31) as usize;
    let hx = hx & 0x7fff_ffff;

    // |x| >= 709.78 or non-finite
    if hx >= 0x4086_2e42 {
        if hx >= 0x7ff0_0000 {
            if ((hx & 0xf_ffff) | lo_word(x)) != 0 {
                return x + x;
            }
            return if xsb == 0 { x } else { 0.0 };
        }
        if x > O_THRESHOLD {
            return HUGE * HUGE;
        }
        if x < U_THRESHOLD {
            return TWOM1000 * TWOM1000;
        }
    }

    let mut x = x;
    let mut k = 0;
    let mut hi = 0.0;
    let mut lo = 0.0;

    if hx > 0x3fd6_2e42 {
        // |x| > ln2/2
        if hx < 0x3ff0_a2b2 {
            // |x| < 1.5 ln2: k = +-1
            if xsb == 0 {
                hi = x - LN2HI;
                lo = LN2LO;
                k = 1;
            } else {
                hi = x + LN2HI;
                lo = -LN2LO;
                k = -1;
            }
        } else {
            k = (INVLN2 * x + HALF[xsb]) as i32;
            let t = k as f64;
            hi = x - t * LN2HI;
            lo = t * LN2LO;
        }
        x = hi - lo;
    } else if hx < 0x3e30_0000 {
        // |x| < 2^-28
        return 1.0 + x;
    }

    let t = x * x;
    let twopk = if k >= -1021 {
        with_hi_lo(((0x3ff + k) as u32) << 20, 0)
    } else {
        with_hi_lo(((0x3ff + k + 1000) as u32) << 20, 0)
    };
    let c = x - poly(t);
    if k == 0 {
        return 1.0 - ((x * c) / (c - 2.0) - x);
    }
    let y = 1.0 - ((lo - (x * c) / (2.0 - c)) - hi);
    if k >= -1021 {
        if k == 1024 {
            return y * 2.0 * f64::from_bits(0x7fe0_0000_0000_0000);
        }
        y * twopk
    } else {
        y * twopk * TWOM1000
    }
}

// ========= float =========

const HALF_F: [f32; 2] = [0.5, -0.5];
const O_THRESHOLD_F: f32 = f32::from_bits(0x42b1_7180);
const U_THRESHOLD_F: f32 = -1.0397208405e+02;
const LN2HI_F: f32 = f32::from_bits(0x3f31_7200);
const LN2LO_F: f32 = f32::from_bits(0x35bf_be8e);
const INVLN2_F: f32 = f32::from_bits(0x3fb8_aa3b);
const P1_F: f32 = 1.6666625440e-1;
const P2_F: f32 = -2.7667332906e-3;
const HUGE_F: f32 = 1.0e+30;
const TWOM100_F: f32 = 7.8886090522e-31; // 2^-100

pub fn expf(x: f32) -> f32 {
    let hx = x.to_bits();
    let xsb = (hx >> 31) as usize;
    let hx = hx & 0x7fff_ffff;

    // |x| >= 88.721 or non-finite
    if hx >= 0x42b1_7218 {
        if hx > 0x7f80_0000 {
            return x + x;
        }
        if hx == 0x7f80_0000 {
            return if xsb == 0 { x } else { 0.0 };
        }
        if x > O_THRESHOLD_F {
            return HUGE_F * HUGE_F;
        }
        if x < U_THRESHOLD_F {
            return TWOM100_F * TWOM100_F;
        }
    }

    let mut x = x;
    let mut k = 0;
    let mut hi = 0.0;
    let mut lo = 0.0;

    if hx > 0x3eb1_7218 {
        if hx < 0x3f85_1592 {
            if xsb == 0 {
                hi = x - LN2HI_F;
                lo = LN2LO_F;
                k = 1;
            } else {
                hi = x + LN2HI_F;
                lo = -LN2LO_F;
                k = -1;
            }
        } else {
            k = (INVLN2_F * x + HALF_F[xsb]) as i32;
            let t = k as f32;
            hi = x - t * LN2HI_F;
            lo = t * LN2LO_F;
        }
        x = hi - lo;
    } else if hx < 0x3900_0000 {
        // |x| < 2^-14
        return 1.0 + x;
    }

    let t = x * x;
    let twopk = if k >= -125 {
        f32::from_bits(((0x7f + k) as u32) << 23)
    } else {
        f32::from_bits(((0x7f + k + 100) as u32) << 23)
    };
    let c = x - t * (P1_F + t * P2_F);
    if k == 0 {
        return 1.0 - ((x * c) / (c - 2.0) - x);
    }
    let y = 1.0 - ((lo - (x * c) / (2.0 - c)) - hi);
    if k >= -125 {
        if k == 128 {
            return y * 2.0 * f32::from_bits(0x7f00_0000);
        }
        y * twopk
    } else {
        y * twopk * TWOM100_F
    }
}

// ========= double-double argument =========

const LNHUGE: f64 = f64::from_bits(0x4086_602b_15b7_ecf2);
const LNTINY: f64 = f64::from_bits(0xc087_7af8_ebea_e354);

/// e^(x + c) for a head `x` and a small tail `c`.
///
/// The tail enters the reduction before the rational form, so a log value
/// carried as two doubles loses nothing when it is exponentiated.
pub(crate) fn exp_dd(x: f64, c: f64) -> f64 {
    if x.is_nan() {
        return x;
    }
    if x > LNHUGE {
        return if x.is_finite() { scalbn(1.0, 5000) } else { x };
    }
    if x < LNTINY {
        return if x.is_finite() { scalbn(1.0, -5000) } else { 0.0 };
    }

    let z = INVLN2 * x;
    let k = (z + copysign(0.5, x)) as i32;

    // (x + c) - k*ln2 as hi - lo
    let hi = x - k as f64 * LN2HI;
    let lo = k as f64 * LN2LO - c;
    let x = hi - lo;

    let z = x * x;
    let c = x - poly(z);
    let c = (x * c) / (2.0 - c);
    scalbn(1.0 + (hi - (lo - c)), k)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exact_and_special_values() {
        assert_eq!(exp(0.0), 1.0);
        assert_eq!(exp(-0.0), 1.0);
        assert_eq!(exp(f64::INFINITY), f64::INFINITY);
        assert_eq!(exp(f64::NEG_INFINITY), 0.0);
        assert!(exp(f64::NAN).is_nan());
        assert_eq!(exp(710.0), f64::INFINITY);
        assert_eq!(exp(-746.0), 0.0);
        assert_eq!(expf(0.0), 1.0);
        assert_eq!(expf(89.0), f32::INFINITY);
        assert_eq!(expf(-104.0), 0.0);
        assert_eq!(expf(f32::NEG_INFINITY), 0.0);
    }

    #[test]
    fn known_values() {
        assert!((exp(1.0) - core::f64::consts::E).abs() <= 4.5e-16);
        assert!((exp(-1.0) - 0.36787944117144233).abs() <= 5.6e-17);
        assert!((exp(10.0) - 22026.465794806718).abs() <= 3.7e-12);
        assert!((exp(0.3) - 1.3498588075760032).abs() <= 2.3e-16);
        assert!((expf(1.0) - core::f32::consts::E).abs() <= 2.4e-7);
    }

    #[test]
    fn subnormal_results_and_the_top_binade() {
        let y = exp(-740.0);
        assert!(y > 0.0 && y < f64::MIN_POSITIVE);
        assert!((y / 4.2e-322 - 1.0).abs() < 0.02);
        let big = exp(709.7);
        assert!(big.is_finite() && big > 1.6e308);
        let yf = expf(-100.0);
        assert!(yf > 0.0 && yf < f32::MIN_POSITIVE);
    }

    #[test]
    fn double_double_entry() {
        assert_eq!(exp_dd(0.0, 0.0), 1.0);
        let a = 1.0;
        let b = 1e-17;
        assert!((exp_dd(a, b) - core::f64::consts::E).abs() <= 4.5e-16);
        assert_eq!(exp_dd(800.0, 0.0), f64::INFINITY);
        assert_eq!(exp_dd(-800.0, 0.0), 0.0);
        assert!(exp_dd(f64::NAN, 0.0).is_nan());
        // the tail is not dropped
        let t = exp_dd(2.0, 1e-10);
        assert!((t - 7.389056099669556).abs() < 2e-15);
    }
}
