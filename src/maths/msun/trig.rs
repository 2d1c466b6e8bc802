//! sin, cos and tan for float and double.
//!
//! Each function reduces with `rem_pio2` (or `rem_pio2f`) and dispatches on
//! the quadrant `n & 3` to the kernels in `k_trig`. Infinities and NaN give
//! NaN.

use super::hi_word;
use super::k_trig::{k_cos, k_cosdf, k_sin, k_sindf, k_tan, k_tandf};
use super::rem_pio2::rem_pio2;
use super::rem_pio2f::rem_pio2f;

#[inline]
fn quadrant_sin(n: i32, y0: f64, y1: f64) -> f64 {
    match n & 3 {
        0 => k_sin(y0, y1, 1),
        1 => k_cos(y0, y1),
        2 => -k_sin(y0, y1, 1),
        _ => -k_cos(y0, y1),
    }
}

#[inline]
fn quadrant_cos(n: i32, y0: f64, y1: f64) -> f64 {
    match n & 3 {
        0 => k_cos(y0, y1),
        1 => -k_sin(y0, y1, 1),
        2 => -k_cos(y0, y1),
        _ => k_sin(y0, y1, 1),
    }
}

pub fn sin(x: f64) -> f64 {
    let ix = hi_word(x) & 0x7fff_ffff;

    // |x| ~< pi/4
    if ix <= 0x3fe9_21fb {
        if ix < 0x3e50_0000 && (x as i32) == 0 {
            // |x| < 2^-26
            return x;
        }
        return k_sin(x, 0.0, 0);
    }

    if ix >= 0x7ff0_0000 {
        return x - x;
    }

    let (n, y0, y1) = rem_pio2(x);
    quadrant_sin(n, y0, y1)
}

pub fn cos(x: f64) -> f64 {
    let ix = hi_word(x) & 0x7fff_ffff;

    if ix <= 0x3fe9_21fb {
        if ix < 0x3e46_a09e && (x as i32) == 0 {
            // |x| < 2^-27 * sqrt(2)
            return 1.0;
        }
        return k_cos(x, 0.0);
    }

    if ix >= 0x7ff0_0000 {
        return x - x;
    }

    let (n, y0, y1) = rem_pio2(x);
    quadrant_cos(n, y0, y1)
}

pub fn tan(x: f64) -> f64 {
    let ix = hi_word(x) & 0x7fff_ffff;

    if ix <= 0x3fe9_21fb {
        if ix < 0x3e40_0000 && (x as i32) == 0 {
            return x;
        }
        return k_tan(x, 0.0, 1);
    }

    if ix >= 0x7ff0_0000 {
        return x - x;
    }

    // 1 for even n, -1 for odd n
    let (n, y0, y1) = rem_pio2(x);
    k_tan(y0, y1, 1 - ((n & 1) << 1))
}

/// `(sin(x), cos(x))` from a single reduction.
pub fn sincos(x: f64) -> (f64, f64) {
    let ix = hi_word(x) & 0x7fff_ffff;

    if ix <= 0x3fe9_21fb {
        if ix < 0x3e46_a09e && (x as i32) == 0 {
            return (x, 1.0);
        }
        return (k_sin(x, 0.0, 0), k_cos(x, 0.0));
    }

    if ix >= 0x7ff0_0000 {
        let y = x - x;
        return (y, y);
    }

    let (n, y0, y1) = rem_pio2(x);
    (quadrant_sin(n, y0, y1), quadrant_cos(n, y0, y1))
}

// Float versions evaluate the kernels in double on y0 + y1.

#[inline]
fn reduce_f(x: f32) -> (i32, f64) {
    let (n, y0, y1) = rem_pio2f(x);
    (n, y0 as f64 + y1 as f64)
}

pub fn sinf(x: f32) -> f32 {
    let ix = x.to_bits() & 0x7fff_ffff;

    if ix <= 0x3f49_0fda {
        if ix < 0x3980_0000 {
            // |x| < 2^-12
            return x;
        }
        return k_sindf(x as f64);
    }

    if ix >= 0x7f80_0000 {
        return x - x;
    }

    let (n, y) = reduce_f(x);
    match n & 3 {
        0 => k_sindf(y),
        1 => k_cosdf(y),
        2 => k_sindf(-y),
        _ => -k_cosdf(y),
    }
}

pub fn cosf(x: f32) -> f32 {
    let ix = x.to_bits() & 0x7fff_ffff;

    if ix <= 0x3f49_0fda {
        if ix < 0x3980_0000 {
            return 1.0;
        }
        return k_cosdf(x as f64);
    }

    if ix >= 0x7f80_0000 {
        return x - x;
    }

    let (n, y) = reduce_f(x);
    match n & 3 {
        0 => k_cosdf(y),
        1 => k_sindf(-y),
        2 => -k_cosdf(y),
        _ => k_sindf(y),
    }
}

pub fn tanf(x: f32) -> f32 {
    let ix = x.to_bits() & 0x7fff_ffff;

    if ix <= 0x3f49_0fda {
        if ix < 0x3980_0000 {
            return x;
        }
        return k_tandf(x as f64, false);
    }

    if ix >= 0x7f80_0000 {
        return x - x;
    }

    let (n, y) = reduce_f(x);
    k_tandf(y, n & 1 != 0)
}

pub fn sincosf(x: f32) -> (f32, f32) {
    let ix = x.to_bits() & 0x7fff_ffff;

    if ix <= 0x3f49_0fda {
        if ix < 0x3980_0000 {
            return (x, 1.0);
        }
        return (k_sindf(x as f64), k_cosdf(x as f64));
    }

    if ix >= 0x7f80_0000 {
        let y = x - x;
        return (y, y);
    }

    let (n, y) = reduce_f(x);
    let (s, c) = (k_sindf(y), k_cosdf(y));
    match n & 3 {
        0 => (s, c),
        1 => (c, -s),
        2 => (-s, -c),
        _ => (-c, s),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sin_cos_identity() {
        for i in 0..1000 {
            let x = (i as f64) * 0.1;
            let s = sin(x);
            let c = cos(x);
            let identity = s * s + c * c;
            assert!(
                (identity - 1.0).abs() < 1e-15,
                "Identity failed for x={x}: got {identity}"
            );
        }
    }

    #[test]
    fn sincos_matches_separate_calls() {
        for &x in &[-1e22, -7.5, -0.3, 0.0, 1e-300, 0.7853981633974483, 2.0, 1e6, 1e300] {
            assert_eq!(sincos(x), (sin(x), cos(x)), "{x}");
        }
        for &x in &[-1e30f32, -7.5, 0.3, 2.0, 1e6] {
            assert_eq!(sincosf(x), (sinf(x), cosf(x)), "{x}");
        }
    }

    #[test]
    fn huge_argument() {
        // sin(1e22) and cos(1e22) rounded to nearest
        assert!((sin(1e22) + 0.8522008497671888).abs() < 2e-16);
        assert!((cos(1e22) - 0.523214785395139).abs() < 2e-16);
    }

    #[test]
    fn signed_zero_and_specials() {
        assert!(sin(-0.0).is_sign_negative());
        assert!(tan(-0.0).is_sign_negative());
        assert_eq!(cos(-0.0), 1.0);
        assert!(sin(f64::INFINITY).is_nan());
        assert!(cosf(f32::NEG_INFINITY).is_nan());
        assert!(tanf(f32::NAN).is_nan());
    }

    #[test]
    fn tan_quadrants() {
        assert!((tan(1.0) - 1.5574077246549023).abs() < 4e-16);
        assert!((tan(2.0) + 2.185039863261519).abs() < 1e-15);
        assert!((tanf(2.0) + 2.185_04f32).abs() < 1e-6);
    }
}
