//! Half-cycle trigonometry: sin(pi x), cos(pi x) and tan(pi x).
//!
//! No reduction by pi is needed; the fractional part of |x| is exact, so
//! these are accurate for every finite input and exact at the integers
//! and half-integers. The fraction is split on the quarter points and the
//! product with pi is formed as a double-double before calling the
//! ordinary kernels.

use super::k_trig::{k_cos, k_cosdf, k_sin, k_sindf, k_tan, k_tandf};
use super::twosum::fast_two_sum;
use super::{copysign, fabsf, floor_f64, hi_word, lo_word, with_hi_lo};

// pi = PI_HI + PI_LO with PI_HI holding 25 bits
const PI_HI: f64 = f64::from_bits(0x4009_21fb_5800_0000);
const PI_LO: f64 = -2.7818135228334233e-08;

const TWO53: f64 = 9007199254740992.0;
const TWOM53: f64 = 1.1102230246251565e-16;

/// `(hi, lo)` with `hi + lo ~ pi * x`, `hi` rounded from `x`'s leading 24
/// bits so the product with `PI_HI` is exact.
#[inline(always)]
fn mul_pi(x: f64) -> (f64, f64) {
    let hi = (x as f32) as f64;
    let lo = (x - hi) * (PI_LO + PI_HI) + hi * PI_LO;
    fast_two_sum(hi * PI_HI, lo)
}

#[inline(always)]
fn kernel_sinpi(x: f64) -> f64 {
    let (hi, lo) = mul_pi(x);
    k_sin(hi, lo, 1)
}

#[inline(always)]
fn kernel_cospi(x: f64) -> f64 {
    let (hi, lo) = mul_pi(x);
    k_cos(hi, lo)
}

/// tan(pi x) for 0 <= x <= 1/4 and, through the cotangent, up to 1/2.
#[inline(always)]
fn kernel_tanpi(x: f64) -> f64 {
    if x < 0.25 {
        let (hi, lo) = mul_pi(x);
        k_tan(hi, lo, 1)
    } else if x > 0.25 {
        let (hi, lo) = mul_pi(0.5 - x);
        -k_tan(hi, lo, -1)
    } else {
        1.0
    }
}

/// pi * x for |x| < 2^-29, scaled away from the subnormal range.
#[inline(always)]
fn tiny_pi_mul(x: f64, hx: u32) -> f64 {
    let hi = with_hi_lo(hx, 0) * TWO53;
    let lo = x * TWO53 - hi;
    ((PI_LO + PI_HI) * lo + PI_LO * hi + PI_HI * hi) * TWOM53
}

/// Splits finite `|x| < 2^53` into its integer part and fraction.
#[inline(always)]
fn split_int(ax: f64) -> (f64, f64) {
    let j = floor_f64(ax);
    (j, ax - j)
}

#[inline(always)]
fn is_odd(j: f64) -> bool {
    (j as u64) & 1 == 1
}

pub fn sinpi(x: f64) -> f64 {
    let hx = hi_word(x);
    let ix = hx & 0x7fff_ffff;
    let ax = with_hi_lo(ix, lo_word(x));
    let neg = hx & 0x8000_0000 != 0;

    // |x| < 1
    if ix < 0x3ff0_0000 {
        if ix < 0x3fd0_0000 {
            if ix < 0x3e20_0000 {
                if x == 0.0 {
                    return x;
                }
                return tiny_pi_mul(x, hx);
            }
            let s = kernel_sinpi(ax);
            return if neg { -s } else { s };
        }
        let s = sinpi_frac(ax);
        return if neg { -s } else { s };
    }

    // 1 <= |x| < 2^53
    if ix < 0x4340_0000 {
        let (j, r) = split_int(ax);
        let mut s = if r == 0.0 { 0.0 } else { sinpi_frac(r) };
        if r != 0.0 && is_odd(j) {
            s = -s;
        }
        return if neg { -s } else { s };
    }

    if ix >= 0x7ff0_0000 {
        return (x - x) / (x - x);
    }

    // every larger double is an even integer
    copysign(0.0, x)
}

/// sin(pi r) for 1/4 <= r < 1, and for any r in (0, 1) away from the
/// integer branch.
#[inline(always)]
fn sinpi_frac(r: f64) -> f64 {
    let ir = hi_word(r);
    if ir < 0x3fd0_0000 {
        kernel_sinpi(r)
    } else if ir < 0x3fe0_0000 {
        kernel_cospi(0.5 - r)
    } else if ir < 0x3fe8_0000 {
        kernel_cospi(r - 0.5)
    } else {
        kernel_sinpi(1.0 - r)
    }
}

pub fn cospi(x: f64) -> f64 {
    let hx = hi_word(x);
    let ix = hx & 0x7fff_ffff;
    let ax = with_hi_lo(ix, lo_word(x));

    if ix < 0x3ff0_0000 {
        if ix < 0x3fd0_0000 {
            if ix < 0x3e20_0000 && (ax as i32) == 0 {
                return 1.0;
            }
            return kernel_cospi(ax);
        }
        return cospi_frac(ax);
    }

    if ix < 0x4340_0000 {
        let (j, r) = split_int(ax);
        if r == 0.5 {
            return 0.0;
        }
        let c = if r == 0.0 { 1.0 } else { cospi_frac(r) };
        return if is_odd(j) { -c } else { c };
    }

    if ix >= 0x7ff0_0000 {
        return (x - x) / (x - x);
    }

    1.0
}

#[inline(always)]
fn cospi_frac(r: f64) -> f64 {
    let ir = hi_word(r);
    if ir < 0x3fd0_0000 {
        kernel_cospi(r)
    } else if ir < 0x3fe0_0000 {
        kernel_sinpi(0.5 - r)
    } else if ir < 0x3fe8_0000 {
        if r == 0.5 {
            return 0.0;
        }
        -kernel_sinpi(r - 0.5)
    } else {
        -kernel_cospi(1.0 - r)
    }
}

/// tan(pi x). Half-integers give an infinity, integers a zero, both
/// signed by the parity of the integer part and the sign of `x`.
pub fn tanpi(x: f64) -> f64 {
    let hx = hi_word(x);
    let ix = hx & 0x7fff_ffff;
    let ax = with_hi_lo(ix, lo_word(x));
    let neg = hx & 0x8000_0000 != 0;

    if ix < 0x3ff0_0000 {
        let t = if ix < 0x3fe0_0000 {
            if ix < 0x3e20_0000 {
                if x == 0.0 {
                    return x;
                }
                return tiny_pi_mul(x, hx);
            }
            kernel_tanpi(ax)
        } else if ax == 0.5 {
            f64::INFINITY
        } else {
            -kernel_tanpi(1.0 - ax)
        };
        return if neg { -t } else { t };
    }

    if ix < 0x4340_0000 {
        let (j, r) = split_int(ax);
        let odd = if is_odd(j) { -1.0 } else { 1.0 };
        let t = if r == 0.0 {
            copysign(0.0, odd)
        } else if r < 0.5 {
            kernel_tanpi(r)
        } else if r == 0.5 {
            odd / 0.0
        } else {
            -kernel_tanpi(1.0 - r)
        };
        return if neg { -t } else { t };
    }

    if ix >= 0x7ff0_0000 {
        return (x - x) / (x - x);
    }

    copysign(0.0, x)
}

// ========= float =========

const PI: f64 = core::f64::consts::PI;
const TWO24F: f32 = 16777216.0;

/// Integer part parity and fraction of a finite |x|.
#[inline(always)]
fn split_int_f(ax: f32) -> (bool, f32) {
    if ax < TWO24F {
        let j = ax as i32;
        (j & 1 == 1, ax - j as f32)
    } else {
        (false, 0.0)
    }
}

#[inline(always)]
fn sinpif_frac(r: f32) -> f32 {
    let r = r as f64;
    if r < 0.25 {
        k_sindf(PI * r)
    } else if r < 0.5 {
        k_cosdf(PI * (0.5 - r))
    } else if r < 0.75 {
        k_cosdf(PI * (r - 0.5))
    } else {
        k_sindf(PI * (1.0 - r))
    }
}

pub fn sinpif(x: f32) -> f32 {
    let ax = fabsf(x);
    if ax.to_bits() >= 0x7f80_0000 {
        return (x - x) / (x - x);
    }
    if x == 0.0 {
        return x;
    }
    let (odd, r) = split_int_f(ax);
    let mut s = if r == 0.0 { 0.0 } else { sinpif_frac(r) };
    if odd && r != 0.0 {
        s = -s;
    }
    if x < 0.0 { -s } else { s }
}

pub fn cospif(x: f32) -> f32 {
    let ax = fabsf(x);
    if ax.to_bits() >= 0x7f80_0000 {
        return (x - x) / (x - x);
    }
    let (odd, r) = split_int_f(ax);
    let rd = r as f64;
    let c = if rd < 0.25 {
        k_cosdf(PI * rd)
    } else if rd < 0.5 {
        k_sindf(PI * (0.5 - rd))
    } else if rd == 0.5 {
        return 0.0;
    } else if rd < 0.75 {
        -k_sindf(PI * (rd - 0.5))
    } else {
        -k_cosdf(PI * (1.0 - rd))
    };
    if odd { -c } else { c }
}

pub fn tanpif(x: f32) -> f32 {
    let ax = fabsf(x);
    if ax.to_bits() >= 0x7f80_0000 {
        return (x - x) / (x - x);
    }
    if x == 0.0 {
        return x;
    }
    let (odd, r) = split_int_f(ax);
    let rd = r as f64;
    let t = if r == 0.0 {
        if odd { -0.0 } else { 0.0 }
    } else if rd < 0.25 {
        k_tandf(PI * rd, false)
    } else if rd == 0.25 {
        1.0
    } else if rd < 0.5 {
        -k_tandf(PI * (0.5 - rd), true)
    } else if rd == 0.5 {
        if odd { f32::NEG_INFINITY } else { f32::INFINITY }
    } else if rd < 0.75 {
        k_tandf(PI * (rd - 0.5), true)
    } else if rd == 0.75 {
        -1.0
    } else {
        -k_tandf(PI * (1.0 - rd), false)
    };
    if x < 0.0 { -t } else { t }
}
