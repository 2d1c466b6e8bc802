#![allow(clippy::excessive_precision)]
#![allow(clippy::unusual_byte_groupings)]
#![allow(clippy::approx_constant)]

mod bits;
mod classify;
mod env;
mod exp;
mod expm1;
mod gamma;
mod k_trig;
mod ld;
mod real;
mod rem_pio2;
mod rem_pio2f;
mod sinpi;
mod trig;
mod twosum;
mod two_over_pi;

pub use bits::{
    FloatBits, extract_words, get_float_word, get_high_word, get_low_word, insert_words,
    set_float_word, set_high_word, set_low_word,
};
pub use classify::{
    FP_INFINITE, FP_NAN, FP_NORMAL, FP_SUBNORMAL, FP_ZERO, fpclassify, isfinite, isinf, isnan,
    isnormal, signbit,
};
pub use env::{
    FpResult, Status, cos_status, cospi_status, exp_status, expm1_status, sin_status,
    sinpi_status, tan_status, tanpi_status, tgamma_status,
};
pub use exp::{exp, expf};
pub use expm1::{expm1, expm1f};
pub use gamma::{tgamma, tgammaf};
pub use ld::{
    Ld80, Ld128, LongDouble, cosl, cospil, expl, expm1l, sincosl, sinl, sinpil, tanl, tanpil,
    tgammal,
};
pub use sinpi::{cospi, cospif, sinpi, sinpif, tanpi, tanpif};
pub use trig::{cos, cosf, sin, sincos, sincosf, sinf, tan, tanf};
pub use twosum::{fast_two_sum, three_sum, two_prod, two_sum};

// ========= bit helpers =========

#[inline(always)]
fn f64_from_bits(u: u64) -> f64 {
    f64::from_bits(u)
}
#[inline(always)]
fn f64_to_bits(x: f64) -> u64 {
    x.to_bits()
}

#[inline(always)]
fn hi_word(x: f64) -> u32 {
    (f64_to_bits(x) >> 32) as u32
}
#[inline(always)]
fn lo_word(x: f64) -> u32 {
    (f64_to_bits(x) & 0xffff_ffffu64) as u32
}
#[inline(always)]
fn with_hi_lo(hi: u32, lo: u32) -> f64 {
    f64_from_bits(((hi as u64) << 32) | (lo as u64))
}

#[inline(always)]
fn get_exp_bits(u: u64) -> i32 {
    ((u >> 52) & 0x7ff) as i32
}

#[inline(always)]
fn fabs(x: f64) -> f64 {
    f64_from_bits(f64_to_bits(x) & 0x7fff_ffff_ffff_ffff)
}

#[inline(always)]
fn fabsf(x: f32) -> f32 {
    f32::from_bits(x.to_bits() & 0x7fff_ffff)
}

#[inline(always)]
fn copysign(x: f64, y: f64) -> f64 {
    f64_from_bits((f64_to_bits(x) & 0x7fff_ffff_ffff_ffff) | (f64_to_bits(y) & (1 << 63)))
}

/// scalbn(x, n): multiply by 2^n without calling any libm.
#[inline(always)]
fn scalbn(mut x: f64, n: i32) -> f64 {
    let ux = f64_to_bits(x);
    let e = get_exp_bits(ux);
    if e == 0 {
        if x == 0.0 {
            return x;
        }
        // normalize
        x *= f64_from_bits(0x4350_0000_0000_0000u64); // 2^54
        return scalbn(x, n - 54);
    }
    if e == 0x7ff {
        return x;
    }
    let ne = e + n;
    if ne >= 0x7ff {
        return x * f64::INFINITY;
    }
    if ne <= 0 {
        if ne <= -54 {
            return copysign(0.0, x);
        }
        // go through the multiply so the subnormal result is rounded
        let y = f64_from_bits((ux & 0x800f_ffff_ffff_ffffu64) | (((ne + 54) as u64) << 52));
        return y * f64_from_bits(0x3c90_0000_0000_0000u64); // 2^-54
    }
    f64_from_bits((ux & 0x800f_ffff_ffff_ffffu64) | ((ne as u64) << 52))
}

/// trunc/floor/ceil by masking the fraction bits (no libm).
#[inline(always)]
fn round_toward(x: f64, toward: Toward) -> f64 {
    let u = f64_to_bits(x);
    let neg = u >> 63 == 1;
    let e = get_exp_bits(u);
    if e == 0x7ff {
        return x;
    }
    let j0 = e - 1023;
    if j0 >= 52 {
        return x;
    }
    if j0 < 0 {
        if fabs(x) == 0.0 {
            return x;
        }
        return match toward {
            Toward::Zero => copysign(0.0, x),
            Toward::Down if neg => -1.0,
            Toward::Down => 0.0,
            Toward::Up if neg => -0.0,
            Toward::Up => 1.0,
        };
    }
    let mask = (1u64 << (52 - j0)) - 1;
    if (u & mask) == 0 {
        return x;
    }
    let mut ui = u & !mask;
    let away = match toward {
        Toward::Zero => false,
        Toward::Down => neg,
        Toward::Up => !neg,
    };
    if away {
        ui = ui.wrapping_add(1u64 << (52 - j0));
    }
    f64_from_bits(ui)
}

#[derive(Clone, Copy)]
enum Toward {
    Zero,
    Down,
    Up,
}

#[inline(always)]
fn trunc_f64(x: f64) -> f64 {
    round_toward(x, Toward::Zero)
}

#[inline(always)]
fn floor_f64(x: f64) -> f64 {
    round_toward(x, Toward::Down)
}

#[inline(always)]
fn ceil_f64(x: f64) -> f64 {
    round_toward(x, Toward::Up)
}

/// Round to nearest integer, ties to even, for |x| < 2^52.
#[inline(always)]
fn rnint(x: f64) -> f64 {
    const TOINT: f64 = 4503599627370496.0; // 2^52
    if fabs(x) >= TOINT {
        return x;
    }
    let t = if x < 0.0 { x - TOINT + TOINT } else { x + TOINT - TOINT };
    copysign(t, x)
}
