//! Polynomial kernels on the reduced interval [-pi/4, pi/4].
//!
//! The double kernels take the reduced argument as `x + y` with `y` the
//! tail left by `rem_pio2`. The float kernels are evaluated in double and
//! are accurate to well under one float ulp without a tail.

use super::{hi_word, with_hi_lo};

const HALF: f64 = 5.00000000000000000000e-01;

// sin(x) ~ x + S1*x^3 + ... + S6*x^13, |error| < 2^-58
const S1: f64 = -1.66666666666666324348e-01;
const S2: f64 = 8.33333333332248946124e-03;
const S3: f64 = -1.98412698298579493134e-04;
const S4: f64 = 2.75573137070700676789e-06;
const S5: f64 = -2.50507602534068634195e-08;
const S6: f64 = 1.58969099521155010221e-10;

// cos(x) ~ 1 - x^2/2 + C1*x^4 + ... + C6*x^14
const C1: f64 = 4.16666666666666019037e-02;
const C2: f64 = -1.38888888888741095749e-03;
const C3: f64 = 2.48015872894767294178e-05;
const C4: f64 = -2.75573143513906633035e-07;
const C5: f64 = 2.08757232129817482790e-09;
const C6: f64 = -1.13596475577881948265e-11;

// tan(x) ~ x + T[0]*x^3 + ... + T[12]*x^27 on [0, 0.67434]
const T: [f64; 13] = [
    3.33333333333334091986e-01,
    1.33333333333201242699e-01,
    5.39682539762260521377e-02,
    2.18694882948595424599e-02,
    8.86323982359930005737e-03,
    3.59207910759131235356e-03,
    1.45620945432529025516e-03,
    5.88041240820264096874e-04,
    2.46463134818469906812e-04,
    7.81794442939557092300e-05,
    7.14072491382608190305e-05,
    -1.85586374855275456654e-05,
    2.59073051863633712884e-05,
];
const PIO4: f64 = 7.85398163397448278999e-01;
const PIO4LO: f64 = 3.06161699786838301793e-17;

/// sin(x + y) for |x| <= pi/4. `iy == 0` means `y` is zero.
#[inline(always)]
pub(crate) fn k_sin(x: f64, y: f64, iy: i32) -> f64 {
    let z = x * x;
    let w = z * z;
    let r = S2 + z * (S3 + z * S4) + z * w * (S5 + z * S6);
    let v = z * x;
    if iy == 0 {
        x + v * (S1 + z * r)
    } else {
        x - ((z * (HALF * y - v * r) - y) - v * S1)
    }
}

/// cos(x + y) for |x| <= pi/4.
#[inline(always)]
pub(crate) fn k_cos(x: f64, y: f64) -> f64 {
    let z = x * x;
    let w = z * z;
    let r = z * (C1 + z * (C2 + z * C3)) + w * w * (C4 + z * (C5 + z * C6));
    let hz = HALF * z;
    let w = 1.0 - hz;
    w + (((1.0 - w) - hz) + (z * r - x * y))
}

/// tan(x + y) when `iy == 1`, -1/tan(x + y) when `iy == -1`.
///
/// Above |x| = 0.6744 the argument is reflected through pi/4 so the
/// polynomial only sees small values.
pub(crate) fn k_tan(mut x: f64, mut y: f64, iy: i32) -> f64 {
    let hx = hi_word(x) as i32;
    let ix = hx & 0x7fff_ffff;
    let big = ix >= 0x3fe5_9428;
    if big {
        if hx < 0 {
            x = -x;
            y = -y;
        }
        let z = PIO4 - x;
        let w = PIO4LO - y;
        x = z + w;
        y = 0.0;
    }
    let z = x * x;
    let w = z * z;
    // odd and even terms split to shorten the dependency chain
    let r = T[1] + w * (T[3] + w * (T[5] + w * (T[7] + w * (T[9] + w * T[11]))));
    let v = z * (T[2] + w * (T[4] + w * (T[6] + w * (T[8] + w * (T[10] + w * T[12])))));
    let s = z * x;
    let mut r = y + z * (s * (r + v) + y);
    r += T[0] * s;
    let w = x + r;
    if big {
        let v = iy as f64;
        let sign = (1 - ((hx >> 30) & 2)) as f64;
        return sign * (v - 2.0 * (x - (w * w / (w + v) - r)));
    }
    if iy == 1 {
        return w;
    }
    // -1/(x + r) without losing the low bits of w
    let z = with_hi_lo(hi_word(w), 0);
    let v = r - (z - x);
    let a = -1.0 / w;
    let t = with_hi_lo(hi_word(a), 0);
    let s = 1.0 + t * z;
    t + a * (s + t * v)
}

// |sin(x)/x - s(x)| < 2^-37.5 on [-pi/4, pi/4]
const FS1: f64 = f64::from_bits(0xbfc5_5555_54cb_ac77);
const FS2: f64 = f64::from_bits(0x3f81_1110_896e_fbb2);
const FS3: f64 = f64::from_bits(0xbf2a_00f9_e2ca_e774);
const FS4: f64 = f64::from_bits(0x3ec6_cd87_8c3b_46a7);

// |cos(x) - c(x)| < 2^-34.1
const FC0: f64 = f64::from_bits(0xbfdf_ffff_fd0c_5e81);
const FC1: f64 = f64::from_bits(0x3fa5_5553_e105_3a42);
const FC2: f64 = f64::from_bits(0xbf56_c087_e80f_1e27);
const FC3: f64 = f64::from_bits(0x3ef9_9342_e0ee_5069);

// |tan(x)/x - t(x)| < 2^-29.1
const FT: [f64; 6] = [
    f64::from_bits(0x3fd5_554d_3418_c99f),
    f64::from_bits(0x3fc1_12fd_3899_9f72),
    f64::from_bits(0x3fab_54c9_1d86_5afe),
    f64::from_bits(0x3f99_1df3_908c_33ce),
    f64::from_bits(0x3f68_5dad_fcec_f44e),
    f64::from_bits(0x3f83_62b9_bf97_1bcd),
];

#[inline(always)]
pub(crate) fn k_sindf(x: f64) -> f32 {
    let z = x * x;
    let w = z * z;
    let r = FS3 + z * FS4;
    let s = z * x;
    ((x + s * (FS1 + z * FS2)) + s * w * r) as f32
}

#[inline(always)]
pub(crate) fn k_cosdf(x: f64) -> f32 {
    let z = x * x;
    let w = z * z;
    let r = FC2 + z * FC3;
    (((1.0 + z * FC0) + w * FC1) + (w * z) * r) as f32
}

/// tan(x), or -1/tan(x) when `odd` is set.
#[inline(always)]
pub(crate) fn k_tandf(x: f64, odd: bool) -> f32 {
    let z = x * x;
    let r = FT[4] + z * FT[5];
    let t = FT[2] + z * FT[3];
    let w = z * z;
    let s = z * x;
    let u = FT[0] + z * FT[1];
    let r = (x + s * u) + (s * w) * (t + w * r);
    if odd { (-1.0 / r) as f32 } else { r as f32 }
}
