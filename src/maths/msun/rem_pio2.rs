#![allow(clippy::needless_range_loop)]

//! Reduction modulo pi/2.
//!
//! `rem_pio2` handles doubles: no reduction up to pi/4, a one-step
//! subtraction below 3pi/4, Cody-Waite with up to three rounds up to
//! 2^19 * pi/2, and Payne-Hanek through [`kernel_rem_pio2`] above that.
//! The kernel is shared with the float and long-double reducers.

use super::two_over_pi::TWO_OVER_PI;
use super::{floor_f64, hi_word, lo_word, scalbn, with_hi_lo};

// High words of n*pi/2 for n = 1..=32; a match means the first Cody-Waite
// round may cancel badly.
const NPIO2_HW: [u32; 32] = [
    0x3ff921fb, 0x400921fb, 0x4012d97c, 0x401921fb, 0x401f6a7a, 0x4022d97c, 0x4025fdbb, 0x402921fb,
    0x402c463a, 0x402f6a7a, 0x4031475c, 0x4032d97c, 0x40346b9c, 0x4035fdbb, 0x40378fdb, 0x403921fb,
    0x403ab41b, 0x403c463a, 0x403dd85a, 0x403f6a7a, 0x40407e4c, 0x4041475c, 0x4042106c, 0x4042d97c,
    0x4043a28c, 0x40446b9c, 0x404534ac, 0x4045fdbb, 0x4046c6cb, 0x40478fdb, 0x404858eb, 0x404921fb,
];

const HALF: f64 = 5.00000000000000000000e-01;
const TWO24: f64 = 1.67772160000000000000e+07;
const TWON24: f64 = 5.96046447753906250000e-08;
const INVPIO2: f64 = f64::from_bits(0x3fe4_5f30_6dc9_c883);

// pi/2 as 33 + 33 + 33 leading bits, each with the tail that follows it.
const PIO2_1: f64 = 1.57079632673412561417e+00; // 0x3FF921FB54400000
const PIO2_1T: f64 = 6.07710050650619224932e-11; // 0x3DD0B4611A626331
const PIO2_2: f64 = 6.07710050630396597660e-11; // 0x3DD0B4611A600000
const PIO2_2T: f64 = 2.02226624879595063154e-21; // 0x3BA3198A2E037073
const PIO2_3: f64 = 2.02226624871116645580e-21; // 0x3BA3198A2E000000
const PIO2_3T: f64 = 8.47842766036889956997e-32; // 0x397B839A252049C1

// Initial number of 2/pi terms for each precision.
const INIT_JK: [usize; 4] = [2, 3, 4, 6];

// pi/2 in 24-bit pieces.
const PIO2_CHUNKS: [f64; 8] = [
    1.57079625129699707031e+00,
    7.54978941586159635335e-08,
    5.39030252995776476554e-15,
    3.28200341580791294123e-22,
    1.27065575308067607349e-29,
    1.22933308981111328932e-36,
    2.73370053816464559624e-44,
    2.16741683877804819444e-51,
];

/// Payne-Hanek reduction of a value given as 24-bit chunks.
///
/// `x` holds integers below 2^24, most significant first, with
/// `input = sum(x[i] * 2^(e0 - 24 i))`. Returns `n mod 8` and the remainder
/// `input - n*pi/2` as one double (`prec` 0), two (`prec` 1 and 2) or three
/// (`prec` 3). Unused slots are zero.
pub(crate) fn kernel_rem_pio2(x: &[f64], e0: i32, prec: usize) -> (i32, [f64; 3]) {
    let mut iq = [0i32; 20];
    let mut f = [0f64; 20];
    let mut fq = [0f64; 20];
    let mut q = [0f64; 20];
    let mut y = [0f64; 3];

    let jk = INIT_JK[prec];
    let jp = jk;

    let jx = x.len() - 1;
    let jv = ((e0 - 3) / 24).max(0);
    let mut q0 = e0 - 24 * (jv + 1);

    // f[0..=jx+jk] with f[jx+jk] = TWO_OVER_PI[jv+jk]
    let mut j = jv - jx as i32;
    for i in 0..=(jx + jk) {
        f[i] = if j < 0 { 0.0 } else { TWO_OVER_PI[j as usize] as f64 };
        j += 1;
    }

    for i in 0..=jk {
        let mut fw = 0.0;
        for jj in 0..=jx {
            fw += x[jj] * f[jx + i - jj];
        }
        q[i] = fw;
    }

    let mut jz = jk;

    loop {
        // distill q[] into iq[] reversingly
        let mut z = q[jz];
        let mut i = 0;
        let mut jj = jz;
        while jj > 0 {
            let fw = ((TWON24 * z) as i32) as f64;
            iq[i] = (z - TWO24 * fw) as i32;
            z = q[jj - 1] + fw;
            i += 1;
            jj -= 1;
        }

        // n = integer part mod 8, z = fraction
        z = scalbn(z, q0);
        z -= 8.0 * floor_f64(z * 0.125);
        let mut n = z as i32;
        z -= n as f64;

        let mut ih = 0;
        if q0 > 0 {
            let i2 = iq[jz - 1] >> (24 - q0);
            n += i2;
            iq[jz - 1] -= i2 << (24 - q0);
            ih = iq[jz - 1] >> (23 - q0);
        } else if q0 == 0 {
            ih = iq[jz - 1] >> 23;
        } else if z >= 0.5 {
            ih = 2;
        }

        // fraction above one half: take 1 - fraction and bump n
        if ih > 0 {
            n += 1;
            let mut carry = 0;
            for i in 0..jz {
                let v = iq[i];
                if carry == 0 {
                    if v != 0 {
                        carry = 1;
                        iq[i] = 0x100_0000 - v;
                    }
                } else {
                    iq[i] = 0xff_ffff - v;
                }
            }
            match q0 {
                1 => iq[jz - 1] &= 0x7f_ffff,
                2 => iq[jz - 1] &= 0x3f_ffff,
                _ => {}
            }
            if ih == 2 {
                z = 1.0 - z;
                if carry != 0 {
                    z -= scalbn(1.0, q0);
                }
            }
        }

        // all bits so far cancelled: pull in more of 2/pi
        if z == 0.0 {
            let mut acc = 0;
            for i in jk..jz {
                acc |= iq[i];
            }
            if acc == 0 {
                let mut k = 1;
                while iq[jk - k] == 0 {
                    k += 1;
                }
                for i in (jz + 1)..=(jz + k) {
                    f[jx + i] = TWO_OVER_PI[jv as usize + i] as f64;
                    let mut fw = 0.0;
                    for jj in 0..=jx {
                        fw += x[jj] * f[jx + i - jj];
                    }
                    q[i] = fw;
                }
                jz += k;
                continue;
            }
        }

        // chop off zero terms
        if z == 0.0 {
            jz -= 1;
            q0 -= 24;
            while iq[jz] == 0 {
                jz -= 1;
                q0 -= 24;
            }
        } else {
            z = scalbn(z, -q0);
            if z >= TWO24 {
                let fw = ((TWON24 * z) as i32) as f64;
                iq[jz] = (z - TWO24 * fw) as i32;
                jz += 1;
                q0 += 24;
                iq[jz] = fw as i32;
            } else {
                iq[jz] = z as i32;
            }
        }

        let mut fw = scalbn(1.0, q0);
        for i in (0..=jz).rev() {
            q[i] = fw * iq[i] as f64;
            fw *= TWON24;
        }

        // fq = PIO2_CHUNKS * q
        for i in (0..=jz).rev() {
            let mut fw = 0.0;
            let mut k = 0;
            while k <= jp && k <= jz - i {
                fw += PIO2_CHUNKS[k] * q[i + k];
                k += 1;
            }
            fq[jz - i] = fw;
        }

        let sign = |v: f64| if ih == 0 { v } else { -v };
        match prec {
            0 => {
                let mut fw = 0.0;
                for i in (0..=jz).rev() {
                    fw += fq[i];
                }
                y[0] = sign(fw);
            }
            1 | 2 => {
                let mut fw = 0.0;
                for i in (0..=jz).rev() {
                    fw += fq[i];
                }
                y[0] = sign(fw);
                let mut fw = fq[0] - fw;
                for i in 1..=jz {
                    fw += fq[i];
                }
                y[1] = sign(fw);
            }
            _ => {
                for i in (1..=jz).rev() {
                    let fw = fq[i - 1] + fq[i];
                    fq[i] += fq[i - 1] - fw;
                    fq[i - 1] = fw;
                }
                for i in (2..=jz).rev() {
                    let fw = fq[i - 1] + fq[i];
                    fq[i] += fq[i - 1] - fw;
                    fq[i - 1] = fw;
                }
                let mut fw = 0.0;
                for i in (2..=jz).rev() {
                    fw += fq[i];
                }
                y = [sign(fq[0]), sign(fq[1]), sign(fw)];
            }
        }
        return (n & 7, y);
    }
}

/// Returns `(n, y0, y1)` with `y0 + y1 ~ x - n*pi/2`, `|y0| <= pi/4` and
/// `y1` the rounding error of `y0`. Infinities and NaN give `(0, NaN, NaN)`.
pub(crate) fn rem_pio2(x: f64) -> (i32, f64, f64) {
    let hx = hi_word(x) as i32;
    let ix = (hx & 0x7fff_ffff) as u32;

    // |x| <= pi/4
    if ix <= 0x3fe9_21fb {
        return (0, x, 0.0);
    }

    // |x| < 3pi/4: n = +-1
    if ix < 0x4002_d97c {
        let s = if hx > 0 { 1.0 } else { -1.0 };
        let z = x - s * PIO2_1;
        let (y0, y1) = if ix != 0x3ff9_21fb {
            let y0 = z - s * PIO2_1T;
            (y0, (z - y0) - s * PIO2_1T)
        } else {
            // near pi/2: use the third piece too
            let z2 = z - s * PIO2_2;
            let y0 = z2 - s * PIO2_2T;
            (y0, (z2 - y0) - s * PIO2_2T)
        };
        return (s as i32, y0, y1);
    }

    // |x| <= 2^19 * pi/2
    if ix <= 0x4139_21fb {
        let t = f64::from_bits(x.to_bits() & 0x7fff_ffff_ffff_ffff);
        let n = (t * INVPIO2 + HALF) as i32;
        let fn_ = n as f64;

        // first round good to 85 bits
        let mut r = t - fn_ * PIO2_1;
        let mut w = fn_ * PIO2_1T;
        let mut y0 = r - w;

        if n >= 32 || ix == NPIO2_HW[(n - 1) as usize] {
            let j = (ix >> 20) as i32;
            let i = j - ((hi_word(y0) >> 20) & 0x7ff) as i32;
            if i > 16 {
                // second round good to 118 bits
                let t2 = r;
                w = fn_ * PIO2_2;
                r = t2 - w;
                w = fn_ * PIO2_2T - ((t2 - r) - w);
                y0 = r - w;
                let i = j - ((hi_word(y0) >> 20) & 0x7ff) as i32;
                if i > 49 {
                    // third round good to 151 bits
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

    if ix >= 0x7ff0_0000 {
        let y = x - x;
        return (0, y, y);
    }

    rem_pio2_large(x)
}

/// Payne-Hanek path for finite |x| of any size.
fn rem_pio2_large(x: f64) -> (i32, f64, f64) {
    let hx = hi_word(x) as i32;
    let ix = (hx & 0x7fff_ffff) as u32;

    // z = |x| scaled to [2^23, 2^24)
    let e0 = (ix >> 20) as i32 - 1046;
    let mut z = with_hi_lo(ix.wrapping_sub((e0 as u32) << 20), lo_word(x));

    let mut tx = [0.0f64; 3];
    for i in 0..2 {
        tx[i] = (z as i32) as f64;
        z = (z - tx[i]) * TWO24;
    }
    tx[2] = z;

    let mut nx = 3;
    while tx[nx - 1] == 0.0 {
        nx -= 1;
    }

    let (n, y) = kernel_rem_pio2(&tx[..nx], e0, 2);
    if hx < 0 {
        (-n, -y[0], -y[1])
    } else {
        (n, y[0], y[1])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::f64::consts::PI;

    #[test]
    fn small_arguments_pass_through() {
        assert_eq!(rem_pio2(0.5), (0, 0.5, 0.0));
        assert_eq!(rem_pio2(-0.25), (0, -0.25, 0.0));
    }

    #[test]
    fn pi_reduces_to_its_rounding_error() {
        let (n, y0, y1) = rem_pio2(PI);
        assert_eq!(n, 2);
        assert!((y0 + 1.2246467991473532e-16).abs() < 1e-31, "{y0:e}");
        assert!(y1.abs() < 1e-32);
        let (n, y0, _) = rem_pio2(-PI);
        assert_eq!(n, -2);
        assert!((y0 - 1.2246467991473532e-16).abs() < 1e-31);
    }

    #[test]
    fn near_half_pi_uses_the_longer_split() {
        let x = core::f64::consts::FRAC_PI_2;
        let (n, y0, _) = rem_pio2(x);
        assert_eq!(n, 1);
        // pi/2 - round(pi/2)
        assert!((y0 + 6.123233995736766e-17).abs() < 1e-32, "{y0:e}");
    }

    #[test]
    fn medium_and_large_paths_agree() {
        let mut x = 1000.0;
        while x < 8.0e5 {
            let (n1, a0, a1) = rem_pio2(x);
            let (n2, b0, b1) = rem_pio2_large(x);
            assert_eq!(n1 & 7, n2 & 7, "{x}");
            assert!(((a0 + a1) - (b0 + b1)).abs() <= 1e-30 + 1e-16 * a0.abs(), "{x}");
            x *= 1.37;
        }
    }

    #[test]
    fn kernel_precisions_are_consistent() {
        // 2^100 as a single chunk
        let tx = [8388608.0];
        let e0 = 100 - 23;
        let (n0, y0) = kernel_rem_pio2(&tx, e0, 0);
        let (n2, y2) = kernel_rem_pio2(&tx, e0, 2);
        let (n3, y3) = kernel_rem_pio2(&tx, e0, 3);
        assert_eq!(n0, n2);
        assert_eq!(n2, n3);
        assert!((y0[0] - y2[0]).abs() <= 1e-15 * y2[0].abs());
        assert!(((y2[0] + y2[1]) - (y3[0] + y3[1])).abs() <= 1e-16 * y2[0].abs());
        assert!(y3[0].abs() <= core::f64::consts::FRAC_PI_4 + 1e-15);
    }

    #[test]
    fn non_finite_is_poisoned() {
        let (n, y0, y1) = rem_pio2(f64::INFINITY);
        assert_eq!(n, 0);
        assert!(y0.is_nan() && y1.is_nan());
        assert!(rem_pio2(f64::NAN).1.is_nan());
    }
}
