//! Reduction of a long double modulo pi/2.
//!
//! Cody-Waite with three rounds below `medium_limit`; above it the value
//! is cut into 24-bit chunks for the shared Payne-Hanek kernel.

use super::super::rem_pio2::kernel_rem_pio2;
use super::LongDouble;
use super::soft::BIAS;

/// Returns `(n, y0, y1)` with `y0 + y1 ~ x - n*pi/2`. Only `n mod 4` is
/// meaningful for large arguments. Infinities and NaN give NaN and `n = 0`.
pub(crate) fn rem_pio2l<T: LongDouble>(x: T) -> (i32, T, T) {
    let c = T::consts();
    let ex = x.biased_exponent();

    if x.abs() < c.medium_limit {
        let f = (x * c.invpio2).rnint();
        let n = f.to_i64() as i32;
        let mut r = x - f * c.pio2_1;
        let mut w = f * c.pio2_1t;
        let mut y0 = r - w;

        // bits lost to cancellation so far
        let lost = |y: T| ex as i32 - y.biased_exponent() as i32;
        if lost(y0) > c.round2 as i32 {
            let t = r;
            w = f * c.pio2_2;
            r = t - w;
            w = f * c.pio2_2t - ((t - r) - w);
            y0 = r - w;
            if lost(y0) > c.round3 as i32 {
                let t = r;
                w = f * c.pio2_3;
                r = t - w;
                w = f * c.pio2_3t - ((t - r) - w);
                y0 = r - w;
            }
        }
        return (n, y0, (r - y0) - w);
    }

    if ex == T::exp_max() {
        let y = x - x;
        return (0, y, y);
    }

    // |x| = z * 2^e0 with z in [2^23, 2^24)
    let e0 = ex as i32 - BIAS - 23;
    let mut z = x.abs().scalbn(-e0);
    let two24 = T::from_f64(16777216.0);
    let mut tx = [0.0f64; 5];
    for t in tx.iter_mut().take(c.chunks - 1) {
        *t = z.trunc().to_f64();
        z = (z - T::from_f64(*t)) * two24;
    }
    tx[c.chunks - 1] = z.to_f64();
    let mut nx = c.chunks;
    while nx > 1 && tx[nx - 1] == 0.0 {
        nx -= 1;
    }

    let (n, ty) = kernel_rem_pio2(&tx[..nx], e0, c.large_prec);
    let (r, w) = if c.large_prec == 3 {
        let t = T::from_f64(ty[2]) + T::from_f64(ty[1]);
        let r = t + T::from_f64(ty[0]);
        (r, T::from_f64(ty[0]) - (r - t))
    } else {
        let r = T::from_f64(ty[0]) + T::from_f64(ty[1]);
        (r, T::from_f64(ty[1]) - (r - T::from_f64(ty[0])))
    };
    if x.sign() { (-n, -r, -w) } else { (n, r, w) }
}

#[cfg(test)]
mod tests {
    use super::super::{Ld80, Ld128};
    use crate::maths::msun::real::Real;
    use super::*;

    fn sum<T: Real>(y0: T, y1: T) -> f64 {
        (y0 + y1).to_f64()
    }

    #[test]
    fn medium_range_matches_double_reduction() {
        for &x in &[0.9, 2.0, -7.5, 100.0, 1e5, -3.0e7] {
            let (m, d0, d1) = super::super::super::rem_pio2::rem_pio2(x);
            let (n, y0, y1) = rem_pio2l(Ld80::from_f64(x));
            assert_eq!(n & 3, m & 3, "{x}");
            assert!((sum(y0, y1) - (d0 + d1)).abs() <= 1e-15, "{x}");
            let (n, y0, y1) = rem_pio2l(Ld128::from_f64(x));
            assert_eq!(n & 3, m & 3, "{x}");
            assert!((sum(y0, y1) - (d0 + d1)).abs() <= 1e-15, "{x}");
        }
    }

    #[test]
    fn large_range_matches_double_reduction() {
        for &x in &[1e10, -1e22, 1e100, 1.7e308] {
            let (m, d0, d1) = super::super::super::rem_pio2::rem_pio2(x);
            let (n, y0, y1) = rem_pio2l(Ld80::from_f64(x));
            assert_eq!(n & 3, m & 3, "{x}");
            assert!((sum(y0, y1) - (d0 + d1)).abs() <= 1e-15, "{x}");
            let (n, y0, y1) = rem_pio2l(Ld128::from_f64(x));
            assert_eq!(n & 3, m & 3, "{x}");
            assert!((sum(y0, y1) - (d0 + d1)).abs() <= 1e-15, "{x}");
        }
    }

    #[test]
    fn beyond_double_range() {
        let x = Ld80::ONE.scalbn(16000);
        let (_, y0, _) = rem_pio2l(x);
        assert!(y0.abs().to_f64() <= core::f64::consts::FRAC_PI_4 + 1e-15);
        let x = Ld128::ONE.scalbn(16300);
        let (_, y0, _) = rem_pio2l(x);
        assert!(y0.abs().to_f64() <= core::f64::consts::FRAC_PI_4 + 1e-15);
    }

    #[test]
    fn poison() {
        let (n, y0, y1) = rem_pio2l(Ld80::INFINITY);
        assert_eq!(n, 0);
        assert!(y0.is_nan() && y1.is_nan());
        assert!(rem_pio2l(Ld128::NAN).1.is_nan());
    }
}
