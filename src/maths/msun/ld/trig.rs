//! sin, cos and tan in long-double precision.

use super::LongDouble;
use super::k_trig::{k_cosl, k_sinl, k_tanl};
use super::rem_pio2::rem_pio2l;

#[inline]
fn quadrant_sin<T: LongDouble>(n: i32, y0: T, y1: T) -> T {
    match n & 3 {
        0 => k_sinl(y0, y1, 1),
        1 => k_cosl(y0, y1),
        2 => -k_sinl(y0, y1, 1),
        _ => -k_cosl(y0, y1),
    }
}

#[inline]
fn quadrant_cos<T: LongDouble>(n: i32, y0: T, y1: T) -> T {
    match n & 3 {
        0 => k_cosl(y0, y1),
        1 => -k_sinl(y0, y1, 1),
        2 => -k_cosl(y0, y1),
        _ => k_sinl(y0, y1, 1),
    }
}

/// sin(x). Zero and subnormal arguments come back unchanged.
pub fn sinl<T: LongDouble>(x: T) -> T {
    let ex = x.biased_exponent();
    if ex == 0 {
        return x;
    }
    if ex == T::exp_max() {
        return (x - x) / (x - x);
    }
    if x.abs() < T::consts().pio4 {
        return k_sinl(x, T::ZERO, 0);
    }
    let (n, y0, y1) = rem_pio2l(x);
    quadrant_sin(n, y0, y1)
}

pub fn cosl<T: LongDouble>(x: T) -> T {
    let ex = x.biased_exponent();
    if ex == 0 {
        return T::ONE;
    }
    if ex == T::exp_max() {
        return (x - x) / (x - x);
    }
    if x.abs() < T::consts().pio4 {
        return k_cosl(x, T::ZERO);
    }
    let (n, y0, y1) = rem_pio2l(x);
    quadrant_cos(n, y0, y1)
}

pub fn tanl<T: LongDouble>(x: T) -> T {
    let ex = x.biased_exponent();
    if ex == 0 {
        return x;
    }
    if ex == T::exp_max() {
        return (x - x) / (x - x);
    }
    if x.abs() < T::consts().pio4 {
        return k_tanl(x, T::ZERO, 1);
    }
    let (n, y0, y1) = rem_pio2l(x);
    k_tanl(y0, y1, 1 - ((n & 1) << 1))
}

/// `(sinl(x), cosl(x))` from one reduction.
pub fn sincosl<T: LongDouble>(x: T) -> (T, T) {
    let ex = x.biased_exponent();
    if ex == 0 {
        return (x, T::ONE);
    }
    if ex == T::exp_max() {
        let y = (x - x) / (x - x);
        return (y, y);
    }
    if x.abs() < T::consts().pio4 {
        return (k_sinl(x, T::ZERO, 0), k_cosl(x, T::ZERO));
    }
    let (n, y0, y1) = rem_pio2l(x);
    (quadrant_sin(n, y0, y1), quadrant_cos(n, y0, y1))
}

#[cfg(test)]
mod tests {
    use super::super::{Ld80, Ld128};
    use crate::maths::msun::real::Real;
    use super::*;
    use crate::msun::{cos, sin, tan};

    fn within(a: f64, b: f64, ulps: f64) -> bool {
        (a - b).abs() <= ulps * f64::EPSILON * b.abs().max(f64::MIN_POSITIVE)
    }

    #[test]
    fn agree_with_double_after_rounding() {
        for &x in &[0.3, -1.0, 2.5, 10.0, -100.0, 12345.678, 1e9, 1e22, -1e300] {
            let l = Ld80::from_f64(x);
            let q = Ld128::from_f64(x);
            assert!(within(sinl(l).to_f64(), sin(x), 2.0), "sinl({x})");
            assert!(within(cosl(q).to_f64(), cos(x), 2.0), "cosl({x})");
            assert!(within(sinl(q).to_f64(), sin(x), 2.0), "sinl({x})");
            assert!(within(cosl(l).to_f64(), cos(x), 2.0), "cosl({x})");
            assert!(within(tanl(l).to_f64(), tan(x), 2.0), "tanl({x})");
            assert!(within(tanl(q).to_f64(), tan(x), 2.0), "tanl({x})");
        }
    }

    #[test]
    fn pythagorean_identity_in_extended() {
        let mut x = Ld80::from_f64(0.1);
        for _ in 0..50 {
            let (s, c) = sincosl(x);
            let e = (s * s + c * c - Ld80::ONE).abs();
            assert!(e.to_f64() < 4.0 * Ld80::EPSILON.to_f64(), "{x:?}");
            x = x * Ld80::from_f64(1.7);
        }
    }

    #[test]
    fn zero_subnormal_and_specials() {
        let nz = -Ld80::ZERO;
        assert!(sinl(nz).is_sign_negative());
        assert!(tanl(nz).is_sign_negative());
        assert_eq!(cosl(nz).to_f64(), 1.0);
        let sub = Ld128::from_bits(1);
        assert_eq!(sinl(sub).to_bits(), 1);
        assert!(sinl(Ld80::INFINITY).is_nan());
        assert!(cosl(Ld128::NEG_INFINITY).is_nan());
        assert!(tanl(Ld128::NAN).is_nan());
        let (s, c) = sincosl(Ld80::NAN);
        assert!(s.is_nan() && c.is_nan());
    }
}
