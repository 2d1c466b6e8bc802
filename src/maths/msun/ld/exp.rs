//! e^x and e^x - 1 in long-double precision, Tang's table-driven method.
//!
//! x = k*ln2 + j*ln2/128 + r with |r| <= ln2/256; e^x is
//! 2^k * 2^(j/128) * e^r with 2^(j/128) from a head/tail table and
//! e^r - 1 from a short polynomial. ln2/128 is split as `l1 + l2` so that
//! `n * l1` is exact.

use super::super::real::horner;
use super::LongDouble;
use super::soft::{BIAS, EMAX, EMIN};

/// 2^e for `e` in the normal range.
#[inline]
fn pow2<T: LongDouble>(e: i32) -> T {
    let int_bit = if T::EXPLICIT_INT {
        1u128 << (T::MANT_BITS - 1)
    } else {
        0
    };
    T::from_fields(false, (BIAS + e) as u32, int_bit)
}

#[inline]
fn huge<T: LongDouble>() -> T {
    pow2(10000)
}

#[inline]
fn tiny<T: LongDouble>() -> T {
    pow2(-10000)
}

/// `(hi, lo, k)` with `2^k * (hi + lo) ~ e^(x + tail)`.
fn k_expl<T: LongDouble>(x: T, tail: T) -> (T, T, i32) {
    let c = T::consts();
    let f = (x * c.inv_l).rnint();
    let n = f.to_i64() as i32;
    let j = n.rem_euclid(128) as usize;
    let k = n >> 7;

    let r1 = x - f * c.l1;
    let r2 = tail - f * c.l2;
    let r = r1 + r2;
    let q = r2 + r * r * horner(r, c.exp_poly);

    let [hi, lo] = c.exp_tbl[j];
    let t = lo + hi;
    (hi, lo + t * (q + r1), k)
}

/// `t * 2^k`, going through 2^10000 when the result is subnormal.
fn scale<T: LongDouble>(t: T, k: i32) -> T {
    if k > EMIN {
        if k == EMAX + 1 {
            return t * T::TWO * pow2(EMAX);
        }
        t * pow2(k)
    } else {
        t * pow2(k + 10000) * pow2(-10000)
    }
}

pub fn expl<T: LongDouble>(x: T) -> T {
    let c = T::consts();
    if !x.is_finite() {
        if x.sign() {
            // -Inf, or a NaN with the sign bit set
            return -T::ONE / x;
        }
        return x + x;
    }
    if x > c.o_threshold {
        return huge::<T>() * huge();
    }
    if x < c.u_threshold {
        return tiny::<T>() * tiny();
    }
    if x.abs() < T::ONE.scalbn(-(T::MANT_DIG as i32) - 2) {
        return T::ONE + x;
    }

    let (hi, lo, k) = k_expl(x, T::ZERO);
    scale(hi + lo, k)
}

/// e^(a + b) with `b` a tail well below the ulp of `a`.
pub(crate) fn exp_dd<T: LongDouble>(a: T, b: T) -> T {
    let c = T::consts();
    if a.is_nan() {
        return a;
    }
    if a > c.o_threshold {
        return if a.is_finite() { huge::<T>() * huge() } else { a };
    }
    if a < c.u_threshold {
        return if a.is_finite() { tiny::<T>() * tiny() } else { T::ZERO };
    }
    let (hi, lo, k) = k_expl(a, b);
    scale(hi + lo, k)
}

pub fn expm1l<T: LongDouble>(x: T) -> T {
    let c = T::consts();
    if !x.is_finite() {
        if x.sign() {
            return -T::ONE / x - T::ONE;
        }
        return x + x;
    }
    if x > c.o_threshold {
        return huge::<T>() * huge();
    }
    // e^x is below half an ulp of 1
    if x < T::from_i32(-(T::MANT_DIG as i32) - 2) {
        return tiny::<T>() - T::ONE;
    }

    let ax = x.abs();
    if ax < c.expm1_bound {
        if ax < T::ONE.scalbn(-(T::MANT_DIG as i32)) {
            return x;
        }
        let x2 = x * x;
        let q = x2 * x * horner(x, c.expm1_poly);

        // x + x^2/2 with the square formed exactly from the split
        let x_hi = x.split_hi();
        let x_lo = x - x_hi;
        let hx2_hi = x_hi * x_hi * T::HALF;
        let hx2_lo = x_lo * (x + x_hi) * T::HALF;
        if ax >= T::ONE.scalbn(-7) {
            return (hx2_hi + x_hi) + (hx2_lo + x_lo + q);
        }
        return x + (hx2_lo + q + hx2_hi);
    }

    let f = (x * c.inv_l).rnint();
    let n = f.to_i64() as i32;
    let j = n.rem_euclid(128) as usize;
    let k = n >> 7;
    let r1 = x - f * c.l1;
    let r2 = -(f * c.l2);
    let r = r1 + r2;
    let q = r2 + r * r * horner(r, c.exp_poly);

    let [hi, lo] = c.exp_tbl[j];
    let t = lo + hi;
    let p = T::MANT_DIG as i32;

    if k == 0 {
        return (hi - T::ONE) + (lo * (r1 + T::ONE) + t * q + hi * r1);
    }
    if k == -1 {
        return ((hi - T::TWO) + (lo * (r1 + T::ONE) + t * q + hi * r1)) * T::HALF;
    }
    if k < -7 {
        return (hi + (lo + t * (q + r1))) * pow2(k) - T::ONE;
    }
    if k > 2 * p - 1 {
        let s = hi + (lo + t * (q + r1));
        if k == EMAX + 1 {
            return s * T::TWO * pow2(EMAX) - T::ONE;
        }
        return s * pow2(k) - T::ONE;
    }

    // subtract one at the scale where it does not cancel
    let twomk: T = pow2(-k);
    let s = if k > p - 1 {
        hi + (lo - twomk + t * (q + r1))
    } else {
        (hi - twomk) + (lo + t * (q + r1))
    };
    s * pow2(k)
}

#[cfg(test)]
mod tests {
    use super::super::{Ld80, Ld128};
    use crate::maths::msun::real::Real;
    use super::*;
    use crate::msun::{exp, expm1};

    fn within(a: f64, b: f64, ulps: f64) -> bool {
        (a - b).abs() <= ulps * f64::EPSILON * b.abs()
    }

    #[test]
    fn tracks_double_exp() {
        for &x in &[-700.0, -20.5, -1.0, -1e-3, 1e-10, 0.5, 1.0, 3.3, 88.0, 700.0] {
            assert!(within(expl(Ld80::from_f64(x)).to_f64(), exp(x), 2.0), "expl({x})");
            assert!(within(expl(Ld128::from_f64(x)).to_f64(), exp(x), 2.0), "expl({x})");
        }
        let e = expl(Ld128::ONE);
        assert_eq!(e.to_f64(), core::f64::consts::E);
    }

    #[test]
    fn extended_range() {
        let big = expl(Ld80::from_f64(11000.0));
        assert!(big.is_finite() && big.to_f64().is_infinite());
        assert!(expl(Ld80::from_f64(11400.0)).is_infinite());
        assert!(expl(Ld128::from_f64(-11390.0)) > Ld128::ZERO);
        assert!(expl(Ld128::from_f64(-11390.0)) < Ld128::MIN_POSITIVE);
        assert!(expl(Ld80::from_f64(-11500.0)) == Ld80::ZERO);
        let top = expl(Ld80::from_f64(11356.5));
        assert!(top.is_finite() && top > Ld80::MAX / Ld80::from_f64(2.0));
    }

    #[test]
    fn specials() {
        assert_eq!(expl(Ld80::ZERO).to_f64(), 1.0);
        assert!(expl(Ld80::INFINITY).is_infinite());
        assert!(expl(Ld128::NEG_INFINITY) == Ld128::ZERO);
        assert!(expl(Ld128::NAN).is_nan());
        assert_eq!(expm1l(Ld80::NEG_INFINITY).to_f64(), -1.0);
        assert!(expm1l(Ld80::INFINITY).is_infinite());
        assert!(expm1l(Ld128::NAN).is_nan());
        assert_eq!(expm1l(Ld128::from_f64(-200.0)).to_f64(), -1.0);
    }

    #[test]
    fn expm1_tracks_double() {
        for &x in &[-50.0, -3.0, -0.6, -0.1, 1e-12, 0.005, 0.15, 0.2, 0.7, 2.0, 45.0, 100.0, 700.0] {
            assert!(within(expm1l(Ld80::from_f64(x)).to_f64(), expm1(x), 2.0), "expm1l({x})");
            assert!(within(expm1l(Ld128::from_f64(x)).to_f64(), expm1(x), 2.0), "expm1l({x})");
        }
    }

    #[test]
    fn expm1_keeps_tiny_arguments() {
        let t = Ld80::ONE.scalbn(-70);
        assert!(expm1l(t) == t);
        let neg = -Ld128::ZERO;
        assert!(expm1l(neg).is_sign_negative());
    }

    #[test]
    fn double_double_entry() {
        let one = Ld80::ONE;
        let tail = Ld80::ONE.scalbn(-70);
        let a = exp_dd(one, tail);
        let b = expl(one);
        // the tail moves the result by less than an ulp or two
        assert!(((a - b) / b).abs().to_f64() < 4.0 * Ld80::EPSILON.to_f64());
        assert!(exp_dd(Ld80::from_f64(20000.0), Ld80::ZERO).is_infinite());
        assert!(exp_dd(Ld128::from_f64(-20000.0), Ld128::ZERO) == Ld128::ZERO);
        let x = Ld128::from_f64(2.0);
        let d = Ld128::ONE.scalbn(-60);
        let with_tail = exp_dd(x, d);
        let shifted = expl(x + d);
        assert!(((with_tail - shifted) / shifted).abs().to_f64() < 1e-32);
    }
}
