//! sin(pi x), cos(pi x) and tan(pi x) in long-double precision.
//!
//! Same case split as the double versions. The integer branch runs up to
//! 2^p, p the significand width; every larger value is an even integer.

use super::super::twosum::fast_two_sum;
use super::LongDouble;
use super::k_trig::{k_cosl, k_sinl, k_tanl};

/// pi * x as a head/tail pair; `x.split_hi() * pi_hi` is exact.
#[inline]
fn mul_pi<T: LongDouble>(x: T) -> (T, T) {
    let c = T::consts();
    let hi = x.split_hi();
    let lo = (x - hi) * (c.pi_lo + c.pi_hi) + hi * c.pi_lo;
    fast_two_sum(hi * c.pi_hi, lo)
}

fn kernel_sinpi<T: LongDouble>(x: T) -> T {
    let (hi, lo) = mul_pi(x);
    k_sinl(hi, lo, 1)
}

fn kernel_cospi<T: LongDouble>(x: T) -> T {
    let (hi, lo) = mul_pi(x);
    k_cosl(hi, lo)
}

/// tan(pi x) for 0 < x < 1/2.
fn kernel_tanpi<T: LongDouble>(x: T) -> T {
    let quarter = T::from_f64(0.25);
    if x < quarter {
        let (hi, lo) = mul_pi(x);
        k_tanl(hi, lo, 1)
    } else if x > quarter {
        let (hi, lo) = mul_pi(T::HALF - x);
        -k_tanl(hi, lo, -1)
    } else {
        T::ONE
    }
}

/// Below this, pi * x is formed directly.
#[inline]
fn tiny_bound<T: LongDouble>() -> T {
    T::ONE.scalbn(-((T::MANT_DIG / 2) as i32 + 2))
}

/// 2^p: the first magnitude with no fractional or odd values.
#[inline]
fn all_even<T: LongDouble>() -> T {
    T::ONE.scalbn(T::MANT_DIG as i32)
}

/// pi * x for tiny x, scaled up so the split is taken on normal numbers.
fn tiny_pi_mul<T: LongDouble>(x: T) -> T {
    let c = T::consts();
    let scale = T::MANT_DIG as i32 - 1;
    let hi = x.split_hi().scalbn(scale);
    let lo = x.scalbn(scale) - hi;
    ((c.pi_lo + c.pi_hi) * lo + c.pi_lo * hi + c.pi_hi * hi).scalbn(-scale)
}

#[inline]
fn signed<T: LongDouble>(neg: bool, v: T) -> T {
    if neg { -v } else { v }
}

/// sin(pi r) for 0 < r < 1.
fn sinpi_frac<T: LongDouble>(r: T) -> T {
    if r < T::from_f64(0.25) {
        kernel_sinpi(r)
    } else if r < T::HALF {
        kernel_cospi(T::HALF - r)
    } else if r < T::from_f64(0.75) {
        kernel_cospi(r - T::HALF)
    } else {
        kernel_sinpi(T::ONE - r)
    }
}

/// cos(pi r) for 0 < r < 1.
fn cospi_frac<T: LongDouble>(r: T) -> T {
    if r < T::from_f64(0.25) {
        kernel_cospi(r)
    } else if r < T::HALF {
        kernel_sinpi(T::HALF - r)
    } else if r == T::HALF {
        T::ZERO
    } else if r < T::from_f64(0.75) {
        -kernel_sinpi(r - T::HALF)
    } else {
        -kernel_cospi(T::ONE - r)
    }
}

/// sin(pi x). Integers give a zero carrying the sign of `x`.
pub fn sinpil<T: LongDouble>(x: T) -> T {
    let ax = x.abs();
    let neg = x.sign();

    if ax < T::ONE {
        if ax < tiny_bound() {
            if x == T::ZERO {
                return x;
            }
            return tiny_pi_mul(x);
        }
        return signed(neg, sinpi_frac(ax));
    }

    if ax < all_even() {
        let j = ax.floor();
        let r = ax - j;
        if r == T::ZERO {
            return signed(neg, T::ZERO);
        }
        let s = sinpi_frac(r);
        return signed(neg != j.int_is_odd(), s);
    }

    if !x.is_finite() {
        return (x - x) / (x - x);
    }
    signed(neg, T::ZERO)
}

/// cos(pi x). Half-integers give +0.
pub fn cospil<T: LongDouble>(x: T) -> T {
    let ax = x.abs();

    if ax < T::ONE {
        return if ax == T::ZERO { T::ONE } else { cospi_frac(ax) };
    }

    if ax < all_even() {
        let j = ax.floor();
        let r = ax - j;
        if r == T::HALF {
            return T::ZERO;
        }
        let c = if r == T::ZERO { T::ONE } else { cospi_frac(r) };
        return signed(j.int_is_odd(), c);
    }

    if !x.is_finite() {
        return (x - x) / (x - x);
    }
    T::ONE
}

/// tan(pi x).
///
/// Half-integers are poles: +Inf after an even integer, -Inf after an odd
/// one. Integers give +0 or -0 by the same parity. Both are mirrored for
/// negative `x`.
pub fn tanpil<T: LongDouble>(x: T) -> T {
    let ax = x.abs();
    let neg = x.sign();

    if ax < T::ONE {
        let t = if ax < T::HALF {
            if ax < tiny_bound() {
                if x == T::ZERO {
                    return x;
                }
                return tiny_pi_mul(x);
            }
            kernel_tanpi(ax)
        } else if ax == T::HALF {
            T::ONE / T::ZERO
        } else {
            -kernel_tanpi(T::ONE - ax)
        };
        return signed(neg, t);
    }

    if ax < all_even() {
        let j = ax.floor();
        let r = ax - j;
        let odd = j.int_is_odd();
        let t = if r == T::ZERO {
            signed(odd, T::ZERO)
        } else if r < T::HALF {
            kernel_tanpi(r)
        } else if r == T::HALF {
            signed(odd, T::ONE / T::ZERO)
        } else {
            -kernel_tanpi(T::ONE - r)
        };
        return signed(neg, t);
    }

    if !x.is_finite() {
        return (x - x) / (x - x);
    }
    signed(neg, T::ZERO)
}

#[cfg(test)]
mod tests {
    use super::super::{Ld80, Ld128};
    use crate::maths::msun::real::Real;
    use super::*;
    use crate::msun::{cospi, sinpi, tanpi};

    fn within(a: f64, b: f64, ulps: f64) -> bool {
        (a - b).abs() <= ulps * f64::EPSILON * b.abs()
    }

    #[test]
    fn exact_points() {
        let half = Ld80::from_f64(0.5);
        assert_eq!(cospil(half).to_bits(), 0);
        assert_eq!(sinpil(half).to_f64(), 1.0);
        assert_eq!(sinpil(Ld80::ONE).to_bits(), 0);
        assert_eq!(tanpil(Ld128::from_f64(0.25)).to_f64(), 1.0);
        assert_eq!(tanpil(Ld128::from_f64(-0.75)).to_f64(), 1.0);
        assert_eq!(cospil(Ld128::from_f64(3.0)).to_f64(), -1.0);
        assert_eq!(cospil(Ld128::from_f64(-2.5)).to_bits(), 0);
        assert!(sinpil(Ld128::from_f64(-4.0)).is_sign_negative());
    }

    #[test]
    fn poles_are_signed_infinities() {
        assert_eq!(tanpil(Ld80::from_f64(0.5)).to_f64(), f64::INFINITY);
        assert_eq!(tanpil(Ld80::from_f64(1.5)).to_f64(), f64::NEG_INFINITY);
        assert_eq!(tanpil(Ld80::from_f64(-1.5)).to_f64(), f64::INFINITY);
        assert_eq!(tanpil(Ld128::from_f64(2.5)).to_f64(), f64::INFINITY);
        assert!(tanpil(Ld128::from_f64(3.0)).is_sign_negative());
    }

    #[test]
    fn odd_integers_above_double_range() {
        // 2^63 + 1 is an integer Ld80 can hold but f64 cannot
        let x = Ld80::from_u128((1u128 << 63) + 1);
        assert_eq!(cospil(x).to_f64(), -1.0);
        let y = Ld128::from_u128((1u128 << 100) + 1);
        assert_eq!(cospil(y).to_f64(), -1.0);
        assert_eq!(cospil(Ld80::ONE.scalbn(64)).to_f64(), 1.0);
        let z = Ld128::from_u128((1u128 << 80) + 1) + Ld128::HALF;
        assert_eq!(tanpil(z).to_f64(), f64::NEG_INFINITY);
    }

    #[test]
    fn track_the_double_versions() {
        for &x in &[1e-3, 0.1, 0.3, 0.49, 0.6, 0.9, 1.2, -3.7, 1234.56, 1e15 + 0.25] {
            let l = Ld80::from_f64(x);
            let q = Ld128::from_f64(x);
            assert!(within(sinpil(l).to_f64(), sinpi(x), 2.0), "sinpil({x})");
            assert!(within(cospil(q).to_f64(), cospi(x), 2.0), "cospil({x})");
            assert!(within(sinpil(q).to_f64(), sinpi(x), 2.0), "sinpil({x})");
            assert!(within(cospil(l).to_f64(), cospi(x), 2.0), "cospil({x})");
            assert!(within(tanpil(l).to_f64(), tanpi(x), 2.0), "tanpil({x})");
        }
    }

    #[test]
    fn periodicity_is_exact() {
        let x = Ld80::from_f64(0.3125);
        let two = Ld80::TWO;
        for k in 1..20 {
            let shifted = x + two * Ld80::from_i32(k);
            assert!(sinpil(shifted) == sinpil(x), "{k}");
            assert!(cospil(shifted) == cospil(x), "{k}");
        }
    }

    #[test]
    fn tiny_and_specials() {
        let t = Ld128::ONE.scalbn(-100);
        let want = Ld128::consts().pi_hi + Ld128::consts().pi_lo;
        let got = sinpil(t).scalbn(100);
        assert!(((got - want) / want).abs().to_f64() < 1e-30);
        assert!(sinpil(-Ld80::ZERO).is_sign_negative());
        assert!(tanpil(-Ld128::ZERO).is_sign_negative());
        assert_eq!(cospil(Ld80::ZERO).to_f64(), 1.0);
        assert!(sinpil(Ld80::INFINITY).is_nan());
        assert!(cospil(Ld128::NAN).is_nan());
        assert!(tanpil(Ld80::NEG_INFINITY).is_nan());
    }
}
