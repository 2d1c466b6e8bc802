//! Exception status, returned alongside the value.
//!
//! Rust gives no access to the floating-point environment, so the flags
//! IEEE 754 would raise are reconstructed here from the argument and the
//! result: the `*_status` entry points evaluate the ordinary function and
//! then classify what happened. Rounding is always to nearest.

use super::sinpi::{cospi, sinpi, tanpi};
use super::{cos, exp, expm1, sin, tan, tgamma};

/// A result paired with the exceptions its evaluation signals.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FpResult<T> {
    pub val: T,
    pub status: Status,
}

impl<T> FpResult<T> {
    pub fn new(val: T, status: Status) -> Self {
        Self { val, status }
    }

    /// `val` with no exceptions.
    pub fn ok(val: T) -> Self {
        Self {
            val,
            status: Status::OK,
        }
    }
}

/// IEEE 754 exception flags.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct Status(u8);

impl Status {
    pub const OK: Self = Self(0);
    /// No meaningful result: a NaN produced from non-NaN input, or any use
    /// of a signaling NaN.
    pub const INVALID: Self = Self(1);
    /// An exact infinity from finite input (a pole).
    pub const DIVIDE_BY_ZERO: Self = Self(1 << 2);
    /// Rounded result exceeded the largest finite value.
    pub const OVERFLOW: Self = Self(1 << 3);
    /// Result is tiny and inexact.
    pub const UNDERFLOW: Self = Self(1 << 4);
    pub const INEXACT: Self = Self(1 << 5);

    pub const fn invalid(self) -> bool {
        self.0 & Self::INVALID.0 != 0
    }

    pub const fn divide_by_zero(self) -> bool {
        self.0 & Self::DIVIDE_BY_ZERO.0 != 0
    }

    pub const fn overflow(self) -> bool {
        self.0 & Self::OVERFLOW.0 != 0
    }

    pub const fn underflow(self) -> bool {
        self.0 & Self::UNDERFLOW.0 != 0
    }

    pub const fn inexact(self) -> bool {
        self.0 & Self::INEXACT.0 != 0
    }

    pub const fn with(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }

    pub const fn bits(self) -> u8 {
        self.0
    }
}

#[inline]
fn is_signaling(x: f64) -> bool {
    x.is_nan() && x.to_bits() & (1 << 51) == 0
}

/// True when `x` is a whole multiple of `1/k`, `k` a power of two.
#[inline]
fn is_multiple_of_inv(x: f64, k: f64) -> bool {
    let y = x * k;
    y.is_finite() && y == super::trunc_f64(y)
}

/// Flags for `y = f(x)`.
///
/// `exact` says the mathematical result is representable and was
/// returned; `pole` says an infinite `y` is an exact pole rather than an
/// overflow.
fn classify(x: f64, y: f64, exact: bool, pole: bool) -> Status {
    if x.is_nan() {
        if is_signaling(x) { Status::INVALID } else { Status::OK }
    } else if y.is_nan() {
        Status::INVALID
    } else if x.is_infinite() || exact {
        Status::OK
    } else if y.is_infinite() {
        if pole {
            Status::DIVIDE_BY_ZERO
        } else {
            Status::OVERFLOW.with(Status::INEXACT)
        }
    } else if super::fabs(y) < f64::MIN_POSITIVE {
        Status::UNDERFLOW.with(Status::INEXACT)
    } else {
        Status::INEXACT
    }
}

// sin, cos, tan, exp and expm1 of a nonzero representable x are irrational.

pub fn sin_status(x: f64) -> FpResult<f64> {
    let y = sin(x);
    FpResult::new(y, classify(x, y, x == 0.0, false))
}

pub fn cos_status(x: f64) -> FpResult<f64> {
    let y = cos(x);
    FpResult::new(y, classify(x, y, x == 0.0, false))
}

pub fn tan_status(x: f64) -> FpResult<f64> {
    let y = tan(x);
    FpResult::new(y, classify(x, y, x == 0.0, false))
}

pub fn exp_status(x: f64) -> FpResult<f64> {
    let y = exp(x);
    FpResult::new(y, classify(x, y, x == 0.0, false))
}

pub fn expm1_status(x: f64) -> FpResult<f64> {
    let y = expm1(x);
    FpResult::new(y, classify(x, y, x == 0.0, false))
}

// For dyadic x, sin(pi x) and cos(pi x) are rational only at multiples of
// 1/2, and tan(pi x) only at multiples of 1/4.

pub fn sinpi_status(x: f64) -> FpResult<f64> {
    let y = sinpi(x);
    FpResult::new(y, classify(x, y, is_multiple_of_inv(x, 2.0), false))
}

pub fn cospi_status(x: f64) -> FpResult<f64> {
    let y = cospi(x);
    FpResult::new(y, classify(x, y, is_multiple_of_inv(x, 2.0), false))
}

/// `tanpi` at an odd multiple of 1/2 is a pole: signed infinity with
/// divide-by-zero.
pub fn tanpi_status(x: f64) -> FpResult<f64> {
    let y = tanpi(x);
    let pole = is_multiple_of_inv(x, 2.0) && !is_multiple_of_inv(x, 1.0);
    let exact = is_multiple_of_inv(x, 4.0) && !pole;
    FpResult::new(y, classify(x, y, exact, pole))
}

/// Zero is a pole; negative integers are invalid. Factorials up to 22! are
/// exact.
pub fn tgamma_status(x: f64) -> FpResult<f64> {
    let y = tgamma(x);
    let exact = (1.0..=23.0).contains(&x) && is_multiple_of_inv(x, 1.0);
    FpResult::new(y, classify(x, y, exact, x == 0.0))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_compose() {
        let s = Status::OVERFLOW.with(Status::INEXACT);
        assert!(s.overflow() && s.inexact());
        assert!(!s.underflow() && !s.invalid() && !s.divide_by_zero());
        assert_eq!(Status::default(), Status::OK);
        assert_eq!(FpResult::ok(1.0).status.bits(), 0);
    }

    #[test]
    fn exact_results_raise_nothing() {
        assert_eq!(sin_status(0.0), FpResult::ok(0.0));
        assert_eq!(cos_status(-0.0), FpResult::ok(1.0));
        assert_eq!(exp_status(0.0), FpResult::ok(1.0));
        assert_eq!(sinpi_status(3.0).status, Status::OK);
        assert_eq!(cospi_status(2.5), FpResult::ok(0.0));
        assert_eq!(tanpi_status(0.25), FpResult::ok(1.0));
        assert_eq!(tgamma_status(5.0), FpResult::ok(24.0));
        assert_eq!(exp_status(f64::NEG_INFINITY), FpResult::ok(0.0));
        assert_eq!(tgamma_status(f64::INFINITY).status, Status::OK);
    }

    #[test]
    fn rounding_is_inexact() {
        assert_eq!(sin_status(1.0).status, Status::INEXACT);
        assert_eq!(sinpi_status(0.25).status, Status::INEXACT);
        assert_eq!(tgamma_status(24.0).status, Status::INEXACT);
        assert_eq!(tgamma_status(0.5).status, Status::INEXACT);
    }

    #[test]
    fn range_errors() {
        let r = exp_status(710.0);
        assert_eq!(r.val, f64::INFINITY);
        assert!(r.status.overflow() && r.status.inexact());
        let r = exp_status(-740.0);
        assert!(r.status.underflow());
        let r = exp_status(-800.0);
        assert_eq!(r.val, 0.0);
        assert!(r.status.underflow());
        assert!(tgamma_status(200.0).status.overflow());
        assert!(sin_status(1e-310).status.underflow());
    }

    #[test]
    fn poles_and_domain_errors() {
        let r = tanpi_status(0.5);
        assert_eq!(r.val, f64::INFINITY);
        assert_eq!(r.status, Status::DIVIDE_BY_ZERO);
        let r = tanpi_status(-1.5);
        assert!(r.val.is_infinite());
        assert!(r.status.divide_by_zero());
        let r = tgamma_status(-0.0);
        assert_eq!(r.val, f64::NEG_INFINITY);
        assert_eq!(r.status, Status::DIVIDE_BY_ZERO);
        assert_eq!(tgamma_status(-3.0).status, Status::INVALID);
        assert_eq!(sin_status(f64::INFINITY).status, Status::INVALID);
        assert_eq!(cos_status(f64::NAN).status, Status::OK);
        let snan = f64::from_bits(0x7ff0_0000_0000_0001);
        assert_eq!(exp_status(snan).status, Status::INVALID);
    }
}
