//! Long-double layouts and the kernels shared by both of them.
//!
//! `Ld80` and `Ld128` are carried as bit patterns with arithmetic done in
//! software (see `soft`). Everything above the arithmetic is written once,
//! generically over [`LongDouble`], and specialised only through the
//! per-format constant tables in `ld80_consts` and `ld128_consts`.

use core::cmp::Ordering;
use core::fmt;
use core::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use super::bits::FloatBits;
use super::gamma::{GammaConsts, GammaKernel};
use super::real::Real;

mod exp;
mod k_trig;
mod ld128;
mod ld128_consts;
mod ld80;
mod ld80_consts;
mod rem_pio2;
mod sinpi;
pub(crate) mod soft;
mod trig;

pub use exp::{expl, expm1l};
pub use ld80::Ld80;
pub use ld128::Ld128;
pub use sinpi::{cospil, sinpil, tanpil};
pub use trig::{cosl, sincosl, sinl, tanl};

use soft::{EMAX, EMIN, Format, IntRound, Kind, Unpacked};

mod sealed {
    pub trait Sealed {}
    impl Sealed for super::Ld80 {}
    impl Sealed for super::Ld128 {}
}

/// A long-double format: x87 extended ([`Ld80`]) or IEEE quad ([`Ld128`]).
///
/// The trait is sealed; it only exists so the `*l` entry points can be
/// written once for both layouts.
pub trait LongDouble: sealed::Sealed + GammaKernel + FloatBits + fmt::Debug {
    #[doc(hidden)]
    fn consts() -> &'static LdConsts<Self>;
    #[doc(hidden)]
    fn rnint(self) -> Self;
    #[doc(hidden)]
    fn to_i64(self) -> i64;
    #[doc(hidden)]
    fn int_is_odd(self) -> bool;
}

/// Per-format constants for reduction, the trig kernels and `expl`.
///
/// Polynomials are stored lowest degree first.
pub struct LdConsts<T: 'static> {
    pub(crate) invpio2: T,
    /// pi/2 split in three pieces, each followed by its tail.
    pub(crate) pio2_1: T,
    pub(crate) pio2_1t: T,
    pub(crate) pio2_2: T,
    pub(crate) pio2_2t: T,
    pub(crate) pio2_3: T,
    pub(crate) pio2_3t: T,
    /// Upper end of the Cody-Waite range.
    pub(crate) medium_limit: T,
    /// Lost-bit counts that trigger the second and third reduction rounds.
    pub(crate) round2: u32,
    pub(crate) round3: u32,
    /// 24-bit chunks needed to hold a significand.
    pub(crate) chunks: usize,
    /// Precision argument for the Payne-Hanek kernel.
    pub(crate) large_prec: usize,

    pub(crate) pio4: T,
    pub(crate) pio4_lo: T,
    /// Above this |x| the tangent kernel reflects around pi/4.
    pub(crate) tan_reflect: T,
    /// sin(x) = x + x^3 S(x^2)
    pub(crate) sin: &'static [T],
    /// cos(x) = 1 - x^2/2 + x^4 C(x^2)
    pub(crate) cos: &'static [T],
    /// tan(x) = x + x^3 T(x^2) on |x| <= tan_reflect
    pub(crate) tan: &'static [T],

    /// pi split so that a `split_hi` value times `pi_hi` is exact.
    pub(crate) pi_hi: T,
    pub(crate) pi_lo: T,

    /// 128/ln2 and ln2/128 = l1 + l2 with `n * l1` exact.
    pub(crate) inv_l: T,
    pub(crate) l1: T,
    pub(crate) l2: T,
    /// e^r - 1 = r + r^2 A(r) on |r| <= ln2/256
    pub(crate) exp_poly: &'static [T],
    /// 2^(j/128) as (hi, lo)
    pub(crate) exp_tbl: &'static [[T; 2]; 128],
    pub(crate) o_threshold: T,
    pub(crate) u_threshold: T,
    /// expm1(x) = x + x^2/2 + x^3 B(x) on |x| <= expm1_bound
    pub(crate) expm1_poly: &'static [T],
    pub(crate) expm1_bound: T,
}

const LD80_FORMAT: Format = Format {
    prec: 64,
    emin: EMIN,
    emax: EMAX,
};

const LD128_FORMAT: Format = Format {
    prec: 113,
    emin: EMIN,
    emax: EMAX,
};

macro_rules! soft_float {
    ($ty:ident, $fmt:expr, $split_mask:expr, $gamma:path) => {
        impl $ty {
            #[inline]
            fn binary(self, rhs: $ty, op: fn(Unpacked, Unpacked, Format) -> Unpacked) -> $ty {
                $ty::pack(op(self.unpack(), rhs.unpack(), $fmt))
            }

            /// Nearest double, with gradual underflow.
            pub fn to_f64(self) -> f64 {
                self.unpack().to_f64()
            }

            /// Exact widening conversion.
            pub fn from_f64(x: f64) -> $ty {
                $ty::pack(Unpacked::from_f64(x))
            }

            pub fn is_nan(self) -> bool {
                self.unpack().is_nan()
            }

            pub fn is_infinite(self) -> bool {
                self.unpack().kind == Kind::Inf
            }

            pub fn is_finite(self) -> bool {
                matches!(self.unpack().kind, Kind::Zero | Kind::Finite)
            }

            pub fn is_sign_negative(self) -> bool {
                self.sign()
            }

            pub fn abs(self) -> $ty {
                $ty::from_fields(false, self.biased_exponent(), FloatBits::mantissa(self))
            }

            /// Magnitude of `self` with the sign of `sign`.
            pub fn copysign(self, sign: $ty) -> $ty {
                $ty::from_fields(sign.sign(), self.biased_exponent(), FloatBits::mantissa(self))
            }

            fn round_int(self, mode: IntRound) -> $ty {
                $ty::pack(self.unpack().round_int(mode))
            }

            /// Truncating conversion, saturating outside the `i64` range.
            pub(crate) fn to_i64(self) -> i64 {
                self.unpack().to_i64()
            }

            /// Integer part is odd; false for NaN, infinities and huge values.
            pub(crate) fn int_is_odd(self) -> bool {
                self.unpack().int_is_odd()
            }

            pub(crate) fn rnint(self) -> $ty {
                self.round_int(IntRound::Nearest)
            }
        }

        impl From<f64> for $ty {
            fn from(x: f64) -> $ty {
                $ty::from_f64(x)
            }
        }

        impl From<i32> for $ty {
            fn from(i: i32) -> $ty {
                $ty::pack(Unpacked::from_i64(i as i64))
            }
        }

        impl Add for $ty {
            type Output = $ty;
            #[inline]
            fn add(self, rhs: $ty) -> $ty {
                self.binary(rhs, soft::add)
            }
        }

        impl Sub for $ty {
            type Output = $ty;
            #[inline]
            fn sub(self, rhs: $ty) -> $ty {
                self.binary(rhs, soft::sub)
            }
        }

        impl Mul for $ty {
            type Output = $ty;
            #[inline]
            fn mul(self, rhs: $ty) -> $ty {
                self.binary(rhs, soft::mul)
            }
        }

        impl Div for $ty {
            type Output = $ty;
            #[inline]
            fn div(self, rhs: $ty) -> $ty {
                self.binary(rhs, soft::div)
            }
        }

        impl Neg for $ty {
            type Output = $ty;
            #[inline]
            fn neg(self) -> $ty {
                $ty::from_fields(!self.sign(), self.biased_exponent(), FloatBits::mantissa(self))
            }
        }

        impl AddAssign for $ty {
            fn add_assign(&mut self, rhs: $ty) {
                *self = *self + rhs;
            }
        }

        impl SubAssign for $ty {
            fn sub_assign(&mut self, rhs: $ty) {
                *self = *self - rhs;
            }
        }

        impl MulAssign for $ty {
            fn mul_assign(&mut self, rhs: $ty) {
                *self = *self * rhs;
            }
        }

        impl DivAssign for $ty {
            fn div_assign(&mut self, rhs: $ty) {
                *self = *self / rhs;
            }
        }

        impl PartialEq for $ty {
            fn eq(&self, other: &$ty) -> bool {
                soft::compare(self.unpack(), other.unpack()) == Some(Ordering::Equal)
            }
        }

        impl PartialOrd for $ty {
            fn partial_cmp(&self, other: &$ty) -> Option<Ordering> {
                soft::compare(self.unpack(), other.unpack())
            }
        }

        impl Real for $ty {
            const MANT_DIG: u32 = $fmt.prec;
            const ZERO: $ty = $ty::from_bits(0);
            const ONE: $ty = $ty::pow2(0);
            const HALF: $ty = $ty::pow2(-1);
            const TWO: $ty = $ty::pow2(1);

            fn from_f64(x: f64) -> $ty {
                $ty::from_f64(x)
            }
            fn from_i32(i: i32) -> $ty {
                $ty::from(i)
            }
            fn from_u128(v: u128) -> $ty {
                $ty::pack(Unpacked::from_u128(v, $fmt))
            }
            fn to_f64(self) -> f64 {
                $ty::to_f64(self)
            }
            fn abs(self) -> $ty {
                $ty::abs(self)
            }
            fn is_nan(self) -> bool {
                $ty::is_nan(self)
            }
            fn is_finite(self) -> bool {
                $ty::is_finite(self)
            }
            fn trunc(self) -> $ty {
                self.round_int(IntRound::Trunc)
            }
            fn floor(self) -> $ty {
                self.round_int(IntRound::Floor)
            }
            fn ceil(self) -> $ty {
                self.round_int(IntRound::Ceil)
            }
            fn scalbn(self, n: i32) -> $ty {
                $ty::pack(soft::scalbn(self.unpack(), n, $fmt))
            }
            fn split_hi(self) -> $ty {
                $ty::from_raw_bits(self.raw_bits() & $split_mask)
            }
            fn frexp1(self) -> ($ty, i32) {
                let u = self.unpack();
                let m = Unpacked {
                    neg: u.neg,
                    kind: Kind::Finite,
                    exp: 0,
                    sig: u.sig,
                };
                ($ty::pack(m), u.exp)
            }
        }

        impl GammaKernel for $ty {
            fn exp_dd(a: $ty, b: $ty) -> $ty {
                exp::exp_dd(a, b)
            }
            fn sin_pi(self) -> $ty {
                sinpi::sinpil(self)
            }
            fn cos_pi(self) -> $ty {
                sinpi::cospil(self)
            }
            fn gamma_consts() -> &'static GammaConsts<$ty> {
                &$gamma
            }
        }
    };
}

// Keep the integer bit and the next 23 fraction bits.
soft_float!(Ld80, LD80_FORMAT, !((1u128 << 40) - 1), ld80_consts::GAMMA);
// Keep 52 of the 112 stored fraction bits.
soft_float!(Ld128, LD128_FORMAT, !((1u128 << 60) - 1), ld128_consts::GAMMA);

impl LongDouble for Ld80 {
    fn consts() -> &'static LdConsts<Ld80> {
        &ld80_consts::CONSTS
    }
    fn rnint(self) -> Ld80 {
        Ld80::rnint(self)
    }
    fn to_i64(self) -> i64 {
        Ld80::to_i64(self)
    }
    fn int_is_odd(self) -> bool {
        Ld80::int_is_odd(self)
    }
}

impl LongDouble for Ld128 {
    fn consts() -> &'static LdConsts<Ld128> {
        &ld128_consts::CONSTS
    }
    fn rnint(self) -> Ld128 {
        Ld128::rnint(self)
    }
    fn to_i64(self) -> i64 {
        Ld128::to_i64(self)
    }
    fn int_is_odd(self) -> bool {
        Ld128::int_is_odd(self)
    }
}

impl fmt::Debug for Ld80 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (se, man) = self.to_parts();
        write!(f, "Ld80({se:#06x}:{man:#018x} ~ {:e})", self.to_f64())
    }
}

impl fmt::Debug for Ld128 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Ld128({:#034x} ~ {:e})", self.to_bits(), self.to_f64())
    }
}

/// Gamma function in long-double precision.
///
/// Same regimes as [`tgamma`](super::tgamma): Stirling's series above 6,
/// a rational approximation about the minimum below that, and reflection
/// through `sinpil` for negative arguments.
pub fn tgammal<T: LongDouble>(x: T) -> T {
    super::gamma::gamma(x)
}
