//! Arithmetic surface the precision-generic kernels are written against.

use core::ops::{Add, Div, Mul, Neg, Sub};

use super::{ceil_f64, f64_from_bits, f64_to_bits, fabs, floor_f64, scalbn, trunc_f64};

/// Operations every working precision provides to the shared kernels.
///
/// `split_hi` keeps the leading bits of the significand (truncating) so that
/// the product of two split values, or of a split value and a stored
/// "hi" constant, is exact.
pub trait Real:
    Copy
    + PartialOrd
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
    + Neg<Output = Self>
{
    /// Significand bits, including the leading one.
    const MANT_DIG: u32;
    const ZERO: Self;
    const ONE: Self;
    const HALF: Self;
    const TWO: Self;

    fn from_f64(x: f64) -> Self;
    fn from_i32(i: i32) -> Self;
    /// Correctly rounded conversion.
    fn from_u128(v: u128) -> Self;
    fn to_f64(self) -> f64;

    fn abs(self) -> Self;
    fn is_nan(self) -> bool;
    fn is_finite(self) -> bool;
    fn trunc(self) -> Self;
    fn floor(self) -> Self;
    fn ceil(self) -> Self;
    fn scalbn(self, n: i32) -> Self;
    fn split_hi(self) -> Self;
    /// `(m, e)` with `self = m * 2^e` and `1 <= m < 2`; finite nonzero input.
    fn frexp1(self) -> (Self, i32);
}

impl Real for f64 {
    const MANT_DIG: u32 = 53;
    const ZERO: f64 = 0.0;
    const ONE: f64 = 1.0;
    const HALF: f64 = 0.5;
    const TWO: f64 = 2.0;

    #[inline(always)]
    fn from_f64(x: f64) -> f64 {
        x
    }
    #[inline(always)]
    fn from_i32(i: i32) -> f64 {
        i as f64
    }
    #[inline(always)]
    fn from_u128(v: u128) -> f64 {
        v as f64
    }
    #[inline(always)]
    fn to_f64(self) -> f64 {
        self
    }
    #[inline(always)]
    fn abs(self) -> f64 {
        fabs(self)
    }
    #[inline(always)]
    fn is_nan(self) -> bool {
        (f64_to_bits(self) & 0x7fff_ffff_ffff_ffff) > 0x7ff0_0000_0000_0000
    }
    #[inline(always)]
    fn is_finite(self) -> bool {
        (f64_to_bits(self) & 0x7ff0_0000_0000_0000) != 0x7ff0_0000_0000_0000
    }
    #[inline(always)]
    fn trunc(self) -> f64 {
        trunc_f64(self)
    }
    #[inline(always)]
    fn floor(self) -> f64 {
        floor_f64(self)
    }
    #[inline(always)]
    fn ceil(self) -> f64 {
        ceil_f64(self)
    }
    #[inline(always)]
    fn scalbn(self, n: i32) -> f64 {
        scalbn(self, n)
    }
    /// Leading 26 bits: clears the low 27 bits of the pattern.
    #[inline(always)]
    fn split_hi(self) -> f64 {
        f64_from_bits(f64_to_bits(self) & 0xffff_ffff_f800_0000)
    }
    fn frexp1(self) -> (f64, i32) {
        let mut x = self;
        let mut bias = 0;
        if (f64_to_bits(x) >> 52) & 0x7ff == 0 {
            x *= f64_from_bits(0x4350_0000_0000_0000); // 2^54
            bias = -54;
        }
        let u = f64_to_bits(x);
        let e = ((u >> 52) & 0x7ff) as i32 - 1023;
        let m = f64_from_bits((u & 0x800f_ffff_ffff_ffff) | 0x3ff0_0000_0000_0000);
        (m, e + bias)
    }
}

/// Horner evaluation, coefficients lowest degree first.
#[inline(always)]
pub(crate) fn horner<T: Real>(z: T, c: &[T]) -> T {
    let mut r = T::ZERO;
    for &a in c.iter().rev() {
        r = a + z * r;
    }
    r
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn split_hi_products_are_exact() {
        let a = 1.2345678901234567f64;
        let h = a.split_hi();
        let l = a - h;
        assert_eq!(h + l, a);
        // 26 x 26 bits fit in one double
        let p = h * h;
        assert_eq!(p - h * h, 0.0);
        assert_eq!(f64_to_bits(h) & 0x07ff_ffff, 0);
    }

    #[test]
    fn frexp1_ranges() {
        assert_eq!(6.0f64.frexp1(), (1.5, 2));
        assert_eq!(1.0f64.frexp1(), (1.0, 0));
        let (m, e) = 5e-324f64.frexp1();
        assert_eq!((m, e), (1.0, -1074));
        assert_eq!(0.75f64.frexp1(), (1.5, -1));
    }

    #[test]
    fn horner_matches_direct() {
        let c = [1.0, 2.0, 3.0];
        assert_eq!(horner(2.0f64, &c), 1.0 + 2.0 * 2.0 + 3.0 * 4.0);
    }
}
