//! Classification by bit pattern, for every width with a [`FloatBits`] view.

use super::bits::FloatBits;

pub const FP_NAN: i32 = 0;
pub const FP_INFINITE: i32 = 1;
pub const FP_ZERO: i32 = 2;
pub const FP_SUBNORMAL: i32 = 3;
pub const FP_NORMAL: i32 = 4;

/// Fraction bits with the x87 integer bit removed, and whether that bit
/// was clear on a value that needs it.
#[inline(always)]
fn fraction<T: FloatBits>(x: T) -> (u128, bool) {
    let m = x.mantissa();
    if T::EXPLICIT_INT {
        let int_bit = 1u128 << (T::MANT_BITS - 1);
        (m & !int_bit, m & int_bit == 0)
    } else {
        (m, false)
    }
}

#[inline(always)]
pub fn fpclassify<T: FloatBits>(x: T) -> i32 {
    let e = x.biased_exponent();
    let (frac, no_int_bit) = fraction(x);
    if e == T::exp_max() {
        if frac == 0 && !no_int_bit { FP_INFINITE } else { FP_NAN }
    } else if e == 0 {
        if x.mantissa() == 0 { FP_ZERO } else { FP_SUBNORMAL }
    } else if no_int_bit {
        // x87 unnormal
        FP_NAN
    } else {
        FP_NORMAL
    }
}

#[inline(always)]
pub fn isfinite<T: FloatBits>(x: T) -> bool {
    !matches!(fpclassify(x), FP_INFINITE | FP_NAN)
}

#[inline(always)]
pub fn isinf<T: FloatBits>(x: T) -> bool {
    fpclassify(x) == FP_INFINITE
}

#[inline(always)]
pub fn isnan<T: FloatBits>(x: T) -> bool {
    fpclassify(x) == FP_NAN
}

#[inline(always)]
pub fn isnormal<T: FloatBits>(x: T) -> bool {
    fpclassify(x) == FP_NORMAL
}

#[inline(always)]
pub fn signbit<T: FloatBits>(x: T) -> bool {
    x.sign()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::msun::{Ld80, Ld128};

    #[test]
    fn double_and_float() {
        assert_eq!(fpclassify(1.0f64), FP_NORMAL);
        assert_eq!(fpclassify(-0.0f64), FP_ZERO);
        assert_eq!(fpclassify(5e-324f64), FP_SUBNORMAL);
        assert_eq!(fpclassify(f64::NEG_INFINITY), FP_INFINITE);
        assert_eq!(fpclassify(f64::from_bits(0x7ff0_0000_0000_0001)), FP_NAN);
        assert_eq!(fpclassify(f32::MIN_POSITIVE / 2.0), FP_SUBNORMAL);
        assert!(isfinite(f32::MAX));
        assert!(!isfinite(f32::NAN));
        assert!(isinf(-f32::INFINITY));
        assert!(isnormal(f64::MIN_POSITIVE));
        assert!(!isnormal(0.0f32));
        assert!(signbit(-0.0f64));
        assert!(signbit(f64::from_bits(0xfff8_0000_0000_0000)));
        assert!(!signbit(f32::NAN));
    }

    #[test]
    fn x87_extended() {
        assert_eq!(fpclassify(Ld80::INFINITY), FP_INFINITE);
        assert_eq!(fpclassify(Ld80::NAN), FP_NAN);
        assert_eq!(fpclassify(Ld80::MIN_POSITIVE), FP_NORMAL);
        assert_eq!(fpclassify(Ld80::from_parts(0, 1)), FP_SUBNORMAL);
        assert_eq!(fpclassify(Ld80::from_parts(0x8000, 0)), FP_ZERO);
        // pseudo-infinity and unnormal
        assert_eq!(fpclassify(Ld80::from_parts(0x7fff, 0)), FP_NAN);
        assert_eq!(fpclassify(Ld80::from_parts(0x3fff, 0x4000_0000_0000_0000)), FP_NAN);
        assert!(signbit(Ld80::NEG_INFINITY));
    }

    #[test]
    fn quad() {
        assert_eq!(fpclassify(Ld128::from_f64(1.0)), FP_NORMAL);
        assert_eq!(fpclassify(Ld128::from_bits(1)), FP_SUBNORMAL);
        assert_eq!(fpclassify(Ld128::INFINITY), FP_INFINITE);
        assert_eq!(fpclassify(Ld128::from_bits(0x7fff_8000_0000_0000_0000_0000_0000_0000)), FP_NAN);
        assert!(isfinite(Ld128::from_f64(-1e300)));
    }
}
