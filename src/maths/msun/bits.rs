//! Bit-pattern access for every supported width.
//!
//! These are the only places a float is reinterpreted as integers. All of
//! them are total: any pattern, including signaling NaNs and x87
//! pseudo-denormals, goes in and comes back out unchanged.

use super::ld::{Ld80, Ld128};

/// High and low 32-bit words of a double.
#[inline(always)]
pub fn extract_words(x: f64) -> (u32, u32) {
    let u = x.to_bits();
    ((u >> 32) as u32, u as u32)
}

#[inline(always)]
pub fn insert_words(hi: u32, lo: u32) -> f64 {
    f64::from_bits(((hi as u64) << 32) | lo as u64)
}

#[inline(always)]
pub fn get_high_word(x: f64) -> u32 {
    (x.to_bits() >> 32) as u32
}

#[inline(always)]
pub fn get_low_word(x: f64) -> u32 {
    x.to_bits() as u32
}

#[inline(always)]
pub fn set_high_word(x: f64, hi: u32) -> f64 {
    insert_words(hi, get_low_word(x))
}

#[inline(always)]
pub fn set_low_word(x: f64, lo: u32) -> f64 {
    insert_words(get_high_word(x), lo)
}

#[inline(always)]
pub fn get_float_word(x: f32) -> u32 {
    x.to_bits()
}

#[inline(always)]
pub fn set_float_word(w: u32) -> f32 {
    f32::from_bits(w)
}

/// Field view of a floating-point format: sign, biased exponent and the
/// stored mantissa (which includes the explicit integer bit for x87
/// extended).
pub trait FloatBits: Copy {
    /// Raw pattern; for [`Ld80`] the low 80 bits of a `u128`.
    type Bits: Copy + PartialEq + core::fmt::Debug;
    const EXP_BITS: u32;
    /// Stored mantissa bits.
    const MANT_BITS: u32;
    /// True when the leading significand bit is stored rather than implied.
    const EXPLICIT_INT: bool;

    fn raw_bits(self) -> Self::Bits;
    fn from_raw_bits(b: Self::Bits) -> Self;
    fn sign(self) -> bool;
    fn biased_exponent(self) -> u32;
    fn mantissa(self) -> u128;
    /// Assemble a value; out-of-range fields are masked.
    fn from_fields(sign: bool, exp: u32, mant: u128) -> Self;

    fn exp_max() -> u32 {
        (1 << Self::EXP_BITS) - 1
    }
}

impl FloatBits for f32 {
    type Bits = u32;
    const EXP_BITS: u32 = 8;
    const MANT_BITS: u32 = 23;
    const EXPLICIT_INT: bool = false;

    fn raw_bits(self) -> u32 {
        self.to_bits()
    }
    fn from_raw_bits(b: u32) -> f32 {
        f32::from_bits(b)
    }
    fn sign(self) -> bool {
        self.to_bits() >> 31 != 0
    }
    fn biased_exponent(self) -> u32 {
        (self.to_bits() >> 23) & 0xff
    }
    fn mantissa(self) -> u128 {
        (self.to_bits() & 0x007f_ffff) as u128
    }
    fn from_fields(sign: bool, exp: u32, mant: u128) -> f32 {
        f32::from_bits(((sign as u32) << 31) | ((exp & 0xff) << 23) | (mant as u32 & 0x007f_ffff))
    }
}

impl FloatBits for f64 {
    type Bits = u64;
    const EXP_BITS: u32 = 11;
    const MANT_BITS: u32 = 52;
    const EXPLICIT_INT: bool = false;

    fn raw_bits(self) -> u64 {
        self.to_bits()
    }
    fn from_raw_bits(b: u64) -> f64 {
        f64::from_bits(b)
    }
    fn sign(self) -> bool {
        self.to_bits() >> 63 != 0
    }
    fn biased_exponent(self) -> u32 {
        ((self.to_bits() >> 52) & 0x7ff) as u32
    }
    fn mantissa(self) -> u128 {
        (self.to_bits() & 0x000f_ffff_ffff_ffff) as u128
    }
    fn from_fields(sign: bool, exp: u32, mant: u128) -> f64 {
        let m = mant as u64 & 0x000f_ffff_ffff_ffff;
        f64::from_bits(((sign as u64) << 63) | (((exp & 0x7ff) as u64) << 52) | m)
    }
}

impl FloatBits for Ld80 {
    type Bits = u128;
    const EXP_BITS: u32 = 15;
    const MANT_BITS: u32 = 64;
    const EXPLICIT_INT: bool = true;

    fn raw_bits(self) -> u128 {
        self.to_bits()
    }
    fn from_raw_bits(b: u128) -> Ld80 {
        Ld80::from_bits(b)
    }
    fn sign(self) -> bool {
        self.expsign() & 0x8000 != 0
    }
    fn biased_exponent(self) -> u32 {
        (self.expsign() & 0x7fff) as u32
    }
    fn mantissa(self) -> u128 {
        self.mantissa() as u128
    }
    fn from_fields(sign: bool, exp: u32, mant: u128) -> Ld80 {
        Ld80::from_parts(((sign as u16) << 15) | (exp & 0x7fff) as u16, mant as u64)
    }
}

impl FloatBits for Ld128 {
    type Bits = u128;
    const EXP_BITS: u32 = 15;
    const MANT_BITS: u32 = 112;
    const EXPLICIT_INT: bool = false;

    fn raw_bits(self) -> u128 {
        self.to_bits()
    }
    fn from_raw_bits(b: u128) -> Ld128 {
        Ld128::from_bits(b)
    }
    fn sign(self) -> bool {
        self.to_bits() >> 127 != 0
    }
    fn biased_exponent(self) -> u32 {
        (self.expsign() & 0x7fff) as u32
    }
    fn mantissa(self) -> u128 {
        self.to_bits() & ((1u128 << 112) - 1)
    }
    fn from_fields(sign: bool, exp: u32, mant: u128) -> Ld128 {
        Ld128::from_bits(
            ((sign as u128) << 127) | (((exp & 0x7fff) as u128) << 112) | (mant & ((1u128 << 112) - 1)),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn words_of_one() {
        assert_eq!(extract_words(1.0), (0x3ff0_0000, 0));
        assert_eq!(insert_words(0xc000_0000, 0), -2.0);
        assert_eq!(set_high_word(0.0, 0x3ff0_0000), 1.0);
        assert_eq!(set_low_word(1.0, 1).to_bits(), 0x3ff0_0000_0000_0001);
        assert_eq!(get_float_word(1.0f32), 0x3f80_0000);
    }

    #[test]
    fn signaling_nan_payload_survives() {
        let snan = 0x7ff0_0000_dead_beefu64;
        let (hi, lo) = extract_words(f64::from_bits(snan));
        assert_eq!(insert_words(hi, lo).to_bits(), snan);
        let x = f32::from_bits(0xff80_0001);
        assert_eq!(set_float_word(get_float_word(x)).to_bits(), 0xff80_0001);
    }

    #[test]
    fn fields_rebuild_the_pattern() {
        let x = -1.5f64;
        let y = f64::from_fields(x.sign(), x.biased_exponent(), x.mantissa());
        assert_eq!(y.to_bits(), x.to_bits());
        let e = Ld80::from_parts(0x3fff, 0x8000_0000_0000_0000);
        assert_eq!(e.biased_exponent(), 0x3fff);
        assert_eq!(FloatBits::mantissa(e), 1u128 << 63);
        let q = Ld128::from_fields(true, 0x3fff, 0);
        assert_eq!(q.to_f64(), -1.0);
    }

    fn rebuild<T: FloatBits>(x: T) -> T {
        T::from_fields(x.sign(), x.biased_exponent(), FloatBits::mantissa(x))
    }

    #[test]
    fn extended_patterns_survive() {
        let patterns: [(u16, u64); 10] = [
            (0x7fff, 0xc000_0000_dead_beef), // quiet NaN with payload
            (0xffff, 0x8000_0000_0000_0001), // signaling NaN
            (0x7fff, 0x8000_0000_0000_0000), // infinity
            (0x7fff, 0x0000_0000_0000_0000), // pseudo-infinity
            (0x7fff, 0x4000_0000_0000_0001), // pseudo-NaN
            (0x3fff, 0x4000_0000_0000_0000), // unnormal
            (0x0000, 0x8000_0000_0000_0000), // pseudo-denormal
            (0x8000, 0x0000_0000_0000_0001), // smallest subnormal, negative
            (0x0000, 0x7fff_ffff_ffff_ffff), // largest subnormal
            (0x8000, 0x0000_0000_0000_0000), // -0
        ];
        for (se, man) in patterns {
            let x = Ld80::from_parts(se, man);
            assert_eq!(rebuild(x).to_parts(), (se, man));
            assert_eq!(Ld80::from_raw_bits(x.raw_bits()).to_parts(), (se, man));
            assert_eq!(Ld80::from_le_bytes(x.to_le_bytes()).to_parts(), (se, man));
        }
        let clear = Ld80::from_parts(0x3fff, 0x4000_0000_0000_0000);
        assert_eq!(FloatBits::mantissa(clear) >> 63, 0);
    }

    #[test]
    fn quad_patterns_survive() {
        let patterns: [u128; 7] = [
            0x7fff_8000_0000_0000_0000_0000_dead_beef, // quiet NaN with payload
            0xffff_0000_0000_0000_0000_0000_0000_0001, // signaling NaN
            0x7fff_0000_0000_0000_0000_0000_0000_0000, // infinity
            0x0000_0000_0000_0000_0000_0000_0000_0001, // smallest subnormal
            0x8000_ffff_ffff_ffff_ffff_ffff_ffff_ffff, // largest subnormal, negative
            0x7ffe_ffff_ffff_ffff_ffff_ffff_ffff_ffff, // largest finite
            0x8000_0000_0000_0000_0000_0000_0000_0000, // -0
        ];
        for b in patterns {
            let x = Ld128::from_raw_bits(b);
            assert_eq!(rebuild(x).to_bits(), b);
            assert_eq!(x.raw_bits(), b);
            assert_eq!(Ld128::from_le_bytes(x.to_le_bytes()).to_bits(), b);
            let (hi, lo) = x.to_words();
            assert_eq!(Ld128::from_words(hi, lo).to_bits(), b);
        }
    }

    use proptest::prelude::*;
    proptest! {
        #[test]
        fn ptest_f32_fields(b in any::<u32>()) {
            prop_assert_eq!(rebuild(f32::from_bits(b)).to_bits(), b);
        }

        #[test]
        fn ptest_f64_words_and_fields(b in any::<u64>()) {
            let x = f64::from_bits(b);
            let (hi, lo) = extract_words(x);
            prop_assert_eq!(insert_words(hi, lo).to_bits(), b);
            prop_assert_eq!(rebuild(x).to_bits(), b);
        }

        #[test]
        fn ptest_ld80_fields(se in any::<u16>(), man in any::<u64>()) {
            let x = Ld80::from_parts(se, man);
            prop_assert_eq!(rebuild(x).to_parts(), (se, man));
            prop_assert_eq!(Ld80::from_raw_bits(x.raw_bits()).to_parts(), (se, man));
        }

        #[test]
        fn ptest_ld128_fields(b in any::<u128>()) {
            let x = Ld128::from_raw_bits(b);
            prop_assert_eq!(rebuild(x).to_bits(), b);
        }
    }
}
