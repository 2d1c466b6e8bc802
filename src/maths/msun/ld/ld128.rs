//! IEEE binary128: 15-bit exponent, 112 stored fraction bits.

use super::soft::{BIAS, EMIN, Kind, Unpacked};

const FRAC_MASK: u128 = (1 << 112) - 1;

/// A quad-precision value carried as its 128-bit pattern.
#[derive(Clone, Copy, Default)]
pub struct Ld128(u128);

impl Ld128 {
    pub const INFINITY: Ld128 = Ld128(0x7fff << 112);
    pub const NEG_INFINITY: Ld128 = Ld128(0xffff << 112);
    pub const NAN: Ld128 = Ld128((0x7fff << 112) | (1 << 111));
    pub const MAX: Ld128 = Ld128((0x7ffe << 112) | FRAC_MASK);
    pub const MIN_POSITIVE: Ld128 = Ld128(1 << 112);
    /// 2^-112
    pub const EPSILON: Ld128 = Ld128::pow2(-112);

    /// `2^e` for `e` in the normal range.
    pub(crate) const fn pow2(e: i32) -> Ld128 {
        Ld128(((BIAS + e) as u128) << 112)
    }

    #[inline(always)]
    pub const fn from_bits(b: u128) -> Ld128 {
        Ld128(b)
    }

    #[inline(always)]
    pub const fn to_bits(self) -> u128 {
        self.0
    }

    /// Build from the high and low 64-bit words.
    #[inline(always)]
    pub const fn from_words(hi: u64, lo: u64) -> Ld128 {
        Ld128(((hi as u128) << 64) | lo as u128)
    }

    #[inline(always)]
    pub const fn to_words(self) -> (u64, u64) {
        ((self.0 >> 64) as u64, self.0 as u64)
    }

    /// Sign and biased exponent, the top 16 bits.
    #[inline(always)]
    pub const fn expsign(self) -> u16 {
        (self.0 >> 112) as u16
    }

    pub const fn to_le_bytes(self) -> [u8; 16] {
        self.0.to_le_bytes()
    }

    pub const fn from_le_bytes(b: [u8; 16]) -> Ld128 {
        Ld128(u128::from_le_bytes(b))
    }

    pub(super) fn unpack(self) -> Unpacked {
        let neg = self.0 >> 127 != 0;
        let e = ((self.0 >> 112) & 0x7fff) as i32;
        let frac = self.0 & FRAC_MASK;
        match e {
            0x7fff if frac == 0 => Unpacked::inf(neg),
            0x7fff => Unpacked {
                neg,
                kind: Kind::Nan,
                exp: 0,
                sig: frac << 15,
            },
            0 => Unpacked::finite(neg, EMIN + 15, frac),
            _ => Unpacked {
                neg,
                kind: Kind::Finite,
                exp: e - BIAS,
                sig: (1u128 << 127) | (frac << 15),
            },
        }
    }

    /// `u` must already be rounded to 113 bits.
    pub(super) fn pack(u: Unpacked) -> Ld128 {
        let sign = (u.neg as u128) << 127;
        match u.kind {
            Kind::Zero => Ld128(sign),
            Kind::Inf => Ld128(sign | (0x7fffu128 << 112)),
            Kind::Nan => {
                let mut frac = (u.sig >> 15) & FRAC_MASK;
                if frac == 0 {
                    frac = 1 << 111;
                }
                Ld128(sign | (0x7fffu128 << 112) | frac)
            }
            Kind::Finite => {
                if u.exp < EMIN {
                    Ld128(sign | ((u.sig >> 15) >> (EMIN - u.exp)))
                } else {
                    Ld128(sign | (((u.exp + BIAS) as u128) << 112) | ((u.sig >> 15) & FRAC_MASK))
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn words_split_the_pattern() {
        let one = Ld128::from_words(0x3fff_0000_0000_0000, 0);
        assert_eq!(one.expsign(), 0x3fff);
        assert_eq!(one.to_words(), (0x3fff_0000_0000_0000, 0));
        let u = one.unpack();
        assert_eq!((u.exp, u.sig), (0, 1u128 << 127));
    }

    #[test]
    fn subnormal_pack_roundtrip() {
        let tiny = Ld128::from_bits(1);
        assert_eq!(Ld128::pack(tiny.unpack()).to_bits(), 1);
        let s = Ld128::from_bits(0x0000_8000_0000_0000_0000_0000_0000_0003);
        assert_eq!(Ld128::pack(s.unpack()).to_bits(), s.to_bits());
    }
}
