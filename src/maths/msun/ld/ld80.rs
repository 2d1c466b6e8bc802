//! x87 80-bit extended precision: 15-bit exponent, 64-bit significand with
//! an explicit integer bit.

use super::soft::{BIAS, EMIN, Kind, Unpacked};

/// An x87 extended-precision value stored as its sign/exponent word and
/// 64-bit significand.
#[derive(Clone, Copy, Default)]
pub struct Ld80 {
    se: u16,
    man: u64,
}

impl Ld80 {
    const INT_BIT: u64 = 1 << 63;

    pub const INFINITY: Ld80 = Ld80::from_parts(0x7fff, Self::INT_BIT);
    pub const NEG_INFINITY: Ld80 = Ld80::from_parts(0xffff, Self::INT_BIT);
    pub const NAN: Ld80 = Ld80::from_parts(0x7fff, 0xc000_0000_0000_0000);
    pub const MAX: Ld80 = Ld80::from_parts(0x7ffe, u64::MAX);
    pub const MIN_POSITIVE: Ld80 = Ld80::from_parts(0x0001, Self::INT_BIT);
    /// 2^-63
    pub const EPSILON: Ld80 = Ld80::pow2(-63);

    /// `2^e` for `e` in the normal range.
    pub(crate) const fn pow2(e: i32) -> Ld80 {
        Ld80::from_parts((BIAS + e) as u16, Self::INT_BIT)
    }

    /// Build from the sign/exponent word and the full significand.
    #[inline(always)]
    pub const fn from_parts(expsign: u16, mantissa: u64) -> Ld80 {
        Ld80 {
            se: expsign,
            man: mantissa,
        }
    }

    #[inline(always)]
    pub const fn to_parts(self) -> (u16, u64) {
        (self.se, self.man)
    }

    #[inline(always)]
    pub const fn expsign(self) -> u16 {
        self.se
    }

    #[inline(always)]
    pub const fn mantissa(self) -> u64 {
        self.man
    }

    /// High and low 32-bit halves of the significand.
    #[inline(always)]
    pub const fn mantissa_words(self) -> (u32, u32) {
        ((self.man >> 32) as u32, self.man as u32)
    }

    /// Pattern in the low 80 bits: exponent word above the significand.
    #[inline(always)]
    pub const fn to_bits(self) -> u128 {
        ((self.se as u128) << 64) | self.man as u128
    }

    /// Inverse of [`Ld80::to_bits`]; bits above 80 are ignored.
    #[inline(always)]
    pub const fn from_bits(b: u128) -> Ld80 {
        Ld80 {
            se: (b >> 64) as u16,
            man: b as u64,
        }
    }

    /// x87 memory image: significand then exponent word, little-endian.
    pub const fn to_le_bytes(self) -> [u8; 10] {
        let m = self.man.to_le_bytes();
        let e = self.se.to_le_bytes();
        [m[0], m[1], m[2], m[3], m[4], m[5], m[6], m[7], e[0], e[1]]
    }

    pub const fn from_le_bytes(b: [u8; 10]) -> Ld80 {
        let man = u64::from_le_bytes([b[0], b[1], b[2], b[3], b[4], b[5], b[6], b[7]]);
        Ld80 {
            se: u16::from_le_bytes([b[8], b[9]]),
            man,
        }
    }

    pub(super) fn unpack(self) -> Unpacked {
        let neg = self.se & 0x8000 != 0;
        let e = (self.se & 0x7fff) as i32;
        let man = self.man;
        if e == 0x7fff {
            if man << 1 == 0 {
                return Unpacked::inf(neg);
            }
            return Unpacked {
                neg,
                kind: Kind::Nan,
                exp: 0,
                sig: (man as u128) << 64,
            };
        }
        if e == 0 {
            // denormals and pseudo-denormals share the same scale
            return Unpacked::finite(neg, EMIN + 64, man as u128);
        }
        if man & Self::INT_BIT == 0 {
            // unnormals are invalid operands
            return Unpacked::nan();
        }
        Unpacked {
            neg,
            kind: Kind::Finite,
            exp: e - BIAS,
            sig: (man as u128) << 64,
        }
    }

    /// `u` must already be rounded to 64 bits.
    pub(super) fn pack(u: Unpacked) -> Ld80 {
        let sign = (u.neg as u16) << 15;
        match u.kind {
            Kind::Zero => Ld80::from_parts(sign, 0),
            Kind::Inf => Ld80::from_parts(sign | 0x7fff, Self::INT_BIT),
            Kind::Nan => Ld80::from_parts(sign | 0x7fff, (u.sig >> 64) as u64 | Self::INT_BIT),
            Kind::Finite => {
                if u.exp < EMIN {
                    Ld80::from_parts(sign, ((u.sig >> 64) >> (EMIN - u.exp)) as u64)
                } else {
                    Ld80::from_parts(sign | (u.exp + BIAS) as u16, (u.sig >> 64) as u64)
                }
            }
        }
    }
}
