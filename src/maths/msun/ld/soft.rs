//! Software arithmetic shared by the two long-double layouts.
//!
//! Neither the x87 extended format nor IEEE binary128 has a stable native
//! Rust type, so both are carried as bit patterns and every operation goes
//! through the unpacked form below: a sign, an unbiased exponent and a
//! left-aligned 128-bit significand. Results are rounded to nearest-even
//! with gradual underflow, which is all the kernels ever ask of the FPU.

use core::cmp::Ordering;

/// Exponent bias of both long-double layouts.
pub(crate) const BIAS: i32 = 16383;
/// Unbiased exponent of the smallest normal number.
pub(crate) const EMIN: i32 = 1 - BIAS;
/// Unbiased exponent of the largest finite binade.
pub(crate) const EMAX: i32 = BIAS;

const TOP: u128 = 1 << 127;
const QUIET: u128 = 1 << 126;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Kind {
    Zero,
    Finite,
    Inf,
    Nan,
}

/// Target format of a rounding step.
#[derive(Clone, Copy, Debug)]
pub(crate) struct Format {
    /// Significand bits, including the leading one.
    pub prec: u32,
    pub emin: i32,
    pub emax: i32,
}

pub(crate) const F64: Format = Format {
    prec: 53,
    emin: -1022,
    emax: 1023,
};

/// Unpacked value: `(-1)^neg * sig / 2^127 * 2^exp` for finite numbers.
///
/// Finite values always have bit 127 of `sig` set. NaNs keep their fraction
/// in `sig` with the quiet bit at position 126.
#[derive(Clone, Copy, Debug)]
pub(crate) struct Unpacked {
    pub neg: bool,
    pub kind: Kind,
    pub exp: i32,
    pub sig: u128,
}

impl Unpacked {
    pub(crate) const fn zero(neg: bool) -> Self {
        Unpacked {
            neg,
            kind: Kind::Zero,
            exp: 0,
            sig: 0,
        }
    }

    pub(crate) const fn inf(neg: bool) -> Self {
        Unpacked {
            neg,
            kind: Kind::Inf,
            exp: 0,
            sig: 0,
        }
    }

    pub(crate) const fn nan() -> Self {
        Unpacked {
            neg: false,
            kind: Kind::Nan,
            exp: 0,
            sig: TOP | QUIET,
        }
    }

    /// Finite value from a significand that need not be normalized.
    pub(crate) fn finite(neg: bool, exp: i32, sig: u128) -> Self {
        if sig == 0 {
            return Unpacked::zero(neg);
        }
        let lz = sig.leading_zeros();
        Unpacked {
            neg,
            kind: Kind::Finite,
            exp: exp - lz as i32,
            sig: sig << lz,
        }
    }

    #[inline]
    pub(crate) fn is_nan(&self) -> bool {
        self.kind == Kind::Nan
    }

    #[inline]
    fn quieted(mut self) -> Self {
        self.sig |= QUIET;
        self
    }

    pub(crate) fn neg(mut self) -> Self {
        self.neg = !self.neg;
        self
    }

    pub(crate) fn abs(mut self) -> Self {
        self.neg = false;
        self
    }

    /// Exact conversion from a double.
    pub(crate) fn from_f64(x: f64) -> Self {
        let u = x.to_bits();
        let neg = (u >> 63) != 0;
        let e = ((u >> 52) & 0x7ff) as i32;
        let m = u & 0x000f_ffff_ffff_ffff;
        match e {
            0x7ff if m == 0 => Unpacked::inf(neg),
            0x7ff => Unpacked {
                neg,
                kind: Kind::Nan,
                exp: 0,
                sig: TOP | ((m as u128) << 75),
            },
            0 if m == 0 => Unpacked::zero(neg),
            0 => Unpacked::finite(neg, -1022 + 127 - 52, m as u128),
            _ => Unpacked {
                neg,
                kind: Kind::Finite,
                exp: e - 1023,
                sig: ((m | (1 << 52)) as u128) << 75,
            },
        }
    }

    pub(crate) fn from_i64(i: i64) -> Self {
        Unpacked::finite(i < 0, 127, i.unsigned_abs() as u128)
    }

    /// Conversion from an unsigned 128-bit integer, rounded to `fmt`.
    pub(crate) fn from_u128(v: u128, fmt: Format) -> Self {
        if v == 0 {
            return Unpacked::zero(false);
        }
        let lz = v.leading_zeros();
        round_pack(false, 127 - lz as i32, v << lz, false, fmt)
    }

    /// Round to double. Overflow goes to infinity and tiny values to zero
    /// through the usual gradual underflow.
    pub(crate) fn to_f64(self) -> f64 {
        let sign = (self.neg as u64) << 63;
        match self.kind {
            Kind::Zero => f64::from_bits(sign),
            Kind::Inf => f64::from_bits(sign | 0x7ff0_0000_0000_0000),
            Kind::Nan => {
                let m = ((self.sig >> 75) as u64) & 0x000f_ffff_ffff_ffff;
                f64::from_bits(sign | 0x7ff8_0000_0000_0000 | m)
            }
            Kind::Finite => {
                let r = round_pack(self.neg, self.exp, self.sig, false, F64);
                match r.kind {
                    Kind::Zero => f64::from_bits(sign),
                    Kind::Inf => f64::from_bits(sign | 0x7ff0_0000_0000_0000),
                    _ => {
                        if r.exp < F64.emin {
                            let m = (r.sig >> 75) >> (F64.emin - r.exp);
                            f64::from_bits(sign | m as u64)
                        } else {
                            let m = ((r.sig >> 75) as u64) & 0x000f_ffff_ffff_ffff;
                            f64::from_bits(sign | (((r.exp + 1023) as u64) << 52) | m)
                        }
                    }
                }
            }
        }
    }

    /// Truncating conversion to i64, saturating outside the range and
    /// mapping NaN to zero.
    pub(crate) fn to_i64(self) -> i64 {
        match self.kind {
            Kind::Zero | Kind::Nan => 0,
            Kind::Inf => {
                if self.neg {
                    i64::MIN
                } else {
                    i64::MAX
                }
            }
            Kind::Finite => {
                if self.exp < 0 {
                    return 0;
                }
                if self.exp >= 63 {
                    return if self.neg { i64::MIN } else { i64::MAX };
                }
                let mag = (self.sig >> (127 - self.exp)) as i64;
                if self.neg { -mag } else { mag }
            }
        }
    }

    /// Parity of the integer part of a finite value.
    pub(crate) fn int_is_odd(self) -> bool {
        if self.kind != Kind::Finite || self.exp < 0 || self.exp > 127 {
            return false;
        }
        (self.sig >> (127 - self.exp)) & 1 == 1
    }

    /// Round to an integral value in the given direction.
    pub(crate) fn round_int(self, mode: IntRound) -> Self {
        if self.kind != Kind::Finite || self.exp >= 127 {
            return self;
        }
        // (integer part, any fraction, fraction against one half)
        let (int_part, rem, half) = if self.exp < 0 {
            let half = match self.exp {
                -1 if self.sig == TOP => Ordering::Equal,
                -1 => Ordering::Greater,
                _ => Ordering::Less,
            };
            (0u128, true, half)
        } else {
            let drop = 127 - self.exp as u32;
            let mask = (1u128 << drop) - 1;
            let r = self.sig & mask;
            let h = 1u128 << (drop - 1);
            (self.sig >> drop, r != 0, r.cmp(&h))
        };
        if !rem {
            return self;
        }
        let up = match mode {
            IntRound::Trunc => false,
            IntRound::Floor => self.neg,
            IntRound::Ceil => !self.neg,
            IntRound::Nearest => {
                half == Ordering::Greater || (half == Ordering::Equal && int_part & 1 == 1)
            }
        };
        let v = if up { int_part + 1 } else { int_part };
        Unpacked::finite(self.neg, 127, v)
    }
}

/// Direction for [`Unpacked::round_int`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum IntRound {
    Nearest,
    Trunc,
    Floor,
    Ceil,
}

/// Round a normalized significand (bit 127 set) plus sticky bit to `fmt`.
pub(crate) fn round_pack(neg: bool, mut exp: i32, sig: u128, sticky: bool, fmt: Format) -> Unpacked {
    let mut keep = fmt.prec as i32;
    if exp < fmt.emin {
        keep -= fmt.emin - exp;
    }
    if keep <= 0 {
        // below the smallest subnormal; only a value above half of it rounds up
        let above_half = keep == 0 && (sig > TOP || (sig == TOP && sticky));
        if above_half {
            return Unpacked {
                neg,
                kind: Kind::Finite,
                exp: fmt.emin - fmt.prec as i32 + 1,
                sig: TOP,
            };
        }
        return Unpacked::zero(neg);
    }
    let drop = 128 - keep as u32;
    let mut kept = sig >> drop;
    let rem = sig & ((1u128 << drop) - 1);
    let half = 1u128 << (drop - 1);
    if rem > half || (rem == half && (sticky || kept & 1 == 1)) {
        kept += 1;
        if kept >> keep == 1 {
            kept >>= 1;
            exp += 1;
        }
    }
    if exp > fmt.emax {
        return Unpacked::inf(neg);
    }
    Unpacked {
        neg,
        kind: Kind::Finite,
        exp,
        sig: kept << drop,
    }
}

#[inline]
fn shift_right_jam(v: u128, d: u32) -> u128 {
    if d == 0 {
        v
    } else if d >= 128 {
        (v != 0) as u128
    } else {
        (v >> d) | ((v << (128 - d)) != 0) as u128
    }
}

fn pick_nan(a: Unpacked, b: Unpacked) -> Unpacked {
    if a.is_nan() { a.quieted() } else { b.quieted() }
}

pub(crate) fn add(a: Unpacked, b: Unpacked, fmt: Format) -> Unpacked {
    use Kind::*;
    match (a.kind, b.kind) {
        (Nan, _) | (_, Nan) => pick_nan(a, b),
        (Inf, Inf) if a.neg != b.neg => Unpacked::nan(),
        (Inf, _) => a,
        (_, Inf) => b,
        (Zero, Zero) => Unpacked::zero(a.neg && b.neg),
        (Zero, _) => b,
        (_, Zero) => a,
        (Finite, Finite) => {
            let (big, small) = if (a.exp, a.sig) >= (b.exp, b.sig) {
                (a, b)
            } else {
                (b, a)
            };
            let d = (big.exp - small.exp) as u32;
            let x = big.sig >> 1;
            let y = shift_right_jam(small.sig >> 1, d);
            let s = if big.neg == small.neg { x + y } else { x - y };
            if s == 0 {
                return Unpacked::zero(false);
            }
            let lz = s.leading_zeros();
            round_pack(big.neg, big.exp + 1 - lz as i32, s << lz, false, fmt)
        }
    }
}

pub(crate) fn sub(a: Unpacked, b: Unpacked, fmt: Format) -> Unpacked {
    if b.is_nan() {
        return add(a, b, fmt);
    }
    add(a, b.neg(), fmt)
}

/// Full 128x128 -> 256 bit product as (high, low).
#[inline]
fn wide_mul(a: u128, b: u128) -> (u128, u128) {
    const M: u128 = u64::MAX as u128;
    let (a1, a0) = (a >> 64, a & M);
    let (b1, b0) = (b >> 64, b & M);
    let p00 = a0 * b0;
    let p01 = a0 * b1;
    let p10 = a1 * b0;
    let p11 = a1 * b1;
    let mid = (p00 >> 64) + (p01 & M) + (p10 & M);
    let lo = (p00 & M) | ((mid & M) << 64);
    let hi = p11 + (p01 >> 64) + (p10 >> 64) + (mid >> 64);
    (hi, lo)
}

pub(crate) fn mul(a: Unpacked, b: Unpacked, fmt: Format) -> Unpacked {
    use Kind::*;
    let neg = a.neg != b.neg;
    match (a.kind, b.kind) {
        (Nan, _) | (_, Nan) => pick_nan(a, b),
        (Inf, Zero) | (Zero, Inf) => Unpacked::nan(),
        (Inf, _) | (_, Inf) => Unpacked::inf(neg),
        (Zero, _) | (_, Zero) => Unpacked::zero(neg),
        (Finite, Finite) => {
            let (hi, lo) = wide_mul(a.sig, b.sig);
            if hi & TOP != 0 {
                round_pack(neg, a.exp + b.exp + 1, hi, lo != 0, fmt)
            } else {
                let sig = (hi << 1) | (lo >> 127);
                round_pack(neg, a.exp + b.exp, sig, (lo << 1) != 0, fmt)
            }
        }
    }
}

pub(crate) fn div(a: Unpacked, b: Unpacked, fmt: Format) -> Unpacked {
    use Kind::*;
    let neg = a.neg != b.neg;
    match (a.kind, b.kind) {
        (Nan, _) | (_, Nan) => pick_nan(a, b),
        (Inf, Inf) | (Zero, Zero) => Unpacked::nan(),
        (Inf, _) | (_, Zero) => Unpacked::inf(neg),
        (Zero, _) | (_, Inf) => Unpacked::zero(neg),
        (Finite, Finite) => {
            let d = b.sig >> 1;
            let mut r = a.sig >> 1;
            let mut q = 0u128;
            for _ in 0..128 {
                q <<= 1;
                if r >= d {
                    r -= d;
                    q |= 1;
                }
                r <<= 1;
            }
            let sticky = r != 0;
            if q & TOP != 0 {
                round_pack(neg, a.exp - b.exp, q, sticky, fmt)
            } else {
                round_pack(neg, a.exp - b.exp - 1, q << 1, sticky, fmt)
            }
        }
    }
}

pub(crate) fn compare(a: Unpacked, b: Unpacked) -> Option<Ordering> {
    use Kind::*;
    if a.is_nan() || b.is_nan() {
        return None;
    }
    if a.kind == Zero && b.kind == Zero {
        return Some(Ordering::Equal);
    }
    let key = |u: Unpacked| -> (i32, i32, u128) {
        // magnitude key: zero < finite < inf
        match u.kind {
            Zero => (0, 0, 0),
            Finite => (1, u.exp, u.sig),
            _ => (2, 0, 0),
        }
    };
    let ord = match (a.neg, b.neg) {
        (false, false) => key(a).cmp(&key(b)),
        (true, true) => key(b).cmp(&key(a)),
        (false, true) => Ordering::Greater,
        (true, false) => Ordering::Less,
    };
    // -0 vs +x and +0 vs -x still order by sign; equal magnitudes were handled
    Some(ord)
}

/// `x * 2^n` with a single rounding.
pub(crate) fn scalbn(x: Unpacked, n: i32, fmt: Format) -> Unpacked {
    if x.kind != Kind::Finite {
        return x;
    }
    let n = n.clamp(-4 * BIAS, 4 * BIAS);
    round_pack(x.neg, x.exp + n, x.sig, false, fmt)
}
