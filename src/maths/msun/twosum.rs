//! Error-free transformations.
//!
//! Each returns `(s, e)` with `s` the rounded result and `s + e` equal to
//! the exact one. The operation order is load-bearing; do not reassociate.

use super::real::Real;

/// Knuth's two-sum: no condition on the operands.
#[inline(always)]
pub fn two_sum<T: Real>(a: T, b: T) -> (T, T) {
    let s = a + b;
    let bb = s - a;
    let err = (a - (s - bb)) + (b - bb);
    (s, err)
}

/// Dekker's fast two-sum.
///
/// Requires `a == 0` or `|a| >= |b|`. This is not checked; when it does not
/// hold the error term is wrong.
#[inline(always)]
pub fn fast_two_sum<T: Real>(a: T, b: T) -> (T, T) {
    let s = a + b;
    (s, (a - s) + b)
}

/// Folds a larger `c` into the normalised pair `(a, b)`.
///
/// `c` must dominate `a`, and the two-sum of `c` and `a` must dominate `b`.
/// Returns the renormalised pair for `c + a + b`.
#[inline(always)]
pub fn three_sum<T: Real>(a: T, b: T, c: T) -> (T, T) {
    let (t, a) = fast_two_sum(c, a);
    let b = b + a;
    fast_two_sum(t, b)
}

/// Veltkamp split into halves whose pairwise products are exact.
#[inline(always)]
fn split<T: Real>(a: T) -> (T, T) {
    let c = T::ONE.scalbn(T::MANT_DIG.div_ceil(2) as i32) + T::ONE;
    let t = c * a;
    let hi = t - (t - a);
    (hi, a - hi)
}

/// Dekker's product: `p + e == a * b` exactly, barring overflow and
/// underflow in the partial products.
#[inline(always)]
pub fn two_prod<T: Real>(a: T, b: T) -> (T, T) {
    let p = a * b;
    let (ah, al) = split(a);
    let (bh, bl) = split(b);
    let err = ((ah * bh - p) + ah * bl + al * bh) + al * bl;
    (p, err)
}
