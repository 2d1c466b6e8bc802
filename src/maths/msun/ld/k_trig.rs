//! Long-double sin/cos/tan kernels on [-pi/4, pi/4].
//!
//! Same shapes as the double kernels, with the coefficient count set by
//! the per-format tables.

use super::super::real::horner;
use super::LongDouble;

/// sin(x + y); `iy == 0` means `y` is zero.
pub(crate) fn k_sinl<T: LongDouble>(x: T, y: T, iy: i32) -> T {
    let c = T::consts();
    let z = x * x;
    let v = z * x;
    let r = horner(z, &c.sin[1..]);
    if iy == 0 {
        x + v * (c.sin[0] + z * r)
    } else {
        x - ((z * (T::HALF * y - v * r) - y) - v * c.sin[0])
    }
}

/// cos(x + y).
pub(crate) fn k_cosl<T: LongDouble>(x: T, y: T) -> T {
    let c = T::consts();
    let z = x * x;
    let r = z * horner(z, c.cos);
    let hz = T::HALF * z;
    let w = T::ONE - hz;
    w + (((T::ONE - w) - hz) + (z * r - x * y))
}

/// tan(x + y) for `iy == 1`, -1/tan(x + y) for `iy == -1`.
///
/// Above `tan_reflect` the argument is reflected to pi/4 - x.
pub(crate) fn k_tanl<T: LongDouble>(x: T, y: T, iy: i32) -> T {
    let c = T::consts();
    let neg = x.sign();
    let (x, y, reflected) = if x.abs() >= c.tan_reflect {
        let (x, y) = if neg { (-x, -y) } else { (x, y) };
        ((c.pio4 - x) + (c.pio4_lo - y), T::ZERO, true)
    } else {
        (x, y, false)
    };

    let z = x * x;
    let s = z * x;
    let r = y + z * (s * horner(z, &c.tan[1..]) + y) + c.tan[0] * s;
    let w = x + r;

    if reflected {
        let v = T::from_i32(iy);
        let t = v - T::TWO * (x - (w * w / (w + v) - r));
        return if neg { -t } else { t };
    }
    if iy == 1 {
        return w;
    }

    // -1/(x + r) without losing the low bits of r
    let z = w.split_hi();
    let v = r - (z - x);
    let a = -T::ONE / w;
    let t = a.split_hi();
    let s = T::ONE + t * z;
    t + a * (s + t * v)
}
