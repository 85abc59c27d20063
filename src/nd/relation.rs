// src/nd/relation.rs
//! Componentwise relation tests shared by `VecN` and the fixed-size wrappers.
//!
//! All functions take two component slices of equal length; callers check the
//! dimensions first.

use crate::nd::types::Scalar;

/// `true` if every component is exactly zero (vacuously true when empty).
#[inline]
pub fn is_zero(v: &[Scalar]) -> bool {
    v.iter().all(|&x| x == 0.0)
}

/// Ratio-based collinearity test.
///
/// A zero vector is collinear with anything. Otherwise zeros must line up
/// index by index, and `a[i] / b[i]` must take exactly one value over the
/// non-zero pairs.
pub fn collinear_by_ratio(a: &[Scalar], b: &[Scalar]) -> bool {
    debug_assert_eq!(a.len(), b.len());
    if is_zero(a) || is_zero(b) {
        return true;
    }

    let mut ratio: Option<Scalar> = None;
    for (&x, &y) in a.iter().zip(b) {
        match (x == 0.0, y == 0.0) {
            (true, true) => continue,
            (true, false) | (false, true) => return false,
            (false, false) => {
                let r = x / y;
                match ratio {
                    None => ratio = Some(r),
                    Some(seen) if seen != r => return false,
                    Some(_) => {}
                }
            }
        }
    }
    ratio.is_some()
}

/// `true` unless some index holds a same-signed, non-cancelling pair.
///
/// Only meaningful once the operands are known to be collinear.
pub fn no_same_sign_pairs(a: &[Scalar], b: &[Scalar]) -> bool {
    debug_assert_eq!(a.len(), b.len());
    !a.iter().zip(b).any(|(&x, &y)| x * y > 0.0 && x + y != 0.0)
}

/// Right-handed 3D cross product on raw components.
#[inline(always)]
pub fn cross3(a: [Scalar; 3], b: [Scalar; 3]) -> [Scalar; 3] {
    [
        a[1] * b[2] - a[2] * b[1],
        a[2] * b[0] - a[0] * b[2],
        a[0] * b[1] - a[1] * b[0],
    ]
}
