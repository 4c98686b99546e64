//! Scalar clamping, interpolation and ramp helpers.
//!
//! All helpers are generic over [`num_traits::Float`] and are pure. Degenerate inputs such as
//! `a == b` in [`map`] or [`smoothstep`] are not guarded: they produce NaN or infinities exactly as
//! IEEE-754 division does. NaN operands propagate through [`clamp`] rather than being discarded.

use num_traits::Float;

#[inline]
fn min_nan<T: Float>(p: T, q: T) -> T {
    if p.is_nan() || q.is_nan() {
        T::nan()
    } else if q < p {
        q
    } else {
        p
    }
}

#[inline]
fn max_nan<T: Float>(p: T, q: T) -> T {
    if p.is_nan() || q.is_nan() {
        T::nan()
    } else if q > p {
        q
    } else {
        p
    }
}

#[inline]
fn lit<T: Float + From<u8>>(v: u8) -> T {
    <T as From<u8>>::from(v)
}

#[inline]
/// Restrict `x` to `[a, b]`, computed as `max(a, min(b, x))`.
///
/// The bounds are not reordered: with `a > b` the outer `max` wins and the result is `a`.
pub fn clamp<T: Float>(a: T, b: T, x: T) -> T {
    max_nan(a, min_nan(b, x))
}

#[inline]
/// Interpolate from `a` to `b`. `t` is clamped to `[0, 1]` first, so the result never
/// extrapolates past either endpoint.
pub fn lerp<T: Float>(a: T, b: T, t: T) -> T {
    a + clamp(T::zero(), T::one(), t) * (b - a)
}

#[inline]
/// Affinely remap `x` from `[a, b]` onto `[c, d]`. Unclamped.
pub fn map<T: Float>(a: T, b: T, c: T, d: T, x: T) -> T {
    (x - a) / (b - a) * (d - c) + c
}

#[inline]
/// Unit step located at `a`: `1` when `x >= a`, else `0`.
pub fn step<T: Float>(a: T, x: T) -> T {
    if x >= a { T::one() } else { T::zero() }
}

#[inline]
/// `step(a, x) - step(b, x)`.
///
/// `1` on `[a, b)`, `0` elsewhere, and `-1` on `[b, a)` when the edges are swapped.
pub fn pulse<T: Float>(a: T, b: T, x: T) -> T {
    step(a, x) - step(b, x)
}

#[inline]
/// Clamped linear ramp from `0` at `a` to `1` at `b`.
pub fn linstep<T: Float>(a: T, b: T, x: T) -> T {
    clamp(T::zero(), T::one(), (x - a) / (b - a))
}

#[inline]
/// Quintic ease from `0` at `a` to `1` at `b` (C2-continuous at both edges).
pub fn smoothstep<T: Float + From<u8>>(a: T, b: T, x: T) -> T {
    let t = linstep(a, b, x);
    t * t * t * ((lit::<T>(6) * t - lit::<T>(15)) * t + lit::<T>(10))
}

#[cfg(test)]
#[path = "../../tests/unit/numeric/interp.rs"]
mod tests;
