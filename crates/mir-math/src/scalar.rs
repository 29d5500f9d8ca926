// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

//! Scalar helpers shared by the vector, matrix, and quaternion types.
//!
//! Plain trigonometry, `abs`, and `sqrt` are the inherent `f32` methods; this
//! module only adds what `f32` lacks.

/// Archimedes' constant with `f32` precision.
pub const PI: f32 = core::f32::consts::PI;

/// Positive infinity, used by [`crate::Vec3::INF`].
pub const INF: f32 = f32::INFINITY;

/// Degeneracy threshold used by the checked (`try_*`) operations.
pub const EPSILON: f32 = 1e-6;

/// Default tolerance for [`is_near_zero`].
pub const NEAR_ZERO_EPSILON: f32 = 0.001;

/// Converts degrees to radians.
pub fn deg_to_rad(deg: f32) -> f32 {
    deg * PI / 180.0
}

/// Converts radians to degrees.
pub fn rad_to_deg(rad: f32) -> f32 {
    rad * 180.0 / PI
}

/// Returns `true` when `|value| <= NEAR_ZERO_EPSILON`.
pub fn is_near_zero(value: f32) -> bool {
    is_near_zero_eps(value, NEAR_ZERO_EPSILON)
}

/// Returns `true` when `|value| <= epsilon`.
pub fn is_near_zero_eps(value: f32, epsilon: f32) -> bool {
    value.abs() <= epsilon
}

/// Secant, `1 / cos(rad)`.
pub fn sec(rad: f32) -> f32 {
    1.0 / rad.cos()
}

/// Cosecant, `1 / sin(rad)`.
pub fn csc(rad: f32) -> f32 {
    1.0 / rad.sin()
}

/// Cotangent, `1 / tan(rad)`.
pub fn cot(rad: f32) -> f32 {
    1.0 / rad.tan()
}

/// Linear interpolation `start + rate * (end - start)`; `rate` is not clamped.
pub fn lerp(start: f32, end: f32, rate: f32) -> f32 {
    start + rate * (end - start)
}

/// Floating-point remainder with the sign of `num` (C `fmod` semantics).
pub fn fmod(num: f32, den: f32) -> f32 {
    num % den
}

/// Larger of two values; returns `left` when they compare equal.
pub fn max<T: PartialOrd + Copy>(left: T, right: T) -> T {
    if left < right {
        right
    } else {
        left
    }
}

/// Smaller of two values; returns `left` when they compare equal.
pub fn min<T: PartialOrd + Copy>(left: T, right: T) -> T {
    if left > right {
        right
    } else {
        left
    }
}

/// Clamps `value` into `[lower, upper]`.
///
/// Debug builds assert `lower <= upper`; release builds return `upper` for an
/// inverted range.
pub fn clamp<T: PartialOrd + Copy>(value: T, lower: T, upper: T) -> T {
    debug_assert!(lower <= upper, "invalid clamp range");
    min(upper, max(lower, value))
}
