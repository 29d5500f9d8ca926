// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use core::ops::{Add, AddAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use tracing::debug;

use crate::{MathError, Mat4, Quat, EPSILON, INF};

/// 3D vector used throughout the engine for positions, directions, and colours.
///
/// * Components encode world-space units and may represent either points or
///   directions depending on the calling context.
/// * Use [`Vec3::transform`] with `w = 1` for points and `w = 0` for
///   directions, or the [`Mat4::transform_point`] /
///   [`Mat4::transform_direction`] shorthands.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vec3 {
    data: [f32; 3],
}

impl Vec3 {
    /// The zero vector.
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0);

    /// Unit vector pointing along the positive X axis.
    pub const UNIT_X: Self = Self::new(1.0, 0.0, 0.0);

    /// Unit vector pointing along the positive Y axis.
    pub const UNIT_Y: Self = Self::new(0.0, 1.0, 0.0);

    /// Unit vector pointing along the positive Z axis.
    pub const UNIT_Z: Self = Self::new(0.0, 0.0, 1.0);

    /// Positive infinity in every component.
    pub const INF: Self = Self::new(INF, INF, INF);

    /// Creates a vector from components.
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { data: [x, y, z] }
    }

    /// X component.
    pub fn x(&self) -> f32 {
        self.data[0]
    }

    /// Y component.
    pub fn y(&self) -> f32 {
        self.data[1]
    }

    /// Z component.
    pub fn z(&self) -> f32 {
        self.data[2]
    }

    /// Overwrites all three components.
    pub fn set(&mut self, x: f32, y: f32, z: f32) {
        self.data = [x, y, z];
    }

    /// Returns the components as an array.
    pub fn to_array(self) -> [f32; 3] {
        self.data
    }

    pub(crate) fn component(&self, idx: usize) -> f32 {
        self.data[idx]
    }

    /// Dot product with another vector.
    pub fn dot(&self, other: &Self) -> f32 {
        self.component(0) * other.component(0)
            + self.component(1) * other.component(1)
            + self.component(2) * other.component(2)
    }

    /// Right-handed cross product.
    pub fn cross(&self, other: &Self) -> Self {
        let ax = self.component(0);
        let ay = self.component(1);
        let az = self.component(2);
        let bx = other.component(0);
        let by = other.component(1);
        let bz = other.component(2);
        Self::new(ay * bz - az * by, az * bx - ax * bz, ax * by - ay * bx)
    }

    /// Squared magnitude of the vector.
    pub fn length_squared(&self) -> f32 {
        self.dot(self)
    }

    /// Vector length (magnitude).
    pub fn length(&self) -> f32 {
        self.length_squared().sqrt()
    }

    /// Divides every component by [`Vec3::length`].
    ///
    /// Not guarded: a zero vector produces NaN components. Debug builds
    /// assert a non-zero length; use [`Vec3::try_normalize`] for untrusted
    /// input.
    pub fn normalize_in_place(&mut self) {
        let len = self.length();
        debug_assert!(len > 0.0, "normalize of zero-length Vec3");
        for c in &mut self.data {
            *c /= len;
        }
    }

    /// Returns a normalized copy. See [`Vec3::normalize_in_place`].
    pub fn normalize(&self) -> Self {
        let mut out = *self;
        out.normalize_in_place();
        out
    }

    /// Normalized copy, or [`MathError::ZeroLength`] when `length <= EPSILON`.
    pub fn try_normalize(&self) -> Result<Self, MathError> {
        let len = self.length();
        if len <= EPSILON {
            debug!(len, "rejecting Vec3 normalization");
            return Err(MathError::ZeroLength);
        }
        Ok(*self * (1.0 / len))
    }

    /// Unclamped linear interpolation `a + rate * (b - a)`.
    pub fn lerp(a: &Self, b: &Self, rate: f32) -> Self {
        *a + (*b - *a) * rate
    }

    /// Reflects `self` about the plane with unit normal `normal`.
    ///
    /// `normal` must already be unit length; it is not normalized here.
    pub fn reflect(&self, normal: &Self) -> Self {
        *self - *normal * (2.0 * self.dot(normal))
    }

    /// Applies an affine transform with homogeneous weight `w`.
    ///
    /// Computes `[x, y, z, w] · m` and drops the fourth column, so the upper
    /// 3×3 carries rotation/scale and row 3 carries translation.
    ///
    /// # Examples
    /// ```
    /// use mir_math::{Mat4, Vec3};
    /// let t = Mat4::translation(Vec3::new(5.0, -3.0, 2.0));
    /// let p = Vec3::new(2.0, 4.0, -1.0);
    /// assert_eq!(p.transform(&t, 1.0).to_array(), [7.0, 1.0, 1.0]);
    /// assert_eq!(p.transform(&t, 0.0).to_array(), [2.0, 4.0, -1.0]);
    /// ```
    pub fn transform(&self, m: &Mat4, w: f32) -> Self {
        let x = self.component(0);
        let y = self.component(1);
        let z = self.component(2);

        let nx = x * m.at(0, 0) + y * m.at(1, 0) + z * m.at(2, 0) + w * m.at(3, 0);
        let ny = x * m.at(0, 1) + y * m.at(1, 1) + z * m.at(2, 1) + w * m.at(3, 1);
        let nz = x * m.at(0, 2) + y * m.at(1, 2) + z * m.at(2, 2) + w * m.at(3, 2);

        Self::new(nx, ny, nz)
    }

    /// Rotates `self` by a unit quaternion: `v + 2·qv × (qv × v + qw·v)`.
    ///
    /// `q` is not normalized here; a non-unit quaternion also scales.
    pub fn transform_quat(&self, q: &Quat) -> Self {
        let qv = q.vector_part();
        let inner = qv.cross(self) + *self * q.w();
        *self + qv.cross(&inner) * 2.0
    }
}

/// Converts a 3-element `[f32; 3]` array into a `Vec3` interpreted as `(x, y, z)`.
///
/// # Examples
/// ```
/// use mir_math::Vec3;
/// let v = Vec3::from([1.0, 2.0, 3.0]);
/// assert_eq!(v.to_array(), [1.0, 2.0, 3.0]);
/// ```
impl From<[f32; 3]> for Vec3 {
    fn from(value: [f32; 3]) -> Self {
        Self { data: value }
    }
}

impl Add for Vec3 {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        Self::new(
            self.component(0) + rhs.component(0),
            self.component(1) + rhs.component(1),
            self.component(2) + rhs.component(2),
        )
    }
}

impl Sub for Vec3 {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        Self::new(
            self.component(0) - rhs.component(0),
            self.component(1) - rhs.component(1),
            self.component(2) - rhs.component(2),
        )
    }
}

impl Neg for Vec3 {
    type Output = Self;
    fn neg(self) -> Self {
        Self::new(-self.component(0), -self.component(1), -self.component(2))
    }
}

impl Mul<f32> for Vec3 {
    type Output = Self;
    fn mul(self, rhs: f32) -> Self {
        Self::new(
            self.component(0) * rhs,
            self.component(1) * rhs,
            self.component(2) * rhs,
        )
    }
}

impl Mul<Vec3> for f32 {
    type Output = Vec3;
    fn mul(self, rhs: Vec3) -> Vec3 {
        rhs * self
    }
}

impl AddAssign for Vec3 {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl SubAssign for Vec3 {
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl MulAssign<f32> for Vec3 {
    fn mul_assign(&mut self, rhs: f32) {
        *self = *self * rhs;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transform_uses_each_component_once() {
        let m = Mat4::new([
            [1.0, 2.0, 3.0, 0.0],
            [4.0, 5.0, 6.0, 0.0],
            [7.0, 8.0, 9.0, 0.0],
            [10.0, 20.0, 30.0, 1.0],
        ]);
        let v = Vec3::new(1.0, 10.0, 100.0);
        // [1, 10, 100, 1] · m
        assert_eq!(v.transform(&m, 1.0).to_array(), [751.0, 872.0, 993.0]);
        assert_eq!(v.transform(&m, 0.0).to_array(), [741.0, 852.0, 963.0]);
    }

    #[test]
    fn inf_constant_is_infinite_everywhere() {
        assert!(Vec3::INF.to_array().iter().all(|c| c.is_infinite() && *c > 0.0));
    }
}
