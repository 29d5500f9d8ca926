// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use core::ops::{Add, AddAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use tracing::debug;

use crate::{MathError, Mat3, EPSILON};

/// 2D vector used for screen-space positions and 2D transforms.
///
/// Apply a [`Mat3`] with [`Vec2::transform`]; pass `w = 1` for points and
/// `w = 0` for directions.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vec2 {
    data: [f32; 2],
}

impl Vec2 {
    /// The zero vector.
    pub const ZERO: Self = Self::new(0.0, 0.0);

    /// Unit vector pointing along the positive X axis.
    pub const UNIT_X: Self = Self::new(1.0, 0.0);

    /// Unit vector pointing along the positive Y axis.
    pub const UNIT_Y: Self = Self::new(0.0, 1.0);

    /// Creates a vector from components.
    pub const fn new(x: f32, y: f32) -> Self {
        Self { data: [x, y] }
    }

    /// X component.
    pub fn x(&self) -> f32 {
        self.data[0]
    }

    /// Y component.
    pub fn y(&self) -> f32 {
        self.data[1]
    }

    /// Overwrites both components.
    pub fn set(&mut self, x: f32, y: f32) {
        self.data = [x, y];
    }

    /// Returns the components as an array.
    pub fn to_array(self) -> [f32; 2] {
        self.data
    }

    /// Sum of squared components.
    pub fn length_squared(&self) -> f32 {
        self.dot(self)
    }

    /// Euclidean length.
    pub fn length(&self) -> f32 {
        self.length_squared().sqrt()
    }

    /// Divides both components by [`Vec2::length`].
    ///
    /// A zero vector yields non-finite components; debug builds assert.
    pub fn normalize_in_place(&mut self) {
        let len = self.length();
        debug_assert!(len > 0.0, "normalize of zero-length Vec2");
        self.data[0] /= len;
        self.data[1] /= len;
    }

    /// Returns a normalized copy. See [`Vec2::normalize_in_place`].
    pub fn normalize(&self) -> Self {
        let mut out = *self;
        out.normalize_in_place();
        out
    }

    /// Normalized copy, or [`MathError::ZeroLength`] when `length <= EPSILON`.
    pub fn try_normalize(&self) -> Result<Self, MathError> {
        let len = self.length();
        if len <= EPSILON {
            debug!(len, "rejecting Vec2 normalization");
            return Err(MathError::ZeroLength);
        }
        Ok(*self * (1.0 / len))
    }

    /// Dot product.
    pub fn dot(&self, other: &Self) -> f32 {
        self.x() * other.x() + self.y() * other.y()
    }

    /// Unclamped linear interpolation `a + rate * (b - a)`.
    pub fn lerp(a: &Self, b: &Self, rate: f32) -> Self {
        *a + (*b - *a) * rate
    }

    /// Reflects `self` about the plane with unit normal `normal`.
    ///
    /// `normal` is not normalized here.
    pub fn reflect(&self, normal: &Self) -> Self {
        *self - *normal * (2.0 * self.dot(normal))
    }

    /// Applies an affine 2D transform with homogeneous weight `w`.
    ///
    /// Row vector on the left: `[x, y, w] · m`, dropping the third column.
    pub fn transform(&self, m: &Mat3, w: f32) -> Self {
        let (x, y) = (self.x(), self.y());
        Self::new(
            x * m.at(0, 0) + y * m.at(1, 0) + w * m.at(2, 0),
            x * m.at(0, 1) + y * m.at(1, 1) + w * m.at(2, 1),
        )
    }
}

impl From<[f32; 2]> for Vec2 {
    fn from(value: [f32; 2]) -> Self {
        Self { data: value }
    }
}

impl Add for Vec2 {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        Self::new(self.x() + rhs.x(), self.y() + rhs.y())
    }
}

impl Sub for Vec2 {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x() - rhs.x(), self.y() - rhs.y())
    }
}

impl Neg for Vec2 {
    type Output = Self;
    fn neg(self) -> Self {
        Self::new(-self.x(), -self.y())
    }
}

impl Mul<f32> for Vec2 {
    type Output = Self;
    fn mul(self, rhs: f32) -> Self {
        Self::new(self.x() * rhs, self.y() * rhs)
    }
}

impl Mul<Vec2> for f32 {
    type Output = Vec2;
    fn mul(self, rhs: Vec2) -> Vec2 {
        rhs * self
    }
}

impl AddAssign for Vec2 {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl SubAssign for Vec2 {
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl MulAssign<f32> for Vec2 {
    fn mul_assign(&mut self, rhs: f32) {
        *self = *self * rhs;
    }
}
