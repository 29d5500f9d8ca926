// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use core::ops::Mul;

use tracing::debug;

use crate::{scalar, MathError, Mat4, Vec3, EPSILON};

/// `|dot|` at or above which [`Quat::slerp`] falls back to linear weights.
pub const SLERP_LINEAR_THRESHOLD: f32 = 0.9999;

/// Quaternion stored as `(x, y, z, w)` with `w` the scalar part.
///
/// * All angles are expressed in radians.
/// * Only unit quaternions represent rotations; the rotating operations do
///   not renormalize their inputs.
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Quat {
    data: [f32; 4],
}

impl Quat {
    /// The identity rotation `(0, 0, 0, 1)`.
    pub const IDENTITY: Self = Self::new(0.0, 0.0, 0.0, 1.0);

    /// Creates a quaternion from components.
    ///
    /// Use [`Quat::from_axis_angle`] for axis/angle construction.
    pub const fn new(x: f32, y: f32, z: f32, w: f32) -> Self {
        Self { data: [x, y, z, w] }
    }

    /// Returns the identity quaternion.
    pub const fn identity() -> Self {
        Self::IDENTITY
    }

    /// Builds a quaternion from a vector part and a scalar part.
    pub fn from_parts(v: Vec3, w: f32) -> Self {
        Self::new(v.x(), v.y(), v.z(), w)
    }

    /// Constructs a quaternion from a unit rotation axis and angle in radians:
    /// `(axis · sin(rad/2), cos(rad/2))`.
    ///
    /// The axis is used as given; a non-unit axis yields a non-unit
    /// quaternion.
    pub fn from_axis_angle(axis: Vec3, rad: f32) -> Self {
        let (sin_half, cos_half) = (rad * 0.5).sin_cos();
        Self::from_parts(axis * sin_half, cos_half)
    }

    /// Overwrites all four components.
    pub fn set(&mut self, x: f32, y: f32, z: f32, w: f32) {
        self.data = [x, y, z, w];
    }

    /// X component of the vector part.
    pub fn x(&self) -> f32 {
        self.data[0]
    }

    /// Y component of the vector part.
    pub fn y(&self) -> f32 {
        self.data[1]
    }

    /// Z component of the vector part.
    pub fn z(&self) -> f32 {
        self.data[2]
    }

    /// Scalar part.
    pub fn w(&self) -> f32 {
        self.data[3]
    }

    /// The vector part `(x, y, z)`.
    pub fn vector_part(&self) -> Vec3 {
        Vec3::new(self.x(), self.y(), self.z())
    }

    /// Returns the quaternion as an array.
    pub fn to_array(self) -> [f32; 4] {
        self.data
    }

    /// Negates the vector part; for unit quaternions this is the inverse
    /// rotation.
    pub fn conjugate_in_place(&mut self) {
        for c in &mut self.data[..3] {
            *c = -*c;
        }
    }

    /// Conjugated copy.
    pub fn conjugate(&self) -> Self {
        let mut out = *self;
        out.conjugate_in_place();
        out
    }

    /// Sum of the four squared components.
    pub fn length_squared(&self) -> f32 {
        Self::dot(self, self)
    }

    /// 4-component Euclidean length.
    pub fn length(&self) -> f32 {
        self.length_squared().sqrt()
    }

    /// Divides all four components by [`Quat::length`].
    ///
    /// A zero quaternion yields NaN components; debug builds assert.
    pub fn normalize_in_place(&mut self) {
        let len = self.length();
        debug_assert!(len > 0.0, "normalize of zero-length Quat");
        for c in &mut self.data {
            *c /= len;
        }
    }

    /// Normalized copy. See [`Quat::normalize_in_place`].
    pub fn normalize(&self) -> Self {
        let mut out = *self;
        out.normalize_in_place();
        out
    }

    /// Normalized copy, or [`MathError::ZeroLength`] when `length <= EPSILON`.
    pub fn try_normalize(&self) -> Result<Self, MathError> {
        let len = self.length();
        if len <= EPSILON {
            debug!(len, "rejecting Quat normalization");
            return Err(MathError::ZeroLength);
        }
        Ok(self.scaled(1.0 / len))
    }

    /// 4-component inner product.
    pub fn dot(a: &Self, b: &Self) -> f32 {
        a.x() * b.x() + a.y() * b.y() + a.z() * b.z() + a.w() * b.w()
    }

    /// Componentwise linear interpolation followed by normalization.
    ///
    /// Cheaper than [`Quat::slerp`] but not constant angular velocity.
    pub fn lerp(a: &Self, b: &Self, rate: f32) -> Self {
        let mut out = Self::new(
            scalar::lerp(a.x(), b.x(), rate),
            scalar::lerp(a.y(), b.y(), rate),
            scalar::lerp(a.z(), b.z(), rate),
            scalar::lerp(a.w(), b.w(), rate),
        );
        out.normalize_in_place();
        out
    }

    /// Spherical linear interpolation along the shortest arc.
    ///
    /// When the raw dot product is negative the weight on `b` is negated, so
    /// the path runs towards `-b` (the same rotation). Near-parallel inputs
    /// (`|dot| >= SLERP_LINEAR_THRESHOLD`) use linear weights. The result is
    /// normalized.
    ///
    /// # Examples
    /// ```
    /// use core::f32::consts::FRAC_PI_2;
    /// use mir_math::{Quat, Vec3};
    /// let a = Quat::IDENTITY;
    /// let b = Quat::from_axis_angle(Vec3::UNIT_Y, FRAC_PI_2);
    /// let mid = Quat::slerp(&a, &b, 0.5);
    /// let expected = Quat::from_axis_angle(Vec3::UNIT_Y, FRAC_PI_2 / 2.0);
    /// assert!((Quat::dot(&mid, &expected) - 1.0).abs() < 1e-6);
    /// ```
    pub fn slerp(a: &Self, b: &Self, rate: f32) -> Self {
        let raw_cos = Self::dot(a, b);
        let cos_omega = raw_cos.abs();

        let (scale0, mut scale1) = if cos_omega < SLERP_LINEAR_THRESHOLD {
            let omega = cos_omega.acos();
            let csc_omega = scalar::csc(omega);
            (
                ((1.0 - rate) * omega).sin() * csc_omega,
                (rate * omega).sin() * csc_omega,
            )
        } else {
            (1.0 - rate, rate)
        };

        if raw_cos < 0.0 {
            scale1 = -scale1;
        }

        let mut out = Self::new(
            scale0 * a.x() + scale1 * b.x(),
            scale0 * a.y() + scale1 * b.y(),
            scale0 * a.z() + scale1 * b.z(),
            scale0 * a.w() + scale1 * b.w(),
        );
        out.normalize_in_place();
        out
    }

    /// Composes two rotations: rotate by `q`, then by `p`.
    ///
    /// Vector part `p.w·qv + q.w·pv + pv × qv`, scalar part
    /// `p.w·q.w − pv·qv`; equal to the Hamilton product `p * q`.
    ///
    /// # Examples
    /// ```
    /// use core::f32::consts::FRAC_PI_2;
    /// use mir_math::{Quat, Vec3};
    /// let q = Quat::from_axis_angle(Vec3::UNIT_Z, FRAC_PI_2); // X -> Y
    /// let p = Quat::from_axis_angle(Vec3::UNIT_X, FRAC_PI_2); // Y -> Z
    /// let v = Vec3::UNIT_X.transform_quat(&Quat::concatenate(&q, &p));
    /// assert!((v - Vec3::UNIT_Z).length() < 1e-6);
    /// ```
    pub fn concatenate(q: &Self, p: &Self) -> Self {
        let qv = q.vector_part();
        let pv = p.vector_part();
        let v = qv * p.w() + pv * q.w() + pv.cross(&qv);
        Self::from_parts(v, p.w() * q.w() - pv.dot(&qv))
    }

    /// Converts the quaternion to a row-major rotation matrix.
    ///
    /// Row `i` is basis vector `i` rotated by `self`, matching
    /// [`Vec3::transform_quat`] under the row-vector convention. The
    /// quaternion is assumed to be unit length.
    pub fn to_mat4(&self) -> Mat4 {
        let (x, y, z, w) = (self.x(), self.y(), self.z(), self.w());

        let xx = x * x;
        let yy = y * y;
        let zz = z * z;
        let xy = x * y;
        let xz = x * z;
        let yz = y * z;
        let wx = w * x;
        let wy = w * y;
        let wz = w * z;

        Mat4::new([
            [1.0 - 2.0 * (yy + zz), 2.0 * (xy + wz), 2.0 * (xz - wy), 0.0],
            [2.0 * (xy - wz), 1.0 - 2.0 * (xx + zz), 2.0 * (yz + wx), 0.0],
            [2.0 * (xz + wy), 2.0 * (yz - wx), 1.0 - 2.0 * (xx + yy), 0.0],
            [0.0, 0.0, 0.0, 1.0],
        ])
    }

    /// Extracts the rotation from the upper 3×3 of `m` (Shepperd's method).
    ///
    /// `m` must be a proper rotation under the row-vector convention; the
    /// result is the inverse of [`Quat::to_mat4`] up to sign.
    pub fn from_mat4(m: &Mat4) -> Self {
        let m00 = m.at(0, 0);
        let m11 = m.at(1, 1);
        let m22 = m.at(2, 2);
        let trace = m00 + m11 + m22;

        if trace > 0.0 {
            let s = (trace + 1.0).sqrt() * 2.0; // 4w
            Self::new(
                (m.at(1, 2) - m.at(2, 1)) / s,
                (m.at(2, 0) - m.at(0, 2)) / s,
                (m.at(0, 1) - m.at(1, 0)) / s,
                0.25 * s,
            )
        } else if m00 > m11 && m00 > m22 {
            let s = (1.0 + m00 - m11 - m22).sqrt() * 2.0; // 4x
            Self::new(
                0.25 * s,
                (m.at(0, 1) + m.at(1, 0)) / s,
                (m.at(0, 2) + m.at(2, 0)) / s,
                (m.at(1, 2) - m.at(2, 1)) / s,
            )
        } else if m11 > m22 {
            let s = (1.0 + m11 - m00 - m22).sqrt() * 2.0; // 4y
            Self::new(
                (m.at(0, 1) + m.at(1, 0)) / s,
                0.25 * s,
                (m.at(1, 2) + m.at(2, 1)) / s,
                (m.at(2, 0) - m.at(0, 2)) / s,
            )
        } else {
            let s = (1.0 + m22 - m00 - m11).sqrt() * 2.0; // 4z
            Self::new(
                (m.at(0, 2) + m.at(2, 0)) / s,
                (m.at(1, 2) + m.at(2, 1)) / s,
                0.25 * s,
                (m.at(0, 1) - m.at(1, 0)) / s,
            )
        }
    }

    fn scaled(&self, k: f32) -> Self {
        Self::new(self.x() * k, self.y() * k, self.z() * k, self.w() * k)
    }
}

impl Default for Quat {
    fn default() -> Self {
        Self::IDENTITY
    }
}

/// Converts a 4‑element `[f32; 4]` array `(x, y, z, w)` into a `Quat`.
/// The components are taken verbatim; normalization is not enforced.
impl From<[f32; 4]> for Quat {
    fn from(value: [f32; 4]) -> Self {
        Self { data: value }
    }
}

/// Hamilton product `self * rhs`: applies `rhs` first, then `self`.
impl Mul for Quat {
    type Output = Self;
    fn mul(self, rhs: Self) -> Self {
        let (ax, ay, az, aw) = (self.x(), self.y(), self.z(), self.w());
        let (bx, by, bz, bw) = (rhs.x(), rhs.y(), rhs.z(), rhs.w());

        Self::new(
            aw * bx + ax * bw + ay * bz - az * by,
            aw * by - ax * bz + ay * bw + az * bx,
            aw * bz + ax * by - ay * bx + az * bw,
            aw * bw - ax * bx - ay * by - az * bz,
        )
    }
}
