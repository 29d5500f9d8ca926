// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use core::ops::{Mul, MulAssign};

use tracing::debug;

use crate::{scalar, MathError, Quat, Vec3, EPSILON};

const SIZE: usize = 4;

/// Row‑major 4×4 matrix matching MIR's row-vector math layout.
///
/// - Rows are stored contiguously; `at(row, col)` indexes `data[row][col]`.
/// - Row vectors multiply on the left (`v' = v · M`), so translation occupies
///   the last row and `a * b` applies `a` first, then `b`.
///
/// # Examples
/// Basic transformations:
/// ```
/// use mir_math::{Mat4, Vec3};
/// let m = Mat4::uniform_scale(2.0) * Mat4::translation(Vec3::new(1.0, 0.0, 0.0));
/// let p = m.transform_point(&Vec3::new(1.0, 1.0, 1.0));
/// assert_eq!(p.to_array(), [3.0, 2.0, 2.0]);
/// ```
///
/// # Precision
/// - Uses `f32`; repeated multiplies and inversions accumulate rounding.
/// - Rotation helpers are consistent with [`Quat`] conversions (`from_quat`).
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Mat4 {
    data: [[f32; SIZE]; SIZE],
}

impl Mat4 {
    /// The identity matrix.
    pub const IDENTITY: Self = Self::new([
        [1.0, 0.0, 0.0, 0.0],
        [0.0, 1.0, 0.0, 0.0],
        [0.0, 0.0, 1.0, 0.0],
        [0.0, 0.0, 0.0, 1.0],
    ]);

    /// Creates a matrix from rows, copied verbatim.
    pub const fn new(rows: [[f32; SIZE]; SIZE]) -> Self {
        Self { data: rows }
    }

    /// Returns the identity matrix.
    pub const fn identity() -> Self {
        Self::IDENTITY
    }

    /// Returns the rows.
    pub fn to_rows(self) -> [[f32; SIZE]; SIZE] {
        self.data
    }

    /// Element at `row`, `col`.
    pub fn at(&self, row: usize, col: usize) -> f32 {
        self.data[row][col]
    }

    /// Builds a non-uniform scale matrix.
    pub const fn scale(x: f32, y: f32, z: f32) -> Self {
        Self::new([
            [x, 0.0, 0.0, 0.0],
            [0.0, y, 0.0, 0.0],
            [0.0, 0.0, z, 0.0],
            [0.0, 0.0, 0.0, 1.0],
        ])
    }

    /// Builds a non-uniform scale matrix from a vector.
    pub fn scale_vec(v: Vec3) -> Self {
        Self::scale(v.x(), v.y(), v.z())
    }

    /// Builds a uniform scale matrix.
    pub const fn uniform_scale(s: f32) -> Self {
        Self::scale(s, s, s)
    }

    /// Builds a rotation matrix around the X axis by `rad` radians.
    pub fn rotation_x(rad: f32) -> Self {
        let (s, c) = rad.sin_cos();
        Self::new([
            [1.0, 0.0, 0.0, 0.0],
            [0.0, c,   s,   0.0],
            [0.0, -s,  c,   0.0],
            [0.0, 0.0, 0.0, 1.0],
        ])
    }

    /// Builds a rotation matrix around the Y axis by `rad` radians.
    pub fn rotation_y(rad: f32) -> Self {
        let (s, c) = rad.sin_cos();
        Self::new([
            [c,   0.0, -s,  0.0],
            [0.0, 1.0, 0.0, 0.0],
            [s,   0.0, c,   0.0],
            [0.0, 0.0, 0.0, 1.0],
        ])
    }

    /// Builds a rotation matrix around the Z axis by `rad` radians.
    pub fn rotation_z(rad: f32) -> Self {
        let (s, c) = rad.sin_cos();
        Self::new([
            [c,   s,   0.0, 0.0],
            [-s,  c,   0.0, 0.0],
            [0.0, 0.0, 1.0, 0.0],
            [0.0, 0.0, 0.0, 1.0],
        ])
    }

    /// Builds a rotation matrix from a unit axis and angle in radians.
    ///
    /// Forwards through [`Quat::from_axis_angle`], so the axis is not
    /// normalized.
    pub fn rotation_axis_angle(axis: Vec3, rad: f32) -> Self {
        Self::from_quat(&Quat::from_axis_angle(axis, rad))
    }

    /// Builds a rotation matrix from Euler angles in radians.
    ///
    /// Ordering: `R = R_y(yaw) * R_x(pitch) * R_z(roll)` in product order.
    /// With row vectors on the left that applies yaw first, then pitch, then
    /// roll.
    ///
    /// - `yaw` rotates about +Y
    /// - `pitch` rotates about +X
    /// - `roll` rotates about +Z
    pub fn rotation_from_euler(yaw: f32, pitch: f32, roll: f32) -> Self {
        Self::rotation_y(yaw)
            .multiply(&Self::rotation_x(pitch))
            .multiply(&Self::rotation_z(roll))
    }

    /// Constructs a rotation matrix from a quaternion.
    ///
    /// This simply forwards to [`Quat::to_mat4`].
    pub fn from_quat(q: &Quat) -> Self {
        q.to_mat4()
    }

    /// Builds a translation matrix; the offset occupies row 3.
    pub fn translation(v: Vec3) -> Self {
        Self::new([
            [1.0, 0.0, 0.0, 0.0],
            [0.0, 1.0, 0.0, 0.0],
            [0.0, 0.0, 1.0, 0.0],
            [v.x(), v.y(), v.z(), 1.0],
        ])
    }

    /// Builds a view matrix looking from `eye` towards `target`.
    ///
    /// The camera basis is `z = normalize(target - eye)`,
    /// `x = normalize(up × z)`, `y = z × x`; the basis vectors fill the
    /// columns of the upper 3×3 and row 3 holds `-basis · eye`, so `eye`
    /// maps to the origin and `target` onto +Z.
    ///
    /// `up` parallel to the view direction yields NaN components.
    pub fn look_at(eye: Vec3, target: Vec3, up: Vec3) -> Self {
        let axis_z = (target - eye).normalize();
        let axis_x = up.cross(&axis_z).normalize();
        let axis_y = axis_z.cross(&axis_x).normalize();

        let trans = Vec3::new(-axis_x.dot(&eye), -axis_y.dot(&eye), -axis_z.dot(&eye));

        Self::new([
            [axis_x.x(), axis_y.x(), axis_z.x(), 0.0],
            [axis_x.y(), axis_y.y(), axis_z.y(), 0.0],
            [axis_x.z(), axis_y.z(), axis_z.z(), 0.0],
            [trans.x(), trans.y(), trans.z(), 1.0],
        ])
    }

    /// Orthographic projection of a `width`×`height` view volume with depth
    /// mapped from `[near, far]` onto `[0, 1]`.
    ///
    /// `m33 = 1` so `w` stays 1; the legacy MIR layout left that entry at 0.
    pub fn ortho(width: f32, height: f32, near: f32, far: f32) -> Self {
        Self::new([
            [2.0 / width, 0.0, 0.0, 0.0],
            [0.0, 2.0 / height, 0.0, 0.0],
            [0.0, 0.0, 1.0 / (far - near), 0.0],
            [0.0, 0.0, near / (near - far), 1.0],
        ])
    }

    /// Left-handed perspective projection with vertical field of view
    /// `fov_y` (radians); depth maps from `[near, far]` onto `[0, 1]` after
    /// the divide by `w = z`.
    ///
    /// The `w` column is `(0, 0, 1, 0)`; the legacy MIR layout had
    /// `m23 = 0`, which never produced a perspective divide.
    pub fn perspective_fov(fov_y: f32, width: f32, height: f32, near: f32, far: f32) -> Self {
        let scale_y = scalar::cot(fov_y / 2.0);
        let scale_x = scale_y * height / width;
        Self::new([
            [scale_x, 0.0, 0.0, 0.0],
            [0.0, scale_y, 0.0, 0.0],
            [0.0, 0.0, far / (far - near), 1.0],
            [0.0, 0.0, -near * far / (far - near), 0.0],
        ])
    }

    /// Simple screen-space view-projection for 2D drawing: scales by
    /// `2/width`, `2/height` and offsets depth by one (`z' = z + 1`); `w`
    /// stays 1.
    pub fn proj_view(width: f32, height: f32) -> Self {
        Self::new([
            [2.0 / width, 0.0, 0.0, 0.0],
            [0.0, 2.0 / height, 0.0, 0.0],
            [0.0, 0.0, 1.0, 0.0],
            [0.0, 0.0, 1.0, 1.0],
        ])
    }

    /// Multiplies the matrix with another matrix (`self * rhs`).
    ///
    /// `r[i][j] = Σ_k self[i][k] · rhs[k][j]` over all four `k`.
    ///
    /// # Examples
    /// ```
    /// use mir_math::Mat4;
    /// let a = Mat4::identity();
    /// let b = Mat4::scale(2.0, 3.0, 4.0);
    /// assert_eq!(a.multiply(&b).to_rows(), b.to_rows());
    /// ```
    pub fn multiply(&self, rhs: &Self) -> Self {
        let mut out = [[0.0; SIZE]; SIZE];
        for (row, out_row) in out.iter_mut().enumerate() {
            for (col, cell) in out_row.iter_mut().enumerate() {
                let mut sum = 0.0;
                for k in 0..SIZE {
                    sum += self.data[row][k] * rhs.data[k][col];
                }
                *cell = sum;
            }
        }
        Self::new(out)
    }

    /// Swaps rows and columns.
    pub fn transpose(&self) -> Self {
        let mut out = [[0.0; SIZE]; SIZE];
        for (row, out_row) in out.iter_mut().enumerate() {
            for (col, cell) in out_row.iter_mut().enumerate() {
                *cell = self.data[col][row];
            }
        }
        Self::new(out)
    }

    /// Transforms a point (`w = 1`, no perspective divide).
    pub fn transform_point(&self, point: &Vec3) -> Vec3 {
        point.transform(self, 1.0)
    }

    /// Transforms a direction (`w = 0`, translation ignored).
    pub fn transform_direction(&self, direction: &Vec3) -> Vec3 {
        direction.transform(self, 0.0)
    }

    /// Inverts the matrix in place by Gauss-Jordan elimination.
    ///
    /// Precondition: the matrix is non-singular. No pivoting is performed,
    /// so a zero on the diagonal during elimination divides by zero and
    /// leaves non-finite entries. Debug builds assert on a zero pivot; use
    /// [`Mat4::try_inverse`] when the input may be singular.
    pub fn invert(&mut self) {
        let mut aug = self.augmented();
        for col in 0..SIZE {
            debug_assert!(aug[col][col] != 0.0, "zero pivot in column {col}");
            eliminate(&mut aug, col);
        }
        self.data = right_half(&aug);
    }

    /// Returns an inverted copy. See [`Mat4::invert`].
    pub fn inverse(&self) -> Self {
        let mut out = *self;
        out.invert();
        out
    }

    /// Inverted copy, or [`MathError::SingularMatrix`] when a pivot falls to
    /// `EPSILON` times the largest input magnitude of its row or below.
    ///
    /// The threshold scales with each row, so uniformly small rows such as
    /// `Mat4::scale(1e-7, 1.0, 1.0)` still invert.
    ///
    /// Runs the same elimination as [`Mat4::invert`], so a matrix that needs
    /// row swaps is reported as singular.
    pub fn try_inverse(&self) -> Result<Self, MathError> {
        let row_scale = self
            .data
            .map(|row| row.iter().fold(0.0_f32, |acc, v| acc.max(v.abs())));
        let mut aug = self.augmented();
        for col in 0..SIZE {
            let pivot = aug[col][col];
            if pivot.abs() <= EPSILON * row_scale[col] {
                debug!(column = col, pivot, "rejecting singular Mat4 inversion");
                return Err(MathError::SingularMatrix { column: col });
            }
            eliminate(&mut aug, col);
        }
        Ok(Self::new(right_half(&aug)))
    }

    /// Translation stored in row 3.
    pub fn translation_component(&self) -> Vec3 {
        self.row3(3)
    }

    /// Normalized basis row 0.
    pub fn x_axis(&self) -> Vec3 {
        self.row3(0).normalize()
    }

    /// Normalized basis row 1.
    pub fn y_axis(&self) -> Vec3 {
        self.row3(1).normalize()
    }

    /// Normalized basis row 2.
    pub fn z_axis(&self) -> Vec3 {
        self.row3(2).normalize()
    }

    /// Per-axis scale, measured as the lengths of basis rows 0..2.
    pub fn scale_component(&self) -> Vec3 {
        Vec3::new(
            self.row3(0).length(),
            self.row3(1).length(),
            self.row3(2).length(),
        )
    }

    fn row3(&self, row: usize) -> Vec3 {
        let r = &self.data[row];
        Vec3::new(r[0], r[1], r[2])
    }

    /// `[self | I]`, the 4×8 starting point for elimination.
    fn augmented(&self) -> [[f32; 2 * SIZE]; SIZE] {
        let mut aug = [[0.0; 2 * SIZE]; SIZE];
        for (i, row) in aug.iter_mut().enumerate() {
            row[..SIZE].copy_from_slice(&self.data[i]);
            row[SIZE + i] = 1.0;
        }
        aug
    }
}

/// Normalizes the pivot row of `col` and clears `col` from every other row.
fn eliminate(aug: &mut [[f32; 2 * SIZE]; SIZE], col: usize) {
    let pivot = aug[col][col];
    for v in &mut aug[col] {
        *v /= pivot;
    }
    let pivot_row = aug[col];
    for (r, row) in aug.iter_mut().enumerate() {
        if r == col {
            continue;
        }
        let factor = row[col];
        for (v, p) in row.iter_mut().zip(pivot_row.iter()) {
            *v -= factor * p;
        }
    }
}

fn right_half(aug: &[[f32; 2 * SIZE]; SIZE]) -> [[f32; SIZE]; SIZE] {
    let mut out = [[0.0; SIZE]; SIZE];
    for (dst, src) in out.iter_mut().zip(aug.iter()) {
        dst.copy_from_slice(&src[SIZE..]);
    }
    out
}

impl Default for Mat4 {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl From<[[f32; SIZE]; SIZE]> for Mat4 {
    fn from(value: [[f32; SIZE]; SIZE]) -> Self {
        Self::new(value)
    }
}

impl Mul for Mat4 {
    type Output = Self;
    fn mul(self, rhs: Self) -> Self::Output {
        self.multiply(&rhs)
    }
}

impl MulAssign for Mat4 {
    fn mul_assign(&mut self, rhs: Self) {
        *self = self.multiply(&rhs);
    }
}

impl MulAssign<&Mat4> for Mat4 {
    fn mul_assign(&mut self, rhs: &Self) {
        *self = self.multiply(rhs);
    }
}
