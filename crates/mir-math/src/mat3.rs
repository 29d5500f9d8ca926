// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use core::ops::{Mul, MulAssign};

use crate::Vec2;

/// Row-major 3×3 matrix for 2D affine transforms.
///
/// Applied to row vectors on the left (`v' = v · M`); the translation lives
/// in row 2. See [`Vec2::transform`].
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Mat3 {
    data: [[f32; 3]; 3],
}

impl Mat3 {
    /// The identity matrix.
    pub const IDENTITY: Self = Self::new([[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]]);

    /// Creates a matrix from rows, copied verbatim.
    pub const fn new(rows: [[f32; 3]; 3]) -> Self {
        Self { data: rows }
    }

    /// Returns the identity matrix.
    pub const fn identity() -> Self {
        Self::IDENTITY
    }

    /// Returns the rows.
    pub fn to_rows(self) -> [[f32; 3]; 3] {
        self.data
    }

    /// Element at `row`, `col`.
    pub fn at(&self, row: usize, col: usize) -> f32 {
        self.data[row][col]
    }

    /// Non-uniform 2D scale.
    pub const fn scale(x: f32, y: f32) -> Self {
        Self::new([[x, 0.0, 0.0], [0.0, y, 0.0], [0.0, 0.0, 1.0]])
    }

    /// Non-uniform 2D scale taken from a vector.
    pub fn scale_vec(v: Vec2) -> Self {
        Self::scale(v.x(), v.y())
    }

    /// Uniform 2D scale.
    pub const fn uniform_scale(s: f32) -> Self {
        Self::scale(s, s)
    }

    /// Counter-clockwise rotation by `rad` radians.
    pub fn rotation(rad: f32) -> Self {
        let (s, c) = rad.sin_cos();
        Self::new([[c, s, 0.0], [-s, c, 0.0], [0.0, 0.0, 1.0]])
    }

    /// Translation by `v`, stored in row 2.
    pub fn translation(v: Vec2) -> Self {
        Self::new([[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [v.x(), v.y(), 1.0]])
    }

    /// Matrix product `self * rhs`.
    pub fn multiply(&self, rhs: &Self) -> Self {
        let mut out = [[0.0; 3]; 3];
        for (i, row) in out.iter_mut().enumerate() {
            for (j, cell) in row.iter_mut().enumerate() {
                *cell = (0..3).map(|k| self.data[i][k] * rhs.data[k][j]).sum();
            }
        }
        Self::new(out)
    }

    /// Swaps rows and columns.
    pub fn transpose(&self) -> Self {
        let d = &self.data;
        Self::new([
            [d[0][0], d[1][0], d[2][0]],
            [d[0][1], d[1][1], d[2][1]],
            [d[0][2], d[1][2], d[2][2]],
        ])
    }

    /// Determinant by cofactor expansion along row 0.
    pub fn determinant(&self) -> f32 {
        let d = &self.data;
        d[0][0] * (d[1][1] * d[2][2] - d[1][2] * d[2][1])
            - d[0][1] * (d[1][0] * d[2][2] - d[1][2] * d[2][0])
            + d[0][2] * (d[1][0] * d[2][1] - d[1][1] * d[2][0])
    }
}

impl Default for Mat3 {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl From<[[f32; 3]; 3]> for Mat3 {
    fn from(value: [[f32; 3]; 3]) -> Self {
        Self::new(value)
    }
}

impl Mul for Mat3 {
    type Output = Self;
    fn mul(self, rhs: Self) -> Self {
        self.multiply(&rhs)
    }
}

impl MulAssign for Mat3 {
    fn mul_assign(&mut self, rhs: Self) {
        *self = self.multiply(&rhs);
    }
}

impl MulAssign<&Mat3> for Mat3 {
    fn mul_assign(&mut self, rhs: &Self) {
        *self = self.multiply(rhs);
    }
}
