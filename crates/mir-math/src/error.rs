// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use thiserror::Error;

/// Failures reported by the checked (`try_*`) math operations.
///
/// The unchecked fast paths never produce these; they degrade numerically
/// instead (non-finite components).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MathError {
    /// Normalization was requested for a vector or quaternion whose length is
    /// at or below [`crate::EPSILON`]. The threshold is absolute, so very
    /// short but non-zero inputs are rejected too.
    #[error("cannot normalize a zero-length value")]
    ZeroLength,
    /// Gauss-Jordan elimination met a pivot at or below [`crate::EPSILON`]
    /// times the largest magnitude in that row of the input matrix.
    #[error("matrix is singular: zero pivot in column {column}")]
    SingularMatrix {
        /// Pivot column at which elimination stopped.
        column: usize,
    },
    /// Integration was requested over zero sub-intervals.
    #[error("integration requires at least one sub-interval")]
    EmptyPartition,
}
