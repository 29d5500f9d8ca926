// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

//! mir-math: value-type geometry for the MIR engine.
//!
//! Covers scalar utilities, 2D/3D vectors, row-major 3×3/4×4 matrices,
//! quaternions, a caller-owned pseudo-random generator, and a small numeric
//! calculus helper.
//!
//! Conventions shared by every type:
//! - Components are `f32`; calculus runs in `f64`.
//! - Matrices are row-major and multiply a row vector on the left
//!   (`v' = v · M`), so translation lives in the last row.
//! - Fast paths do not guard degenerate input (zero-length normalization,
//!   singular inversion); use the `try_*` variants when input is untrusted.
#![forbid(unsafe_code)]

pub mod calculus;
pub mod color;
mod error;
mod mat3;
mod mat4;
mod prng;
mod quat;
pub mod scalar;
mod vec2;
mod vec3;

pub use calculus::ScalarFn;
pub use error::MathError;
pub use mat3::Mat3;
pub use mat4::Mat4;
pub use prng::Prng;
pub use quat::{Quat, SLERP_LINEAR_THRESHOLD};
pub use scalar::{clamp, deg_to_rad, lerp, rad_to_deg, EPSILON, INF, PI};
pub use vec2::Vec2;
pub use vec3::Vec3;
