// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

//! Named RGB colours as [`Vec3`] constants with channels in `[0, 1]`.

use crate::Vec3;

/// `(0, 0, 0)`
pub const BLACK: Vec3 = Vec3::new(0.0, 0.0, 0.0);
/// `(1, 1, 1)`
pub const WHITE: Vec3 = Vec3::new(1.0, 1.0, 1.0);

/// `(1, 0, 0)`
pub const RED: Vec3 = Vec3::new(1.0, 0.0, 0.0);
/// `(0, 1, 0)`
pub const GREEN: Vec3 = Vec3::new(0.0, 1.0, 0.0);
/// `(0, 0, 1)`
pub const BLUE: Vec3 = Vec3::new(0.0, 0.0, 1.0);

/// `(1, 1, 0)`
pub const YELLOW: Vec3 = Vec3::new(1.0, 1.0, 0.0);
/// `(1, 0, 1)`
pub const MAGENTA: Vec3 = Vec3::new(1.0, 0.0, 1.0);
/// `(0, 1, 1)`
pub const CYAN: Vec3 = Vec3::new(0.0, 1.0, 1.0);
