// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

#![allow(dead_code)]

use mir_math::{Mat4, Quat, Vec3};

pub const ABS_TOL: f32 = 1e-5;
pub const REL_TOL: f32 = 1e-5;

pub fn approx_eq(a: f32, b: f32) {
    let diff = (a - b).abs();
    let tol = ABS_TOL.max(REL_TOL * a.abs().max(b.abs()));
    assert!(diff <= tol, "expected {b}, got {a} (diff {diff}, tol {tol})");
}

pub fn approx_eq_slice(a: &[f32], b: &[f32]) {
    assert_eq!(a.len(), b.len());
    for (i, (x, y)) in a.iter().zip(b.iter()).enumerate() {
        let diff = (x - y).abs();
        let tol = ABS_TOL.max(REL_TOL * x.abs().max(y.abs()));
        assert!(diff <= tol, "index {i}: {a:?} vs {b:?}, diff={diff}, tol={tol}");
    }
}

pub fn approx_eq3(a: Vec3, b: Vec3) {
    approx_eq_slice(&a.to_array(), &b.to_array());
}

pub fn approx_eq_mat4(a: Mat4, b: Mat4) {
    for (ra, rb) in a.to_rows().iter().zip(b.to_rows().iter()) {
        approx_eq_slice(ra, rb);
    }
}

/// Quaternions `q` and `-q` encode the same rotation.
pub fn approx_same_rotation(a: Quat, b: Quat) {
    let dot = Quat::dot(&a, &b);
    let b = if dot < 0.0 {
        let [x, y, z, w] = b.to_array();
        Quat::new(-x, -y, -z, -w)
    } else {
        b
    };
    approx_eq_slice(&a.to_array(), &b.to_array());
}
