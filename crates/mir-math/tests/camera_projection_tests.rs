// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

//! View and projection constructors used by the camera.

#![allow(missing_docs)]
mod common;

use core::f32::consts::FRAC_PI_2;
use common::{approx_eq, approx_eq3, approx_eq_slice};
use mir_math::{Mat4, Vec3};

/// Full homogeneous transform of a point followed by the perspective divide.
fn project(m: &Mat4, p: Vec3) -> [f32; 3] {
    let h = [p.x(), p.y(), p.z(), 1.0];
    let mut out = [0.0; 4];
    for (col, o) in out.iter_mut().enumerate() {
        *o = (0..4).map(|k| h[k] * m.at(k, col)).sum();
    }
    [out[0] / out[3], out[1] / out[3], out[2] / out[3]]
}

#[test]
fn look_at_moves_eye_to_origin_and_target_onto_z() {
    let eye = Vec3::new(3.0, 2.0, -4.0);
    let target = Vec3::new(0.0, 1.0, 1.0);
    let view = Mat4::look_at(eye, target, Vec3::UNIT_Y);

    approx_eq3(view.transform_point(&eye), Vec3::ZERO);
    let distance = (target - eye).length();
    approx_eq3(view.transform_point(&target), Vec3::new(0.0, 0.0, distance));
}

#[test]
fn look_at_down_positive_z_is_a_translation() {
    let view = Mat4::look_at(Vec3::new(0.0, 0.0, -5.0), Vec3::ZERO, Vec3::UNIT_Y);
    assert_eq!(view, Mat4::translation(Vec3::new(0.0, 0.0, 5.0)));
}

#[test]
fn look_at_basis_is_orthonormal() {
    let view = Mat4::look_at(
        Vec3::new(-2.0, 5.0, 1.0),
        Vec3::new(4.0, 0.0, 3.0),
        Vec3::UNIT_Y,
    );
    // The camera basis sits in the columns, so the rows of the upper 3×3
    // are orthonormal too.
    approx_eq(view.x_axis().dot(&view.y_axis()), 0.0);
    approx_eq(view.x_axis().dot(&view.z_axis()), 0.0);
    approx_eq3(view.scale_component(), Vec3::new(1.0, 1.0, 1.0));
}

#[test]
fn perspective_maps_near_and_far_to_unit_depth() {
    let (near, far) = (0.5, 100.0);
    let proj = Mat4::perspective_fov(FRAC_PI_2, 1280.0, 720.0, near, far);
    approx_eq(project(&proj, Vec3::new(0.0, 0.0, near))[2], 0.0);
    approx_eq(project(&proj, Vec3::new(0.0, 0.0, far))[2], 1.0);
    // 90° vertical FOV: the top edge at depth z sits at y = z.
    approx_eq(project(&proj, Vec3::new(0.0, 10.0, 10.0))[1], 1.0);
    // Horizontal extent shrinks by the aspect ratio.
    approx_eq(project(&proj, Vec3::new(10.0 * 1280.0 / 720.0, 0.0, 10.0))[0], 1.0);
}

#[test]
fn ortho_maps_view_volume_to_clip_cube() {
    let proj = Mat4::ortho(800.0, 600.0, 1.0, 11.0);
    approx_eq_slice(&project(&proj, Vec3::new(400.0, -300.0, 1.0)), &[1.0, -1.0, 0.0]);
    approx_eq_slice(&project(&proj, Vec3::new(-400.0, 300.0, 11.0)), &[-1.0, 1.0, 1.0]);
}

#[test]
fn proj_view_scales_screen_space_and_offsets_depth() {
    let proj = Mat4::proj_view(1024.0, 768.0);
    approx_eq_slice(&project(&proj, Vec3::new(512.0, -384.0, 0.0)), &[1.0, -1.0, 1.0]);
    approx_eq_slice(&project(&proj, Vec3::new(-256.0, 192.0, 2.0)), &[-0.5, 0.5, 3.0]);
    // w is left untouched.
    approx_eq(proj.at(3, 3), 1.0);
    approx_eq(proj.at(2, 3), 0.0);
}

#[test]
fn projection_w_columns() {
    let ortho = Mat4::ortho(800.0, 600.0, 1.0, 11.0);
    let w_col: Vec<f32> = (0..4).map(|r| ortho.at(r, 3)).collect();
    assert_eq!(w_col, vec![0.0, 0.0, 0.0, 1.0]);

    let persp = Mat4::perspective_fov(1.0, 4.0, 3.0, 0.1, 10.0);
    let w_col: Vec<f32> = (0..4).map(|r| persp.at(r, 3)).collect();
    assert_eq!(w_col, vec![0.0, 0.0, 1.0, 0.0]);
}
