// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

#![allow(missing_docs)]
use core::ops::Range;

use proptest::prelude::*;
use proptest::test_runner::{Config as PropConfig, RngAlgorithm, TestRng, TestRunner};

use mir_math::{Mat4, Quat, Vec3};

// Every runner uses the same pinned seed so failures reproduce across
// machines. Override locally with PROPTEST_SEED when hunting for new cases.
const SEED_BYTES: [u8; 32] = [
    0x4d, 0x49, 0x52, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0,
];

fn pinned_runner() -> TestRunner {
    let rng = TestRng::from_seed(RngAlgorithm::ChaCha, &SEED_BYTES);
    TestRunner::new_with_rng(PropConfig::default(), rng)
}

fn component() -> Range<f32> {
    -100.0_f32..100.0
}

fn vec3() -> impl Strategy<Value = Vec3> {
    prop::array::uniform3(component()).prop_map(Vec3::from)
}

fn quat_within(max_angle: f32) -> impl Strategy<Value = Quat> {
    (
        prop::array::uniform3(-1.0_f32..1.0)
            .prop_filter("axis must not vanish", |a| a.iter().any(|c| c.abs() > 0.1)),
        -max_angle..max_angle,
    )
        .prop_map(|(axis, angle)| Quat::from_axis_angle(Vec3::from(axis).normalize(), angle))
}

fn unit_quat() -> impl Strategy<Value = Quat> {
    quat_within(3.1)
}

fn close(a: f32, b: f32, scale: f32) -> bool {
    (a - b).abs() <= 1e-4 * scale.max(1.0)
}

fn close3(a: Vec3, b: Vec3, scale: f32) -> bool {
    a.to_array()
        .iter()
        .zip(b.to_array())
        .all(|(x, y)| close(*x, y, scale))
}

#[test]
fn normalized_vectors_have_unit_length() {
    let strategy = vec3().prop_filter("non-degenerate", |v| v.length() > 1e-2);
    pinned_runner()
        .run(&strategy, |v| {
            prop_assert!(close(v.normalize().length(), 1.0, 1.0));
            prop_assert!(v.try_normalize().is_ok());
            Ok(())
        })
        .expect("normalize property");
}

#[test]
fn dot_is_symmetric_and_cross_is_antisymmetric() {
    pinned_runner()
        .run(&(vec3(), vec3()), |(a, b)| {
            prop_assert_eq!(a.dot(&b).to_bits(), b.dot(&a).to_bits());
            prop_assert_eq!(a.cross(&b), -b.cross(&a));
            let c = a.cross(&b);
            let scale = a.length() * b.length() * c.length();
            prop_assert!(close(c.dot(&a), 0.0, scale));
            prop_assert!(close(c.dot(&b), 0.0, scale));
            Ok(())
        })
        .expect("dot/cross property");
}

#[test]
fn reflecting_twice_restores_vector() {
    let normal = prop::array::uniform3(-1.0_f32..1.0)
        .prop_filter("normal must not vanish", |a| a.iter().any(|c| c.abs() > 0.1))
        .prop_map(|a| Vec3::from(a).normalize());
    pinned_runner()
        .run(&(vec3(), normal), |(v, n)| {
            let back = v.reflect(&n).reflect(&n);
            prop_assert!(close3(back, v, v.length()));
            prop_assert!(close(v.reflect(&n).length(), v.length(), v.length()));
            Ok(())
        })
        .expect("reflect property");
}

#[test]
fn identity_multiplication_is_a_no_op() {
    let rows = prop::array::uniform4(prop::array::uniform4(component()));
    pinned_runner()
        .run(&rows, |rows| {
            let m = Mat4::new(rows);
            prop_assert_eq!(m * Mat4::IDENTITY, m);
            prop_assert_eq!(Mat4::IDENTITY * m, m);
            prop_assert_eq!(m.transpose().transpose(), m);
            Ok(())
        })
        .expect("identity property");
}

#[test]
fn rigid_transforms_invert_cleanly() {
    // Elimination runs without row swaps, so keep the rotation small enough
    // that every diagonal pivot stays well away from zero.
    let strategy = (quat_within(0.7), vec3(), 0.5_f32..4.0);
    pinned_runner()
        .run(&strategy, |(q, t, s)| {
            let m = Mat4::uniform_scale(s) * q.to_mat4() * Mat4::translation(t);
            let inv = m
                .try_inverse()
                .map_err(|err| TestCaseError::fail(err.to_string()))?;

            let product = (m * inv).to_rows();
            let identity = Mat4::IDENTITY.to_rows();
            for (r, e) in product.iter().flatten().zip(identity.iter().flatten()) {
                prop_assert!(close(*r, *e, 100.0), "m * inv = {product:?}");
            }

            let p = Vec3::new(1.0, -2.0, 3.0);
            prop_assert!(close3(inv.transform_point(&m.transform_point(&p)), p, 100.0));
            Ok(())
        })
        .expect("inverse property");
}

#[test]
fn quaternion_rotation_preserves_length_and_angles() {
    pinned_runner()
        .run(&(unit_quat(), vec3(), vec3()), |(q, a, b)| {
            let (ra, rb) = (a.transform_quat(&q), b.transform_quat(&q));
            let scale = a.length() * b.length();
            prop_assert!(close(ra.length(), a.length(), a.length()));
            prop_assert!(close(ra.dot(&rb), a.dot(&b), scale));
            prop_assert!(close3(ra, q.to_mat4().transform_direction(&a), a.length()));
            Ok(())
        })
        .expect("rotation property");
}

#[test]
fn slerp_stays_on_the_unit_sphere() {
    pinned_runner()
        .run(&(unit_quat(), unit_quat(), 0.0_f32..=1.0), |(a, b, t)| {
            prop_assert!(close(Quat::slerp(&a, &b, t).length(), 1.0, 1.0));
            Ok(())
        })
        .expect("slerp property");
}
