//! GLU-free projection and view matrix construction.
//!
//! Every matrix here is assembled element by element in column-major order,
//! following the fixed-function convention `clip = P * V * M * point`.
//! cgmath supplies the vector/matrix types and elementwise vector ops; the
//! transform math itself never delegates to a library helper.

use cgmath::{EuclideanSpace, InnerSpace, Matrix4, Point3, Vector3};
use std::f32::consts::PI;

use crate::error::{Error, Result};

/// Squared-length floor below which a look-at basis vector counts as
/// degenerate.
const DEGENERATE_BASIS_EPS: f32 = 1e-12;

/// Symmetric-frustum perspective projection.
///
/// `fov_y` is the vertical field of view in radians, open interval
/// `(0, pi)`; `aspect` is width/height; planes must satisfy
/// `0 < near < far`. A point at the near-plane center maps to NDC depth
/// -1, the far-plane center to +1.
pub fn perspective(fov_y: f32, aspect: f32, near: f32, far: f32) -> Result<Matrix4<f32>> {
    if !(fov_y > 0.0 && fov_y < PI) {
        return Err(Error::InvalidFieldOfView(fov_y));
    }
    if aspect <= 0.0 {
        return Err(Error::InvalidAspect(aspect));
    }
    if !(0.0 < near && near < far) {
        return Err(Error::InvalidDepthRange { near, far });
    }

    let s = 1.0 / (fov_y * 0.5).tan();
    Ok(Matrix4::new(
        s / aspect, 0.0, 0.0, 0.0,
        0.0, s, 0.0, 0.0,
        0.0, 0.0, (far + near) / (near - far), -1.0,
        0.0, 0.0, (2.0 * far * near) / (near - far), 0.0,
    ))
}

/// Orthographic box-to-NDC projection, `glOrtho` semantics.
///
/// Each axis pair must have non-zero extent; unlike the perspective case
/// the depth planes may be negative or reversed.
pub fn orthographic(
    left: f32,
    right: f32,
    bottom: f32,
    top: f32,
    near: f32,
    far: f32,
) -> Result<Matrix4<f32>> {
    if right == left {
        return Err(Error::DegenerateBox { axis: "x" });
    }
    if top == bottom {
        return Err(Error::DegenerateBox { axis: "y" });
    }
    if far == near {
        return Err(Error::DegenerateBox { axis: "z" });
    }

    Ok(Matrix4::new(
        2.0 / (right - left), 0.0, 0.0, 0.0,
        0.0, 2.0 / (top - bottom), 0.0, 0.0,
        0.0, 0.0, -2.0 / (far - near), 0.0,
        -(right + left) / (right - left),
        -(top + bottom) / (top - bottom),
        -(far + near) / (far - near),
        1.0,
    ))
}

/// View matrix for an eye at `eye` looking at `target` with the given up
/// hint, right-handed with the camera looking down -Z.
///
/// The rotation rows are the orthonormal `right / true_up / -forward`
/// basis; the translation column encodes the negated eye projection onto
/// each axis (sign-flipped on the forward row). An eye coincident with the
/// target, or an up hint parallel to the view direction, leaves no basis
/// to build and is reported rather than silently patched.
pub fn look_at(eye: Point3<f32>, target: Point3<f32>, up: Vector3<f32>) -> Result<Matrix4<f32>> {
    let gaze = target - eye;
    if gaze.magnitude2() <= DEGENERATE_BASIS_EPS {
        return Err(Error::DegenerateLookAt);
    }
    let forward = gaze.normalize();

    let side = forward.cross(up);
    if side.magnitude2() <= DEGENERATE_BASIS_EPS {
        return Err(Error::DegenerateLookAt);
    }
    let side = side.normalize();
    let true_up = side.cross(forward);

    let eye_vec = eye.to_vec();
    Ok(Matrix4::new(
        side.x, true_up.x, -forward.x, 0.0,
        side.y, true_up.y, -forward.y, 0.0,
        side.z, true_up.z, -forward.z, 0.0,
        -side.dot(eye_vec),
        -true_up.dot(eye_vec),
        forward.dot(eye_vec),
        1.0,
    ))
}

/// Eye position on a sphere of radius `distance` around `target`.
///
/// Standard spherical-to-Cartesian conversion with angles in degrees:
/// azimuth 0 looks down +X, elevation 90 sits on +Y.
pub fn orbit_eye(
    azimuth_deg: f32,
    elevation_deg: f32,
    distance: f32,
    target: Point3<f32>,
) -> Point3<f32> {
    let az = azimuth_deg.to_radians();
    let el = elevation_deg.to_radians();
    Point3::new(
        target.x + distance * el.cos() * az.cos(),
        target.y + distance * el.sin(),
        target.z + distance * el.cos() * az.sin(),
    )
}

/// Orbit view: eye position from [`orbit_eye`] plus the matching
/// [`look_at`] view matrix with world up +Y.
///
/// `distance` must be positive. At elevation +-90 degrees the up hint is
/// parallel to the view direction and the delegate reports
/// [`Error::DegenerateLookAt`]; interactive camera state clamps elevation
/// short of the poles and never reaches this.
pub fn orbit_view(
    azimuth_deg: f32,
    elevation_deg: f32,
    distance: f32,
    target: Point3<f32>,
) -> Result<(Point3<f32>, Matrix4<f32>)> {
    if distance <= 0.0 {
        return Err(Error::InvalidDistance(distance));
    }
    let eye = orbit_eye(azimuth_deg, elevation_deg, distance, target);
    let view = look_at(eye, target, Vector3::unit_y())?;
    Ok((eye, view))
}
