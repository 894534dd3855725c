//! Parametric surface tessellation with accumulated smooth normals.

use cgmath::{InnerSpace, Vector3, Zero};
use std::f32::consts::{FRAC_PI_2, PI, TAU};

use super::MeshData;
use crate::error::{Error, Result};

/// Accumulated normals shorter than this stay zero instead of being
/// normalized (collapsed pole rows, duplicate samples).
const DEGENERATE_NORMAL_EPS: f32 = 1e-12;

/// Tessellate a parametric surface over an `nu x nv` sample grid.
///
/// `shape_fn` maps normalized grid fractions `(s, t)` in `[0, 1]` to a 3D
/// position; each surface scales the fractions to its own parameter ranges.
/// Vertex `(i, j)` lands at flat index `j * nu + i`, and each grid cell is
/// split along the same diagonal into the triangles `(i0, i2, i1)` and
/// `(i1, i2, i3)` so that winding, and therefore normal orientation, is
/// consistent across all generated surfaces.
///
/// Per-vertex normals are the normalized sum of the unnormalized face
/// normals of every incident triangle, which weights large triangles more
/// heavily. Vertices whose accumulated sum is degenerate keep a zero normal.
///
/// # Arguments
/// * `nu` - Samples along the first parametric axis, at least 2
/// * `nv` - Samples along the second parametric axis, at least 2
/// * `shape_fn` - Pure position function of the normalized grid fractions
pub fn build_parametric_mesh<F>(nu: usize, nv: usize, shape_fn: F) -> Result<MeshData>
where
    F: Fn(f32, f32) -> [f32; 3],
{
    if nu < 2 || nv < 2 {
        return Err(Error::GridTooSmall { nu, nv });
    }

    let vertex_count = nu * nv;
    let triangle_count = (nu - 1) * (nv - 1) * 2;

    let mut positions = Vec::with_capacity(vertex_count);
    for j in 0..nv {
        let t = j as f32 / (nv - 1) as f32;
        for i in 0..nu {
            let s = i as f32 / (nu - 1) as f32;
            positions.push(shape_fn(s, t));
        }
    }

    let mut indices = Vec::with_capacity(triangle_count * 3);
    let mut accumulated: Vec<Vector3<f32>> = vec![Vector3::zero(); vertex_count];

    for j in 0..nv - 1 {
        for i in 0..nu - 1 {
            let i0 = j * nu + i;
            let i1 = i0 + 1;
            let i2 = (j + 1) * nu + i;
            let i3 = i2 + 1;

            indices.extend_from_slice(&[
                i0 as u32, i2 as u32, i1 as u32,
                i1 as u32, i2 as u32, i3 as u32,
            ]);

            let n = face_normal(positions[i0], positions[i2], positions[i1]);
            accumulated[i0] += n;
            accumulated[i2] += n;
            accumulated[i1] += n;

            let n = face_normal(positions[i1], positions[i2], positions[i3]);
            accumulated[i1] += n;
            accumulated[i2] += n;
            accumulated[i3] += n;
        }
    }

    let mut degenerate = 0usize;
    let mut normals = Vec::with_capacity(vertex_count);
    for sum in &accumulated {
        let length = sum.magnitude();
        if length > DEGENERATE_NORMAL_EPS {
            normals.push([sum.x / length, sum.y / length, sum.z / length]);
        } else {
            degenerate += 1;
            normals.push([0.0, 0.0, 0.0]);
        }
    }

    log::debug!(
        "tessellated {}x{} grid: {} vertices, {} triangles",
        nu,
        nv,
        vertex_count,
        triangle_count
    );
    if degenerate > 0 {
        log::trace!("{} vertices kept a zero normal", degenerate);
    }

    Ok(MeshData {
        positions,
        normals,
        indices,
    })
}

/// Unnormalized face normal of the triangle `(a, b, c)`, edge order matching
/// the counter-clockwise winding above.
fn face_normal(a: [f32; 3], b: [f32; 3], c: [f32; 3]) -> Vector3<f32> {
    let ab = Vector3::new(b[0] - a[0], b[1] - a[1], b[2] - a[2]);
    let ac = Vector3::new(c[0] - a[0], c[1] - a[1], c[2] - a[2]);
    ab.cross(ac)
}

/// Generate a torus whose tube cross-section twists `twist` full turns as it
/// sweeps once around the major circle.
///
/// `u` sweeps the tube cross-section and `v` the major circle, both over
/// `[0, 2*pi]`; the cross-section angle is offset by `twist * v`. With
/// `twist = 0` this is a standard torus of major radius `major_radius` and
/// minor radius `minor_radius`.
pub fn generate_twisted_torus(
    nu: usize,
    nv: usize,
    major_radius: f32,
    minor_radius: f32,
    twist: i32,
) -> Result<MeshData> {
    build_parametric_mesh(nu, nv, move |s, t| {
        let u = s * TAU;
        let v = t * TAU;
        let theta = u + twist as f32 * v;
        let ring = major_radius + minor_radius * theta.cos();
        [ring * v.cos(), ring * v.sin(), minor_radius * theta.sin()]
    })
}

/// Generate a superellipsoid with semi-axes `a, b, c` and shape exponents
/// `e1, e2`.
///
/// `u` in `[-pi/2, pi/2]` is latitude, `v` in `[-pi, pi]` longitude. The
/// signed power profile rounds (`e -> 1`) or squares (`e -> 0`) the solid
/// continuously; `e1 = e2 = 1` yields a plain ellipsoid.
pub fn generate_superellipsoid(
    nu: usize,
    nv: usize,
    a: f32,
    b: f32,
    c: f32,
    e1: f32,
    e2: f32,
) -> Result<MeshData> {
    build_parametric_mesh(nu, nv, move |s, t| {
        let u = -FRAC_PI_2 + s * PI;
        let v = -PI + t * TAU;
        let (su, cu) = u.sin_cos();
        let (sv, cv) = v.sin_cos();

        let cu_e1 = signed_pow(cu, e1);
        let su_e1 = signed_pow(su, e1);
        let cv_e2 = signed_pow(cv, e2);
        let sv_e2 = signed_pow(sv, e2);

        [a * cu_e1 * cv_e2, b * cu_e1 * sv_e2, c * su_e1]
    })
}

/// Generate a square ground patch with a sinusoidal height field,
/// `y = amplitude * sin(0.7 x) * cos(0.7 z)`, centered at the origin.
///
/// `n` samples per side; normals come from the shared accumulation pass, so
/// the bowing between samples matches the other surfaces.
pub fn generate_wavy_patch(n: usize, size: f32, amplitude: f32) -> Result<MeshData> {
    build_parametric_mesh(n, n, move |s, t| {
        let x = (s - 0.5) * size;
        let z = (t - 0.5) * size;
        let y = amplitude * (0.7 * x).sin() * (0.7 * z).cos();
        [x, y, z]
    })
}

/// `sgn(t) * |t|^e`, with `sgn(0) = 0` so poles collapse cleanly.
fn signed_pow(t: f32, e: f32) -> f32 {
    let sign = if t > 0.0 {
        1.0
    } else if t < 0.0 {
        -1.0
    } else {
        0.0
    };
    sign * t.abs().powf(e)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn init_logging() {
        let _ = env_logger::builder().is_test(true).try_init();
    }

    fn length(v: [f32; 3]) -> f32 {
        (v[0] * v[0] + v[1] * v[1] + v[2] * v[2]).sqrt()
    }

    #[test]
    fn grid_counts_and_index_bounds() {
        init_logging();
        for &(nu, nv) in &[(2usize, 2usize), (3, 7), (16, 5), (33, 33)] {
            let mesh = build_parametric_mesh(nu, nv, |s, t| [s, t, 0.0]).unwrap();
            assert_eq!(mesh.vertex_count(), nu * nv);
            assert_eq!(mesh.triangle_count(), (nu - 1) * (nv - 1) * 2);
            assert_eq!(mesh.indices.len(), mesh.triangle_count() * 3);
            assert!(mesh
                .indices
                .iter()
                .all(|&i| (i as usize) < mesh.vertex_count()));
        }
    }

    #[test]
    fn triangles_reference_distinct_vertices() {
        let mesh = build_parametric_mesh(8, 6, |s, t| [s, t, s * t]).unwrap();
        for triangle in mesh.indices.chunks_exact(3) {
            assert_ne!(triangle[0], triangle[1]);
            assert_ne!(triangle[1], triangle[2]);
            assert_ne!(triangle[0], triangle[2]);
        }
    }

    #[test]
    fn grid_ordering_is_row_major() {
        let nu = 5;
        let nv = 4;
        let mesh = build_parametric_mesh(nu, nv, |s, t| [s, t, 0.0]).unwrap();
        for j in 0..nv {
            for i in 0..nu {
                let p = mesh.positions[j * nu + i];
                assert!((p[0] - i as f32 / (nu - 1) as f32).abs() < 1e-6);
                assert!((p[1] - j as f32 / (nv - 1) as f32).abs() < 1e-6);
            }
        }
    }

    #[test]
    fn quad_diagonal_matches_reference() {
        // First cell of a 3x3 grid: (0,3,1) then (1,3,4).
        let mesh = build_parametric_mesh(3, 3, |s, t| [s, t, 0.0]).unwrap();
        assert_eq!(&mesh.indices[..6], &[0, 3, 1, 1, 3, 4]);
    }

    #[test]
    fn rejects_degenerate_grid() {
        let err = build_parametric_mesh(1, 8, |s, t| [s, t, 0.0]).unwrap_err();
        assert_eq!(err, Error::GridTooSmall { nu: 1, nv: 8 });
        let err = build_parametric_mesh(4, 0, |s, t| [s, t, 0.0]).unwrap_err();
        assert_eq!(err, Error::GridTooSmall { nu: 4, nv: 0 });
    }

    #[test]
    fn flat_patch_normals_point_up() {
        let mesh = build_parametric_mesh(4, 4, |s, t| [s, 0.0, t]).unwrap();
        for n in &mesh.normals {
            // s maps to +x, t to +z; the fixed winding makes the normal +y
            assert!((n[0]).abs() < 1e-6);
            assert!((n[1] - 1.0).abs() < 1e-5);
            assert!((n[2]).abs() < 1e-6);
        }
    }

    #[test]
    fn accumulated_normals_are_unit_length() {
        let mesh = generate_twisted_torus(24, 48, 1.5, 0.4, 2).unwrap();
        for n in &mesh.normals {
            let len = length(*n);
            if len > 0.0 {
                assert!((len - 1.0).abs() < 1e-5, "normal length {}", len);
            }
        }
    }

    #[test]
    fn degenerate_vertices_keep_zero_normal() {
        // Every sample collapses to one point, so no face has any area.
        let mesh = build_parametric_mesh(4, 4, |_, _| [1.0, 2.0, 3.0]).unwrap();
        for n in &mesh.normals {
            assert_eq!(*n, [0.0, 0.0, 0.0]);
        }
    }

    #[test]
    fn untwisted_torus_lies_on_torus_surface() {
        let (major, minor) = (1.6, 0.5);
        let mesh = generate_twisted_torus(32, 64, major, minor, 0).unwrap();
        for p in &mesh.positions {
            let ring = (p[0] * p[0] + p[1] * p[1]).sqrt() - major;
            let r = (ring * ring + p[2] * p[2]).sqrt();
            assert!((r - minor).abs() < 1e-4, "off-surface sample {:?}", p);
        }
    }

    #[test]
    fn twist_zero_matches_analytic_cross_section() {
        let (major, minor) = (2.0, 0.25);
        let nu = 16;
        let mesh = generate_twisted_torus(nu, 8, major, minor, 0).unwrap();
        // Row j = 0 is the v = 0 cross-section in the xz plane.
        for i in 0..nu {
            let u = i as f32 / (nu - 1) as f32 * TAU;
            let p = mesh.positions[i];
            assert!((p[0] - (major + minor * u.cos())).abs() < 1e-5);
            assert!(p[1].abs() < 1e-5);
            assert!((p[2] - minor * u.sin()).abs() < 1e-5);
        }
    }

    #[test]
    fn unit_exponents_give_ellipsoid() {
        let (a, b, c) = (1.0, 2.0, 0.5);
        let mesh = generate_superellipsoid(24, 24, a, b, c, 1.0, 1.0).unwrap();
        for p in &mesh.positions {
            let q = (p[0] / a).powi(2) + (p[1] / b).powi(2) + (p[2] / c).powi(2);
            assert!((q - 1.0).abs() < 1e-4, "sample off unit shell: {}", q);
        }
    }

    #[test]
    fn superellipsoid_respects_semi_axes() {
        let mesh = generate_superellipsoid(33, 33, 1.5, 1.0, 2.0, 0.4, 0.4).unwrap();
        for p in &mesh.positions {
            assert!(p[0].abs() <= 1.5 + 1e-4);
            assert!(p[1].abs() <= 1.0 + 1e-4);
            assert!(p[2].abs() <= 2.0 + 1e-4);
        }
    }

    #[test]
    fn wavy_patch_follows_height_field() {
        let (size, amp) = (10.0, 0.8);
        let mesh = generate_wavy_patch(9, size, amp).unwrap();
        for p in &mesh.positions {
            let expected = amp * (0.7 * p[0]).sin() * (0.7 * p[2]).cos();
            assert!((p[1] - expected).abs() < 1e-5);
            assert!(p[0].abs() <= size * 0.5 + 1e-5);
            assert!(p[2].abs() <= size * 0.5 + 1e-5);
        }
    }

    #[test]
    fn signed_pow_is_odd_and_zero_at_zero() {
        assert_eq!(signed_pow(0.0, 0.0), 0.0);
        assert!((signed_pow(-0.5, 2.0) + 0.25).abs() < 1e-6);
        assert!((signed_pow(0.5, 1.0) - 0.5).abs() < 1e-6);
    }

    #[test]
    fn vertex_buffer_interleaves_all_vertices() {
        let mesh = generate_superellipsoid(8, 8, 1.0, 1.0, 1.0, 1.0, 1.0).unwrap();
        let (vertices, indices) = mesh.to_vertex_buffer();
        assert_eq!(vertices.len(), mesh.vertex_count());
        assert_eq!(indices, mesh.indices);
        assert_eq!(vertices[3].position, mesh.positions[3]);
        assert_eq!(vertices[3].normal, mesh.normals[3]);
    }
}
