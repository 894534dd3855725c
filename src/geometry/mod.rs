//! # Procedural Geometry Generation
//!
//! This module turns closed-form parametric surfaces into indexed triangle
//! meshes with smoothed per-vertex normals, ready for a single buffered
//! draw call.
//!
//! ## Supported Surfaces
//!
//! - **Twisted torus**: a torus whose cross-section phase rotates an integer
//!   number of extra turns as it sweeps the major circle
//! - **Superellipsoid**: an ellipsoid whose profile squares off or rounds
//!   continuously as its two exponents vary
//! - **Wavy patch**: a sinusoidal height-field ground square
//! - Any custom surface via [`build_parametric_mesh`]
//!
//! ## Usage
//!
//! ```rust
//! use thistle::geometry::{generate_twisted_torus, generate_superellipsoid};
//!
//! let torus = generate_twisted_torus(48, 96, 1.6, 0.5, 3).unwrap();
//! assert_eq!(torus.vertex_count(), 48 * 96);
//!
//! // e1 = e2 = 1 degenerates to a plain ellipsoid
//! let blob = generate_superellipsoid(32, 32, 1.0, 1.0, 1.5, 0.6, 0.6).unwrap();
//! assert_eq!(blob.triangle_count(), 31 * 31 * 2);
//! ```

pub mod parametric;

pub use parametric::{
    build_parametric_mesh, generate_superellipsoid, generate_twisted_torus, generate_wavy_patch,
};

use crate::scene::vertex::Vertex3D;

/// An indexed triangle mesh produced by the parametric builder.
///
/// Vertices of the `nu x nv` parameter grid live at flat index
/// `row * nu + col`. Construction is atomic: a `MeshData` is fully
/// populated before it is handed to the caller and immutable afterwards.
#[derive(Debug, Clone)]
pub struct MeshData {
    /// Vertex positions (x, y, z)
    pub positions: Vec<[f32; 3]>,
    /// Smoothed unit normals, zero where the accumulated sum was degenerate
    pub normals: Vec<[f32; 3]>,
    /// Triangle indices, counter-clockwise winding
    pub indices: Vec<u32>,
}

impl MeshData {
    /// Number of vertices in this mesh.
    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    /// Number of triangles in this mesh.
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Interleave positions and normals into the GPU vertex format.
    ///
    /// Returns the vertex buffer together with a copy of the index buffer
    /// so the host can issue one buffered draw per mesh.
    pub fn to_vertex_buffer(&self) -> (Vec<Vertex3D>, Vec<u32>) {
        let vertices = self
            .positions
            .iter()
            .zip(&self.normals)
            .map(|(position, normal)| Vertex3D {
                position: *position,
                normal: *normal,
            })
            .collect();

        (vertices, self.indices.clone())
    }
}
