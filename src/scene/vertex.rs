//! # Vertex Data Structures
//!
//! GPU-compatible vertex formats shared by the mesh builder and the
//! buffered-draw scene layer.

/// A 3D vertex with position and normal data.
///
/// This structure represents a single vertex in 3D space with its position
/// and normal vector, laid out for direct upload into a GPU vertex buffer.
///
/// # Memory Layout
///
/// The `#[repr(C)]` attribute ensures the struct has a C-compatible memory
/// layout, which is required for GPU buffer operations. The
/// [`bytemuck::Pod`] derive lets a `&[Vertex3D]` be cast to bytes without
/// copying.
///
/// # Examples
///
/// ```
/// use thistle::scene::vertex::Vertex3D;
///
/// let vertex = Vertex3D {
///     position: [0.0, 1.0, 0.0],
///     normal: [0.0, 1.0, 0.0],
/// };
/// assert_eq!(std::mem::size_of_val(&vertex), 24);
/// ```
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Vertex3D {
    /// 3D position coordinates [x, y, z]
    pub position: [f32; 3],
    /// 3D normal vector [nx, ny, nz] for lighting calculations
    pub normal: [f32; 3],
}
