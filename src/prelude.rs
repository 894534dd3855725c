//! # Thistle Prelude
//!
//! This module provides a convenient way to import commonly used types from
//! the crate. It's designed to reduce boilerplate imports in typical demo
//! hosts.
//!
//! ## Usage
//!
//! ```rust
//! use thistle::prelude::*;
//!
//! fn build() -> Result<SceneState> {
//!     let mut scene = SceneState::new(4.0 / 3.0);
//!     scene.add_mesh(generate_twisted_torus(24, 48, 1.6, 0.5, 3)?);
//!     scene.add_mesh(generate_superellipsoid(24, 24, 1.0, 1.0, 1.5, 0.4, 0.4)?);
//!     Ok(scene)
//! }
//!
//! assert!(build().is_ok());
//! ```

// Re-export error handling
pub use crate::error::{Error, Result};

// Re-export geometry types
pub use crate::geometry::{
    build_parametric_mesh, generate_superellipsoid, generate_twisted_torus, generate_wavy_patch,
    MeshData,
};

// Re-export camera math and state
pub use crate::camera::{
    look_at, orbit_eye, orbit_view, orthographic, perspective, CameraBounds, CameraMode,
    CameraState, CameraUniform,
};

// Re-export scene types
pub use crate::scene::{FrameMatrices, LightState, SceneState, Vertex3D};

// Re-export common external dependencies
pub use cgmath::{InnerSpace, Matrix4, Point3, Vector3};
