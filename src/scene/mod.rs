//! # Scene Management Module
//!
//! This module gathers the per-frame mutable state of a demo scene into one
//! owned container instead of scattered globals: the interactive camera, the
//! animated light, and the generated meshes.
//!
//! ## Key Components
//!
//! - [`SceneState`] - The owned container driven by the host event loop
//! - [`LightState`] - An orbiting point light with a fixed-rate sweep
//! - [`FrameMatrices`] - The per-frame matrix bundle derived from the camera
//! - [`Vertex3D`] - GPU-compatible vertex format for the generated meshes
//!
//! ## Usage
//!
//! ```
//! use thistle::geometry::generate_twisted_torus;
//! use thistle::scene::SceneState;
//!
//! let mut scene = SceneState::new(16.0 / 9.0);
//! scene.add_mesh(generate_twisted_torus(24, 48, 1.6, 0.5, 3).unwrap());
//!
//! // One simulation step, then the matrices for the frame.
//! scene.update(1.0 / 60.0);
//! let frame = scene.frame_matrices().unwrap();
//! assert_eq!(frame.eye, scene.camera.eye_position());
//! ```

pub mod light;
pub mod state;
pub mod vertex;

// Re-export main types
pub use light::LightState;
pub use state::{FrameMatrices, SceneState};
pub use vertex::Vertex3D;
