//! # Camera and Projection Math
//!
//! GLU-free view and projection matrices built by hand in column-major
//! layout, plus the interactive orbit/first-person camera state that
//! drives them.
//!
//! All constructors validate their inputs and return [`crate::error::Error`]
//! instead of producing a silently broken matrix.

pub mod orbit;
pub mod projection;

// Re-export main types
pub use orbit::{matrix4_to_array, CameraBounds, CameraMode, CameraState, CameraUniform};
pub use projection::{look_at, orbit_eye, orbit_view, orthographic, perspective};
