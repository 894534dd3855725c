//! # Error Types
//!
//! All failures in this crate are input-contract violations reported
//! synchronously to the caller. Nothing is retried and no parameter is
//! silently clamped inside the core; clamping belongs to the interactive
//! camera state, which applies it before the math runs.

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Invalid-parameter violations raised by the mesh builder and the
/// camera/projection constructors.
#[derive(Debug, Clone, Copy, PartialEq, thiserror::Error)]
pub enum Error {
    /// The tessellation grid needs at least two samples along each axis.
    #[error("grid resolution must be at least 2x2, got {nu}x{nv}")]
    GridTooSmall { nu: usize, nv: usize },

    /// Vertical field of view outside the open interval (0, pi).
    #[error("field of view must lie in (0, pi) radians, got {0}")]
    InvalidFieldOfView(f32),

    /// Viewport aspect ratio must be a positive width/height quotient.
    #[error("aspect ratio must be positive, got {0}")]
    InvalidAspect(f32),

    /// Near/far planes must satisfy `0 < near < far`.
    #[error("depth range must satisfy 0 < near < far, got near={near} far={far}")]
    InvalidDepthRange { near: f32, far: f32 },

    /// An orthographic box axis collapsed to zero extent.
    #[error("orthographic box has zero extent on the {axis} axis")]
    DegenerateBox { axis: &'static str },

    /// The eye coincides with the target, or the up vector is parallel to
    /// the view direction, so no orthonormal basis exists.
    #[error("look-at basis is degenerate (eye at target or up parallel to view)")]
    DegenerateLookAt,

    /// Orbit distance must be a positive radius.
    #[error("orbit distance must be positive, got {0}")]
    InvalidDistance(f32),
}
