//! Owned per-frame scene state: camera, light, and retained meshes.

use cgmath::{Matrix4, Point3};

use crate::camera::CameraState;
use crate::error::Result;
use crate::geometry::MeshData;

use super::light::LightState;

/// Matrix bundle a host needs to render one frame.
#[derive(Debug, Clone, Copy)]
pub struct FrameMatrices {
    pub projection: Matrix4<f32>,
    pub view: Matrix4<f32>,
    /// Eye position matching `view`, for specular terms and culling.
    pub eye: Point3<f32>,
}

/// The whole mutable state of a demo scene.
///
/// Hosts own one value of this and pass it by `&mut` into their input and
/// update handlers. Meshes are retained as built; re-tessellation means
/// replacing the stored `MeshData`.
#[derive(Debug, Clone)]
pub struct SceneState {
    pub camera: CameraState,
    pub light: LightState,
    pub meshes: Vec<MeshData>,
}

impl SceneState {
    /// A scene framed the way the source demos start: orbit camera a short
    /// way out, above the horizon, looking at the origin.
    pub fn new(aspect: f32) -> Self {
        Self {
            camera: CameraState::new(10.0, 45.0, 20.0, Point3::new(0.0, 0.0, 0.0), aspect),
            light: LightState::default(),
            meshes: Vec::new(),
        }
    }

    /// Retain a generated mesh; returns its slot index.
    pub fn add_mesh(&mut self, mesh: MeshData) -> usize {
        log::debug!(
            "scene retains mesh {}: {} vertices, {} triangles",
            self.meshes.len(),
            mesh.vertex_count(),
            mesh.triangle_count()
        );
        self.meshes.push(mesh);
        self.meshes.len() - 1
    }

    /// One simulation step of `dt` seconds.
    pub fn update(&mut self, dt: f32) {
        self.light.tick(dt);
    }

    /// Recompute the frame's matrices from the current camera fields.
    pub fn frame_matrices(&self) -> Result<FrameMatrices> {
        Ok(FrameMatrices {
            projection: self.camera.projection_matrix()?,
            view: self.camera.view_matrix()?,
            eye: self.camera.eye_position(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::geometry::generate_wavy_patch;

    #[test]
    fn add_mesh_returns_consecutive_slots() {
        let mut scene = SceneState::new(1.0);
        let patch = generate_wavy_patch(4, 10.0, 0.5).unwrap();
        assert_eq!(scene.add_mesh(patch.clone()), 0);
        assert_eq!(scene.add_mesh(patch), 1);
        assert_eq!(scene.meshes.len(), 2);
    }

    #[test]
    fn update_advances_the_light() {
        let mut scene = SceneState::new(1.0);
        scene.update(2.0);
        assert!((scene.light.theta - 60.0).abs() < 1e-4);
    }

    #[test]
    fn frame_matrices_mirror_the_camera() {
        let scene = SceneState::new(16.0 / 9.0);
        let frame = scene.frame_matrices().unwrap();
        assert_eq!(frame.projection, scene.camera.projection_matrix().unwrap());
        assert_eq!(frame.view, scene.camera.view_matrix().unwrap());
        assert_eq!(frame.eye, scene.camera.eye_position());
    }

    #[test]
    fn frame_matrices_propagate_camera_errors() {
        let mut scene = SceneState::new(1.0);
        scene.camera.aspect = 0.0;
        assert_eq!(
            scene.frame_matrices().unwrap_err(),
            Error::InvalidAspect(0.0)
        );
    }
}
