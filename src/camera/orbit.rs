//! Interactive camera state: orbit parameters, mode dispatch, and the
//! GPU-ready uniform mirror.

use cgmath::{EuclideanSpace, Matrix4, Point3, SquareMatrix, Vector3};

use super::projection::{look_at, orbit_eye, orbit_view, orthographic, perspective};
use crate::error::Result;

/// Which projection/view pair the state derives each frame.
///
/// Transitions are plain field assignment by the host's input handlers; the
/// math below is a pure function of the current fields either way.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CameraMode {
    Orthographic,
    Perspective,
    FirstPerson,
}

/// Clamping limits applied by the camera mutators.
///
/// Elevation stays short of the poles so the orbit view never degenerates;
/// the lander demo narrowed this further to keep the camera above ground.
#[derive(Debug, Clone, Copy)]
pub struct CameraBounds {
    pub min_elevation: f32,
    pub max_elevation: f32,
    pub min_distance: Option<f32>,
    pub max_distance: Option<f32>,
}

impl Default for CameraBounds {
    fn default() -> Self {
        Self {
            min_elevation: -89.0,
            max_elevation: 89.0,
            min_distance: None,
            max_distance: None,
        }
    }
}

/// Orbit/view parameters, mutated in place by input handlers and read each
/// frame to derive matrices.
///
/// Angles are in degrees, matching the source demos' keyboard steps. The
/// derivations are idempotent pure recomputation, so calling them several
/// times per frame is harmless.
#[derive(Debug, Clone, Copy)]
pub struct CameraState {
    /// Horizontal orbit angle, degrees
    pub azimuth: f32,
    /// Vertical orbit angle, degrees, clamped by `bounds`
    pub elevation: f32,
    /// Orbit radius around `target`
    pub distance: f32,
    /// Point the orbit modes look at
    pub target: Point3<f32>,
    /// Eye position used by [`CameraMode::FirstPerson`]
    pub position: Point3<f32>,
    /// Vertical field of view, degrees
    pub fov_y: f32,
    /// Viewport width/height
    pub aspect: f32,
    pub near: f32,
    pub far: f32,
    pub mode: CameraMode,
    pub bounds: CameraBounds,
}

impl CameraState {
    pub fn new(distance: f32, azimuth: f32, elevation: f32, target: Point3<f32>, aspect: f32) -> Self {
        let mut camera = Self {
            azimuth,
            elevation,
            distance,
            target,
            position: Point3::new(0.0, 1.0, 5.0),
            fov_y: 45.0,
            aspect,
            near: 0.1,
            far: 1000.0,
            mode: CameraMode::Perspective,
            bounds: CameraBounds::default(),
        };
        // Run the clamps once so out-of-range constructor input settles.
        camera.set_elevation(elevation);
        camera.set_distance(distance);
        camera
    }

    pub fn set_azimuth(&mut self, azimuth: f32) {
        self.azimuth = azimuth;
    }

    pub fn add_azimuth(&mut self, delta: f32) {
        self.azimuth += delta;
    }

    pub fn set_elevation(&mut self, elevation: f32) {
        self.elevation = elevation.clamp(self.bounds.min_elevation, self.bounds.max_elevation);
    }

    pub fn add_elevation(&mut self, delta: f32) {
        self.set_elevation(self.elevation + delta);
    }

    pub fn set_distance(&mut self, distance: f32) {
        self.distance = distance.clamp(
            self.bounds.min_distance.unwrap_or(f32::EPSILON),
            self.bounds.max_distance.unwrap_or(f32::MAX),
        );
    }

    pub fn add_distance(&mut self, delta: f32) {
        self.set_distance(self.distance + delta);
    }

    pub fn resize(&mut self, width: u32, height: u32) {
        self.aspect = width as f32 / height as f32;
    }

    /// Unit direction the azimuth/elevation pair points along, shared by the
    /// orbit eye placement and the first-person gaze.
    pub fn forward(&self) -> Vector3<f32> {
        orbit_eye(self.azimuth, self.elevation, 1.0, Point3::origin()).to_vec()
    }

    /// Eye position for the current mode.
    pub fn eye_position(&self) -> Point3<f32> {
        match self.mode {
            CameraMode::FirstPerson => self.position,
            _ => orbit_eye(self.azimuth, self.elevation, self.distance, self.target),
        }
    }

    /// Projection matrix for the current mode.
    ///
    /// The orthographic box spans `+-aspect*distance` horizontally,
    /// `+-distance` vertically, and `+-4*distance` in depth, so zooming the
    /// orbit radius scales the framed volume the same way in both modes.
    pub fn projection_matrix(&self) -> Result<Matrix4<f32>> {
        match self.mode {
            CameraMode::Orthographic => {
                let half_h = self.distance;
                let half_w = self.aspect * self.distance;
                orthographic(
                    -half_w,
                    half_w,
                    -half_h,
                    half_h,
                    -4.0 * self.distance,
                    4.0 * self.distance,
                )
            }
            CameraMode::Perspective | CameraMode::FirstPerson => perspective(
                self.fov_y.to_radians(),
                self.aspect,
                self.near,
                self.far,
            ),
        }
    }

    /// View matrix for the current mode.
    pub fn view_matrix(&self) -> Result<Matrix4<f32>> {
        match self.mode {
            CameraMode::FirstPerson => look_at(
                self.position,
                self.position + self.forward(),
                Vector3::unit_y(),
            ),
            _ => {
                let (_, view) =
                    orbit_view(self.azimuth, self.elevation, self.distance, self.target)?;
                Ok(view)
            }
        }
    }

    pub fn view_projection_matrix(&self) -> Result<Matrix4<f32>> {
        Ok(self.projection_matrix()? * self.view_matrix()?)
    }
}

/// Camera data in the layout shaders consume.
#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct CameraUniform {
    /// Eye position in homogeneous coordinates, padded to 16 bytes.
    pub view_position: [f32; 4],
    /// Combined view-projection matrix.
    pub view_proj: [[f32; 4]; 4],
}

impl Default for CameraUniform {
    fn default() -> Self {
        Self {
            view_position: [0.0; 4],
            view_proj: matrix4_to_array(Matrix4::identity()),
        }
    }
}

impl CameraUniform {
    /// Recompute both fields from the camera state.
    pub fn refresh(&mut self, camera: &CameraState) -> Result<()> {
        let eye = camera.eye_position();
        self.view_position = [eye.x, eye.y, eye.z, 1.0];
        self.view_proj = matrix4_to_array(camera.view_projection_matrix()?);
        Ok(())
    }
}

pub fn matrix4_to_array(matrix: Matrix4<f32>) -> [[f32; 4]; 4] {
    let mut result = [[0.0; 4]; 4];
    for col in 0..4 {
        for row in 0..4 {
            result[col][row] = matrix[col][row];
        }
    }
    result
}
