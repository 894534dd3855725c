//! Animated point light that sweeps a circle around the scene origin.

use cgmath::Point3;

use crate::camera::projection::orbit_eye;

/// Sweep rate of the animated light, degrees per second.
pub const LIGHT_SWEEP_RATE: f32 = 30.0;

/// State of the single scene light.
///
/// Angles are in degrees like the camera orbit. `tick` only advances the
/// sweep angle; converting to a world position is a separate pure read so
/// hosts can draw the light marker and fill shader uniforms from the same
/// state.
#[derive(Debug, Clone, Copy)]
pub struct LightState {
    /// Whether lighting is applied at all (hosts may still draw unlit).
    pub enabled: bool,
    /// Whether `tick` advances the sweep.
    pub animate: bool,
    /// Radius of the sweep circle around the origin.
    pub radius: f32,
    /// Sweep angle, degrees, kept in [0, 360).
    pub theta: f32,
    /// Height angle above the horizontal plane, degrees.
    pub elevation: f32,
}

impl Default for LightState {
    fn default() -> Self {
        Self {
            enabled: true,
            animate: true,
            radius: 8.0,
            theta: 0.0,
            elevation: 25.0,
        }
    }
}

impl LightState {
    /// Advance the sweep by `dt` seconds at [`LIGHT_SWEEP_RATE`].
    ///
    /// No-op when `animate` is off. The angle wraps into [0, 360) so long
    /// sessions never accumulate a huge angle.
    pub fn tick(&mut self, dt: f32) {
        if !self.animate {
            return;
        }
        self.theta = (self.theta + LIGHT_SWEEP_RATE * dt).rem_euclid(360.0);
    }

    /// Current world position on the sweep circle.
    pub fn position(&self) -> Point3<f32> {
        orbit_eye(self.theta, self.elevation, self.radius, Point3::new(0.0, 0.0, 0.0))
    }
}
