//! Renderer trait: the seam between the engine and whatever draws the frame.
//!
//! In the browser the frame is packed into a shared buffer and drawn by the
//! TypeScript host; tests plug in a recording renderer instead.

use super::camera::CameraUniform;
use super::instance::RenderInstance;
use crate::api::types::GameEvent;
use crate::core::scene::Background;
use crate::systems::lighting::{LightState, PointLight};

/// Lighting data for one frame.
#[derive(Debug, Clone, Copy)]
pub struct LightingFrame<'a> {
    /// Ambient RGB, unscaled.
    pub ambient_color: [f32; 3],
    /// Zero when the scene has no ambient light.
    pub ambient_intensity: f32,
    pub lights: &'a [PointLight],
}

impl<'a> LightingFrame<'a> {
    pub fn from_state(state: &'a LightState) -> Self {
        let (ambient_color, ambient_intensity) = match state.ambient() {
            Some(ambient) => (ambient.color.to_array(), ambient.intensity),
            None => ([0.0; 3], 0.0),
        };
        Self {
            ambient_color,
            ambient_intensity,
            lights: state.as_slice(),
        }
    }

    /// Effective ambient contribution.
    pub fn ambient_rgb(&self) -> [f32; 3] {
        self.ambient_color.map(|c| c * self.ambient_intensity)
    }
}

/// Complete frame data for rendering.
pub struct FrameData<'a> {
    /// Mesh instances in scene order.
    pub instances: &'a [RenderInstance],
    /// View, projection and eye position.
    pub camera: CameraUniform,
    pub lighting: LightingFrame<'a>,
    pub background: Option<&'a Background>,
    /// Game events raised this frame.
    pub events: &'a [GameEvent],
}

/// Renderer trait for frame consumers.
///
/// `draw` is called exactly once per tick with the fully built frame.
pub trait Renderer {
    /// Backend identifier (e.g., "shared-buffer", "recording").
    fn backend(&self) -> &'static str;

    /// Draw a complete frame.
    fn draw(&mut self, frame: &FrameData);

    /// Handle viewport resize.
    fn resize(&mut self, _width: u32, _height: u32) {}
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::mesh::Color;
    use crate::systems::lighting::AmbientLight;
    use glam::Vec3;

    #[test]
    fn lighting_frame_without_ambient_is_black() {
        let state = LightState::new();
        let frame = LightingFrame::from_state(&state);
        assert_eq!(frame.ambient_intensity, 0.0);
        assert_eq!(frame.ambient_rgb(), [0.0; 3]);
        assert!(frame.lights.is_empty());
    }

    #[test]
    fn lighting_frame_copies_state() {
        let mut state = LightState::new();
        state.set_ambient(AmbientLight::new(Color::WHITE, 0.5));
        state.add(PointLight::new(Vec3::ZERO, Color::WHITE, 2.5, 400.0));
        let frame = LightingFrame::from_state(&state);
        assert_eq!(frame.ambient_color, [1.0, 1.0, 1.0]);
        assert_eq!(frame.ambient_rgb(), [0.5, 0.5, 0.5]);
        assert_eq!(frame.lights.len(), 1);
    }
}
