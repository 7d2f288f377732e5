//! Scene lighting: point lights plus one ambient term.
//!
//! Lights are persistent — they stay until explicitly removed. Each frame
//! the renderer serializes active lights into the shared buffer.

use bytemuck::{Pod, Zeroable};
use glam::Vec3;
use crate::components::mesh::Color;

/// A point light radiating in all directions from `position`.
///
/// Wire format (8 floats / 32 bytes):
/// `[x, y, z, r, g, b, intensity, distance]`
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
#[repr(C)]
pub struct PointLight {
    pub x: f32,
    pub y: f32,
    pub z: f32,
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub intensity: f32,
    /// Falloff distance in world units; 0 means no falloff.
    pub distance: f32,
}

impl PointLight {
    pub fn new(position: Vec3, color: Color, intensity: f32, distance: f32) -> Self {
        Self {
            x: position.x,
            y: position.y,
            z: position.z,
            r: color.r,
            g: color.g,
            b: color.b,
            intensity,
            distance,
        }
    }

    pub fn position(&self) -> Vec3 {
        Vec3::new(self.x, self.y, self.z)
    }

    pub fn with_position(mut self, position: Vec3) -> Self {
        self.x = position.x;
        self.y = position.y;
        self.z = position.z;
        self
    }
}

/// Uniform light applied to every lit surface regardless of orientation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AmbientLight {
    pub color: Color,
    pub intensity: f32,
}

impl AmbientLight {
    pub fn new(color: Color, intensity: f32) -> Self {
        Self { color, intensity }
    }

    /// Effective RGB contribution.
    pub fn rgb(&self) -> [f32; 3] {
        [
            self.color.r * self.intensity,
            self.color.g * self.intensity,
            self.color.b * self.intensity,
        ]
    }
}

/// Manages active point lights and the ambient term.
///
/// Without any ambient light, unlit faces of lit materials render black.
pub struct LightState {
    lights: Vec<PointLight>,
    ambient: Option<AmbientLight>,
}

impl LightState {
    pub fn new() -> Self {
        Self {
            lights: Vec::new(),
            ambient: None,
        }
    }

    pub fn with_capacity(max_lights: usize) -> Self {
        Self {
            lights: Vec::with_capacity(max_lights),
            ambient: None,
        }
    }

    pub fn add(&mut self, light: PointLight) {
        self.lights.push(light);
    }

    pub fn clear(&mut self) {
        self.lights.clear();
    }

    pub fn iter(&self) -> impl Iterator<Item = &PointLight> {
        self.lights.iter()
    }

    pub fn as_slice(&self) -> &[PointLight] {
        &self.lights
    }

    pub fn count(&self) -> usize {
        self.lights.len()
    }

    pub fn set_ambient(&mut self, ambient: AmbientLight) {
        self.ambient = Some(ambient);
    }

    pub fn ambient(&self) -> Option<&AmbientLight> {
        self.ambient.as_ref()
    }
}

impl Default for LightState {
    fn default() -> Self {
        Self::new()
    }
}
