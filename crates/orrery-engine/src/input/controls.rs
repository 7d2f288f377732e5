//! Orbit controls: drag to orbit around a target point, wheel to zoom.
//!
//! Pointer input accumulates rotation and zoom deltas; `update` applies them
//! to the camera in spherical coordinates around `target` and re-aims it.
//! Calling `update` after moving the camera programmatically re-derives the
//! spherical state from the new position, so later dragging starts from there.

use std::f32::consts::{PI, TAU};
use glam::{Vec2, Vec3};
use crate::input::queue::InputEvent;
use crate::renderer::camera::PerspectiveCamera;

/// Keeps the polar angle off the poles.
const POLAR_EPS: f32 = 1e-6;
/// Zoom factor per wheel notch.
const ZOOM_BASE: f32 = 0.95;

pub struct OrbitControls {
    /// Point the camera orbits around and looks at.
    pub target: Vec3,
    pub enabled: bool,
    pub rotate_speed: f32,
    pub zoom_speed: f32,
    pub min_distance: f32,
    pub max_distance: f32,
    /// Viewport height in pixels; a full-height drag turns 2π × rotate_speed.
    viewport_height: f32,
    theta_delta: f32,
    phi_delta: f32,
    scale: f32,
    drag_from: Option<Vec2>,
}

impl OrbitControls {
    pub fn new(viewport_height: f32) -> Self {
        Self {
            target: Vec3::ZERO,
            enabled: true,
            rotate_speed: 1.0,
            zoom_speed: 1.0,
            min_distance: 0.0,
            max_distance: f32::INFINITY,
            viewport_height: viewport_height.max(1.0),
            theta_delta: 0.0,
            phi_delta: 0.0,
            scale: 1.0,
            drag_from: None,
        }
    }

    pub fn set_target(&mut self, target: Vec3) {
        self.target = target;
    }

    pub fn set_viewport_height(&mut self, height: f32) {
        self.viewport_height = height.max(1.0);
    }

    pub fn is_dragging(&self) -> bool {
        self.drag_from.is_some()
    }

    /// Feed one input event. Non-pointer events are ignored.
    pub fn handle_event(&mut self, event: &InputEvent) {
        if !self.enabled {
            return;
        }
        match *event {
            InputEvent::PointerDown { x, y } => {
                self.drag_from = Some(Vec2::new(x, y));
            }
            InputEvent::PointerMove { x, y } => {
                if let Some(from) = self.drag_from {
                    let to = Vec2::new(x, y);
                    let delta = to - from;
                    self.theta_delta -= TAU * delta.x / self.viewport_height * self.rotate_speed;
                    self.phi_delta -= TAU * delta.y / self.viewport_height * self.rotate_speed;
                    self.drag_from = Some(to);
                }
            }
            InputEvent::PointerUp { .. } => {
                self.drag_from = None;
            }
            InputEvent::Wheel { delta_y } => {
                let step = ZOOM_BASE.powf(self.zoom_speed);
                if delta_y < 0.0 {
                    self.scale *= step;
                } else if delta_y > 0.0 {
                    self.scale /= step;
                }
            }
            _ => {}
        }
    }

    /// Apply pending deltas and re-aim the camera at `target`.
    /// Returns false when the camera sits on the target and nothing was applied.
    pub fn update(&mut self, camera: &mut PerspectiveCamera) -> bool {
        let offset = camera.position - self.target;
        let radius = offset.length();
        if radius < 1e-6 {
            self.clear_deltas();
            camera.look_at(self.target);
            return false;
        }

        let mut theta = offset.x.atan2(offset.z);
        let mut phi = (offset.y / radius).clamp(-1.0, 1.0).acos();

        theta += self.theta_delta;
        phi = (phi + self.phi_delta).clamp(POLAR_EPS, PI - POLAR_EPS);
        let radius = (radius * self.scale).clamp(self.min_distance, self.max_distance);

        let sin_phi = phi.sin();
        camera.position = self.target
            + Vec3::new(
                radius * sin_phi * theta.sin(),
                radius * phi.cos(),
                radius * sin_phi * theta.cos(),
            );
        camera.look_at(self.target);
        self.clear_deltas();
        true
    }

    fn clear_deltas(&mut self) {
        self.theta_delta = 0.0;
        self.phi_delta = 0.0;
        self.scale = 1.0;
    }
}

impl Default for OrbitControls {
    fn default() -> Self {
        Self::new(600.0)
    }
}
