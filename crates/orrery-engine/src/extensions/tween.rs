// extensions/tween.rs
//
// Tween system — timed interpolation of the camera eye position.
// Every tween is addressed by a TweenId handle that can cancel it.
//
// Usage:
//   let id = tweens.add(Tween::camera_position(camera.position, goal, 3.0, Easing::QuadOut)
//       .with_aim(Vec3::ZERO));
//   tweens.tick(dt, &mut camera, &mut controls);
//   tweens.cancel(id);

use std::collections::BTreeMap;
use glam::Vec3;
use crate::input::controls::OrbitControls;
use crate::renderer::camera::PerspectiveCamera;
use super::easing::{Easing, ease_vec3};

/// What property a tween animates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TweenTarget {
    /// Animate the camera eye position.
    CameraPosition { from: Vec3, to: Vec3 },
}

impl TweenTarget {
    /// Destination value of the tween.
    pub fn end(&self) -> Vec3 {
        match *self {
            TweenTarget::CameraPosition { to, .. } => to,
        }
    }
}

/// A single tween animation.
#[derive(Debug, Clone)]
pub struct Tween {
    pub target: TweenTarget,
    /// Duration in seconds.
    pub duration: f32,
    pub elapsed: f32,
    pub easing: Easing,
    /// After every step, look at this point and move the orbit controls'
    /// target onto it.
    pub aim: Option<Vec3>,
    /// Optional event id emitted as a GameEvent when complete.
    pub on_complete: Option<u32>,
}

impl Tween {
    pub fn camera_position(from: Vec3, to: Vec3, duration: f32, easing: Easing) -> Self {
        Self {
            target: TweenTarget::CameraPosition { from, to },
            duration,
            elapsed: 0.0,
            easing,
            aim: None,
            on_complete: None,
        }
    }

    // -- Builder methods --

    pub fn with_aim(mut self, point: Vec3) -> Self {
        self.aim = Some(point);
        self
    }

    pub fn with_on_complete(mut self, event_id: u32) -> Self {
        self.on_complete = Some(event_id);
        self
    }

    /// Normalized progress [0, 1].
    pub fn progress(&self) -> f32 {
        if self.duration <= 0.0 {
            1.0
        } else {
            (self.elapsed / self.duration).clamp(0.0, 1.0)
        }
    }

    pub fn is_complete(&self) -> bool {
        self.elapsed >= self.duration
    }

    /// Current interpolated value.
    pub fn value(&self) -> Vec3 {
        let t = self.progress();
        match self.target {
            TweenTarget::CameraPosition { from, to } => ease_vec3(from, to, t, self.easing),
        }
    }
}

/// Cancellable handle to a tween.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TweenId(pub u32);

/// Manages all active tweens.
#[derive(Debug, Default)]
pub struct TweenState {
    // Ascending id order: when two tweens write the camera, the newer one lands last.
    tweens: BTreeMap<TweenId, Tween>,
    next_id: u32,
    completed_events: Vec<u32>,
}

impl TweenState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a tween. Returns a handle for later control.
    pub fn add(&mut self, tween: Tween) -> TweenId {
        let id = TweenId(self.next_id);
        self.next_id += 1;
        self.tweens.insert(id, tween);
        id
    }

    /// Stop a tween where it is. Returns false if it already finished.
    pub fn cancel(&mut self, id: TweenId) -> bool {
        self.tweens.remove(&id).is_some()
    }

    pub fn is_active(&self, id: TweenId) -> bool {
        self.tweens.contains_key(&id)
    }

    pub fn get(&self, id: TweenId) -> Option<&Tween> {
        self.tweens.get(&id)
    }

    /// Advance all tweens by `dt` seconds and write their values.
    /// Returns the number of tweens that completed this tick.
    pub fn tick(
        &mut self,
        dt: f32,
        camera: &mut PerspectiveCamera,
        controls: &mut OrbitControls,
    ) -> usize {
        let mut completed = Vec::new();

        for (&id, tween) in self.tweens.iter_mut() {
            tween.elapsed += dt;
            let value = tween.value();

            match tween.target {
                TweenTarget::CameraPosition { .. } => {
                    camera.position = value;
                    if let Some(aim) = tween.aim {
                        camera.look_at(aim);
                        controls.set_target(aim);
                        controls.update(camera);
                    }
                }
            }

            if tween.is_complete() {
                if let Some(event_id) = tween.on_complete {
                    self.completed_events.push(event_id);
                }
                completed.push(id);
            }
        }

        for id in &completed {
            self.tweens.remove(id);
        }
        completed.len()
    }

    /// Drain completed tween events (for GameEvent emission).
    pub fn drain_completed(&mut self) -> impl Iterator<Item = u32> + '_ {
        self.completed_events.drain(..)
    }

    pub fn len(&self) -> usize {
        self.tweens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tweens.is_empty()
    }
}
