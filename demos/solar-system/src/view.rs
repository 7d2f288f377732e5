//! Camera presets and the transition between them.
//!
//! A button press only records the destination. The next frame launches a
//! tween from wherever the camera is right now, cancelling any transition
//! still in flight.

use glam::Vec3;
use orrery_engine::{EngineContext, Easing, GameEvent, Tween, TweenId};

// ── Game event kinds to the host ─────────────────────────────────────

/// A transition started. `a` = preset index.
pub const EVENT_VIEW_CHANGED: u32 = 1;
/// A transition reached its preset.
pub const EVENT_VIEW_SETTLED: u32 = 2;

pub const TRANSITION_SECONDS: f32 = 3.0;
pub const TRANSITION_EASING: Easing = Easing::QuadOut;

/// Everything the camera aims at.
const FOCUS: Vec3 = Vec3::ZERO;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewPreset {
    Top,
    Front,
    Side,
}

impl ViewPreset {
    /// Map a button id to a preset. Anything unrecognised is the side view.
    pub fn from_button_id(id: &str) -> Self {
        match id {
            "top" => ViewPreset::Top,
            "front" => ViewPreset::Front,
            _ => ViewPreset::Side,
        }
    }

    pub fn position(self) -> Vec3 {
        match self {
            ViewPreset::Top => Vec3::new(0.0, 300.0, 0.0),
            ViewPreset::Front => Vec3::new(0.0, 140.0, 300.0),
            ViewPreset::Side => Vec3::new(300.0, 70.0, 0.0),
        }
    }

    pub fn index(self) -> u32 {
        self as u32
    }
}

/// Where the camera should go, and whether that still needs acting on.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraTarget {
    pub position: Vec3,
    pub pending: bool,
}

impl Default for CameraTarget {
    fn default() -> Self {
        Self {
            position: ViewPreset::Top.position(),
            pending: true,
        }
    }
}

#[derive(Debug)]
pub struct ViewController {
    target: CameraTarget,
    preset: ViewPreset,
    active: Option<TweenId>,
}

impl ViewController {
    pub fn new() -> Self {
        Self {
            target: CameraTarget::default(),
            preset: ViewPreset::Top,
            active: None,
        }
    }

    pub fn target(&self) -> CameraTarget {
        self.target
    }

    pub fn preset(&self) -> ViewPreset {
        self.preset
    }

    /// Handle of the most recently launched transition.
    pub fn active_transition(&self) -> Option<TweenId> {
        self.active
    }

    pub fn select(&mut self, preset: ViewPreset) {
        self.preset = preset;
        self.target = CameraTarget {
            position: preset.position(),
            pending: true,
        };
    }

    pub fn select_button(&mut self, id: &str) {
        self.select(ViewPreset::from_button_id(id));
    }

    /// Start the camera toward the target if a selection is waiting.
    pub fn launch_pending(&mut self, ctx: &mut EngineContext) -> Option<TweenId> {
        if !self.target.pending {
            return None;
        }
        self.target.pending = false;

        if let Some(previous) = self.active.take() {
            ctx.tweens.cancel(previous);
        }

        let from = ctx.camera.position;
        let id = ctx.tweens.add(
            Tween::camera_position(from, self.target.position, TRANSITION_SECONDS, TRANSITION_EASING)
                .with_aim(FOCUS)
                .with_on_complete(EVENT_VIEW_SETTLED),
        );
        ctx.emit_event(GameEvent::new(
            EVENT_VIEW_CHANGED as f32,
            self.preset.index() as f32,
            0.0,
            0.0,
        ));
        log::debug!("camera: {:?} from {from} to {}", self.preset, self.target.position);

        self.active = Some(id);
        Some(id)
    }
}

impl Default for ViewController {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn button_ids_map_to_presets() {
        assert_eq!(ViewPreset::from_button_id("top"), ViewPreset::Top);
        assert_eq!(ViewPreset::from_button_id("front"), ViewPreset::Front);
        assert_eq!(ViewPreset::from_button_id("side"), ViewPreset::Side);
        assert_eq!(ViewPreset::from_button_id("unknown"), ViewPreset::Side);
        assert_eq!(ViewPreset::from_button_id(""), ViewPreset::Side);
        assert_eq!(ViewPreset::from_button_id("Top"), ViewPreset::Side);
    }

    #[test]
    fn unknown_button_targets_side_position() {
        let mut view = ViewController::new();
        view.select_button("unknown");
        assert_eq!(view.target().position, Vec3::new(300.0, 70.0, 0.0));
        assert!(view.target().pending);
    }

    #[test]
    fn fresh_controller_wants_top() {
        let view = ViewController::new();
        assert_eq!(view.target(), CameraTarget { position: Vec3::new(0.0, 300.0, 0.0), pending: true });
        assert!(view.active_transition().is_none());
    }

    #[test]
    fn launch_clears_pending_and_tweens_from_live_position() {
        let mut ctx = EngineContext::new();
        ctx.camera.position = Vec3::new(5.0, 5.0, 5.0);
        let mut view = ViewController::new();

        let id = view.launch_pending(&mut ctx).expect("pending launch");
        assert!(!view.target().pending);
        assert!(view.launch_pending(&mut ctx).is_none());

        let tween = ctx.tweens.get(id).unwrap();
        assert_eq!(tween.duration, TRANSITION_SECONDS);
        assert_eq!(tween.easing, Easing::QuadOut);
        assert_eq!(tween.aim, Some(Vec3::ZERO));
        assert_eq!(tween.target.end(), Vec3::new(0.0, 300.0, 0.0));
        let orrery_engine::TweenTarget::CameraPosition { from, .. } = tween.target;
        assert_eq!(from, Vec3::new(5.0, 5.0, 5.0));
        assert_eq!(ctx.events, vec![GameEvent::new(1.0, 0.0, 0.0, 0.0)]);
    }

    #[test]
    fn new_selection_cancels_previous_transition() {
        let mut ctx = EngineContext::new();
        let mut view = ViewController::new();
        let first = view.launch_pending(&mut ctx).unwrap();

        view.select_button("front");
        let second = view.launch_pending(&mut ctx).unwrap();

        assert!(!ctx.tweens.is_active(first));
        assert!(ctx.tweens.is_active(second));
        assert_eq!(ctx.tweens.len(), 1);
        assert_eq!(view.active_transition(), Some(second));
    }
}
