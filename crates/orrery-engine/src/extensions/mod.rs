// extensions/mod.rs
//
// Scene-graph extensions: hierarchical transforms, easing curves, tweens.
// Games opt in by spawning through EngineContext, which owns one of each.

pub mod easing;
pub mod transform;
pub mod tween;

pub use easing::{Easing, lerp_vec3, ease_vec3};
pub use transform::{TransformGraph, LocalTransform, wrap_angle};
pub use tween::{TweenState, Tween, TweenId, TweenTarget};
