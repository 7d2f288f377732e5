pub mod api;
pub mod core;
pub mod components;
pub mod systems;
pub mod renderer;
pub mod bridge;
pub mod input;
pub mod assets;
pub mod extensions;

pub use glam;

// Re-export key types at crate root for convenience
pub use api::game::{Game, GameConfig, EngineContext};
pub use api::types::{NodeId, TextureId, GameEvent};
pub use components::node::Node;
pub use components::mesh::{MeshComponent, Geometry, Material, Color, Shading, Side};
pub use core::scene::{Scene, Background};
pub use core::time::FrameClock;
pub use core::frame_loop::{FrameScheduler, FrameCallback, LoopHandle, ManualScheduler};
pub use renderer::instance::{RenderInstance, RenderBuffer};
pub use renderer::camera::{PerspectiveCamera, CameraUniform};
pub use renderer::traits::{Renderer, FrameData, LightingFrame};
pub use input::queue::{InputEvent, InputQueue};
pub use input::controls::OrbitControls;
pub use assets::manifest::AssetManifest;
pub use assets::registry::TextureRegistry;
pub use bridge::protocol::ProtocolLayout;
pub use systems::lighting::{PointLight, AmbientLight, LightState};
pub use systems::render::build_render_buffer;
pub use bridge::protocol::{LIGHT_FLOATS, DEFAULT_MAX_LIGHTS};

// Extensions — scene graph, easing, tweens
pub use extensions::{
    Easing, lerp_vec3, ease_vec3,
    TransformGraph, LocalTransform, wrap_angle,
    TweenState, Tween, TweenId, TweenTarget,
};
