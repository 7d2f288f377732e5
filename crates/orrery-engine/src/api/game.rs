use glam::Vec3;
use crate::api::types::{GameEvent, NodeId};
use crate::assets::registry::TextureRegistry;
use crate::bridge::protocol::DEFAULT_MAX_LIGHTS;
use crate::components::node::Node;
use crate::core::scene::Scene;
use crate::extensions::transform::{LocalTransform, TransformGraph};
use crate::extensions::tween::TweenState;
use crate::input::controls::OrbitControls;
use crate::input::queue::InputQueue;
use crate::renderer::camera::PerspectiveCamera;
use crate::systems::lighting::LightState;

/// Configuration for the engine, provided by the game.
#[derive(Debug, Clone)]
pub struct GameConfig {
    /// Initial viewport width in pixels.
    pub viewport_width: f32,
    /// Initial viewport height in pixels.
    pub viewport_height: f32,
    /// Vertical field of view in degrees (default: 75).
    pub fov_degrees: f32,
    /// Near clip plane (default: 0.1).
    pub near: f32,
    /// Far clip plane (default: 1000).
    pub far: f32,
    /// Longest frame delta the clock will report, in seconds (default: 0.25).
    pub max_frame_dt: f32,
    /// Maximum number of render instances (default: 64).
    pub max_instances: usize,
    /// Maximum number of point lights (default: 8).
    pub max_lights: usize,
    /// Maximum number of game events per frame (default: 32).
    pub max_events: usize,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            viewport_width: 1280.0,
            viewport_height: 720.0,
            fov_degrees: 75.0,
            near: 0.1,
            far: 1000.0,
            max_frame_dt: 0.25,
            max_instances: 64,
            max_lights: DEFAULT_MAX_LIGHTS,
            max_events: 32,
        }
    }
}

impl GameConfig {
    pub fn aspect(&self) -> f32 {
        if self.viewport_height > 0.0 {
            self.viewport_width / self.viewport_height
        } else {
            1.0
        }
    }
}

/// The core contract every game must fulfill.
pub trait Game {
    /// Return engine configuration. Called once before init.
    fn config(&self) -> GameConfig {
        GameConfig::default()
    }

    /// Build the scene. Called once.
    fn init(&mut self, ctx: &mut EngineContext);

    /// Per-frame tick. Input has already been fed to the orbit controls;
    /// tweens, transform propagation and drawing run after this returns.
    fn update(&mut self, ctx: &mut EngineContext, input: &InputQueue);
}

/// Mutable access to engine state, passed to Game::init and Game::update.
pub struct EngineContext {
    pub scene: Scene,
    pub graph: TransformGraph,
    pub camera: PerspectiveCamera,
    pub controls: OrbitControls,
    pub lights: LightState,
    pub tweens: TweenState,
    pub textures: TextureRegistry,
    pub events: Vec<GameEvent>,
    next_id: u32,
}

impl EngineContext {
    pub fn new() -> Self {
        Self::from_config(&GameConfig::default())
    }

    /// Create a context with camera and capacities taken from `config`.
    pub fn from_config(config: &GameConfig) -> Self {
        Self {
            scene: Scene::new(),
            graph: TransformGraph::new(),
            camera: PerspectiveCamera::new(config.fov_degrees, config.aspect(), config.near, config.far),
            controls: OrbitControls::new(config.viewport_height),
            lights: LightState::with_capacity(config.max_lights),
            tweens: TweenState::new(),
            textures: TextureRegistry::new(),
            events: Vec::with_capacity(config.max_events),
            next_id: 1,
        }
    }

    /// Generate the next unique node ID.
    pub fn next_id(&mut self) -> NodeId {
        let id = NodeId(self.next_id);
        self.next_id += 1;
        id
    }

    /// Add a node to the scene with its local transform, under `parent`
    /// or as a root.
    pub fn spawn(&mut self, node: Node, local: LocalTransform, parent: Option<NodeId>) -> NodeId {
        let id = node.id;
        self.scene.spawn(node);
        self.graph.register_with(id, local);
        if parent.is_some() {
            self.graph.set_parent(id, parent);
        }
        id
    }

    /// Spawn a mesh-less pivot at `position`.
    pub fn spawn_pivot(&mut self, tag: &str, position: Vec3, parent: Option<NodeId>) -> NodeId {
        let id = self.next_id();
        let local = LocalTransform::new().with_translation(position);
        self.spawn(Node::new(id).with_tag(tag), local, parent)
    }

    /// Emit a game event to be forwarded to the host.
    pub fn emit_event(&mut self, event: GameEvent) {
        self.events.push(event);
    }

    /// Clear per-frame transient data.
    pub fn clear_frame_data(&mut self) {
        self.events.clear();
    }
}

impl Default for EngineContext {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::mesh::{Geometry, Material, MeshComponent};
    use crate::api::types::TextureId;

    #[test]
    fn default_config_matches_browser_camera() {
        let config = GameConfig::default();
        assert_eq!(config.fov_degrees, 75.0);
        assert_eq!(config.near, 0.1);
        assert_eq!(config.far, 1000.0);
        assert!((config.aspect() - 16.0 / 9.0).abs() < 1e-6);
    }

    #[test]
    fn ids_are_unique_and_start_at_one() {
        let mut ctx = EngineContext::new();
        assert_eq!(ctx.next_id(), NodeId(1));
        assert_eq!(ctx.next_id(), NodeId(2));
    }

    #[test]
    fn spawn_under_parent_propagates_world() {
        let mut ctx = EngineContext::new();
        let pivot = ctx.spawn_pivot("pivot", Vec3::ZERO, None);
        let id = ctx.next_id();
        let mesh = MeshComponent::new(Geometry::sphere(6.0, 50), Material::standard(TextureId(0)));
        ctx.spawn(
            Node::new(id).with_mesh(mesh),
            LocalTransform::new().with_translation(Vec3::new(62.0, 0.0, 0.0)),
            Some(pivot),
        );

        assert_eq!(ctx.graph.get_parent(id), Some(pivot));
        assert_eq!(ctx.graph.roots(), &[pivot]);
        ctx.graph.propagate(&mut ctx.scene);
        let world = ctx.scene.get(id).unwrap().world_position();
        assert!((world - Vec3::new(62.0, 0.0, 0.0)).length() < 1e-4);
    }

    #[test]
    fn clear_frame_data_drops_events() {
        let mut ctx = EngineContext::new();
        ctx.emit_event(GameEvent::new(1.0, 0.0, 0.0, 0.0));
        assert_eq!(ctx.events.len(), 1);
        ctx.clear_frame_data();
        assert!(ctx.events.is_empty());
    }
}
