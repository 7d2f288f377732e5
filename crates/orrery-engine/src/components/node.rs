use glam::{Mat4, Vec3};
use crate::api::types::NodeId;
use crate::components::mesh::MeshComponent;

/// A node in the scene. Local transforms and parenting live in the
/// `TransformGraph`; the node carries the propagated world matrix.
#[derive(Debug, Clone)]
pub struct Node {
    /// Unique identifier.
    pub id: NodeId,
    /// Human-readable name.
    pub tag: String,
    /// Inactive nodes are skipped by the render buffer builder.
    pub active: bool,
    /// World matrix, written by `TransformGraph::propagate`.
    pub world: Mat4,
    /// Mesh component (optional — pivots have none and are invisible).
    pub mesh: Option<MeshComponent>,
}

impl Node {
    pub fn new(id: NodeId) -> Self {
        Self {
            id,
            tag: String::new(),
            active: true,
            world: Mat4::IDENTITY,
            mesh: None,
        }
    }

    // -- Builder pattern --

    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tag = tag.into();
        self
    }

    pub fn with_mesh(mut self, mesh: MeshComponent) -> Self {
        self.mesh = Some(mesh);
        self
    }

    /// World-space position taken from the world matrix.
    pub fn world_position(&self) -> Vec3 {
        self.world.w_axis.truncate()
    }
}
