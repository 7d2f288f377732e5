use crate::api::types::{NodeId, TextureId};
use crate::components::node::Node;

/// Scene background drawn behind all geometry.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Background {
    /// Cube map, faces ordered +X, -X, +Y, -Y, +Z, -Z.
    CubeMap([TextureId; 6]),
}

impl Background {
    /// Cube map using the same image on all six faces.
    pub fn uniform_cube(texture: TextureId) -> Self {
        Background::CubeMap([texture; 6])
    }

    pub fn faces(&self) -> &[TextureId; 6] {
        match self {
            Background::CubeMap(faces) => faces,
        }
    }
}

/// Simple node storage using a flat Vec.
/// Designed for small scenes (tens to hundreds of nodes).
pub struct Scene {
    nodes: Vec<Node>,
    background: Option<Background>,
}

impl Scene {
    pub fn new() -> Self {
        Self {
            nodes: Vec::with_capacity(64),
            background: None,
        }
    }

    /// Add a node to the scene.
    pub fn spawn(&mut self, node: Node) {
        self.nodes.push(node);
    }

    pub fn get(&self, id: NodeId) -> Option<&Node> {
        self.nodes.iter().find(|n| n.id == id)
    }

    pub fn get_mut(&mut self, id: NodeId) -> Option<&mut Node> {
        self.nodes.iter_mut().find(|n| n.id == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Node> {
        self.nodes.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Node> {
        self.nodes.iter_mut()
    }

    pub fn set_background(&mut self, background: Background) {
        self.background = Some(background);
    }

    pub fn background(&self) -> Option<&Background> {
        self.background.as_ref()
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

impl Default for Scene {
    fn default() -> Self {
        Self::new()
    }
}
