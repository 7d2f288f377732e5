// extensions/transform.rs
//
// Transform hierarchy — parent/child relationships by NodeId with 3D local
// transforms. Propagation writes world matrices into the Scene.
//
// Usage:
//   let mut graph = TransformGraph::new();
//   graph.register_with(pivot, LocalTransform::new());
//   graph.register_with(body, LocalTransform::new().with_translation(Vec3::X * 62.0));
//   graph.set_parent(body, Some(pivot));
//   graph.propagate(&mut scene);

use std::collections::HashMap;
use std::f32::consts::TAU;
use glam::{EulerRot, Mat4, Quat, Vec3};
use crate::api::types::NodeId;
use crate::core::scene::Scene;

/// Wrap an angle into `[0, 2π)`.
#[inline]
pub fn wrap_angle(angle: f32) -> f32 {
    let wrapped = angle.rem_euclid(TAU);
    // rem_euclid can round up to exactly TAU for tiny negative inputs
    if wrapped >= TAU { 0.0 } else { wrapped }
}

/// Local transform relative to the parent (or world for roots).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LocalTransform {
    pub translation: Vec3,
    /// Euler angles in radians, applied in XYZ order.
    pub rotation: Vec3,
    pub scale: Vec3,
}

impl Default for LocalTransform {
    fn default() -> Self {
        Self {
            translation: Vec3::ZERO,
            rotation: Vec3::ZERO,
            scale: Vec3::ONE,
        }
    }
}

impl LocalTransform {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_translation(mut self, translation: Vec3) -> Self {
        self.translation = translation;
        self
    }

    pub fn with_rotation(mut self, rotation: Vec3) -> Self {
        self.rotation = rotation;
        self
    }

    pub fn with_scale(mut self, scale: Vec3) -> Self {
        self.scale = scale;
        self
    }

    /// Set the angle about the local vertical axis, wrapped into `[0, 2π)`.
    pub fn set_yaw(&mut self, angle: f32) {
        self.rotation.y = wrap_angle(angle);
    }

    pub fn quat(&self) -> Quat {
        Quat::from_euler(EulerRot::XYZ, self.rotation.x, self.rotation.y, self.rotation.z)
    }

    pub fn matrix(&self) -> Mat4 {
        Mat4::from_scale_rotation_translation(self.scale, self.quat(), self.translation)
    }
}

#[derive(Debug, Clone, Default)]
struct TransformNode {
    parent: Option<NodeId>,
    children: Vec<NodeId>,
    local: LocalTransform,
}

/// Transform hierarchy graph.
///
/// Lives beside the Scene: the Scene stores what a node looks like, the
/// graph stores where it hangs.
#[derive(Debug, Default)]
pub struct TransformGraph {
    nodes: HashMap<NodeId, TransformNode>,
    /// Nodes with no parent, in registration order.
    roots: Vec<NodeId>,
    /// Set when hierarchy or a local transform changes, cleared after propagate.
    dirty: bool,
}

impl TransformGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a node as a root with the given local transform.
    pub fn register_with(&mut self, id: NodeId, local: LocalTransform) {
        let node = self.nodes.entry(id).or_default();
        node.local = local;
        if node.parent.is_none() && !self.roots.contains(&id) {
            self.roots.push(id);
        }
        self.dirty = true;
    }

    /// Set the parent of a node. Pass `None` to make it a root.
    pub fn set_parent(&mut self, child: NodeId, parent: Option<NodeId>) {
        self.nodes.entry(child).or_default();
        if let Some(p) = parent {
            self.nodes.entry(p).or_default();
            if !self.roots.contains(&p) && self.nodes[&p].parent.is_none() {
                self.roots.push(p);
            }
        }

        if let Some(old_parent) = self.nodes.get(&child).and_then(|n| n.parent) {
            if let Some(old_node) = self.nodes.get_mut(&old_parent) {
                old_node.children.retain(|&c| c != child);
            }
        }

        if let Some(node) = self.nodes.get_mut(&child) {
            node.parent = parent;
        }

        match parent {
            Some(p) => {
                if let Some(parent_node) = self.nodes.get_mut(&p) {
                    if !parent_node.children.contains(&child) {
                        parent_node.children.push(child);
                    }
                }
                self.roots.retain(|&r| r != child);
            }
            None => {
                if !self.roots.contains(&child) {
                    self.roots.push(child);
                }
            }
        }

        self.dirty = true;
    }

    pub fn get_local(&self, id: NodeId) -> Option<&LocalTransform> {
        self.nodes.get(&id).map(|n| &n.local)
    }

    /// Mutable local transform. Marks the graph dirty.
    pub fn get_local_mut(&mut self, id: NodeId) -> Option<&mut LocalTransform> {
        self.dirty = true;
        self.nodes.get_mut(&id).map(|n| &mut n.local)
    }

    pub fn get_parent(&self, id: NodeId) -> Option<NodeId> {
        self.nodes.get(&id).and_then(|n| n.parent)
    }

    pub fn get_children(&self, id: NodeId) -> Option<&[NodeId]> {
        self.nodes.get(&id).map(|n| n.children.as_slice())
    }

    pub fn roots(&self) -> &[NodeId] {
        &self.roots
    }

    /// Propagate local transforms from roots down, writing `Node::world`.
    pub fn propagate(&mut self, scene: &mut Scene) {
        if !self.dirty {
            return;
        }
        for &root in &self.roots {
            self.propagate_recursive(root, Mat4::IDENTITY, scene);
        }
        self.dirty = false;
    }

    fn propagate_recursive(&self, id: NodeId, parent_world: Mat4, scene: &mut Scene) {
        let Some(node) = self.nodes.get(&id) else { return };
        let world = parent_world * node.local.matrix();

        if let Some(scene_node) = scene.get_mut(id) {
            scene_node.world = world;
        }

        for &child in &node.children {
            self.propagate_recursive(child, world, scene);
        }
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    pub fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::FRAC_PI_2;
    use crate::components::node::Node;

    fn approx(a: Vec3, b: Vec3) -> bool {
        (a - b).length() < 1e-3
    }

    #[test]
    fn parent_child_relationship() {
        let mut graph = TransformGraph::new();
        let parent = NodeId(1);
        let child = NodeId(2);

        graph.register_with(parent, LocalTransform::new());
        graph.register_with(child, LocalTransform::new());
        graph.set_parent(child, Some(parent));

        assert_eq!(graph.get_parent(child), Some(parent));
        assert_eq!(graph.get_children(parent), Some([child].as_slice()));
        assert_eq!(graph.roots(), &[parent]);
    }

    #[test]
    fn pivot_rotation_carries_child_around() {
        let mut graph = TransformGraph::new();
        let mut scene = Scene::new();
        let pivot = NodeId(1);
        let body = NodeId(2);

        scene.spawn(Node::new(pivot));
        scene.spawn(Node::new(body));
        graph.register_with(pivot, LocalTransform::new());
        graph.register_with(body, LocalTransform::new().with_translation(Vec3::new(10.0, 0.0, 0.0)));
        graph.set_parent(body, Some(pivot));

        graph.propagate(&mut scene);
        assert!(approx(scene.get(body).unwrap().world_position(), Vec3::new(10.0, 0.0, 0.0)));

        // Quarter turn about +Y moves +X onto -Z
        graph.get_local_mut(pivot).unwrap().set_yaw(FRAC_PI_2);
        graph.propagate(&mut scene);
        let pos = scene.get(body).unwrap().world_position();
        assert!(approx(pos, Vec3::new(0.0, 0.0, -10.0)), "pos = {pos:?}");
    }

    #[test]
    fn child_spin_does_not_move_it() {
        let mut graph = TransformGraph::new();
        let mut scene = Scene::new();
        let pivot = NodeId(1);
        let body = NodeId(2);

        scene.spawn(Node::new(pivot));
        scene.spawn(Node::new(body));
        graph.register_with(pivot, LocalTransform::new());
        graph.register_with(body, LocalTransform::new().with_translation(Vec3::new(10.0, 0.0, 0.0)));
        graph.set_parent(body, Some(pivot));

        graph.get_local_mut(body).unwrap().set_yaw(1.0);
        graph.propagate(&mut scene);
        assert!(approx(scene.get(body).unwrap().world_position(), Vec3::new(10.0, 0.0, 0.0)));
    }

    #[test]
    fn propagate_clears_dirty() {
        let mut graph = TransformGraph::new();
        let mut scene = Scene::new();
        graph.register_with(NodeId(1), LocalTransform::new());
        assert!(graph.is_dirty());
        graph.propagate(&mut scene);
        assert!(!graph.is_dirty());
    }

    #[test]
    fn wrap_angle_range() {
        assert_eq!(wrap_angle(0.0), 0.0);
        assert!((wrap_angle(TAU + 0.5) - 0.5).abs() < 1e-5);
        assert!((wrap_angle(-0.5) - (TAU - 0.5)).abs() < 1e-5);
        assert!(wrap_angle(-1e-9) < TAU);
    }

    #[test]
    fn set_yaw_wraps() {
        let mut local = LocalTransform::new();
        local.set_yaw(TAU + 1.0);
        assert!((local.rotation.y - 1.0).abs() < 1e-5);
        local.set_yaw(TAU);
        assert_eq!(local.rotation.y, 0.0);
    }
}
