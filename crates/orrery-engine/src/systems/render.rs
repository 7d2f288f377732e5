use crate::api::types::TextureId;
use crate::components::mesh::Geometry;
use crate::components::node::Node;
use crate::renderer::instance::{RenderBuffer, RenderInstance};

/// Build the render buffer from scene nodes.
/// Skips inactive nodes and mesh-less pivots; order follows the scene.
pub fn build_render_buffer<'a>(nodes: impl Iterator<Item = &'a Node>, buffer: &mut RenderBuffer) {
    buffer.clear();

    for node in nodes {
        if !node.active {
            continue;
        }
        let Some(mesh) = &node.mesh else { continue };

        let (param_a, param_b, segments) = match mesh.geometry {
            Geometry::Sphere { radius, segments } => (radius, 0.0, segments),
            Geometry::Ring { inner, outer, segments } => (inner, outer, segments),
        };
        let material = &mesh.material;
        let [r, g, b] = material.color.to_array();

        buffer.push(RenderInstance {
            model: node.world.to_cols_array(),
            geometry: mesh.geometry.kind_code(),
            param_a,
            param_b,
            segments: segments as f32,
            texture: TextureId::encode(material.texture),
            flags: material.flags() as f32,
            _pad: [0.0; 2],
            color: [r, g, b, 1.0],
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::types::NodeId;
    use crate::components::mesh::{Color, Material, MeshComponent};
    use glam::{Mat4, Vec3};

    #[test]
    fn pivots_and_inactive_nodes_are_skipped() {
        let sphere = MeshComponent::new(Geometry::sphere(6.0, 50), Material::standard(TextureId(2)));
        let mut hidden = Node::new(NodeId(3)).with_mesh(sphere);
        hidden.active = false;
        let nodes = vec![
            Node::new(NodeId(1)),
            Node::new(NodeId(2)).with_mesh(sphere),
            hidden,
        ];

        let mut buf = RenderBuffer::new();
        build_render_buffer(nodes.iter(), &mut buf);
        assert_eq!(buf.instance_count(), 1);
        let inst = buf.instances[0];
        assert_eq!(inst.geometry, 0.0);
        assert_eq!(inst.param_a, 6.0);
        assert_eq!(inst.segments, 50.0);
        assert_eq!(inst.texture, 2.0);
        assert_eq!(inst.flags, 2.0);
    }

    #[test]
    fn ring_carries_both_radii_and_world_matrix() {
        let ring = MeshComponent::new(
            Geometry::ring(13.0, 20.0, 50),
            Material::unlit_color(Color::WHITE).double_sided(),
        );
        let mut node = Node::new(NodeId(1)).with_mesh(ring);
        node.world = Mat4::from_translation(Vec3::new(138.0, 0.0, 0.0));

        let mut buf = RenderBuffer::new();
        build_render_buffer(std::iter::once(&node), &mut buf);
        let inst = buf.instances[0];
        assert_eq!((inst.geometry, inst.param_a, inst.param_b), (1.0, 13.0, 20.0));
        assert_eq!(inst.texture, -1.0);
        assert_eq!(inst.flags, 1.0);
        assert_eq!(inst.model[12], 138.0);
    }
}
