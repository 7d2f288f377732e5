use std::f32::consts::FRAC_PI_2;

use glam::Vec3;
use orrery_engine::{
    Color, EngineContext, Geometry, LocalTransform, Material, MeshComponent, Node, NodeId,
};

use crate::bodies::{CelestialBody, GUIDE_WIDTH, RING_INNER_GAP, RING_SEGMENTS, SPHERE_SEGMENTS};

/// Nodes created for one body. All are attached to the scene on return.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlanetNodes {
    /// Mesh-less pivot at the origin; turning it revolves the body.
    pub orbit: NodeId,
    pub body: NodeId,
    pub ring: Option<NodeId>,
    /// Flat circle tracing the orbit, hung off the scene root.
    pub guide: NodeId,
}

/// Lies a ring flat in the XZ plane.
fn flat() -> Vec3 {
    Vec3::new(FRAC_PI_2, 0.0, 0.0)
}

pub fn create_planet(ctx: &mut EngineContext, desc: &CelestialBody) -> PlanetNodes {
    debug_assert!(desc.radius > 0.0, "{}: radius must be positive", desc.name);
    debug_assert!(desc.orbital_distance > 0.0, "{}: distance must be positive", desc.name);

    let offset = Vec3::new(desc.orbital_distance, 0.0, 0.0);
    let orbit = ctx.spawn_pivot(&format!("{}-orbit", desc.name), Vec3::ZERO, None);

    let surface = ctx.textures.register(desc.surface.name, desc.surface.path);
    let body = ctx.next_id();
    ctx.spawn(
        Node::new(body).with_tag(desc.name).with_mesh(MeshComponent::new(
            Geometry::sphere(desc.radius, SPHERE_SEGMENTS),
            Material::standard(surface),
        )),
        LocalTransform::new().with_translation(offset),
        Some(orbit),
    );

    let ring = desc.ring.map(|spec| {
        let texture = ctx.textures.register(spec.texture.name, spec.texture.path);
        let id = ctx.next_id();
        ctx.spawn(
            Node::new(id)
                .with_tag(format!("{}-ring", desc.name))
                .with_mesh(MeshComponent::new(
                    Geometry::ring(
                        desc.radius + RING_INNER_GAP,
                        desc.radius + spec.outer_radius,
                        RING_SEGMENTS,
                    ),
                    Material::standard(texture).double_sided(),
                )),
            LocalTransform::new().with_translation(offset).with_rotation(flat()),
            Some(orbit),
        )
    });

    let guide = ctx.next_id();
    ctx.spawn(
        Node::new(guide)
            .with_tag(format!("{}-guide", desc.name))
            .with_mesh(MeshComponent::new(
                Geometry::ring(desc.orbital_distance, desc.orbital_distance + GUIDE_WIDTH, RING_SEGMENTS),
                Material::unlit_color(Color::WHITE).double_sided(),
            )),
        LocalTransform::new().with_rotation(flat()),
        None,
    );

    PlanetNodes { orbit, body, ring, guide }
}
