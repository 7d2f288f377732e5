use glam::Vec3;
use orrery_engine::{
    AmbientLight, Background, Color, EngineContext, Geometry, LocalTransform, Material,
    MeshComponent, Node, NodeId, PointLight,
};

use crate::bodies::{self, BODIES, BODY_COUNT};
use crate::planet::{create_planet, PlanetNodes};

/// Handles to everything the frame loop animates.
#[derive(Debug, Clone)]
pub struct SolarScene {
    pub sun: NodeId,
    pub planets: [PlanetNodes; BODY_COUNT],
}

/// Build the whole scene: textures, star-field background, lights, sun and
/// the nine bodies. Runs once.
pub fn assemble(ctx: &mut EngineContext) -> SolarScene {
    for asset in bodies::all_textures() {
        ctx.textures.register(asset.name, asset.path);
    }

    let stars = ctx.textures.register(bodies::STARS.name, bodies::STARS.path);
    ctx.scene.set_background(Background::uniform_cube(stars));

    ctx.lights.set_ambient(AmbientLight::new(
        Color::from_hex(bodies::AMBIENT_COLOR),
        bodies::AMBIENT_INTENSITY,
    ));
    ctx.lights.add(PointLight::new(
        Vec3::ZERO,
        Color::from_hex(bodies::POINT_LIGHT_COLOR),
        bodies::POINT_LIGHT_INTENSITY,
        bodies::POINT_LIGHT_DISTANCE,
    ));

    let sun_texture = ctx.textures.register(bodies::SUN.name, bodies::SUN.path);
    let sun = ctx.next_id();
    ctx.spawn(
        Node::new(sun).with_tag("sun").with_mesh(MeshComponent::new(
            Geometry::sphere(bodies::SUN_RADIUS, bodies::SPHERE_SEGMENTS),
            Material::unlit(sun_texture),
        )),
        LocalTransform::new(),
        None,
    );

    let planets = std::array::from_fn(|i| create_planet(ctx, &BODIES[i]));

    SolarScene { sun, planets }
}
