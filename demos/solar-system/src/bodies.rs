//! Body table — sizes, distances and rates for the sun and nine bodies.
//!
//! Values are cosmetic, not astronomical: radii and distances are scene
//! units, rates are radians per frame. Angles are derived from the frame
//! count in `f64`, never accumulated.

/// A texture known by name (the manifest key) with its default path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextureAsset {
    pub name: &'static str,
    pub path: &'static str,
}

/// A ring around a body: annulus from `radius + RING_INNER_GAP` to `radius + outer_radius`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RingSpec {
    pub texture: TextureAsset,
    pub outer_radius: f32,
}

/// Static description of one orbiting body.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CelestialBody {
    pub name: &'static str,
    pub radius: f32,
    pub orbital_distance: f32,
    /// Rotation about the body's own Y axis per frame.
    pub spin_rate: f64,
    /// Revolution of the orbit pivot per frame.
    pub orbit_rate: f64,
    pub surface: TextureAsset,
    pub ring: Option<RingSpec>,
}

// ── Geometry ─────────────────────────────────────────────────────────

pub const SPHERE_SEGMENTS: u32 = 50;
pub const RING_SEGMENTS: u32 = 50;
/// Gap between a body's surface and the inner edge of its ring.
pub const RING_INNER_GAP: f32 = 3.0;
/// Width of the orbit guide annulus.
pub const GUIDE_WIDTH: f32 = 0.2;

// ── Sun and lights ───────────────────────────────────────────────────

pub const SUN_RADIUS: f32 = 20.0;
pub const SUN_SPIN: f64 = 0.004;
pub const AMBIENT_COLOR: u32 = 0x333333;
pub const AMBIENT_INTENSITY: f32 = 1.0;
pub const POINT_LIGHT_COLOR: u32 = 0xffffff;
pub const POINT_LIGHT_INTENSITY: f32 = 2.5;
pub const POINT_LIGHT_DISTANCE: f32 = 400.0;

// ── Textures ─────────────────────────────────────────────────────────

const fn texture(name: &'static str, path: &'static str) -> TextureAsset {
    TextureAsset { name, path }
}

pub const STARS: TextureAsset = texture("stars", "img/stars.jpg");
pub const SUN: TextureAsset = texture("sun", "img/sun.jpg");
pub const SATURN_RING: TextureAsset = texture("saturn_ring", "img/saturn ring.png");
pub const URANUS_RING: TextureAsset = texture("uranus_ring", "img/uranus ring.png");

// ── Bodies ───────────────────────────────────────────────────────────

pub const BODY_COUNT: usize = 9;

pub const SATURN: usize = 5;
pub const URANUS: usize = 6;

pub const BODIES: [CelestialBody; BODY_COUNT] = [
    body("mercury", 3.2, 28.0, 0.004, 0.04, texture("mercury", "img/mercury.jpg"), None),
    body("venus", 5.8, 44.0, 0.002, 0.015, texture("venus", "img/venus.jpg"), None),
    body("earth", 6.0, 62.0, 0.02, 0.01, texture("earth", "img/earth.jpg"), None),
    body("mars", 4.0, 78.0, 0.018, 0.008, texture("mars", "img/mars.jpg"), None),
    body("jupiter", 12.0, 100.0, 0.04, 0.002, texture("jupiter", "img/jupiter.jpg"), None),
    body(
        "saturn",
        10.0,
        138.0,
        0.038,
        0.0009,
        texture("saturn", "img/saturn.jpg"),
        Some(RingSpec { texture: SATURN_RING, outer_radius: 10.0 }),
    ),
    body(
        "uranus",
        7.0,
        176.0,
        0.03,
        0.0004,
        texture("uranus", "img/uranus.jpg"),
        Some(RingSpec { texture: URANUS_RING, outer_radius: 7.0 }),
    ),
    body("neptune", 7.0, 200.0, 0.032, 0.0001, texture("neptune", "img/neptune.jpg"), None),
    body("pluto", 2.8, 216.0, 0.008, 0.00007, texture("pluto", "img/pluto.jpg"), None),
];

const fn body(
    name: &'static str,
    radius: f32,
    orbital_distance: f32,
    spin_rate: f64,
    orbit_rate: f64,
    surface: TextureAsset,
    ring: Option<RingSpec>,
) -> CelestialBody {
    CelestialBody { name, radius, orbital_distance, spin_rate, orbit_rate, surface, ring }
}

/// Every texture the scene uses, in the order the host should load them.
pub fn all_textures() -> impl Iterator<Item = TextureAsset> {
    [STARS, SUN]
        .into_iter()
        .chain(BODIES.iter().map(|b| b.surface))
        .chain(BODIES.iter().filter_map(|b| b.ring.map(|r| r.texture)))
}
