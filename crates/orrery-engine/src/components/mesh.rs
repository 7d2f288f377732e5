use crate::api::types::TextureId;

/// Linear RGB color.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Color {
    pub const WHITE: Color = Color { r: 1.0, g: 1.0, b: 1.0 };

    pub const fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }

    /// Build from a packed `0xRRGGBB` value.
    pub fn from_hex(hex: u32) -> Self {
        let channel = |shift: u32| ((hex >> shift) & 0xFF) as f32 / 255.0;
        Self {
            r: channel(16),
            g: channel(8),
            b: channel(0),
        }
    }

    pub fn to_array(self) -> [f32; 3] {
        [self.r, self.g, self.b]
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::WHITE
    }
}

/// Geometry primitive. Tessellation happens in the host renderer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Geometry {
    /// UV sphere centered on the node origin.
    Sphere { radius: f32, segments: u32 },
    /// Flat annulus in the node's local XY plane.
    Ring { inner: f32, outer: f32, segments: u32 },
}

impl Geometry {
    pub fn sphere(radius: f32, segments: u32) -> Self {
        Geometry::Sphere { radius, segments }
    }

    pub fn ring(inner: f32, outer: f32, segments: u32) -> Self {
        Geometry::Ring { inner, outer, segments }
    }

    /// Wire code for the geometry kind.
    pub fn kind_code(&self) -> f32 {
        match self {
            Geometry::Sphere { .. } => 0.0,
            Geometry::Ring { .. } => 1.0,
        }
    }
}

/// How a surface responds to scene lighting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Shading {
    /// Ignores lights (emissive look, used for the sun and guides).
    Unlit,
    /// Lit by ambient and point lights.
    #[default]
    Standard,
}

/// Which faces get rasterized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Side {
    #[default]
    Front,
    Double,
}

/// Surface description bound to a mesh.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Material {
    pub texture: Option<TextureId>,
    pub color: Color,
    pub shading: Shading,
    pub side: Side,
}

impl Default for Material {
    fn default() -> Self {
        Self {
            texture: None,
            color: Color::WHITE,
            shading: Shading::Standard,
            side: Side::Front,
        }
    }
}

impl Material {
    /// Lit material sampling `texture`.
    pub fn standard(texture: TextureId) -> Self {
        Self {
            texture: Some(texture),
            ..Default::default()
        }
    }

    /// Unlit material sampling `texture`.
    pub fn unlit(texture: TextureId) -> Self {
        Self {
            texture: Some(texture),
            shading: Shading::Unlit,
            ..Default::default()
        }
    }

    /// Unlit flat color.
    pub fn unlit_color(color: Color) -> Self {
        Self {
            color,
            shading: Shading::Unlit,
            ..Default::default()
        }
    }

    pub fn double_sided(mut self) -> Self {
        self.side = Side::Double;
        self
    }

    /// Bit flags for the wire format: bit 0 double-sided, bit 1 lit.
    pub fn flags(&self) -> u32 {
        let mut flags = 0;
        if self.side == Side::Double {
            flags |= 1;
        }
        if self.shading == Shading::Standard {
            flags |= 2;
        }
        flags
    }
}

/// A renderable mesh: geometry plus material.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MeshComponent {
    pub geometry: Geometry,
    pub material: Material,
}

impl MeshComponent {
    pub fn new(geometry: Geometry, material: Material) -> Self {
        Self { geometry, material }
    }
}
