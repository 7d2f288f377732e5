use bytemuck::{Pod, Zeroable};

/// Per-mesh render data written to the shared buffer for the host renderer.
/// Must match the host protocol: 28 floats = 112 bytes stride.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Pod, Zeroable)]
pub struct RenderInstance {
    /// World matrix, column-major.
    pub model: [f32; 16],
    /// 0 = sphere, 1 = ring.
    pub geometry: f32,
    /// Sphere radius, or ring inner radius.
    pub param_a: f32,
    /// Ring outer radius (unused for spheres).
    pub param_b: f32,
    /// Tessellation segments.
    pub segments: f32,
    /// Texture id, or -1 for none.
    pub texture: f32,
    /// Material flags: bit 0 double-sided, bit 1 lit.
    pub flags: f32,
    pub _pad: [f32; 2],
    /// Base color RGBA.
    pub color: [f32; 4],
}

impl RenderInstance {
    pub const FLOATS: usize = 28;
    pub const STRIDE_BYTES: usize = Self::FLOATS * 4;
}

/// All mesh instances for one frame.
pub struct RenderBuffer {
    pub instances: Vec<RenderInstance>,
}

impl RenderBuffer {
    pub fn new() -> Self {
        Self::with_capacity(64)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            instances: Vec::with_capacity(capacity),
        }
    }

    pub fn clear(&mut self) {
        self.instances.clear();
    }

    pub fn push(&mut self, instance: RenderInstance) {
        self.instances.push(instance);
    }

    pub fn instance_count(&self) -> u32 {
        self.instances.len() as u32
    }

    pub fn as_slice(&self) -> &[RenderInstance] {
        &self.instances
    }
}

impl Default for RenderBuffer {
    fn default() -> Self {
        Self::new()
    }
}
