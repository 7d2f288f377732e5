/// SharedArrayBuffer layout.
/// Must stay in sync with TypeScript `protocol.ts`.
///
/// Layout (all values in f32 / 4 bytes):
/// ```text
/// [Header: 16 floats]
/// [Background: 6 floats]           cube map face texture ids, -1 if none
/// [Camera: 36 floats]              view[16], projection[16], eye[4]
/// [Instances: max_instances × 28 floats]
/// [Lights: max_lights × 8 floats]
/// [Events: max_events × 4 floats]
/// ```
///
/// Capacities are written once into the header at init.
/// TypeScript reads them from the header to compute offsets dynamically.

use crate::api::game::GameConfig;

/// Number of floats in the header section.
pub const HEADER_FLOATS: usize = 16;

/// Header field indices.
pub const HEADER_PROTOCOL_VERSION: usize = 0;
pub const HEADER_FRAME_COUNTER: usize = 1;
pub const HEADER_MAX_INSTANCES: usize = 2;
pub const HEADER_INSTANCE_COUNT: usize = 3;
pub const HEADER_MAX_LIGHTS: usize = 4;
pub const HEADER_LIGHT_COUNT: usize = 5;
pub const HEADER_MAX_EVENTS: usize = 6;
pub const HEADER_EVENT_COUNT: usize = 7;
pub const HEADER_AMBIENT_R: usize = 8;
pub const HEADER_AMBIENT_G: usize = 9;
pub const HEADER_AMBIENT_B: usize = 10;
pub const HEADER_AMBIENT_INTENSITY: usize = 11;
pub const HEADER_HAS_BACKGROUND: usize = 12;
pub const HEADER_VIEWPORT_WIDTH: usize = 13;
pub const HEADER_VIEWPORT_HEIGHT: usize = 14;
// 15: reserved

/// Protocol version written into the header.
pub const PROTOCOL_VERSION: f32 = 1.0;

/// Floats for the background section: six cube map faces.
pub const BACKGROUND_FLOATS: usize = 6;

/// Floats for the camera section: view, projection, eye.
pub const CAMERA_FLOATS: usize = 36;

/// Floats per render instance (wire format — never changes).
pub const INSTANCE_FLOATS: usize = 28;

/// Floats per point light: x, y, z, r, g, b, intensity, distance.
pub const LIGHT_FLOATS: usize = 8;

/// Floats per game event: kind, a, b, c (wire format — never changes).
pub const EVENT_FLOATS: usize = 4;

/// Default light capacity.
pub const DEFAULT_MAX_LIGHTS: usize = 8;

/// Runtime-computed buffer layout.
#[derive(Debug, Clone, PartialEq)]
pub struct ProtocolLayout {
    /// Maximum render instances.
    pub max_instances: usize,
    /// Maximum point lights.
    pub max_lights: usize,
    /// Maximum game events per frame.
    pub max_events: usize,

    /// Size of instance data section in floats.
    pub instance_data_floats: usize,
    /// Size of light data section in floats.
    pub light_data_floats: usize,
    /// Size of event data section in floats.
    pub event_data_floats: usize,

    /// Offset (in floats) where the background face ids begin.
    pub background_offset: usize,
    /// Offset (in floats) where camera matrices begin.
    pub camera_offset: usize,
    /// Offset (in floats) where instance data begins.
    pub instance_data_offset: usize,
    /// Offset (in floats) where light data begins.
    pub light_data_offset: usize,
    /// Offset (in floats) where event data begins.
    pub event_data_offset: usize,

    /// Total buffer size in floats.
    pub buffer_total_floats: usize,
    /// Total buffer size in bytes.
    pub buffer_total_bytes: usize,
}

impl ProtocolLayout {
    /// Compute layout from raw capacity values.
    pub fn new(max_instances: usize, max_lights: usize, max_events: usize) -> Self {
        let instance_data_floats = max_instances * INSTANCE_FLOATS;
        let light_data_floats = max_lights * LIGHT_FLOATS;
        let event_data_floats = max_events * EVENT_FLOATS;

        let background_offset = HEADER_FLOATS;
        let camera_offset = background_offset + BACKGROUND_FLOATS;
        let instance_data_offset = camera_offset + CAMERA_FLOATS;
        let light_data_offset = instance_data_offset + instance_data_floats;
        let event_data_offset = light_data_offset + light_data_floats;

        let buffer_total_floats = event_data_offset + event_data_floats;
        let buffer_total_bytes = buffer_total_floats * 4;

        Self {
            max_instances,
            max_lights,
            max_events,
            instance_data_floats,
            light_data_floats,
            event_data_floats,
            background_offset,
            camera_offset,
            instance_data_offset,
            light_data_offset,
            event_data_offset,
            buffer_total_floats,
            buffer_total_bytes,
        }
    }

    /// Compute layout from a GameConfig.
    pub fn from_config(config: &GameConfig) -> Self {
        Self::new(config.max_instances, config.max_lights, config.max_events)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_default_config_matches_expected_sizes() {
        let config = GameConfig::default();
        let layout = ProtocolLayout::from_config(&config);

        assert_eq!(layout.max_instances, config.max_instances);
        assert_eq!(layout.max_lights, DEFAULT_MAX_LIGHTS);
        assert_eq!(layout.instance_data_floats, config.max_instances * 28);
        assert_eq!(layout.light_data_floats, DEFAULT_MAX_LIGHTS * 8);
        assert_eq!(layout.event_data_floats, config.max_events * 4);
        assert_eq!(layout.buffer_total_bytes, layout.buffer_total_floats * 4);
    }

    #[test]
    fn custom_capacities_compute_correctly() {
        let layout = ProtocolLayout::new(32, 2, 16);
        let expected_total = HEADER_FLOATS + 6 + 36 + 32 * 28 + 2 * 8 + 16 * 4;
        assert_eq!(layout.buffer_total_floats, expected_total);
        assert_eq!(layout.buffer_total_bytes, expected_total * 4);
    }

    #[test]
    fn offsets_are_contiguous() {
        let layout = ProtocolLayout::new(100, 4, 20);

        assert_eq!(layout.background_offset, HEADER_FLOATS);
        assert_eq!(layout.camera_offset, layout.background_offset + BACKGROUND_FLOATS);
        assert_eq!(layout.instance_data_offset, layout.camera_offset + CAMERA_FLOATS);
        assert_eq!(layout.light_data_offset, layout.instance_data_offset + layout.instance_data_floats);
        assert_eq!(layout.event_data_offset, layout.light_data_offset + layout.light_data_floats);
        assert_eq!(layout.buffer_total_floats, layout.event_data_offset + layout.event_data_floats);
    }

    #[test]
    fn fixed_sections_precede_instances() {
        let layout = ProtocolLayout::new(0, 0, 0);
        assert_eq!(layout.instance_data_offset, 16 + 6 + 36);
        assert_eq!(layout.buffer_total_floats, 58);
    }
}
