use orrery_engine::bridge::protocol::*;
use orrery_engine::{FrameData, ProtocolLayout, Renderer};

/// Renderer that packs each frame into the flat f32 buffer the TypeScript
/// host reads through `get_buffer_ptr`.
pub struct BufferRenderer {
    layout: ProtocolLayout,
    buffer: Vec<f32>,
    frame_counter: u32,
    viewport: (u32, u32),
}

impl BufferRenderer {
    pub fn new(layout: ProtocolLayout) -> Self {
        let mut buffer = vec![0.0; layout.buffer_total_floats];
        buffer[HEADER_PROTOCOL_VERSION] = PROTOCOL_VERSION;
        buffer[HEADER_MAX_INSTANCES] = layout.max_instances as f32;
        buffer[HEADER_MAX_LIGHTS] = layout.max_lights as f32;
        buffer[HEADER_MAX_EVENTS] = layout.max_events as f32;
        Self {
            layout,
            buffer,
            frame_counter: 0,
            viewport: (0, 0),
        }
    }

    pub fn layout(&self) -> &ProtocolLayout {
        &self.layout
    }

    pub fn as_slice(&self) -> &[f32] {
        &self.buffer
    }

    pub fn as_ptr(&self) -> *const f32 {
        self.buffer.as_ptr()
    }

    pub fn frame_counter(&self) -> u32 {
        self.frame_counter
    }

    fn write_section(&mut self, offset: usize, floats: &[f32]) {
        self.buffer[offset..offset + floats.len()].copy_from_slice(floats);
    }
}

impl Renderer for BufferRenderer {
    fn backend(&self) -> &'static str {
        "shared-buffer"
    }

    fn draw(&mut self, frame: &FrameData) {
        self.frame_counter = self.frame_counter.wrapping_add(1);

        let instance_count = frame.instances.len().min(self.layout.max_instances);
        let light_count = frame.lighting.lights.len().min(self.layout.max_lights);
        let event_count = frame.events.len().min(self.layout.max_events);
        if instance_count < frame.instances.len() {
            log::warn!(
                "{} instances exceed buffer capacity {}",
                frame.instances.len(),
                self.layout.max_instances
            );
        }

        let header = &mut self.buffer[..HEADER_FLOATS];
        header[HEADER_FRAME_COUNTER] = self.frame_counter as f32;
        header[HEADER_INSTANCE_COUNT] = instance_count as f32;
        header[HEADER_LIGHT_COUNT] = light_count as f32;
        header[HEADER_EVENT_COUNT] = event_count as f32;
        let [r, g, b] = frame.lighting.ambient_color;
        header[HEADER_AMBIENT_R] = r;
        header[HEADER_AMBIENT_G] = g;
        header[HEADER_AMBIENT_B] = b;
        header[HEADER_AMBIENT_INTENSITY] = frame.lighting.ambient_intensity;
        header[HEADER_HAS_BACKGROUND] = if frame.background.is_some() { 1.0 } else { 0.0 };
        header[HEADER_VIEWPORT_WIDTH] = self.viewport.0 as f32;
        header[HEADER_VIEWPORT_HEIGHT] = self.viewport.1 as f32;

        let mut faces = [-1.0; BACKGROUND_FLOATS];
        if let Some(background) = frame.background {
            for (slot, face) in faces.iter_mut().zip(background.faces()) {
                *slot = face.0 as f32;
            }
        }
        self.write_section(self.layout.background_offset, &faces);

        self.write_section(
            self.layout.camera_offset,
            bytemuck::cast_slice(std::slice::from_ref(&frame.camera)),
        );
        self.write_section(
            self.layout.instance_data_offset,
            bytemuck::cast_slice(&frame.instances[..instance_count]),
        );
        self.write_section(
            self.layout.light_data_offset,
            bytemuck::cast_slice(&frame.lighting.lights[..light_count]),
        );
        self.write_section(
            self.layout.event_data_offset,
            bytemuck::cast_slice(&frame.events[..event_count]),
        );
    }

    fn resize(&mut self, width: u32, height: u32) {
        self.viewport = (width, height);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use orrery_engine::glam::Vec3;
    use orrery_engine::{
        Background, Color, GameEvent, LightState, LightingFrame, PerspectiveCamera, PointLight,
        RenderInstance, TextureId,
    };

    fn frame_parts() -> (Vec<RenderInstance>, LightState, Background, Vec<GameEvent>) {
        let mut instance = RenderInstance::default();
        instance.texture = 4.0;
        let mut lights = LightState::new();
        lights.add(PointLight::new(Vec3::ZERO, Color::WHITE, 2.5, 400.0));
        (
            vec![instance; 3],
            lights,
            Background::uniform_cube(TextureId(0)),
            vec![GameEvent::new(2.0, 1.0, 0.0, 0.0)],
        )
    }

    #[test]
    fn header_carries_capacities_before_first_frame() {
        let renderer = BufferRenderer::new(ProtocolLayout::new(8, 2, 4));
        let buf = renderer.as_slice();
        assert_eq!(buf[HEADER_PROTOCOL_VERSION], PROTOCOL_VERSION);
        assert_eq!(buf[HEADER_MAX_INSTANCES], 8.0);
        assert_eq!(buf[HEADER_MAX_LIGHTS], 2.0);
        assert_eq!(buf[HEADER_MAX_EVENTS], 4.0);
        assert_eq!(buf.len(), renderer.layout().buffer_total_floats);
    }

    #[test]
    fn draw_packs_every_section() {
        let (instances, lights, background, events) = frame_parts();
        let camera = PerspectiveCamera::default();
        let mut renderer = BufferRenderer::new(ProtocolLayout::new(8, 2, 4));
        renderer.resize(800, 600);
        renderer.draw(&FrameData {
            instances: &instances,
            camera: camera.uniform(),
            lighting: LightingFrame::from_state(&lights),
            background: Some(&background),
            events: &events,
        });

        let layout = renderer.layout().clone();
        let buf = renderer.as_slice();
        assert_eq!(buf[HEADER_FRAME_COUNTER], 1.0);
        assert_eq!(buf[HEADER_INSTANCE_COUNT], 3.0);
        assert_eq!(buf[HEADER_LIGHT_COUNT], 1.0);
        assert_eq!(buf[HEADER_EVENT_COUNT], 1.0);
        assert_eq!(buf[HEADER_HAS_BACKGROUND], 1.0);
        assert_eq!(buf[HEADER_VIEWPORT_WIDTH], 800.0);
        assert_eq!(&buf[layout.background_offset..layout.background_offset + 6], &[0.0; 6]);
        // texture field of the second instance
        assert_eq!(buf[layout.instance_data_offset + INSTANCE_FLOATS + 20], 4.0);
        assert_eq!(buf[layout.light_data_offset + 6], 2.5);
        assert_eq!(buf[layout.event_data_offset], 2.0);
    }

    #[test]
    fn overflow_is_truncated_to_capacity() {
        let (instances, lights, _, events) = frame_parts();
        let mut renderer = BufferRenderer::new(ProtocolLayout::new(2, 0, 4));
        renderer.draw(&FrameData {
            instances: &instances,
            camera: PerspectiveCamera::default().uniform(),
            lighting: LightingFrame::from_state(&lights),
            background: None,
            events: &events,
        });
        let buf = renderer.as_slice();
        assert_eq!(buf[HEADER_INSTANCE_COUNT], 2.0);
        assert_eq!(buf[HEADER_LIGHT_COUNT], 0.0);
        assert_eq!(buf[HEADER_HAS_BACKGROUND], 0.0);
        assert_eq!(buf[renderer.layout().background_offset], -1.0);
    }
}
