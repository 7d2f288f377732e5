use orrery_engine::{
    build_render_buffer, AssetManifest, EngineContext, FrameClock, FrameData, Game, GameConfig,
    GameEvent, InputEvent, InputQueue, LightingFrame, ProtocolLayout, RenderBuffer, Renderer,
};

/// Generic game runner that wires up the engine loop.
///
/// Each concrete game creates a `thread_local!` GameRunner and exports free
/// functions via `#[wasm_bindgen]`, because wasm-bindgen cannot export
/// generic structs directly.
pub struct GameRunner<G: Game, R: Renderer> {
    game: G,
    ctx: EngineContext,
    input: InputQueue,
    render_buffer: RenderBuffer,
    renderer: R,
    clock: FrameClock,
    config: GameConfig,
    layout: ProtocolLayout,
    initialized: bool,
}

impl<G: Game, R: Renderer> GameRunner<G, R> {
    /// Build a runner. `make_renderer` receives the buffer layout derived
    /// from the game's config.
    pub fn new(game: G, make_renderer: impl FnOnce(&ProtocolLayout) -> R) -> Self {
        let config = game.config();
        let layout = ProtocolLayout::from_config(&config);
        let renderer = make_renderer(&layout);

        Self {
            ctx: EngineContext::from_config(&config),
            input: InputQueue::new(),
            render_buffer: RenderBuffer::with_capacity(config.max_instances),
            renderer,
            clock: FrameClock::new(config.max_frame_dt),
            layout,
            config,
            game,
            initialized: false,
        }
    }

    /// Initialize the game. Call once after construction.
    pub fn init(&mut self) {
        if self.initialized {
            log::warn!("init called twice; ignoring");
            return;
        }
        self.renderer.resize(
            self.config.viewport_width as u32,
            self.config.viewport_height as u32,
        );
        self.game.init(&mut self.ctx);
        self.initialized = true;
        log::info!(
            "scene ready: {} nodes, {} textures, {} renderer",
            self.ctx.scene.len(),
            self.ctx.textures.len(),
            self.renderer.backend()
        );
    }

    /// Push an input event into the queue.
    pub fn push_input(&mut self, event: InputEvent) {
        self.input.push(event);
    }

    /// Run one frame from a host timestamp in milliseconds.
    pub fn frame(&mut self, timestamp_ms: f64) {
        let dt = self.clock.advance(timestamp_ms);
        self.tick(dt);
    }

    /// Run one frame tick with an explicit delta in seconds.
    pub fn tick(&mut self, dt: f32) {
        if !self.initialized {
            return;
        }

        self.ctx.clear_frame_data();

        for event in self.input.iter() {
            self.ctx.controls.handle_event(event);
        }

        self.game.update(&mut self.ctx, &self.input);
        self.input.drain();

        let ctx = &mut self.ctx;
        ctx.tweens.tick(dt, &mut ctx.camera, &mut ctx.controls);
        for kind in ctx.tweens.drain_completed() {
            ctx.events.push(GameEvent::new(kind as f32, 0.0, 0.0, 0.0));
        }

        ctx.controls.update(&mut ctx.camera);
        ctx.graph.propagate(&mut ctx.scene);

        build_render_buffer(ctx.scene.iter(), &mut self.render_buffer);

        self.renderer.draw(&FrameData {
            instances: self.render_buffer.as_slice(),
            camera: ctx.camera.uniform(),
            lighting: LightingFrame::from_state(&ctx.lights),
            background: ctx.scene.background(),
            events: &ctx.events,
        });
    }

    /// Viewport changed size (CSS pixels).
    pub fn resize(&mut self, width: f32, height: f32) {
        if width <= 0.0 || height <= 0.0 {
            return;
        }
        self.config.viewport_width = width;
        self.config.viewport_height = height;
        self.ctx.camera.resize(width, height);
        self.ctx.controls.set_viewport_height(height);
        self.renderer.resize(width as u32, height as u32);
    }

    /// Apply a JSON asset manifest. Malformed JSON is logged and ignored.
    pub fn load_manifest(&mut self, json: &str) {
        match AssetManifest::from_json(json) {
            Ok(manifest) => {
                let applied = self.ctx.textures.apply_manifest(&manifest);
                log::info!("manifest: {applied} texture paths overridden");
            }
            Err(err) => log::error!("manifest rejected: {err}"),
        }
    }

    // ---- Accessors ----

    pub fn ctx(&self) -> &EngineContext {
        &self.ctx
    }

    pub fn game(&self) -> &G {
        &self.game
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    pub fn texture_count(&self) -> u32 {
        self.ctx.textures.len() as u32
    }

    pub fn texture_path(&self, index: u32) -> Option<String> {
        self.ctx
            .textures
            .path(orrery_engine::TextureId(index))
            .map(str::to_string)
    }

    // ---- Capacity accessors (read by TypeScript via wasm_bindgen exports) ----

    pub fn max_instances(&self) -> u32 {
        self.layout.max_instances as u32
    }

    pub fn max_lights(&self) -> u32 {
        self.layout.max_lights as u32
    }

    pub fn max_events(&self) -> u32 {
        self.layout.max_events as u32
    }

    pub fn buffer_total_floats(&self) -> u32 {
        self.layout.buffer_total_floats as u32
    }
}
