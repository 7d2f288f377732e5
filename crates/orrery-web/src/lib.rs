pub mod buffer;
pub mod runner;
pub mod scheduler;

pub use buffer::BufferRenderer;
pub use runner::GameRunner;
pub use scheduler::RafScheduler;

// Paths the export macro expands to.
pub use orrery_engine::core::frame_loop;
pub use orrery_engine::{InputEvent, LoopHandle};

/// Generate all `#[wasm_bindgen]` exports for a game.
///
/// Generates:
/// - `thread_local!` storage for the GameRunner and the running loop
/// - `with_runner()` helper function
/// - All wasm-bindgen exports (lifecycle, input handlers, data accessors)
///
/// # Usage
///
/// ```ignore
/// use wasm_bindgen::prelude::*;
///
/// mod game;
/// use game::MyGame;
///
/// orrery_web::export_game!(MyGame, "my-game");
/// ```
///
/// # Arguments
///
/// - `$game_type`: The game struct type that implements `orrery_engine::Game`
///   and has a `new()` constructor
/// - `$game_name`: A string literal used in log messages
#[macro_export]
macro_rules! export_game {
    ($game_type:ty, $game_name:literal) => {
        use std::cell::RefCell;

        thread_local! {
            static RUNNER: RefCell<Option<$crate::GameRunner<$game_type, $crate::BufferRenderer>>> =
                RefCell::new(None);
            static LOOP: RefCell<Option<$crate::LoopHandle>> = RefCell::new(None);
        }

        fn with_runner<R>(
            f: impl FnOnce(&mut $crate::GameRunner<$game_type, $crate::BufferRenderer>) -> R,
        ) -> Option<R> {
            RUNNER.with(|cell| match cell.borrow_mut().as_mut() {
                Some(runner) => Some(f(runner)),
                None => {
                    log::error!("{}: game_init() has not been called", $game_name);
                    None
                }
            })
        }

        #[wasm_bindgen]
        pub fn game_init() {
            console_error_panic_hook::set_once();
            let _ = console_log::init_with_level(log::Level::Info);

            let game = <$game_type>::new();
            let runner = $crate::GameRunner::new(game, |layout| {
                $crate::BufferRenderer::new(layout.clone())
            });

            RUNNER.with(|cell| {
                *cell.borrow_mut() = Some(runner);
            });

            with_runner(|r| r.init());
            log::info!("{}: initialized", $game_name);
        }

        // ---- Lifecycle ----

        /// Drive frames from `requestAnimationFrame` until `game_stop`.
        #[wasm_bindgen]
        pub fn game_start() {
            let running = LOOP.with(|cell| {
                cell.borrow().as_ref().is_some_and(|handle| !handle.is_stopped())
            });
            if running {
                return;
            }
            let handle = $crate::frame_loop::start(
                std::rc::Rc::new($crate::RafScheduler),
                |timestamp| {
                    with_runner(|r| r.frame(timestamp));
                },
            );
            LOOP.with(|cell| *cell.borrow_mut() = Some(handle));
        }

        #[wasm_bindgen]
        pub fn game_stop() {
            LOOP.with(|cell| {
                if let Some(handle) = cell.borrow_mut().take() {
                    handle.stop();
                    log::info!("{}: stopped after {} frames", $game_name, handle.frame_count());
                }
            });
        }

        /// Host-driven alternative to `game_start`.
        #[wasm_bindgen]
        pub fn game_tick(dt: f32) {
            with_runner(|r| r.tick(dt));
        }

        // ---- Input ----

        #[wasm_bindgen]
        pub fn game_button(id: &str) {
            with_runner(|r| r.push_input($crate::InputEvent::Button { id: id.to_string() }));
        }

        #[wasm_bindgen]
        pub fn game_pointer_down(x: f32, y: f32) {
            with_runner(|r| r.push_input($crate::InputEvent::PointerDown { x, y }));
        }

        #[wasm_bindgen]
        pub fn game_pointer_up(x: f32, y: f32) {
            with_runner(|r| r.push_input($crate::InputEvent::PointerUp { x, y }));
        }

        #[wasm_bindgen]
        pub fn game_pointer_move(x: f32, y: f32) {
            with_runner(|r| r.push_input($crate::InputEvent::PointerMove { x, y }));
        }

        #[wasm_bindgen]
        pub fn game_wheel(delta_y: f32) {
            with_runner(|r| r.push_input($crate::InputEvent::Wheel { delta_y }));
        }

        #[wasm_bindgen]
        pub fn game_resize(width: f32, height: f32) {
            with_runner(|r| r.resize(width, height));
        }

        #[wasm_bindgen]
        pub fn game_load_manifest(json: &str) {
            with_runner(|r| r.load_manifest(json));
        }

        // ---- Data accessors ----

        #[wasm_bindgen]
        pub fn get_buffer_ptr() -> *const f32 {
            with_runner(|r| r.renderer().as_ptr()).unwrap_or(std::ptr::null())
        }

        #[wasm_bindgen]
        pub fn get_buffer_total_floats() -> u32 {
            with_runner(|r| r.buffer_total_floats()).unwrap_or(0)
        }

        #[wasm_bindgen]
        pub fn get_frame_counter() -> u32 {
            with_runner(|r| r.renderer().frame_counter()).unwrap_or(0)
        }

        #[wasm_bindgen]
        pub fn get_texture_count() -> u32 {
            with_runner(|r| r.texture_count()).unwrap_or(0)
        }

        #[wasm_bindgen]
        pub fn get_texture_path(index: u32) -> Option<String> {
            with_runner(|r| r.texture_path(index)).flatten()
        }

        // ---- Capacity accessors ----

        #[wasm_bindgen]
        pub fn get_max_instances() -> u32 {
            with_runner(|r| r.max_instances()).unwrap_or(0)
        }

        #[wasm_bindgen]
        pub fn get_max_lights() -> u32 {
            with_runner(|r| r.max_lights()).unwrap_or(0)
        }

        #[wasm_bindgen]
        pub fn get_max_events() -> u32 {
            with_runner(|r| r.max_events()).unwrap_or(0)
        }
    };
}
