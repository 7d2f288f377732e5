//! Solar System — sun and nine bodies turning on fixed rates, with three
//! camera presets and free orbiting in between.
//!
//! Per frame: launch a waiting camera transition, spin every body, then
//! revolve every orbit pivot. Rates are per frame, not per second; the angle
//! after frame N is `N × rate` wrapped into `[0, 2π)`.

use std::f64::consts::TAU;

use orrery_engine::{EngineContext, Game, GameConfig, InputEvent, InputQueue, NodeId, TransformGraph};

use crate::bodies::{BODIES, SUN_SPIN};
use crate::scene::{self, SolarScene};
use crate::view::ViewController;

pub struct SolarSystem {
    view: ViewController,
    scene: Option<SolarScene>,
    frames: u64,
}

impl SolarSystem {
    pub fn new() -> Self {
        Self {
            view: ViewController::new(),
            scene: None,
            frames: 0,
        }
    }

    pub fn view(&self) -> &ViewController {
        &self.view
    }

    pub fn scene(&self) -> Option<&SolarScene> {
        self.scene.as_ref()
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }
}

impl Default for SolarSystem {
    fn default() -> Self {
        Self::new()
    }
}

/// Angle after `frames` frames at `rate` radians per frame, in `[0, 2π)`.
pub fn angle_at(frames: u64, rate: f64) -> f32 {
    (frames as f64 * rate).rem_euclid(TAU) as f32
}

fn turn(graph: &mut TransformGraph, id: NodeId, frames: u64, rate: f64) {
    if let Some(local) = graph.get_local_mut(id) {
        local.set_yaw(angle_at(frames, rate));
    }
}

impl Game for SolarSystem {
    fn config(&self) -> GameConfig {
        GameConfig {
            max_lights: 2,
            max_events: 8,
            ..GameConfig::default()
        }
    }

    fn init(&mut self, ctx: &mut EngineContext) {
        let solar = scene::assemble(ctx);
        log::info!(
            "solar system: {} bodies, {} rings",
            solar.planets.len(),
            solar.planets.iter().filter(|p| p.ring.is_some()).count()
        );
        self.scene = Some(solar);
    }

    fn update(&mut self, ctx: &mut EngineContext, input: &InputQueue) {
        for event in input.iter() {
            if let InputEvent::Button { id } = event {
                self.view.select_button(id);
            }
        }
        self.view.launch_pending(ctx);

        let Some(solar) = &self.scene else { return };
        self.frames += 1;
        let n = self.frames;

        turn(&mut ctx.graph, solar.sun, n, SUN_SPIN);
        for (planet, desc) in solar.planets.iter().zip(BODIES.iter()) {
            turn(&mut ctx.graph, planet.body, n, desc.spin_rate);
        }
        for (planet, desc) in solar.planets.iter().zip(BODIES.iter()) {
            turn(&mut ctx.graph, planet.orbit, n, desc.orbit_rate);
        }
    }
}
