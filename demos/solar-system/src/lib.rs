use wasm_bindgen::prelude::*;

pub mod bodies;
pub mod game;
pub mod planet;
pub mod scene;
pub mod view;
use game::SolarSystem;

orrery_web::export_game!(SolarSystem, "solar-system");
