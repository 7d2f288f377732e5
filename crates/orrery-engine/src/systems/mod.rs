pub mod render;
pub mod lighting;
