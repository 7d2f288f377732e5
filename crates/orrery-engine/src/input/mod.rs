pub mod controls;
pub mod queue;
