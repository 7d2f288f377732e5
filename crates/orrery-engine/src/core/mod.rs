pub mod frame_loop;
pub mod scene;
pub mod time;
