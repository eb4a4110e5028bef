pub mod assets;
pub mod calibrate;
pub mod constants;
pub mod events;
pub mod maze;
pub mod resources;
pub mod systems;

pub use maze::{GenParams, GeneratedWorld, generate_maze};
