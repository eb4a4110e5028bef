pub mod assets;
pub mod components;
pub mod constants;
pub mod layout;
pub mod map;
pub mod markers;
