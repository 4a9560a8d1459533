pub mod defaults;
pub mod render;
