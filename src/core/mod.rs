pub mod asset;
pub mod color;
pub mod environment;
pub mod orientation;
pub mod particles;
pub mod pointer;
pub mod render_loop;
pub mod scene;
pub mod viewport;

pub use asset::*;
pub use color::*;
pub use environment::*;
pub use orientation::*;
pub use particles::*;
pub use pointer::*;
pub use render_loop::*;
pub use scene::*;
pub use viewport::*;

// Shader bundled as a string constant
pub static SCENE_WGSL: &str = include_str!("../../shaders/scene.wgsl");
