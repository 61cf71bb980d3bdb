//! Pointer-steered 3D page background.
//!
//! The core (`core`, `config`, `draw_list`) is platform-free and tested on the
//! host; the browser glue below is only built for `wasm32`.

pub mod config;
pub mod constants;
pub mod core;
pub mod draw_list;

#[cfg(target_arch = "wasm32")]
mod app;
#[cfg(target_arch = "wasm32")]
mod dom;
#[cfg(target_arch = "wasm32")]
mod events;
#[cfg(target_arch = "wasm32")]
mod frame;
#[cfg(target_arch = "wasm32")]
mod hooks;
#[cfg(target_arch = "wasm32")]
mod loader;
#[cfg(target_arch = "wasm32")]
mod render;

#[cfg(target_arch = "wasm32")]
pub use app::{start, stop_background};
