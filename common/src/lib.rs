//! Shared windowing, GPU and camera plumbing for the atom viewer.

pub mod camera;
pub mod graphics;

pub use camera::*;
pub use graphics::*;
