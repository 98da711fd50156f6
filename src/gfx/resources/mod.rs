// src/gfx/resources/mod.rs
//! GPU resource management
//!
//! Materials, uniform blocks, bind groups and depth textures.

pub mod draw_bindings;
pub mod global_bindings;
pub mod material;
pub mod texture_resource;

// Re-export main types
pub use draw_bindings::{DrawBindings, DrawUniform, SurfaceGpu};
pub use global_bindings::{GlobalBindings, GlobalUBO, GlobalUniform};
pub use material::{Material, Shading};
pub use texture_resource::TextureResource;
