//! Small wgpu helpers shared by the render engine
//!
//! Builders for bind group layouts and bind groups, the handful of binding
//! types the scene uses, and change-tracking uniform buffers.

pub mod binding_builder;
pub mod binding_types;
pub mod uniform_buffer;

pub use binding_builder::{BindGroupBuilder, BindGroupLayoutBuilder, BindGroupLayoutWithDesc};
pub use uniform_buffer::UniformBuffer;
